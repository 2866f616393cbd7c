/*! Branded ID and code types for type-safe entity references. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Window identifier.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
pub struct WindowId(pub u32);

impl WindowId {
  /// Modal progress dialog. Fixed id assigned by the windowing layer.
  pub const DIALOG_PROGRESS: WindowId = WindowId(101);
  /// On-screen keyboard dialog.
  pub const DIALOG_KEYBOARD: WindowId = WindowId(103);
  /// Numeric entry dialog (PIN, seek position).
  pub const DIALOG_NUMERIC: WindowId = WindowId(109);
}

/// Control identifier, unique within its owning window.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
pub struct ControlId(pub u32);

/// Localized string identifier.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
pub struct LabelId(pub u32);

/// Sort method code as reported by a view state.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
pub struct SortMethod(pub u32);

/// Sort order code as reported by a view state.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
pub struct SortOrder(pub u32);
