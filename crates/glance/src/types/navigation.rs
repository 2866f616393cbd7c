/*!
Positional facts and conditions a scrolling control reports about itself.

Controls that present a scrollable set of items (item containers, group
lists, paged text boxes) answer these from their own internal state; the
resolver never inspects what kind of control it is talking to.
*/

use serde::{Deserialize, Serialize};

/// A positional fact a control can render as a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationFact {
  /// Total number of pages.
  NumPages,
  /// Page currently in view, one-based.
  CurrentPage,
  /// Number of items on the current page.
  NumItems,
  /// Number of items overall, parent entry included.
  NumAllItems,
  /// Number of non-folder items overall.
  NumNonFolderItems,
  /// Offset of the focus within the visible page.
  Position,
  /// One-based ordinal of the focused item.
  CurrentItem,
  /// Row of the focused item.
  Row,
  /// Column of the focused item.
  Column,
}

/// A positional condition a control evaluates against its own state.
///
/// The accompanying parameter carries the row/column/position ordinal or
/// sub-item index being asked about; its meaning is up to the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationCondition {
  Row,
  Column,
  Position,
  SubItem,
  HasNext,
  HasPrevious,
  Scrolling,
  Updating,
  HasParentItem,
}
