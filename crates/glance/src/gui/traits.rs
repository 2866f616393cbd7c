/*!
Collaborator traits consumed by the resolver.

These traits define the contract between the resolver and the windowing
layer that owns the real state. The resolver only ever reads through
them - lifecycle and mutation authority stay with the implementors.

Capabilities (content view, container, progress dialog, input dialog)
are exposed through accessors that default to `None`; a window or
control advertises a capability by overriding the accessor. The resolver
calls capabilities and never inspects what concrete kind of object it is
talking to.
*/

use crate::types::{
  ControlId, LabelId, Listing, NavigationCondition, NavigationFact, SortMethod, SortOrder,
  WindowId,
};

/// Settings key holding the configured startup window id.
pub const SETTING_STARTUP_WINDOW: &str = "ui.startupwindow";

/// Window property holding the skin layout file backing a window.
pub const PROPERTY_LAYOUT_FILE: &str = "layoutfile";

/// The window manager: lookup, focus order and global dialog state.
pub trait WindowManager {
  /// Window by id, if it currently exists.
  fn window(&self, id: WindowId) -> Option<&dyn Window>;

  /// The active (topmost non-dialog) window.
  fn active_window(&self) -> Option<WindowId>;

  /// The topmost modal dialog, if one is open.
  fn topmost_modal_dialog(&self) -> Option<WindowId>;

  /// Translate a window name from a skin expression to an id.
  fn window_id_by_name(&self, name: &str) -> Option<WindowId>;

  fn is_window_visible(&self, id: WindowId) -> bool;

  fn is_window_active(&self, id: WindowId) -> bool;

  fn is_dialog_topmost(&self, id: WindowId) -> bool;

  fn is_modal_dialog_topmost(&self, id: WindowId) -> bool;

  /// Whether any modal dialog is open.
  fn has_modal_dialog(&self) -> bool;

  /// Whether any modal dialog is open and visible.
  fn has_visible_modal_dialog(&self) -> bool;

  /// The window the user is looking at: topmost modal dialog, else the
  /// active window.
  fn active_window_or_dialog(&self) -> Option<WindowId> {
    self.topmost_modal_dialog().or_else(|| self.active_window())
  }
}

/// A window or dialog in the hierarchy.
pub trait Window {
  fn id(&self) -> WindowId;

  /// Arbitrary string property set on the window.
  fn property(&self, _key: &str) -> Option<String> {
    None
  }

  /// Control by id. Only reliable for ids unique within the window.
  fn control(&self, _id: ControlId) -> Option<&dyn Control> {
    None
  }

  /// The control currently holding focus.
  fn focused_control(&self) -> Option<&dyn Control> {
    None
  }

  fn focused_control_id(&self) -> Option<ControlId> {
    self.focused_control().map(Control::id)
  }

  /// Whether the group `group` holds focus; `control` narrows the check
  /// to one control inside the group, zero accepts any.
  fn control_group_has_focus(&self, _group: ControlId, _control: u32) -> bool {
    false
  }

  /// Content-listing capability: present on windows that browse a
  /// navigable item listing.
  fn content_view(&self) -> Option<&dyn ContentView> {
    None
  }

  /// Media-content capability: present on info dialogs that describe a
  /// single piece of media ("movies", "songs", ...).
  fn media_content(&self) -> Option<String> {
    None
  }

  /// Progress-reporting capability.
  fn progress_dialog(&self) -> Option<&dyn ProgressDialog> {
    None
  }

  /// Text/numeric entry capability.
  fn input_dialog(&self) -> Option<&dyn InputDialog> {
    None
  }
}

/// Capability of windows that display a navigable item listing.
pub trait ContentView {
  /// Snapshot of the directory currently shown.
  fn listing(&self) -> &Listing;

  /// Id of the control designated to render the listing.
  fn view_container(&self) -> ControlId;

  /// Number of view modes the window can cycle through.
  fn view_count(&self) -> usize;

  /// Sort state, if the window sorts its listing.
  fn view_state(&self) -> Option<&dyn ViewState> {
    None
  }

  /// Whether the listing supports attribute filtering.
  fn can_filter_advanced(&self) -> bool {
    false
  }

  /// Whether a filter is currently applied.
  fn is_filtered(&self) -> bool {
    false
  }
}

/// A control inside a window.
pub trait Control {
  fn id(&self) -> ControlId;

  fn is_visible(&self) -> bool {
    true
  }

  fn is_disabled(&self) -> bool {
    false
  }

  /// Human-readable description (label text, caption).
  fn description(&self) -> String {
    String::new()
  }

  /// Description part by index, for controls with several label slots.
  fn description_by_index(&self, _index: u32) -> String {
    String::new()
  }

  /// Positional fact rendered as a label. `None` when the control has
  /// nothing to say about the fact.
  fn navigation_label(&self, _fact: NavigationFact) -> Option<String> {
    None
  }

  /// Positional condition evaluated against the control's own state.
  fn navigation_condition(&self, _condition: NavigationCondition, _param: u32) -> bool {
    false
  }

  /// Item-container capability.
  fn container(&self) -> Option<&dyn Container> {
    None
  }
}

/// Capability of controls that render an item listing.
pub trait Container {
  /// Label of the active view mode ("List", "Wall", ...).
  fn view_label(&self) -> String;

  /// Identifier of the item at `index`, if one exists.
  fn item_id(&self, index: usize) -> Option<u64>;
}

/// Sort state of a content-listing window.
pub trait ViewState {
  fn sort_method(&self) -> SortMethod;

  fn sort_order(&self) -> SortOrder;

  /// Localized label id for the active sort method.
  fn sort_method_label(&self) -> LabelId;

  /// Localized label id for the active sort order.
  fn sort_order_label(&self) -> LabelId;
}

/// Capability of the progress dialog.
pub trait ProgressDialog {
  /// Whether the dialog is currently running (open and counting).
  fn is_running(&self) -> bool;

  /// Completion percentage, 0-100.
  fn percentage(&self) -> u32;
}

/// Capability of text and numeric entry dialogs.
pub trait InputDialog {
  fn is_active(&self) -> bool;

  /// Whether the entered input is masked (PIN/password entry).
  fn is_input_masked(&self) -> bool;
}

/// Localization lookup.
pub trait Localizer {
  /// Display string for a label id; empty when unknown.
  fn localize(&self, label: LabelId) -> String;
}

/// Read access to application settings.
pub trait Settings {
  /// Integer setting by key; zero when unset.
  fn int(&self, key: &str) -> i64;
}

/// Borrowed bundle of the collaborators a resolution call queries.
///
/// Rebuilt per call; the resolver never stores it.
#[derive(Clone, Copy)]
pub struct GuiServices<'a> {
  pub windows: &'a dyn WindowManager,
  pub strings: &'a dyn Localizer,
  pub settings: &'a dyn Settings,
}

impl std::fmt::Debug for GuiServices<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GuiServices").finish_non_exhaustive()
  }
}
