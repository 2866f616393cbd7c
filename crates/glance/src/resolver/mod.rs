/*!
The resolution engine.

# Module Structure

- `mod.rs` - `Glance` struct, movement bookkeeping, navigation memory
- `label.rs` - string resolution (listing tier, then general tier)
- `numeric.rs` - integer resolution
- `condition.rs` - boolean resolution

Resolution itself is stateless: every call walks the hierarchy through
the borrowed [`GuiServices`] and returns `None` when the asked fact is
not meaningful right now. The only cross-call state is the movement
tracker and the remembered next/previous navigation targets, both fed
by external collaborators.
*/

mod condition;
mod label;
mod numeric;

use crate::gui::GuiServices;
use crate::movement::MovementTracker;
use crate::types::{ControlId, InfoRequest, WindowId};

/// Resolves info requests against the live window hierarchy.
///
/// All calls are expected on the one logical update thread; there is no
/// internal locking.
///
/// # Example
///
/// ```ignore
/// use glance::{Glance, GuiServices, InfoCode, InfoRequest};
///
/// let mut glance = Glance::new();
///
/// // Input layer, on focus movement:
/// glance.notify_container_moved(list_id, true, false);
///
/// // Skin evaluation, once per info code needed this frame:
/// let gui = GuiServices { windows: &manager, strings: &strings, settings: &settings };
/// let moved = glance.resolve_bool(
///   &gui,
///   &InfoRequest::new(InfoCode::ContainerMoveNext),
///   context,
/// );
///
/// // Update loop, once per cycle:
/// glance.reset_movement_tracking();
/// ```
#[derive(Debug, Default)]
pub struct Glance {
  movement: MovementTracker,
  next_window: Option<WindowId>,
  prev_window: Option<WindowId>,
}

impl Glance {
  /// Create a resolver with no recorded movement or navigation memory.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Resolve a string-valued fact. `None` means the code is not a
  /// string fact or its preconditions are not met right now.
  pub fn resolve_label(
    &self,
    gui: &GuiServices<'_>,
    request: &InfoRequest,
    context: WindowId,
  ) -> Option<String> {
    label::resolve(gui, request, context)
  }

  /// Resolve an integer-valued fact.
  pub fn resolve_int(
    &self,
    gui: &GuiServices<'_>,
    request: &InfoRequest,
    context: WindowId,
  ) -> Option<i64> {
    numeric::resolve(gui, request, context)
  }

  /// Resolve a boolean-valued fact.
  pub fn resolve_bool(
    &self,
    gui: &GuiServices<'_>,
    request: &InfoRequest,
    context: WindowId,
  ) -> Option<bool> {
    condition::resolve(self, gui, request, context)
  }

  /// Record a movement event for a container. Called by the input
  /// layer, never by resolution.
  pub fn notify_container_moved(
    &mut self,
    container: ControlId,
    toward_next: bool,
    scrolling: bool,
  ) {
    self.movement.record(container, toward_next, scrolling);
  }

  /// Forget all recorded movement. The update loop must call this
  /// exactly once between rounds of movement notifications and the
  /// movement queries that depend on them.
  pub fn reset_movement_tracking(&mut self) {
    self.movement.reset();
  }

  /// Remember the window a navigation is about to move to.
  pub fn set_next_window(&mut self, window: Option<WindowId>) {
    self.next_window = window;
  }

  /// Remember the window a navigation is moving away from.
  pub fn set_previous_window(&mut self, window: Option<WindowId>) {
    self.prev_window = window;
  }
}
