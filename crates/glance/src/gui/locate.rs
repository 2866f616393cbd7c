/*!
Window and control location helpers.

Queries name their context window, but the window the user is actually
looking at may be a dialog stacked on top of it. Location therefore
walks a fixed fallback chain - context window, topmost modal dialog,
active window - taking the first candidate that exists and satisfies
the requested condition.
*/

use super::traits::{ContentView, Control, Window, WindowManager};
use crate::types::{Listing, WindowId};

/// Condition a located window must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowCondition {
  /// Any window that exists.
  Any,
  /// Window must expose the content-view capability.
  ContentListing,
}

fn satisfies(window: &dyn Window, condition: WindowCondition) -> bool {
  match condition {
    WindowCondition::Any => true,
    WindowCondition::ContentListing => window.content_view().is_some(),
  }
}

/// First window in the fallback chain satisfying `condition`.
pub(crate) fn window_with_condition<'a>(
  windows: &'a dyn WindowManager,
  context: WindowId,
  condition: WindowCondition,
) -> Option<&'a dyn Window> {
  let candidates = [
    Some(context),
    windows.topmost_modal_dialog(),
    windows.active_window(),
  ];
  for id in candidates.into_iter().flatten() {
    if let Some(window) = windows.window(id) {
      if satisfies(window, condition) {
        return Some(window);
      }
    }
  }
  log::trace!("no window satisfies {condition:?} for context {context}");
  None
}

/// Content view of the context's content-listing window.
pub(crate) fn content_view<'a>(
  windows: &'a dyn WindowManager,
  context: WindowId,
) -> Option<&'a dyn ContentView> {
  window_with_condition(windows, context, WindowCondition::ContentListing)
    .and_then(Window::content_view)
}

/// Listing shown by the context's content-listing window.
pub(crate) fn listing<'a>(
  windows: &'a dyn WindowManager,
  context: WindowId,
) -> Option<&'a Listing> {
  content_view(windows, context).map(ContentView::listing)
}

/// The container control the context is currently driving: the content
/// view's designated container, else the focused control when it is
/// itself a container.
pub(crate) fn active_container<'a>(
  windows: &'a dyn WindowManager,
  context: WindowId,
) -> Option<&'a dyn Control> {
  let window = window_with_condition(windows, context, WindowCondition::Any)?;
  let control = match window.content_view() {
    Some(view) => window.control(view.view_container())?,
    None => window.focused_control()?,
  };
  control.container().is_some().then_some(control)
}
