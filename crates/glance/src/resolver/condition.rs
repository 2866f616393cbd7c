/*!
Boolean resolution.

The largest surface. Codes that positively match resolve to a value;
codes whose preconditions fail fall through unmatched, so the caller
can tell "false" apart from "not applicable right now".
*/

use super::Glance;
use crate::gui::locate::{self, WindowCondition};
use crate::gui::{
  Container, ContentView, Control, GuiServices, InputDialog, ViewState, Window, WindowManager,
  PROPERTY_LAYOUT_FILE,
};
use crate::movement::MovementQuery;
use crate::text;
use crate::types::{ControlId, InfoCode, InfoRequest, NavigationCondition, WindowId};

pub(super) fn resolve(
  glance: &Glance,
  gui: &GuiServices<'_>,
  request: &InfoRequest,
  context: WindowId,
) -> Option<bool> {
  match request.code() {
    // === Container: listing membership ===
    InfoCode::ContainerHasFiles | InfoCode::ContainerHasFolders => {
      let listing = locate::listing(gui.windows, context)?;
      let wants_folders = request.code() == InfoCode::ContainerHasFolders;
      let found = listing.items.iter().any(|item| {
        if wants_folders {
          item.is_folder && !item.is_parent
        } else {
          !item.is_folder
        }
      });
      // Only a positive match resolves; an empty scan falls through.
      found.then_some(true)
    }

    // === Container: listing flags ===
    InfoCode::ContainerStacked => {
      Some(locate::listing(gui.windows, context)?.property_flag("stacked"))
    }
    InfoCode::ContainerHasThumb => Some(locate::listing(gui.windows, context)?.has_art("thumb")),
    InfoCode::ContainerCanFilter | InfoCode::ContainerCanFilterAdvanced => {
      // Both codes currently map to the same capability.
      Some(locate::content_view(gui.windows, context)?.can_filter_advanced())
    }
    InfoCode::ContainerFiltered => {
      Some(locate::content_view(gui.windows, context)?.is_filtered())
    }
    InfoCode::ContainerSortMethod => {
      let state = locate::content_view(gui.windows, context)?.view_state()?;
      Some(u32::from(state.sort_method()) == request.raw_target())
    }
    InfoCode::ContainerSortDirection => {
      let state = locate::content_view(gui.windows, context)?.view_state()?;
      Some(u32::from(state.sort_order()) == request.raw_target())
    }
    InfoCode::ContainerContent => {
      // Info dialogs describing a single piece of media win over the
      // listing window underneath them.
      let mut content = locate::window_with_condition(gui.windows, context, WindowCondition::Any)
        .and_then(|window| window.media_content())
        .unwrap_or_default();
      if content.is_empty() {
        if let Some(listing) = locate::listing(gui.windows, context) {
          content.clone_from(&listing.content);
        }
      }
      Some(content.eq_ignore_ascii_case(request.key()))
    }

    // === Container: positional conditions ===
    InfoCode::ContainerRow
    | InfoCode::ContainerColumn
    | InfoCode::ContainerPosition
    | InfoCode::ContainerSubItem
    | InfoCode::ContainerHasNext
    | InfoCode::ContainerHasPrevious
    | InfoCode::ContainerScrolling
    | InfoCode::ContainerIsUpdating
    | InfoCode::ContainerHasParentItem => {
      let condition = navigation_condition(request.code())?;
      let control = match request.target_control() {
        Some(id) => {
          locate::window_with_condition(gui.windows, context, WindowCondition::Any)?.control(id)?
        }
        None => locate::active_container(gui.windows, context)?,
      };
      Some(control.navigation_condition(condition, request.param()))
    }
    InfoCode::ContainerHasFocus => {
      let window = locate::window_with_condition(gui.windows, context, WindowCondition::Any)?;
      let control = window.control(request.target_control()?)?;
      let container = control.container()?;
      (container.item_id(0)? == u64::from(request.param())).then_some(true)
    }

    // === Container: transient movement ===
    InfoCode::ContainerScrollPrevious
    | InfoCode::ContainerMovePrevious
    | InfoCode::ContainerMoveNext
    | InfoCode::ContainerScrollNext => {
      let query = movement_query(request.code())?;
      let container = match request.target_control() {
        Some(id) => id,
        // No target: only meaningful for the listing the user is in.
        None => locate::content_view(gui.windows, context)?.view_container(),
      };
      glance.movement.classify(container, query)
    }

    // === Control ===
    InfoCode::ControlIsVisible => {
      let window = locate::window_with_condition(gui.windows, context, WindowCondition::Any)?;
      Some(window.control(request.target_control()?)?.is_visible())
    }
    InfoCode::ControlIsEnabled => {
      let window = locate::window_with_condition(gui.windows, context, WindowCondition::Any)?;
      Some(!window.control(request.target_control()?)?.is_disabled())
    }
    InfoCode::ControlHasFocus => {
      let window = locate::window_with_condition(gui.windows, context, WindowCondition::Any)?;
      Some(window.focused_control_id() == Some(ControlId(request.raw_target())))
    }
    InfoCode::ControlGroupHasFocus => {
      let window = locate::window_with_condition(gui.windows, context, WindowCondition::Any)?;
      Some(window.control_group_has_focus(ControlId(request.raw_target()), request.param()))
    }

    // === Window ===
    InfoCode::WindowIsMedia => {
      let window = gui.windows.window(gui.windows.active_window()?)?;
      Some(window.content_view().is_some())
    }
    InfoCode::WindowIs => {
      let target = request.target_window()?;
      let window = locate::window_with_condition(gui.windows, context, WindowCondition::Any)?;
      Some(window.id() == target)
    }
    InfoCode::WindowIsVisible => Some(window_predicate(gui.windows, request, |m, id| {
      m.is_window_visible(id)
    })),
    InfoCode::WindowIsActive => Some(window_predicate(gui.windows, request, |m, id| {
      m.is_window_active(id)
    })),
    InfoCode::WindowIsDialogTopmost => Some(window_predicate(gui.windows, request, |m, id| {
      m.is_dialog_topmost(id)
    })),
    InfoCode::WindowIsModalDialogTopmost => {
      Some(window_predicate(gui.windows, request, |m, id| {
        m.is_modal_dialog_topmost(id)
      }))
    }
    InfoCode::WindowNext => navigation_target(gui.windows, request, glance.next_window),
    InfoCode::WindowPrevious => navigation_target(gui.windows, request, glance.prev_window),

    // === System ===
    InfoCode::SystemHasActiveModalDialog => Some(gui.windows.has_modal_dialog()),
    InfoCode::SystemHasVisibleModalDialog => Some(gui.windows.has_visible_modal_dialog()),
    InfoCode::SystemHasInputMasked => {
      // Numeric entry wins when both dialogs exist.
      let masked = [WindowId::DIALOG_NUMERIC, WindowId::DIALOG_KEYBOARD]
        .into_iter()
        .find_map(|id| {
          let dialog = gui.windows.window(id)?.input_dialog()?;
          dialog.is_active().then(|| dialog.is_input_masked())
        })
        .unwrap_or(false);
      Some(masked)
    }

    _ => None,
  }
}

/// Window predicate by explicit id, else by name translated through the
/// window manager. Unknown names evaluate to `false`, not to a miss.
fn window_predicate(
  windows: &dyn WindowManager,
  request: &InfoRequest,
  predicate: impl Fn(&dyn WindowManager, WindowId) -> bool,
) -> bool {
  request
    .target_window()
    .or_else(|| windows.window_id_by_name(request.key()))
    .is_some_and(|id| predicate(windows, id))
}

/// Compare against a remembered navigation target: by id when one is
/// given, else by layout file name - the name form only resolves on a
/// positive match.
fn navigation_target(
  windows: &dyn WindowManager,
  request: &InfoRequest,
  remembered: Option<WindowId>,
) -> Option<bool> {
  if let Some(target) = request.target_window() {
    return Some(remembered == Some(target));
  }
  let window = windows.window(remembered?)?;
  let layout = window.property(PROPERTY_LAYOUT_FILE)?;
  text::file_name(&layout)
    .eq_ignore_ascii_case(request.key())
    .then_some(true)
}

const fn navigation_condition(code: InfoCode) -> Option<NavigationCondition> {
  match code {
    InfoCode::ContainerRow => Some(NavigationCondition::Row),
    InfoCode::ContainerColumn => Some(NavigationCondition::Column),
    InfoCode::ContainerPosition => Some(NavigationCondition::Position),
    InfoCode::ContainerSubItem => Some(NavigationCondition::SubItem),
    InfoCode::ContainerHasNext => Some(NavigationCondition::HasNext),
    InfoCode::ContainerHasPrevious => Some(NavigationCondition::HasPrevious),
    InfoCode::ContainerScrolling => Some(NavigationCondition::Scrolling),
    InfoCode::ContainerIsUpdating => Some(NavigationCondition::Updating),
    InfoCode::ContainerHasParentItem => Some(NavigationCondition::HasParentItem),
    _ => None,
  }
}

const fn movement_query(code: InfoCode) -> Option<MovementQuery> {
  match code {
    InfoCode::ContainerScrollPrevious => Some(MovementQuery::ScrollPrevious),
    InfoCode::ContainerMovePrevious => Some(MovementQuery::MovePrevious),
    InfoCode::ContainerMoveNext => Some(MovementQuery::MoveNext),
    InfoCode::ContainerScrollNext => Some(MovementQuery::ScrollNext),
    _ => None,
  }
}
