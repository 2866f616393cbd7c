/*! Integer resolution. */

use crate::gui::{GuiServices, ProgressDialog, Window, WindowManager};
use crate::types::{InfoCode, InfoRequest, WindowId};

pub(super) fn resolve(
  gui: &GuiServices<'_>,
  request: &InfoRequest,
  _context: WindowId,
) -> Option<i64> {
  match request.code() {
    InfoCode::SystemProgressBar => {
      let dialog = gui
        .windows
        .window(WindowId::DIALOG_PROGRESS)?
        .progress_dialog()?;
      // Zero while the dialog sits idle; a miss only when it does not
      // exist at all.
      if dialog.is_running() {
        Some(i64::from(dialog.percentage()))
      } else {
        Some(0)
      }
    }
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::gui::fixtures::*;
  use crate::resolver::Glance;

  const CTX: WindowId = WindowId(10);

  fn resolve(harness: &Harness) -> Option<i64> {
    Glance::new().resolve_int(
      &harness.services(),
      &InfoRequest::new(InfoCode::SystemProgressBar),
      CTX,
    )
  }

  #[test]
  fn missing_progress_dialog_is_a_miss() {
    let harness = Harness::new(FakeWindowManager::new());
    assert_eq!(resolve(&harness), None);
  }

  #[test]
  fn idle_progress_dialog_reports_zero() {
    let mut dialog = FakeWindow::new(101);
    dialog.progress = Some(FakeProgress {
      running: false,
      percentage: 60,
    });
    let harness = Harness::new(FakeWindowManager::new().with_window(dialog));
    assert_eq!(resolve(&harness), Some(0));
  }

  #[test]
  fn running_progress_dialog_reports_percentage() {
    let mut dialog = FakeWindow::new(101);
    dialog.progress = Some(FakeProgress {
      running: true,
      percentage: 60,
    });
    let harness = Harness::new(FakeWindowManager::new().with_window(dialog));
    assert_eq!(resolve(&harness), Some(60));
  }

  #[test]
  fn other_codes_are_not_integer_facts() {
    let harness = Harness::new(FakeWindowManager::new());
    let value = Glance::new().resolve_int(
      &harness.services(),
      &InfoRequest::new(InfoCode::ContainerFolderPath),
      CTX,
    );
    assert_eq!(value, None);
  }
}
