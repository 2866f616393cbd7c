/*!
Glance - GUI info query layer

Resolves abstract info requests (opaque codes plus optional arguments)
into concrete values describing the live window/container/control
hierarchy. The skin layer asks; the windowing collaborators answer
through read-only traits; nothing here owns GUI state beyond the
per-container movement tracker.

```ignore
use glance::{Glance, GuiServices, InfoCode, InfoRequest, WindowId};

let mut glance = Glance::new();
let gui = GuiServices {
  windows: &window_manager,
  strings: &localizer,
  settings: &settings,
};

// One call per info code needed for the current frame.
let context = WindowId(10);
let path = glance.resolve_label(
  &gui,
  &InfoRequest::new(InfoCode::ContainerFolderPath),
  context,
);
let scrolled = glance.resolve_bool(
  &gui,
  &InfoRequest::new(InfoCode::ContainerScrollNext),
  context,
);

// Fed by the input layer and the update loop respectively:
glance.notify_container_moved(list_id, true, true);
glance.reset_movement_tracking();
```
*/

mod movement;
mod resolver;
mod text;

pub mod gui;

mod types;
pub use types::*;

pub use crate::gui::GuiServices;
pub use crate::resolver::Glance;
