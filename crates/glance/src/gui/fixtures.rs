/*! In-memory fakes of the collaborator traits for resolver tests. */

use super::traits::{
  Container, ContentView, Control, GuiServices, InputDialog, Localizer, ProgressDialog,
  Settings, ViewState, Window, WindowManager,
};
use crate::types::{
  ControlId, LabelId, Listing, NavigationCondition, NavigationFact, SortMethod, SortOrder,
  WindowId,
};
use std::collections::HashMap;

#[derive(Default)]
pub(crate) struct FakeContainer {
  pub view_label: String,
  pub item_ids: Vec<u64>,
}

impl Container for FakeContainer {
  fn view_label(&self) -> String {
    self.view_label.clone()
  }

  fn item_id(&self, index: usize) -> Option<u64> {
    self.item_ids.get(index).copied()
  }
}

pub(crate) struct FakeControl {
  pub id: ControlId,
  pub visible: bool,
  pub disabled: bool,
  pub description: String,
  pub descriptions: HashMap<u32, String>,
  pub labels: HashMap<NavigationFact, String>,
  pub conditions: HashMap<NavigationCondition, bool>,
  pub container: Option<FakeContainer>,
}

impl FakeControl {
  pub(crate) fn new(id: u32) -> Self {
    Self {
      id: ControlId(id),
      visible: true,
      disabled: false,
      description: String::new(),
      descriptions: HashMap::new(),
      labels: HashMap::new(),
      conditions: HashMap::new(),
      container: None,
    }
  }

  pub(crate) fn with_container(mut self, container: FakeContainer) -> Self {
    self.container = Some(container);
    self
  }

  pub(crate) fn with_description(mut self, description: &str) -> Self {
    self.description = description.to_string();
    self
  }

  pub(crate) fn with_label(mut self, fact: NavigationFact, label: &str) -> Self {
    self.labels.insert(fact, label.to_string());
    self
  }

  pub(crate) fn with_condition(mut self, condition: NavigationCondition, value: bool) -> Self {
    self.conditions.insert(condition, value);
    self
  }
}

impl Control for FakeControl {
  fn id(&self) -> ControlId {
    self.id
  }

  fn is_visible(&self) -> bool {
    self.visible
  }

  fn is_disabled(&self) -> bool {
    self.disabled
  }

  fn description(&self) -> String {
    self.description.clone()
  }

  fn description_by_index(&self, index: u32) -> String {
    self.descriptions.get(&index).cloned().unwrap_or_default()
  }

  fn navigation_label(&self, fact: NavigationFact) -> Option<String> {
    self.labels.get(&fact).cloned()
  }

  fn navigation_condition(&self, condition: NavigationCondition, _param: u32) -> bool {
    self.conditions.get(&condition).copied().unwrap_or(false)
  }

  fn container(&self) -> Option<&dyn Container> {
    self.container.as_ref().map(|c| c as &dyn Container)
  }
}

pub(crate) struct FakeViewState {
  pub method: SortMethod,
  pub order: SortOrder,
  pub method_label: LabelId,
  pub order_label: LabelId,
}

impl ViewState for FakeViewState {
  fn sort_method(&self) -> SortMethod {
    self.method
  }

  fn sort_order(&self) -> SortOrder {
    self.order
  }

  fn sort_method_label(&self) -> LabelId {
    self.method_label
  }

  fn sort_order_label(&self) -> LabelId {
    self.order_label
  }
}

pub(crate) struct FakeContentView {
  pub listing: Listing,
  pub view_container: ControlId,
  pub view_count: usize,
  pub view_state: Option<FakeViewState>,
  pub can_filter_advanced: bool,
  pub filtered: bool,
}

impl Default for FakeContentView {
  fn default() -> Self {
    Self {
      listing: Listing::default(),
      view_container: ControlId(50),
      view_count: 0,
      view_state: None,
      can_filter_advanced: false,
      filtered: false,
    }
  }
}

impl FakeContentView {
  pub(crate) fn with_listing(mut self, listing: Listing) -> Self {
    self.listing = listing;
    self
  }
}

impl ContentView for FakeContentView {
  fn listing(&self) -> &Listing {
    &self.listing
  }

  fn view_container(&self) -> ControlId {
    self.view_container
  }

  fn view_count(&self) -> usize {
    self.view_count
  }

  fn view_state(&self) -> Option<&dyn ViewState> {
    self.view_state.as_ref().map(|s| s as &dyn ViewState)
  }

  fn can_filter_advanced(&self) -> bool {
    self.can_filter_advanced
  }

  fn is_filtered(&self) -> bool {
    self.filtered
  }
}

pub(crate) struct FakeProgress {
  pub running: bool,
  pub percentage: u32,
}

impl ProgressDialog for FakeProgress {
  fn is_running(&self) -> bool {
    self.running
  }

  fn percentage(&self) -> u32 {
    self.percentage
  }
}

pub(crate) struct FakeInput {
  pub active: bool,
  pub masked: bool,
}

impl InputDialog for FakeInput {
  fn is_active(&self) -> bool {
    self.active
  }

  fn is_input_masked(&self) -> bool {
    self.masked
  }
}

pub(crate) struct FakeWindow {
  pub id: WindowId,
  pub properties: HashMap<String, String>,
  pub controls: Vec<FakeControl>,
  pub focused: Option<ControlId>,
  pub group_focus: Option<(ControlId, u32)>,
  pub view: Option<FakeContentView>,
  pub media_content: Option<String>,
  pub progress: Option<FakeProgress>,
  pub input: Option<FakeInput>,
}

impl FakeWindow {
  pub(crate) fn new(id: u32) -> Self {
    Self {
      id: WindowId(id),
      properties: HashMap::new(),
      controls: Vec::new(),
      focused: None,
      group_focus: None,
      view: None,
      media_content: None,
      progress: None,
      input: None,
    }
  }

  pub(crate) fn with_view(mut self, view: FakeContentView) -> Self {
    self.view = Some(view);
    self
  }

  pub(crate) fn with_control(mut self, control: FakeControl) -> Self {
    self.controls.push(control);
    self
  }

  pub(crate) fn with_property(mut self, key: &str, value: &str) -> Self {
    self.properties.insert(key.to_string(), value.to_string());
    self
  }

  pub(crate) fn with_focus(mut self, control: u32) -> Self {
    self.focused = Some(ControlId(control));
    self
  }
}

impl Window for FakeWindow {
  fn id(&self) -> WindowId {
    self.id
  }

  fn property(&self, key: &str) -> Option<String> {
    self.properties.get(key).cloned()
  }

  fn control(&self, id: ControlId) -> Option<&dyn Control> {
    self.controls.iter().find(|c| c.id == id).map(|c| c as &dyn Control)
  }

  fn focused_control(&self) -> Option<&dyn Control> {
    self.focused.and_then(|id| self.control(id))
  }

  fn control_group_has_focus(&self, group: ControlId, control: u32) -> bool {
    match self.group_focus {
      Some((focused_group, focused_control)) => {
        focused_group == group && (control == 0 || focused_control == control)
      }
      None => false,
    }
  }

  fn content_view(&self) -> Option<&dyn ContentView> {
    self.view.as_ref().map(|v| v as &dyn ContentView)
  }

  fn media_content(&self) -> Option<String> {
    self.media_content.clone()
  }

  fn progress_dialog(&self) -> Option<&dyn ProgressDialog> {
    self.progress.as_ref().map(|p| p as &dyn ProgressDialog)
  }

  fn input_dialog(&self) -> Option<&dyn InputDialog> {
    self.input.as_ref().map(|i| i as &dyn InputDialog)
  }
}

#[derive(Default)]
pub(crate) struct FakeWindowManager {
  pub windows: Vec<FakeWindow>,
  pub active: Option<WindowId>,
  pub topmost_modal: Option<WindowId>,
  pub names: HashMap<String, WindowId>,
  pub visible: Vec<WindowId>,
  pub dialog_topmost: Vec<WindowId>,
  pub modal_topmost: Vec<WindowId>,
  pub modal_open: bool,
  pub modal_visible: bool,
}

impl FakeWindowManager {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn with_window(mut self, window: FakeWindow) -> Self {
    self.windows.push(window);
    self
  }

  pub(crate) fn with_active(mut self, id: u32) -> Self {
    self.active = Some(WindowId(id));
    self
  }

  pub(crate) fn with_topmost_modal(mut self, id: u32) -> Self {
    self.topmost_modal = Some(WindowId(id));
    self
  }

  pub(crate) fn with_name(mut self, name: &str, id: u32) -> Self {
    self.names.insert(name.to_string(), WindowId(id));
    self
  }
}

impl WindowManager for FakeWindowManager {
  fn window(&self, id: WindowId) -> Option<&dyn Window> {
    self.windows.iter().find(|w| w.id == id).map(|w| w as &dyn Window)
  }

  fn active_window(&self) -> Option<WindowId> {
    self.active
  }

  fn topmost_modal_dialog(&self) -> Option<WindowId> {
    self.topmost_modal
  }

  fn window_id_by_name(&self, name: &str) -> Option<WindowId> {
    self.names.get(name).copied()
  }

  fn is_window_visible(&self, id: WindowId) -> bool {
    self.visible.contains(&id)
  }

  fn is_window_active(&self, id: WindowId) -> bool {
    self.active == Some(id)
  }

  fn is_dialog_topmost(&self, id: WindowId) -> bool {
    self.dialog_topmost.contains(&id)
  }

  fn is_modal_dialog_topmost(&self, id: WindowId) -> bool {
    self.modal_topmost.contains(&id)
  }

  fn has_modal_dialog(&self) -> bool {
    self.modal_open
  }

  fn has_visible_modal_dialog(&self) -> bool {
    self.modal_visible
  }
}

#[derive(Default)]
pub(crate) struct FakeLocalizer(pub HashMap<u32, String>);

impl FakeLocalizer {
  pub(crate) fn with(mut self, label: u32, text: &str) -> Self {
    self.0.insert(label, text.to_string());
    self
  }
}

impl Localizer for FakeLocalizer {
  fn localize(&self, label: LabelId) -> String {
    self.0.get(&label.0).cloned().unwrap_or_default()
  }
}

#[derive(Default)]
pub(crate) struct FakeSettings(pub HashMap<String, i64>);

impl FakeSettings {
  pub(crate) fn with(mut self, key: &str, value: i64) -> Self {
    self.0.insert(key.to_string(), value);
    self
  }
}

impl Settings for FakeSettings {
  fn int(&self, key: &str) -> i64 {
    self.0.get(key).copied().unwrap_or(0)
  }
}

/// Owns one fake of every collaborator and lends them out as services.
#[derive(Default)]
pub(crate) struct Harness {
  pub manager: FakeWindowManager,
  pub strings: FakeLocalizer,
  pub settings: FakeSettings,
}

impl Harness {
  pub(crate) fn new(manager: FakeWindowManager) -> Self {
    Self {
      manager,
      strings: FakeLocalizer::default(),
      settings: FakeSettings::default(),
    }
  }

  pub(crate) fn services(&self) -> GuiServices<'_> {
    GuiServices {
      windows: &self.manager,
      strings: &self.strings,
      settings: &self.settings,
    }
  }
}
