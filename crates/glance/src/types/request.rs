/*!
Info codes and the request value that carries them.

An [`InfoCode`] names one queryable fact about the window hierarchy. Codes
are grouped in blocks by the runtime object they interrogate; the numeric
values are stable and form the wire-level vocabulary between the skin
expression compiler and the resolver.
*/

use super::{ControlId, GlanceError, WindowId};
use serde::{Deserialize, Serialize};

/// One queryable fact about the current GUI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum InfoCode {
  // === System ===
  SystemCurrentWindow = 100,
  SystemCurrentControl = 101,
  SystemCurrentControlId = 102,
  SystemStartupWindow = 103,
  SystemProgressBar = 104,
  SystemHasActiveModalDialog = 105,
  SystemHasVisibleModalDialog = 106,
  SystemHasInputMasked = 107,

  // === Container: current listing ===
  ContainerFolderPath = 200,
  ContainerFolderName = 201,
  ContainerPluginName = 202,
  ContainerPluginCategory = 203,
  ContainerViewMode = 204,
  ContainerViewCount = 205,
  ContainerSortMethod = 206,
  ContainerSortOrder = 207,
  ContainerProperty = 208,
  ContainerArt = 209,
  ContainerContent = 210,
  ContainerPlot = 211,
  ContainerShowTitle = 212,
  ContainerTotalTime = 213,
  ContainerTotalWatched = 214,
  ContainerTotalUnwatched = 215,

  // === Container: navigation and position ===
  ContainerNumPages = 240,
  ContainerCurrentPage = 241,
  ContainerNumItems = 242,
  ContainerNumAllItems = 243,
  ContainerNumNonFolderItems = 244,
  ContainerPosition = 245,
  ContainerCurrentItem = 246,
  ContainerRow = 247,
  ContainerColumn = 248,
  ContainerSubItem = 249,
  ContainerHasNext = 250,
  ContainerHasPrevious = 251,
  ContainerScrolling = 252,
  ContainerIsUpdating = 253,
  ContainerHasParentItem = 254,
  ContainerHasFocus = 255,

  // === Container: listing state flags ===
  ContainerHasFiles = 270,
  ContainerHasFolders = 271,
  ContainerStacked = 272,
  ContainerHasThumb = 273,
  ContainerCanFilter = 274,
  ContainerCanFilterAdvanced = 275,
  ContainerFiltered = 276,
  ContainerSortDirection = 277,

  // === Container: transient movement ===
  ContainerScrollPrevious = 290,
  ContainerMovePrevious = 291,
  ContainerMoveNext = 292,
  ContainerScrollNext = 293,

  // === Control ===
  ControlGetLabel = 300,
  ControlIsVisible = 301,
  ControlIsEnabled = 302,
  ControlHasFocus = 303,
  ControlGroupHasFocus = 304,

  // === Window ===
  WindowProperty = 400,
  WindowIs = 401,
  WindowIsVisible = 402,
  WindowIsActive = 403,
  WindowIsDialogTopmost = 404,
  WindowIsModalDialogTopmost = 405,
  WindowIsMedia = 406,
  WindowNext = 407,
  WindowPrevious = 408,

  // === Backdrop (per-listing fan art) ===
  BackdropColor1 = 500,
  BackdropColor2 = 501,
  BackdropColor3 = 502,
  BackdropImage = 503,
}

impl InfoCode {
  /// Stable numeric value of this code.
  pub const fn as_u32(self) -> u32 {
    self as u32
  }
}

impl TryFrom<u32> for InfoCode {
  type Error = GlanceError;

  fn try_from(value: u32) -> Result<Self, Self::Error> {
    let code = match value {
      100 => Self::SystemCurrentWindow,
      101 => Self::SystemCurrentControl,
      102 => Self::SystemCurrentControlId,
      103 => Self::SystemStartupWindow,
      104 => Self::SystemProgressBar,
      105 => Self::SystemHasActiveModalDialog,
      106 => Self::SystemHasVisibleModalDialog,
      107 => Self::SystemHasInputMasked,
      200 => Self::ContainerFolderPath,
      201 => Self::ContainerFolderName,
      202 => Self::ContainerPluginName,
      203 => Self::ContainerPluginCategory,
      204 => Self::ContainerViewMode,
      205 => Self::ContainerViewCount,
      206 => Self::ContainerSortMethod,
      207 => Self::ContainerSortOrder,
      208 => Self::ContainerProperty,
      209 => Self::ContainerArt,
      210 => Self::ContainerContent,
      211 => Self::ContainerPlot,
      212 => Self::ContainerShowTitle,
      213 => Self::ContainerTotalTime,
      214 => Self::ContainerTotalWatched,
      215 => Self::ContainerTotalUnwatched,
      240 => Self::ContainerNumPages,
      241 => Self::ContainerCurrentPage,
      242 => Self::ContainerNumItems,
      243 => Self::ContainerNumAllItems,
      244 => Self::ContainerNumNonFolderItems,
      245 => Self::ContainerPosition,
      246 => Self::ContainerCurrentItem,
      247 => Self::ContainerRow,
      248 => Self::ContainerColumn,
      249 => Self::ContainerSubItem,
      250 => Self::ContainerHasNext,
      251 => Self::ContainerHasPrevious,
      252 => Self::ContainerScrolling,
      253 => Self::ContainerIsUpdating,
      254 => Self::ContainerHasParentItem,
      255 => Self::ContainerHasFocus,
      270 => Self::ContainerHasFiles,
      271 => Self::ContainerHasFolders,
      272 => Self::ContainerStacked,
      273 => Self::ContainerHasThumb,
      274 => Self::ContainerCanFilter,
      275 => Self::ContainerCanFilterAdvanced,
      276 => Self::ContainerFiltered,
      277 => Self::ContainerSortDirection,
      290 => Self::ContainerScrollPrevious,
      291 => Self::ContainerMovePrevious,
      292 => Self::ContainerMoveNext,
      293 => Self::ContainerScrollNext,
      300 => Self::ControlGetLabel,
      301 => Self::ControlIsVisible,
      302 => Self::ControlIsEnabled,
      303 => Self::ControlHasFocus,
      304 => Self::ControlGroupHasFocus,
      400 => Self::WindowProperty,
      401 => Self::WindowIs,
      402 => Self::WindowIsVisible,
      403 => Self::WindowIsActive,
      404 => Self::WindowIsDialogTopmost,
      405 => Self::WindowIsModalDialogTopmost,
      406 => Self::WindowIsMedia,
      407 => Self::WindowNext,
      408 => Self::WindowPrevious,
      500 => Self::BackdropColor1,
      501 => Self::BackdropColor2,
      502 => Self::BackdropColor3,
      503 => Self::BackdropImage,
      other => return Err(GlanceError::UnknownCode(other)),
    };
    Ok(code)
  }
}

/// A single info query: the fact to resolve plus its auxiliary arguments.
///
/// Immutable once built. The resolver interprets the arguments per code:
/// `target` addresses a control, container or window (zero meaning "use
/// the context default"), `param` carries a secondary ordinal (label
/// index, sort code, item id), and `key` carries a string argument
/// (property name, art kind, window name).
///
/// # Example
///
/// ```
/// use glance::{InfoCode, InfoRequest};
///
/// let request = InfoRequest::new(InfoCode::ContainerProperty).with_key("plot");
/// assert_eq!(request.code(), InfoCode::ContainerProperty);
/// assert_eq!(request.key(), "plot");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRequest {
  code: InfoCode,
  target: u32,
  param: u32,
  key: String,
}

impl InfoRequest {
  /// Create a request for `code` with no auxiliary arguments.
  pub const fn new(code: InfoCode) -> Self {
    Self {
      code,
      target: 0,
      param: 0,
      key: String::new(),
    }
  }

  /// Address a specific control, container or window.
  pub const fn with_target(mut self, target: u32) -> Self {
    self.target = target;
    self
  }

  /// Attach the secondary numeric argument.
  pub const fn with_param(mut self, param: u32) -> Self {
    self.param = param;
    self
  }

  /// Attach the string argument.
  pub fn with_key(mut self, key: impl Into<String>) -> Self {
    self.key = key.into();
    self
  }

  /// The fact this request asks about.
  pub const fn code(&self) -> InfoCode {
    self.code
  }

  /// Raw target id; zero means "use the context default".
  pub const fn raw_target(&self) -> u32 {
    self.target
  }

  /// Target interpreted as a control id, if one was given.
  pub fn target_control(&self) -> Option<ControlId> {
    (self.target != 0).then_some(ControlId(self.target))
  }

  /// Target interpreted as a window id, if one was given.
  pub fn target_window(&self) -> Option<WindowId> {
    (self.target != 0).then_some(WindowId(self.target))
  }

  /// Secondary numeric argument.
  pub const fn param(&self) -> u32 {
    self.param
  }

  /// String argument.
  pub fn key(&self) -> &str {
    &self.key
  }
}
