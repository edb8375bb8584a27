use std::fmt;

use super::SnapSlot;

/// What kind of surface a view is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRole {
    Toplevel,
    Unmanaged,
    DesktopEnvironment,
    /// A role the rule engine has no name for.
    Other(String),
}

impl ViewRole {
    /// The DSL spelling of the role, or `None` for [`ViewRole::Other`].
    #[must_use]
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            ViewRole::Toplevel => Some("TOPLEVEL"),
            ViewRole::Unmanaged => Some("UNMANAGED"),
            ViewRole::DesktopEnvironment => Some("DESKTOP_ENVIRONMENT"),
            ViewRole::Other(_) => None,
        }
    }
}

impl fmt::Display for ViewRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewRole::Other(raw) => f.write_str(raw),
            named => f.write_str(named.as_str().unwrap_or_default()),
        }
    }
}

/// Width and height of the area a view lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// The host's live view, as seen by the rule engine.
///
/// Mutations are requests issued through a shared reference; hosts hand out
/// views as shared handles and apply the request on their side.
pub trait View {
    fn app_id(&self) -> String;

    fn title(&self) -> String;

    fn role(&self) -> ViewRole;

    /// Current opacity in `[0.0, 1.0]`.
    fn alpha(&self) -> f32;

    fn set_alpha(&self, alpha: f32);

    /// Extent of the output the view is on, if it is on one.
    fn container_size(&self) -> Option<Size>;

    fn move_to(&self, x: i32, y: i32);

    fn resize_to(&self, width: i32, height: i32);

    /// Ask the host to tile the view to all edges, or untile it.
    fn set_maximized(&self, maximized: bool);

    fn set_minimized(&self, minimized: bool);

    /// Tell collaborators the view should snap to `slot`.
    fn request_snap(&self, slot: SnapSlot);

    fn supports_maximize(&self) -> bool {
        true
    }

    fn supports_minimize(&self) -> bool {
        true
    }
}
