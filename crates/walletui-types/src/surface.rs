use serde::{Deserialize, Serialize};

/// Rendering surface the interface is currently shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiSurface {
    /// Full browser tab
    Tab,
    /// Toolbar popup
    Popup,
    /// Approval window opened by a dapp request
    Notification,
    /// Path matched none of the known pages
    Unknown,
}

impl UiSurface {
    /// Short name used by presentation code; empty for `Unknown`
    pub fn name(&self) -> &'static str {
        match self {
            UiSurface::Tab => "tab",
            UiSurface::Popup => "popup",
            UiSurface::Notification => "notification",
            UiSurface::Unknown => "",
        }
    }

    pub fn flags(&self) -> UiSurfaceFlags {
        UiSurfaceFlags {
            is_tab: matches!(self, UiSurface::Tab),
            is_popup: matches!(self, UiSurface::Popup),
            is_notification: matches!(self, UiSurface::Notification),
        }
    }
}

/// Boolean view of a [`UiSurface`]. At most one flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiSurfaceFlags {
    pub is_tab: bool,
    pub is_popup: bool,
    pub is_notification: bool,
}

impl From<UiSurfaceFlags> for UiSurface {
    fn from(flags: UiSurfaceFlags) -> Self {
        if flags.is_popup {
            UiSurface::Popup
        } else if flags.is_notification {
            UiSurface::Notification
        } else if flags.is_tab {
            UiSurface::Tab
        } else {
            UiSurface::Unknown
        }
    }
}
