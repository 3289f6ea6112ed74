//! Classify which page of the extension is rendering.
//!
//! The location is injected through [`LocationProvider`] and read again on
//! every query; nothing is cached between calls.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use tracing::trace;
use walletui_types::{UiSurface, UiSurfaceFlags};

/// Source of the current location path (for example `/popup.html`)
pub trait LocationProvider: Send + Sync {
    fn pathname(&self) -> String;
}

impl<T: LocationProvider + ?Sized> LocationProvider for Arc<T> {
    fn pathname(&self) -> String {
        (**self).pathname()
    }
}

impl<T: LocationProvider + ?Sized> LocationProvider for &T {
    fn pathname(&self) -> String {
        (**self).pathname()
    }
}

/// Location that never changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLocation(String);

impl StaticLocation {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self(pathname.into())
    }
}

impl LocationProvider for StaticLocation {
    fn pathname(&self) -> String {
        self.0.clone()
    }
}

/// Location updated by a host (router, navigation listener) and read by detectors.
///
/// Clones share the same path.
#[derive(Debug, Clone, Default)]
pub struct SharedLocation {
    path: Arc<RwLock<String>>,
}

impl SharedLocation {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            path: Arc::new(RwLock::new(pathname.into())),
        }
    }

    pub fn navigate(&self, pathname: impl Into<String>) {
        let mut path = self.path.write().unwrap_or_else(|e| e.into_inner());
        *path = pathname.into();
    }
}

impl LocationProvider for SharedLocation {
    fn pathname(&self) -> String {
        self.path.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Page file names served for each surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfacePages {
    pub tab: String,
    pub popup: String,
    pub notification: String,
}

impl Default for SurfacePages {
    fn default() -> Self {
        Self {
            tab: "index.html".to_string(),
            popup: "popup.html".to_string(),
            notification: "notification.html".to_string(),
        }
    }
}

impl SurfacePages {
    /// Match a location path against `/<page>` for each surface
    pub fn classify(&self, pathname: &str) -> UiSurface {
        let Some(page) = pathname.strip_prefix('/') else {
            return UiSurface::Unknown;
        };

        if page == self.popup {
            UiSurface::Popup
        } else if page == self.notification {
            UiSurface::Notification
        } else if page == self.tab {
            UiSurface::Tab
        } else {
            UiSurface::Unknown
        }
    }
}

pub struct UiSurfaceDetector<L> {
    location: L,
    pages: SurfacePages,
}

impl<L: LocationProvider> UiSurfaceDetector<L> {
    pub fn new(location: L) -> Self {
        Self::with_pages(location, SurfacePages::default())
    }

    pub fn with_pages(location: L, pages: SurfacePages) -> Self {
        Self { location, pages }
    }

    pub fn pages(&self) -> &SurfacePages {
        &self.pages
    }

    /// Read the location and classify it
    pub fn detect(&self) -> UiSurface {
        let pathname = self.location.pathname();
        let surface = self.pages.classify(&pathname);
        trace!(pathname = %pathname, surface = ?surface, "detected ui surface");
        surface
    }

    pub fn flags(&self) -> UiSurfaceFlags {
        self.detect().flags()
    }

    /// `"tab"`, `"popup"`, `"notification"` or `""`
    pub fn type_name(&self) -> &'static str {
        self.detect().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_default_pages() {
        let pages = SurfacePages::default();
        assert_eq!(pages.classify("/index.html"), UiSurface::Tab);
        assert_eq!(pages.classify("/popup.html"), UiSurface::Popup);
        assert_eq!(pages.classify("/notification.html"), UiSurface::Notification);
    }

    #[test]
    fn test_classify_requires_exact_path() {
        let pages = SurfacePages::default();
        assert_eq!(pages.classify("popup.html"), UiSurface::Unknown);
        assert_eq!(pages.classify("/popup.html/"), UiSurface::Unknown);
        assert_eq!(pages.classify("/nested/popup.html"), UiSurface::Unknown);
        assert_eq!(pages.classify(""), UiSurface::Unknown);
    }

    #[test]
    fn test_detector_reports_flags_and_name() {
        let detector = UiSurfaceDetector::new(StaticLocation::new("/notification.html"));
        assert_eq!(detector.type_name(), "notification");
        let flags = detector.flags();
        assert!(flags.is_notification);
        assert!(!flags.is_tab && !flags.is_popup);
    }

    #[test]
    fn test_detector_rereads_shared_location() {
        let location = SharedLocation::new("/index.html");
        let detector = UiSurfaceDetector::new(location.clone());
        assert_eq!(detector.detect(), UiSurface::Tab);

        location.navigate("/popup.html");
        assert_eq!(detector.detect(), UiSurface::Popup);

        location.navigate("/settings");
        assert_eq!(detector.type_name(), "");
    }

    #[test]
    fn test_custom_pages() {
        let pages = SurfacePages {
            tab: "home.html".to_string(),
            ..SurfacePages::default()
        };
        let detector = UiSurfaceDetector::with_pages(StaticLocation::new("/home.html"), pages);
        assert_eq!(detector.pages().tab, "home.html");
        assert_eq!(detector.detect(), UiSurface::Tab);
    }
}
