use tracing::debug;

use crate::core::{ChartOptionDocument, ZoomWindow};

/// Coalescing "reset zoom" switch.
///
/// Any number of requests between two apply cycles produce one reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomController {
    pending: bool,
}

impl ZoomController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_reset(&mut self) {
        self.pending = true;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns the full window and clears the flag when a reset is pending,
    /// otherwise the document's current window.
    pub fn apply_if_pending(&mut self, document: &ChartOptionDocument) -> ZoomWindow {
        if !self.pending {
            return document.zoom;
        }
        self.pending = false;
        debug!(
            previous_start = document.zoom.start_percent(),
            previous_end = document.zoom.end_percent(),
            "zoom reset applied"
        );
        ZoomWindow::full()
    }
}
