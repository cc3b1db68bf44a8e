mod binding;
mod null_backend;

pub use binding::{ReleaseOutcome, RenderSurfaceBinding};
pub use null_backend::{NullBackend, NullBackendStats, NullContext};

use serde::{Deserialize, Serialize};

use crate::core::{ChartOptionDocument, Viewport};
use crate::error::ChartResult;

/// Opaque identifier of a native drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceHandle(u64);

impl SurfaceHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Live drawing object bound to one native surface.
pub trait RenderContext {
    /// Draws `document` in full, replacing whatever was drawn before.
    fn apply_document(&mut self, document: &ChartOptionDocument) -> ChartResult<()>;

    /// Frees backend resources. Must be safe to call on a released context.
    fn release(&mut self);
}

/// Factory for render contexts, implemented by any rendering backend.
///
/// Backends may return `ChartError::SurfaceUnavailable` when the surface is
/// known but not drawable yet.
pub trait RenderBackend {
    type Context: RenderContext;

    fn create_context(
        &mut self,
        surface: SurfaceHandle,
        theme: Theme,
        viewport: Viewport,
    ) -> ChartResult<Self::Context>;
}
