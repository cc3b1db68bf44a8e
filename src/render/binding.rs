use tracing::{debug, trace};

use crate::core::{ChartOptionDocument, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{RenderBackend, RenderContext, SurfaceHandle, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Released,
    AlreadyReleased,
}

/// Exclusive ownership of one surface handle and the context drawn on it.
///
/// The context is released exactly once, either through `release` or on drop.
#[derive(Debug)]
pub struct RenderSurfaceBinding<C: RenderContext> {
    surface: SurfaceHandle,
    viewport: Viewport,
    context: Option<C>,
}

impl<C: RenderContext> RenderSurfaceBinding<C> {
    /// Creates a context on `surface`.
    ///
    /// Fails with `SurfaceUnavailable` when no handle is attached yet.
    pub fn bind<B>(
        backend: &mut B,
        surface: Option<SurfaceHandle>,
        theme: Theme,
        viewport: Viewport,
    ) -> ChartResult<Self>
    where
        B: RenderBackend<Context = C>,
    {
        let surface = surface.ok_or(ChartError::SurfaceUnavailable)?;
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let context = backend.create_context(surface, theme, viewport)?;
        debug!(
            surface = surface.raw(),
            width = viewport.width,
            height = viewport.height,
            ?theme,
            "render context created"
        );
        Ok(Self {
            surface,
            viewport,
            context: Some(context),
        })
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceHandle {
        self.surface
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.context.is_some()
    }

    #[must_use]
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    /// Applies `document` when the context is still live.
    ///
    /// Returns `Ok(false)` without touching anything after release.
    pub fn apply(&mut self, document: &ChartOptionDocument) -> ChartResult<bool> {
        let Some(context) = self.context.as_mut() else {
            trace!(surface = self.surface.raw(), "skip apply on released binding");
            return Ok(false);
        };
        context.apply_document(document)?;
        trace!(
            surface = self.surface.raw(),
            series = document.series.len(),
            "document applied"
        );
        Ok(true)
    }

    pub fn release(&mut self) -> ReleaseOutcome {
        match self.context.take() {
            Some(mut context) => {
                context.release();
                debug!(surface = self.surface.raw(), "render context released");
                ReleaseOutcome::Released
            }
            None => ReleaseOutcome::AlreadyReleased,
        }
    }
}

impl<C: RenderContext> Drop for RenderSurfaceBinding<C> {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
