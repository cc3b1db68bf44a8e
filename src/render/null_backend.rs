use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{ChartOptionDocument, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{RenderBackend, RenderContext, SurfaceHandle, Theme};

/// Counters recorded by `NullBackend` and every context it created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NullBackendStats {
    pub contexts_created: usize,
    pub contexts_released: usize,
    pub documents_applied: usize,
    pub last_surface: Option<SurfaceHandle>,
    pub last_theme: Option<Theme>,
    pub last_viewport: Option<Viewport>,
    pub last_document: Option<ChartOptionDocument>,
}

impl NullBackendStats {
    #[must_use]
    pub fn live_contexts(&self) -> usize {
        self.contexts_created - self.contexts_released
    }
}

/// Headless backend used by tests and by hosts without a native surface.
///
/// Contexts still validate every document they receive so invalid documents
/// are caught before a real backend is involved.
#[derive(Debug, Default, Clone)]
pub struct NullBackend {
    stats: Rc<RefCell<NullBackendStats>>,
}

impl NullBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stats(&self) -> NullBackendStats {
        self.stats.borrow().clone()
    }
}

impl RenderBackend for NullBackend {
    type Context = NullContext;

    fn create_context(
        &mut self,
        surface: SurfaceHandle,
        theme: Theme,
        viewport: Viewport,
    ) -> ChartResult<NullContext> {
        let mut stats = self.stats.borrow_mut();
        stats.contexts_created += 1;
        stats.last_surface = Some(surface);
        stats.last_theme = Some(theme);
        stats.last_viewport = Some(viewport);
        Ok(NullContext {
            surface,
            released: false,
            stats: Rc::clone(&self.stats),
        })
    }
}

#[derive(Debug)]
pub struct NullContext {
    surface: SurfaceHandle,
    released: bool,
    stats: Rc<RefCell<NullBackendStats>>,
}

impl NullContext {
    #[must_use]
    pub fn surface(&self) -> SurfaceHandle {
        self.surface
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl RenderContext for NullContext {
    fn apply_document(&mut self, document: &ChartOptionDocument) -> ChartResult<()> {
        if self.released {
            return Err(ChartError::InvalidData(
                "document applied to a released context".to_owned(),
            ));
        }
        document.validate()?;
        let mut stats = self.stats.borrow_mut();
        stats.documents_applied += 1;
        stats.last_document = Some(document.clone());
        Ok(())
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.stats.borrow_mut().contexts_released += 1;
    }
}
