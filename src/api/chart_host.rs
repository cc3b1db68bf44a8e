use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{ChartOptionDocument, OptionPatch, Point, Size, TooltipPlacement};
use crate::data_source::{DataSource, ReserveFeedMapping, SeriesRefresh};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InteractionState, PointerState};
use crate::render::{ReleaseOutcome, RenderBackend, RenderSurfaceBinding, SurfaceHandle};

use super::host_config::validate_tooltip_size;
use super::{
    ChartHostConfig, ChartOptionStore, TooltipPositioner, TooltipQuery, ZoomController,
    position_fixed_top,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostLifecycle {
    Unmounted,
    /// Mounted by the screen, waiting for the native surface to attach.
    AwaitingSurface,
    Mounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MountOutcome {
    Mounted,
    Deferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshOutcome {
    Applied,
    /// The fetch failed; the current document stays in place.
    Failed,
    /// The host was unmounted or remounted since the refresh started.
    Discarded,
}

/// Ties an in-flight refresh to the mount it was started under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    epoch: u64,
}

/// Root component: owns the surface binding, the document store and the
/// interaction mutators for one mounted chart.
///
/// Every method runs synchronously on the caller's UI thread.
pub struct ChartHost<B: RenderBackend> {
    backend: B,
    config: ChartHostConfig,
    lifecycle: HostLifecycle,
    epoch: u64,
    attached_surface: Option<SurfaceHandle>,
    binding: Option<RenderSurfaceBinding<B::Context>>,
    store: Option<ChartOptionStore>,
    zoom: ZoomController,
    positioner: TooltipPositioner,
    interaction: InteractionState,
    tooltip_size: Size,
}

impl<B: RenderBackend> ChartHost<B> {
    pub fn new(backend: B, config: ChartHostConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let (tooltip_w, tooltip_h) = config.tooltip_size;
        Ok(Self {
            backend,
            config,
            lifecycle: HostLifecycle::Unmounted,
            epoch: 0,
            attached_surface: None,
            binding: None,
            store: None,
            zoom: ZoomController::new(),
            positioner: TooltipPositioner::new(config.tooltip_layout),
            interaction: InteractionState::default(),
            tooltip_size: Size::new(tooltip_w, tooltip_h),
        })
    }

    #[must_use]
    pub fn lifecycle(&self) -> HostLifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn config(&self) -> ChartHostConfig {
        self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn document(&self) -> Option<Arc<ChartOptionDocument>> {
        self.store.as_ref().map(ChartOptionStore::current)
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.as_ref().is_some_and(RenderSurfaceBinding::is_live)
    }

    #[must_use]
    pub fn bound_surface(&self) -> Option<SurfaceHandle> {
        self.binding.as_ref().map(RenderSurfaceBinding::surface)
    }

    #[must_use]
    pub fn pointer_state(&self) -> PointerState {
        self.interaction.pointer()
    }

    #[must_use]
    pub fn is_zoom_reset_pending(&self) -> bool {
        self.zoom.is_pending()
    }

    /// Installs `initial` and binds a render context when a surface is known.
    ///
    /// Without a surface the mount is deferred until `on_surface_attached`.
    pub fn mount(
        &mut self,
        surface: Option<SurfaceHandle>,
        initial: ChartOptionDocument,
    ) -> ChartResult<MountOutcome> {
        if self.lifecycle != HostLifecycle::Unmounted {
            return Err(ChartError::InvalidData(
                "chart host is already mounted".to_owned(),
            ));
        }
        self.store = Some(ChartOptionStore::new(initial)?);
        self.epoch += 1;
        self.lifecycle = HostLifecycle::AwaitingSurface;
        if surface.is_some() {
            self.attached_surface = surface;
        }
        debug!(epoch = self.epoch, "chart host mounted");

        let outcome = self.try_bind();
        if outcome.is_err() {
            self.release_binding();
            self.store = None;
            self.lifecycle = HostLifecycle::Unmounted;
        }
        outcome
    }

    /// Native surface attach notification.
    ///
    /// Completes a deferred mount. A different handle while bound replaces the
    /// binding; the same handle is a no-op.
    pub fn on_surface_attached(&mut self, surface: SurfaceHandle) -> ChartResult<MountOutcome> {
        self.attached_surface = Some(surface);
        match self.lifecycle {
            HostLifecycle::Unmounted => Ok(MountOutcome::Deferred),
            HostLifecycle::AwaitingSurface => self.try_bind(),
            HostLifecycle::Mounted => {
                if self.bound_surface() == Some(surface) {
                    return Ok(MountOutcome::Mounted);
                }
                debug!(surface = surface.raw(), "surface handle replaced");
                self.release_binding();
                self.lifecycle = HostLifecycle::AwaitingSurface;
                self.try_bind()
            }
        }
    }

    /// Native surface detach notification; the context is released and the
    /// host waits for the next attach.
    pub fn on_surface_detached(&mut self) -> ReleaseOutcome {
        self.attached_surface = None;
        let outcome = self.release_binding();
        if self.lifecycle == HostLifecycle::Mounted {
            self.lifecycle = HostLifecycle::AwaitingSurface;
        }
        outcome
    }

    /// Replaces the whole document and re-applies it to the existing context.
    pub fn on_document_change(&mut self, document: ChartOptionDocument) -> ChartResult<()> {
        self.store_mut()?.replace(document)?;
        self.apply_cycle()
    }

    /// Merges `patch` into the current document and re-applies it.
    pub fn merge(&mut self, patch: OptionPatch) -> ChartResult<()> {
        self.store_mut()?.merge(patch)?;
        self.apply_cycle()
    }

    /// Arms a zoom reset; it lands on the next apply cycle, which runs now
    /// when a context is bound.
    pub fn request_zoom_reset(&mut self) -> ChartResult<()> {
        self.zoom.request_reset();
        self.apply_cycle()
    }

    /// Updates the measured tooltip box used for placement.
    pub fn set_tooltip_size(&mut self, size: Size) -> ChartResult<()> {
        validate_tooltip_size(size.width, size.height)?;
        self.tooltip_size = size;
        Ok(())
    }

    /// Pointer hover at `(x, y)` over category `hovered_index`.
    ///
    /// Returns the tooltip position written into the document.
    pub fn pointer_move(
        &mut self,
        x: f64,
        y: f64,
        hovered_index: Option<usize>,
    ) -> ChartResult<Option<Point>> {
        self.interaction.on_pointer_move(x, y, hovered_index);
        self.update_tooltip()
    }

    pub fn pointer_press(
        &mut self,
        x: f64,
        y: f64,
        hovered_index: Option<usize>,
    ) -> ChartResult<Option<Point>> {
        self.interaction.on_pointer_press(x, y, hovered_index);
        self.update_tooltip()
    }

    pub fn pointer_release(&mut self) {
        self.interaction.on_pointer_release();
    }

    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        self.interaction.on_pointer_leave();
        self.update_tooltip().map(|_| ())
    }

    /// Starts a data refresh under the current mount.
    #[must_use]
    pub fn begin_refresh(&self) -> RefreshTicket {
        RefreshTicket { epoch: self.epoch }
    }

    /// Applies a finished refresh against the document current right now.
    ///
    /// Results from a previous mount, or arriving after unmount, are dropped.
    /// A failed fetch leaves the current document in place.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: ChartResult<SeriesRefresh>,
    ) -> ChartResult<RefreshOutcome> {
        if self.lifecycle == HostLifecycle::Unmounted || ticket.epoch != self.epoch {
            debug!(
                ticket_epoch = ticket.epoch,
                epoch = self.epoch,
                "discarding refresh for a disposed mount"
            );
            return Ok(RefreshOutcome::Discarded);
        }
        let refresh = match result {
            Ok(refresh) => refresh,
            Err(err) => {
                warn!(error = %err, "data refresh failed; keeping current document");
                return Ok(RefreshOutcome::Failed);
            }
        };
        let current = self.store_mut()?.current();
        let patch = refresh.to_patch(&current)?;
        self.merge(patch)?;
        Ok(RefreshOutcome::Applied)
    }

    /// Fetches from `source`, extracts with `mapping` and completes the
    /// refresh in one call.
    pub fn refresh_from<S: DataSource>(
        &mut self,
        source: &S,
        mapping: &ReserveFeedMapping,
    ) -> ChartResult<RefreshOutcome> {
        let ticket = self.begin_refresh();
        let result = source.fetch().and_then(|payload| mapping.extract(&payload));
        self.complete_refresh(ticket, result)
    }

    /// Releases the render context; safe to call when mount never completed.
    pub fn unmount(&mut self) -> ReleaseOutcome {
        let outcome = self.release_binding();
        self.store = None;
        self.zoom = ZoomController::new();
        self.interaction.on_pointer_leave();
        self.lifecycle = HostLifecycle::Unmounted;
        debug!(epoch = self.epoch, ?outcome, "chart host unmounted");
        outcome
    }

    fn try_bind(&mut self) -> ChartResult<MountOutcome> {
        match RenderSurfaceBinding::bind(
            &mut self.backend,
            self.attached_surface,
            self.config.theme,
            self.config.viewport,
        ) {
            Ok(binding) => {
                self.binding = Some(binding);
                self.lifecycle = HostLifecycle::Mounted;
                self.apply_cycle()?;
                Ok(MountOutcome::Mounted)
            }
            Err(ChartError::SurfaceUnavailable) => {
                debug!(epoch = self.epoch, "surface unavailable; mount deferred");
                Ok(MountOutcome::Deferred)
            }
            Err(err) => Err(err),
        }
    }

    fn release_binding(&mut self) -> ReleaseOutcome {
        self.binding
            .take()
            .map_or(ReleaseOutcome::AlreadyReleased, |mut binding| {
                binding.release()
            })
    }

    fn store_mut(&mut self) -> ChartResult<&mut ChartOptionStore> {
        self.store
            .as_mut()
            .ok_or_else(|| ChartError::InvalidData("chart host is not mounted".to_owned()))
    }

    /// Folds pending mutators into the document and draws it when bound.
    ///
    /// A hovered tooltip is re-placed against the document about to be drawn,
    /// in the same install as a pending zoom reset.
    fn apply_cycle(&mut self) -> ChartResult<()> {
        if !self.is_bound() {
            trace!("apply skipped; no live render context");
            return Ok(());
        }
        let Some(store) = self.store.as_ref() else {
            return Ok(());
        };

        let current = store.current();
        let mut patch = OptionPatch::new();
        let zoom = self.zoom.apply_if_pending(&current);
        if zoom != current.zoom {
            patch = patch.zoom(zoom);
        }
        if self.interaction.hovered_index().is_some() {
            let position = self.compute_tooltip_position(&current, store.axis_maxima());
            if position != current.tooltip.last_computed_position {
                trace!(?position, "tooltip re-placed after document change");
                patch = patch.tooltip(current.tooltip.at(position));
            }
        }

        let store = self.store_mut()?;
        if !patch.is_empty() {
            store.merge(patch)?;
        }
        let document = store.current();
        if let Some(binding) = self.binding.as_mut() {
            binding.apply(&document)?;
        }
        Ok(())
    }

    fn compute_tooltip_position(
        &self,
        document: &ChartOptionDocument,
        axis_maxima: &[f64],
    ) -> Option<Point> {
        if !document.tooltip.visible {
            return None;
        }
        let pointer = self.interaction.pointer();
        let hovered_index = pointer.hovered_index?;
        let view = self.config.viewport.size();
        match document.tooltip.placement {
            TooltipPlacement::DominantSeries => {
                let hovered = document.hovered_values_with_maxima(hovered_index, axis_maxima);
                self.positioner.position(TooltipQuery {
                    hovered: &hovered,
                    cursor: pointer.cursor,
                    view,
                    content: self.tooltip_size,
                })
            }
            TooltipPlacement::PointerFixedTop { top_ratio } => {
                Some(position_fixed_top(pointer.cursor, view, top_ratio))
            }
            TooltipPlacement::Library => None,
        }
    }

    fn update_tooltip(&mut self) -> ChartResult<Option<Point>> {
        let Some(store) = self.store.as_ref() else {
            return Ok(None);
        };
        let document = store.current();
        let position = self.compute_tooltip_position(&document, store.axis_maxima());
        if position != document.tooltip.last_computed_position {
            self.merge(OptionPatch::new().tooltip(document.tooltip.at(position)))?;
        }
        Ok(position)
    }
}
