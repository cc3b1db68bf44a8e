use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{ChartOptionDocument, OptionPatch};
use crate::error::{ChartError, ChartResult};

/// Owner of the current chart document.
///
/// Documents are never mutated once installed: every `merge` or `replace`
/// produces a new `Arc`, so snapshots handed out earlier keep their values.
#[derive(Debug, Clone)]
pub struct ChartOptionStore {
    current: Arc<ChartOptionDocument>,
    axis_maxima: Vec<f64>,
    revision: u64,
}

impl ChartOptionStore {
    pub fn new(document: ChartOptionDocument) -> ChartResult<Self> {
        document.validate()?;
        Ok(Self {
            axis_maxima: document.axis_scale_maxima(),
            current: Arc::new(document),
            revision: 0,
        })
    }

    /// Read-only snapshot of the installed document.
    #[must_use]
    pub fn current(&self) -> Arc<ChartOptionDocument> {
        Arc::clone(&self.current)
    }

    #[must_use]
    pub fn document(&self) -> &ChartOptionDocument {
        &self.current
    }

    /// Scale maxima of the installed document, one per value axis.
    #[must_use]
    pub fn axis_maxima(&self) -> &[f64] {
        &self.axis_maxima
    }

    /// Number of documents installed since construction.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Installs a full document. This is the only way to add or remove series.
    pub fn replace(&mut self, document: ChartOptionDocument) -> ChartResult<Arc<ChartOptionDocument>> {
        document.validate()?;
        debug!(
            series = document.series.len(),
            axes = document.axes.len(),
            "replace chart document"
        );
        Ok(self.install(document))
    }

    /// Merges `patch` into the current document and installs the result.
    ///
    /// Top-level fields present in the patch replace the current ones. Series
    /// patches merge positionally into the existing series; an empty series
    /// patch keeps the existing series shared with the previous document.
    pub fn merge(&mut self, patch: OptionPatch) -> ChartResult<Arc<ChartOptionDocument>> {
        let merged = merge_document(&self.current, patch)?;
        Ok(self.install(merged))
    }

    fn install(&mut self, document: ChartOptionDocument) -> Arc<ChartOptionDocument> {
        self.axis_maxima = document.axis_scale_maxima();
        self.current = Arc::new(document);
        self.revision += 1;
        trace!(revision = self.revision, "chart document installed");
        Arc::clone(&self.current)
    }
}

/// Pure merge used by the store; `current` is only read.
pub fn merge_document(
    current: &ChartOptionDocument,
    patch: OptionPatch,
) -> ChartResult<ChartOptionDocument> {
    let OptionPatch {
        axes,
        series,
        tooltip,
        zoom,
        legend,
        extra,
    } = patch;

    let series = match series {
        None => current.series.clone(),
        Some(patches) => {
            if patches.len() != current.series.len() {
                return Err(ChartError::schema_mismatch(format!(
                    "patch carries {} series but the document has {}; use replace to add or remove series",
                    patches.len(),
                    current.series.len()
                )));
            }
            current
                .series
                .iter()
                .zip(patches)
                .map(|(existing, patch)| {
                    if patch.is_empty() {
                        Arc::clone(existing)
                    } else {
                        Arc::new(patch.apply_to(existing))
                    }
                })
                .collect()
        }
    };

    let mut merged_extra = current.extra.clone();
    merged_extra.extend(extra);

    let merged = ChartOptionDocument {
        axes: axes.unwrap_or_else(|| current.axes.clone()),
        series,
        tooltip: tooltip.unwrap_or_else(|| current.tooltip.clone()),
        zoom: zoom.unwrap_or(current.zoom),
        legend: legend.or_else(|| current.legend.clone()),
        extra: merged_extra,
    };
    merged.validate()?;
    Ok(merged)
}
