use std::sync::Arc;

use tracing::trace;

use crate::core::SeriesDefinition;

/// Single-entry memo for a pure series derivation.
///
/// The derivation only reruns when its input differs from the last one, and
/// the cached series are shared rather than rebuilt.
#[derive(Debug, Clone)]
pub struct SeriesCache<I> {
    entry: Option<(I, Arc<[SeriesDefinition]>)>,
    computations: usize,
}

impl<I> Default for SeriesCache<I> {
    fn default() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }
}

impl<I: PartialEq + Clone> SeriesCache<I> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute<F>(&mut self, input: &I, derive: F) -> Arc<[SeriesDefinition]>
    where
        F: FnOnce(&I) -> Vec<SeriesDefinition>,
    {
        if let Some((cached_input, series)) = &self.entry {
            if cached_input == input {
                trace!("series cache hit");
                return Arc::clone(series);
            }
        }
        let series: Arc<[SeriesDefinition]> = derive(input).into();
        self.computations += 1;
        self.entry = Some((input.clone(), Arc::clone(&series)));
        series
    }

    /// How many times the derivation actually ran.
    #[must_use]
    pub fn computations(&self) -> usize {
        self.computations
    }
}
