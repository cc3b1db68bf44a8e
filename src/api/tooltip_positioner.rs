use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{HoveredValue, Point, Size};

use super::TooltipLayout;

/// Series whose hovered value sits closest to its axis maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DominantSeries {
    pub series_index: usize,
    pub normalized: f64,
}

/// Picks the largest normalized value; equal values resolve to the lowest
/// series index regardless of slice order.
#[must_use]
pub fn dominant_series(hovered: &[HoveredValue]) -> Option<DominantSeries> {
    hovered
        .iter()
        .map(|value| DominantSeries {
            series_index: value.series_index,
            normalized: value.normalized(),
        })
        .reduce(|best, candidate| {
            let wins = candidate.normalized > best.normalized
                || (candidate.normalized == best.normalized
                    && candidate.series_index < best.series_index);
            if wins { candidate } else { best }
        })
}

/// Geometry of one positioning request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipQuery<'a> {
    pub hovered: &'a [HoveredValue],
    pub cursor: Point,
    /// Size of the whole chart view.
    pub view: Size,
    /// Measured size of the tooltip box.
    pub content: Size,
}

/// Stateless tooltip placement for dual-axis multi-series charts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TooltipPositioner {
    layout: TooltipLayout,
}

impl TooltipPositioner {
    #[must_use]
    pub fn new(layout: TooltipLayout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub fn layout(&self) -> TooltipLayout {
        self.layout
    }

    /// Top-left corner of the tooltip, or `None` when nothing is hovered.
    ///
    /// The tooltip is centered on the cursor horizontally and lifted above the
    /// dominant series' bar or line point, never closer to the top edge than
    /// `min_top_ratio` of its own height.
    #[must_use]
    pub fn position(&self, query: TooltipQuery<'_>) -> Option<Point> {
        let dominant = dominant_series(query.hovered)?;
        let layout = self.layout;
        let view_h = query.view.height;
        let content_h = query.content.height;

        let candidate = view_h * layout.view_anchor_ratio
            - dominant.normalized * view_h * layout.value_span_ratio
            - content_h * layout.content_lift_ratio;
        let min_top = content_h * layout.min_top_ratio;
        // `max` also maps a NaN candidate onto the floor.
        let y = candidate.max(min_top);
        let x = query.cursor.x - query.content.width / 2.0;

        trace!(
            dominant = dominant.series_index,
            normalized = dominant.normalized,
            x,
            y,
            "tooltip positioned"
        );
        Some(Point::new(x, y))
    }
}

/// Tooltip pinned at `top_ratio` of the view height, following the cursor.
#[must_use]
pub fn position_fixed_top(cursor: Point, view: Size, top_ratio: f64) -> Point {
    Point::new(cursor.x, view.height * top_ratio)
}
