//! Reference chart documents.
//!
//! Series come from pure derivations of their parameters; pair them with a
//! `SeriesCache` so re-renders with unchanged parameters reuse the series.

mod cache;
mod emissions;
mod large_area;
mod reserves;

pub use cache::SeriesCache;
pub use emissions::{
    EmissionParams, compute_emission_series, emissions_document, emissions_tooltip_text,
    hour_label, hour_labels,
};
pub use large_area::{LARGE_AREA_TOOLTIP_TOP_RATIO, daily_date_labels, large_area_document};
pub use reserves::{RESERVE_CATEGORIES, ReservesParams, compute_reserve_series, reserves_document};
