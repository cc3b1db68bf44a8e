mod chart_host;
mod host_config;
mod json_contract;
mod option_store;
mod tooltip_positioner;
mod zoom_controller;

pub use chart_host::{ChartHost, HostLifecycle, MountOutcome, RefreshOutcome, RefreshTicket};
pub use host_config::{ChartHostConfig, TooltipLayout};
pub use json_contract::{CHART_DOCUMENT_JSON_SCHEMA_V1, ChartDocumentJsonContractV1};
pub use option_store::{ChartOptionStore, merge_document};
pub use tooltip_positioner::{
    DominantSeries, TooltipPositioner, TooltipQuery, dominant_series, position_fixed_top,
};
pub use zoom_controller::ZoomController;
