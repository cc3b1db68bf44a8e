pub mod axis;
pub mod document;
pub mod series;
pub mod tooltip;
pub mod types;
pub mod zoom;

pub use axis::{AxisDefinition, AxisKind, AxisPosition, axis_scale_max};
pub use document::{ChartOptionDocument, LegendConfig, LegendPosition, OptionPatch};
pub use series::{AreaFill, SeriesDefinition, SeriesKind, SeriesPatch, SeriesStyle};
pub use tooltip::{HoveredValue, TooltipConfig, TooltipPlacement, TooltipTrigger};
pub use types::{Point, Size, Viewport};
pub use zoom::ZoomWindow;
