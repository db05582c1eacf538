mod chart;
mod chart_config;
mod json_contract;
mod listener_registry;

pub use chart::StackChart;
pub use chart_config::StackChartConfig;
pub use json_contract::{STACK_HIGHLIGHT_JSON_SCHEMA_V1, StackHighlightJsonContractV1};
