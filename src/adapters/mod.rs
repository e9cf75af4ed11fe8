// Adapters layer: concrete sinks and row sources for the hosts that embed the controller.

pub mod csv_source;
pub mod sink;
