// Adapters layer: the legacy adapter and concrete diagnostic sinks.

pub mod legacy_adapter;
pub mod sink;
