// Domain layer: diagnostic model and ports (the target capability and the sink).
// No dependencies beyond std/serde.

pub mod model;
pub mod ports;
