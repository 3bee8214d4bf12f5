// Domain layer: report model and the asset-source port. No I/O here.

pub mod model;
pub mod ports;
