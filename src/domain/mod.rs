// Domain layer: value types, result records and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod record;
