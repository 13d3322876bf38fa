// Domain layer: value types and the lookup port. No HTTP here.

pub mod model;
pub mod ports;
