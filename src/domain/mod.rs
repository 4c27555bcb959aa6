// Domain layer: request/result models and ports. No web or config types here.

pub mod model;
pub mod ports;
