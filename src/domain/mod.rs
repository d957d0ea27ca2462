// Domain layer: payload/result models and the ports the handlers depend on.

pub mod model;
pub mod ports;
