// Domain layer: request/result models and the ports the client implements.

pub mod model;
pub mod ports;
