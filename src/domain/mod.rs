// Domain layer: fragment models and the ports the bundler core talks through.

pub mod model;
pub mod ports;
