// Domain layer: quiz entities and the repository port. No storage details live here.

pub mod model;
pub mod ports;
