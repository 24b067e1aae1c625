// Domain layer: document model, tokens and the ports the pipeline talks through.

pub mod model;
pub mod ports;
