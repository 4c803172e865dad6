// Domain layer: ticket records, the report shape and the ports the engine talks through.

pub mod model;
pub mod ports;
pub mod report;
