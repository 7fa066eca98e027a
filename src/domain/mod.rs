// Domain layer: scan records and the ports the simulator talks through.

pub mod model;
pub mod ports;
