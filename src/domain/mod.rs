// Domain layer: task and outcome models plus the solver port. No I/O here.

pub mod model;
pub mod ports;
