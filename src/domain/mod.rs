// Domain layer: row and result models plus the ports the controller talks through.

pub mod model;
pub mod ports;
