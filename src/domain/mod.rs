// Domain layer: the input document, records and the ports the pipeline runs against.

pub mod model;
pub mod ports;
