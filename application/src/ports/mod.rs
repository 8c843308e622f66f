//! Port definitions (interfaces to the outside world)

pub mod completion_gateway;
