//! ferrous-dig application layer
pub mod ports;
pub mod services;
pub mod use_cases;
