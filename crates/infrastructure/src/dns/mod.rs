pub mod exchange;
pub mod transport;

pub use exchange::TransportExchange;
