#![allow(dead_code)]

mod mock_ports;
mod responses;

pub use mock_ports::{MockExchange, MockSystemConfig};
pub use responses::{a_record, mx_record, ns_record, response, soa_record};
