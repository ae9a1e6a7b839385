pub mod resolv_conf;

pub use resolv_conf::ResolvConfProvider;
