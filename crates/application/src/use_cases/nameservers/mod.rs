pub mod load_nameservers;

pub use load_nameservers::{LoadNameserversUseCase, LoadedNameservers};
