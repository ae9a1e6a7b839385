pub mod lookup;
pub mod nameservers;

pub use lookup::LookupUseCase;
pub use nameservers::{LoadNameserversUseCase, LoadedNameservers};
