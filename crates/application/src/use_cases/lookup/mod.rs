pub mod run_lookup;

pub use run_lookup::LookupUseCase;
