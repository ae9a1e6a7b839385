mod query_class;
mod record_type;

pub use query_class::QueryClass;
pub use record_type::RecordType;
