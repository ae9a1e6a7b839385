pub mod message_builder;
pub mod record_type_map;
pub mod response_normalizer;

pub use message_builder::{MessageBuilder, QueryIdSource, RandomQueryIds};
pub use record_type_map::RecordTypeMapper;
pub use response_normalizer::ResponseNormalizer;
