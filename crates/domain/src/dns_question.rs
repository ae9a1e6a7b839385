use crate::{QueryClass, RecordType};
use serde::Serialize;
use std::sync::Arc;

/// One question to ask: the name as given by the user plus type and class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsQuestion {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: QueryClass,
}

impl DnsQuestion {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, class: QueryClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }

    /// Every combination of names, types and classes, names varying slowest.
    pub fn plan(names: &[String], types: &[RecordType], classes: &[QueryClass]) -> Vec<Self> {
        let mut questions = Vec::with_capacity(names.len() * types.len() * classes.len());
        for name in names {
            for record_type in types {
                for class in classes {
                    questions.push(Self::new(name.as_str(), *record_type, *class));
                }
            }
        }
        questions
    }
}
