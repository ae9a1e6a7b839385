//! Turns command-line arguments into the names, types, classes and
//! nameservers of one run.

use ferrous_dig_domain::{reverse_name, DomainError, QueryClass, RecordType};
use std::net::IpAddr;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct QueryPlan {
    pub names: Vec<String>,
    pub types: Vec<RecordType>,
    pub classes: Vec<QueryClass>,
    pub nameservers: Vec<String>,
}

impl QueryPlan {
    /// Positional tokens are sorted by shape: `@server` is a nameserver, a
    /// known record type or class name is a type or class, anything else is
    /// a query name. Flag values are taken as given.
    pub fn build(
        positional: &[String],
        names: &[String],
        types: &[String],
        classes: &[String],
        nameservers: &[String],
        reverse: bool,
    ) -> Result<Self, DomainError> {
        let mut plan = QueryPlan {
            names: names.to_vec(),
            nameservers: nameservers.to_vec(),
            ..Default::default()
        };

        for raw in types {
            plan.types.push(raw.parse()?);
        }
        for raw in classes {
            plan.classes.push(raw.parse()?);
        }

        for arg in positional {
            if let Some(server) = arg.strip_prefix('@') {
                plan.nameservers.push(server.to_string());
            } else if let Ok(record_type) = arg.parse::<RecordType>() {
                plan.types.push(record_type);
            } else if let Ok(class) = arg.parse::<QueryClass>() {
                plan.classes.push(class);
            } else {
                plan.names.push(arg.clone());
            }
        }

        if reverse {
            plan.names = plan
                .names
                .iter()
                .map(|name| {
                    name.parse::<IpAddr>()
                        .map(|ip| reverse_name(&ip))
                        .map_err(|_| DomainError::InvalidReverseAddress(name.clone()))
                })
                .collect::<Result<_, _>>()?;
            plan.types = vec![RecordType::PTR];
        }

        if plan.types.is_empty() {
            plan.types.push(RecordType::A);
        }
        if plan.classes.is_empty() {
            plan.classes.push(QueryClass::IN);
        }

        Ok(plan)
    }
}
