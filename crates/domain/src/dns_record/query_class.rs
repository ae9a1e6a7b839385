use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QueryClass {
    #[default]
    IN,
    CH,
    HS,
    NONE,
    ANY,
}

impl QueryClass {
    pub const ALL: [QueryClass; 5] = [
        QueryClass::IN,
        QueryClass::CH,
        QueryClass::HS,
        QueryClass::NONE,
        QueryClass::ANY,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryClass::IN => "IN",
            QueryClass::CH => "CH",
            QueryClass::HS => "HS",
            QueryClass::NONE => "NONE",
            QueryClass::ANY => "ANY",
        }
    }
}

impl fmt::Display for QueryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QueryClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnsupportedClass(s.to_string()))
    }
}
