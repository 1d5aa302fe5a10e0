use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::RouteError;

/// Top-level groups of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    User,
    Account,
    Transaction,
}

impl Resource {
    /// Table order.
    pub const ALL: [Resource; 3] = [Resource::User, Resource::Account, Resource::Transaction];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Account => "account",
            Resource::Transaction => "transaction",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| RouteError::UnknownResource(s.to_string()))
    }
}
