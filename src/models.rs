use serde::{Deserialize, Serialize};
use std::fmt;

/// A UUID v4 accepted by the guard, kept byte-for-byte as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize)]
pub struct IdResponse {
    pub id: String,
}

#[derive(Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub schema: String,
}

#[derive(Serialize)]
pub struct PingResponse {
    pub ok: bool,
    pub message: String,
}

#[derive(Deserialize)]
pub struct PingQuery {
    pub message: Option<String>,
}
