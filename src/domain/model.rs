use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// RxNorm Concept Unique Identifier. Opaque: never parsed or checked locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rxcui(String);

impl Rxcui {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Rxcui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Rxcui {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Rxcui {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for Rxcui {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl FromStr for Rxcui {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// One entry of `propConceptGroup.propConcept`, kept exactly as the service sent it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyRecord {
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl PropertyRecord {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }

    pub fn prop_category(&self) -> Option<&str> {
        self.get("propCategory")
    }

    pub fn prop_name(&self) -> Option<&str> {
        self.get("propName")
    }

    pub fn prop_value(&self) -> Option<&str> {
        self.get("propValue")
    }
}
