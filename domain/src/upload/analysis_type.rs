//! Analysis type label (Value Object)

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Label selecting how the server analyzes an uploaded file.
///
/// The set of valid labels is owned by the server. The client only
/// guarantees the label is not empty, mirroring a `required` selector, and
/// otherwise sends it exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnalysisType(String);

impl AnalysisType {
    /// Label the server assumes when none is sent.
    pub const BASIC: &'static str = "basic";
    pub const ADVANCED: &'static str = "advanced";

    /// Labels offered by the upload form.
    pub fn known() -> &'static [&'static str] {
        &[Self::BASIC, Self::ADVANCED]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        Self::known().contains(&self.0.as_str())
    }
}

impl Default for AnalysisType {
    fn default() -> Self {
        Self(Self::BASIC.to_string())
    }
}

impl FromStr for AnalysisType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::InvalidAnalysisType(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for AnalysisType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AnalysisType> for String {
    fn from(value: AnalysisType) -> Self {
        value.0
    }
}

impl std::fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
