//! Origin identity and trust.
//!
//! Each endpoint stamps its origin on every message it posts. The receiving
//! side checks that stamp against its policy before acting; anything else is
//! dropped without a state transition.

use serde::{Deserialize, Serialize};

/// Opaque origin identity of an execution context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Origin(String);

impl Origin {
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Origin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Allow-list with exactly one trusted origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginPolicy {
    trusted: Origin,
}

impl OriginPolicy {
    pub fn trusting(trusted: Origin) -> Self {
        Self { trusted }
    }

    pub fn trusted(&self) -> &Origin {
        &self.trusted
    }

    pub fn allows(&self, origin: &Origin) -> bool {
        &self.trusted == origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_trusted_origin_is_allowed() {
        let policy = OriginPolicy::trusting(Origin::from("http://localhost:3001"));
        assert!(policy.allows(&Origin::from("http://localhost:3001")));
        assert!(!policy.allows(&Origin::from("http://localhost:3002")));
        assert!(!policy.allows(&Origin::from("https://evil.example")));
    }

    #[test]
    fn origin_comparison_is_exact() {
        let policy = OriginPolicy::trusting(Origin::from("http://localhost:3001"));
        assert!(!policy.allows(&Origin::from("http://localhost:3001/")));
        assert!(!policy.allows(&Origin::from("HTTP://LOCALHOST:3001")));
    }
}
