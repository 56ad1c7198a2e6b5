//! Bearer credentials.

use std::fmt;

/// Opaque bearer token sent as `Authorization: Bearer <token>`.
///
/// Passed to each authenticated call; clients never store one.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

impl From<String> for BearerToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for BearerToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = BearerToken::from("tok123");
        assert_eq!(token.as_str(), "tok123");
        assert!(!format!("{:?}", token).contains("tok123"));
    }
}
