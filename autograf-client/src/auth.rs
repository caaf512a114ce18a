//! Credential parsing.

use std::fmt;

/// How a client authenticates. Decided once, at construction.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// API key or service-account token, sent as `Authorization: Bearer <token>`.
    Bearer(String),
    /// Username and password, embedded in the request URL.
    Basic {
        /// User name.
        username: String,
        /// Password (may itself contain `:`).
        password: String,
    },
}

impl Credentials {
    /// Interpret an `api-key` or `user:password` string.
    ///
    /// Anything containing a colon is basic auth, split on the first colon.
    pub fn parse(api_key_or_basic_auth: &str) -> Self {
        match api_key_or_basic_auth.split_once(':') {
            Some((username, password)) => Self::Basic {
                username: username.to_string(),
                password: password.to_string(),
            },
            None => Self::Bearer(api_key_or_basic_auth.to_string()),
        }
    }

    /// Whether this is basic auth.
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic { .. })
    }

    /// `Authorization` header value for bearer mode.
    pub(crate) fn bearer_header(&self) -> Option<String> {
        match self {
            Self::Bearer(token) => Some(format!("Bearer {}", token)),
            Self::Basic { .. } => None,
        }
    }

    pub(crate) fn mode(&self) -> &'static str {
        match self {
            Self::Bearer(_) => "bearer",
            Self::Basic { .. } => "basic",
        }
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.write_str("Bearer(***)"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}
