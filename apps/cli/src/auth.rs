//! # Authentication
//!
//! A static credential check gating every command, kept behind a trait
//! so a real user directory could be substituted without touching the
//! command handlers.

/// Checks a username/password pair before any command runs.
pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

/// Fixed single-admin credentials.
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    username: String,
    password: String,
}

impl StaticAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        StaticAuthenticator {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticAuthenticator {
    fn default() -> Self {
        StaticAuthenticator::new("admin", "password")
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials() {
        let auth = StaticAuthenticator::default();
        assert!(auth.authenticate("admin", "password"));
        assert!(!auth.authenticate("admin", "wrong"));
        assert!(!auth.authenticate("", ""));
    }

    #[test]
    fn test_custom_credentials() {
        let auth = StaticAuthenticator::new("munshi", "k4robar");
        assert!(auth.authenticate("munshi", "k4robar"));
        assert!(!auth.authenticate("admin", "password"));
    }
}
