//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie attributes
    pub cookie: CookieConfig,
    /// Absolute session lifetime. Expiry is fixed at login; there is no
    /// sliding renewal, and re-login requires logging out first.
    pub session_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie: CookieConfig::default(),
            session_ttl: Duration::from_secs(2 * 3600), // 2 hours
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie: CookieConfig {
                secure: false,
                ..CookieConfig::default()
            },
            ..Default::default()
        }
    }

    /// Session TTL in whole seconds, as used for cookie Max-Age
    pub fn session_ttl_secs(&self) -> u64 {
        self.session_ttl.as_secs()
    }
}
