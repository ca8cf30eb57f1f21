//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Duration, Utc};

/// A short code mapped to the URL it redirects to.
///
/// Records are only alive between creation and `expires_at`, unless deleted
/// earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub expires_at: DateTime<Utc>,
}

impl Link {
    /// Creates a record that expires `ttl` from now.
    ///
    /// A `ttl` past the representable range saturates to the latest instant.
    pub fn new(code: String, original_url: String, ttl: Duration) -> Self {
        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            code,
            original_url,
            expires_at,
        }
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
