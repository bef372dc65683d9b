//! # Portal Configuration
//!
//! Runtime settings for the portal: display options and the admin
//! credential pair. Defaults suit the demo; environment variables
//! override them for real deployments.

use serde::{Deserialize, Serialize};
use strider_core::Money;
use tracing::debug;

/// Portal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalConfig {
    /// Display name shown in headers and logs.
    pub portal_name: String,

    /// Currency symbol for formatted amounts.
    pub currency_symbol: String,

    /// Admin login username.
    pub admin_username: String,

    /// Admin login password.
    ///
    /// Plaintext comparison is acceptable for the single-credential
    /// prototype; a real deployment swaps in a hashing verifier behind
    /// the same trait.
    pub admin_password: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        PortalConfig {
            portal_name: "Strider OMS".to_string(),
            currency_symbol: "$".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "gehan123".to_string(),
        }
    }
}

impl PortalConfig {
    /// Builds the config from defaults plus `STRIDER_*` environment
    /// variable overrides.
    ///
    /// | Variable              | Field            |
    /// |-----------------------|------------------|
    /// | `STRIDER_PORTAL_NAME` | `portal_name`    |
    /// | `STRIDER_CURRENCY`    | `currency_symbol`|
    /// | `STRIDER_ADMIN_USER`  | `admin_username` |
    /// | `STRIDER_ADMIN_PASS`  | `admin_password` |
    pub fn from_env() -> Self {
        let mut config = PortalConfig::default();

        if let Ok(name) = std::env::var("STRIDER_PORTAL_NAME") {
            config.portal_name = name;
        }
        if let Ok(symbol) = std::env::var("STRIDER_CURRENCY") {
            config.currency_symbol = symbol;
        }
        if let Ok(user) = std::env::var("STRIDER_ADMIN_USER") {
            config.admin_username = user;
        }
        if let Ok(pass) = std::env::var("STRIDER_ADMIN_PASS") {
            config.admin_password = pass;
        }

        debug!(portal = %config.portal_name, "config loaded");
        config
    }

    /// Formats an amount with the configured symbol, e.g. `$139.93`.
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}.{:02}",
            self.currency_symbol,
            amount.dollars(),
            amount.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.portal_name, "Strider OMS");
        assert_eq!(config.admin_username, "admin");
    }

    #[test]
    fn test_format_currency() {
        let config = PortalConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(13993)), "$139.93");
        assert_eq!(config.format_currency(Money::from_cents(5)), "$0.05");
    }
}
