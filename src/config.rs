//! Configuration read from environment variables

use crate::errors::ConfigErr;
use rust_decimal::Decimal;
use std::env;

/// Variable with account owner name
pub const OWNER_VAR: &str = "LEDGER_OWNER";
/// Variable with initial balance of the account
pub const INITIAL_BALANCE_VAR: &str = "LEDGER_INITIAL_BALANCE";
/// Variable that turns on debug logs
pub const DEBUG_VAR: &str = "LEDGER_DEBUG";

const DEFAULT_OWNER: &str = "John Doe";

/// Settings of the ledger binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// owner of the replayed account
    pub owner: String,
    /// balance the account is opened with. Negativity is checked when account is created
    pub initial_balance: Decimal,
    /// log at debug level unless `RUST_LOG` says otherwise
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.into(),
            initial_balance: Decimal::ZERO,
            debug: false,
        }
    }
}

impl Config {
    /// Read configuration from process environment
    pub fn from_env() -> Result<Self, ConfigErr> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read configuration using `lookup` to get value of a variable. Unset variables take
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigErr> {
        let mut config = Config::default();

        if let Some(owner) = lookup(OWNER_VAR) {
            config.owner = owner;
        }

        if let Some(value) = lookup(INITIAL_BALANCE_VAR) {
            config.initial_balance =
                value
                    .trim()
                    .parse()
                    .map_err(|source| ConfigErr::InvalidDecimal {
                        var: INITIAL_BALANCE_VAR,
                        value: value.clone(),
                        source,
                    })?;
        }

        if let Some(value) = lookup(DEBUG_VAR) {
            config.debug = parse_flag(&value);
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "t"
    )
}
