//! Currency codes and display-format configuration.
//!
//! The core never holds a process-wide formatter: collaborators build a
//! [`CurrencyFormat`] from their locale preferences and pass it explicitly
//! into formatting and aggregation entry points.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Indonesian Rupiah
    Idr,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// Number of decimal places in the currency's minor unit.
    ///
    /// JPY has no minor unit; everything else here uses two decimal places.
    #[must_use]
    pub const fn minor_unit_scale(self) -> u32 {
        match self {
            Self::Jpy => 0,
            Self::Usd | Self::Eur | Self::Idr | Self::Sgd => 2,
        }
    }

    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Idr => "Rp",
            Self::Sgd => "S$",
            Self::Jpy => "¥",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Idr => write!(f, "IDR"),
            Self::Sgd => write!(f, "SGD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "IDR" => Ok(Self::Idr),
            "SGD" => Ok(Self::Sgd),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

/// Locale preferences for rendering money values.
///
/// Bundles the currency symbol and minor-unit scale. Collaborators construct
/// one from user settings and pass it wherever a display string or a
/// minor-unit scale is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Symbol prepended to formatted amounts (e.g. "$").
    pub symbol: String,
    /// Number of decimal places of the minor unit (e.g. 2 for USD).
    pub scale: u32,
}

impl CurrencyFormat {
    /// Creates a format with an explicit symbol and scale.
    #[must_use]
    pub fn new(symbol: impl Into<String>, scale: u32) -> Self {
        Self {
            symbol: symbol.into(),
            scale,
        }
    }

    /// Creates the standard format for a currency.
    #[must_use]
    pub fn for_currency(currency: Currency) -> Self {
        Self {
            symbol: currency.symbol().to_string(),
            scale: currency.minor_unit_scale(),
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::for_currency(Currency::Usd)
    }
}
