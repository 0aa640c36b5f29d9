//! Card networks and their illustrative prefixes.
//!
//! ## Key Types
//!
//! - `Network`: One of the seven supported networks
//! - `NetworkChoice`: A network, or `Random` to pool every prefix
//!
//! Names parse from and display as the labels the host shows
//! ("American Express", "Master Card", ...).

mod table;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::CardRng;
use crate::error::ConfigError;

use table::{ALL_PREFIXES, PREFIX_TABLE};

/// Label used for the pooled-random choice in every option list.
pub const RANDOM: &str = "Random";

/// A card-issuing network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    AmericanExpress,
    Discover,
    DinersClubInternational,
    MasterCard,
    Maestro,
    UnionPay,
    Visa,
}

impl Network {
    /// All networks, in option-list order.
    pub const ALL: [Network; 7] = [
        Network::AmericanExpress,
        Network::Discover,
        Network::DinersClubInternational,
        Network::MasterCard,
        Network::Maestro,
        Network::UnionPay,
        Network::Visa,
    ];

    /// Display label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Network::AmericanExpress => "American Express",
            Network::Discover => "Discover",
            Network::DinersClubInternational => "Diners Club International",
            Network::MasterCard => "Master Card",
            Network::Maestro => "Maestro",
            Network::UnionPay => "Union Pay",
            Network::Visa => "Visa",
        }
    }

    /// Prefixes registered for this network.
    #[must_use]
    pub fn prefixes(self) -> &'static [&'static str] {
        PREFIX_TABLE
            .iter()
            .find(|(network, _)| *network == self)
            .map(|(_, prefixes)| *prefixes)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownNetwork(s.to_string()))
    }
}

/// Network selection: one network or all of them pooled.
///
/// Serializes as its display label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NetworkChoice {
    #[default]
    Random,
    Named(Network),
}

impl NetworkChoice {
    /// Prefixes eligible under this choice.
    #[must_use]
    pub fn prefixes(self) -> &'static [&'static str] {
        match self {
            NetworkChoice::Random => ALL_PREFIXES,
            NetworkChoice::Named(network) => network.prefixes(),
        }
    }

    /// Pick a prefix uniformly among the eligible ones.
    ///
    /// `Random` draws from the pooled list, so networks with more prefixes
    /// are proportionally more likely.
    pub fn select_prefix(self, rng: &mut CardRng) -> &'static str {
        rng.choose(self.prefixes()).copied().unwrap_or("")
    }
}

impl fmt::Display for NetworkChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkChoice::Random => f.write_str(RANDOM),
            NetworkChoice::Named(network) => network.fmt(f),
        }
    }
}

impl FromStr for NetworkChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(RANDOM) {
            return Ok(NetworkChoice::Random);
        }
        s.parse().map(NetworkChoice::Named)
    }
}

impl TryFrom<String> for NetworkChoice {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NetworkChoice> for String {
    fn from(choice: NetworkChoice) -> Self {
        choice.to_string()
    }
}

impl From<Network> for NetworkChoice {
    fn from(network: Network) -> Self {
        NetworkChoice::Named(network)
    }
}

/// Labels of the network option list, `Random` first.
pub fn network_options() -> impl Iterator<Item = &'static str> {
    std::iter::once(RANDOM).chain(Network::ALL.into_iter().map(Network::name))
}

/// Every prefix of every network, in table order.
#[must_use]
pub fn all_prefixes() -> &'static [&'static str] {
    ALL_PREFIXES
}
