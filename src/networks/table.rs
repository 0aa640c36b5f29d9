//! Static prefix table.

use super::Network;

/// Prefixes registered per network, in table order.
pub(super) const PREFIX_TABLE: &[(Network, &[&str])] = &[
    (Network::AmericanExpress, &["34", "37"]),
    (
        Network::Discover,
        &["6011", "65", "644", "645", "646", "647", "648", "649"],
    ),
    (Network::DinersClubInternational, &["36", "38", "39"]),
    (Network::MasterCard, &["51", "52", "53", "54", "55"]),
    (Network::Maestro, &["50", "56", "57", "58", "6"]),
    (Network::UnionPay, &["62"]),
    (Network::Visa, &["4"]),
];

/// Every prefix of every network, flattened in table order.
pub(super) const ALL_PREFIXES: &[&str] = &[
    "34", "37", //
    "6011", "65", "644", "645", "646", "647", "648", "649", //
    "36", "38", "39", //
    "51", "52", "53", "54", "55", //
    "50", "56", "57", "58", "6", //
    "62", //
    "4",
];
