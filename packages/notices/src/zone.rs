//! Coarse operational zones derived from location codes.
//!
//! Zones come from an ordered rule table matched against the upper-cased
//! location code; the first rule that matches wins.

use serde::{Serialize, Serializer};

/// Operational zone of a plant location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Electric arc furnace 1, line 01.
    Hea1,
    /// Electric arc furnace 1, line 02.
    Hea2,
    /// Ladle furnace 1.
    LadleFurnace1,
    /// Ladle furnace 2.
    LadleFurnace2,
    /// Continuous casting.
    ContinuousCasting,
    /// Scrap yard.
    ScrapYard,
    /// Electrical substation.
    Substation,
    /// Electric furnaces not tied to a specific line.
    ElectricFurnaces,
    /// Steel shop.
    SteelShop,
    /// Anything else.
    Other,
}

impl Zone {
    /// Every zone, in display order.
    pub const ALL: [Zone; 10] = [
        Zone::Hea1,
        Zone::Hea2,
        Zone::LadleFurnace1,
        Zone::LadleFurnace2,
        Zone::ContinuousCasting,
        Zone::ScrapYard,
        Zone::Substation,
        Zone::ElectricFurnaces,
        Zone::SteelShop,
        Zone::Other,
    ];

    /// Plant label shown to operators.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hea1 => "HEA1",
            Self::Hea2 => "HEA2",
            Self::LadleFurnace1 => "HORNO CUCHARA HC1",
            Self::LadleFurnace2 => "HORNO CUCHARA HC2",
            Self::ContinuousCasting => "COLADA CONTINUA",
            Self::ScrapYard => "PARQUE CHATARRA",
            Self::Substation => "SUBESTACIÓN",
            Self::ElectricFurnaces => "HORNOS ELÉCTRICOS",
            Self::SteelShop => "ACERÍA",
            Self::Other => "OTROS",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Zone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// How a rule matches a location code.
enum Match {
    Prefix(&'static str),
    ContainsAny(&'static [&'static str]),
}

/// Ordered zone rules.
const RULES: [(Match, Zone); 9] = [
    (Match::Prefix("SE-ST-EAF1-01"), Zone::Hea1),
    (Match::Prefix("SE-ST-EAF1-02"), Zone::Hea2),
    (Match::ContainsAny(&["SLM1-61"]), Zone::LadleFurnace1),
    (Match::ContainsAny(&["SLM1-62"]), Zone::LadleFurnace2),
    (Match::ContainsAny(&["CCS1", "CCS2"]), Zone::ContinuousCasting),
    (Match::ContainsAny(&["PCC1", "PCC2"]), Zone::ScrapYard),
    (Match::ContainsAny(&["SE-SP-"]), Zone::Substation),
    (Match::ContainsAny(&["EAF1"]), Zone::ElectricFurnaces),
    (Match::ContainsAny(&["ACERIA"]), Zone::SteelShop),
];

/// Classify a location code into an operational zone.
///
/// # Examples
/// ```
/// use notice_parser::zone::{classify_zone, Zone};
///
/// assert_eq!(classify_zone("SE-ST-EAF1-02-ED-EA-01-03"), Zone::Hea2);
/// assert_eq!(classify_zone(""), Zone::Other);
/// ```
#[must_use]
pub fn classify_zone(location_code: &str) -> Zone {
    let code = location_code.to_uppercase();

    RULES
        .iter()
        .find(|(rule, _)| match rule {
            Match::Prefix(prefix) => code.starts_with(prefix),
            Match::ContainsAny(needles) => needles.iter().any(|n| code.contains(n)),
        })
        .map_or(Zone::Other, |(_, zone)| *zone)
}
