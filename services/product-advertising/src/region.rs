use std::fmt;
use std::str::FromStr;

use paasign_core::Error;

/// Region selects the endpoint requests are signed for and sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Canada
    CA,
    /// China
    CN,
    /// Germany
    DE,
    /// Spain
    ES,
    /// France
    FR,
    /// Italy
    IT,
    /// Japan
    JP,
    /// United Kingdom
    UK,
    /// United States
    US,
}

impl Region {
    /// All supported regions.
    pub const ALL: [Region; 9] = [
        Region::CA,
        Region::CN,
        Region::DE,
        Region::ES,
        Region::FR,
        Region::IT,
        Region::JP,
        Region::UK,
        Region::US,
    ];

    /// The two letter code of this region, like `US`.
    pub fn code(&self) -> &'static str {
        match self {
            Region::CA => "CA",
            Region::CN => "CN",
            Region::DE => "DE",
            Region::ES => "ES",
            Region::FR => "FR",
            Region::IT => "IT",
            Region::JP => "JP",
            Region::UK => "UK",
            Region::US => "US",
        }
    }

    /// The host serving this region.
    pub fn domain(&self) -> &'static str {
        match self {
            Region::CA => "ecs.amazonaws.ca",
            Region::CN => "ecs.amazon.cn",
            Region::DE => "ecs.amazonaws.de",
            Region::ES => "ecs.amazon.es",
            Region::FR => "ecs.amazonaws.fr",
            Region::IT => "ecs.amazon.it",
            Region::JP => "ecs.amazonaws.jp",
            Region::UK => "ecs.amazonaws.co.uk",
            Region::US => "ecs.amazonaws.com",
        }
    }
}

impl FromStr for Region {
    type Err = Error;

    /// Codes are matched exactly, `us` is not a region.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.code() == s)
            .ok_or_else(|| Error::config_invalid(format!("unknown region: {s:?}")))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
