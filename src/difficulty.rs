use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Difficulty tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString, Display)]
pub enum Tier {
    #[strum(serialize = "P")]
    Practice,
    #[strum(serialize = "G")]
    Golden,
    #[strum(serialize = "U")]
    Universal,
}

/// Two-part difficulty label such as `U7`: tier first, then rung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DifficultyLabel {
    pub tier: Tier,
    pub rung: u32,
}

impl DifficultyLabel {
    pub const fn new(tier: Tier, rung: u32) -> Self {
        Self { tier, rung }
    }

    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        let mut chars = label.chars();
        let tier = Tier::from_str(&chars.next()?.to_string()).ok()?;
        let rung = chars.as_str().parse().ok()?;
        Some(Self { tier, rung })
    }

    pub fn is_universal(label: &str) -> bool {
        label.starts_with('U')
    }
}

impl Default for DifficultyLabel {
    fn default() -> Self {
        Self::new(Tier::Practice, 1)
    }
}

impl fmt::Display for DifficultyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tier, self.rung)
    }
}

impl Serialize for DifficultyLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
