//! Skill proficiency levels and their display labels.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Unlearned,
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] =
        [SkillLevel::Unlearned, SkillLevel::Beginner, SkillLevel::Intermediate, SkillLevel::Advanced];

    /// Numeric level used by analytics (0..=3).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Unlearned => 0,
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unlearned => "Unlearned",
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Unlearned),
            1 => Some(Self::Beginner),
            2 => Some(Self::Intermediate),
            3 => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Highest level on the scale, used as the chart axis ceiling.
    pub const MAX: SkillLevel = SkillLevel::Advanced;
}
