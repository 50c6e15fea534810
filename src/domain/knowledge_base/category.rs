//! Document categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::KnowledgeStoreError;

/// Topic a knowledge document belongs to. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Eligibility,
    Courses,
    Fees,
    Scholarships,
    Contact,
    General,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 6] = [
        Self::Eligibility,
        Self::Courses,
        Self::Fees,
        Self::Scholarships,
        Self::Contact,
        Self::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eligibility => "eligibility",
            Self::Courses => "courses",
            Self::Fees => "fees",
            Self::Scholarships => "scholarships",
            Self::Contact => "contact",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = KnowledgeStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KnowledgeStoreError::UnknownCategory {
                name: s.to_string(),
            })
    }
}
