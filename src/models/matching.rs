//! Matching-result models.
//!
//! Candidates are produced by one matching request and handed straight to the
//! presentation layer; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// One (skill, proficiency) pair on a match candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub skill: String,
    pub level: f64,
}

impl SkillLevel {
    /// Proficiency percentage clamped into `[0, 100]`.
    /// The service owns the scoring, but out-of-range values must not leak
    /// into display code.
    pub fn level_percent(&self) -> f64 {
        self.level.clamp(0.0, 100.0)
    }
}

/// One entry of a matching result, most relevant first in the returned list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub name: String,
    pub tag: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<Vec<SkillLevel>>,
}

impl MatchCandidate {
    /// Classify the service-supplied tag into a display tier.
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_tag(&self.tag)
    }
}

/// Display tier for a match candidate.
///
/// The service's tag vocabulary has shifted between releases, so the tag is
/// carried as an open string and only mapped to a tier for presentation.
/// Unrecognized tags fall back to [`MatchTier::Explore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    High,
    Medium,
    Explore,
}

impl MatchTier {
    /// Map a tag string to a tier, accepting both vocabularies the service
    /// has used ("High Alignment" tiers and "Suggested Match" tiers).
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "High Alignment" | "Suggested Match" => MatchTier::High,
            "Medium Alignment" | "Compatible" | "Compatible Match" => MatchTier::Medium,
            _ => MatchTier::Explore,
        }
    }

    /// Display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            MatchTier::High => "High Alignment",
            MatchTier::Medium => "Medium Alignment",
            MatchTier::Explore => "Explore",
        }
    }
}
