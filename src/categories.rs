//! The fixed category enumeration.
//!
//! Every category label, its sort position and its icons live in the
//! single [`CATEGORIES`] table. Aggregation, sorting and rendering all
//! read from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of categories in the enumeration.
pub const CATEGORY_COUNT: usize = 7;

/// Static metadata for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    /// Label as it appears in the snapshot.
    pub label: &'static str,
    /// Colored icon asset (member).
    pub colored_icon: &'static str,
    /// Grey icon asset (non-member). `None` when the category has no grey variant.
    pub grey_icon: Option<&'static str>,
    /// Terminal glyph used in place of the colored icon. Text-default
    /// symbols carry VS16 so every glyph renders two columns wide.
    pub glyph: &'static str,
    /// Whether the category appears in a participant's icon strip.
    pub in_strip: bool,
}

/// The category enumeration, in sort order.
pub const CATEGORIES: [CategoryEntry; CATEGORY_COUNT] = [
    CategoryEntry {
        label: "Citizens",
        colored_icon: "citizens.svg",
        grey_icon: Some("citizensg.svg"),
        glyph: "🏛\u{fe0f}",
        in_strip: true,
    },
    CategoryEntry {
        label: "Retro Funding Contribution",
        colored_icon: "rcontribution.svg",
        grey_icon: Some("rcontribitiong.svg"),
        glyph: "💰",
        in_strip: true,
    },
    CategoryEntry {
        label: "Top 100 Delegate",
        colored_icon: "topdelegate.svg",
        grey_icon: Some("topdelegateg.svg"),
        glyph: "🎖\u{fe0f}",
        in_strip: true,
    },
    CategoryEntry {
        label: "Retro Funding Voters",
        colored_icon: "rfvoter.svg",
        grey_icon: Some("rfvoterg.svg"),
        glyph: "🗳\u{fe0f}",
        in_strip: true,
    },
    CategoryEntry {
        label: "Governance Contribution",
        colored_icon: "governancec.svg",
        grey_icon: Some("governancecg.svg"),
        glyph: "📜",
        in_strip: true,
    },
    CategoryEntry {
        label: "Truemarket Attesters",
        colored_icon: "truemarket.svg",
        grey_icon: Some("truemarketg.svg"),
        glyph: "✅",
        in_strip: true,
    },
    CategoryEntry {
        label: "Unaffiliated User",
        colored_icon: "unaffiliated.svg",
        grey_icon: None,
        glyph: "👤",
        in_strip: false,
    },
];

/// Placeholder glyph for a category the participant does not belong to.
pub const INACTIVE_GLYPH: &str = "·";

/// A participant's affiliation.
///
/// Labels outside the enumeration are kept as [`Category::Other`]; they
/// have no icon and no sort position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Citizens,
    RetroFundingContribution,
    Top100Delegate,
    RetroFundingVoters,
    GovernanceContribution,
    TruemarketAttesters,
    UnaffiliatedUser,
    Other(String),
}

impl Category {
    /// Known categories, indexed like [`CATEGORIES`].
    pub const KNOWN: [Category; CATEGORY_COUNT] = [
        Category::Citizens,
        Category::RetroFundingContribution,
        Category::Top100Delegate,
        Category::RetroFundingVoters,
        Category::GovernanceContribution,
        Category::TruemarketAttesters,
        Category::UnaffiliatedUser,
    ];

    /// Position in the enumeration, `None` for unknown labels.
    pub fn position(&self) -> Option<usize> {
        Self::KNOWN.iter().position(|known| known == self)
    }

    /// Table entry for this category.
    pub fn entry(&self) -> Option<&'static CategoryEntry> {
        self.position().map(|i| &CATEGORIES[i])
    }

    /// The label as written in the snapshot.
    pub fn label(&self) -> &str {
        match self {
            Category::Other(s) => s.as_str(),
            known => known.entry().map(|e| e.label).unwrap_or_default(),
        }
    }
}

/// Look up a category entry by its label.
pub fn entry_for(label: &str) -> Option<&'static CategoryEntry> {
    CATEGORIES.iter().find(|e| e.label == label)
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match CATEGORIES.iter().position(|e| e.label == s) {
            Some(i) => Category::KNOWN[i].clone(),
            None => Category::Other(s.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match Category::from(s.as_str()) {
            Category::Other(_) => Category::Other(s),
            known => known,
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(s) => s,
            known => known.label().to_string(),
        }
    }
}
