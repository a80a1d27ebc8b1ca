//! # Layout Questions
//!
//! Answers free-text questions about a [`LayoutResult`] by keyword lookup.
//! The question is lower-cased and checked against an ordered rule table;
//! the first topic with a matching keyword answers.
//!
//! Order matters. "how many rivets along width?" is answered with the total
//! because the total-count rule sits above the per-side rules, and any
//! question containing "edge" is about edge distance.
//!
//! ## Example
//!
//! ```rust
//! use rivet_core::calculations::rivet_layout;
//! use rivet_core::explain::{classify, explain, Topic};
//!
//! let result = rivet_layout(10.0, 5.0, 0.1, 4.0, 2.0);
//!
//! assert_eq!(classify("How many rivets total?"), Some(Topic::TotalRivets));
//! assert_eq!(explain(&result, "How many rivets total?"), "Total rivets = 26");
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::LayoutResult;

/// What a question is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Diameter,
    EdgeDistance,
    Spacing,
    TotalRivets,
    AlongLength,
    AlongWidth,
    ShankLength,
    Method,
}

struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
}

/// Checked top to bottom, first match wins
const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Diameter,
        keywords: &["diameter", "rivet size", "how big", "rivet width"],
    },
    Rule {
        topic: Topic::EdgeDistance,
        keywords: &["edge", "margin", "distance from edge"],
    },
    Rule {
        topic: Topic::Spacing,
        keywords: &["spacing", "gap", "between rivets"],
    },
    Rule {
        topic: Topic::TotalRivets,
        keywords: &["how many rivets", "number of rivets", "total rivets"],
    },
    Rule {
        topic: Topic::AlongLength,
        keywords: &["length rivets", "along length"],
    },
    Rule {
        topic: Topic::AlongWidth,
        keywords: &["width rivets", "along width"],
    },
    Rule {
        topic: Topic::ShankLength,
        keywords: &["rivet length", "shank"],
    },
    Rule {
        topic: Topic::Method,
        keywords: &["how", "why", "calculated", "formula"],
    },
];

/// Reply when no rule matches
pub const FALLBACK_ANSWER: &str = "Sorry, I don't understand that question. \
Try asking about diameter, edge distance, spacing, rivet length, or total rivets.";

const METHOD_ANSWER: &str = "Calculations:\n\
- Rivet diameter = 3 × sheet thickness, rounded to nearest standard size\n\
- Edge distance = user-defined multiplier × chosen diameter\n\
- Spacing = user-defined multiplier × chosen diameter\n\
- Number of rivets along a dimension = floor((dimension - 2*edge_distance)/spacing) + 1\n\
- Actual spacing evenly distributed along effective dimension\n\
- Corner rivets are counted once";

impl Topic {
    /// Render the answer for this topic from a layout
    pub fn answer(&self, result: &LayoutResult) -> String {
        match self {
            Topic::Diameter => format!(
                "Target rivet diameter = 3 × thickness = {:.4}, rounded to nearest standard size = {:.4}",
                result.target_diameter, result.chosen_diameter
            ),
            Topic::EdgeDistance => format!(
                "Edge distance = chosen multiplier × rivet diameter = {:.4}",
                result.edge_distance
            ),
            Topic::Spacing => format!(
                "Nominal spacing = {:?} × rivet diameter = {:.4}\n\
                 Actual even spacing along length = {:.4}, width = {:.4}",
                result.spacing_multiplier,
                result.nominal_spacing,
                result.actual_spacing_length,
                result.actual_spacing_width
            ),
            Topic::TotalRivets => format!("Total rivets = {}", result.total_rivets),
            Topic::AlongLength => format!("Rivets along length = {}", result.rivets_along_length),
            Topic::AlongWidth => format!("Rivets along width = {}", result.rivets_along_width),
            Topic::ShankLength => format!(
                "Recommended rivet length (shank) = {:.4}",
                result.recommended_length
            ),
            Topic::Method => METHOD_ANSWER.to_string(),
        }
    }
}

/// Find the topic a question is about, if any.
pub fn classify(question: &str) -> Option<Topic> {
    let q = question.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| q.contains(keyword)))
        .map(|rule| rule.topic)
}

/// Answer a question about a layout.
pub fn explain(result: &LayoutResult, question: &str) -> String {
    match classify(question) {
        Some(topic) => topic.answer(result),
        None => FALLBACK_ANSWER.to_string(),
    }
}
