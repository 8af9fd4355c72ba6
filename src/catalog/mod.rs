//! Disease catalog for the skin disease recognition system
//!
//! This module provides:
//! - The fixed list of class labels the classifier can output
//! - A category taxonomy derived from the label prefixes
//! - Free-text search over the label list
//!
//! The label order is the order the model was trained with and must not be
//! changed: the classifier's argmax index selects directly into it.

pub mod info;

pub use info::{disease_info, FALLBACK_INFO};

use serde::{Deserialize, Serialize};

/// Total number of classes the classifier can output
pub const NUM_CLASSES: usize = 10;

/// Class names, index-aligned with the trained model's output vector.
/// Prefixes encode the pathogen family: BA (bacterial), FU (fungal),
/// PA (parasitic), VI (viral); the two unprefixed entries are precancerous
/// conditions.
pub const CLASS_NAMES: [&str; NUM_CLASSES] = [
    "BA- cellulitis",
    "BA-impetigo",
    "FU-athlete-foot",
    "FU-nail-fungus",
    "FU-ringworm",
    "PA-cutaneous-larva-migrans",
    "VI-chickenpox",
    "VI-shingles",
    "Actinic Keratosis",
    "Bowen Disease",
];

/// Get the class name for a given label index
pub fn class_name(label: usize) -> Option<&'static str> {
    CLASS_NAMES.get(label).copied()
}

/// Get the label index for a given class name
pub fn class_index(name: &str) -> Option<usize> {
    CLASS_NAMES.iter().position(|&n| n == name)
}

/// Disease category, derived from the label-name prefix
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiseaseCategory {
    /// Bacterial infections (BA prefix)
    Bacterial,
    /// Fungal infections (FU prefix)
    Fungal,
    /// Parasitic infections (PA prefix)
    Parasitic,
    /// Viral infections (VI prefix)
    Viral,
    /// Precancerous conditions (no prefix)
    Precancerous,
}

impl DiseaseCategory {
    /// Derive the category from a label string
    pub fn from_label(label: &str) -> Self {
        if label.starts_with("BA") {
            DiseaseCategory::Bacterial
        } else if label.starts_with("FU") {
            DiseaseCategory::Fungal
        } else if label.starts_with("PA") {
            DiseaseCategory::Parasitic
        } else if label.starts_with("VI") {
            DiseaseCategory::Viral
        } else {
            DiseaseCategory::Precancerous
        }
    }
}

impl std::fmt::Display for DiseaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiseaseCategory::Bacterial => write!(f, "Bacterial"),
            DiseaseCategory::Fungal => write!(f, "Fungal"),
            DiseaseCategory::Parasitic => write!(f, "Parasitic"),
            DiseaseCategory::Viral => write!(f, "Viral"),
            DiseaseCategory::Precancerous => write!(f, "Precancerous"),
        }
    }
}

/// Get the disease category for a given label index
pub fn category(label: usize) -> Option<DiseaseCategory> {
    class_name(label).map(DiseaseCategory::from_label)
}

/// Case-insensitive substring search over the class labels.
///
/// Returns the first match in the fixed label order, or `None` when the
/// query is blank or matches nothing.
pub fn search(query: &str) -> Option<&'static str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    CLASS_NAMES
        .iter()
        .find(|name| name.to_lowercase().contains(&query))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name() {
        assert_eq!(class_name(0), Some("BA- cellulitis"));
        assert_eq!(class_name(6), Some("VI-chickenpox"));
        assert_eq!(class_name(9), Some("Bowen Disease"));
        assert_eq!(class_name(10), None);
    }

    #[test]
    fn test_class_index() {
        assert_eq!(class_index("BA- cellulitis"), Some(0));
        assert_eq!(class_index("FU-ringworm"), Some(4));
        assert_eq!(class_index("Actinic Keratosis"), Some(8));
        assert_eq!(class_index("Unknown disease"), None);
    }

    #[test]
    fn test_category_from_prefix() {
        assert_eq!(category(0), Some(DiseaseCategory::Bacterial));
        assert_eq!(category(2), Some(DiseaseCategory::Fungal));
        assert_eq!(category(5), Some(DiseaseCategory::Parasitic));
        assert_eq!(category(7), Some(DiseaseCategory::Viral));
        assert_eq!(category(8), Some(DiseaseCategory::Precancerous));
        assert_eq!(category(9), Some(DiseaseCategory::Precancerous));
        assert_eq!(category(42), None);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(DiseaseCategory::Bacterial.to_string(), "Bacterial");
        assert_eq!(DiseaseCategory::Precancerous.to_string(), "Precancerous");
    }

    #[test]
    fn test_search_case_insensitive() {
        assert_eq!(search("ringworm"), Some("FU-ringworm"));
        assert_eq!(search("RINGWORM"), Some("FU-ringworm"));
        assert_eq!(search("RingWorm"), Some("FU-ringworm"));
        assert_eq!(search("shingles"), Some("VI-shingles"));
        assert_eq!(search("bowen"), Some("Bowen Disease"));
    }

    #[test]
    fn test_search_first_match_wins() {
        // "cellulitis" and "impetigo" both carry the BA prefix; a bare
        // prefix query must resolve to the earliest label.
        assert_eq!(search("BA"), Some("BA- cellulitis"));
        assert_eq!(search("fu-"), Some("FU-athlete-foot"));
    }

    #[test]
    fn test_search_not_found() {
        assert_eq!(search("xyz"), None);
        assert_eq!(search("psoriasis"), None);
    }

    #[test]
    fn test_search_blank_query() {
        assert_eq!(search(""), None);
        assert_eq!(search("   "), None);
    }
}
