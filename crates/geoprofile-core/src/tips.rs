// crates/geoprofile-core/src/tips.rs

//! Canned travel tips for a few popular destinations.

use crate::text::fold_key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const GENERIC_TIP: &str =
    "Remember to check local customs and travel advisories before your trip.";

// Keys are folded names; a country may appear under several spellings.
static TIPS: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let us = "Explore national parks and iconic cities like New York and San Francisco.";
    [
        ("France", "Visit the Eiffel Tower and try authentic French pastries."),
        ("Japan", "Explore Tokyo's vibrant culture and beautiful cherry blossoms."),
        ("Brazil", "Don't miss the Amazon rainforest and lively Rio Carnival."),
        (
            "India",
            "Experience the diverse cultures and historic monuments like the Taj Mahal.",
        ),
        ("USA", us),
        ("United States", us),
    ]
    .into_iter()
    .map(|(name, tip)| (fold_key(name), tip))
    .collect()
});

/// Tip for `country` (case- and accent-insensitive), or [`GENERIC_TIP`].
pub fn travel_tip(country: &str) -> &'static str {
    TIPS.get(&fold_key(country)).copied().unwrap_or(GENERIC_TIP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown() {
        assert!(travel_tip("France").contains("Eiffel"));
        assert!(travel_tip("  japan ").contains("Tokyo"));
        assert_eq!(travel_tip("United States"), travel_tip("USA"));
        assert_eq!(travel_tip("Liechtenstein"), GENERIC_TIP);
    }
}
