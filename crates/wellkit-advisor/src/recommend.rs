//! Food-recommendation catalog.
//!
//! All data in this module is hardcoded and fictional-advisory.  The catalog
//! maps a free-text query to a category by the same substring-OR technique
//! the rule table uses, then returns that category's fixed list of four
//! items.  Category inference is deliberately independent of topic
//! selection in the engine — the two keyword tables are evaluated over the
//! same query without consulting each other.

use wellkit_contracts::chat::RecommendationItem;

/// A food category in the recommendation catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodCategory {
    BloodPressure,
    Headache,
    Fever,
    Diet,
    Stress,
    Energy,
}

/// Ordered category keyword table.  First match wins.
///
/// Note the asymmetry against the engine's topic rules: blood pressure is a
/// category here but not a generic topic there, and energy/fatigue has no
/// topic at all — both are reachable only through this table.
const CATEGORY_KEYWORDS: &[(FoodCategory, &[&str])] = &[
    (FoodCategory::BloodPressure, &["blood pressure", "hypertension"]),
    (FoodCategory::Headache, &["headache", "head pain"]),
    (FoodCategory::Fever, &["fever", "temperature"]),
    (FoodCategory::Diet, &["diet", "nutrition", "food"]),
    (FoodCategory::Stress, &["stress", "anxiety"]),
    (FoodCategory::Energy, &["energy", "tired", "fatigue"]),
];

/// Infer the food category for a query, if any.
///
/// The query is lowercased for matching; categories are tested in
/// declaration order and the first whose keywords any-match wins.
pub fn category_for(query: &str) -> Option<FoodCategory> {
    let normalized = query.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(category, _)| *category)
}

/// The fixed item list for a category — always exactly four entries.
pub fn foods_for(category: FoodCategory) -> Vec<RecommendationItem> {
    let item = RecommendationItem::new;
    match category {
        FoodCategory::BloodPressure => vec![
            item("Bananas", "Rich in potassium, helps regulate blood pressure", "🍌"),
            item("Leafy Greens", "High in nitrates, relaxes blood vessels", "🥬"),
            item("Berries", "Antioxidants reduce blood pressure", "🫐"),
            item("Oatmeal", "Fiber helps lower blood pressure", "🥣"),
        ],
        FoodCategory::Headache => vec![
            item("Water", "Hydration prevents headaches", "💧"),
            item("Almonds", "Magnesium relaxes blood vessels", "🌰"),
            item("Ginger Tea", "Anti-inflammatory properties", "🫖"),
            item("Spinach", "Rich in B vitamins", "🥬"),
        ],
        FoodCategory::Fever => vec![
            item("Citrus Fruits", "Vitamin C boosts immunity", "🍊"),
            item("Chicken Soup", "Hydration and nutrients", "🍲"),
            item("Coconut Water", "Electrolyte balance", "🥥"),
            item("Honey", "Antibacterial properties", "🍯"),
        ],
        FoodCategory::Diet => vec![
            item("Salmon", "Omega-3 for heart health", "🐟"),
            item("Broccoli", "Vitamins and fiber", "🥦"),
            item("Quinoa", "Complete protein source", "🌾"),
            item("Avocado", "Healthy fats", "🥑"),
        ],
        FoodCategory::Stress => vec![
            item("Dark Chocolate", "Reduces stress hormones", "🍫"),
            item("Green Tea", "L-theanine calms mind", "🍵"),
            item("Nuts", "Omega-3 reduces anxiety", "🥜"),
            item("Yogurt", "Probiotics improve mood", "🥛"),
        ],
        FoodCategory::Energy => vec![
            item("Sweet Potatoes", "Complex carbs for energy", "🍠"),
            item("Eggs", "Protein and B vitamins", "🥚"),
            item("Brown Rice", "Sustained energy release", "🍚"),
            item("Bananas", "Natural energy boost", "🍌"),
        ],
    }
}

/// Look up recommendations for a free-text query.
///
/// Pure function of the query text: infers the category and returns its
/// item list, or an empty list when no category matches.  Never depends on
/// mutable state.
pub fn recommendations_for(query: &str) -> Vec<RecommendationItem> {
    category_for(query).map(foods_for).unwrap_or_default()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CATEGORIES: [FoodCategory; 6] = [
        FoodCategory::BloodPressure,
        FoodCategory::Headache,
        FoodCategory::Fever,
        FoodCategory::Diet,
        FoodCategory::Stress,
        FoodCategory::Energy,
    ];

    /// Every category returns exactly four fully populated items.
    #[test]
    fn every_category_has_four_complete_items() {
        for category in ALL_CATEGORIES {
            let items = foods_for(category);
            assert_eq!(items.len(), 4, "{:?} must have 4 items", category);
            for item in &items {
                assert!(!item.name.is_empty());
                assert!(!item.benefit.is_empty());
                assert!(!item.symbol.is_empty());
            }
        }
    }

    #[test]
    fn category_inference_is_case_insensitive() {
        assert_eq!(category_for("HEADACHE again"), Some(FoodCategory::Headache));
        assert_eq!(category_for("Head Pain"), Some(FoodCategory::Headache));
    }

    /// Blood pressure is declared before headache; a query containing both
    /// picks the earlier category.
    #[test]
    fn category_order_is_declaration_order() {
        let query = "headache from my blood pressure";
        assert_eq!(category_for(query), Some(FoodCategory::BloodPressure));
    }

    #[test]
    fn energy_category_is_reachable_by_fatigue_keywords() {
        assert_eq!(category_for("always tired"), Some(FoodCategory::Energy));
        assert_eq!(category_for("no energy lately"), Some(FoodCategory::Energy));
        assert_eq!(category_for("fatigue"), Some(FoodCategory::Energy));
    }

    #[test]
    fn unmatched_query_yields_empty_list() {
        assert_eq!(category_for("xyz123 unrelated nonsense"), None);
        assert!(recommendations_for("xyz123 unrelated nonsense").is_empty());
    }
}
