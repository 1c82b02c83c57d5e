use crate::booster::pool::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One pack position: how many cards to draw and from which weighted
/// categories. Weight order is the walk order of the weighted pick, so
/// declaration order matters for RNG compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotRule {
    pub count: usize,
    pub name: String,
    pub weights: Vec<(Category, f64)>,
}

impl SlotRule {
    pub fn new(count: usize, name: &str, weights: Vec<(Category, f64)>) -> Self {
        SlotRule {
            count,
            name: name.to_string(),
            weights,
        }
    }
}

/// Legacy draft booster: 1 rare/mythic (~1/8 mythic), 3 uncommons,
/// 10 commons
pub fn draft_booster() -> Vec<SlotRule> {
    vec![
        SlotRule::new(
            1,
            "Rare/Mythic Slot",
            vec![(Category::Rare, 7.0), (Category::Mythic, 1.0)],
        ),
        SlotRule::new(3, "Uncommon Slots", vec![(Category::Uncommon, 1.0)]),
        SlotRule::new(10, "Common Slots", vec![(Category::Common, 1.0)]),
    ]
}

// Play booster formula
// --------------------------------------
// 1-7    Commons          Standard common cards from the main set.
// 8-10   Uncommons        Standard uncommon cards from the main set.
// 11     Main Rare/Mythic Guaranteed rare or mythic (~1 in 8 mythic).
// 12     Land             Basic land or common dual land, 80/20.
// 13-14  Wildcards        Any rarity, weighted toward commons.
pub fn play_booster() -> Vec<SlotRule> {
    vec![
        SlotRule::new(7, "Common Slots", vec![(Category::Common, 1.0)]),
        SlotRule::new(3, "Uncommon Slots", vec![(Category::Uncommon, 1.0)]),
        SlotRule::new(
            1,
            "Rare/Mythic Slot",
            vec![(Category::Rare, 7.0), (Category::Mythic, 1.0)],
        ),
        SlotRule::new(
            1,
            "Land Slot",
            vec![(Category::Basic, 4.0), (Category::Land, 1.0)],
        ),
        SlotRule::new(
            2,
            "Wildcard Slots",
            vec![
                (Category::Common, 60.0),
                (Category::Uncommon, 25.0),
                (Category::Rare, 7.0),
                (Category::Mythic, 1.0),
            ],
        ),
    ]
}

/// Load a custom rule list from a JSON file
pub fn load_rules_file(path: &str) -> Result<Vec<SlotRule>, RulesError> {
    let content = std::fs::read_to_string(path)?;
    let rules: Vec<SlotRule> = serde_json::from_str(&content)?;
    Ok(rules)
}
