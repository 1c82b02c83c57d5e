pub mod generator;
pub mod pool;
pub mod rules;

pub use generator::generate_pack;
pub use pool::{CardPool, Category, PrintingGroup};
pub use rules::{draft_booster, load_rules_file, play_booster, RulesError, SlotRule};
