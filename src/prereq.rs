//! Prerequisite index: quest id -> display names of the quests that must be
//! completed first.
//!
//! Built once, immediately after the catalog loads, and consulted by the
//! aggregator whenever a status comes back `Locked`.

use std::collections::HashMap;

use log::debug;

use crate::catalog::QuestCatalog;

/// Map from quest id to the display names of its prerequisite quests, in
/// catalog declaration order.
///
/// Quests with zero resolvable prerequisites have no entry at all; an empty
/// reason list is never stored, so `reason_for` returning `None` always
/// means "nothing to show".
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteIndex {
    names_by_quest: HashMap<String, Vec<String>>,
}

impl PrerequisiteIndex {
    /// Build the index from the full catalog. Pure and deterministic given
    /// identical catalog ordering.
    ///
    /// Referenced ids with no catalog entry fall back to the raw id as the
    /// display name rather than being dropped; a broken reference is still
    /// information worth showing to the player.
    pub fn build(catalog: &QuestCatalog) -> Self {
        let display_names: HashMap<&str, &str> = catalog
            .quests()
            .iter()
            .map(|q| (q.id.as_str(), q.name.as_str()))
            .collect();

        let mut names_by_quest = HashMap::new();
        for quest in catalog.quests() {
            let names: Vec<String> = quest
                .prerequisite_ids()
                .map(|id| match display_names.get(id) {
                    Some(name) => (*name).to_string(),
                    None => {
                        debug!(
                            "quest {} references unknown prerequisite {}, using raw id",
                            quest.id, id
                        );
                        id.to_string()
                    }
                })
                .collect();
            if !names.is_empty() {
                names_by_quest.insert(quest.id.clone(), names);
            }
        }
        Self { names_by_quest }
    }

    /// Prerequisite display names for a quest, if it has any.
    pub fn names_for(&self, quest_id: &str) -> Option<&[String]> {
        self.names_by_quest.get(quest_id).map(Vec::as_slice)
    }

    /// Comma-joined locked-reason text for a quest, if it has prerequisites.
    pub fn reason_for(&self, quest_id: &str) -> Option<String> {
        self.names_for(quest_id).map(|names| names.join(", "))
    }

    pub fn len(&self) -> usize {
        self.names_by_quest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names_by_quest.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Quest, QuestCatalog};

    fn catalog(quests: Vec<Quest>) -> QuestCatalog {
        QuestCatalog::new(quests).expect("catalog")
    }

    #[test]
    fn quests_without_prerequisites_are_omitted() {
        let cat = catalog(vec![
            Quest::new("q1", "Intro"),
            Quest::new("q2", "Debut").with_prerequisite("q1"),
        ]);
        let index = PrerequisiteIndex::build(&cat);
        assert!(index.names_for("q1").is_none());
        assert_eq!(index.names_for("q2").unwrap(), ["Intro"]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn unknown_reference_falls_back_to_raw_id() {
        let cat = catalog(vec![
            Quest::new("q2", "Debut").with_prerequisite("q_missing")
        ]);
        let index = PrerequisiteIndex::build(&cat);
        assert_eq!(index.reason_for("q2").unwrap(), "q_missing");
    }

    #[test]
    fn reason_joins_names_in_catalog_order() {
        let cat = catalog(vec![
            Quest::new("q1", "Intro"),
            Quest::new("q2", "Search Mission"),
            Quest::new("q3", "Finale").with_prerequisite_list(&["q1", "q2"]),
        ]);
        let index = PrerequisiteIndex::build(&cat);
        assert_eq!(index.reason_for("q3").unwrap(), "Intro, Search Mission");
    }

    #[test]
    fn mixed_single_and_list_conditions_keep_declaration_order() {
        let cat = catalog(vec![
            Quest::new("q1", "Intro"),
            Quest::new("q2", "Debut"),
            Quest::new("q4", "Finale")
                .with_prerequisite("q2")
                .with_prerequisite_list(&["q1", "q_gone"]),
        ]);
        let index = PrerequisiteIndex::build(&cat);
        assert_eq!(
            index.names_for("q4").unwrap(),
            ["Debut", "Intro", "q_gone"]
        );
    }
}
