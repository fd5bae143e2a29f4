//! Quest catalog data model.
//!
//! The catalog is loaded once at process start and treated as read-only for
//! the rest of the process lifetime; everything downstream (prerequisite
//! index, aggregation) borrows it immutably.

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

/// One start-gate on a quest, as declared by the catalog source.
///
/// Conditions are decoded by tag; the overlay only interprets the
/// quest-completion kind and carries everything else opaquely. Probing
/// unknown condition shapes is deliberately not supported — a condition
/// either names its target quests explicitly or it contributes nothing to
/// the prerequisite index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StartCondition {
    /// Quest(s) that must be finished before this quest becomes available.
    QuestCompleted { target: PrereqTarget },
    /// Any other gate (level, standing, timer). Ignored by the index.
    #[serde(other)]
    Other,
}

/// Target of a quest-completion condition: one quest id or a list of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PrereqTarget {
    Single(String),
    Many(Vec<String>),
}

impl PrereqTarget {
    /// Referenced quest ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            PrereqTarget::Single(id) => std::slice::from_ref(id),
            PrereqTarget::Many(ids) => ids,
        };
        slice.iter().map(String::as_str)
    }
}

/// A quest definition: stable id, display name, and start conditions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub conditions: Vec<StartCondition>,
}

impl Quest {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            conditions: Vec::new(),
        }
    }

    /// Add a single-quest completion prerequisite.
    pub fn with_prerequisite(mut self, quest_id: &str) -> Self {
        self.conditions.push(StartCondition::QuestCompleted {
            target: PrereqTarget::Single(quest_id.to_string()),
        });
        self
    }

    /// Add a prerequisite condition referencing several quests at once.
    pub fn with_prerequisite_list(mut self, quest_ids: &[&str]) -> Self {
        self.conditions.push(StartCondition::QuestCompleted {
            target: PrereqTarget::Many(quest_ids.iter().map(|s| s.to_string()).collect()),
        });
        self
    }

    /// Ids of all quests this quest's start conditions reference, in
    /// declaration order.
    pub fn prerequisite_ids(&self) -> impl Iterator<Item = &str> {
        self.conditions.iter().flat_map(|cond| {
            let ids: Vec<&str> = match cond {
                StartCondition::QuestCompleted { target } => target.ids().collect(),
                StartCondition::Other => Vec::new(),
            };
            ids
        })
    }
}

/// The full quest set, ordered as the source declared it.
///
/// Construction rejects an empty quest list so "no catalog" is always an
/// explicit state and never silently collapses into "no prerequisites".
#[derive(Debug, Clone)]
pub struct QuestCatalog {
    quests: Vec<Quest>,
}

impl QuestCatalog {
    pub fn new(quests: Vec<Quest>) -> Result<Self, CatalogError> {
        if quests.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { quests })
    }

    /// Quests in catalog order.
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Linear lookup by id. Callers that need many lookups build their own
    /// index (see `PrerequisiteIndex::build`).
    pub fn get(&self, quest_id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == quest_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            QuestCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn prerequisite_ids_flatten_single_and_list_targets() {
        let quest = Quest::new("q3", "Chain Finale")
            .with_prerequisite("q1")
            .with_prerequisite_list(&["q2a", "q2b"]);
        let ids: Vec<&str> = quest.prerequisite_ids().collect();
        assert_eq!(ids, vec!["q1", "q2a", "q2b"]);
    }

    #[test]
    fn unknown_condition_kinds_decode_as_other() {
        let json = r#"{
            "id": "q1",
            "name": "Debut",
            "conditions": [
                {"kind": "player_level", "value": 5},
                {"kind": "quest_completed", "target": "q0"}
            ]
        }"#;
        let quest: Quest = serde_json::from_str(json).expect("quest decodes");
        assert_eq!(quest.conditions.len(), 2);
        assert_eq!(quest.conditions[0], StartCondition::Other);
        let ids: Vec<&str> = quest.prerequisite_ids().collect();
        assert_eq!(ids, vec!["q0"]);
    }

    #[test]
    fn target_decodes_from_string_or_array() {
        let single: PrereqTarget = serde_json::from_str(r#""q1""#).expect("single");
        let many: PrereqTarget = serde_json::from_str(r#"["q1", "q2"]"#).expect("many");
        assert_eq!(single.ids().collect::<Vec<_>>(), vec!["q1"]);
        assert_eq!(many.ids().collect::<Vec<_>>(), vec!["q1", "q2"]);
    }
}
