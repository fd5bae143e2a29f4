//! Status aggregation: profiles x catalog -> one insertion-ordered table.
//!
//! Aggregation runs from scratch on every request. Staleness is worse than
//! the cost of a full re-scan at the profile counts involved, so there is
//! no incremental update path and no cache between calls; each call
//! produces a fresh value that is safe to use concurrently with any other.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::QuestCatalog;
use crate::prereq::PrerequisiteIndex;
use crate::profile::{ProfileRecord, QuestStatus};

/// Profiles whose nickname starts with this prefix (case-insensitively)
/// are dedicated-client shells, not people; they are excluded outright.
pub const HEADLESS_PREFIX: &str = "headless_";

/// One (quest, status) cell in a profile's row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuestCell {
    pub quest_id: String,
    pub status: QuestStatus,
    /// Present only when `status` is `Locked` and the quest has at least
    /// one prerequisite: the prerequisite display names, comma-joined in
    /// catalog order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_reason: Option<String>,
}

/// One profile's row, cells in catalog order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileRow {
    pub name: String,
    pub cells: Vec<QuestCell>,
}

impl ProfileRow {
    /// Cell for a quest, if the quest is in the catalog this row was built
    /// against. Linear scan; rows are catalog-sized.
    pub fn cell(&self, quest_id: &str) -> Option<&QuestCell> {
        self.cells.iter().find(|c| c.quest_id == quest_id)
    }
}

/// The aggregate per-profile, per-quest status view.
///
/// Row order is the order non-excluded profiles were first encountered in
/// the input. `generated_at` stamps when the table was built so callers
/// can run their own freshness checks.
#[derive(Debug, Clone, Serialize)]
pub struct StatusTable {
    rows: Vec<ProfileRow>,
    generated_at: DateTime<Utc>,
}

impl StatusTable {
    /// A table with no profile data at all (aggregation not yet run, or no
    /// sources available). Renders as a loading placeholder.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    pub fn rows(&self) -> &[ProfileRow] {
        &self.rows
    }

    pub fn row(&self, name: &str) -> Option<&ProfileRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}

/// True when a nickname marks a headless (dedicated-client) profile.
pub fn is_headless_name(name: &str) -> bool {
    name.to_lowercase().starts_with(HEADLESS_PREFIX)
}

/// Build the status table for all given profiles over the full catalog.
///
/// Headless profiles are dropped entirely. When two records share a
/// nickname the last one processed wins for that row's content, but the
/// row keeps the position of its first insertion. That last-write-wins
/// behavior is a deliberate policy choice carried over from the data
/// source, not an accident; partial data from colliding records is never
/// merged.
pub fn aggregate(
    profiles: &[ProfileRecord],
    catalog: &QuestCatalog,
    index: &PrerequisiteIndex,
) -> StatusTable {
    let mut rows: Vec<ProfileRow> = Vec::new();
    for profile in profiles {
        if is_headless_name(profile.name()) {
            continue;
        }

        let cells: Vec<QuestCell> = catalog
            .quests()
            .iter()
            .map(|quest| {
                let status = profile.status_for(&quest.id);
                let locked_reason = if status == QuestStatus::Locked {
                    index.reason_for(&quest.id)
                } else {
                    None
                };
                QuestCell {
                    quest_id: quest.id.clone(),
                    status,
                    locked_reason,
                }
            })
            .collect();

        let row = ProfileRow {
            name: profile.name().to_string(),
            cells,
        };
        match rows.iter().position(|r| r.name == row.name) {
            Some(pos) => rows[pos] = row,
            None => rows.push(row),
        }
    }

    StatusTable {
        rows,
        generated_at: Utc::now(),
    }
}
