//! Profile records and per-quest status decoding.
//!
//! Raw profile records arrive as semi-structured JSON (file scan, request
//! payload — the transport is the caller's business). Parsing is
//! best-effort: a record without an identity is unusable and rejected, but
//! a single bad progress entry only costs that entry.

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::ProfileParseError;

/// Per-quest progress status. Closed set; the numeric codes are the wire
/// encoding and display rank, never an ordering for logic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QuestStatus {
    Locked,
    AvailableForStart,
    Started,
    AvailableForFinish,
    Success,
    Fail,
    FailRestartable,
    MarkedAsFailed,
    Expired,
    AvailableAfter,
}

impl QuestStatus {
    /// All variants in raw-code order.
    pub const ALL: [QuestStatus; 10] = [
        QuestStatus::Locked,
        QuestStatus::AvailableForStart,
        QuestStatus::Started,
        QuestStatus::AvailableForFinish,
        QuestStatus::Success,
        QuestStatus::Fail,
        QuestStatus::FailRestartable,
        QuestStatus::MarkedAsFailed,
        QuestStatus::Expired,
        QuestStatus::AvailableAfter,
    ];

    /// Decode a raw integer code. Out-of-range codes are not a status.
    pub fn from_raw(code: i64) -> Option<Self> {
        usize::try_from(code).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Decode a symbolic name as it appears in profile payloads.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Locked" => Some(Self::Locked),
            "AvailableForStart" => Some(Self::AvailableForStart),
            "Started" => Some(Self::Started),
            "AvailableForFinish" => Some(Self::AvailableForFinish),
            "Success" => Some(Self::Success),
            "Fail" => Some(Self::Fail),
            "FailRestartable" => Some(Self::FailRestartable),
            "MarkedAsFailed" => Some(Self::MarkedAsFailed),
            "Expired" => Some(Self::Expired),
            "AvailableAfter" => Some(Self::AvailableAfter),
            _ => None,
        }
    }

    /// Raw wire code for this status.
    pub fn raw_code(&self) -> u8 {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or(0) as u8
    }
}

impl Default for QuestStatus {
    fn default() -> Self {
        Self::Locked
    }
}

/// Raw profile payload shape, mirroring the JSON the game writes.
///
/// Everything is optional at this layer; `ProfileRecord::parse` decides
/// what is fatal for the record and what merely drops an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default, alias = "name")]
    pub nickname: Option<String>,
    #[serde(default, alias = "quest_progress")]
    pub quests: Option<Vec<RawQuestProgress>>,
}

/// One (quest id, status) pair. The status may arrive as a small integer
/// or as a symbolic name, so it is carried as a JSON value until decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawQuestProgress {
    #[serde(alias = "qid")]
    pub id: String,
    pub status: serde_json::Value,
}

/// Parsed, validated profile: display name plus indexed quest progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    name: String,
    statuses: HashMap<String, QuestStatus>,
}

impl ProfileRecord {
    /// Test/seed constructor with no recorded progress.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            statuses: HashMap::new(),
        }
    }

    pub fn with_status(mut self, quest_id: &str, status: QuestStatus) -> Self {
        self.statuses.entry(quest_id.to_string()).or_insert(status);
        self
    }

    /// Parse a raw record.
    ///
    /// - no usable nickname is fatal for the record (the caller skips it);
    /// - a missing progress list means "no progress", every quest reads
    ///   `Locked`;
    /// - an undecodable status drops that single entry with a warning;
    /// - duplicate quest ids keep the first occurrence.
    pub fn parse(raw: &RawProfile) -> Result<Self, ProfileParseError> {
        let name = match raw.nickname.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => return Err(ProfileParseError::MissingIdentity),
        };

        let mut statuses = HashMap::new();
        for entry in raw.quests.as_deref().unwrap_or_default() {
            let status = match decode_status(&entry.status) {
                Some(s) => s,
                None => {
                    warn!(
                        "profile {}: dropping quest {} with undecodable status {}",
                        name, entry.id, entry.status
                    );
                    continue;
                }
            };
            if statuses.contains_key(&entry.id) {
                debug!(
                    "profile {}: duplicate progress entry for quest {}, keeping first",
                    name, entry.id
                );
                continue;
            }
            statuses.insert(entry.id.clone(), status);
        }

        Ok(Self { name, statuses })
    }

    /// Parse a record straight from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ProfileParseError> {
        let raw: RawProfile =
            serde_json::from_str(text).map_err(|e| ProfileParseError::Malformed {
                reason: e.to_string(),
            })?;
        Self::parse(&raw)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recorded status for a quest; quests with no recorded progress are
    /// `Locked`.
    pub fn status_for(&self, quest_id: &str) -> QuestStatus {
        self.statuses.get(quest_id).copied().unwrap_or_default()
    }

    /// Number of quests with recorded progress.
    pub fn recorded_len(&self) -> usize {
        self.statuses.len()
    }
}

/// Decode a status payload value: integer code or symbolic name.
fn decode_status(value: &serde_json::Value) -> Option<QuestStatus> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().and_then(QuestStatus::from_raw),
        serde_json::Value::String(s) => QuestStatus::from_name(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_codes_round_trip() {
        for (i, status) in QuestStatus::ALL.iter().enumerate() {
            assert_eq!(QuestStatus::from_raw(i as i64), Some(*status));
            assert_eq!(status.raw_code() as usize, i);
        }
        assert_eq!(QuestStatus::from_raw(10), None);
        assert_eq!(QuestStatus::from_raw(-1), None);
    }

    #[test]
    fn missing_name_is_fatal_for_the_record() {
        let raw = RawProfile {
            nickname: None,
            quests: None,
        };
        assert!(matches!(
            ProfileRecord::parse(&raw),
            Err(ProfileParseError::MissingIdentity)
        ));

        let blank = RawProfile {
            nickname: Some("   ".to_string()),
            quests: None,
        };
        assert!(ProfileRecord::parse(&blank).is_err());
    }

    #[test]
    fn missing_progress_list_means_everything_locked() {
        let record = ProfileRecord::from_json(r#"{"nickname": "Alice"}"#).expect("parses");
        assert_eq!(record.status_for("any_quest"), QuestStatus::Locked);
        assert_eq!(record.recorded_len(), 0);
    }

    #[test]
    fn undecodable_status_drops_only_that_entry() {
        let record = ProfileRecord::from_json(
            r#"{
                "nickname": "Bob",
                "quests": [
                    {"id": "q1", "status": "NotARealStatus"},
                    {"id": "q2", "status": 2},
                    {"id": "q3", "status": 99},
                    {"id": "q4", "status": {"weird": true}}
                ]
            }"#,
        )
        .expect("record still parses");
        assert_eq!(record.status_for("q1"), QuestStatus::Locked);
        assert_eq!(record.status_for("q2"), QuestStatus::Started);
        assert_eq!(record.status_for("q3"), QuestStatus::Locked);
        assert_eq!(record.recorded_len(), 1);
    }

    #[test]
    fn duplicate_quest_entries_keep_the_first() {
        let record = ProfileRecord::from_json(
            r#"{
                "nickname": "Carol",
                "quests": [
                    {"id": "q1", "status": "Success"},
                    {"id": "q1", "status": "Fail"}
                ]
            }"#,
        )
        .expect("parses");
        assert_eq!(record.status_for("q1"), QuestStatus::Success);
    }

    #[test]
    fn symbolic_and_numeric_statuses_decode_alike() {
        let record = ProfileRecord::from_json(
            r#"{
                "nickname": "Dana",
                "quests": [
                    {"id": "q1", "status": "AvailableForFinish"},
                    {"id": "q2", "status": 3}
                ]
            }"#,
        )
        .expect("parses");
        assert_eq!(record.status_for("q1"), QuestStatus::AvailableForFinish);
        assert_eq!(record.status_for("q2"), QuestStatus::AvailableForFinish);
    }
}
