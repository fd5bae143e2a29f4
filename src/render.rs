//! Status block rendering and idempotent re-injection into host text.
//!
//! The rendered block is self-delimited by fixed marker lines so it can be
//! located and replaced inside arbitrary quest-description text later.
//! Output is plain text plus embeddable color tags; how a host displays
//! those tags is not this module's business.

use log::trace;
use regex::Regex;

use crate::aggregate::StatusTable;
use crate::profile::QuestStatus;

/// First line of every rendered block.
pub const BLOCK_START: &str = "--- Squad status ---";
/// Last line of every rendered block.
pub const BLOCK_END: &str = "--- end status ---";

const MARKER_COLOR: &str = "#b8a76e";
const LOADING_LINE: &str = "Loading squad status...";
const NO_PROFILES_LINE: &str = "No profiles selected";

/// Fixed display table over the status set: label and color tag per status.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusStyle;

impl StatusStyle {
    pub fn label(&self, status: QuestStatus) -> &'static str {
        match status {
            QuestStatus::Locked => "Locked",
            QuestStatus::AvailableForStart => "Available",
            QuestStatus::Started => "In progress",
            QuestStatus::AvailableForFinish => "Ready to turn in",
            QuestStatus::Success => "Completed",
            QuestStatus::Fail => "Failed",
            QuestStatus::FailRestartable => "Failed (can retry)",
            QuestStatus::MarkedAsFailed => "Marked as failed",
            QuestStatus::Expired => "Expired",
            QuestStatus::AvailableAfter => "Available later",
        }
    }

    pub fn color(&self, status: QuestStatus) -> &'static str {
        match status {
            QuestStatus::Locked => "#8a8a8a",
            QuestStatus::AvailableForStart => "#6ccf6c",
            QuestStatus::Started => "#5bc0de",
            QuestStatus::AvailableForFinish => "#35d07f",
            QuestStatus::Success => "#3fa34d",
            QuestStatus::Fail => "#d9534f",
            QuestStatus::FailRestartable => "#e08a4e",
            QuestStatus::MarkedAsFailed => "#b05a5a",
            QuestStatus::Expired => "#9a7db0",
            QuestStatus::AvailableAfter => "#c4b45a",
        }
    }

    /// Display for a raw wire code, with the designated fallback for codes
    /// outside the known set.
    pub fn for_raw(&self, code: i64) -> (&'static str, &'static str) {
        match QuestStatus::from_raw(code) {
            Some(status) => (self.label(status), self.color(status)),
            None => ("Unknown", "#c0c0c0"),
        }
    }
}

/// Renders status blocks for one quest at a time and splices them into
/// host text.
#[derive(Debug, Clone, Copy)]
pub struct StatusRenderer {
    enabled: bool,
    style: StatusStyle,
}

impl Default for StatusRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StatusRenderer {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            style: StatusStyle,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Render the delimited status block for one quest.
    ///
    /// An empty table (no profile data at all) renders the loading line; a
    /// non-empty table whose every profile is filtered out by `visible`
    /// renders the no-profiles line. The body is never empty.
    pub fn render_block<F>(&self, quest_id: &str, table: &StatusTable, visible: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        let mut lines: Vec<String> = Vec::new();
        lines.push(format!(
            "<color={}>{}</color>",
            MARKER_COLOR, BLOCK_START
        ));

        if table.is_empty() {
            lines.push(LOADING_LINE.to_string());
        } else {
            let mut shown = 0usize;
            for row in table.rows() {
                if !visible(&row.name) {
                    continue;
                }
                let cell = match row.cell(quest_id) {
                    Some(c) => c,
                    None => continue,
                };
                let mut line = format!(
                    "{}: <color={}>{}</color>",
                    row.name,
                    self.style.color(cell.status),
                    self.style.label(cell.status)
                );
                if cell.status == QuestStatus::Locked {
                    if let Some(reason) = &cell.locked_reason {
                        line.push_str(&format!(" ({})", reason));
                    }
                }
                lines.push(line);
                shown += 1;
            }
            if shown == 0 {
                lines.push(NO_PROFILES_LINE.to_string());
            }
        }

        lines.push(format!("<color={}>{}</color>", MARKER_COLOR, BLOCK_END));
        lines.join("\n")
    }

    /// Prepend a freshly rendered block to `original`, replacing any block
    /// already present. With rendering disabled globally this strips and
    /// prepends nothing.
    ///
    /// Idempotent under repeated application with unchanged inputs.
    pub fn merge<F>(&self, original: &str, quest_id: &str, table: &StatusTable, visible: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        let rest = strip_block(original);
        if !self.enabled {
            return rest;
        }
        let block = self.render_block(quest_id, table, visible);
        let rest = rest.trim_start();
        trace!(
            "merge: injecting {}-byte block for quest {}",
            block.len(),
            quest_id
        );
        format!("{}\n\n{}", block, rest)
    }
}

/// Matches one previously rendered block, tolerating color/style tags
/// immediately around the marker lines, plus up to one trailing blank line.
fn block_regex() -> Regex {
    Regex::new(&format!(
        r"(?s)(?:<[^<>\n]*>)*{start}(?:<[^<>\n]*>)*.*?(?:<[^<>\n]*>)*{end}(?:<[^<>\n]*>)*[ \t]*\n?\n?",
        start = regex::escape(BLOCK_START),
        end = regex::escape(BLOCK_END),
    ))
    .expect("valid regex")
}

/// Remove any previously rendered block from `text`, including a trailing
/// blank line, and trim leading whitespace from the remainder. Text with
/// no block (including a malformed, end-marker-less fragment) is returned
/// unchanged. Idempotent.
pub fn strip_block(text: &str) -> String {
    let re = block_regex();
    if !re.is_match(text) {
        return text.to_string();
    }
    let stripped = re.replace_all(text, "");
    stripped.trim_start().to_string()
}
