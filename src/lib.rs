//! # Questboard - Party Quest Status for Co-op Profiles
//!
//! Questboard aggregates per-profile quest progress from a set of player
//! profiles and renders it as a self-delimited text block that can be
//! injected into (and later stripped back out of) quest-description text.
//!
//! ## Features
//!
//! - **Prerequisite Index**: built once from the quest catalog, resolves
//!   "must complete first" references to display names with raw-id fallback.
//! - **Tolerant Profile Parsing**: one corrupt record or progress entry
//!   never aborts a batch; unknown statuses fall back to `Locked`.
//! - **Deterministic Aggregation**: insertion-ordered status table, hard
//!   exclusion of headless (dedicated-client) profiles, locked-reason text
//!   derived from the prerequisite graph.
//! - **Idempotent Injection**: fixed-marker status blocks that can be
//!   re-rendered and re-merged into host text any number of times.
//!
//! ## Quick Start
//!
//! ```rust
//! use questboard::catalog::{Quest, QuestCatalog};
//! use questboard::prereq::PrerequisiteIndex;
//! use questboard::profile::{ProfileRecord, QuestStatus};
//! use questboard::aggregate::aggregate;
//! use questboard::render::StatusRenderer;
//!
//! let catalog = QuestCatalog::new(vec![
//!     Quest::new("q1", "Intro"),
//!     Quest::new("q2", "Debut").with_prerequisite("q1"),
//! ])?;
//! let index = PrerequisiteIndex::build(&catalog);
//!
//! let profiles = vec![ProfileRecord::new("Alice").with_status("q1", QuestStatus::Success)];
//! let table = aggregate(&profiles, &catalog, &index);
//!
//! let renderer = StatusRenderer::new(true);
//! let text = renderer.merge("Find the stash.", "q2", &table, |_| true);
//! assert!(text.contains("Alice"));
//! # Ok::<(), questboard::errors::CatalogError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Quest definitions and start-condition targets
//! - [`prereq`] - Prerequisite index built from the catalog
//! - [`profile`] - Raw profile parsing and per-quest status decode
//! - [`aggregate`] - The per-profile, per-quest status table
//! - [`render`] - Block rendering, stripping, and merging
//! - [`loader`] - Catalog seed and profile directory collaborators
//! - [`config`] - TOML configuration for the CLI
//! - [`errors`] - Error taxonomy

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod loader;
pub mod prereq;
pub mod profile;
pub mod render;

pub use aggregate::{aggregate, is_headless_name, ProfileRow, QuestCell, StatusTable};
pub use catalog::{PrereqTarget, Quest, QuestCatalog, StartCondition};
pub use errors::{CatalogError, ProfileParseError, QuestBoardError};
pub use loader::{load_catalog_from_json, scan_profiles};
pub use prereq::PrerequisiteIndex;
pub use profile::{ProfileRecord, QuestStatus, RawProfile, RawQuestProgress};
pub use render::{strip_block, StatusRenderer, StatusStyle, BLOCK_END, BLOCK_START};
