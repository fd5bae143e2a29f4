//! Algebraic laws of block rendering: strip/merge idempotence, round trips,
//! and the placeholder behaviors.

use questboard::aggregate::{aggregate, StatusTable};
use questboard::catalog::{Quest, QuestCatalog};
use questboard::prereq::PrerequisiteIndex;
use questboard::profile::{ProfileRecord, QuestStatus};
use questboard::render::{strip_block, StatusRenderer, BLOCK_END, BLOCK_START};

fn sample_table() -> StatusTable {
    let catalog = QuestCatalog::new(vec![
        Quest::new("Q1", "Intro"),
        Quest::new("Q2", "Search Party").with_prerequisite("Q1"),
    ])
    .expect("catalog");
    let index = PrerequisiteIndex::build(&catalog);
    let profiles = vec![
        ProfileRecord::new("Alice").with_status("Q1", QuestStatus::AvailableForFinish),
        ProfileRecord::new("Bob"),
    ];
    aggregate(&profiles, &catalog, &index)
}

#[test]
fn strip_is_idempotent_for_no_block_one_block_and_partial_block() {
    let renderer = StatusRenderer::new(true);
    let table = sample_table();
    let with_block = renderer.merge("Quest description here.", "Q1", &table, |_| true);

    for text in [
        String::new(),
        "no block at all".to_string(),
        with_block,
        format!("{}\norphaned start marker, no end", BLOCK_START),
        format!("stray end marker\n{}", BLOCK_END),
    ] {
        let once = strip_block(&text);
        let twice = strip_block(&once);
        assert_eq!(once, twice, "strip not idempotent for {:?}", text);
    }
}

#[test]
fn strip_on_text_without_block_is_identity() {
    let text = "Take the package to the far checkpoint.\n\nReward: roubles.";
    assert_eq!(strip_block(text), text);
}

#[test]
fn merge_twice_is_byte_identical_to_merge_once() {
    let renderer = StatusRenderer::new(true);
    let table = sample_table();
    let original = "Bring three fuel cans.\n\nHand them to the mechanic.";

    let once = renderer.merge(original, "Q2", &table, |_| true);
    let twice = renderer.merge(&once, "Q2", &table, |_| true);
    let thrice = renderer.merge(&twice, "Q2", &table, |_| true);
    assert_eq!(once, twice);
    assert_eq!(twice, thrice);
}

#[test]
fn strip_after_merge_recovers_the_original() {
    let renderer = StatusRenderer::new(true);
    let table = sample_table();
    let original = "Scout the resort and report back.";

    let merged = renderer.merge(original, "Q1", &table, |_| true);
    assert_eq!(strip_block(&merged), original);
    assert_eq!(strip_block(&merged), strip_block(original));
}

#[test]
fn merged_block_sits_before_the_original_text() {
    let renderer = StatusRenderer::new(true);
    let table = sample_table();
    let merged = renderer.merge("Original body.", "Q1", &table, |_| true);

    let start = merged.find(BLOCK_START).expect("start marker present");
    let end = merged.find(BLOCK_END).expect("end marker present");
    let body = merged.find("Original body.").expect("body present");
    assert!(start < end && end < body);
}

#[test]
fn empty_table_renders_loading_placeholder() {
    let renderer = StatusRenderer::new(true);
    let block = renderer.render_block("Q1", &StatusTable::empty(), |_| true);
    assert!(block.contains("Loading squad status..."));
    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines.len(), 3, "markers plus exactly one placeholder line");
}

#[test]
fn fully_filtered_table_renders_no_profiles_placeholder() {
    let renderer = StatusRenderer::new(true);
    let block = renderer.render_block("Q1", &sample_table(), |_| false);
    assert!(block.contains("No profiles selected"));
    assert!(!block.contains("Loading"));
}

#[test]
fn visibility_predicate_filters_individual_profiles() {
    let renderer = StatusRenderer::new(true);
    let block = renderer.render_block("Q1", &sample_table(), |name| name != "Bob");
    assert!(block.contains("Alice"));
    assert!(!block.contains("Bob"));
}

#[test]
fn disabled_merge_strips_and_adds_nothing() {
    let table = sample_table();
    let merged = StatusRenderer::new(true).merge("Body text.", "Q1", &table, |_| true);

    let cleaned = StatusRenderer::new(false).merge(&merged, "Q1", &table, |_| true);
    assert_eq!(cleaned, "Body text.");

    // Disabled merge is idempotent too.
    let again = StatusRenderer::new(false).merge(&cleaned, "Q1", &table, |_| true);
    assert_eq!(cleaned, again);
}

#[test]
fn merge_replaces_a_stale_block_instead_of_stacking() {
    let renderer = StatusRenderer::new(true);
    let table = sample_table();
    let original = "Persistent description.";

    let merged = renderer.merge(original, "Q1", &table, |_| true);
    let remerged = renderer.merge(&merged, "Q1", &table, |_| true);
    assert_eq!(remerged.matches(BLOCK_START).count(), 1);
    assert_eq!(remerged.matches(BLOCK_END).count(), 1);
}
