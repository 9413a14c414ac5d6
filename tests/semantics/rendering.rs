//! Integration tests for rendering canonical trees back to text.

use std::collections::BTreeMap;

use glossa::foundation::{CommandNode, SemanticRole, SemanticValue};
use glossa::languages;
use glossa::pattern::{PatternRegistry, PatternSet, generate};
use glossa::semantics::{conditional_node, event_node, loop_node, render, sequence_node};

fn patterns(profile: &glossa::LanguageProfile) -> PatternSet {
    let mut registry = PatternRegistry::new();
    registry.replace(&profile.code, generate(profile)).unwrap();
    registry.get(&profile.code).unwrap()
}

fn toggle_node() -> CommandNode {
    CommandNode::leaf("toggle", BTreeMap::new())
        .with_role(
            SemanticRole::Patient,
            SemanticValue::Selector(".active".to_string()),
        )
        .with_role(
            SemanticRole::Destination,
            SemanticValue::Selector("#button".to_string()),
        )
}

// =============================================================================
// One Tree, Six Languages
// =============================================================================

#[test]
fn the_same_tree_renders_in_every_sample_language() {
    let expected = [
        ("en", "toggle .active on #button"),
        ("es", "alternar .active en #button"),
        ("ja", "#buttonに.activeを切り替え"),
        ("ko", "#button에 .active를 전환"),
        ("tr", "#buttone .activei değiştir"),
        ("zh", "切换.active在#button"),
    ];
    let node = toggle_node();
    for profile in languages::all() {
        let set = patterns(&profile);
        let text = render(&node, &profile, &set).unwrap();
        let want = expected
            .iter()
            .find(|(code, _)| *code == profile.code)
            .map(|(_, text)| *text)
            .unwrap();
        assert_eq!(text, want, "{}", profile.code);
    }
}

// =============================================================================
// Optional and Default Handling
// =============================================================================

#[test]
fn unbound_optional_roles_are_silent() {
    let profile = languages::english();
    let set = patterns(&profile);
    let node = CommandNode::leaf("toggle", BTreeMap::new()).with_role(
        SemanticRole::Patient,
        SemanticValue::Selector(".active".to_string()),
    );
    assert_eq!(render(&node, &profile, &set).unwrap(), "toggle .active");
}

#[test]
fn default_valued_roles_are_silent() {
    let profile = languages::english();
    let set = patterns(&profile);
    let node = CommandNode::leaf("send", BTreeMap::new())
        .with_role(
            SemanticRole::Event,
            SemanticValue::Reference("refresh".to_string()),
        )
        .with_role(
            SemanticRole::Destination,
            SemanticValue::Reference("me".to_string()),
        );
    assert_eq!(render(&node, &profile, &set).unwrap(), "send refresh");
}

// =============================================================================
// Wrappers
// =============================================================================

#[test]
fn wrappers_render_in_english() {
    let profile = languages::english();
    let set = patterns(&profile);
    let leaf = |cmd: &str, sel: &str| {
        CommandNode::leaf(cmd, BTreeMap::new()).with_role(
            SemanticRole::Patient,
            SemanticValue::Selector(sel.to_string()),
        )
    };

    let event = event_node(
        SemanticValue::Reference("click".to_string()),
        vec![leaf("toggle", ".menu")],
    );
    assert_eq!(
        render(&event, &profile, &set).unwrap(),
        "when click toggle .menu"
    );

    let cond = conditional_node(
        SemanticValue::Expression("count > 0".to_string()),
        vec![leaf("hide", ".badge")],
        Some(vec![leaf("show", ".badge")]),
    );
    assert_eq!(
        render(&cond, &profile, &set).unwrap(),
        "if count > 0 then hide .badge else show .badge"
    );

    let looped = loop_node(
        SemanticValue::Literal("3".to_string()),
        vec![leaf("toggle", ".light")],
    );
    assert_eq!(
        render(&looped, &profile, &set).unwrap(),
        "repeat 3 times toggle .light"
    );

    let seq = sequence_node(vec![leaf("toggle", ".a"), leaf("hide", ".b")]);
    assert_eq!(
        render(&seq, &profile, &set).unwrap(),
        "toggle .a then hide .b"
    );
}

#[test]
fn japanese_event_marker_renders_after_the_event() {
    let profile = languages::japanese();
    let set = patterns(&profile);
    let node = event_node(
        SemanticValue::Reference("クリック".to_string()),
        vec![
            CommandNode::leaf("show", BTreeMap::new()).with_role(
                SemanticRole::Patient,
                SemanticValue::Reference("メニュー".to_string()),
            ),
        ],
    );
    assert_eq!(render(&node, &profile, &set).unwrap(), "クリック時メニューを表示");
}

// =============================================================================
// Failure Modes
// =============================================================================

#[test]
fn unknown_command_has_no_translation() {
    let profile = languages::english();
    let set = patterns(&profile);
    let node = CommandNode::leaf("frobnicate", BTreeMap::new());
    assert!(render(&node, &profile, &set).is_err());
}

#[test]
fn missing_required_role_fails_rendering() {
    let profile = languages::english();
    let set = patterns(&profile);
    let node = CommandNode::leaf("toggle", BTreeMap::new());
    assert!(render(&node, &profile, &set).is_err());
}
