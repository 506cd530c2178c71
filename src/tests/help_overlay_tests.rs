//! Tests for help overlay key handling.
//!
//! Verifies that pressing '?' toggles the help overlay, Escape dismisses it,
//! and other keys are swallowed while it is open.

use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

#[test]
fn test_question_mark_toggles_help_overlay() {
    // GIVEN: Loaded dashboard
    let mut harness = AcceptanceTestHarness::loaded();
    assert!(
        !harness.state().help_visible,
        "Help overlay should not be visible initially"
    );

    // WHEN: User presses '?'
    harness.send_key(KeyCode::Char('?'));

    // THEN: Help overlay becomes visible
    assert!(harness.state().help_visible, "First '?' should show help");
    let screen = harness.render_to_string().unwrap();
    assert!(screen.contains("Keyboard Shortcuts"));
    assert!(screen.contains("Load more posts"));

    // WHEN: User presses '?' again
    harness.send_key(KeyCode::Char('?'));

    // THEN: Help hidden
    assert!(
        !harness.state().help_visible,
        "Second '?' should toggle help off"
    );
}

#[test]
fn test_escape_closes_help_without_clearing_search() {
    // GIVEN: A filtered list with help open
    let mut harness = AcceptanceTestHarness::loaded();
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("ervin");
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Char('?'));

    // WHEN: User presses Escape
    harness.send_key(KeyCode::Esc);

    // THEN: Help closes, search term survives
    assert!(!harness.state().help_visible);
    assert_eq!(harness.state().search_term(), "ervin");
}

#[test]
fn test_help_swallows_action_keys() {
    let mut harness = AcceptanceTestHarness::loaded();
    harness.send_key(KeyCode::Char('?'));

    harness.send_keys(&[KeyCode::Char('j'), KeyCode::Enter, KeyCode::Char('r')]);

    assert_eq!(harness.state().cursor(), 0);
    assert!(harness.take_requests().is_empty());
    assert!(harness.state().help_visible);
}

#[test]
fn test_q_quits_from_help() {
    let mut harness = AcceptanceTestHarness::loaded();
    harness.send_key(KeyCode::Char('?'));

    let quit = harness.send_key(KeyCode::Char('q'));

    assert!(quit, "'q' should quit even with help open");
    assert!(!harness.is_running());
}

#[test]
fn test_question_mark_in_search_is_typed() {
    let mut harness = AcceptanceTestHarness::loaded();
    harness.send_key(KeyCode::Char('/'));

    harness.send_key(KeyCode::Char('?'));

    assert!(!harness.state().help_visible);
    assert_eq!(harness.state().search_term(), "?");
}
