//! Acceptance tests: selecting a user and paging through their posts.

use crate::directory::{DirectoryRequest, DirectoryResponse, PostFetchKind};
use crate::model::{FetchFailure, Post, PostId, UserId};
use crate::state::FocusPane;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

// ===== Selection =====

#[test]
fn enter_requests_first_page_for_highlighted_user() {
    // GIVEN: Users loaded, cursor on the first row
    let mut harness = AcceptanceTestHarness::loaded();

    // WHEN: Enter is pressed
    harness.send_key(KeyCode::Enter);

    // THEN: Page 1 of that user's posts is requested
    let ticket = harness.take_post_ticket();
    assert_eq!(ticket.user_id, UserId::new(5)); // Chelsey Dietrich
    assert_eq!(ticket.page.get(), 1);
    assert_eq!(ticket.limit, 5);
    assert_eq!(ticket.kind, PostFetchKind::FirstPage);
    assert!(harness.state().is_loading());

    let screen = harness.render_to_string().unwrap();
    assert!(screen.contains("Posts by Chelsey Dietrich"));
    assert!(screen.contains("Loading posts..."));
}

#[test]
fn first_page_replaces_posts_and_shows_titles() {
    let mut harness = AcceptanceTestHarness::loaded();
    let ticket = harness.select_user_named("Leanne Graham");

    harness.respond_posts(ticket);

    assert_eq!(harness.state().posts().len(), 5);
    assert!(!harness.state().is_loading());
    let screen = harness.render_to_string().unwrap();
    assert!(screen.contains("post 1 of user 1"));
    assert!(screen.contains("body of post 1"));
}

#[test]
fn post_pane_prompts_before_any_selection() {
    let mut harness = AcceptanceTestHarness::loaded();
    let screen = harness.render_to_string().unwrap();
    assert!(screen.contains("Select a user and press Enter"));
    assert!(!screen.contains("Load More"));
}

#[test]
fn enter_with_empty_list_requests_nothing() {
    let mut harness = AcceptanceTestHarness::loaded();
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("nobody-matches-this");
    harness.send_key(KeyCode::Enter); // leaves search
    harness.send_key(KeyCode::Enter); // select: nothing highlighted

    assert!(harness.take_requests().is_empty());
    assert_eq!(harness.state().selected_user_id(), None);
}

// ===== Load more =====

#[test]
fn two_load_more_presses_add_ten_posts() {
    // GIVEN: A user with the first page of 5 posts shown
    let mut harness = AcceptanceTestHarness::loaded();
    let ticket = harness.select_user_named("Ervin Howell");
    harness.respond_posts(ticket);
    assert_eq!(harness.state().posts().len(), 5);

    // WHEN: Load More is pressed and answered twice
    harness.send_key(KeyCode::Char('m'));
    let second = harness.take_post_ticket();
    assert_eq!(second.page.get(), 2);
    assert_eq!(second.kind, PostFetchKind::NextPage);
    harness.respond_posts(second);

    harness.send_key(KeyCode::Char('m'));
    let third = harness.take_post_ticket();
    assert_eq!(third.page.get(), 3);
    harness.respond_posts(third);

    // THEN: 15 posts, in page order
    let posts = harness.state().posts();
    assert_eq!(posts.len(), 15);
    assert_eq!(posts[0].title, "post 1 of user 2");
    assert_eq!(posts[14].title, "post 15 of user 2");
    assert_eq!(harness.state().page().get(), 3);
}

#[test]
fn load_more_is_offered_only_when_posts_exist() {
    let mut harness = AcceptanceTestHarness::loaded();
    let ticket = harness.select_user_named("Leanne Graham");

    // While page 1 is loading there is nothing to extend
    harness.send_key(KeyCode::Char('m'));
    assert!(harness.take_requests().is_empty());
    assert!(!harness.render_to_string().unwrap().contains("Load More"));

    harness.respond_posts(ticket);
    let screen = harness.render_to_string().unwrap();
    assert!(screen.contains("[m] Load More"));
    assert!(screen.contains("page 1"));
}

#[test]
fn load_more_without_selection_does_nothing() {
    let mut harness = AcceptanceTestHarness::loaded();
    harness.send_key(KeyCode::Char('m'));
    assert!(harness.take_requests().is_empty());
    assert!(!harness.state().is_loading());
}

// ===== Failures =====

#[test]
fn failed_first_page_shows_failed_to_load_posts() {
    let mut harness = AcceptanceTestHarness::loaded();
    let ticket = harness.select_user_named("Leanne Graham");

    harness.fail(DirectoryRequest::Posts(ticket));

    assert_eq!(
        harness.state().error(),
        Some(FetchFailure::PostListFetchFailed)
    );
    assert!(harness.state().posts().is_empty());
    let screen = harness.render_to_string().unwrap();
    assert!(screen.contains("Failed to load posts"));
    assert!(screen.contains("No posts"));
}

#[test]
fn failed_load_more_keeps_posts_and_page_counter() {
    // GIVEN: Page 1 loaded
    let mut harness = AcceptanceTestHarness::loaded();
    let ticket = harness.select_user_named("Leanne Graham");
    harness.respond_posts(ticket);

    // WHEN: Page 2 fails
    harness.send_key(KeyCode::Char('m'));
    let second = harness.take_post_ticket();
    harness.fail(DirectoryRequest::Posts(second));

    // THEN: Existing posts stay, the counter stays at 2, the error shows
    assert_eq!(harness.state().posts().len(), 5);
    assert_eq!(harness.state().page().get(), 2);
    assert_eq!(
        harness.state().error(),
        Some(FetchFailure::PostPageFetchFailed)
    );

    // AND: The next press asks for page 3
    harness.send_key(KeyCode::Char('m'));
    assert_eq!(harness.take_post_ticket().page.get(), 3);
}

#[test]
fn successful_posts_do_not_clear_error() {
    let mut harness = AcceptanceTestHarness::loaded();
    let first = harness.select_user_named("Leanne Graham");
    harness.fail(DirectoryRequest::Posts(first));

    let retry = harness.select_user_named("Leanne Graham");
    harness.respond_posts(retry);

    assert_eq!(harness.state().posts().len(), 5);
    assert_eq!(
        harness.state().error(),
        Some(FetchFailure::PostListFetchFailed)
    );
}

// ===== Stale responses =====

#[test]
fn response_for_previous_selection_is_discarded() {
    // GIVEN: Leanne selected, then Ervin selected before Leanne's posts arrive
    let mut harness = AcceptanceTestHarness::loaded();
    let leanne = harness.select_user_named("Leanne Graham");
    let ervin = harness.select_user_named("Ervin Howell");
    assert_eq!(harness.state().selected_user_id(), Some(UserId::new(2)));

    // WHEN: Ervin's posts arrive first, then Leanne's late response
    harness.respond_posts(ervin);
    harness.respond_posts(leanne);

    // THEN: Only Ervin's posts are shown and loading has settled
    let posts = harness.state().posts();
    assert_eq!(posts.len(), 5);
    assert!(posts.iter().all(|post| post.user_id == UserId::new(2)));
    assert!(!harness.state().is_loading());
}

#[test]
fn stale_failure_does_not_touch_error_slot() {
    let mut harness = AcceptanceTestHarness::loaded();
    let leanne = harness.select_user_named("Leanne Graham");
    let ervin = harness.select_user_named("Ervin Howell");

    harness.fail(DirectoryRequest::Posts(leanne));
    harness.respond_posts(ervin);

    assert_eq!(harness.state().error(), None);
    assert_eq!(harness.state().posts().len(), 5);
}

#[test]
fn reselecting_resets_page_counter() {
    let mut harness = AcceptanceTestHarness::loaded();
    let ticket = harness.select_user_named("Leanne Graham");
    harness.respond_posts(ticket);
    harness.send_key(KeyCode::Char('m'));
    let second = harness.take_post_ticket();
    harness.respond_posts(second);

    let fresh = harness.select_user_named("Glenna Reichert");

    assert_eq!(fresh.page.get(), 1);
    assert!(harness.state().posts().is_empty());
    assert_eq!(harness.state().page().get(), 1);
}

// ===== Scrolling =====

#[test]
fn post_pane_scrolls_when_focused_and_clamps() {
    // GIVEN: Two pages of posts in a 30-row terminal
    let mut harness = AcceptanceTestHarness::loaded();
    let ticket = harness.select_user_named("Leanne Graham");
    harness.respond_posts(ticket);
    harness.send_key(KeyCode::Char('m'));
    let second = harness.take_post_ticket();
    harness.respond_posts(second);
    harness.render_to_string().unwrap();

    // WHEN: Focus moves to the post pane and the operator scrolls down a lot
    harness.send_key(KeyCode::Tab);
    assert_eq!(harness.state().focus, FocusPane::Posts);
    for _ in 0..100 {
        harness.send_key(KeyCode::Char('j'));
    }

    // THEN: Scroll stops at the last full screen
    let scroll = harness.state().post_scroll;
    assert!(scroll > 0);
    harness.send_key(KeyCode::Char('j'));
    assert_eq!(harness.state().post_scroll, scroll);

    // AND: Ctrl+U pages back to the top
    for _ in 0..10 {
        harness.send_key_with_mods(KeyCode::Char('u'), KeyModifiers::CONTROL);
    }
    assert_eq!(harness.state().post_scroll, 0);
}

#[test]
fn long_post_title_wraps_inside_pane() {
    // GIVEN: Page 1 holds a title wider than the 48-column post pane
    let mut harness = AcceptanceTestHarness::loaded();
    let ticket = harness.select_user_named("Leanne Graham");

    // WHEN: The page arrives
    harness.respond(DirectoryResponse::Posts {
        ticket,
        result: Ok(vec![Post::new(
            PostId::new(1),
            UserId::new(1),
            "sunt aut facere repellat provident occaecati excepturi optio reprehenderit",
            "quia et suscipit\nsuscipit recusandae consequuntur expedita et cum",
        )]),
    });

    // THEN: The end of the title shows on its own row
    let screen = harness.render_to_string().unwrap();
    assert!(screen.contains("sunt aut facere repellat provident occaecati"));
    assert!(screen.contains("optio reprehenderit"), "screen:\n{screen}");
    assert!(screen.contains("consequuntur expedita et"));
}

#[test]
fn scrolling_reaches_last_wrapped_row() {
    // GIVEN: Ten posts whose titles each wrap onto two rows (40 rows in all)
    let mut harness = AcceptanceTestHarness::loaded();
    let ticket = harness.select_user_named("Leanne Graham");
    let posts = (1..=10)
        .map(|n| {
            Post::new(
                PostId::new(n),
                UserId::new(1),
                format!("post {n} sunt aut facere repellat provident occaecati tail {n}"),
                format!("body {n}"),
            )
        })
        .collect();
    harness.respond(DirectoryResponse::Posts {
        ticket,
        result: Ok(posts),
    });

    // WHEN: The operator scrolls the post pane as far as it goes
    harness.send_key(KeyCode::Tab);
    for _ in 0..100 {
        harness.send_key(KeyCode::Char('j'));
    }

    // THEN: The scroll limit counts wrapped rows, so the last post is visible
    assert_eq!(harness.state().post_scroll, 40 - 23);
    let screen = harness.render_to_string().unwrap();
    assert!(screen.contains("occaecati tail 10"), "screen:\n{screen}");
    assert!(screen.contains("body 10"));
}

// ===== Worker =====

#[test]
fn requests_after_worker_exit_fail_without_hanging() {
    let mut harness = AcceptanceTestHarness::loaded();
    harness.disconnect_worker();

    harness.send_key(KeyCode::Enter);

    assert!(!harness.state().is_loading());
    assert_eq!(
        harness.state().error(),
        Some(FetchFailure::PostListFetchFailed)
    );

    harness.send_key(KeyCode::Char('r'));
    assert_eq!(
        harness.state().error(),
        Some(FetchFailure::UserListFetchFailed)
    );
    assert_eq!(harness.state().users().len(), 10);
}
