//! Tests for toast stack rendering

use super::*;
use crate::config::ToastConfig;
use crate::notification::{Severity, ToastHit, ToastRequest};
use crate::test_utils::test_helpers::{ms, provider_at_start, render_to_string};
use std::time::Instant;

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 24;

#[test]
fn test_empty_stack_renders_nothing() {
    let (mut provider, t0) = provider_at_start();
    provider.tick(t0);

    let output = render_to_string(&mut provider, TEST_WIDTH, TEST_HEIGHT);
    assert!(!output.contains('┌'));
    assert!(provider.stack().regions().is_empty());
}

#[test]
fn test_entering_toast_is_not_drawn() {
    let (mut provider, t0) = provider_at_start();
    provider.handle().success("Saved successfully", None);
    provider.sync(t0);

    let output = render_to_string(&mut provider, TEST_WIDTH, TEST_HEIGHT);
    assert!(!output.contains("Saved successfully"));
}

#[test]
fn test_visible_toast_is_drawn_with_close_control() {
    let (mut provider, t0) = provider_at_start();
    provider.handle().success("Saved successfully", None);
    provider.tick(t0);

    let output = render_to_string(&mut provider, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("Saved successfully"));
    assert!(output.contains("✓ Success"));
    assert!(output.contains("[x]"));
}

#[test]
fn test_title_replaces_severity_label() {
    let (mut provider, t0) = provider_at_start();
    provider.handle().error("Failed", Some("Upload error"));
    provider.tick(t0);

    let output = render_to_string(&mut provider, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("✗ Upload error"));
    assert!(output.contains("Failed"));
}

#[test]
fn test_toast_is_top_centered() {
    let (mut provider, t0) = provider_at_start();
    let id = provider.handle().info("hello", None);
    provider.tick(t0);

    render_to_string(&mut provider, TEST_WIDTH, TEST_HEIGHT);

    let regions = provider.stack().regions();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].id, id);
    assert_eq!(regions[0].area, Rect::new(16, 0, 48, 3));
    assert_eq!(regions[0].close, Rect::new(60, 0, 3, 1));
}

#[test]
fn test_rest_of_frame_is_untouched() {
    let (mut provider, t0) = provider_at_start();
    provider.handle().info("hello", None);
    provider.tick(t0);

    let output = render_to_string(&mut provider, TEST_WIDTH, TEST_HEIGHT);
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with(&format!("\"{}", ".".repeat(16))));
    assert!(lines[5].contains(&".".repeat(usize::from(TEST_WIDTH))));
}

#[test]
fn test_newest_is_drawn_on_top() {
    let (mut provider, t0) = provider_at_start();
    let toasts = provider.handle();
    let older = toasts.info("older message", None);
    let newer = toasts.info("newer message", None);
    provider.tick(t0);

    let output = render_to_string(&mut provider, TEST_WIDTH, TEST_HEIGHT);
    let newer_pos = output.find("newer message").unwrap();
    let older_pos = output.find("older message").unwrap();
    assert!(newer_pos < older_pos);

    let regions = provider.stack().regions();
    assert_eq!(regions[0].id, newer);
    assert_eq!(regions[1].id, older);
    assert_eq!(regions[1].area.y, 3);
}

#[test]
fn test_toasts_that_do_not_fit_are_skipped() {
    let (mut provider, t0) = provider_at_start();
    let toasts = provider.handle();
    toasts.info("one", None);
    toasts.info("two", None);
    provider.tick(t0);

    let output = render_to_string(&mut provider, TEST_WIDTH, 5);
    assert!(output.contains("two"));
    assert!(!output.contains("one"));
    assert_eq!(provider.stack().regions().len(), 1);
}

#[test]
fn test_leaving_toast_stays_drawn_until_removed() {
    let (mut provider, t0) = provider_at_start();
    let id = provider.handle().warning("going away", None);
    provider.tick(t0);
    provider.dismiss(id, t0 + ms(10));

    let output = render_to_string(&mut provider, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("going away"));

    provider.tick(t0 + ms(310));
    let output = render_to_string(&mut provider, TEST_WIDTH, TEST_HEIGHT);
    assert!(!output.contains("going away"));
}

#[test]
fn test_click_on_close_control_dismisses() {
    let (mut provider, t0) = provider_at_start();
    let id = provider.handle().error("Failed", Some("Upload error"));
    provider.tick(t0);
    render_to_string(&mut provider, TEST_WIDTH, TEST_HEIGHT);

    assert_eq!(provider.click(30, 1, t0), Some(ToastHit::Body(id)));
    assert!(!provider.stack().get(id).unwrap().is_leaving());

    assert_eq!(provider.click(61, 0, t0), Some(ToastHit::Close(id)));
    assert!(provider.stack().get(id).unwrap().is_leaving());

    assert_eq!(provider.tick(t0 + ms(300)), 1);
    assert!(provider.is_empty());
}

#[test]
fn test_narrow_frame_renders_nothing() {
    let (mut provider, t0) = provider_at_start();
    provider.handle().info("hello", None);
    provider.tick(t0);

    render_to_string(&mut provider, 8, 10);
    assert!(provider.stack().regions().is_empty());
}

#[test]
fn test_long_message_grows_toast() {
    let t0 = Instant::now();
    let config = ToastConfig {
        width: 24,
        ..ToastConfig::default()
    };
    let mut stack = ToastStack::new(&config);
    let mut store = crate::notification::ToastStore::default();
    store.add(ToastRequest::new(
        Severity::Info,
        "a message that certainly needs more than one line",
    ));
    stack.sync(&store, t0);
    stack.tick(t0);

    let regions = layout_toasts(Rect::new(0, 0, 80, 24), &stack);
    assert_eq!(regions.len(), 1);
    let expected_lines = wrap_message(
        "a message that certainly needs more than one line",
        24 - HORIZONTAL_CHROME,
    )
    .len() as u16;
    assert!(expected_lines > 1);
    assert_eq!(regions[0].area.height, expected_lines + VERTICAL_CHROME);
}

#[test]
fn test_wrap_message_words() {
    assert_eq!(
        wrap_message("the quick brown fox", 10),
        vec!["the quick", "brown fox"]
    );
}

#[test]
fn test_wrap_message_splits_long_words() {
    assert_eq!(wrap_message("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
}

#[test]
fn test_wrap_message_keeps_newlines() {
    assert_eq!(wrap_message("one\n\ntwo", 20), vec!["one", "", "two"]);
}

#[test]
fn test_wrap_message_empty() {
    assert_eq!(wrap_message("", 20), vec![""]);
}

#[test]
fn test_wrap_message_wide_characters() {
    // Each CJK character is two columns wide
    assert_eq!(wrap_message("日本語テキスト", 6), vec!["日本語", "テキス", "ト"]);
}
