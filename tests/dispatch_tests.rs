//! Dispatch Tests
//!
//! Request-to-response behavior with injected clocks.

use std::time::{Duration, Instant};

use chrono::{NaiveDate, NaiveDateTime};
use echoline::protocol::GOODBYE;
use echoline::Dispatcher;

fn fixed_wall() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(13, 7, 9)
        .unwrap()
}

// =============================================================================
// Echo Tests
// =============================================================================

#[test]
fn test_echo_has_fixed_wrapper() {
    let dispatcher = Dispatcher::new();
    let reply = dispatcher.dispatch("hello there");
    assert_eq!(reply.text, "Server received \"hello there\"");
    assert!(!reply.close);
}

#[test]
fn test_echo_is_idempotent() {
    let dispatcher = Dispatcher::new();
    let first = dispatcher.dispatch("same message");
    let second = dispatcher.dispatch("same message");
    assert_eq!(first, second);
}

#[test]
fn test_blank_message_is_echoed() {
    let dispatcher = Dispatcher::new();
    assert_eq!(dispatcher.dispatch("").text, "Server received \"\"");
}

// =============================================================================
// Exit Tests
// =============================================================================

#[test]
fn test_exit_sends_goodbye_and_closes() {
    let dispatcher = Dispatcher::new();
    let reply = dispatcher.dispatch("exit");
    assert_eq!(reply.text, GOODBYE);
    assert!(reply.close);
}

#[test]
fn test_exit_matches_any_letter_case() {
    let dispatcher = Dispatcher::new();
    for spelling in ["EXIT", "Exit", "eXiT"] {
        let reply = dispatcher.dispatch(spelling);
        assert_eq!(reply.text, GOODBYE);
        assert!(reply.close);
    }
}

// =============================================================================
// Help Tests
// =============================================================================

#[test]
fn test_help_lists_every_command_and_echo() {
    let dispatcher = Dispatcher::new();
    let reply = dispatcher.dispatch("help");
    assert!(!reply.close);
    for entry in ["time", "uptime", "help", "exit", "(any text)"] {
        assert!(reply.text.contains(entry), "help missing {:?}", entry);
    }
}

// =============================================================================
// Time Tests
// =============================================================================

#[test]
fn test_time_formats_the_injected_wall_clock() {
    let dispatcher = Dispatcher::new();
    let reply = dispatcher.dispatch_at("time", Instant::now(), fixed_wall());
    assert_eq!(reply.text, "2024-03-05 13:07:09");
    assert!(!reply.close);
}

#[test]
fn test_time_output_parses_back_as_a_datetime() {
    let dispatcher = Dispatcher::new();
    let reply = dispatcher.dispatch("time");
    let parsed = NaiveDateTime::parse_from_str(&reply.text, "%Y-%m-%d %H:%M:%S");
    assert!(parsed.is_ok(), "unparsable time output: {:?}", reply.text);
}

// =============================================================================
// Uptime Tests
// =============================================================================

#[test]
fn test_uptime_starts_at_zero_hours() {
    let started = Instant::now();
    let dispatcher = Dispatcher::with_start(started);
    let reply = dispatcher.dispatch_at("uptime", started + Duration::from_secs(3), fixed_wall());
    assert_eq!(reply.text, "0h 0m 3s");
}

#[test]
fn test_uptime_truncates_to_whole_seconds() {
    let started = Instant::now();
    let dispatcher = Dispatcher::with_start(started);
    let reply =
        dispatcher.dispatch_at("uptime", started + Duration::from_millis(3900), fixed_wall());
    assert_eq!(reply.text, "0h 0m 3s");
}

#[test]
fn test_uptime_rolls_over_minutes_and_hours() {
    let started = Instant::now();
    let dispatcher = Dispatcher::with_start(started);
    let reply =
        dispatcher.dispatch_at("uptime", started + Duration::from_secs(3723), fixed_wall());
    assert_eq!(reply.text, "1h 2m 3s");
}

#[test]
fn test_uptime_is_non_decreasing() {
    let started = Instant::now();
    let dispatcher = Dispatcher::with_start(started);
    let earlier = dispatcher.dispatch_at("uptime", started + Duration::from_secs(5), fixed_wall());
    let later = dispatcher.dispatch_at("uptime", started + Duration::from_secs(9), fixed_wall());
    assert_eq!(earlier.text, "0h 0m 5s");
    assert_eq!(later.text, "0h 0m 9s");
}

#[test]
fn test_uptime_saturates_before_start() {
    let started = Instant::now();
    let dispatcher = Dispatcher::with_start(started + Duration::from_secs(60));
    let reply = dispatcher.dispatch_at("uptime", started, fixed_wall());
    assert_eq!(reply.text, "0h 0m 0s");
}
