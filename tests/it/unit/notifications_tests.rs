//! Unit tests for the notifications module.

use sortboard::constants::MAX_NOTICES;
use sortboard::notifications::{Notice, NoticeLog, NoticeVariant};

#[test]
fn test_notice_creation() {
    let notice = Notice::error("Move failed");
    assert_eq!(notice.message, "Move failed");
    assert_eq!(notice.variant, NoticeVariant::Error);
}

#[test]
fn test_notice_log_push_and_clear() {
    let mut log = NoticeLog::new();
    assert_eq!(log.count(), 0);

    log.push(Notice::info("Message 1"));
    assert_eq!(log.count(), 1);

    log.push(Notice::warning("Message 2"));
    assert_eq!(log.count(), 2);

    log.clear();
    assert_eq!(log.count(), 0);
}

#[test]
fn test_notice_log_assigns_unique_ids() {
    let mut log = NoticeLog::new();
    let a = log.push(Notice::info("A"));
    let b = log.push(Notice::info("B"));
    assert_ne!(a, b);
}

#[test]
fn test_notice_log_remove() {
    let mut log = NoticeLog::new();
    log.push(Notice::info("Notice 1"));
    let id = log.push(Notice::warning("Notice 2"));
    log.push(Notice::error("Notice 3"));

    assert_eq!(log.count(), 3);
    assert!(log.remove(id));
    assert_eq!(log.count(), 2);
    assert!(!log.remove(id));
}

#[test]
fn test_notice_log_latest() {
    let mut log = NoticeLog::new();
    assert!(log.latest().is_none());

    log.push(Notice::info("first"));
    log.push(Notice::error("second"));
    assert_eq!(log.latest().map(|n| n.message.as_str()), Some("second"));
}

#[test]
fn test_notice_log_drain_empties() {
    let mut log = NoticeLog::new();
    log.push(Notice::info("one"));
    log.push(Notice::info("two"));

    let drained = log.drain();
    assert_eq!(drained.len(), 2);
    assert_eq!(log.count(), 0);
}

#[test]
fn test_notice_log_evicts_oldest_beyond_cap() {
    let mut log = NoticeLog::new();
    for i in 0..(MAX_NOTICES + 3) {
        log.push(Notice::info(format!("notice {i}")));
    }

    assert_eq!(log.count(), MAX_NOTICES);
    // The three oldest were evicted.
    assert_eq!(log.notices()[0].message, "notice 3");
}

#[test]
fn test_variant_icons() {
    assert_eq!(NoticeVariant::Info.icon(), "ℹ");
    assert_eq!(NoticeVariant::Warning.icon(), "⚠");
    assert_eq!(NoticeVariant::Error.icon(), "✗");
}

#[test]
fn test_variant_labels() {
    assert_eq!(NoticeVariant::Info.label(), "info");
    assert_eq!(NoticeVariant::Warning.label(), "warning");
    assert_eq!(NoticeVariant::Error.label(), "error");
}
