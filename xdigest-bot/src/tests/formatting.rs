use chrono::TimeZone;
use chrono_tz::America::Argentina::Buenos_Aires;
use xdigest_common::Period;

use crate::utils::{TELEGRAM_MAX_LENGTH, format_header, split_message};

fn fixed_now() -> chrono::DateTime<chrono_tz::Tz> {
    Buenos_Aires
        .with_ymd_and_hms(2026, 3, 7, 6, 0, 0)
        .single()
        .unwrap()
}

#[test]
fn test_format_header_morning() {
    let header = format_header(Period::Morning, &fixed_now());

    assert_eq!(header, "🌅 *Resumen Mañana* — 07/03/2026 06:00\n\n");
}

#[test]
fn test_format_header_evening() {
    let header = format_header(Period::Evening, &fixed_now());

    assert!(header.starts_with("🌆 *Resumen Tarde/Noche*"));
    assert!(!header.contains("Mañana"));
    assert!(!header.contains("Manual"));
}

#[test]
fn test_format_header_manual() {
    let header = format_header(Period::Manual, &fixed_now());

    assert!(header.contains("Resumen Manual"));
    assert!(!header.contains("Mañana"));
    assert!(!header.contains("Tarde/Noche"));
}

#[test]
fn test_format_header_uses_local_time() {
    // 21:30 UTC is 18:30 in Buenos Aires (UTC-3)
    let utc = chrono::Utc
        .with_ymd_and_hms(2026, 12, 31, 21, 30, 0)
        .single()
        .unwrap();
    let header = format_header(Period::Evening, &utc.with_timezone(&Buenos_Aires));

    assert!(header.contains("31/12/2026 18:30"));
}

#[test]
fn test_split_message_short() {
    let parts = split_message("Hello world");

    assert_eq!(parts, vec!["Hello world".to_string()]);
}

#[test]
fn test_split_message_exact_limit() {
    let text = "a".repeat(TELEGRAM_MAX_LENGTH);
    let parts = split_message(&text);

    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].chars().count(), TELEGRAM_MAX_LENGTH);
}

#[test]
fn test_split_message_over_limit() {
    let text = "a".repeat(TELEGRAM_MAX_LENGTH + 100);
    let parts = split_message(&text);

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].chars().count(), TELEGRAM_MAX_LENGTH);
    assert_eq!(parts[1].chars().count(), 100);

    assert_eq!(parts.concat(), text);
}

#[test]
fn test_split_message_ignores_newlines() {
    // fixed windows: a newline close to the limit doesn't move the cut
    let text = format!("{}\n{}", "a".repeat(TELEGRAM_MAX_LENGTH - 100), "b".repeat(200));
    let parts = split_message(&text);

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].chars().count(), TELEGRAM_MAX_LENGTH);
    assert_eq!(parts.concat(), text);
}

#[test]
fn test_split_message_with_emoji() {
    let text = "👋".repeat(TELEGRAM_MAX_LENGTH + 100);
    let parts = split_message(&text);

    assert_eq!(parts.len(), 2);
    for part in &parts {
        assert!(part.chars().count() <= TELEGRAM_MAX_LENGTH);
    }

    assert_eq!(parts.concat(), text);
}

#[test]
fn test_split_message_empty() {
    let parts = split_message("");

    assert_eq!(parts, vec![String::new()]);
}

#[test]
fn test_split_message_multiple_splits() {
    let text = "ñ".repeat(TELEGRAM_MAX_LENGTH * 3 + 1);
    let parts = split_message(&text);

    assert_eq!(parts.len(), 4);
    for part in &parts {
        assert!(part.chars().count() <= TELEGRAM_MAX_LENGTH);
    }

    assert_eq!(parts.concat(), text);
}

#[test]
fn test_split_message_counts_chars_not_utf16_units() {
    let text = "😀".repeat(TELEGRAM_MAX_LENGTH + 1);
    let parts = split_message(&text);

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].chars().count(), TELEGRAM_MAX_LENGTH);
    assert_eq!(parts[0].encode_utf16().count(), 2 * TELEGRAM_MAX_LENGTH);
    assert_eq!(parts[1], "😀");
}
