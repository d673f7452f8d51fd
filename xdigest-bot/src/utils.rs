use chrono::DateTime;
use chrono_tz::Tz;
use xdigest_common::Period;

pub(crate) const TELEGRAM_MAX_LENGTH: usize = 4096;

pub fn format_header(period: Period, now: &DateTime<Tz>) -> String {
    let (emoji, label) = match period {
        Period::Morning => ("🌅", "Mañana"),
        Period::Evening => ("🌆", "Tarde/Noche"),
        Period::Manual => ("🔄", "Manual"),
    };

    format!(
        "{emoji} *Resumen {label}* — {}\n\n",
        now.format("%d/%m/%Y %H:%M")
    )
}

/// Cut `text` into contiguous windows of at most [`TELEGRAM_MAX_LENGTH`] characters.
/// Splits are not word-aware: joining the parts gives back the input.
///
/// Windows count `char`s. Telegram measures UTF-16 code units, so a window made
/// mostly of astral-plane emoji can still be rejected as too long.
pub fn split_message(text: &str) -> Vec<String> {
    if text.chars().count() <= TELEGRAM_MAX_LENGTH {
        return vec![text.to_string()];
    }

    text.chars()
        .collect::<Vec<_>>()
        .chunks(TELEGRAM_MAX_LENGTH)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
