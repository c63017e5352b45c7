//! Time-window generation.
//!
//! A window is `n` consecutive periods centred on an anchor time. Each
//! period is rendered as a label (e.g. `2026-02-03` for days, `2026-W06`
//! for weeks) and derived independently, so a verifier holding the seed
//! can accept any slug from the window.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use timeslug_crypto::entropy::SecretSeed;
use timeslug_types::{DerivedSlug, Interval, Result, SlugMode, TimeslugError};

use crate::derive::Deriver;

/// Largest accepted window.
pub const MAX_WINDOW: i64 = 10_000;

/// Anchor layouts without an offset, tried in order after RFC 3339.
/// Such anchors are read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

const HOUR_FORMAT: &str = "%Y-%m-%dT%H";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an anchor time.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DDTHH:MM`,
/// `YYYY-MM-DDTHH` and `YYYY-MM-DD`. An RFC 3339 anchor keeps its
/// offset, which is also used when labelling periods.
pub fn parse_anchor(s: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t);
    }

    for format in NAIVE_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(as_utc(t));
        }
    }

    // chrono needs a minute field to build a time; supply ":00".
    if let Ok(t) = NaiveDateTime::parse_from_str(&format!("{s}:00"), &format!("{HOUR_FORMAT}:%M")) {
        return Ok(as_utc(t));
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        if let Some(t) = d.and_hms_opt(0, 0, 0) {
            return Ok(as_utc(t));
        }
    }

    Err(TimeslugError::InvalidTime {
        reason: format!("unrecognised time '{s}'"),
    })
}

fn as_utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Utc.from_utc_datetime(&naive).into()
}

/// Renders `time` as the period label for `interval`.
pub fn period_label(time: &DateTime<FixedOffset>, interval: Interval) -> String {
    time.format(interval.label_format()).to_string()
}

/// Label of the period `step` intervals away from `anchor`.
pub fn period_at(anchor: &DateTime<FixedOffset>, interval: Interval, step: i64) -> Result<String> {
    let time = step
        .checked_mul(interval.seconds())
        .and_then(Duration::try_seconds)
        .and_then(|offset| anchor.checked_add_signed(offset))
        .ok_or_else(|| TimeslugError::InvalidTime {
            reason: format!("{step} {interval} steps from {anchor} is out of range"),
        })?;
    Ok(period_label(&time, interval))
}

/// Labels of the `window` periods centred on `anchor`.
///
/// The first label is `-(window / 2)` intervals from the anchor, so an
/// odd window is symmetric and an even one leans one period into the past.
pub fn period_labels(anchor: &DateTime<FixedOffset>, interval: Interval, window: i64) -> Result<Vec<String>> {
    check_window(window)?;
    let start = -(window / 2);
    (start..start + window)
        .map(|step| period_at(anchor, interval, step))
        .collect()
}

fn check_window(window: i64) -> Result<()> {
    if !(1..=MAX_WINDOW).contains(&window) {
        return Err(TimeslugError::ConfigError {
            reason: format!("window must be between 1 and {MAX_WINDOW}, got {window}"),
        });
    }
    Ok(())
}

/// Identifier for a generated window:
/// `{anchor}-{mode}-{interval}-{length}-{window}`.
pub fn window_id(anchor: &str, mode: SlugMode, interval: Interval, length: i64, window: i64) -> String {
    format!("{anchor}-{mode}-{interval}-{length}-{window}")
}

impl<'d> Deriver<'d> {
    /// Derives one slug per period of the window around `anchor`.
    pub fn generate(
        &self,
        seed: &SecretSeed,
        anchor: &str,
        length: i64,
        window: i64,
        interval: Interval,
        mode: SlugMode,
    ) -> Result<Vec<DerivedSlug>> {
        let anchor_time = parse_anchor(anchor)?;
        let periods = period_labels(&anchor_time, interval, window)?;

        tracing::debug!(anchor, %interval, window, "generating window");

        periods
            .iter()
            .map(|period| self.derive(seed, period, length, mode))
            .collect()
    }
}

/// Window generation with the embedded English word list.
///
/// `interval` and `mode` are parsed from their string names.
pub fn generate(
    seed: &SecretSeed,
    anchor: &str,
    length: i64,
    window: i64,
    interval: &str,
    mode: &str,
) -> Result<Vec<DerivedSlug>> {
    let interval: Interval = interval.parse()?;
    let mode: SlugMode = mode.parse()?;
    Deriver::english().generate(seed, anchor, length, window, interval, mode)
}
