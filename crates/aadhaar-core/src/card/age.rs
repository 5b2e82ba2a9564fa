//! Age band derivation from a printed date of birth.

use chrono::{Datelike, Local, NaiveDate};

use super::rules::patterns::{DATE_ISO, DATE_LINE};

/// Label returned when the date of birth cannot be used.
pub const UNKNOWN_AGE_BAND: &str = "Unknown";

/// Upper age bounds (exclusive) and their labels.
const AGE_BANDS: [(u32, &str); 7] = [
    (18, "0-18"),
    (20, "18-20"),
    (30, "20-30"),
    (40, "30-40"),
    (50, "40-50"),
    (60, "50-60"),
    (70, "60-70"),
];

/// Age band for `dob` as of today (local time).
pub fn age_band(dob: &str) -> String {
    age_band_at(dob, Local::now().date_naive())
}

/// Age band for `dob` as of `today`.
///
/// Unparseable input, or a date after `today`, yields `"Unknown"`.
pub fn age_band_at(dob: &str, today: NaiveDate) -> String {
    let Some(birth) = parse_dob(dob) else {
        return UNKNOWN_AGE_BAND.to_string();
    };

    match age_on(birth, today) {
        Some(age) => band_for_age(age).to_string(),
        None => UNKNOWN_AGE_BAND.to_string(),
    }
}

/// Parse `DD/MM/YYYY` (also `-` or `.` delimited) or ISO `YYYY-MM-DD`.
pub fn parse_dob(dob: &str) -> Option<NaiveDate> {
    let dob = dob.trim();

    if let Some(caps) = DATE_ISO.captures(dob) {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if DATE_LINE.is_match(dob) {
        let mut parts = dob.split(['/', '-', '.']);
        let day = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let year = parts.next()?.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

/// Whole years elapsed from `birth` to `today`, or `None` if `birth` is later.
fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth > today {
        return None;
    }

    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}

fn band_for_age(age: u32) -> &'static str {
    AGE_BANDS
        .iter()
        .find(|(limit, _)| age < *limit)
        .map_or("70+", |(_, label)| *label)
}
