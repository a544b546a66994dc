//! Date/time parsing and formatting.
//!
//! Two entry points back the `date` rule:
//!
//! - [`parse_free_form`] recognises common date, date-time and time
//!   expressions without a format.
//! - [`DateFormat`] is a compiled strftime format that checks whether a
//!   string survives a parse → format round trip unchanged.
//!
//! ```
//! use chrono::NaiveDate;
//! use nebula_verifier::formats::DateFormat;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let format = DateFormat::compile("%Y%m%d").unwrap();
//! assert!(format.round_trips("19771106", today));
//! assert!(!format.round_trips("19771100", today));
//! ```

use std::fmt::Write as _;

use chrono::format::{self, Item, Parsed, StrftimeItems};
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::VerifierConfig;

/// Layouts carrying both a date and a time.
const DATE_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%H:%M %d-%m-%Y",
];

/// Date-only layouts.
const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%m/%d/%Y",
    "%Y%m%d",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
];

/// Time-only layouts; the date is "today".
const TIME_LAYOUTS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M",
    "%I:%M %p",
    "%I:%M:%S %p",
    "%I%p",
    "%I %p",
];

// ============================================================================
// FREE-FORM PARSING
// ============================================================================

/// Parses a date/time expression without a format.
///
/// Accepts RFC 3339, RFC 2822, the built-in ISO, European and US layouts,
/// `@<unix timestamp>`, the keywords `now`, `today`, `midnight`, `noon`,
/// `tomorrow` and `yesterday` (relative to [`VerifierConfig::today`]), and
/// every layout in [`VerifierConfig::date_layouts`].
#[must_use]
pub fn parse_free_form(input: &str, config: &VerifierConfig) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let today = config.today();

    if let Some(instant) = parse_keyword(input, today) {
        return Some(instant);
    }
    if let Some(seconds) = input.strip_prefix('@') {
        return seconds
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|instant| instant.naive_utc());
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Some(instant.naive_utc());
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(input) {
        return Some(instant.naive_utc());
    }

    let configured = config.date_layouts.iter().map(String::as_str);
    configured
        .chain(DATE_TIME_LAYOUTS.iter().copied())
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
        .or_else(|| {
            let configured = config.date_layouts.iter().map(String::as_str);
            configured
                .chain(DATE_LAYOUTS.iter().copied())
                .find_map(|layout| NaiveDate::parse_from_str(input, layout).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .or_else(|| {
            let configured = config.date_layouts.iter().map(String::as_str);
            configured
                .chain(TIME_LAYOUTS.iter().copied())
                .find_map(|layout| NaiveTime::parse_from_str(input, layout).ok())
                .map(|time| today.and_time(time))
        })
}

fn parse_keyword(input: &str, today: NaiveDate) -> Option<NaiveDateTime> {
    let midnight = |date: NaiveDate| date.and_time(NaiveTime::MIN);
    match input.to_ascii_lowercase().as_str() {
        "now" => Some(today.and_time(chrono::Utc::now().time())),
        "today" | "midnight" => Some(midnight(today)),
        "noon" => NaiveTime::from_hms_opt(12, 0, 0).map(|noon| today.and_time(noon)),
        "tomorrow" => today.checked_add_days(Days::new(1)).map(midnight),
        "yesterday" => today.checked_sub_days(Days::new(1)).map(midnight),
        _ => None,
    }
}

// ============================================================================
// STRFTIME ROUND TRIP
// ============================================================================

/// A compiled strftime format.
#[derive(Debug, Clone)]
pub struct DateFormat<'a> {
    items: Vec<Item<'a>>,
}

impl<'a> DateFormat<'a> {
    /// Compiles `format`; `None` if it contains an unknown or malformed
    /// specifier.
    #[must_use]
    pub fn compile(format: &'a str) -> Option<Self> {
        let items: Vec<Item<'a>> = StrftimeItems::new(format).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return None;
        }
        Some(Self { items })
    }

    /// Whether `input` parses with this format and formats back to exactly
    /// `input`.
    ///
    /// Fields the format leaves out default to the year of `today`, January,
    /// day 1 and midnight.
    #[must_use]
    pub fn round_trips(&self, input: &str, today: NaiveDate) -> bool {
        self.render(input, today)
            .is_some_and(|rendered| rendered == input)
    }

    fn render(&self, input: &str, today: NaiveDate) -> Option<String> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, input, self.items.iter()).ok()?;
        fill_defaults(&mut parsed, today)?;

        let mut rendered = String::with_capacity(input.len());
        if parsed.offset().is_some() {
            let instant = parsed.to_datetime().ok()?;
            write!(rendered, "{}", instant.format_with_items(self.items.iter())).ok()?;
        } else {
            let instant = parsed.to_naive_datetime_with_offset(0).ok()?;
            write!(rendered, "{}", instant.format_with_items(self.items.iter())).ok()?;
        }
        Some(rendered)
    }
}

/// Completes the fields a format did not mention.
fn fill_defaults(parsed: &mut Parsed, today: NaiveDate) -> Option<()> {
    if parsed.timestamp().is_some() {
        return Some(());
    }

    let year_known = parsed.year().is_some()
        || parsed.year_div_100().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some();
    if !year_known {
        parsed.set_year(i64::from(today.year())).ok()?;
    }

    let week_based = parsed.ordinal().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some()
        || parsed.isoweek().is_some();
    if !week_based {
        if parsed.month().is_none() {
            parsed.set_month(1).ok()?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1).ok()?;
        }
    }

    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0).ok()?,
        (Some(_), None) => parsed.set_hour12(12).ok()?,
        (None, Some(_)) => parsed.set_ampm(false).ok()?,
        (Some(_), Some(_)) => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0).ok()?;
    }
    if parsed.second().is_none() {
        parsed.set_second(0).ok()?;
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[rstest]
    #[case("%Y%m%d", "19771106", true)]
    #[case("%Y%m", "197711", true)]
    #[case("%Y", "1977", true)]
    #[case("%Y%m%d", "19771100", false)]
    #[case("%Y%m%d", "19771135", false)]
    #[case("%Y-%m-%d", "2023-02-29", false)]
    #[case("%H:%M:%S", "23:58:00", true)]
    #[case("%H:%M", "23:58", true)]
    #[case("%H:%M", "24:00", false)]
    #[case("%H:%M", "23:60", false)]
    #[case("%Y-%m-%d %H:%M:%S", "1977-11-06 13:01:02", true)]
    #[case("%H:%M %d-%m-%Y", "23:58 06-11-1977", true)]
    #[case("%d/%m/%Y", "6/11/1977", false)]
    #[case("%I:%M %p", "01:30 PM", true)]
    #[case("%Y-%m-%dT%H:%M:%S%:z", "1977-11-06T13:01:02+01:00", true)]
    #[case("%Y-%m-%d", "1977-11-06 ", false)]
    fn round_trip(#[case] format: &str, #[case] input: &str, #[case] expected: bool) {
        let compiled = DateFormat::compile(format).unwrap();
        assert_eq!(compiled.round_trips(input, today()), expected, "{format} / {input}");
    }

    #[test]
    fn invalid_formats_do_not_compile() {
        assert!(DateFormat::compile("%Y-%Q").is_none());
        assert!(DateFormat::compile("%").is_none());
        assert!(DateFormat::compile("literal only").is_some());
    }

    #[rstest]
    #[case("1977-11-06")]
    #[case("1977-11-06 13:01:02")]
    #[case("1977-11-06T13:01:02Z")]
    #[case("Sun, 06 Nov 1977 13:01:02 +0000")]
    #[case("06.11.1977")]
    #[case("11/06/1977")]
    #[case("6 November 1977")]
    #[case("November 6, 1977")]
    #[case("23:58")]
    #[case("@247669262")]
    #[case("tomorrow")]
    #[case("Noon")]
    fn free_form_accepts(#[case] input: &str) {
        assert!(
            parse_free_form(input, &VerifierConfig::new()).is_some(),
            "{input}"
        );
    }

    #[rstest]
    #[case("")]
    #[case("not a date")]
    #[case("1977-13-06")]
    #[case("25:00")]
    #[case("@soon")]
    fn free_form_rejects(#[case] input: &str) {
        assert!(
            parse_free_form(input, &VerifierConfig::new()).is_none(),
            "{input}"
        );
    }

    #[test]
    fn keywords_follow_the_reference_date() {
        let config = VerifierConfig::new().with_reference_date(today());
        assert_eq!(
            parse_free_form("yesterday", &config).map(|instant| instant.date()),
            NaiveDate::from_ymd_opt(2024, 6, 14)
        );
    }

    #[test]
    fn configured_layouts_are_tried() {
        let config = VerifierConfig::new().with_date_layout("%Y.%j");
        assert!(parse_free_form("1977.310", &VerifierConfig::new()).is_none());
        assert_eq!(
            parse_free_form("1977.310", &config).map(|instant| instant.date()),
            NaiveDate::from_ymd_opt(1977, 11, 6)
        );
    }
}
