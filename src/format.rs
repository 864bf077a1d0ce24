//! Formatting of dates and amounts for display in the Indonesian locale.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};

const RUPIAH_PREFIX: &str = "Rp\u{a0}";
const NEGATIVE_RUPIAH_PREFIX: &str = "-Rp\u{a0}";

/// numfmt switches to scientific notation from this magnitude on.
const LARGEST_NUMFMT_AMOUNT: f64 = 1e15;

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// A point in time parsed from an ISO 8601 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Timestamp {
    /// A full timestamp, e.g. "2024-01-01T10:00:00.000Z".
    ///
    /// Timestamps without an offset are assumed to be in UTC.
    Instant(OffsetDateTime),
    /// A calendar date without a time, e.g. "2024-01-01".
    Date(Date),
}

impl Timestamp {
    /// Parse an ISO 8601 date or timestamp, returning `None` if `text` is neither.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        if let Ok(instant) = OffsetDateTime::parse(text, &Rfc3339) {
            return Some(Self::Instant(instant));
        }

        // Postgres renders timestamps without a time zone with a space instead of the 'T'.
        let without_offset = text.replacen(' ', "T", 1);
        let description = format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
        );
        if let Ok(date_time) = PrimitiveDateTime::parse(&without_offset, description) {
            return Some(Self::Instant(date_time.assume_utc()));
        }

        Date::parse(text, format_description!("[year]-[month]-[day]"))
            .ok()
            .map(Self::Date)
    }

    /// The calendar date of this timestamp as seen from `offset`.
    ///
    /// Plain dates are not shifted.
    pub fn local_date(&self, offset: UtcOffset) -> Date {
        match self {
            Timestamp::Instant(instant) => instant.to_offset(offset).date(),
            Timestamp::Date(date) => *date,
        }
    }

    /// The instant used for ordering, plain dates count as midnight UTC.
    pub fn sort_key(&self) -> OffsetDateTime {
        match self {
            Timestamp::Instant(instant) => *instant,
            Timestamp::Date(date) => date.midnight().assume_utc(),
        }
    }
}

/// Format an ISO 8601 date or timestamp as a short Indonesian date, e.g. "2 Jan 2024".
///
/// Timestamps are converted to `offset` before taking the date. Text that is
/// not a valid date is returned unchanged.
pub fn format_date(iso_date: &str, offset: UtcOffset) -> String {
    match Timestamp::parse(iso_date) {
        Some(timestamp) => format_short_date(timestamp.local_date(offset)),
        None => iso_date.to_owned(),
    }
}

fn format_short_date(date: Date) -> String {
    let month = SHORT_MONTHS[date.month() as usize - 1];

    format!("{} {} {}", date.day(), month, date.year())
}

/// Format an amount as Indonesian Rupiah without fractional digits, e.g. "Rp 15.000".
///
/// Negative amounts are prefixed with a minus sign, e.g. "-Rp 15.000".
/// The space after "Rp" is a non-breaking space.
pub fn format_rupiah(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| rupiah_formatter(RUPIAH_PREFIX));

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| rupiah_formatter(NEGATIVE_RUPIAH_PREFIX));

    let amount = amount.round();

    if amount.abs() >= LARGEST_NUMFMT_AMOUNT {
        let prefix = if amount < 0.0 {
            NEGATIVE_RUPIAH_PREFIX
        } else {
            RUPIAH_PREFIX
        };

        return format!("{prefix}{}", group_thousands(amount.abs()));
    }

    let formatted_string = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return format!("{RUPIAH_PREFIX}0");
    };

    // numfmt groups thousands with commas, Indonesian uses periods.
    // There are no decimals to confuse them with.
    formatted_string.replace(',', ".")
}

/// Write a whole, non-negative amount with every digit and a period between
/// groups of three, e.g. "1.000.000.000.000.000".
fn group_thousands(amount: f64) -> String {
    let digits = format!("{amount:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped
}

fn rupiah_formatter(prefix: &str) -> Formatter {
    Formatter::currency(prefix)
        .expect("Rupiah prefix should be a valid currency prefix")
        .precision(Precision::Decimals(0))
}

#[cfg(test)]
mod tests {
    use time::{
        UtcOffset,
        macros::{date, datetime, offset},
    };

    use super::{Timestamp, format_date, format_rupiah};

    const JAKARTA: UtcOffset = offset!(+7);

    #[test]
    fn formats_rupiah_with_dot_separators() {
        assert_eq!(format_rupiah(15000.0), "Rp\u{a0}15.000");
        assert_eq!(format_rupiah(5_000_000.0), "Rp\u{a0}5.000.000");
        assert_eq!(format_rupiah(4_985_000.0), "Rp\u{a0}4.985.000");
        assert_eq!(format_rupiah(500.0), "Rp\u{a0}500");
    }

    #[test]
    fn formats_zero_rupiah() {
        assert_eq!(format_rupiah(0.0), "Rp\u{a0}0");
        assert_eq!(format_rupiah(0.2), "Rp\u{a0}0");
    }

    #[test]
    fn formats_negative_rupiah() {
        assert_eq!(format_rupiah(-15000.0), "-Rp\u{a0}15.000");
    }

    #[test]
    fn formats_huge_rupiah_without_losing_digits() {
        assert_eq!(format_rupiah(1e15), "Rp\u{a0}1.000.000.000.000.000");
        assert_eq!(
            format_rupiah(999_000_000_000_000_000.0),
            "Rp\u{a0}999.000.000.000.000.000"
        );
        assert_eq!(
            format_rupiah(1e21),
            "Rp\u{a0}1.000.000.000.000.000.000.000"
        );
        assert_eq!(format_rupiah(-1e15), "-Rp\u{a0}1.000.000.000.000.000");
    }

    #[test]
    fn rounds_fractional_rupiah() {
        assert_eq!(format_rupiah(1499.6), "Rp\u{a0}1.500");
    }

    #[test]
    fn formats_plain_date() {
        assert_eq!(format_date("2024-01-02", JAKARTA), "2 Jan 2024");
        assert_eq!(format_date("2024-08-17", JAKARTA), "17 Agu 2024");
    }

    #[test]
    fn formats_timestamp_in_local_timezone() {
        // 20:00 UTC on New Year's Eve is already New Year's Day in Jakarta.
        assert_eq!(format_date("2023-12-31T20:00:00.000Z", JAKARTA), "1 Jan 2024");
        assert_eq!(
            format_date("2023-12-31T20:00:00.000Z", UtcOffset::UTC),
            "31 Des 2023"
        );
    }

    #[test]
    fn formats_timestamp_with_offset_and_microseconds() {
        assert_eq!(
            format_date("2024-05-10T08:30:00.123456+00:00", JAKARTA),
            "10 Mei 2024"
        );
    }

    #[test]
    fn invalid_date_is_returned_unchanged() {
        assert_eq!(format_date("yesterday", JAKARTA), "yesterday");
        assert_eq!(format_date("", JAKARTA), "");
    }

    #[test]
    fn parses_timestamp_without_offset_as_utc() {
        assert_eq!(
            Timestamp::parse("2024-01-02T03:04:05"),
            Some(Timestamp::Instant(datetime!(2024-01-02 03:04:05 UTC)))
        );
        assert_eq!(
            Timestamp::parse("2024-01-02 03:04:05.5"),
            Some(Timestamp::Instant(datetime!(2024-01-02 03:04:05.5 UTC)))
        );
    }

    #[test]
    fn plain_dates_sort_as_midnight_utc() {
        let plain = Timestamp::parse("2024-01-02").unwrap();

        assert_eq!(plain, Timestamp::Date(date!(2024 - 01 - 02)));
        assert_eq!(plain.sort_key(), datetime!(2024-01-02 00:00 UTC));
    }
}
