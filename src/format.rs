//! Display formatting for trade rows.
//!
//! Everything here is a pure function of its inputs; the current time is
//! always passed in so callers decide when "now" is.

use chrono::{DateTime, Datelike, Timelike, Utc};
use rust_decimal::Decimal;

/// Number of wei per displayed micro-ETH (10^18 / 10^6).
const WEI_PER_MICRO: u128 = 1_000_000_000_000;

/// Micro-ETH per ETH.
const MICROS_PER_ETH: u128 = 1_000_000;

/// Symbol appended to net values.
pub const CURRENCY_SYMBOL: &str = "ETH";

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Shortens a long identifier to its first and last `keep` characters.
///
/// Strings that would not get shorter are returned unchanged.
///
/// ```
/// use tokenscope::format::truncate_address;
///
/// assert_eq!(truncate_address("0x1234567890abcdef", 6), "0x1234...abcdef");
/// assert_eq!(truncate_address("0x1234", 6), "0x1234");
/// ```
pub fn truncate_address(value: &str, keep: usize) -> String {
    let len = value.chars().count();
    if len <= keep * 2 + 3 {
        return value.to_string();
    }
    let head: String = value.chars().take(keep).collect();
    let tail: String = value.chars().skip(len - keep).collect();
    format!("{head}...{tail}")
}

/// Formats a trade amount with a `+` (buy) or `-` (sell) prefix.
pub fn format_amount(amount: Decimal, is_buy: bool) -> String {
    let sign = if is_buy { '+' } else { '-' };
    format!("{sign}{}", amount.normalize())
}

/// Converts a wei integer string into ETH with exactly six decimals.
///
/// The sixth digit is rounded half up. Values that are not a
/// non-negative integer (or do not fit in 128 bits) render as `--`.
///
/// ```
/// use tokenscope::format::format_net;
///
/// assert_eq!(format_net("1000000000000000000"), "1.000000 ETH");
/// assert_eq!(format_net("oops"), "-- ETH");
/// ```
pub fn format_net(cost: &str) -> String {
    match wei_to_micros(cost) {
        Some(micros) => format!(
            "{}.{:06} {CURRENCY_SYMBOL}",
            micros / MICROS_PER_ETH,
            micros % MICROS_PER_ETH
        ),
        None => format!("-- {CURRENCY_SYMBOL}"),
    }
}

/// Parses a wei string and rounds it to whole micro-ETH.
fn wei_to_micros(cost: &str) -> Option<u128> {
    let wei: u128 = cost.trim().parse().ok()?;
    let rounded = wei.checked_add(WEI_PER_MICRO / 2)?;
    Some(rounded / WEI_PER_MICRO)
}

/// Explorer page of the transaction `hash`.
pub fn tx_url(explorer_url: &str, hash: &str) -> String {
    format!("{explorer_url}/tx/{hash}")
}

/// Explorer page of block `number`.
pub fn block_url(explorer_url: &str, number: u64) -> String {
    format!("{explorer_url}/block/{number}")
}

/// Describes the distance between `then_ms` and `now_ms` in words, with a
/// direction suffix ("3 minutes ago", "in about 1 hour").
///
/// Both arguments are milliseconds since the Unix epoch. An instant equal
/// to `now_ms` counts as past.
pub fn format_distance(then_ms: i64, now_ms: i64) -> String {
    let words = distance_words(then_ms.min(now_ms), then_ms.max(now_ms));
    if then_ms > now_ms {
        format!("in {words}")
    } else {
        format!("{words} ago")
    }
}

/// Relative-time wording for `earlier_ms <= later_ms`.
fn distance_words(earlier_ms: i64, later_ms: i64) -> String {
    let seconds = (later_ms - earlier_ms) / 1000;
    let minutes = (seconds + 30) / 60;

    if minutes < 2 {
        return if minutes == 0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        };
    }
    if minutes < 45 {
        return format!("{minutes} minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes + 30) / 60;
        return format!("about {hours} hours");
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes + MINUTES_IN_DAY / 2) / MINUTES_IN_DAY;
        return format!("{days} days");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes + MINUTES_IN_MONTH / 2) / MINUTES_IN_MONTH;
        return plural(months, "about 1 month", "about {} months");
    }

    let months = calendar_months_between(earlier_ms, later_ms);
    if months < 12 {
        let nearest = (minutes + MINUTES_IN_MONTH / 2) / MINUTES_IN_MONTH;
        return plural(nearest, "1 month", "{} months");
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => plural(years, "about 1 year", "about {} years"),
        3..=8 => plural(years, "over 1 year", "over {} years"),
        _ => plural(years + 1, "almost 1 year", "almost {} years"),
    }
}

fn plural(count: i64, one: &str, many: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        many.replace("{}", &count.to_string())
    }
}

/// Number of full calendar months from `earlier_ms` to `later_ms` (UTC).
///
/// A month only counts once the later instant reaches the same day and
/// time of day as the earlier one.
fn calendar_months_between(earlier_ms: i64, later_ms: i64) -> i64 {
    let (Some(earlier), Some(later)) = (
        DateTime::<Utc>::from_timestamp_millis(earlier_ms),
        DateTime::<Utc>::from_timestamp_millis(later_ms),
    ) else {
        return (later_ms - earlier_ms) / 1000 / 60 / MINUTES_IN_MONTH;
    };

    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month()) - i64::from(earlier.month());

    let later_key = (later.day(), later.num_seconds_from_midnight(), later.nanosecond());
    let earlier_key = (
        earlier.day(),
        earlier.num_seconds_from_midnight(),
        earlier.nanosecond(),
    );
    if months > 0 && later_key < earlier_key {
        months -= 1;
    }
    months
}
