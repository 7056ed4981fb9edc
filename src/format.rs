//! Formatting of money amounts and dates for display.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[day]/[month]/[year]");

/// numfmt switches to scientific notation for amounts this large.
const SCIENTIFIC_NOTATION_CUTOFF: f64 = 1_000_000_000_000.0;

/// Format `number` as a dollar amount with thousands separators and two
/// decimal places, e.g. "$1,234.50" or "-$3.00".
///
/// The amount is rounded to the nearest cent first. Values that are not
/// finite are displayed as zero.
pub fn format_value(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();
    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let number = round_to_cents(number);

    // numfmt renders zero as "0" without the prefix.
    if !number.is_finite() || number == 0.0 {
        return "$0.00".to_owned();
    }

    if number.abs() >= SCIENTIFIC_NOTATION_CUTOFF {
        let sign = if number < 0.0 { "-" } else { "" };
        return format!("{sign}${}", group_thousands(number.abs()));
    }

    let positive_fmt = POSITIVE_FMT.get_or_init(|| currency_formatter("$"));
    let negative_fmt = NEGATIVE_FMT.get_or_init(|| currency_formatter("-$"));

    let formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else {
        positive_fmt.fmt_string(number)
    };

    pad_cents(formatted_string)
}

/// Round `number` to the nearest cent.
///
/// numfmt truncates extra decimals instead of rounding them, and float
/// residue such as `0.3 - 0.1 - 0.2` should read as zero.
pub fn round_to_cents(number: f64) -> f64 {
    (number * 100.0).round() / 100.0
}

/// Write a non-negative amount with comma separated thousands and two decimals.
fn group_thousands(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u128;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3 + 3);
    for (index, digit) in dollars.chars().enumerate() {
        if index > 0 && (dollars.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{grouped}.{:02}", cents % 100)
}

fn currency_formatter(prefix: &str) -> Formatter {
    Formatter::currency(prefix)
        .expect("currency prefix should be shorter than the numfmt prefix limit")
        .precision(Precision::Decimals(2))
}

/// numfmt drops trailing zeros after the decimal point, e.g. "12.30" is
/// rendered as "12.3" and "12.00" as "12".
fn pad_cents(mut formatted_string: String) -> String {
    match formatted_string.rfind('.') {
        None => formatted_string.push_str(".00"),
        Some(point) => {
            for _ in formatted_string.len() - point - 1..2 {
                formatted_string.push('0');
            }
        }
    }

    formatted_string
}

/// Format the calendar date of `date_time` in the timezone `offset` as
/// "dd/mm/yyyy".
pub fn format_date(date_time: OffsetDateTime, offset: UtcOffset) -> String {
    let date = date_time.to_offset(offset).date();

    date.format(DATE_FORMAT).unwrap_or_else(|error| {
        tracing::error!("could not format the date {date}: {error}");
        date.to_string()
    })
}
