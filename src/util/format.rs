//! Display formatting for counts and dates (en-US conventions).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDate;

/// Render an integer with comma thousands separators, e.g. `1,250`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a calendar date as `M/D/YYYY`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// `"6 users"`-style count label; `...` until the data has arrived.
pub fn count_label(count: Option<usize>, noun: &str) -> String {
    count.map_or_else(|| "...".to_owned(), |n| format!("{n} {noun}"))
}
