use chrono::NaiveDate;

/// Header date, e.g. `16 Oct 2026`.
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}
