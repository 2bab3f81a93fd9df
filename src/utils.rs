use std::cmp::Ordering;

use chrono::NaiveDate;

/// Appends a tag to a tag list unless it is empty after trimming or already
/// present (case-sensitive exact match). Returns the resulting list; the
/// input is never mutated.
pub fn add_tag(current: &[String], candidate: &str) -> Vec<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() || current.iter().any(|tag| tag == trimmed) {
        return current.to_vec();
    }

    let mut tags = current.to_vec();
    tags.push(trimmed.to_string());
    tags
}

/// Removes the first exact match of a tag from a tag list, if present.
pub fn remove_tag(current: &[String], candidate: &str) -> Vec<String> {
    let mut tags = current.to_vec();
    if let Some(pos) = tags.iter().position(|tag| tag == candidate) {
        tags.remove(pos);
    }
    tags
}

/// Best-effort parse of the free-form date strings stored on records. The
/// original data mixes `2023/12/15` and `2023-12-15`.
pub fn parse_display_date(date: &str) -> Option<NaiveDate> {
    let trimmed = date.trim();
    for format in ["%Y/%m/%d", "%Y-%m-%d"] {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    None
}

/// Sorts display rows newest-first by the date string each row exposes.
/// Rows whose dates do not parse sort after the parsed ones, in reverse
/// string order. Display-only: callers sort row copies, never the
/// collection itself.
pub fn sort_newest_first<T, F>(rows: &mut Vec<T>, date_of: F)
where
    F: Fn(&T) -> &str,
{
    rows.sort_by(|a, b| {
        let date_a = parse_display_date(date_of(a));
        let date_b = parse_display_date(date_of(b));
        match (date_a, date_b) {
            (Some(da), Some(db)) => match db.cmp(&da) {
                Ordering::Equal => date_of(b).cmp(date_of(a)),
                other => other,
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => date_of(b).cmp(date_of(a)),
        }
    });
}

/// Joins a period's start and end dates for table display, tolerating blank
/// ends for ongoing entries.
pub fn format_period(start: &str, end: &str) -> String {
    if end.trim().is_empty() {
        format!("{} -", start)
    } else {
        format!("{} - {}", start, end)
    }
}
