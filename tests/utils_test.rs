use foliocli::utils::*;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_add_tag_appends_new_entries() {
    let current = tags(&["Go"]);
    let result = add_tag(&current, "Rust");
    assert_eq!(result, tags(&["Go", "Rust"]));

    // the input list is not mutated
    assert_eq!(current, tags(&["Go"]));
}

#[test]
fn test_add_tag_trims_whitespace() {
    let result = add_tag(&tags(&["Go"]), "  Rust  ");
    assert_eq!(result, tags(&["Go", "Rust"]));
}

#[test]
fn test_add_tag_rejects_duplicates() {
    let current = tags(&["Go", "Rust"]);
    let result = add_tag(&current, "Go");
    assert_eq!(result, tags(&["Go", "Rust"]));

    // duplicate match is case-sensitive and exact
    let result = add_tag(&current, "go");
    assert_eq!(result, tags(&["Go", "Rust", "go"]));
}

#[test]
fn test_add_tag_rejects_empty_input() {
    let current = tags(&["Go"]);
    assert_eq!(add_tag(&current, ""), tags(&["Go"]));
    assert_eq!(add_tag(&current, "   "), tags(&["Go"]));
}

#[test]
fn test_remove_tag_drops_first_exact_match() {
    let current = tags(&["Go", "Rust", "Go"]);
    let result = remove_tag(&current, "Go");
    assert_eq!(result, tags(&["Rust", "Go"]));
}

#[test]
fn test_remove_tag_ignores_missing_entries() {
    let current = tags(&["Go"]);
    assert_eq!(remove_tag(&current, "Rust"), tags(&["Go"]));
    assert_eq!(remove_tag(&current, "go"), tags(&["Go"]));
}

#[test]
fn test_parse_display_date_accepts_both_separators() {
    let slash = parse_display_date("2023/12/15").unwrap();
    let dash = parse_display_date("2023-12-15").unwrap();
    assert_eq!(slash, dash);

    // surrounding whitespace is tolerated
    assert_eq!(parse_display_date(" 2023/12/15 "), Some(slash));
}

#[test]
fn test_parse_display_date_rejects_free_form_text() {
    assert_eq!(parse_display_date("2022/9-2023/5"), None);
    assert_eq!(parse_display_date("ongoing"), None);
    assert_eq!(parse_display_date(""), None);
}

#[test]
fn test_sort_newest_first_orders_parsed_dates_descending() {
    let mut rows = vec![
        ("2023/01/10".to_string(), "old"),
        ("2024/06/01".to_string(), "new"),
        ("2023/12/15".to_string(), "mid"),
    ];
    sort_newest_first(&mut rows, |(date, _)| date.as_str());

    let order: Vec<&str> = rows.iter().map(|(_, label)| *label).collect();
    assert_eq!(order, vec!["new", "mid", "old"]);
}

#[test]
fn test_sort_newest_first_handles_mixed_formats() {
    let mut rows = vec![
        ("2023-12-15".to_string(), "dash"),
        ("2024/01/01".to_string(), "slash"),
    ];
    sort_newest_first(&mut rows, |(date, _)| date.as_str());

    let order: Vec<&str> = rows.iter().map(|(_, label)| *label).collect();
    assert_eq!(order, vec!["slash", "dash"]);
}

#[test]
fn test_sort_newest_first_puts_unparsed_dates_last() {
    let mut rows = vec![
        ("sometime in 2022".to_string(), "vague"),
        ("2023/12/15".to_string(), "dated"),
        ("".to_string(), "blank"),
    ];
    sort_newest_first(&mut rows, |(date, _)| date.as_str());

    assert_eq!(rows[0].1, "dated");
    // unparsed rows keep a reverse-string order after the dated ones
    assert_eq!(rows[1].1, "vague");
    assert_eq!(rows[2].1, "blank");
}

#[test]
fn test_format_period() {
    assert_eq!(format_period("2019/9", "2023/6"), "2019/9 - 2023/6");
    assert_eq!(format_period("2023/7", ""), "2023/7 -");
    assert_eq!(format_period("2023/7", "  "), "2023/7 -");
}
