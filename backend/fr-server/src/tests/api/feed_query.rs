use crate::FeedQuery;

fn page_of(raw: Option<&str>) -> u32 {
    FeedQuery {
        page: raw.map(str::to_string),
    }
    .page()
}

#[test]
fn test_page_defaults_to_first() {
    assert_eq!(page_of(None), 1);
    assert_eq!(page_of(Some("")), 1);
}

#[test]
fn test_page_invalid_or_non_positive_means_first() {
    assert_eq!(page_of(Some("abc")), 1);
    assert_eq!(page_of(Some("0")), 1);
    assert_eq!(page_of(Some("-3")), 1);
    assert_eq!(page_of(Some("2.5")), 1);
}

#[test]
fn test_page_parses_positive_numbers() {
    assert_eq!(page_of(Some("1")), 1);
    assert_eq!(page_of(Some(" 7 ")), 7);
}

#[test]
fn test_page_saturates_on_huge_values() {
    assert_eq!(page_of(Some("99999999999")), u32::MAX);
}
