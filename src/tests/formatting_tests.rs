use crate::formatting::truncate;

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate("Chess Club", 20), "Chess Club");
}

#[test]
fn test_truncate_long_ascii_string() {
    assert_eq!(truncate("A very long club name", 10), "A very ...");
}

#[test]
fn test_truncate_multibyte_description() {
    // Korean description longer than the column; must cut on a char
    // boundary, not a byte offset
    let desc = "체스를 사랑하는 사람들의 모임입니다";
    let cut = truncate(desc, 10);
    assert_eq!(cut, "체스를 사랑하...");
}

#[test]
fn test_truncate_multibyte_exact_fit() {
    let name = "독서 모임";
    assert_eq!(truncate(name, 5), "독서 모임");
}
