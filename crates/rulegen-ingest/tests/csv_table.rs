use rulegen_ingest::read_rule_table;
use rulegen_model::RulegenError;

#[test]
fn reads_headers_and_rows() {
    let table = read_rule_table(b"pattern_name,pattern\nHome,^/$\nAbout,^/about$\n")
        .expect("read rule table");
    assert_eq!(table.headers, vec!["pattern_name", "pattern"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["Home", "^/$"]);
    assert_eq!(table.rows[1], vec!["About", "^/about$"]);
}

#[test]
fn strips_bom_and_whitespace_from_headers() {
    let table = read_rule_table("\u{feff} Pattern  Name ,pattern\nHome,^/$\n".as_bytes())
        .expect("read rule table");
    assert_eq!(table.headers, vec!["Pattern Name", "pattern"]);
}

#[test]
fn preserves_cell_values_verbatim() {
    let table = read_rule_table(b"pattern_name,pattern\nHome, ^/path\\d+$ \n").expect("read table");
    assert_eq!(table.rows[0][1], " ^/path\\d+$ ");
}

#[test]
fn handles_quoted_fields_with_commas() {
    let table = read_rule_table(b"pattern_name,pattern,description\nSearch,\"^/(a|b),?$\",\"Search, results\"\n")
        .expect("read rule table");
    assert_eq!(table.rows[0][1], "^/(a|b),?$");
    assert_eq!(table.rows[0][2], "Search, results");
}

#[test]
fn drops_fully_empty_rows() {
    let table = read_rule_table(b"pattern_name,pattern\n,\nHome,^/$\n  ,  \n").expect("read table");
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][0], "Home");
}

#[test]
fn pads_short_rows_to_header_width() {
    let table =
        read_rule_table(b"pattern_name,pattern,color\nHome,^/$\n").expect("read rule table");
    assert_eq!(table.rows[0], vec!["Home", "^/$", ""]);
}

#[test]
fn rejects_invalid_utf8() {
    let error = read_rule_table(&[0x70, 0x61, 0xff, 0xfe]).expect_err("decode failure");
    assert!(matches!(error, RulegenError::Decode(_)));
}

#[test]
fn rejects_header_only_input() {
    let error = read_rule_table(b"pattern_name,pattern\n").expect_err("empty input");
    assert!(matches!(error, RulegenError::EmptyInput));
}

#[test]
fn rejects_empty_input() {
    let error = read_rule_table(b"").expect_err("empty input");
    assert!(matches!(error, RulegenError::EmptyInput));
}
