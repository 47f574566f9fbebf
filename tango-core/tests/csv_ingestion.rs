//! End-to-end tests for CSV ingestion

use tango_core::{
    parse_csv, parse_csv_with_report, split_csv_line, Error, ParseOptions, SkipReason, WordItem,
};

const WORD_LIST: &str = "chapter,japanese,english
Unit 1,りんご,apple
Unit 1,\"走る, 駆ける\",run
Unit 2,彼は「やあ」と言った,\"He said \"\"Hi\"\"\"

Unit 2,ねこ,cat
";

#[test]
fn test_line_ending_invariance() {
    let crlf = WORD_LIST.replace('\n', "\r\n");
    let cr = WORD_LIST.replace('\n', "\r");

    for options in [ParseOptions::strict(), ParseOptions::lenient()] {
        let lf_items = parse_csv(WORD_LIST, &options).unwrap();
        assert_eq!(parse_csv(&crlf, &options).unwrap(), lf_items);
        assert_eq!(parse_csv(&cr, &options).unwrap(), lf_items);
    }
}

#[test]
fn test_quote_round_trip() {
    assert_eq!(
        split_csv_line(r#""a,b","He said ""Hi""""#),
        vec!["a,b".to_string(), "He said \"Hi\"".to_string()]
    );
}

#[test]
fn test_quoted_cells_in_rows() {
    let items = parse_csv(WORD_LIST, &ParseOptions::strict()).unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[1].japanese, "走る, 駆ける");
    assert_eq!(items[2].english, "He said \"Hi\"");
}

#[test]
fn test_interior_blank_line_contributes_nothing() {
    let items = parse_csv(WORD_LIST, &ParseOptions::strict()).unwrap();
    assert_eq!(items[3], WordItem::new("ねこ", "cat", "Unit 2"));
}

#[test]
fn test_missing_english_cell_by_policy() {
    let text = "japanese,english,chapter\n犬,dog,A\n猫,,A\n鳥,bird,A\n";

    let lenient = parse_csv(text, &ParseOptions::lenient()).unwrap();
    assert_eq!(lenient.len(), 2);
    assert!(lenient.iter().all(|item| item.english != ""));

    let strict = parse_csv(text, &ParseOptions::strict()).unwrap();
    assert_eq!(strict.len(), 3);
    assert_eq!(strict[1], WordItem::new("猫", "", "A"));
}

#[test]
fn test_strict_rejects_header_without_required_columns() {
    let err = parse_csv("word,meaning\nりんご,apple", &ParseOptions::strict()).unwrap_err();
    match &err {
        Error::MissingRequiredColumn { missing } => {
            assert_eq!(missing, &vec!["japanese", "english"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("japanese"));
    assert!(message.contains("english"));
}

#[test]
fn test_lenient_degrades_on_missing_columns() {
    let report = parse_csv_with_report("word,meaning\nりんご,apple", &ParseOptions::lenient()).unwrap();
    assert!(report.items.is_empty());
    assert_eq!(report.rows_read, 1);
    assert_eq!(report.skipped[0].reason, SkipReason::MissingBoth);
}

#[test]
fn test_column_order_is_irrelevant() {
    let reordered = "English,Chapter,Japanese\napple,Unit 1,りんご\n";
    let items = parse_csv(reordered, &ParseOptions::strict()).unwrap();
    assert_eq!(items, vec![WordItem::new("りんご", "apple", "Unit 1")]);
}

#[test]
fn test_chapter_column_optional() {
    let items = parse_csv("japanese,english\nりんご,apple\n", &ParseOptions::strict()).unwrap();
    assert_eq!(items[0].chapter, "");
}

#[test]
fn test_parse_is_idempotent() {
    let options = ParseOptions::lenient();
    assert_eq!(
        parse_csv(WORD_LIST, &options).unwrap(),
        parse_csv(WORD_LIST, &options).unwrap()
    );
}

#[test]
fn test_bom_with_crlf() {
    let text = "\u{FEFF}japanese,english\r\n犬,dog\r\n";
    let items = parse_csv(text, &ParseOptions::strict()).unwrap();
    assert_eq!(items, vec![WordItem::new("犬", "dog", "")]);
}
