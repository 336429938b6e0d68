use super::*;

#[test]
fn section_body_keeps_source_order() {
    let built = build(b"\\SECT\n foo\n bar\n");
    assert!(built.warnings.is_empty());
    assert_eq!(
        built.index,
        vec![IndexEntry {
            key: *b"SECT",
            start: 0,
            end: 8,
        }]
    );
    assert_eq!(built.output, b"1 0\nSECT        0        8\nfoo\nbar\n".to_vec());
}

#[test]
fn header_counts_sections_and_contents() {
    let source = b"{ comment\n Contents\n+Shared\n\\A\n alpha\n\\BB\n beta\n";
    let built = build(source);
    assert_eq!(built.index.len(), 2);
    assert_eq!(built.contents_lines, 2);
    assert!(built.output.starts_with(b"2 2\n"));
    assert_eq!(built.index[0].key, *b"   A");
    assert_eq!(built.index[1].key, *b"  BB");

    let help = HelpFile::parse(&built.output).unwrap();
    assert_eq!(help.contents(), b"Contents\nShared\n");
    assert_eq!(help.section("a"), Some(&b"alpha\n"[..]));
    assert_eq!(help.section(" bb "), Some(&b"beta\n"[..]));
    assert_eq!(help.section("zz"), None);
}

#[test]
fn illegal_and_long_lines_warn() {
    let long = format!(" {}\n", "x".repeat(MAX_PAYLOAD + 5));
    let source = format!("\\S\n?odd\n\n{long}");
    let built = build(source.as_bytes());

    assert_eq!(
        built.warnings,
        vec![
            HelpWarning::Illegal {
                line: 2,
                text: "?odd".to_string(),
            },
            HelpWarning::Illegal {
                line: 3,
                text: String::new(),
            },
            HelpWarning::Truncated { line: 4 },
        ]
    );
    let help = HelpFile::parse(&built.output).unwrap();
    assert_eq!(help.section("S").map(<[u8]>::len), Some(MAX_PAYLOAD + 1));
}

#[test]
fn contents_lines_lead_their_section_body() {
    let built = build(b"\\SECT\n foo\n+bar\n\\#");
    assert_eq!(built.output, b"1 1\nSECT        0        8\nbar\nbar\nfoo\n".to_vec());

    let built = build(b"\\A\n one\n+two\n two more\n+three\n\\B\n four\n");
    let help = HelpFile::parse(&built.output).unwrap();
    assert_eq!(help.contents(), b"two\nthree\n");
    assert_eq!(help.section("A"), Some(&b"two\nthree\none\ntwo more\n"[..]));
    assert_eq!(help.section("B"), Some(&b"four\n"[..]));
}

#[test]
fn short_keys_are_right_justified() {
    let built = build(b"\\AL\n advance\n\\WINDOWS\n window\n");
    assert!(built
        .output
        .starts_with(b"2 0\n  AL        0        8\nWIND        8       15\n"));
    let help = HelpFile::parse(&built.output).unwrap();
    assert_eq!(help.section("al"), Some(&b"advance\n"[..]));
    assert_eq!(help.section("wind"), Some(&b"window\n"[..]));
}

#[test]
fn plain_sources_round_trip_through_contents_and_body() {
    let source = b" intro\n more intro\n\\X\n first\n second\n\\Y\n third\n";
    let built = build(source);
    let help = HelpFile::parse(&built.output).unwrap();
    let mut joined = help.contents().to_vec();
    joined.extend_from_slice(help.section("x").unwrap());
    joined.extend_from_slice(help.section("y").unwrap());
    assert_eq!(joined, b"intro\nmore intro\nfirst\nsecond\nthird\n".to_vec());
}

#[test]
fn escaped_percent_lines_stay_in_body() {
    let built = build(b"\\S\n\\%PAUSE\n after\n");
    let help = HelpFile::parse(&built.output).unwrap();
    assert_eq!(help.section("S"), Some(&b"\\%PAUSE\nafter\n"[..]));
}

#[test]
fn hash_line_ends_the_source() {
    let built = build(b"\\S\n kept\n\\#\n dropped\n\\T\n");
    assert_eq!(built.index.len(), 1);
    let help = HelpFile::parse(&built.output).unwrap();
    assert_eq!(help.section("S"), Some(&b"kept\n"[..]));
    assert_eq!(help.section("T"), None);
}

#[test]
fn crlf_source_lines_are_trimmed() {
    let built = build(b"\\S\r\n one\r\n");
    let help = HelpFile::parse(&built.output).unwrap();
    assert_eq!(help.section("s"), Some(&b"one\n"[..]));
}

#[test]
fn malformed_help_files_are_rejected() {
    assert_eq!(HelpFile::parse(b"").unwrap_err(), HelpError::BadHeader);
    assert_eq!(HelpFile::parse(b"one two\n").unwrap_err(), HelpError::BadHeader);
    assert_eq!(HelpFile::parse(b"2 0\nSECT 0 1\n").unwrap_err(), HelpError::Truncated);
    assert_eq!(HelpFile::parse(b"1 0\nAB\n").unwrap_err(), HelpError::BadIndex(1));
    assert_eq!(
        HelpFile::parse(b"1 0\nSECT        0       40\nshort\n").unwrap_err(),
        HelpError::Truncated
    );
}
