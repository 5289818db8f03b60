use ini_codec::{
    from_str, from_str_with_options, ini, to_string, ConversionError, IniDocument, IniOptions,
    ParseError,
};

#[test]
fn test_parse_document() {
    let document = from_str("[Foo]\nbar=hello world\n[Test]").unwrap();

    assert_eq!(document.len(), 2);
    assert_eq!(document["Foo"]["bar"], "hello world");
    assert_eq!(document["Test"].len(), 0);
}

#[test]
fn test_parse_empty_input() {
    let document = from_str("").unwrap();
    assert_eq!(document.len(), 0);
}

#[test]
fn test_parse_comment_only_input() {
    let document = from_str("# this is a comment").unwrap();
    assert_eq!(document.len(), 0);
}

#[test]
fn test_parse_empty_section() {
    let document = from_str("[Foo]").unwrap();

    assert_eq!(document.len(), 1);
    assert_eq!(document["Foo"].len(), 0);
}

#[test]
fn test_parse_empty_field_value() {
    let document = from_str("[Foo]\nbar=").unwrap();

    assert_eq!(document.len(), 1);
    assert_eq!(document["Foo"].len(), 1);
    assert_eq!(document["Foo"]["bar"], "");
}

#[test]
fn test_duplicate_field_is_last_write_wins() {
    let document = from_str("[Foo]\nbar=hello\nbar=world").unwrap();

    assert_eq!(document["Foo"].len(), 1);
    assert_eq!(document["Foo"]["bar"], "world");
}

#[test]
fn test_field_as_float() {
    let document = from_str("[Foo]\nbar1=1.2\nbar2=1\nbar3=-2.4").unwrap();

    assert_eq!(document["Foo"]["bar1"].as_float(), Ok(1.2));
    assert_eq!(document["Foo"]["bar2"].as_float(), Ok(1.0));
    assert_eq!(document["Foo"]["bar3"].as_float(), Ok(-2.4));
}

#[test]
fn test_field_as_int() {
    let document = from_str("[Foo]\nbar1=1\nbar2=-2").unwrap();

    assert_eq!(document["Foo"]["bar1"].as_int(), Ok(1));
    assert_eq!(document["Foo"]["bar2"].as_int(), Ok(-2));
}

#[test]
fn test_field_as_bool() {
    let document = from_str("[Foo]\nbar1=true\nbar2=false\nbar3=tRuE").unwrap();

    assert_eq!(document["Foo"]["bar1"].as_bool(), Ok(true));
    assert_eq!(document["Foo"]["bar2"].as_bool(), Ok(false));
    assert_eq!(document["Foo"]["bar3"].as_bool(), Ok(true));
}

#[test]
fn test_custom_field_separator() {
    let options = IniOptions::new().with_separator(':');
    let document = from_str_with_options("[Foo]\nbar1:true\nbar2:false", options).unwrap();

    assert_eq!(document["Foo"]["bar1"].as_bool(), Ok(true));
    assert_eq!(document["Foo"]["bar2"].as_bool(), Ok(false));
}

#[test]
fn test_comment_lines_are_skipped() {
    let document = from_str("[Foo]\n# this is a test\nbar=bla").unwrap();

    assert_eq!(document["Foo"].len(), 1);
    assert_eq!(document["Foo"]["bar"], "bla");
}

#[test]
fn test_custom_comment_char_prefix() {
    let options = IniOptions::new().with_comment_prefix('$');
    let document = from_str_with_options("[Foo]\n$ this is a test\nbar=bla", options).unwrap();

    assert_eq!(document["Foo"].len(), 1);
    assert_eq!(document["Foo"]["bar"], "bla");
}

#[test]
fn test_multi_char_comment_prefix() {
    let options = IniOptions::new().with_comment_prefixes(["REM"]);
    let document = from_str_with_options("[Foo]\nREM this is a test\nbar=bla", options).unwrap();

    assert_eq!(document["Foo"].len(), 1);
    assert_eq!(document["Foo"]["bar"], "bla");
}

#[test]
fn test_multiple_multi_char_comment_prefixes() {
    let options = IniOptions::new().with_comment_prefixes(["REM", "#", "//"]);
    let document = from_str_with_options(
        "[Foo]\n\
         REM this is a comment\n\
         #Also a comment\n\
         //Even this is a comment\n\
         bar=bla",
        options,
    )
    .unwrap();

    assert_eq!(document["Foo"].len(), 1);
    assert_eq!(document["Foo"]["bar"], "bla");
}

#[test]
fn test_comment_prefixes_set_after_construction() {
    let mut document = IniDocument::new();
    document.set_comment_prefixes(["REM", "#", "//"]);
    document
        .decode(
            "[Foo]\n\
             REM this is a comment\n\
             #Also a comment\n\
             //Even this is a comment\n\
             bar=bla",
        )
        .unwrap();

    assert_eq!(document["Foo"].len(), 1);
    assert_eq!(document["Foo"]["bar"], "bla");
}

#[test]
fn test_comments_allowed_after_escaped_comments() {
    let document = from_str(
        "[Foo]\n\
         hello=world \\## this is a comment\n\
         more=of this \\# \\#\n",
    )
    .unwrap();

    assert_eq!(document["Foo"]["hello"], "world #");
    assert_eq!(document["Foo"]["more"], "of this # #");
}

#[test]
fn test_escape_covers_the_whole_multi_char_prefix() {
    let options = IniOptions::new().with_comment_prefixes(["##"]);
    let document = from_str_with_options(
        "[Foo]\n\
         weird1=note \\### this is not a comment\n\
         weird2=but \\#### this is a comment",
        options,
    )
    .unwrap();

    assert_eq!(document["Foo"]["weird1"], "note ### this is not a comment");
    assert_eq!(document["Foo"]["weird2"], "but ##");
}

#[test]
fn test_encode_bool_fields() {
    let mut document = IniDocument::new();
    document["Foo"]["bar1"].set(true);
    document["Foo"]["bar2"].set(false);

    assert_eq!(document.encode(), "[Foo]\nbar1=true\nbar2=false\n");
}

#[test]
fn test_encode_int_fields() {
    let mut document = IniDocument::new();
    document["Foo"]["bar1"].set(1);
    document["Foo"]["bar2"].set(-2);

    assert_eq!(document.encode(), "[Foo]\nbar1=1\nbar2=-2\n");
}

#[test]
fn test_encode_float_fields() {
    let mut document = IniDocument::new();
    document["Foo"]["bar1"].set(1.2);
    document["Foo"]["bar2"].set(-2.4);

    assert_eq!(document.encode(), "[Foo]\nbar1=1.2\nbar2=-2.4\n");
}

#[test]
fn test_encode_with_custom_field_separator() {
    let options = IniOptions::new().with_separator(':');
    let mut document = IniDocument::with_options(options);
    document["Foo"]["bar1"].set(true);
    document["Foo"]["bar2"].set(false);

    assert_eq!(document.encode(), "[Foo]\nbar1:true\nbar2:false\n");
}

#[test]
fn test_inline_comments_on_section_headers_are_discarded() {
    let document = from_str("[Foo] # This is an inline comment\nbar=Hello world!").unwrap();

    assert!(document.get("Foo").is_some());
    assert_eq!(document["Foo"]["bar"], "Hello world!");
}

#[test]
fn test_inline_comments_on_fields_are_discarded() {
    let document = from_str("[Foo]\nbar=Hello #world!").unwrap();

    assert_eq!(document["Foo"]["bar"], "Hello");
}

#[test]
fn test_inline_comments_can_be_escaped() {
    let document = from_str("[Foo]\nbar=Hello \\#world!").unwrap();

    assert_eq!(document["Foo"]["bar"], "Hello #world!");
}

#[test]
fn test_escape_chars_kept_when_not_before_a_comment_prefix() {
    let document = from_str("[Foo]\nbar=Hello \\world!").unwrap();

    assert_eq!(document["Foo"]["bar"], "Hello \\world!");
}

#[test]
fn test_unclosed_section_fails() {
    let err = from_str("[Foo\nbar=bla").unwrap_err();
    assert_eq!(err, ParseError::UnclosedSection { line: 1 });
}

#[test]
fn test_field_without_separator_fails() {
    let err = from_str("[Foo]\nbar").unwrap_err();
    assert_eq!(err, ParseError::MissingSeparator { line: 2 });
}

#[test]
fn test_field_before_any_section_fails() {
    let err = from_str("bar=bla").unwrap_err();
    assert_eq!(err, ParseError::FieldOutsideSection { line: 1 });
}

#[test]
fn test_conversion_failures() {
    let document = from_str("[Foo]\nbar=bla").unwrap();
    let value = &document["Foo"]["bar"];

    assert_eq!(
        value.as_bool(),
        Err(ConversionError::InvalidBoolean("bla".to_string()))
    );
    assert_eq!(
        value.as_int(),
        Err(ConversionError::InvalidInteger("bla".to_string()))
    );
    assert_eq!(
        value.as_float(),
        Err(ConversionError::InvalidFloat("bla".to_string()))
    );
}

#[test]
fn test_spaces_around_field_names_are_trimmed() {
    let document = from_str("[Foo]\n  \t  bar  \t  =hello world").unwrap();

    assert!(document["Foo"].get("bar").is_some());
    assert_eq!(document["Foo"]["bar"], "hello world");
}

#[test]
fn test_spaces_around_field_values_are_trimmed() {
    let document = from_str("[Foo]\nbar=  \t  hello world  \t  ").unwrap();

    assert_eq!(document["Foo"]["bar"], "hello world");
}

#[test]
fn test_spaces_around_section_headers_are_trimmed() {
    let document = from_str("  \t  [Foo]  \t  \nbar=bla").unwrap();

    assert!(document.get("Foo").is_some());
}

#[test]
fn test_whitespace_invariance() {
    let spaced = from_str("[ Foo ]\n  bar  =  baz  ").unwrap();
    let tight = from_str("[Foo]\nbar=baz").unwrap();

    assert_eq!(spaced, tight);
    assert_eq!(spaced["Foo"]["bar"], "baz");
}

#[test]
fn test_decode_encode_round_trip() {
    let document = ini! {
        "Server" => {
            "host" => "localhost",
            "port" => 8080,
            "secure" => true,
        },
        "Limits" => {
            "timeout" => 2.5,
        },
        "Empty" => {},
    };

    let encoded = to_string(&document);
    let decoded = from_str(&encoded).unwrap();

    assert_eq!(decoded, document);
}

#[test]
fn test_round_trip_with_custom_syntax() {
    let options = IniOptions::new()
        .with_separator(':')
        .with_comment_prefixes(["REM"]);
    let mut document = IniDocument::with_options(options);
    document["Foo"]["bar"].set("hello world");
    document["Baz"]["qux"].set(-7);

    let encoded = document.encode();
    assert_eq!(encoded, "[Foo]\nbar:hello world\n\n[Baz]\nqux:-7\n");

    let mut decoded = document.clone();
    decoded.decode(&encoded).unwrap();
    assert_eq!(decoded, document);
}

#[test]
fn test_blank_lines_are_skipped() {
    let document = from_str("\n\n[Foo]\n\n\nbar=bla\n\n").unwrap();

    assert_eq!(document.len(), 1);
    assert_eq!(document["Foo"]["bar"], "bla");
}

#[test]
fn test_value_after_first_separator_may_contain_separators() {
    let document = from_str("[Foo]\nbar=a=b=c").unwrap();

    assert_eq!(document["Foo"]["bar"], "a=b=c");
}

#[test]
fn test_text_after_section_bracket_is_ignored() {
    let document = from_str("[Foo] trailing junk\nbar=bla").unwrap();

    assert_eq!(document.len(), 1);
    assert_eq!(document["Foo"]["bar"], "bla");
}

#[test]
fn test_reopened_section_accumulates_fields() {
    let document = from_str("[Foo]\na=1\n[Bar]\nb=2\n[Foo]\nc=3").unwrap();

    assert_eq!(document.len(), 2);
    assert_eq!(document["Foo"].len(), 2);
    assert_eq!(document["Foo"]["a"], "1");
    assert_eq!(document["Foo"]["c"], "3");

    let names: Vec<_> = document.names().cloned().collect();
    assert_eq!(names, vec!["Foo", "Bar"]);
}

#[test]
fn test_serde_round_trip_through_json() {
    let document = ini! {
        "Server" => {
            "host" => "localhost",
            "port" => 8080,
        },
    };

    let json = serde_json::to_string(&document).unwrap();
    assert_eq!(json, r#"{"Server":{"host":"localhost","port":"8080"}}"#);

    let back: IniDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(back, document);
}
