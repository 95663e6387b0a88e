use crate::parser::{Parse, Parser};

#[test]
fn junk_inside_struct_skips_to_closer() {
    let res = Parse::expect_recovered("Op {a = 1 = 2}");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Op"
          InputNode
            Struct
              BraceOpen "{"
              Field
                Identifier "a"
                Equals "="
                InputNode
                  Number "1"
              Error
                Equals "="
                Number "2"
              BraceClose "}"
    ---
    error at 10..11: unexpected `=`
    error at 10..13: input skipped during recovery
    "#);
}

#[test]
fn stray_closer_inside_list() {
    let res = Parse::expect_recovered("Op([1 })");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Op"
          ParenOpen "("
          InputNode
            List
              BracketOpen "["
              InputNode
                Number "1"
              Error
                BraceClose "}"
          ParenClose ")"
    ---
    error at 3..8: missing closing `]`; found `)` (fix: insert `]`) (related: `[` started here at 3..4)
    error at 6..7: unexpected `}`
    "#);
}

#[test]
fn second_value_in_parens() {
    let res = Parse::expect_invalid("Op(1 2)");

    insta::assert_snapshot!(res, @"error at 5..6: unexpected number");
}

#[test]
fn leading_comma() {
    let res = Parse::expect_invalid("Op { , a = 1 }");

    insta::assert_snapshot!(res, @"error at 5..6: unexpected `,`");
}

#[test]
fn trailing_comma_in_struct() {
    let res = Parse::expect_recovered("Op {a = 1,}");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Op"
          InputNode
            Struct
              BraceOpen "{"
              Field
                Identifier "a"
                Equals "="
                InputNode
                  Number "1"
              Error
                Comma ","
              BraceClose "}"
    ---
    error at 9..10: trailing comma is not allowed (fix: remove the comma)
    "#);
}

#[test]
fn trailing_comma_in_list() {
    let res = Parse::expect_invalid("Op([1, 2,])");

    insta::assert_snapshot!(res, @"error at 8..9: trailing comma is not allowed (fix: remove the comma)");
}

#[test]
fn trailing_comma_in_parens() {
    let res = Parse::expect_recovered("Op(1,)");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Op"
          ParenOpen "("
          InputNode
            Number "1"
          Error
            Comma ","
          ParenClose ")"
    ---
    error at 4..5: trailing comma is not allowed (fix: remove the comma)
    "#);
}

#[test]
fn lone_comma_in_parens_is_unexpected() {
    let res = Parse::expect_invalid("Op(,)");

    insta::assert_snapshot!(res, @"error at 3..4: unexpected `,`");
}

#[test]
fn resync_window_bounds_skipping() {
    let input = "Op { a = 1 = 2 3 4 5 }";

    let wide = Parser::new(input).parse();
    let narrow = Parser::new(input).with_resync_window(2).parse();

    insta::assert_snapshot!(wide.diagnostics().render_plain(), @r"
    error at 11..12: unexpected `=`
    error at 11..20: input skipped during recovery
    ");
    insta::assert_snapshot!(narrow.diagnostics().render_plain(), @r"
    error at 11..12: unexpected `=`
    error at 13..14: unexpected number
    error at 15..16: unexpected number
    error at 17..18: unexpected number
    error at 19..20: unexpected number
    ");
    assert_eq!(wide.syntax().to_string(), input);
    assert_eq!(narrow.syntax().to_string(), input);
}

#[test]
fn wide_resync_window_skips_long_junk_in_one_node() {
    let input = format!("Op {{ a = 1 {}}}", "2 ".repeat(300));

    let parse = Parser::new(&input).with_resync_window(400).parse();

    assert_eq!(parse.syntax().to_string(), input);
    insta::assert_snapshot!(parse.diagnostics().render_plain(), @r"
    error at 11..12: unexpected number
    error at 11..610: input skipped during recovery
    ");
}

#[test]
fn resync_window_wider_than_the_junk_it_cannot_see_past() {
    let input = format!("Op {{ a = 1 {}}}", "2 ".repeat(400));

    let parse = Parser::new(&input).with_resync_window(400).parse();

    assert_eq!(parse.syntax().to_string(), input);
    assert_eq!(parse.diagnostics().error_count(), 3);
    assert!(
        parse
            .diagnostics()
            .iter()
            .all(|d| d.kind() != crate::diagnostics::DiagnosticKind::UnclosedStruct)
    );
}
