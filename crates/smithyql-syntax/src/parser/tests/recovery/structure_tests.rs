use indoc::indoc;
use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parse;

#[test]
fn orphan_struct_with_missing_value() {
    let res = Parse::expect_recovered("{a = }");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      Error
        InputNode
          Struct
            BraceOpen "{"
            Field
              Identifier "a"
              Equals "="
              Error
            BraceClose "}"
    ---
    error at 5..6: expected a value, found `}`
    "#);
}

#[test]
fn orphan_struct_reports_only_the_missing_value() {
    let parse = crate::parser::parse("{a = }");

    let errors: Vec<_> = parse.diagnostics().iter().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), DiagnosticKind::ExpectedValue);
    assert_eq!(errors[0].range(), TextRange::new(5.into(), 6.into()));
    assert_eq!(parse.syntax().to_string(), "{a = }");
}

#[test]
fn clean_orphan_literal_reports_missing_name() {
    let res = Parse::expect_recovered("[1, true]");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      Error
        InputNode
          List
            BracketOpen "["
            InputNode
              Number "1"
            Comma ","
            InputNode
              Boolean
                KwTrue "true"
            BracketClose "]"
    ---
    error at 0..1: input has no operation name
    "#);
}

#[test]
fn misplaced_use_clause() {
    let input = indoc! {r#"
    Op {}
    use a#B
    "#};

    let res = Parse::expect_recovered(input);

    insta::assert_snapshot!(res, @r##"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Op"
          InputNode
            Struct
              BraceOpen "{"
              BraceClose "}"
      Error
        UseClause
          KwUse "use"
          QualifiedIdentifier
            Identifier "a"
            Hash "#"
            Identifier "B"
    ---
    error at 6..9: `use` clause is only allowed at the start of the file
    "##);
}

#[test]
fn junk_between_statements() {
    let res = Parse::expect_recovered("Op {} 1 2 Other {}");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Op"
          InputNode
            Struct
              BraceOpen "{"
              BraceClose "}"
      Error
        Number "1"
        Number "2"
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Other"
          InputNode
            Struct
              BraceOpen "{"
              BraceClose "}"
    ---
    error at 6..7: expected a `let` binding or an operation call, found number
    error at 6..9: input skipped during recovery
    "#);
}

#[test]
fn stray_closer_at_top_level() {
    let res = Parse::expect_invalid("Op {} }");

    insta::assert_snapshot!(
        res,
        @"error at 6..7: expected a `let` binding or an operation call, found `}`"
    );
}

#[test]
fn recovery_reaches_end_of_input() {
    let input = "{a = } Op(1) ] let x = Next";

    let parse = crate::parser::parse(input);

    assert!(!parse.is_valid());
    assert_eq!(parse.syntax().to_string(), input);
    let calls = parse.source_file().statements().count();
    assert_eq!(calls, 2);
}
