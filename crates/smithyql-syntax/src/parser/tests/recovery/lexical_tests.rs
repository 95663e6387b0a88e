use crate::diagnostics::Category;
use crate::parser::{Parse, parse};

#[test]
fn unexpected_character_in_value_position() {
    let res = Parse::expect_recovered("Op {a = $}");

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
                Error
                  Garbage "$"
              BraceClose "}"
    ---
    error at 8..9: unexpected character `$`
    "#);
}

#[test]
fn unterminated_string_then_unclosed_struct() {
    let res = Parse::expect_invalid(r#"Op {a = "abc"#);

    insta::assert_snapshot!(res, @r"
    error at 3..12: missing closing `}`; reached end of input (fix: insert `}`) (related: `{` started here at 3..4)
    error at 8..12: unterminated string literal
    ");
}

#[test]
fn garbage_between_statements() {
    let res = Parse::expect_invalid("Op {} @@ Next");

    insta::assert_snapshot!(res, @"error at 6..8: unexpected character `@@`");
}

#[test]
fn lexical_diagnostics_are_categorized() {
    let parse = parse("Op {a = $}");

    let categories: Vec<_> = parse.diagnostics().iter().map(|d| d.category()).collect();
    assert_eq!(categories, [Category::Lexical]);
}
