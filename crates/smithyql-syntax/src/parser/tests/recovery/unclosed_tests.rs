use crate::parser::{Parse, parse};

#[test]
fn missing_brace() {
    let res = Parse::expect_recovered("Op {a = 1");

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
    ---
    error at 3..9: missing closing `}`; reached end of input (fix: insert `}`) (related: `{` started here at 3..4)
    "#);
}

#[test]
fn missing_paren() {
    let res = Parse::expect_invalid("Op(1");

    insta::assert_snapshot!(
        res,
        @"error at 2..4: missing closing `)`; reached end of input (fix: insert `)`) (related: `(` started here at 2..3)"
    );
}

#[test]
fn nested_unclosed_reports_innermost() {
    let res = Parse::expect_invalid("Op {a = [1, 2");

    insta::assert_snapshot!(
        res,
        @"error at 8..13: missing closing `]`; reached end of input (fix: insert `]`) (related: `[` started here at 8..9)"
    );
}

#[test]
fn enclosing_closer_ends_inner_literal() {
    let res = Parse::expect_recovered("Op {a = [1, 2}");

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
                  List
                    BracketOpen "["
                    InputNode
                      Number "1"
                    Comma ","
                    InputNode
                      Number "2"
              BraceClose "}"
    ---
    error at 8..14: missing closing `]`; found `}` (fix: insert `]`) (related: `[` started here at 8..9)
    "#);
}

#[test]
fn unclosed_fix_inserts_closer() {
    let input = "Op {a = [1, 2}";
    let result = parse(input);

    let fix = result.diagnostics().as_slice()[0]
        .fix()
        .expect("unclosed delimiter has a fix");
    let fixed = fix.apply(input);

    assert_eq!(fixed, "Op {a = [1, 2]}");
    assert!(parse(&fixed).is_valid());
}

#[test]
fn unclosed_struct_inside_parens() {
    let res = Parse::expect_invalid("Op({ a = 1 )");

    insta::assert_snapshot!(
        res,
        @"error at 3..12: missing closing `}`; found `)` (fix: insert `}`) (related: `{` started here at 3..4)"
    );
}
