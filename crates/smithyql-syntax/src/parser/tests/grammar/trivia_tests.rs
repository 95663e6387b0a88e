use crate::parser::{Parse, parse};
use indoc::indoc;

#[test]
fn leading_comment_belongs_to_root() {
    let input = indoc! {r#"
    // hi
    Op {}
    "#};

    let res = Parse::expect_valid_cst_full(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      Comment "// hi"
      Whitespace "\n"
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Op"
          Whitespace " "
          InputNode
            Struct
              BraceOpen "{"
              BraceClose "}"
      Whitespace "\n"
    "#);
}

#[test]
fn trivia_between_fields() {
    let input = indoc! {r#"
    Op {
      a = 1 // one
    }
    "#};

    let res = Parse::expect_valid_cst_full(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Op"
          Whitespace " "
          InputNode
            Struct
              BraceOpen "{"
              Whitespace "\n  "
              Field
                Identifier "a"
                Whitespace " "
                Equals "="
                Whitespace " "
                InputNode
                  Number "1"
              Whitespace " "
              Comment "// one"
              Whitespace "\n"
              BraceClose "}"
      Whitespace "\n"
    "#);
}

#[test]
fn trivia_does_not_change_structure() {
    let dense = parse("use a#B\nOp{x=[1,2]}");
    let sparse = parse(indoc! {r#"
    // header
    use   a # B

    Op   {
      // list
      x = [ 1 , 2 ]
    }
    "#});

    assert!(dense.is_valid());
    assert!(sparse.is_valid());
    assert_eq!(dense.dump_cst(), sparse.dump_cst());
}

#[test]
fn comment_at_end_of_input() {
    let input = "Op // done";

    let res = Parse::expect_valid_cst_full(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Op"
      Whitespace " "
      Comment "// done"
    "#);
}
