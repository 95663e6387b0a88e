use crate::parser::Parse;
use indoc::indoc;

#[test]
fn bare_operation_name() {
    let res = Parse::expect_valid_cst("Op");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Op"
    "#);
}

#[test]
fn struct_input_without_parens() {
    let res = Parse::expect_valid_cst("Op { a = 1 }");

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
              BraceClose "}"
    "#);
}

#[test]
fn empty_parens() {
    let res = Parse::expect_valid_cst("Op()");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Op"
          ParenOpen "("
          ParenClose ")"
    "#);
}

#[test]
fn identifier_input() {
    let res = Parse::expect_valid_cst("GetThing(x)");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "GetThing"
          ParenOpen "("
          InputNode
            Identifier "x"
          ParenClose ")"
    "#);
}

#[test]
fn qualified_operation_name() {
    let res = Parse::expect_valid_cst("com.example#Op {}");

    insta::assert_snapshot!(res, @r##"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            QualifiedIdentifier
              Identifier "com"
              Dot "."
              Identifier "example"
              Hash "#"
              Identifier "Op"
          InputNode
            Struct
              BraceOpen "{"
              BraceClose "}"
    "##);
}

#[test]
fn several_statements() {
    let input = indoc! {r#"
    First {}
    Second()
    Third
    "#};

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "First"
          InputNode
            Struct
              BraceOpen "{"
              BraceClose "}"
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Second"
          ParenOpen "("
          ParenClose ")"
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Third"
    "#);
}

#[test]
fn value_keywords_name_operations() {
    let res = Parse::expect_valid_cst("true()");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "true"
          ParenOpen "("
          ParenClose ")"
    "#);
}

#[test]
fn empty_source() {
    let parse = Parse::expect_valid("");

    insta::assert_snapshot!(parse.dump_cst(), @"SourceFile");
    assert_eq!(parse.source_file().statements().count(), 0);
}
