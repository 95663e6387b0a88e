use crate::parser::Parse;
use indoc::indoc;

#[test]
fn bindings_then_call() {
    let input = indoc! {r#"
    let x = 1, y = "a"
    Op { a = x }
    "#};

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        LetBinding
          KwLet "let"
          Binding
            Identifier "x"
            Equals "="
            InputNode
              Number "1"
          Comma ","
          Binding
            Identifier "y"
            Equals "="
            InputNode
              String "\"a\""
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
                    Identifier "x"
                BraceClose "}"
    "#);
}

#[test]
fn struct_binding_passed_by_name() {
    let input = indoc! {r#"
    let x = { a = 1 }
    GetThing(x)
    "#};

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        LetBinding
          KwLet "let"
          Binding
            Identifier "x"
            Equals "="
            InputNode
              Struct
                BraceOpen "{"
                Field
                  Identifier "a"
                  Equals "="
                  InputNode
                    Number "1"
                BraceClose "}"
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
fn keyword_spellings_bind_names() {
    let parse = Parse::expect_valid("let true = 1 Op(true)");

    let statement = parse.source_file().statements().next().expect("one statement");
    let Some(crate::parser::Statement::Let(binding)) = statement.statement() else {
        panic!("expected a let binding");
    };
    let key = binding.bindings().next().and_then(|b| b.key()).expect("key");
    assert_eq!(key.text(), "true");
}

#[test]
fn missing_operation_call() {
    let res = Parse::expect_invalid("let x = 1");

    insta::assert_snapshot!(
        res,
        @"error at 9..9: expected an operation call after `let` bindings, found end of input"
    );
}

#[test]
fn missing_comma_between_bindings() {
    let res = Parse::expect_invalid("let x = 1 y = 2 Op");

    insta::assert_snapshot!(res, @"error at 10..11: missing `,` between elements, found identifier");
}

#[test]
fn trailing_comma_after_bindings() {
    let res = Parse::expect_recovered("let x = 1, Op");

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        LetBinding
          KwLet "let"
          Binding
            Identifier "x"
            Equals "="
            InputNode
              Number "1"
          Error
            Comma ","
          OperationCall
            OperationName
              Identifier "Op"
    ---
    error at 9..10: trailing comma is not allowed (fix: remove the comma)
    "#);
}
