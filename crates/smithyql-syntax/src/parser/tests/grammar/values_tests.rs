use crate::parser::Parse;

#[test]
fn scalar_values() {
    let input = r#"Op { n = -2.5e3, s = "s", t = true, f = false, z = null, r = ref }"#;

    let res = Parse::expect_valid_cst(input);

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
                Identifier "n"
                Equals "="
                InputNode
                  Number "-2.5e3"
              Comma ","
              Field
                Identifier "s"
                Equals "="
                InputNode
                  String "\"s\""
              Comma ","
              Field
                Identifier "t"
                Equals "="
                InputNode
                  Boolean
                    KwTrue "true"
              Comma ","
              Field
                Identifier "f"
                Equals "="
                InputNode
                  Boolean
                    KwFalse "false"
              Comma ","
              Field
                Identifier "z"
                Equals "="
                InputNode
                  KwNull "null"
              Comma ","
              Field
                Identifier "r"
                Equals "="
                InputNode
                  Identifier "ref"
              BraceClose "}"
    "#);
}

#[test]
fn empty_struct_and_list() {
    let res = Parse::expect_valid_cst("Op { a = {}, b = [] }");

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
                  Struct
                    BraceOpen "{"
                    BraceClose "}"
              Comma ","
              Field
                Identifier "b"
                Equals "="
                InputNode
                  List
                    BracketOpen "["
                    BracketClose "]"
              BraceClose "}"
    "#);
}

#[test]
fn nested_literals() {
    let res = Parse::expect_valid_cst("Op([{ b = [1] }, []])");

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
                Struct
                  BraceOpen "{"
                  Field
                    Identifier "b"
                    Equals "="
                    InputNode
                      List
                        BracketOpen "["
                        InputNode
                          Number "1"
                        BracketClose "]"
                  BraceClose "}"
              Comma ","
              InputNode
                List
                  BracketOpen "["
                  BracketClose "]"
              BracketClose "]"
          ParenClose ")"
    "#);
}

#[test]
fn keyword_spellings_as_keys() {
    let res = Parse::expect_valid_cst("Op { true = 1, use = null }");

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
                Identifier "true"
                Equals "="
                InputNode
                  Number "1"
              Comma ","
              Field
                Identifier "use"
                Equals "="
                InputNode
                  KwNull "null"
              BraceClose "}"
    "#);
}

#[test]
fn scalar_input_in_parens() {
    let res = Parse::expect_valid_cst(r#"Op("text")"#);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "Op"
          ParenOpen "("
          InputNode
            String "\"text\""
          ParenClose ")"
    "#);
}
