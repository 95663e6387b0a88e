use crate::parser::{Parse, parse};
use indoc::indoc;

#[test]
fn use_clause_then_call() {
    let input = indoc! {r#"
    use com.example#Weather
    GetForecast({city = "Paris", days = 3})
    "#};

    let res = Parse::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r##"
    SourceFile
      UseClause
        KwUse "use"
        QualifiedIdentifier
          Identifier "com"
          Dot "."
          Identifier "example"
          Hash "#"
          Identifier "Weather"
      TopLevelStatement
        OperationCall
          OperationName
            Identifier "GetForecast"
          ParenOpen "("
          InputNode
            Struct
              BraceOpen "{"
              Field
                Identifier "city"
                Equals "="
                InputNode
                  String "\"Paris\""
              Comma ","
              Field
                Identifier "days"
                Equals "="
                InputNode
                  Number "3"
              BraceClose "}"
          ParenClose ")"
    "##);
}

#[test]
fn single_segment_namespace() {
    let res = Parse::expect_valid_cst("use a#B");

    insta::assert_snapshot!(res, @r##"
    SourceFile
      UseClause
        KwUse "use"
        QualifiedIdentifier
          Identifier "a"
          Hash "#"
          Identifier "B"
    "##);
}

#[test]
fn legacy_service_keyword_warns() {
    let input = "use service a#B";

    let parse = Parse::expect_valid(input);

    insta::assert_snapshot!(parse.dump_cst(), @r##"
    SourceFile
      UseClause
        KwUse "use"
        KwService "service"
        QualifiedIdentifier
          Identifier "a"
          Hash "#"
          Identifier "B"
    "##);
    insta::assert_snapshot!(
        parse.diagnostics().render_plain(),
        @"warning at 4..11: `use service` is deprecated (fix: remove `service`)"
    );

    let fix = parse.diagnostics().as_slice()[0]
        .fix()
        .expect("legacy keyword has a fix");
    assert_eq!(fix.apply(input), "use a#B");
}

#[test]
fn service_as_namespace_segment() {
    let parse = parse("use service.x#Y");

    assert!(parse.diagnostics().is_empty());
    insta::assert_snapshot!(parse.dump_cst(), @r##"
    SourceFile
      UseClause
        KwUse "use"
        QualifiedIdentifier
          Identifier "service"
          Dot "."
          Identifier "x"
          Hash "#"
          Identifier "Y"
    "##);
}

#[test]
fn keywords_are_plain_segments_in_paths() {
    let res = Parse::expect_valid_cst("use com.use#let");

    insta::assert_snapshot!(res, @r##"
    SourceFile
      UseClause
        KwUse "use"
        QualifiedIdentifier
          Identifier "com"
          Dot "."
          Identifier "use"
          Hash "#"
          Identifier "let"
    "##);
}
