use jsonglow::{JsonMember, JsonSyntax, JsonSyntaxVisitor, Parser};

fn parse(input: &str) -> JsonSyntax {
    Parser::new().parse(input).expect("input should parse")
}

#[test]
fn test_parse_literal_values() {
    assert_eq!(parse("true"), JsonSyntax::Boolean { value: true, text: "true".into() });
    assert_eq!(parse("false"), JsonSyntax::Boolean { value: false, text: "false".into() });
    assert_eq!(parse("null"), JsonSyntax::Null { text: "null".into() });
    assert_eq!(parse("42"), JsonSyntax::Number { text: "42".into() });
    assert_eq!(parse(r#""hi""#), JsonSyntax::String { text: r#""hi""#.into() });
}

#[test]
fn test_number_spelling_is_preserved_verbatim() {
    for spelling in ["0", "-0", "10", "1.5", "-2.25", "1e3", "1E3", "1e+3", "1E-3", "123.456e-7"] {
        assert_eq!(
            parse(spelling),
            JsonSyntax::Number { text: spelling.into() },
            "spelling {spelling:?} should survive parsing unchanged"
        );
    }
}

#[test]
fn test_string_raw_text_keeps_quotes_and_escapes() {
    let input = r#""line\none \"two\" A""#;
    assert_eq!(parse(input), JsonSyntax::String { text: input.into() });
}

#[test]
fn test_parse_empty_object_and_array() {
    assert_eq!(parse("{}"), JsonSyntax::Object { members: vec![] });
    assert_eq!(parse("[]"), JsonSyntax::Array { elements: vec![] });
    assert_eq!(parse("{ \t\r\n }"), JsonSyntax::Object { members: vec![] });
}

#[test]
fn test_parse_object_keeps_member_order_and_duplicates() {
    let tree = parse(r#"{"a":1,"a":2,"b":3}"#);
    let JsonSyntax::Object { members } = tree else {
        panic!("expected an object");
    };
    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec![r#""a""#, r#""a""#, r#""b""#]);
    assert_eq!(members[0].value, JsonSyntax::Number { text: "1".into() });
    assert_eq!(members[1].value, JsonSyntax::Number { text: "2".into() });
}

#[test]
fn test_parse_nested_document() {
    let tree = parse(r#"{"a":1,"b":[true,null]}"#);
    let expected = JsonSyntax::Object {
        members: vec![
            JsonMember {
                name: r#""a""#.into(),
                value: JsonSyntax::Number { text: "1".into() },
            },
            JsonMember {
                name: r#""b""#.into(),
                value: JsonSyntax::Array {
                    elements: vec![
                        JsonSyntax::Boolean { value: true, text: "true".into() },
                        JsonSyntax::Null { text: "null".into() },
                    ],
                },
            },
        ],
    };
    assert_eq!(tree, expected);
}

#[test]
fn test_whitespace_is_insignificant() {
    let compact = parse(r#"{"a":[1,2],"b":{"c":null}}"#);
    let spaced = parse("{\n  \"a\" : [ 1 , 2 ] ,\r\n  \"b\" : { \"c\" : null }\n}");
    assert_eq!(compact, spaced);
}

#[test]
fn test_parsing_is_idempotent() {
    let input = r#"{"x":[1,-2.5,"s",false,{"y":null}]}"#;
    assert_eq!(parse(input), parse(input));
}

#[test]
fn test_parser_is_reusable_across_documents() {
    let parser = Parser::new();
    assert_eq!(parser.parse("[1]").unwrap(), parse("[1]"));
    assert_eq!(parser.parse("{}").unwrap(), parse("{}"));
}

// A minimal plain-text flattener, exercising the visitor contract from
// outside the crate.
struct Flattener;

impl JsonSyntaxVisitor for Flattener {
    type Context = String;

    fn visit_object(&self, members: &[JsonMember], out: &mut String) {
        out.push('{');
        for (idx, member) in members.iter().enumerate() {
            if idx > 0 {
                out.push(',');
            }
            out.push_str(&member.name);
            out.push(':');
            member.value.accept(self, out);
        }
        out.push('}');
    }

    fn visit_array(&self, elements: &[JsonSyntax], out: &mut String) {
        out.push('[');
        for (idx, element) in elements.iter().enumerate() {
            if idx > 0 {
                out.push(',');
            }
            element.accept(self, out);
        }
        out.push(']');
    }

    fn visit_string(&self, text: &str, out: &mut String) {
        out.push_str(text);
    }

    fn visit_number(&self, text: &str, out: &mut String) {
        out.push_str(text);
    }

    fn visit_boolean(&self, _value: bool, text: &str, out: &mut String) {
        out.push_str(text);
    }

    fn visit_null(&self, text: &str, out: &mut String) {
        out.push_str(text);
    }
}

#[test]
fn test_flattening_reconstructs_the_source() {
    let input = r#"{"a":1e-3,"b":[true,null,"x\ny"],"a":{}}"#;
    let tree = parse(input);
    let mut out = String::new();
    tree.accept(&Flattener, &mut out);
    assert_eq!(out, input);
}

#[test]
fn test_flattening_drops_only_whitespace() {
    let tree = parse(" [ 1 , {\"k\" : 2} ] ");
    let mut out = String::new();
    tree.accept(&Flattener, &mut out);
    assert_eq!(out, r#"[1,{"k":2}]"#);
}
