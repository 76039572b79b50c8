use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use jsonglow::{
    JsonBuilder, JsonBuilderContext, JsonGlowError, JsonParse, JsonSyntax, JsonText,
    JsonTextStyles, Parser,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Text;

fn span_contents(text: &Text<'_>) -> Vec<String> {
    text.lines[0]
        .spans
        .iter()
        .map(|span| span.content.to_string())
        .collect()
}

fn build(input: &str) -> Text<'static> {
    JsonText::new(input).build().expect("input should build")
}

#[test]
fn test_span_sequence_matches_document_order() {
    let text = build(r#"{"a":1,"b":[true,null]}"#);
    assert_eq!(
        span_contents(&text),
        vec!["{", "\"a\"", ":", "1", ",", "\"b\"", ":", "[", "true", ",", "null", "]", "}"]
    );
}

#[test]
fn test_default_styles_per_token_kind() {
    let text = build(r#"{"a":1,"b":[true,null]}"#);
    let spans = &text.lines[0].spans;

    let muted = Style::new().fg(Color::DarkGray);
    assert_eq!(spans[0].style, muted, "opening brace");
    assert_eq!(spans[1].style, Style::new().fg(Color::Blue), "member name");
    assert_eq!(spans[2].style, Style::new().fg(Color::Yellow), "colon");
    assert_eq!(spans[3].style, Style::new().fg(Color::Green), "number");
    assert_eq!(spans[4].style, muted, "comma");
    assert_eq!(spans[7].style, muted, "opening bracket");
    assert_eq!(spans[8].style, Style::new().fg(Color::Green), "boolean");
    assert_eq!(spans[10].style, muted, "null");
    assert_eq!(spans[11].style, muted, "closing bracket");
    assert_eq!(spans[12].style, muted, "closing brace");
}

#[test]
fn test_string_value_vs_member_name_styles() {
    let text = build(r#"{"name":"Alice"}"#);
    let spans = &text.lines[0].spans;
    assert_eq!(spans[1].content, "\"name\"");
    assert_eq!(spans[1].style, Style::new().fg(Color::Blue));
    assert_eq!(spans[3].content, "\"Alice\"");
    assert_eq!(spans[3].style, Style::new().fg(Color::Red));
}

#[test]
fn test_empty_containers_render_delimiters_only() {
    assert_eq!(span_contents(&build("{}")), vec!["{", "}"]);
    assert_eq!(span_contents(&build("[]")), vec!["[", "]"]);
}

#[test]
fn test_span_concatenation_reproduces_minified_source() {
    let input = r#"{"a":1e-3,"b":[true,null,"x"],"c":{"d":[]}}"#;
    let text = build(input);
    assert_eq!(span_contents(&text).concat(), input);
}

#[test]
fn test_brackets_stay_balanced_in_nested_documents() {
    let text = build(r#"[[{"a":[{}]},[[]]],{"b":{"c":[1]}}]"#);
    let mut depth: i32 = 0;
    for content in span_contents(&text) {
        match content.as_str() {
            "{" | "[" => depth += 1,
            "}" | "]" => {
                depth -= 1;
                assert!(depth >= 0, "closing delimiter without an opening one");
            }
            _ => {}
        }
    }
    assert_eq!(depth, 0, "delimiters should balance out");
}

#[test]
fn test_style_override_leaves_other_slots_at_defaults() {
    let custom = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);
    let text = JsonText::new(r#"{"a":1}"#)
        .number_style(custom)
        .build()
        .unwrap();
    let spans = &text.lines[0].spans;
    assert_eq!(spans[3].style, custom);
    assert_eq!(spans[0].style, Style::new().fg(Color::DarkGray));
    assert_eq!(spans[1].style, Style::new().fg(Color::Blue));
}

#[test]
fn test_build_is_deterministic() {
    let input = r#"{"a":[1,2,{"b":null}]}"#;
    assert_eq!(build(input), build(input));

    let mut json = JsonText::new(input);
    let first = json.build().unwrap();
    let second = json.build().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_builder_entry_point_without_wrapper() {
    let tree = Parser::new().parse("[1,2]").unwrap();
    let text = JsonBuilder::new().build(&tree, JsonTextStyles::default());
    assert_eq!(span_contents(&text), vec!["[", "1", ",", "2", "]"]);
}

#[test]
fn test_one_builder_instance_serves_many_contexts() {
    let builder = JsonBuilder::new();
    let first_tree = Parser::new().parse("[1]").unwrap();
    let second_tree = Parser::new().parse("{}").unwrap();

    let mut first_ctx = JsonBuilderContext::new(JsonTextStyles::default());
    let mut second_ctx = JsonBuilderContext::new(JsonTextStyles::default());
    first_tree.accept(&builder, &mut first_ctx);
    second_tree.accept(&builder, &mut second_ctx);

    assert_eq!(first_ctx.spans().len(), 3);
    assert_eq!(second_ctx.spans().len(), 2);
}

#[test]
fn test_same_tree_renders_under_different_style_tables() {
    let tree = Parser::new().parse("[null]").unwrap();
    let builder = JsonBuilder::new();

    let plain = builder.build(&tree, JsonTextStyles::default());
    let loud = builder.build(
        &tree,
        JsonTextStyles {
            null: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            ..Default::default()
        },
    );

    assert_eq!(span_contents(&plain), span_contents(&loud));
    assert_ne!(plain.lines[0].spans[1].style, loud.lines[0].spans[1].style);
}

#[test]
fn test_build_fails_on_malformed_input_without_partial_output() {
    let mut json = JsonText::new(r#"{"a":}"#);
    let err = json.build().unwrap_err();
    assert!(matches!(err, JsonGlowError::Parse(_)));
}

struct CountingParser {
    calls: Arc<AtomicUsize>,
}

impl JsonParse for CountingParser {
    fn parse(&self, json: &str) -> Result<JsonSyntax, JsonGlowError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Parser::new().parse(json)
    }
}

#[test]
fn test_tree_is_cached_across_builds() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut json = JsonText::new("[1,2]").parser(CountingParser { calls: Arc::clone(&calls) });

    json.build().unwrap();
    json.build().unwrap();
    json.build().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1, "subsequent builds should reuse the cached tree");
}

#[test]
fn test_swapping_the_parser_invalidates_the_cache() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut json = JsonText::new("[1,2]").parser(CountingParser { calls: Arc::clone(&calls) });
    let first = json.build().unwrap();

    json.set_parser(CountingParser { calls: Arc::clone(&calls) });
    let second = json.build().unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 2, "the swapped-in parser should re-parse");
    assert_eq!(first, second, "re-parsing the same text should yield the same render");
}
