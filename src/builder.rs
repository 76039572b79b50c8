use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

use crate::model::{JsonMember, JsonSyntax, JsonSyntaxVisitor};
use crate::styles::JsonTextStyles;

/// Per-render state for [`JsonBuilder`]: the style table plus the spans
/// accumulated so far, in document order.
///
/// Create one per render and discard it after taking the output; contexts
/// are never shared between renders.
pub struct JsonBuilderContext {
    styles: JsonTextStyles,
    spans: Vec<Span<'static>>,
}

impl JsonBuilderContext {
    pub fn new(styles: JsonTextStyles) -> Self {
        Self { styles, spans: Vec::new() }
    }

    fn push(&mut self, text: impl Into<String>, style: Style) {
        self.spans.push(Span::styled(text.into(), style));
    }

    pub fn spans(&self) -> &[Span<'static>] {
        &self.spans
    }

    /// The accumulated output. JSON string literals cannot contain raw
    /// newlines, so the whole document renders as a single line.
    pub fn into_text(self) -> Text<'static> {
        Text::from(Line::from(self.spans))
    }
}

/// The default visitor: walks the tree and emits one styled span per
/// syntactic element - braces, brackets, member names, colons, commas,
/// and literal values, each in its slot from the style table.
///
/// Holds no per-call state, so a single instance is safe to share across
/// concurrent renders as long as each render brings its own context.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonBuilder;

impl JsonBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Renders a tree with the given style table in one call.
    pub fn build(&self, syntax: &JsonSyntax, styles: JsonTextStyles) -> Text<'static> {
        let mut context = JsonBuilderContext::new(styles);
        syntax.accept(self, &mut context);
        context.into_text()
    }
}

impl JsonSyntaxVisitor for JsonBuilder {
    type Context = JsonBuilderContext;

    fn visit_object(&self, members: &[JsonMember], context: &mut JsonBuilderContext) {
        context.push("{", context.styles.braces);
        for (idx, member) in members.iter().enumerate() {
            if idx > 0 {
                context.push(",", context.styles.comma);
            }
            context.push(member.name.clone(), context.styles.member);
            context.push(":", context.styles.colon);
            member.value.accept(self, context);
        }
        context.push("}", context.styles.braces);
    }

    fn visit_array(&self, elements: &[JsonSyntax], context: &mut JsonBuilderContext) {
        context.push("[", context.styles.brackets);
        for (idx, element) in elements.iter().enumerate() {
            if idx > 0 {
                context.push(",", context.styles.comma);
            }
            element.accept(self, context);
        }
        context.push("]", context.styles.brackets);
    }

    fn visit_string(&self, text: &str, context: &mut JsonBuilderContext) {
        context.push(text.to_string(), context.styles.string);
    }

    fn visit_number(&self, text: &str, context: &mut JsonBuilderContext) {
        context.push(text.to_string(), context.styles.number);
    }

    fn visit_boolean(&self, _value: bool, text: &str, context: &mut JsonBuilderContext) {
        context.push(text.to_string(), context.styles.boolean);
    }

    fn visit_null(&self, text: &str, context: &mut JsonBuilderContext) {
        context.push(text.to_string(), context.styles.null);
    }
}
