use log::warn;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Text;
use ratatui::widgets::Widget;
use serde::Serialize;

use crate::builder::JsonBuilder;
use crate::convert::syntax_from_value;
use crate::error::JsonGlowError;
use crate::model::JsonSyntax;
use crate::parser::{JsonParse, Parser};
use crate::styles::JsonTextStyles;

/// A renderable piece of JSON text.
///
/// Parsing is lazy: the syntax tree is built on the first [`build`] (or
/// widget render) and cached for subsequent builds. Swapping the parser
/// with [`set_parser`] drops the cache; the text is re-parsed on the next
/// access, and re-parsing the same text yields a structurally identical
/// tree.
///
/// Each of the nine token-kind styles can be overridden; unset slots fall
/// back to the defaults documented on [`JsonTextStyles`].
///
/// ```rust
/// use jsonglow::JsonText;
/// use ratatui::style::{Color, Style};
///
/// let mut json = JsonText::new(r#"{"enabled":true}"#)
///     .member_style(Style::new().fg(Color::Cyan));
/// let text = json.build().unwrap();
/// ```
///
/// [`build`]: JsonText::build
/// [`set_parser`]: JsonText::set_parser
pub struct JsonText {
    json: String,
    syntax: Option<JsonSyntax>,
    parser: Box<dyn JsonParse + Send + Sync>,
    braces_style: Option<Style>,
    brackets_style: Option<Style>,
    member_style: Option<Style>,
    colon_style: Option<Style>,
    comma_style: Option<Style>,
    string_style: Option<Style>,
    number_style: Option<Style>,
    boolean_style: Option<Style>,
    null_style: Option<Style>,
}

impl JsonText {
    pub fn new(json: impl Into<String>) -> Self {
        Self {
            json: json.into(),
            syntax: None,
            parser: Box::new(Parser::new()),
            braces_style: None,
            brackets_style: None,
            member_style: None,
            colon_style: None,
            comma_style: None,
            string_style: None,
            number_style: None,
            boolean_style: None,
            null_style: None,
        }
    }

    /// Builds a `JsonText` from an already-parsed value. The syntax tree
    /// is converted directly, so no scanning or parsing happens later.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, JsonGlowError> {
        let syntax = syntax_from_value(value)?;
        let mut text = Self::new(value.to_string());
        text.syntax = Some(syntax);
        Ok(text)
    }

    /// Serializes any [`Serialize`] type and builds a `JsonText` from the
    /// result.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, JsonGlowError> {
        let value = serde_json::to_value(value)
            .map_err(|err| JsonGlowError::Serialize(err.to_string()))?;
        Self::from_value(&value)
    }

    /// The raw JSON text this renderable was created from.
    pub fn json(&self) -> &str {
        &self.json
    }

    /// Replaces the parser implementation, dropping any cached tree.
    pub fn parser(mut self, parser: impl JsonParse + Send + Sync + 'static) -> Self {
        self.set_parser(parser);
        self
    }

    /// Replaces the parser implementation, dropping any cached tree.
    pub fn set_parser(&mut self, parser: impl JsonParse + Send + Sync + 'static) {
        self.syntax = None;
        self.parser = Box::new(parser);
    }

    pub fn braces_style(mut self, style: Style) -> Self {
        self.braces_style = Some(style);
        self
    }

    pub fn brackets_style(mut self, style: Style) -> Self {
        self.brackets_style = Some(style);
        self
    }

    pub fn member_style(mut self, style: Style) -> Self {
        self.member_style = Some(style);
        self
    }

    pub fn colon_style(mut self, style: Style) -> Self {
        self.colon_style = Some(style);
        self
    }

    pub fn comma_style(mut self, style: Style) -> Self {
        self.comma_style = Some(style);
        self
    }

    pub fn string_style(mut self, style: Style) -> Self {
        self.string_style = Some(style);
        self
    }

    pub fn number_style(mut self, style: Style) -> Self {
        self.number_style = Some(style);
        self
    }

    pub fn boolean_style(mut self, style: Style) -> Self {
        self.boolean_style = Some(style);
        self
    }

    pub fn null_style(mut self, style: Style) -> Self {
        self.null_style = Some(style);
        self
    }

    /// Parses the text if no cached tree exists, then renders it with the
    /// resolved style table.
    pub fn build(&mut self) -> Result<Text<'static>, JsonGlowError> {
        let styles = self.resolved_styles();
        let syntax = match &mut self.syntax {
            Some(syntax) => syntax,
            cache => cache.insert(self.parser.parse(&self.json)?),
        };
        Ok(JsonBuilder::new().build(syntax, styles))
    }

    fn resolved_styles(&self) -> JsonTextStyles {
        let defaults = JsonTextStyles::default();
        JsonTextStyles {
            braces: self.braces_style.unwrap_or(defaults.braces),
            brackets: self.brackets_style.unwrap_or(defaults.brackets),
            member: self.member_style.unwrap_or(defaults.member),
            colon: self.colon_style.unwrap_or(defaults.colon),
            comma: self.comma_style.unwrap_or(defaults.comma),
            string: self.string_style.unwrap_or(defaults.string),
            number: self.number_style.unwrap_or(defaults.number),
            boolean: self.boolean_style.unwrap_or(defaults.boolean),
            null: self.null_style.unwrap_or(defaults.null),
        }
    }
}

impl Widget for &mut JsonText {
    /// Renders the styled document. Malformed input never produces a
    /// partially styled render: on parse failure the raw text is drawn
    /// unstyled and a warning is logged. Use [`JsonText::build`] directly
    /// to handle the error instead.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = match self.build() {
            Ok(text) => text,
            Err(err) => {
                warn!("rendering raw json unstyled: {err}");
                Text::raw(self.json.clone())
            }
        };
        text.render(area, buf);
    }
}
