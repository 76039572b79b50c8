use std::fmt::{self, Display};

/// A position within the JSON input text.
///
/// Used to report the location of errors or elements within the source.
/// All values are zero-indexed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputPosition {
    /// Character offset from the start of the input (zero-indexed).
    pub index: usize,
    /// Line number (zero-indexed, so first line is 0).
    pub row: usize,
    /// Column number within the line (zero-indexed).
    pub column: usize,
}

impl Display for InputPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "idx={}, row={}, col={}", self.index, self.row, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
    Colon,
    Comma,
    String,
    Number,
    True,
    False,
    Null,
    /// Terminal token produced once after the last lexical token.
    End,
}

/// A lexical unit produced by the scanner and consumed, in order, by the
/// parser. `text` is sliced from the original input verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonToken {
    pub token_type: TokenType,
    pub text: String,
    pub position: InputPosition,
}

impl JsonToken {
    pub fn end(position: InputPosition) -> Self {
        Self {
            token_type: TokenType::End,
            text: String::new(),
            position,
        }
    }

    /// The token text as shown in error messages.
    pub fn describe(&self) -> String {
        match self.token_type {
            TokenType::End => "end of input".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

/// A node of the parsed document tree.
///
/// Every variant keeps the literal spelling from the source, so rendering
/// never alters content - only its styling. Members and elements are
/// stored in source order; duplicate member names are preserved, not
/// deduplicated, and their resolution is left to consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonSyntax {
    Object { members: Vec<JsonMember> },
    Array { elements: Vec<JsonSyntax> },
    /// A string literal, raw text including quotes and escapes.
    String { text: String },
    /// A number literal, spelled exactly as written in the source.
    Number { text: String },
    Boolean { value: bool, text: String },
    Null { text: String },
}

/// A single `"name": value` pair inside an object. `name` is the raw
/// string literal, quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonMember {
    pub name: String,
    pub value: JsonSyntax,
}

/// One handler per node variant, invoked by [`JsonSyntax::accept`].
///
/// Implementors traverse the tree without the tree exposing its internal
/// iteration; the associated `Context` carries whatever per-walk state the
/// visitor needs, so a single stateless visitor instance can serve any
/// number of concurrent walks.
pub trait JsonSyntaxVisitor {
    type Context;

    fn visit_object(&self, members: &[JsonMember], context: &mut Self::Context);
    fn visit_array(&self, elements: &[JsonSyntax], context: &mut Self::Context);
    fn visit_string(&self, text: &str, context: &mut Self::Context);
    fn visit_number(&self, text: &str, context: &mut Self::Context);
    fn visit_boolean(&self, value: bool, text: &str, context: &mut Self::Context);
    fn visit_null(&self, text: &str, context: &mut Self::Context);
}

impl JsonSyntax {
    /// Dispatches to the visitor handler matching this node's variant.
    pub fn accept<V: JsonSyntaxVisitor>(&self, visitor: &V, context: &mut V::Context) {
        match self {
            JsonSyntax::Object { members } => visitor.visit_object(members, context),
            JsonSyntax::Array { elements } => visitor.visit_array(elements, context),
            JsonSyntax::String { text } => visitor.visit_string(text, context),
            JsonSyntax::Number { text } => visitor.visit_number(text, context),
            JsonSyntax::Boolean { value, text } => visitor.visit_boolean(*value, text, context),
            JsonSyntax::Null { text } => visitor.visit_null(text, context),
        }
    }
}
