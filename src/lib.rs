//! # jsonglow
//!
//! Syntax-highlighted JSON for terminal UIs built on [ratatui].
//!
//! jsonglow parses JSON text into a syntax tree that keeps every literal
//! exactly as it was spelled - number formatting, string escapes, member
//! order, even duplicate member names - and renders it as a sequence of
//! styled spans:
//!
//! - Braces, brackets, member names, colons, commas, and each literal kind
//!   get their own style slot, with sensible defaults
//! - Malformed input fails with a precise position and an
//!   expected-vs-found message - never a partially styled render
//! - Parsed trees are cached and only rebuilt when the parser is swapped
//!
//! ## Command-Line Tool
//!
//! This crate includes the `jglow` CLI tool for colorizing JSON in the
//! terminal:
//!
//! ```sh
//! # Install
//! cargo install jsonglow
//!
//! # Highlight JSON from stdin
//! echo '{"a":1,"b":[true,null]}' | jglow
//!
//! # Highlight a file, forcing color even when piped
//! jglow --color always data.json | less -R
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonglow::JsonText;
//!
//! let mut json = JsonText::new(r#"{"name":"Alice","scores":[95,87,92]}"#);
//! let text = json.build().unwrap();
//!
//! // The whole document renders as one styled line.
//! assert_eq!(text.lines.len(), 1);
//! ```
//!
//! `JsonText` implements [`ratatui::widgets::Widget`] (for `&mut JsonText`),
//! so it can be drawn directly inside a ratatui frame.
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be highlighted directly:
//!
//! ```rust
//! use jsonglow::JsonText;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player {
//!     name: "Alice".into(),
//!     scores: vec![95, 87, 92],
//! };
//!
//! let mut json = JsonText::from_serialize(&player).unwrap();
//! let text = json.build().unwrap();
//! ```
//!
//! ## Customizing Styles
//!
//! Each of the nine token-kind slots can be overridden independently;
//! the rest keep their defaults:
//!
//! ```rust
//! use jsonglow::JsonText;
//! use ratatui::style::{Color, Modifier, Style};
//!
//! let mut json = JsonText::new(r#"{"level":42}"#)
//!     .member_style(Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD))
//!     .number_style(Style::new().fg(Color::Magenta));
//!
//! let text = json.build().unwrap();
//! ```
//!
//! ## Lower-Level Access
//!
//! The parser and builder are usable on their own - for instance to parse
//! once and render the same tree with several style tables:
//!
//! ```rust
//! use jsonglow::{JsonBuilder, JsonTextStyles, Parser};
//!
//! let tree = Parser::new().parse(r#"[1,2.5,1e-3]"#).unwrap();
//!
//! let plain = JsonBuilder::new().build(&tree, JsonTextStyles::default());
//! assert_eq!(plain.lines[0].spans.len(), 7);
//! ```
//!
//! Custom traversals implement [`JsonSyntaxVisitor`]; the tree dispatches
//! through [`JsonSyntax::accept`] without exposing its iteration
//! internals.
//!
//! [ratatui]: https://docs.rs/ratatui

mod builder;
mod convert;
mod error;
mod model;
mod parser;
mod styles;
mod text;
mod tokenizer;

pub use crate::builder::{JsonBuilder, JsonBuilderContext};
pub use crate::convert::syntax_from_value;
pub use crate::error::{JsonGlowError, LexError, ParseError};
pub use crate::model::{
    InputPosition, JsonMember, JsonSyntax, JsonSyntaxVisitor, JsonToken, TokenType,
};
pub use crate::parser::{JsonParse, Parser, TokenCursor};
pub use crate::styles::JsonTextStyles;
pub use crate::text::JsonText;
pub use crate::tokenizer::TokenGenerator;
