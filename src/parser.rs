use log::debug;

use crate::error::{JsonGlowError, LexError, ParseError};
use crate::model::{InputPosition, JsonMember, JsonSyntax, JsonToken, TokenType};
use crate::tokenizer::TokenGenerator;

/// Pull cursor over a token stream. Always positioned on a token; once the
/// stream's terminal end-of-input token is reached, the cursor stays there.
pub struct TokenCursor<I>
where
    I: Iterator<Item = Result<JsonToken, LexError>>,
{
    generator: I,
    current: JsonToken,
}

impl<I> TokenCursor<I>
where
    I: Iterator<Item = Result<JsonToken, LexError>>,
{
    pub fn new(mut generator: I) -> Result<Self, LexError> {
        let current = match generator.next() {
            Some(token) => token?,
            // The scanner terminates every stream with an end-of-input
            // token; tolerate bare iterators that just stop.
            None => JsonToken::end(InputPosition::default()),
        };
        Ok(Self { generator, current })
    }

    pub fn current(&self) -> &JsonToken {
        &self.current
    }

    /// Takes the current token and moves to the next one.
    pub fn bump(&mut self) -> Result<JsonToken, LexError> {
        let next = match self.generator.next() {
            Some(token) => token?,
            None => JsonToken::end(self.current.position),
        };
        Ok(std::mem::replace(&mut self.current, next))
    }
}

/// The pluggable parse contract: JSON text in, one syntax tree out.
///
/// [`JsonText`](crate::JsonText) accepts any implementation; swapping the
/// implementation invalidates its cached tree.
pub trait JsonParse {
    fn parse(&self, json: &str) -> Result<JsonSyntax, JsonGlowError>;
}

/// Recursive-descent JSON parser.
///
/// Stateless and reentrant: parsing is a pure function of the input, so a
/// single instance may serve any number of threads, and parsing the same
/// text twice yields structurally identical trees. Trailing commas are
/// rejected, member names must be string literals, and a document is
/// exactly one value followed by end of input.
#[derive(Debug, Default, Clone, Copy)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a complete document, returning its single root node.
    pub fn parse(&self, input_json: &str) -> Result<JsonSyntax, JsonGlowError> {
        let mut cursor = TokenCursor::new(TokenGenerator::new(input_json))?;
        let root = self.parse_value(&mut cursor)?;

        let trailing = cursor.current();
        if trailing.token_type != TokenType::End {
            return Err(unexpected("end of document", trailing));
        }

        debug!("parsed document from {} bytes of input", input_json.len());
        Ok(root)
    }

    fn parse_value<I>(&self, cursor: &mut TokenCursor<I>) -> Result<JsonSyntax, JsonGlowError>
    where
        I: Iterator<Item = Result<JsonToken, LexError>>,
    {
        match cursor.current().token_type {
            TokenType::BeginObject => self.parse_object(cursor),
            TokenType::BeginArray => self.parse_array(cursor),
            TokenType::String => {
                let token = cursor.bump()?;
                Ok(JsonSyntax::String { text: token.text })
            }
            TokenType::Number => {
                let token = cursor.bump()?;
                Ok(JsonSyntax::Number { text: token.text })
            }
            TokenType::True => {
                let token = cursor.bump()?;
                Ok(JsonSyntax::Boolean { value: true, text: token.text })
            }
            TokenType::False => {
                let token = cursor.bump()?;
                Ok(JsonSyntax::Boolean { value: false, text: token.text })
            }
            TokenType::Null => {
                let token = cursor.bump()?;
                Ok(JsonSyntax::Null { text: token.text })
            }
            TokenType::EndObject | TokenType::EndArray | TokenType::Colon | TokenType::Comma | TokenType::End => {
                Err(unexpected("a value", cursor.current()))
            }
        }
    }

    fn parse_object<I>(&self, cursor: &mut TokenCursor<I>) -> Result<JsonSyntax, JsonGlowError>
    where
        I: Iterator<Item = Result<JsonToken, LexError>>,
    {
        cursor.bump()?;

        let mut members: Vec<JsonMember> = Vec::new();
        if cursor.current().token_type == TokenType::EndObject {
            cursor.bump()?;
            return Ok(JsonSyntax::Object { members });
        }

        loop {
            if cursor.current().token_type != TokenType::String {
                return Err(unexpected("a string member name", cursor.current()));
            }
            let name = cursor.bump()?.text;

            if cursor.current().token_type != TokenType::Colon {
                return Err(unexpected("':'", cursor.current()));
            }
            cursor.bump()?;

            let value = self.parse_value(cursor)?;
            members.push(JsonMember { name, value });

            match cursor.current().token_type {
                TokenType::Comma => {
                    cursor.bump()?;
                }
                TokenType::EndObject => {
                    cursor.bump()?;
                    return Ok(JsonSyntax::Object { members });
                }
                _ => return Err(unexpected("',' or '}'", cursor.current())),
            }
        }
    }

    fn parse_array<I>(&self, cursor: &mut TokenCursor<I>) -> Result<JsonSyntax, JsonGlowError>
    where
        I: Iterator<Item = Result<JsonToken, LexError>>,
    {
        cursor.bump()?;

        let mut elements: Vec<JsonSyntax> = Vec::new();
        if cursor.current().token_type == TokenType::EndArray {
            cursor.bump()?;
            return Ok(JsonSyntax::Array { elements });
        }

        loop {
            elements.push(self.parse_value(cursor)?);

            match cursor.current().token_type {
                TokenType::Comma => {
                    cursor.bump()?;
                }
                TokenType::EndArray => {
                    cursor.bump()?;
                    return Ok(JsonSyntax::Array { elements });
                }
                _ => return Err(unexpected("',' or ']'", cursor.current())),
            }
        }
    }
}

impl JsonParse for Parser {
    fn parse(&self, json: &str) -> Result<JsonSyntax, JsonGlowError> {
        Parser::parse(self, json)
    }
}

fn unexpected(expected: &str, token: &JsonToken) -> JsonGlowError {
    ParseError::new(expected, token.describe(), token.position).into()
}
