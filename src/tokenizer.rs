use crate::error::LexError;
use crate::model::{InputPosition, JsonToken, TokenType};

/// Cursor over the input text, tracking the current and token-start
/// positions. Token text is sliced from the original input so literal
/// spellings survive verbatim.
#[derive(Clone)]
pub struct ScannerState {
    original_text: String,
    chars: Vec<char>,
    byte_indices: Vec<usize>,
    current_position: InputPosition,
    token_position: InputPosition,
}

impl ScannerState {
    pub fn new(original_text: &str) -> Self {
        let mut chars: Vec<char> = Vec::new();
        let mut byte_indices: Vec<usize> = Vec::new();
        for (idx, ch) in original_text.char_indices() {
            byte_indices.push(idx);
            chars.push(ch);
        }
        byte_indices.push(original_text.len());

        Self {
            original_text: original_text.to_string(),
            chars,
            byte_indices,
            current_position: InputPosition::default(),
            token_position: InputPosition::default(),
        }
    }

    fn advance(&mut self) {
        self.current_position.index += 1;
        self.current_position.column += 1;
    }

    fn new_line(&mut self) {
        self.current_position.index += 1;
        self.current_position.row += 1;
        self.current_position.column = 0;
    }

    fn set_token_start(&mut self) {
        self.token_position = self.current_position;
    }

    /// Builds a token from the text between the token-start and current
    /// positions.
    fn make_token_from_buffer(&self, token_type: TokenType) -> JsonToken {
        let start = self.byte_indices[self.token_position.index];
        let end = self.byte_indices[self.current_position.index];
        JsonToken {
            token_type,
            text: self.original_text[start..end].to_string(),
            position: self.token_position,
        }
    }

    fn make_token(&self, token_type: TokenType, text: &str) -> JsonToken {
        JsonToken {
            token_type,
            text: text.to_string(),
            position: self.token_position,
        }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.current_position.index).copied()
    }

    fn error(&self, message: &str) -> LexError {
        LexError::new(message, self.current_position)
    }
}

/// Lazily scans input text into a finite sequence of tokens.
///
/// A single forward pass: structural characters, literals, and keywords
/// become tokens, whitespace between tokens is skipped, and one terminal
/// [`TokenType::End`] token is produced after the last lexical token.
/// The first scan failure ends the sequence.
pub struct TokenGenerator {
    state: ScannerState,
    end_emitted: bool,
    failed: bool,
}

impl TokenGenerator {
    pub fn new(input_json: &str) -> Self {
        Self {
            state: ScannerState::new(input_json),
            end_emitted: false,
            failed: false,
        }
    }

    fn scan_next(&mut self) -> Option<Result<JsonToken, LexError>> {
        loop {
            let Some(ch) = self.state.current() else {
                if self.end_emitted {
                    return None;
                }
                self.end_emitted = true;
                self.state.set_token_start();
                return Some(Ok(JsonToken::end(self.state.current_position)));
            };

            match ch {
                ' ' | '\t' | '\r' => self.state.advance(),
                '\n' => self.state.new_line(),
                '{' => return Some(process_single_char(&mut self.state, "{", TokenType::BeginObject)),
                '}' => return Some(process_single_char(&mut self.state, "}", TokenType::EndObject)),
                '[' => return Some(process_single_char(&mut self.state, "[", TokenType::BeginArray)),
                ']' => return Some(process_single_char(&mut self.state, "]", TokenType::EndArray)),
                ':' => return Some(process_single_char(&mut self.state, ":", TokenType::Colon)),
                ',' => return Some(process_single_char(&mut self.state, ",", TokenType::Comma)),
                't' => return Some(process_keyword(&mut self.state, "true", TokenType::True)),
                'f' => return Some(process_keyword(&mut self.state, "false", TokenType::False)),
                'n' => return Some(process_keyword(&mut self.state, "null", TokenType::Null)),
                '"' => return Some(process_string(&mut self.state)),
                '-' => return Some(process_number(&mut self.state)),
                _ => {
                    if !is_digit(ch) {
                        return Some(Err(self.state.error("Unexpected character")));
                    }
                    return Some(process_number(&mut self.state));
                }
            }
        }
    }
}

impl Iterator for TokenGenerator {
    type Item = Result<JsonToken, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.scan_next();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

fn process_single_char(
    state: &mut ScannerState,
    symbol: &str,
    token_type: TokenType,
) -> Result<JsonToken, LexError> {
    state.set_token_start();
    let token = state.make_token(token_type, symbol);
    state.advance();
    Ok(token)
}

fn process_keyword(
    state: &mut ScannerState,
    keyword: &'static str,
    token_type: TokenType,
) -> Result<JsonToken, LexError> {
    state.set_token_start();
    let mut chars = keyword.chars();
    chars.next();
    for expected in chars {
        state.advance();
        match state.current() {
            None => return Err(state.error("Unexpected end of input while processing keyword")),
            Some(current) if current != expected => return Err(state.error("Unexpected keyword")),
            Some(_) => {}
        }
    }

    let token = state.make_token(token_type, keyword);
    state.advance();
    Ok(token)
}

fn process_string(state: &mut ScannerState) -> Result<JsonToken, LexError> {
    state.set_token_start();
    state.advance();

    let mut last_char_began_escape = false;
    let mut expected_hex_count = 0usize;
    loop {
        let Some(ch) = state.current() else {
            return Err(state.error("Unexpected end of input while processing string"));
        };

        if expected_hex_count > 0 {
            if !is_hex(ch) {
                return Err(state.error("Bad unicode escape in string"));
            }
            expected_hex_count -= 1;
            state.advance();
            continue;
        }

        if last_char_began_escape {
            if !is_legal_after_backslash(ch) {
                return Err(state.error("Bad escaped character in string"));
            }
            if ch == 'u' {
                expected_hex_count = 4;
            }
            last_char_began_escape = false;
            state.advance();
            continue;
        }

        if is_control(ch) {
            return Err(state.error("Control characters are not allowed in strings"));
        }

        state.advance();
        if ch == '"' {
            return Ok(state.make_token_from_buffer(TokenType::String));
        }
        if ch == '\\' {
            last_char_began_escape = true;
        }
    }
}

fn process_number(state: &mut ScannerState) -> Result<JsonToken, LexError> {
    state.set_token_start();
    let mut phase = NumberPhase::Beginning;
    loop {
        let Some(ch) = state.current() else {
            // End of input closes the token only if the spelling is complete.
            return match phase {
                NumberPhase::PastFirstDigitOfWhole
                | NumberPhase::PastWhole
                | NumberPhase::PastFirstDigitOfFractional
                | NumberPhase::PastFirstDigitOfExponent => {
                    Ok(state.make_token_from_buffer(TokenType::Number))
                }
                _ => Err(state.error("Unexpected end of input while processing number")),
            };
        };

        let mut handling = CharHandling::ValidAndConsumed;
        match phase {
            NumberPhase::Beginning => {
                if ch == '-' {
                    phase = NumberPhase::PastLeadingSign;
                } else if ch == '0' {
                    phase = NumberPhase::PastWhole;
                } else if is_digit(ch) {
                    phase = NumberPhase::PastFirstDigitOfWhole;
                } else {
                    handling = CharHandling::InvalidatesToken;
                }
            }
            NumberPhase::PastLeadingSign => {
                if ch == '0' {
                    phase = NumberPhase::PastWhole;
                } else if is_digit(ch) {
                    phase = NumberPhase::PastFirstDigitOfWhole;
                } else {
                    handling = CharHandling::InvalidatesToken;
                }
            }
            NumberPhase::PastFirstDigitOfWhole => {
                if ch == '.' {
                    phase = NumberPhase::PastDecimalPoint;
                } else if ch == 'e' || ch == 'E' {
                    phase = NumberPhase::PastE;
                } else if !is_digit(ch) {
                    handling = CharHandling::EndsToken;
                }
            }
            NumberPhase::PastWhole => {
                if ch == '.' {
                    phase = NumberPhase::PastDecimalPoint;
                } else if ch == 'e' || ch == 'E' {
                    phase = NumberPhase::PastE;
                } else {
                    // A digit here would be a leading zero.
                    handling = CharHandling::EndsToken;
                }
            }
            NumberPhase::PastDecimalPoint => {
                if is_digit(ch) {
                    phase = NumberPhase::PastFirstDigitOfFractional;
                } else {
                    handling = CharHandling::InvalidatesToken;
                }
            }
            NumberPhase::PastFirstDigitOfFractional => {
                if ch == 'e' || ch == 'E' {
                    phase = NumberPhase::PastE;
                } else if !is_digit(ch) {
                    handling = CharHandling::EndsToken;
                }
            }
            NumberPhase::PastE => {
                if ch == '+' || ch == '-' {
                    phase = NumberPhase::PastExpSign;
                } else if is_digit(ch) {
                    phase = NumberPhase::PastFirstDigitOfExponent;
                } else {
                    handling = CharHandling::InvalidatesToken;
                }
            }
            NumberPhase::PastExpSign => {
                if is_digit(ch) {
                    phase = NumberPhase::PastFirstDigitOfExponent;
                } else {
                    handling = CharHandling::InvalidatesToken;
                }
            }
            NumberPhase::PastFirstDigitOfExponent => {
                if !is_digit(ch) {
                    handling = CharHandling::EndsToken;
                }
            }
        }

        match handling {
            CharHandling::InvalidatesToken => {
                return Err(state.error("Bad character while processing number"));
            }
            CharHandling::EndsToken => {
                // The token must end at a delimiter; `01` and `1x` are lex
                // errors, not two tokens.
                if !is_delimiter(ch) {
                    return Err(state.error("Bad character while processing number"));
                }
                return Ok(state.make_token_from_buffer(TokenType::Number));
            }
            CharHandling::ValidAndConsumed => state.advance(),
        }
    }
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_hex(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

fn is_legal_after_backslash(ch: char) -> bool {
    matches!(ch, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u')
}

fn is_control(ch: char) -> bool {
    let code = ch as u32;
    (code <= 0x1F) || (code == 0x7F) || (code >= 0x80 && code <= 0x9F)
}

fn is_delimiter(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n' | ',' | ':' | ']' | '}' | '[' | '{')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberPhase {
    Beginning,
    PastLeadingSign,
    PastFirstDigitOfWhole,
    PastWhole,
    PastDecimalPoint,
    PastFirstDigitOfFractional,
    PastE,
    PastExpSign,
    PastFirstDigitOfExponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharHandling {
    InvalidatesToken,
    ValidAndConsumed,
    EndsToken,
}
