use std::collections::HashMap;

use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};
use crate::value::{PropertyValue, Vec2i};

// ── WmlHandler ────────────────────────────────────────────────────────────

/// Receiver for document-ordered parse events.
///
/// The reader never retains a tree; it walks the source once and calls the
/// handler as it goes. `start_element` / `end_element` calls are strictly
/// balanced for any input the reader accepts; on a parse error the handler
/// keeps whatever events it has already seen.
pub trait WmlHandler {
    fn start_element(&mut self, name: &str);
    fn on_property(&mut self, name: &str, value: &PropertyValue);
    fn end_element(&mut self, name: &str);
}

// ── WmlReader ─────────────────────────────────────────────────────────────

/// Push parser for `.wml` documents.
///
/// Bare-identifier values are only legal for properties with a registered
/// enum set, and the identifier must be a member of that set. Register the
/// sets before calling [`parse`](Self::parse):
///
/// ```rust
/// use kestrel_wml::{PropertyValue, WmlHandler, WmlReader};
///
/// struct Count(usize);
/// impl WmlHandler for Count {
///     fn start_element(&mut self, _name: &str) { self.0 += 1; }
///     fn on_property(&mut self, _name: &str, _value: &PropertyValue) {}
///     fn end_element(&mut self, _name: &str) {}
/// }
///
/// let mut reader = WmlReader::new();
/// reader.register_enum("icon", &["play", "select"]);
///
/// let mut count = Count(0);
/// reader.parse("Window { ToolButton { icon: play } }", &mut count).unwrap();
/// assert_eq!(count.0, 2);
/// ```
pub struct WmlReader {
    enums: HashMap<String, Vec<String>>,
}

impl WmlReader {
    pub fn new() -> Self {
        Self { enums: HashMap::new() }
    }

    /// Registers the legal variants for a bare-identifier property.
    ///
    /// Re-registering a property replaces its previous set.
    pub fn register_enum(&mut self, property: &str, variants: &[&str]) {
        self.enums
            .insert(property.to_string(), variants.iter().map(|v| v.to_string()).collect());
    }

    /// Parses `src`, emitting events into `handler` in document order.
    pub fn parse(&self, src: &str, handler: &mut dyn WmlHandler) -> Result<(), ParseError> {
        let tokens = Lexer::new(src).tokenize()?;
        Emitter { tokens, pos: 0, enums: &self.enums, handler }.parse_document()
    }
}

impl Default for WmlReader {
    fn default() -> Self {
        Self::new()
    }
}

// ── Emitter ───────────────────────────────────────────────────────────────

struct Emitter<'a> {
    tokens: Vec<TokenWithPos>,
    pos: usize,
    enums: &'a HashMap<String, Vec<String>>,
    handler: &'a mut dyn WmlHandler,
}

impl Emitter<'_> {
    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    /// Look at the token `offset` positions ahead of current without consuming.
    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos).map(|t| t.token.clone()).unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.advance() {
            Token::Ident(s) => Ok(s),
            tok => Err(self.err(format!("expected identifier, got {:?}", tok))),
        }
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParseError> {
        let got = self.advance();
        if &got == expected {
            Ok(())
        } else {
            Err(self.err(format!("expected {:?}, got {:?}", expected, got)))
        }
    }

    fn expect_int(&mut self) -> Result<i32, ParseError> {
        match self.advance() {
            Token::Int(v) => Ok(v),
            tok => Err(self.err(format!("expected integer, got {:?}", tok))),
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    /// A document is exactly one element.
    fn parse_document(&mut self) -> Result<(), ParseError> {
        self.parse_element()?;
        match self.peek() {
            Token::Eof => Ok(()),
            tok => Err(self.err(format!("expected end of document, got {:?}", tok))),
        }
    }

    // ── Element ───────────────────────────────────────────────────────────

    /// Parse `Name { item* }` where each item is either a `key: value`
    /// property or a child element.
    ///
    /// Disambiguation: when we see `Ident`, we look one token ahead:
    /// - `Ident ":"` → property
    /// - `Ident <anything else>` → child element
    fn parse_element(&mut self) -> Result<(), ParseError> {
        let name = self.expect_ident()?;
        self.expect_token(&Token::LBrace)?;
        self.handler.start_element(&name);

        loop {
            match self.peek() {
                Token::RBrace => {
                    self.advance();
                    self.handler.end_element(&name);
                    return Ok(());
                }
                Token::Eof => return Err(self.err(format!("unclosed '{{' in element {:?}", name))),
                Token::Ident(_) => {
                    if self.peek_ahead(1) == &Token::Colon {
                        self.parse_property()?;
                    } else {
                        self.parse_element()?;
                    }
                }
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} inside element — expected a property (key: value) or a child element",
                        tok
                    )));
                }
            }
        }
    }

    // ── Property ──────────────────────────────────────────────────────────

    fn parse_property(&mut self) -> Result<(), ParseError> {
        let key = self.expect_ident()?;
        self.advance(); // consume `:`
        let value = self.parse_value(&key)?;
        self.handler.on_property(&key, &value);
        Ok(())
    }

    fn parse_value(&mut self, property: &str) -> Result<PropertyValue, ParseError> {
        match self.advance() {
            Token::Str(s) => Ok(PropertyValue::Str(s)),
            Token::Int(v) => Ok(PropertyValue::Int(v)),
            Token::Bool(v) => Ok(PropertyValue::Bool(v)),
            Token::LBracket => {
                let x = self.expect_int()?;
                self.expect_token(&Token::Comma)?;
                let y = self.expect_int()?;
                self.expect_token(&Token::RBracket)?;
                Ok(PropertyValue::Vec2i(Vec2i::new(x, y)))
            }
            Token::Ident(word) => self.validate_enum(property, word),
            tok => Err(self.err(format!("expected a value, got {:?}", tok))),
        }
    }

    fn validate_enum(&self, property: &str, word: String) -> Result<PropertyValue, ParseError> {
        match self.enums.get(property) {
            Some(variants) if variants.iter().any(|v| v == &word) => Ok(PropertyValue::Enum(word)),
            Some(variants) => Err(self.err(format!(
                "{:?} is not a variant of property {:?} (expected one of {:?})",
                word, property, variants
            ))),
            None => Err(self.err(format!(
                "bare identifier {:?} is only valid for enum properties, and {:?} has no registered variants",
                word, property
            ))),
        }
    }
}
