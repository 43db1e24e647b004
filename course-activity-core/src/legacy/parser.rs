//! Parser for the small literal subset legacy activity scripts are written in

use super::{LegacyError, Position};

/// Deepest array/object nesting accepted in a script
const MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Literal {
    Str(String),
    Bool(bool),
    Regex { source: String, flags: String },
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

/// A literal and where it starts in the script
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub position: Position,
    pub value: Literal,
}

pub(crate) struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            depth: 0,
        }
    }

    /// Parse a whole script consisting of `var <name> = <literal>;`
    pub fn parse_declaration(&mut self, name: &str) -> Result<Node, LegacyError> {
        self.skip_trivia()?;
        let position = self.position();
        match self.identifier().as_str() {
            "var" | "let" | "const" => {}
            _ => return Err(syntax(position, "expected a variable declaration")),
        }

        self.skip_trivia()?;
        let position = self.position();
        if self.identifier() != name {
            return Err(syntax(position, format!("expected variable '{}'", name)));
        }

        self.expect('=')?;
        let value = self.parse_value()?;

        self.skip_trivia()?;
        if self.peek() == Some(';') {
            self.bump();
        }
        self.skip_trivia()?;
        if self.peek().is_some() {
            return Err(self.error("unexpected content after the declaration"));
        }

        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Node, LegacyError> {
        self.skip_trivia()?;
        let position = self.position();

        let value = match self.peek() {
            Some('[') => self.nested(position, Self::parse_array)?,
            Some('{') => self.nested(position, Self::parse_object)?,
            Some('\'') | Some('"') => Literal::Str(self.parse_concatenation()?),
            Some('/') => self.parse_regex()?,
            Some(c) if c.is_alphabetic() => match self.identifier().as_str() {
                "true" => Literal::Bool(true),
                "false" => Literal::Bool(false),
                other => return Err(syntax(position, format!("unsupported value '{}'", other))),
            },
            Some(c) => return Err(self.error(format!("unexpected character '{}'", c))),
            None => return Err(self.error("unexpected end of input")),
        };

        Ok(Node { position, value })
    }

    fn nested(
        &mut self,
        position: Position,
        parse: fn(&mut Self) -> Result<Literal, LegacyError>,
    ) -> Result<Literal, LegacyError> {
        if self.depth >= MAX_DEPTH {
            return Err(syntax(position, "nesting too deep"));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn parse_array(&mut self) -> Result<Literal, LegacyError> {
        self.bump();
        let mut elements = Vec::new();

        loop {
            self.skip_trivia()?;
            if self.peek() == Some(']') {
                self.bump();
                break;
            }

            elements.push(self.parse_value()?);

            self.skip_trivia()?;
            match self.bump() {
                Some(',') => {}
                Some(']') => break,
                _ => return Err(self.error("expected ',' or ']' in array")),
            }
        }

        Ok(Literal::Array(elements))
    }

    fn parse_object(&mut self) -> Result<Literal, LegacyError> {
        self.bump();
        let mut fields = Vec::new();

        loop {
            self.skip_trivia()?;
            let key = match self.peek() {
                Some('}') => {
                    self.bump();
                    break;
                }
                Some('\'') | Some('"') => self.parse_string()?,
                Some(c) if is_identifier_char(c) => self.identifier(),
                _ => return Err(self.error("expected a property name")),
            };

            self.expect(':')?;
            fields.push((key, self.parse_value()?));

            self.skip_trivia()?;
            match self.bump() {
                Some(',') => {}
                Some('}') => break,
                _ => return Err(self.error("expected ',' or '}' in object")),
            }
        }

        Ok(Literal::Object(fields))
    }

    /// One or more string literals joined with `+`
    fn parse_concatenation(&mut self) -> Result<String, LegacyError> {
        let mut text = self.parse_string()?;

        loop {
            self.skip_trivia()?;
            if self.peek() != Some('+') {
                return Ok(text);
            }
            self.bump();
            self.skip_trivia()?;
            match self.peek() {
                Some('\'') | Some('"') => text.push_str(&self.parse_string()?),
                _ => return Err(self.error("expected a string after '+'")),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, LegacyError> {
        let start = self.position();
        let quote = self.bump();
        let mut text = String::new();

        loop {
            match self.bump() {
                None | Some('\n') => return Err(syntax(start, "unterminated string")),
                Some(c) if Some(c) == quote => return Ok(text),
                Some('\\') => {
                    if let Some(c) = self.parse_escape(start)? {
                        text.push(c);
                    }
                }
                Some(c) => text.push(c),
            }
        }
    }

    /// Character produced by the escape after a backslash, `None` for a line continuation
    fn parse_escape(&mut self, start: Position) -> Result<Option<char>, LegacyError> {
        let c = match self.bump() {
            None => return Err(syntax(start, "unterminated string")),
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('v') => '\u{b}',
            Some('0') => '\0',
            Some('x') => self.parse_hex(2)?,
            Some('u') => self.parse_hex(4)?,
            Some('\n') => return Ok(None),
            Some('\r') => {
                if self.peek() == Some('\n') {
                    self.bump();
                }
                return Ok(None);
            }
            Some(other) => other,
        };
        Ok(Some(c))
    }

    fn parse_hex(&mut self, digits: usize) -> Result<char, LegacyError> {
        let position = self.position();
        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            match self.bump() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                _ => return Err(syntax(position, "invalid hexadecimal escape")),
            }
        }

        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| syntax(position, "escape is not a valid character"))
    }

    fn parse_regex(&mut self) -> Result<Literal, LegacyError> {
        let start = self.position();
        self.bump();
        let mut source = String::new();
        let mut in_class = false;

        loop {
            match self.bump() {
                None | Some('\n') => return Err(syntax(start, "unterminated regular expression")),
                Some('\\') => {
                    source.push('\\');
                    match self.bump() {
                        Some(c) if c != '\n' => source.push(c),
                        _ => return Err(syntax(start, "unterminated regular expression")),
                    }
                }
                Some('/') if !in_class => break,
                Some(c) => {
                    match c {
                        '[' => in_class = true,
                        ']' => in_class = false,
                        _ => {}
                    }
                    source.push(c);
                }
            }
        }

        let mut flags = String::new();
        while let Some(c) = self.peek().filter(char::is_ascii_alphabetic) {
            flags.push(c);
            self.bump();
        }

        Ok(Literal::Regex { source, flags })
    }

    /// Skip whitespace and comments
    fn skip_trivia(&mut self) -> Result<(), LegacyError> {
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.bump();
                    }
                }
                (Some('/'), Some('*')) => {
                    let start = self.position();
                    self.bump();
                    self.bump();
                    loop {
                        match (self.peek(), self.peek_at(1)) {
                            (Some('*'), Some('/')) => {
                                self.bump();
                                self.bump();
                                break;
                            }
                            (Some(_), _) => {
                                self.bump();
                            }
                            (None, _) => return Err(syntax(start, "unterminated comment")),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), LegacyError> {
        self.skip_trivia()?;
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{}' but found '{}'", expected, c))),
            None => Err(self.error(format!("expected '{}' but reached the end", expected))),
        }
    }

    /// Read an identifier, empty if none starts here
    fn identifier(&mut self) -> String {
        let mut ident = String::new();
        while let Some(c) = self.peek().filter(|c| is_identifier_char(*c)) {
            ident.push(c);
            self.bump();
        }
        ident
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn error(&self, message: impl Into<String>) -> LegacyError {
        syntax(self.position(), message)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn syntax(position: Position, message: impl Into<String>) -> LegacyError {
    LegacyError::Syntax {
        position,
        message: message.into(),
    }
}
