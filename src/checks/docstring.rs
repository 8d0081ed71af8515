//! Leading module docstring detection.
//!
//! A script has a module docstring when its first statement is a bare
//! string literal. Rather than parsing the whole file, the scanner walks
//! past blank lines, comments and line continuations, then reads the
//! first statement just far enough to tell whether it is a lone string
//! literal.
//!
//! The literal may be wrapped in one pair of parentheses and may be
//! split into adjacent literals, joined by backslash continuations or,
//! inside the parentheses, by plain line breaks.
//!
//! Bytes and f-string literals are not docstrings. A string followed by
//! anything other than the end of the statement (`"doc".strip()`) is an
//! expression, not a docstring. An unterminated literal at the top of
//! the file is a syntax error.

use thiserror::Error;

/// Syntax error found while scanning the leading statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct SyntaxError {
    pub line: usize,
    pub message: String,
}

/// Return the text of the leading docstring, or `None` if the file does
/// not open with one.
pub fn leading_docstring(content: &str) -> Result<Option<String>, SyntaxError> {
    let mut scanner = Scanner::new(content);

    if !scanner.skip_trivia()? {
        return Ok(None);
    }

    // ("Docstring in parentheses.")
    let parenthesized = scanner.peek() == Some('(');
    if parenthesized {
        scanner.bump();
        scanner.skip_bracketed_space();
    }

    let mut text = match scanner.string_literal()? {
        Some(text) => text,
        None => return Ok(None),
    };

    // Adjacent literals form one constant.
    loop {
        if parenthesized {
            scanner.skip_bracketed_space();
        } else {
            scanner.skip_inline_space();
        }
        match scanner.string_literal()? {
            Some(more) => text.push_str(&more),
            None => break,
        }
    }

    if parenthesized {
        if scanner.peek() != Some(')') {
            return Ok(None);
        }
        scanner.bump();
        scanner.skip_inline_space();
    }

    if scanner.at_statement_end() {
        Ok(Some(text))
    } else {
        Ok(None)
    }
}

/// The leading docstring exists and is not blank
pub fn check_module_docstring(content: &str) -> Result<bool, SyntaxError> {
    Ok(leading_docstring(content)?
        .map(|text| !text.trim().is_empty())
        .unwrap_or(false))
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Scanner {
    fn new(content: &str) -> Self {
        Scanner {
            chars: content.trim_start_matches('\u{feff}').chars().collect(),
            pos: 0,
            line: 1,
        }
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
        }
        Some(c)
    }

    fn error(&self, message: &str) -> SyntaxError {
        SyntaxError {
            line: self.line,
            message: message.to_string(),
        }
    }

    /// Move to the first token of the first statement. Returns false at
    /// end of input.
    fn skip_trivia(&mut self) -> Result<bool, SyntaxError> {
        let mut at_line_start = true;
        loop {
            match self.peek() {
                None => return Ok(false),
                Some('\n') => {
                    self.bump();
                    at_line_start = true;
                }
                Some('\r') => {
                    self.bump();
                }
                Some('#') => {
                    while !matches!(self.peek(), None | Some('\n')) {
                        self.bump();
                    }
                }
                Some('\\') if self.continuation_follows() => {
                    self.skip_continuation();
                    at_line_start = false;
                }
                Some(' ') | Some('\t') | Some('\x0c') => {
                    let indented = self.indent_precedes_token();
                    if at_line_start && indented {
                        return Err(self.error("unexpected indent"));
                    }
                    self.bump();
                }
                Some(_) => return Ok(true),
            }
        }
    }

    /// Whether the whitespace run at the cursor is followed by a token
    /// rather than a comment or line end.
    fn indent_precedes_token(&self) -> bool {
        let mut offset = 0;
        while let Some(c) = self.peek_at(offset) {
            match c {
                ' ' | '\t' | '\x0c' => offset += 1,
                '\n' | '\r' | '#' => return false,
                _ => return true,
            }
        }
        false
    }

    /// Skip spaces and backslash line continuations
    fn skip_inline_space(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\x0c') => {
                    self.bump();
                }
                Some('\\') if self.continuation_follows() => self.skip_continuation(),
                _ => return,
            }
        }
    }

    /// Inside brackets line ends and comments are whitespace too
    fn skip_bracketed_space(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\x0c') | Some('\n') | Some('\r') => {
                    self.bump();
                }
                Some('#') => {
                    while !matches!(self.peek(), None | Some('\n')) {
                        self.bump();
                    }
                }
                Some('\\') if self.continuation_follows() => self.skip_continuation(),
                _ => return,
            }
        }
    }

    fn continuation_follows(&self) -> bool {
        matches!(self.peek_at(1), Some('\n') | Some('\r'))
    }

    fn skip_continuation(&mut self) {
        self.bump();
        if self.peek() == Some('\r') {
            self.bump();
        }
        if self.peek() == Some('\n') {
            self.bump();
        }
    }

    fn at_statement_end(&self) -> bool {
        matches!(
            self.peek(),
            None | Some('\n') | Some('\r') | Some(';') | Some('#')
        )
    }

    /// Read a str literal at the cursor. Leaves the cursor untouched and
    /// returns `None` when the token is not a str literal.
    fn string_literal(&mut self) -> Result<Option<String>, SyntaxError> {
        let mut prefix_len = 0;
        while let Some(c) = self.peek_at(prefix_len) {
            if prefix_len < 2 && "rRuUbBfF".contains(c) {
                prefix_len += 1;
            } else {
                break;
            }
        }

        let quote = match self.peek_at(prefix_len) {
            Some(q @ ('"' | '\'')) => q,
            _ => return Ok(None),
        };

        let prefix: String = self.chars[self.pos..self.pos + prefix_len]
            .iter()
            .collect::<String>()
            .to_lowercase();
        if !matches!(prefix.as_str(), "" | "r" | "u") {
            return Ok(None);
        }

        for _ in 0..prefix_len {
            self.bump();
        }

        let triple = self.peek_at(1) == Some(quote) && self.peek_at(2) == Some(quote);
        if triple {
            self.pos += 3;
            self.read_triple_quoted(quote).map(Some)
        } else {
            self.bump();
            self.read_single_quoted(quote).map(Some)
        }
    }

    fn read_triple_quoted(&mut self, quote: char) -> Result<String, SyntaxError> {
        let start_line = self.line;
        let mut text = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(SyntaxError {
                        line: start_line,
                        message: "unterminated triple-quoted string literal".to_string(),
                    })
                }
                Some('\\') => {
                    text.push('\\');
                    if let Some(escaped) = self.bump() {
                        text.push(escaped);
                    }
                }
                Some(c)
                    if c == quote
                        && self.peek() == Some(quote)
                        && self.peek_at(1) == Some(quote) =>
                {
                    self.pos += 2;
                    return Ok(text);
                }
                Some(c) => text.push(c),
            }
        }
    }

    fn read_single_quoted(&mut self, quote: char) -> Result<String, SyntaxError> {
        let mut text = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => return Err(self.error("unterminated string literal")),
                Some('\\') => {
                    self.bump();
                    match self.bump() {
                        // Line continuation inside the literal
                        Some('\n') => {}
                        Some(escaped) => {
                            text.push('\\');
                            text.push(escaped);
                        }
                        None => return Err(self.error("unterminated string literal")),
                    }
                }
                Some(c) if c == quote => {
                    self.bump();
                    return Ok(text);
                }
                Some(c) => {
                    self.bump();
                    text.push(c);
                }
            }
        }
    }
}
