// src/catalog/parse.rs
//
// Reader for the literal catalog layout:
//
//   const beckMovies = [
//       { number: 1, title: "Roseanna", year: 1993, ... },
//       ...
//   ];
//
// The file is data, never code: only the shapes below are accepted.
// Tolerated extras: `let`/`var`, `//` and `/* */` comments, trailing
// commas, single-quoted strings, quoted keys, `null` for optional fields.

use std::collections::HashSet;

use super::{Catalog, MovieRecord, check_unique};
use crate::error::CatalogError;

#[derive(Clone, Debug, PartialEq)]
enum Tok {
    Ident(String),
    Str(String),
    Int(u64),
    Punct(char),
    Eof,
}

type Pos = (usize, usize);

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    fn new(s: &'a str) -> Self {
        Self { chars: s.chars().peekable(), line: 1, col: 1 }
    }

    #[inline]
    fn pos(&self) -> Pos { (self.line, self.col) }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' { self.line += 1; self.col = 1; } else { self.col += 1; }
        Some(c)
    }

    fn skip_trivia(&mut self) -> Result<(), CatalogError> {
        loop {
            match self.chars.peek().copied() {
                Some(c) if c.is_whitespace() || c == '\u{feff}' => { self.bump(); }
                Some('/') => {
                    let start = self.pos();
                    self.bump();
                    match self.bump() {
                        Some('/') => {
                            while let Some(c) = self.bump() {
                                if c == '\n' { break; }
                            }
                        }
                        Some('*') => {
                            let mut prev = '\0';
                            loop {
                                match self.bump() {
                                    Some('/') if prev == '*' => break,
                                    Some(c) => prev = c,
                                    None => bail_parse!(start, "unterminated block comment"),
                                }
                            }
                        }
                        _ => bail_parse!(start, "unexpected `/`"),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Next token and the position it started at.
    fn next(&mut self) -> Result<(Tok, Pos), CatalogError> {
        self.skip_trivia()?;
        let start = self.pos();
        let Some(&c) = self.chars.peek() else { return Ok((Tok::Eof, start)); };

        let tok = match c {
            '[' | ']' | '{' | '}' | ':' | ',' | '=' | ';' => {
                self.bump();
                Tok::Punct(c)
            }
            '"' | '\'' => {
                self.bump();
                Tok::Str(self.string(c, start)?)
            }
            '0'..='9' => {
                let mut digits = s!();
                while let Some(&d) = self.chars.peek() {
                    if !d.is_ascii_digit() { break; }
                    digits.push(d);
                    self.bump();
                }
                if matches!(self.chars.peek(), Some('.') | Some('e') | Some('E')) {
                    bail_parse!(start, "only whole numbers are allowed here");
                }
                match digits.parse() {
                    Ok(n) => Tok::Int(n),
                    Err(_) => bail_parse!(start, "number too large: {digits}"),
                }
            }
            c if c.is_alphabetic() || c == '_' || c == '$' => {
                let mut id = s!();
                while let Some(&d) = self.chars.peek() {
                    if !(d.is_alphanumeric() || d == '_' || d == '$') { break; }
                    id.push(d);
                    self.bump();
                }
                Tok::Ident(id)
            }
            other => bail_parse!(start, "unexpected character `{other}`"),
        };
        Ok((tok, start))
    }

    fn string(&mut self, quote: char, start: Pos) -> Result<String, CatalogError> {
        let mut out = s!();
        loop {
            let esc_pos = self.pos();
            match self.bump() {
                None | Some('\n') => bail_parse!(start, "unterminated string"),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    Some('u') => out.push(self.unicode_escape(esc_pos)?),
                    Some('\n') => {} // line continuation
                    Some(c @ ('"' | '\'' | '\\' | '/')) => out.push(c),
                    Some(c) => bail_parse!(esc_pos, "unknown escape `\\{c}`"),
                    None => bail_parse!(start, "unterminated string"),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn unicode_escape(&mut self, at: Pos) -> Result<char, CatalogError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let Some(d) = self.bump().and_then(|c| c.to_digit(16)) else {
                bail_parse!(at, "bad \\u escape");
            };
            code = code * 16 + d;
        }
        match char::from_u32(code) {
            Some(c) => Ok(c),
            None => bail_parse!(at, "\\u{code:04x} is not a valid character"),
        }
    }
}

struct Parser<'a> {
    lex: Lexer<'a>,
    tok: Tok,
    at: Pos,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Result<Self, CatalogError> {
        let mut lex = Lexer::new(text);
        let (tok, at) = lex.next()?;
        Ok(Self { lex, tok, at })
    }

    fn advance(&mut self) -> Result<Tok, CatalogError> {
        let (next, at) = self.lex.next()?;
        self.at = at;
        Ok(std::mem::replace(&mut self.tok, next))
    }

    fn expect(&mut self, p: char) -> Result<(), CatalogError> {
        if self.tok == Tok::Punct(p) {
            self.advance()?;
            return Ok(());
        }
        bail_parse!(self.at, "expected `{p}`, found {}", describe(&self.tok))
    }

    fn eat(&mut self, p: char) -> Result<bool, CatalogError> {
        if self.tok == Tok::Punct(p) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn declaration(&mut self) -> Result<Catalog, CatalogError> {
        let is_decl = matches!(&self.tok, Tok::Ident(kw) if matches!(kw.as_str(), "const" | "let" | "var"));
        if !is_decl {
            bail_parse!(self.at, "expected `const`, found {}", describe(&self.tok));
        }
        self.advance()?;

        let name_at = self.at;
        let binding = match self.advance()? {
            Tok::Ident(name) => name,
            other => bail_parse!(name_at, "expected a binding name, found {}", describe(&other)),
        };
        self.expect('=')?;
        self.expect('[')?;

        let mut movies = Vec::new();
        while self.tok != Tok::Punct(']') {
            movies.push(self.record(movies.len())?);
            if !self.eat(',')? { break; }
        }
        self.expect(']')?;
        self.eat(';')?;
        if self.tok != Tok::Eof {
            bail_parse!(self.at, "unexpected {} after the catalog", describe(&self.tok));
        }
        check_unique(&movies)?;
        Ok(Catalog { binding, movies })
    }

    fn record(&mut self, index: usize) -> Result<MovieRecord, CatalogError> {
        self.expect('{')?;
        let mut m = MovieRecord::default();
        let mut seen: HashSet<String> = HashSet::new();

        while self.tok != Tok::Punct('}') {
            let key_at = self.at;
            let (line, _) = key_at;
            let key = match self.advance()? {
                Tok::Ident(k) | Tok::Str(k) => k,
                other => bail_parse!(key_at, "expected a field name, found {}", describe(&other)),
            };
            if !seen.insert(key.clone()) {
                return Err(CatalogError::DuplicateField { line, field: key });
            }
            self.expect(':')?;
            let value_at = self.at;
            let value = self.advance()?;

            match key.as_str() {
                "number" => m.number = int_field(value, value_at, "number")?,
                "year" => m.year = int_field(value, value_at, "year")?,
                "title" => match value {
                    Tok::Str(s) => m.title = s,
                    other => bail_parse!(value_at, "`title` must be a string, found {}", describe(&other)),
                },
                "description" => m.description = opt_str(value, value_at, &key)?,
                "imdbUrl" => m.imdb_url = opt_str(value, value_at, &key)?,
                "tv4playUrl" => m.tv4play_url = opt_str(value, value_at, &key)?,
                "posterUrl" => m.poster_url = opt_str(value, value_at, &key)?,
                "runtime" => m.runtime = opt_str(value, value_at, &key)?,
                "imdbRating" => m.imdb_rating = opt_str(value, value_at, &key)?,
                _ => return Err(CatalogError::UnknownField { line, field: key }),
            }

            if !self.eat(',')? { break; }
        }
        self.expect('}')?;

        for field in ["number", "title", "year"] {
            if !seen.contains(field) {
                return Err(CatalogError::MissingField { index, field });
            }
        }
        m.normalize();
        Ok(m)
    }
}

fn int_field<T: TryFrom<u64>>(tok: Tok, at: Pos, name: &str) -> Result<T, CatalogError> {
    match tok {
        Tok::Int(n) => match T::try_from(n) {
            Ok(v) => Ok(v),
            Err(_) => bail_parse!(at, "`{name}` out of range: {n}"),
        },
        other => bail_parse!(at, "`{name}` must be a whole number, found {}", describe(&other)),
    }
}

fn opt_str(tok: Tok, at: Pos, name: &str) -> Result<Option<String>, CatalogError> {
    match tok {
        Tok::Str(s) => Ok(Some(s)),
        Tok::Ident(id) if id == "null" || id == "undefined" => Ok(None),
        other => bail_parse!(at, "`{name}` must be a string, found {}", describe(&other)),
    }
}

fn describe(tok: &Tok) -> String {
    match tok {
        Tok::Ident(s) => format!("`{s}`"),
        Tok::Str(_) => s!("a string"),
        Tok::Int(n) => format!("`{n}`"),
        Tok::Punct(c) => format!("`{c}`"),
        Tok::Eof => s!("end of file"),
    }
}

/// Parse the literal catalog layout. Never evaluates anything.
pub fn parse_literal(text: &str) -> Result<Catalog, CatalogError> {
    Parser::new(text)?.declaration()
}
