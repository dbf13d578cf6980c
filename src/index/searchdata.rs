//! Parser for generated `searchData` files.
//!
//! The files are JavaScript array literals of the form
//!
//! ```text
//! var searchData=
//! [
//!   ['wolk_2eh',['Wolk.h',['../_wolk_8h.html',1,'']]],
//!   ['withfilemanagement',['withFileManagement',['../a.html#x',1,'Scope::f(a)'],['../a.html#y',1,'Scope::f(a, b)']]]
//! ];
//! ```
//!
//! Each entry is `[key, [label, record...]]` and each record is
//! `[anchor_path, flag, scope_label]`. The label is copied onto every record.

use crate::index::error::SearchDataError;
use crate::index::types::{DocRecord, RawEntry};
use crate::utils::decode_html;

/// Parse a searchData literal into raw entries
pub fn parse_search_data(input: &str) -> Result<Vec<RawEntry>, SearchDataError> {
    let mut parser = SearchDataParser::new(input);
    let root = parser.parse_document()?;
    entries_from_value(root)
}

/// Parse the JSON form (`[{"key": .., "records": [..]}]`)
pub fn parse_json(input: &str) -> Result<Vec<RawEntry>, SearchDataError> {
    Ok(serde_json::from_str(input)?)
}

/// Literal value
#[derive(Debug)]
enum Value {
    Str(String),
    Num,
    Array(Vec<Value>),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Num => "number",
            Value::Array(_) => "array",
        }
    }
}

/// Entries nest four arrays deep; anything far past that is not search data
const MAX_DEPTH: usize = 64;

struct SearchDataParser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> SearchDataParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    fn parse_document(&mut self) -> Result<Value, SearchDataError> {
        self.skip_whitespace();

        // Optional `var searchData=` assignment
        if self.peek().is_some_and(|c| c != '[') {
            match memchr::memchr(b'=', self.rest().as_bytes()) {
                Some(eq) => self.pos += eq + 1,
                None => return Err(self.unexpected()),
            }
            self.skip_whitespace();
        }

        let value = self.parse_array()?;

        self.skip_whitespace();
        self.consume_char(';');
        self.skip_whitespace();

        if self.pos < self.input.len() {
            return Err(self.unexpected());
        }

        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, SearchDataError> {
        match self.peek() {
            Some('[') => self.parse_array(),
            Some('\'') | Some('"') => self.parse_string().map(Value::Str),
            Some(c) if c == '-' || c.is_ascii_digit() => self.parse_number(),
            Some(_) => Err(self.unexpected()),
            None => Err(SearchDataError::UnexpectedEof),
        }
    }

    fn parse_array(&mut self) -> Result<Value, SearchDataError> {
        if !self.consume_char('[') {
            return Err(self.unexpected());
        }

        if self.depth == MAX_DEPTH {
            return Err(SearchDataError::TooDeep {
                offset: self.pos - 1,
            });
        }
        self.depth += 1;
        let items = self.parse_items();
        self.depth -= 1;
        items.map(Value::Array)
    }

    fn parse_items(&mut self) -> Result<Vec<Value>, SearchDataError> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.consume_char(']') {
                return Ok(items);
            }

            items.push(self.parse_value()?);

            self.skip_whitespace();
            if self.consume_char(',') {
                continue;
            }
            if self.consume_char(']') {
                return Ok(items);
            }
            return Err(self.unexpected());
        }
    }

    fn parse_string(&mut self) -> Result<String, SearchDataError> {
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => q as u8,
            _ => return Err(self.unexpected()),
        };
        self.pos += 1;

        let mut out = String::new();
        loop {
            let rest = self.rest().as_bytes();
            let Some(idx) = memchr::memchr2(quote, b'\\', rest) else {
                return Err(SearchDataError::UnexpectedEof);
            };

            out.push_str(&self.input[self.pos..self.pos + idx]);
            self.pos += idx;

            if rest[idx] == quote {
                self.pos += 1;
                return Ok(out);
            }

            // Backslash escape
            let escape_at = self.pos;
            self.pos += 1;
            let Some(esc) = self.peek() else {
                return Err(SearchDataError::UnexpectedEof);
            };
            self.pos += esc.len_utf8();

            match esc {
                '\\' | '\'' | '"' | '/' => out.push(esc),
                'n' => out.push('\n'),
                't' => out.push('\t'),
                'r' => out.push('\r'),
                'u' => {
                    let ch = self
                        .input
                        .get(self.pos..self.pos + 4)
                        .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
                        .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                        .and_then(char::from_u32)
                        .ok_or(SearchDataError::InvalidEscape { offset: escape_at })?;
                    out.push(ch);
                    self.pos += 4;
                }
                _ => return Err(SearchDataError::InvalidEscape { offset: escape_at }),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Value, SearchDataError> {
        let start = self.pos;
        let len = self
            .rest()
            .bytes()
            .take_while(|b| b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.' | b'e' | b'E'))
            .count();
        self.pos += len;

        self.input[start..self.pos]
            .parse::<f64>()
            .map(|_| Value::Num)
            .map_err(|_| SearchDataError::UnexpectedChar {
                found: self.input[start..].chars().next().unwrap_or('-'),
                offset: start,
            })
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn consume_char(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let len = self.rest().len() - self.rest().trim_start().len();
        self.pos += len;
    }

    fn unexpected(&self) -> SearchDataError {
        match self.peek() {
            Some(found) => SearchDataError::UnexpectedChar {
                found,
                offset: self.pos,
            },
            None => SearchDataError::UnexpectedEof,
        }
    }
}

/// Convert the parsed literal into raw entries
fn entries_from_value(root: Value) -> Result<Vec<RawEntry>, SearchDataError> {
    let Value::Array(items) = root else {
        return Err(SearchDataError::shape(0, "search data is not an array"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| entry_from_value(position, item))
        .collect()
}

fn entry_from_value(position: usize, item: Value) -> Result<RawEntry, SearchDataError> {
    let parts = match item {
        Value::Array(parts) => parts,
        other => {
            return Err(SearchDataError::shape(
                position,
                format!("expected array, found {}", other.kind()),
            ));
        }
    };

    let mut parts = parts.into_iter();
    let key = match parts.next() {
        Some(Value::Str(key)) => key,
        Some(other) => {
            return Err(SearchDataError::shape(
                position,
                format!("key must be a string, found {}", other.kind()),
            ));
        }
        None => return Err(SearchDataError::shape(position, "missing key")),
    };

    let body = match parts.next() {
        Some(Value::Array(body)) => body,
        Some(other) => {
            return Err(SearchDataError::shape(
                position,
                format!("expected [label, records...], found {}", other.kind()),
            ));
        }
        None => return Err(SearchDataError::shape(position, "missing label and records")),
    };

    let mut body = body.into_iter();
    let label = match body.next() {
        Some(Value::Str(label)) => decode_html(&label).into_owned(),
        Some(other) => {
            return Err(SearchDataError::shape(
                position,
                format!("label must be a string, found {}", other.kind()),
            ));
        }
        None => return Err(SearchDataError::shape(position, "missing label")),
    };

    let records = body
        .map(|record| record_from_value(position, &label, record))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawEntry { key, records })
}

fn record_from_value(position: usize, label: &str, record: Value) -> Result<DocRecord, SearchDataError> {
    let fields = match record {
        Value::Array(fields) => fields,
        other => {
            return Err(SearchDataError::shape(
                position,
                format!("record must be an array, found {}", other.kind()),
            ));
        }
    };

    let anchor_path = match fields.first() {
        Some(Value::Str(anchor)) => anchor.clone(),
        _ => return Err(SearchDataError::shape(position, "record has no anchor path")),
    };

    // fields[1] is a frame-target flag; only the scope matters here
    let scope_label = match fields.get(2) {
        Some(Value::Str(scope)) => decode_html(scope).into_owned(),
        Some(other) => {
            return Err(SearchDataError::shape(
                position,
                format!("scope must be a string, found {}", other.kind()),
            ));
        }
        None => String::new(),
    };

    Ok(DocRecord {
        label: label.to_string(),
        anchor_path,
        scope_label,
    })
}
