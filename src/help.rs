//! Help files: the builder that turns a sequential help source into the
//! indexed form, and the reader the editor uses to look sections up.
//!
//! Indexed layout:
//!
//! ```text
//! <index lines> <contents lines>
//! KEY  <start> <end>          one per section, offsets into the body
//! <contents block>
//! <body block>
//! ```

use std::fmt;

use memchr::memchr;

/// Longest payload kept from a source line.
pub const MAX_PAYLOAD: usize = 77;
pub const KEY_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpWarning {
    /// Line with an unknown flag character (or empty); skipped.
    Illegal { line: usize, text: String },
    Truncated { line: usize },
}

impl fmt::Display for HelpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelpWarning::Illegal { line, text } => {
                write!(f, "line {}: illegal flag, line skipped: {:?}", line, text)
            }
            HelpWarning::Truncated { line } => {
                write!(f, "line {}: truncated to {} characters", line, MAX_PAYLOAD)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub key: [u8; KEY_LEN],
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    pub output: Vec<u8>,
    pub index: Vec<IndexEntry>,
    pub contents_lines: usize,
    pub warnings: Vec<HelpWarning>,
}

fn lines(input: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut rest = Some(input);
    std::iter::from_fn(move || {
        let data = rest?;
        match memchr(b'\n', data) {
            Some(pos) => {
                rest = Some(&data[pos + 1..]);
                Some(&data[..pos])
            }
            None => {
                rest = None;
                (!data.is_empty()).then_some(data)
            }
        }
    })
    .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// First four bytes of `payload`, right-justified like `%4s`.
fn section_key(payload: &[u8]) -> [u8; KEY_LEN] {
    let take = payload.len().min(KEY_LEN);
    let mut key = [b' '; KEY_LEN];
    key[KEY_LEN - take..].copy_from_slice(&payload[..take]);
    key
}

/// Body text of the section being read. Contents lines (`+`) lead the
/// section body; plain lines follow in input order.
#[derive(Default)]
struct OpenSection {
    key: [u8; KEY_LEN],
    lead: Vec<u8>,
    rest: Vec<u8>,
}

impl OpenSection {
    fn close(self, body: &mut Vec<u8>) -> IndexEntry {
        let start = body.len();
        body.extend_from_slice(&self.lead);
        body.extend_from_slice(&self.rest);
        IndexEntry {
            key: self.key,
            start,
            end: body.len(),
        }
    }
}

fn push_line(buf: &mut Vec<u8>, payload: &[u8]) {
    buf.extend_from_slice(payload);
    buf.push(b'\n');
}

/// Converts a sequential help source into the indexed layout.
pub fn build(input: &[u8]) -> BuildOutput {
    let mut out = BuildOutput::default();
    let mut contents = Vec::new();
    let mut body = Vec::new();
    let mut open: Option<OpenSection> = None;

    for (n, raw) in lines(input).enumerate() {
        let line_no = n + 1;
        let Some((&flag, payload)) = raw.split_first() else {
            out.warnings.push(HelpWarning::Illegal {
                line: line_no,
                text: String::new(),
            });
            continue;
        };
        if matches!(flag, b'{' | b'!') {
            continue;
        }
        let payload = if payload.len() > MAX_PAYLOAD {
            out.warnings.push(HelpWarning::Truncated { line: line_no });
            &payload[..MAX_PAYLOAD]
        } else {
            payload
        };

        match flag {
            b'\\' => match payload.first() {
                Some(b'%') => {
                    let buf = match open.as_mut() {
                        Some(section) => &mut section.rest,
                        None => &mut body,
                    };
                    buf.push(b'\\');
                    push_line(buf, payload);
                }
                Some(b'#') => break,
                _ => {
                    if let Some(section) = open.take() {
                        out.index.push(section.close(&mut body));
                    }
                    open = Some(OpenSection {
                        key: section_key(payload),
                        ..OpenSection::default()
                    });
                }
            },
            b'+' => {
                push_line(&mut contents, payload);
                out.contents_lines += 1;
                match open.as_mut() {
                    Some(section) => push_line(&mut section.lead, payload),
                    None => push_line(&mut body, payload),
                }
            }
            b' ' => match open.as_mut() {
                Some(section) => push_line(&mut section.rest, payload),
                None => {
                    push_line(&mut contents, payload);
                    out.contents_lines += 1;
                }
            },
            _ => out.warnings.push(HelpWarning::Illegal {
                line: line_no,
                text: raw.iter().map(|&b| char::from(b)).collect(),
            }),
        }
    }
    if let Some(section) = open.take() {
        out.index.push(section.close(&mut body));
    }

    let mut output = format!("{} {}\n", out.index.len(), out.contents_lines).into_bytes();
    for entry in &out.index {
        output.extend_from_slice(&entry.key);
        output.extend_from_slice(format!(" {:>8} {:>8}\n", entry.start, entry.end).as_bytes());
    }
    output.extend_from_slice(&contents);
    output.extend_from_slice(&body);
    out.output = output;
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpError {
    BadHeader,
    BadIndex(usize),
    Truncated,
}

impl fmt::Display for HelpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelpError::BadHeader => write!(f, "help file header is malformed"),
            HelpError::BadIndex(n) => write!(f, "help index line {} is malformed", n),
            HelpError::Truncated => write!(f, "help file is truncated"),
        }
    }
}

impl std::error::Error for HelpError {}

fn take_line<'a>(rest: &mut &'a [u8]) -> Option<&'a [u8]> {
    let data: &'a [u8] = *rest;
    let pos = memchr(b'\n', data)?;
    *rest = &data[pos + 1..];
    Some(&data[..pos])
}

/// An indexed help file loaded for lookups.
#[derive(Debug, Clone)]
pub struct HelpFile {
    index: Vec<IndexEntry>,
    contents: Vec<u8>,
    body: Vec<u8>,
}

impl HelpFile {
    pub fn parse(data: &[u8]) -> Result<Self, HelpError> {
        let mut rest = data;
        let header = take_line(&mut rest).ok_or(HelpError::BadHeader)?;
        let header = String::from_utf8_lossy(header);
        let mut counts = header.split_whitespace().map(str::parse::<usize>);
        let (Some(Ok(index_lines)), Some(Ok(contents_lines))) = (counts.next(), counts.next())
        else {
            return Err(HelpError::BadHeader);
        };

        let mut index = Vec::with_capacity(index_lines);
        for n in 0..index_lines {
            let line = take_line(&mut rest).ok_or(HelpError::Truncated)?;
            if line.len() < KEY_LEN {
                return Err(HelpError::BadIndex(n + 1));
            }
            let offsets = String::from_utf8_lossy(&line[KEY_LEN..]);
            let mut offsets = offsets.split_whitespace().map(str::parse::<usize>);
            let (Some(Ok(start)), Some(Ok(end))) = (offsets.next(), offsets.next()) else {
                return Err(HelpError::BadIndex(n + 1));
            };
            index.push(IndexEntry {
                key: section_key(&line[..KEY_LEN]),
                start,
                end,
            });
        }

        let mut contents = Vec::new();
        for _ in 0..contents_lines {
            let line = take_line(&mut rest).ok_or(HelpError::Truncated)?;
            contents.extend_from_slice(line);
            contents.push(b'\n');
        }
        let body = rest.to_vec();
        if index.iter().any(|e| e.start > e.end || e.end > body.len()) {
            return Err(HelpError::Truncated);
        }
        Ok(Self {
            index,
            contents,
            body,
        })
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// Body of the section whose key matches `key` ignoring case.
    pub fn section(&self, key: &str) -> Option<&[u8]> {
        let wanted = section_key(key.trim().to_ascii_uppercase().as_bytes());
        self.index
            .iter()
            .find(|e| e.key.to_ascii_uppercase() == wanted)
            .map(|e| &self.body[e.start..e.end])
    }
}

#[cfg(test)]
#[path = "../tests/unit/help.rs"]
mod tests;
