//! Command parameters: the leading parameter and the trailing parameter chain.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadParam {
    #[default]
    None,
    Plus,
    Minus,
    Pint,
    Nint,
    /// `>`: as many times as possible, forwards.
    Pindef,
    /// `<`: as many times as possible, backwards.
    Nindef,
    /// `@n`: refers to mark `n`.
    Marker,
}

impl LeadParam {
    pub fn is_backwards(self) -> bool {
        matches!(self, LeadParam::Minus | LeadParam::Nint | LeadParam::Nindef)
    }

    pub fn is_indefinite(self) -> bool {
        matches!(self, LeadParam::Pindef | LeadParam::Nindef)
    }

    /// Count implied by a lead parameter with no explicit number.
    pub fn default_count(self) -> i32 {
        if self.is_backwards() {
            -1
        } else {
            1
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TparDelimiter {
    /// `'` or `"`: the text is used verbatim.
    Exact,
    /// Other punctuation: pattern-like text, matched without regard to case.
    Smart,
    /// `$`: the text names an environment variable.
    Environment,
    /// `&`: the text names a frame whose contents are used.
    Span,
    /// `?`: the text is requested from the user.
    Prompt,
}

impl TparDelimiter {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'\'' | b'"' => Some(TparDelimiter::Exact),
            b'$' => Some(TparDelimiter::Environment),
            b'&' => Some(TparDelimiter::Span),
            b'?' => Some(TparDelimiter::Prompt),
            b if b.is_ascii_punctuation() => Some(TparDelimiter::Smart),
            _ => None,
        }
    }
}

/// One trailing parameter. `nxt` is the following parameter of a
/// multi-parameter command, `con` the next line of a multi-line parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TParObject {
    pub dlm: TparDelimiter,
    pub text: String,
    pub nxt: Option<Box<TParObject>>,
    pub con: Option<Box<TParObject>>,
}

impl TParObject {
    pub fn new(dlm: TparDelimiter, text: impl Into<String>) -> Self {
        Self {
            dlm,
            text: text.into(),
            nxt: None,
            con: None,
        }
    }

    pub fn exact(text: impl Into<String>) -> Self {
        Self::new(TparDelimiter::Exact, text)
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.con.is_none()
    }

    pub fn with_next(mut self, next: TParObject) -> Self {
        self.nxt = Some(Box::new(next));
        self
    }

    /// The parameter text with continuation lines joined by newlines.
    pub fn full_text(&self) -> String {
        let mut out = self.text.clone();
        let mut con = self.con.as_deref();
        while let Some(part) = con {
            out.push('\n');
            out.push_str(&part.text);
            con = part.con.as_deref();
        }
        out
    }

    pub fn next(&self) -> Option<&TParObject> {
        self.nxt.as_deref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/param.rs"]
mod tests;
