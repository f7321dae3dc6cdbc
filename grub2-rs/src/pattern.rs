//! Variable-reference pattern.
//!
//! A GRUB2 script word may contain references of the form:
//!
//! | Form        | Name                                             |
//! |-------------|--------------------------------------------------|
//! | `$name`     | letter, then letters / digits / underscores      |
//! | `${name}`   | same, brace-delimited                            |
//! | `$N`        | a single decimal digit (positional parameter)    |
//! | `$?` `$@` `$*` `$#` | special single-character names           |
//!
//! The closing `}` is optional, as is the opening `{`.  The pattern is
//! compiled once per [`Script`](crate::Script) and shared by every expansion.

use regex::Regex;

/// Source of the variable-reference pattern, extended-regex syntax.
///
/// Capture group 1 is the variable name.
pub const VAR_PATTERN: &str = r"\$\{?([[:alpha:]][_[:alnum:]]*|[0-9]|[?@*#])\}?";

/// `regcomp` code for an invalid pattern.
pub const REG_BADPAT: i32 = 2;
/// `regcomp` code for a pattern too large to compile.
pub const REG_ESPACE: i32 = 12;

// ── Errors ────────────────────────────────────────────────────────────────────

/// Error returned when the variable pattern cannot be compiled.
///
/// Displays as a single diagnostic line: `RE error <code>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("RE error {code}: {message}")]
pub struct PatternError {
    code: i32,
    message: String,
}

impl PatternError {
    /// Numeric error code (`regcomp` numbering).
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Human-readable reason, without the code.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_regex(err: &regex::Error) -> Self {
        match err {
            regex::Error::Syntax(text) => PatternError {
                code: REG_BADPAT,
                message: one_line(text),
            },
            regex::Error::CompiledTooBig(limit) => PatternError {
                code: REG_ESPACE,
                message: format!("compiled pattern exceeds {limit} bytes"),
            },
            other => PatternError {
                code: REG_BADPAT,
                message: one_line(&other.to_string()),
            },
        }
    }
}

/// Collapse a multi-line regex diagnostic to its `error:` line.
fn one_line(text: &str) -> String {
    text.lines()
        .rev()
        .find_map(|l| l.trim().strip_prefix("error: "))
        .or_else(|| text.lines().map(str::trim).find(|l| !l.is_empty()))
        .unwrap_or("invalid pattern")
        .to_owned()
}

// ── Pattern ───────────────────────────────────────────────────────────────────

/// A compiled variable-reference matcher.
#[derive(Debug, Clone)]
pub struct VarPattern {
    src: String,
    re: Regex,
}

impl VarPattern {
    /// Compile the standard GRUB2 variable pattern ([`VAR_PATTERN`]).
    pub fn compile() -> Result<Self, PatternError> {
        Self::with_source(VAR_PATTERN)
    }

    /// Compile an alternative pattern source.
    ///
    /// If the source has no capture group the whole match is used as the
    /// variable name.
    pub fn with_source(src: &str) -> Result<Self, PatternError> {
        let re = Regex::new(src).map_err(|e| PatternError::from_regex(&e))?;
        Ok(Self {
            src: src.to_owned(),
            re,
        })
    }

    /// The source the pattern was compiled from.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Returns `true` if `text` contains a variable reference.
    pub fn is_match(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    /// Find the leftmost variable reference in `text`.
    pub fn find<'t>(&self, text: &'t str) -> Option<VarMatch<'t>> {
        let caps = self.re.captures(text)?;
        let whole = caps.get(0)?;
        let name = caps.get(1).unwrap_or(whole);
        Some(VarMatch {
            text,
            start: whole.start(),
            end: whole.end(),
            name: (name.start(), name.end()),
        })
    }
}

/// One variable reference located inside a word.
///
/// All offsets are byte offsets into the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarMatch<'t> {
    text: &'t str,
    start: usize,
    end: usize,
    name: (usize, usize),
}

impl<'t> VarMatch<'t> {
    /// Offset of the `$`.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset just past the reference, including any closing `}`.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Text before the reference.
    pub fn left(&self) -> &'t str {
        &self.text[..self.start]
    }

    /// The full reference, delimiters included.
    pub fn whole(&self) -> &'t str {
        &self.text[self.start..self.end]
    }

    /// The variable name proper.
    pub fn name(&self) -> &'t str {
        &self.text[self.name.0..self.name.1]
    }

    /// Text after the reference.
    pub fn right(&self) -> &'t str {
        &self.text[self.end..]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
