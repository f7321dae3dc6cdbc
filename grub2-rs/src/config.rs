//! Script construction options.

use crate::pattern::VAR_PATTERN;

/// Default cap on substitutions per word in [`ExpansionMode::Exhaustive`].
pub const DEFAULT_MAX_SUBSTITUTIONS: usize = 64;

/// How many references the expansion pass resolves in each word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpansionMode {
    /// One `expand_word` call per flagged word; later references are left
    /// as written.
    #[default]
    FirstMatch,
    /// Re-expand each flagged word until no reference remains (or the
    /// substitution cap is reached).
    Exhaustive,
}

/// Options for [`Script::with_config`](crate::Script::with_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptConfig {
    /// Variable-reference pattern source.  Capture group 1 is the name.
    pub var_pattern: String,
    pub expansion: ExpansionMode,
    /// Substitution cap per word in exhaustive mode.  A value such as
    /// `A='$A'` would otherwise never converge.  Must be non-zero.
    pub max_substitutions: usize,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            var_pattern: VAR_PATTERN.to_owned(),
            expansion: ExpansionMode::FirstMatch,
            max_substitutions: DEFAULT_MAX_SUBSTITUTIONS,
        }
    }
}

impl ScriptConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var_pattern(mut self, src: impl Into<String>) -> Self {
        self.var_pattern = src.into();
        self
    }

    pub fn with_expansion(mut self, mode: ExpansionMode) -> Self {
        self.expansion = mode;
        self
    }

    pub fn with_max_substitutions(mut self, max: usize) -> Self {
        self.max_substitutions = max;
        self
    }

    /// Check option values that do not depend on compiling the pattern.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.max_substitutions == 0 {
            return Err("max_substitutions must be at least 1".into());
        }
        Ok(())
    }
}
