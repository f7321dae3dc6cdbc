//! Script context.
//!
//! A [`Script`] owns everything expansion needs for one interpreter instance:
//! the compiled variable pattern, the environment, and the options it was
//! built with.  The pattern is compiled once, in the constructor; if that
//! fails no `Script` is returned.  Dropping the `Script` releases it.

use tracing::{debug, error};

use crate::config::ScriptConfig;
use crate::env::Environment;
use crate::expand;
use crate::pattern::{PatternError, VarPattern};
use crate::word::{ArgV, Word};

/// Error returned when a [`Script`] cannot be created.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The variable pattern did not compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// An option value is out of range.
    #[error("invalid script config: {0}")]
    Config(String),
}

/// One interpreter instance's expansion state.
#[derive(Debug)]
pub struct Script {
    pattern: VarPattern,
    env: Environment,
    config: ScriptConfig,
}

impl Script {
    /// Create a script with the standard variable pattern and an empty
    /// environment.
    pub fn new() -> Result<Self, ScriptError> {
        Self::with_config(ScriptConfig::default())
    }

    /// Create a script from explicit options.
    ///
    /// A pattern compile failure is logged as `RE error <code>: <message>`
    /// and returned.
    pub fn with_config(config: ScriptConfig) -> Result<Self, ScriptError> {
        config.validate().map_err(ScriptError::Config)?;

        let pattern = VarPattern::with_source(&config.var_pattern).map_err(|e| {
            error!(code = e.code(), "{e}");
            e
        })?;
        debug!(pattern = pattern.src(), mode = ?config.expansion, "script created");

        Ok(Self {
            pattern,
            env: Environment::new(),
            config,
        })
    }

    pub fn pattern(&self) -> &VarPattern {
        &self.pattern
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Mutable access for the interpreter's assignment logic.
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    /// Append a binding (see [`Environment::push`]).
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.env.push(name, value);
    }

    /// Expand the first reference in a single word.
    pub fn expand_word(&self, word: &mut Word) -> bool {
        expand::expand_word(&self.pattern, &self.env, word)
    }

    /// Expand the flagged words of `argv` in place.  Returns the number of
    /// words changed.
    pub fn process_expansions(&self, argv: &mut ArgV) -> usize {
        expand::process_expansions(self, argv)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpansionMode;
    use crate::pattern::REG_BADPAT;

    #[test]
    fn new_script_is_empty() {
        let script = Script::new().unwrap();
        assert!(script.env().is_empty());
        assert_eq!(script.config(), &ScriptConfig::default());
    }

    #[test]
    fn malformed_pattern_fails_construction() {
        let cfg = ScriptConfig::new().with_var_pattern(r"\$\{?([[:alpha:]");
        match Script::with_config(cfg) {
            Err(ScriptError::Pattern(e)) => {
                assert_eq!(e.code(), REG_BADPAT);
                assert!(e.to_string().starts_with("RE error 2: "));
            }
            other => panic!("expected pattern error, got {other:?}"),
        }
    }

    #[test]
    fn zero_substitution_cap_fails_construction() {
        let cfg = ScriptConfig::new().with_max_substitutions(0);
        assert!(matches!(Script::with_config(cfg), Err(ScriptError::Config(_))));
    }

    #[test]
    fn set_var_appends() {
        let mut script = Script::new().unwrap();
        script.set_var("A", "1");
        script.env_mut().push("A", "2");
        assert_eq!(script.env().lookup("A"), Some("1"));
        assert_eq!(script.env().len(), 2);
    }

    #[test]
    fn expand_word_uses_env() {
        let mut script = Script::new().unwrap();
        script.set_var("kernel", "/vmlinuz-6.1");
        let mut word = Word::expandable("linux ${kernel}");
        assert!(script.expand_word(&mut word));
        assert_eq!(word.text, "linux /vmlinuz-6.1");
    }

    #[test]
    fn process_expansions_counts_changes() {
        let mut script = Script::new().unwrap();
        script.set_var("root", "hd0,1");
        let mut argv: ArgV = [
            Word::literal("set"),
            Word::expandable("root=$root"),
            Word::literal("$root"),
            Word::expandable("quiet"),
        ]
        .into_iter()
        .collect();
        assert_eq!(script.process_expansions(&mut argv), 1);
        assert_eq!(argv.texts(), ["set", "root=hd0,1", "$root", "quiet"]);
    }

    #[test]
    fn exhaustive_mode_resolves_every_reference() {
        let cfg = ScriptConfig::new().with_expansion(ExpansionMode::Exhaustive);
        let mut script = Script::with_config(cfg).unwrap();
        script.set_var("1", "one");
        script.set_var("2", "two");
        let mut argv: ArgV = [Word::expandable("$1 $2")].into_iter().collect();
        assert_eq!(script.process_expansions(&mut argv), 1);
        assert_eq!(argv.texts(), ["one two"]);
    }

    #[test]
    fn script_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Script>();
    }
}
