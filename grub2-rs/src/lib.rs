//! Variable expansion for GRUB2 boot-menu scripts.
//!
//! Words from a parsed command line may reference script variables as
//! `$name`, `${name}`, `$N` (one digit) or one of `$?`, `$@`, `$*`, `$#`.
//! This crate resolves those references against a [`Script`]'s environment.
//!
//! # Quick start
//!
//! ```rust
//! use grub2::{ArgV, Script, Word};
//!
//! let mut script = Script::new().unwrap();
//! script.set_var("root", "hd0,msdos1");
//!
//! let mut argv: ArgV = [
//!     Word::literal("linux"),
//!     Word::expandable("(${root})/vmlinuz"),
//! ]
//! .into_iter()
//! .collect();
//!
//! script.process_expansions(&mut argv);
//! assert_eq!(argv.texts(), ["linux", "(hd0,msdos1)/vmlinuz"]);
//! ```
//!
//! By default each flagged word gets a single expansion, so a word holding
//! two references keeps the second one.  [`ExpansionMode::Exhaustive`]
//! re-expands until none remain.

pub mod config;
pub mod env;
pub mod expand;
pub mod pattern;
pub mod script;
pub mod word;

// Re-exports for convenience.
pub use config::{ExpansionMode, ScriptConfig};
pub use env::{EnvEntry, Environment};
pub use expand::{expand_word, expand_word_fully, process_expansions};
pub use pattern::{PatternError, VarMatch, VarPattern, VAR_PATTERN};
pub use script::{Script, ScriptError};
pub use word::{ArgV, Word};
