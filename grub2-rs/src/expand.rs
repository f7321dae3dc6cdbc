//! Variable expansion of words.
//!
//! [`expand_word`] resolves the leftmost variable reference in a word:
//!
//! ```text
//! text[..start] + value + text[end..]
//! ```
//!
//! where `[start, end)` spans the whole reference (`$`, `{`, `}` included) and
//! `value` is the bound value of the captured name, or the empty string when
//! the name is unbound.  Only one reference is resolved per call.
//!
//! [`process_expansions`] runs the expander over every word of an argument
//! vector that is flagged for expansion.  Word splitting is not done here.

use tracing::{trace, warn};

use crate::config::ExpansionMode;
use crate::env::Environment;
use crate::pattern::VarPattern;
use crate::script::Script;
use crate::word::{ArgV, Word};

/// Expand the first variable reference in `word`.
///
/// Returns `true` if the text was rewritten, `false` if it holds no
/// reference (the text is then untouched).
pub fn expand_word(pattern: &VarPattern, env: &Environment, word: &mut Word) -> bool {
    let Some(m) = pattern.find(&word.text) else {
        return false;
    };

    let value = env.lookup(m.name()).unwrap_or("");

    let (left, right) = (m.left(), m.right());
    let mut dest = String::with_capacity(left.len() + value.len() + right.len());
    dest.push_str(left);
    dest.push_str(value);
    dest.push_str(right);

    trace!(reference = m.whole(), var = m.name(), value, "substitute");

    // The new text is complete before the old buffer is dropped.
    word.text = dest;
    true
}

/// Expand `word` repeatedly until it holds no reference, performing at most
/// `limit` substitutions.  Returns the number performed.
///
/// Each round rescans from the start, so references introduced by a
/// substituted value are expanded too.
pub fn expand_word_fully(
    pattern: &VarPattern,
    env: &Environment,
    word: &mut Word,
    limit: usize,
) -> usize {
    let mut count = 0;
    while count < limit {
        if !expand_word(pattern, env, word) {
            return count;
        }
        count += 1;
    }
    if pattern.is_match(&word.text) {
        warn!(limit, text = %word.text, "substitution limit reached");
    }
    count
}

/// Expand every word of `argv` whose `expand` flag is set.
///
/// Words are visited once each, in order.  Entries are never added, removed
/// or reordered; only `text` changes.  Returns the number of words whose
/// text was rewritten.
pub fn process_expansions(script: &Script, argv: &mut ArgV) -> usize {
    let pattern = script.pattern();
    let env = script.env();
    let config = script.config();

    let mut changed = 0;
    for word in argv.words.iter_mut().filter(|w| w.expand) {
        let hit = match config.expansion {
            ExpansionMode::FirstMatch => expand_word(pattern, env, word),
            ExpansionMode::Exhaustive => {
                expand_word_fully(pattern, env, word, config.max_substitutions) > 0
            }
        };
        if hit {
            changed += 1;
        }
    }
    changed
}

// ── Tests ─────────────────────────────────────────────────────────────────────
