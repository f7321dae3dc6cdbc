//! Words and argument vectors, as produced by the script parser.

/// One token of a command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    /// Token text.  Replaced wholesale when a reference is expanded.
    pub text: String,
    /// Scan this word for variable references.
    pub expand: bool,
    /// Split the expanded text into several words.  Consumed by a later
    /// stage; expansion never looks at it.
    pub split: bool,
}

impl Word {
    pub fn new(text: impl Into<String>, expand: bool) -> Self {
        Self {
            text: text.into(),
            expand,
            split: false,
        }
    }

    /// A word left alone by expansion (e.g. single-quoted).
    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// A word scanned for variable references.
    pub fn expandable(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    pub fn with_split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }
}

/// The ordered words of one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgV {
    pub words: Vec<Word>,
}

impl ArgV {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Current text of every word, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.text.as_str()).collect()
    }
}

impl FromIterator<Word> for ArgV {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
