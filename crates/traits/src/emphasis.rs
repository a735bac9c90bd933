//! The word-emphasis collaborator used for bionic reading.
//!
//! An [`Emphasizer`] returns its input unchanged except for inserted
//! [`SENTINEL_BEGIN`] / [`SENTINEL_END`] pairs around the spans to bold. The
//! sentinels are private-use code points, so they never appear in real text;
//! the splicer rejects any input that already contains one.

/// Marks the start of an emphasized span (U+E000, private use area).
pub const SENTINEL_BEGIN: char = '\u{E000}';
/// Marks the end of an emphasized span (U+E001, private use area).
pub const SENTINEL_END: char = '\u{E001}';

/// Maps plain text to the same text annotated with balanced sentinel pairs.
pub trait Emphasizer: Send + Sync {
    fn emphasize(&self, text: &str) -> String;
}

impl<F> Emphasizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn emphasize(&self, text: &str) -> String {
        self(text)
    }
}

/// Bolds the leading half (rounded up) of every alphanumeric run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BionicEmphasizer;

impl BionicEmphasizer {
    pub fn new() -> Self {
        Self
    }

    fn flush_word(word: &mut Vec<char>, out: &mut String) {
        if word.is_empty() {
            return;
        }
        let bold = word.len().div_ceil(2);
        out.push(SENTINEL_BEGIN);
        out.extend(&word[..bold]);
        out.push(SENTINEL_END);
        out.extend(&word[bold..]);
        word.clear();
    }
}

impl Emphasizer for BionicEmphasizer {
    fn emphasize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 8);
        let mut word = Vec::new();
        for c in text.chars() {
            if c.is_alphanumeric() {
                word.push(c);
            } else {
                Self::flush_word(&mut word, &mut out);
                out.push(c);
            }
        }
        Self::flush_word(&mut word, &mut out);
        out
    }
}
