//! Text analysis components of an index.
//!
//! An index can define custom analyzers, tokenizers, token filters and char
//! filters. Each of these is a polymorphic family keyed on `@odata.type`:
//!
//! ```rust
//! use azure_search_documents::analysis::{StopAnalyzer, LexicalAnalyzer};
//!
//! let mut stop = StopAnalyzer::new("my_stop");
//! stop.stopwords = vec!["the".into(), "a".into()];
//!
//! let analyzer = LexicalAnalyzer::from(stop);
//! let json = serde_json::to_value(&analyzer).unwrap();
//! assert_eq!(json["@odata.type"], "#Microsoft.Azure.Search.StopAnalyzer");
//! ```
//!
//! Components referenced by name (in a [`CustomAnalyzer`] or on a field) use
//! the name vocabularies in this module, which also accept custom names.

mod analyzer;
mod char_filter;
mod names;
mod token_filter;
mod tokenizer;

pub use analyzer::*;
pub use char_filter::*;
pub use names::*;
pub use token_filter::*;
pub use tokenizer::*;

azure_sdk_core::expandable_enum! {
    /// Regular expression flags for pattern-based components.
    ///
    /// Several flags are combined on the wire with `|`, e.g. `CASE_INSENSITIVE|COMMENTS`.
    pub enum RegexFlag {
        /// Canonical equivalence.
        CanonEq => "CANON_EQ",
        /// Case-insensitive matching.
        CaseInsensitive => "CASE_INSENSITIVE",
        /// Whitespace and comments in the pattern.
        Comments => "COMMENTS",
        /// `.` matches line terminators.
        DotAll => "DOTALL",
        /// Literal parsing of the pattern.
        Literal => "LITERAL",
        /// Multiline mode.
        Multiline => "MULTILINE",
        /// Unicode-aware case folding.
        UnicodeCase => "UNICODE_CASE",
        /// Only `\n` is a line terminator.
        UnixLines => "UNIX_LINES",
    }
}

azure_sdk_core::expandable_enum! {
    /// Character classes a tokenizer keeps in tokens.
    pub enum TokenCharacterKind {
        /// Letters.
        Letter => "letter",
        /// Digits.
        Digit => "digit",
        /// Whitespace.
        Whitespace => "whitespace",
        /// Punctuation.
        Punctuation => "punctuation",
        /// Symbols.
        Symbol => "symbol",
    }
}

/// Combine regex flags into the `|`-separated wire form.
pub fn join_regex_flags(flags: &[RegexFlag]) -> String {
    flags
        .iter()
        .map(RegexFlag::as_str)
        .collect::<Vec<_>>()
        .join("|")
}
