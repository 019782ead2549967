use serde::{Deserialize, Serialize};

use super::{CharFilterName, LexicalTokenizerName, TokenFilterName};
use crate::polymorphic::{impl_variant, polymorphic_family, ODATA_TYPE};

polymorphic_family! {
    /// An analyzer defined on an index.
    pub enum LexicalAnalyzer tagged ODATA_TYPE => {
        /// A tokenizer plus filter chain.
        Custom(CustomAnalyzer),
        /// Regex-based term separation.
        Pattern(PatternAnalyzer),
        /// Standard Lucene analyzer.
        Standard(LuceneStandardAnalyzer),
        /// Letter tokenizer, lowercasing and stopword removal.
        Stop(StopAnalyzer),
    }
}

/// A user-defined combination of one tokenizer, token filters and char filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAnalyzer {
    /// Analyzer name.
    pub name: String,
    /// Tokenizer that breaks text into tokens.
    pub tokenizer: LexicalTokenizerName,
    /// Token filters applied in order after tokenizing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub token_filters: Vec<TokenFilterName>,
    /// Char filters applied in order before tokenizing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub char_filters: Vec<CharFilterName>,
}

impl CustomAnalyzer {
    /// Create a custom analyzer around `tokenizer`.
    pub fn new(name: impl Into<String>, tokenizer: impl Into<LexicalTokenizerName>) -> Self {
        Self {
            name: name.into(),
            tokenizer: tokenizer.into(),
            token_filters: Vec::new(),
            char_filters: Vec::new(),
        }
    }
}

impl_variant!(CustomAnalyzer => ["#Microsoft.Azure.Search.CustomAnalyzer"], named);

/// Flexibly separates text into terms via a regular expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAnalyzer {
    /// Analyzer name.
    pub name: String,
    /// Whether terms are lowercased. Service default `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowercase: Option<bool>,
    /// Token separator pattern. Service default `\W+`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// `|`-separated regex flags, see [`join_regex_flags`](super::join_regex_flags).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    /// Stopwords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stopwords: Vec<String>,
}

impl PatternAnalyzer {
    /// Create a pattern analyzer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lowercase: None,
            pattern: None,
            flags: None,
            stopwords: Vec::new(),
        }
    }
}

impl_variant!(PatternAnalyzer => ["#Microsoft.Azure.Search.PatternAnalyzer"], named);

/// Standard Apache Lucene analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuceneStandardAnalyzer {
    /// Analyzer name.
    pub name: String,
    /// Tokens longer than this are split. Service default 255, maximum 300.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token_length: Option<i32>,
    /// Stopwords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stopwords: Vec<String>,
}

impl LuceneStandardAnalyzer {
    /// Create a standard analyzer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_token_length: None,
            stopwords: Vec::new(),
        }
    }
}

impl_variant!(LuceneStandardAnalyzer => ["#Microsoft.Azure.Search.StandardAnalyzer"], named);

/// Divides text at non-letters, lowercases and removes stopwords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopAnalyzer {
    /// Analyzer name.
    pub name: String,
    /// Stopwords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stopwords: Vec<String>,
}

impl StopAnalyzer {
    /// Create a stop analyzer with no stopwords.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stopwords: Vec::new(),
        }
    }
}

impl_variant!(StopAnalyzer => ["#Microsoft.Azure.Search.StopAnalyzer"], named);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polymorphic::assert_round_trips;
    use serde_json::json;

    #[test]
    fn test_every_analyzer_round_trips() {
        assert_round_trips!(LexicalAnalyzer, [
            json!({
                "@odata.type": "#Microsoft.Azure.Search.CustomAnalyzer",
                "name": "folding",
                "tokenizer": "standard_v2",
                "tokenFilters": ["lowercase", "asciifolding"],
                "charFilters": ["html_strip"]
            }),
            json!({
                "@odata.type": "#Microsoft.Azure.Search.PatternAnalyzer",
                "name": "csv",
                "lowercase": false,
                "pattern": ",",
                "flags": "MULTILINE",
                "stopwords": ["n/a"]
            }),
            json!({"@odata.type": "#Microsoft.Azure.Search.StandardAnalyzer", "name": "std", "maxTokenLength": 255, "stopwords": ["a"]}),
            json!({"@odata.type": "#Microsoft.Azure.Search.StopAnalyzer", "name": "stop_en", "stopwords": ["the", "an"]}),
        ]);
    }

    #[test]
    fn test_stop_analyzer_round_trip() {
        let json = serde_json::json!({
            "@odata.type": "#Microsoft.Azure.Search.StopAnalyzer",
            "name": "stop_en",
            "stopwords": ["the", "an"]
        });
        let analyzer: LexicalAnalyzer = serde_json::from_value(json.clone()).unwrap();
        assert!(matches!(analyzer, LexicalAnalyzer::Stop(ref s) if s.stopwords.len() == 2));
        assert_eq!(serde_json::to_value(&analyzer).unwrap(), json);
    }

    #[test]
    fn test_custom_analyzer_serialization() {
        let mut custom = CustomAnalyzer::new("folding", LexicalTokenizerName::Standard);
        custom.token_filters = vec![TokenFilterName::Lowercase, TokenFilterName::AsciiFolding];
        custom.char_filters = vec![CharFilterName::HtmlStrip];

        let json = serde_json::to_value(LexicalAnalyzer::from(custom)).unwrap();
        assert_eq!(json["@odata.type"], "#Microsoft.Azure.Search.CustomAnalyzer");
        assert_eq!(json["tokenizer"], "standard_v2");
        assert_eq!(json["tokenFilters"], serde_json::json!(["lowercase", "asciifolding"]));
        assert_eq!(json["charFilters"], serde_json::json!(["html_strip"]));
    }

    #[test]
    fn test_standard_analyzer_discriminator() {
        let analyzer = LexicalAnalyzer::from(LuceneStandardAnalyzer::new("std"));
        assert_eq!(analyzer.discriminator(), "#Microsoft.Azure.Search.StandardAnalyzer");
        assert_eq!(analyzer.name(), Some("std"));
        let json = serde_json::to_value(&analyzer).unwrap();
        assert!(json.get("maxTokenLength").is_none());
    }

    #[test]
    fn test_pattern_analyzer_flags() {
        let mut pattern = PatternAnalyzer::new("csv");
        pattern.pattern = Some(",".into());
        pattern.flags = Some(super::super::join_regex_flags(&[
            super::super::RegexFlag::CaseInsensitive,
        ]));

        let json = serde_json::to_value(LexicalAnalyzer::from(pattern)).unwrap();
        assert_eq!(json["flags"], "CASE_INSENSITIVE");
        assert_eq!(json["pattern"], ",");
    }
}
