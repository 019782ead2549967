use serde::{Deserialize, Serialize};

use super::TokenCharacterKind;
use crate::polymorphic::{impl_variant, polymorphic_family, ODATA_TYPE};

polymorphic_family! {
    /// A tokenizer defined on an index.
    ///
    /// The keyword and standard tokenizers exist in a legacy and a current wire
    /// form; both are readable, new definitions should use the current one.
    pub enum LexicalTokenizer tagged ODATA_TYPE => {
        /// Grammar-based tokenizer.
        Classic(ClassicTokenizer),
        /// Edge n-grams.
        EdgeNGram(EdgeNGramTokenizer),
        /// Whole input as one token.
        Keyword(KeywordTokenizer),
        /// Whole input as one token (legacy form).
        KeywordV1(KeywordTokenizerV1),
        /// Language-specific word breaking.
        MicrosoftLanguage(MicrosoftLanguageTokenizer),
        /// Language-specific word breaking with stemming.
        MicrosoftLanguageStemming(MicrosoftLanguageStemmingTokenizer),
        /// N-grams.
        NGram(NGramTokenizer),
        /// Path-like hierarchies.
        PathHierarchy(PathHierarchyTokenizer),
        /// Regex pattern tokenizer.
        Pattern(PatternTokenizer),
        /// Unicode text segmentation.
        Standard(LuceneStandardTokenizer),
        /// Unicode text segmentation (legacy form).
        StandardV1(LuceneStandardTokenizerV1),
        /// URLs and emails as single tokens.
        UaxUrlEmail(UaxUrlEmailTokenizer),
    }
}

azure_sdk_core::expandable_enum! {
    /// Languages supported by [`MicrosoftLanguageTokenizer`].
    pub enum MicrosoftTokenizerLanguage {
        /// Bangla.
        Bangla => "bangla",
        /// Bulgarian.
        Bulgarian => "bulgarian",
        /// Catalan.
        Catalan => "catalan",
        /// Chinese (Simplified).
        ChineseSimplified => "chineseSimplified",
        /// Chinese (Traditional).
        ChineseTraditional => "chineseTraditional",
        /// Croatian.
        Croatian => "croatian",
        /// Czech.
        Czech => "czech",
        /// Danish.
        Danish => "danish",
        /// Dutch.
        Dutch => "dutch",
        /// English.
        English => "english",
        /// French.
        French => "french",
        /// German.
        German => "german",
        /// Greek.
        Greek => "greek",
        /// Gujarati.
        Gujarati => "gujarati",
        /// Hindi.
        Hindi => "hindi",
        /// Icelandic.
        Icelandic => "icelandic",
        /// Indonesian.
        Indonesian => "indonesian",
        /// Italian.
        Italian => "italian",
        /// Japanese.
        Japanese => "japanese",
        /// Kannada.
        Kannada => "kannada",
        /// Korean.
        Korean => "korean",
        /// Malay.
        Malay => "malay",
        /// Malayalam.
        Malayalam => "malayalam",
        /// Marathi.
        Marathi => "marathi",
        /// Norwegian (Bokmål).
        NorwegianBokmaal => "norwegianBokmaal",
        /// Polish.
        Polish => "polish",
        /// Portuguese.
        Portuguese => "portuguese",
        /// Portuguese (Brazil).
        PortugueseBrazilian => "portugueseBrazilian",
        /// Punjabi.
        Punjabi => "punjabi",
        /// Romanian.
        Romanian => "romanian",
        /// Russian.
        Russian => "russian",
        /// Serbian (Cyrillic).
        SerbianCyrillic => "serbianCyrillic",
        /// Serbian (Latin).
        SerbianLatin => "serbianLatin",
        /// Slovenian.
        Slovenian => "slovenian",
        /// Spanish.
        Spanish => "spanish",
        /// Swedish.
        Swedish => "swedish",
        /// Tamil.
        Tamil => "tamil",
        /// Telugu.
        Telugu => "telugu",
        /// Thai.
        Thai => "thai",
        /// Ukrainian.
        Ukrainian => "ukrainian",
        /// Urdu.
        Urdu => "urdu",
        /// Vietnamese.
        Vietnamese => "vietnamese",
    }
}

azure_sdk_core::expandable_enum! {
    /// Languages supported by [`MicrosoftLanguageStemmingTokenizer`].
    pub enum MicrosoftStemmingTokenizerLanguage {
        /// Arabic.
        Arabic => "arabic",
        /// Bangla.
        Bangla => "bangla",
        /// Bulgarian.
        Bulgarian => "bulgarian",
        /// Catalan.
        Catalan => "catalan",
        /// Croatian.
        Croatian => "croatian",
        /// Czech.
        Czech => "czech",
        /// Danish.
        Danish => "danish",
        /// Dutch.
        Dutch => "dutch",
        /// English.
        English => "english",
        /// Estonian.
        Estonian => "estonian",
        /// Finnish.
        Finnish => "finnish",
        /// French.
        French => "french",
        /// German.
        German => "german",
        /// Greek.
        Greek => "greek",
        /// Gujarati.
        Gujarati => "gujarati",
        /// Hebrew.
        Hebrew => "hebrew",
        /// Hindi.
        Hindi => "hindi",
        /// Hungarian.
        Hungarian => "hungarian",
        /// Icelandic.
        Icelandic => "icelandic",
        /// Indonesian.
        Indonesian => "indonesian",
        /// Italian.
        Italian => "italian",
        /// Kannada.
        Kannada => "kannada",
        /// Latvian.
        Latvian => "latvian",
        /// Lithuanian.
        Lithuanian => "lithuanian",
        /// Malay.
        Malay => "malay",
        /// Malayalam.
        Malayalam => "malayalam",
        /// Marathi.
        Marathi => "marathi",
        /// Norwegian (Bokmål).
        NorwegianBokmaal => "norwegianBokmaal",
        /// Polish.
        Polish => "polish",
        /// Portuguese.
        Portuguese => "portuguese",
        /// Portuguese (Brazil).
        PortugueseBrazilian => "portugueseBrazilian",
        /// Punjabi.
        Punjabi => "punjabi",
        /// Romanian.
        Romanian => "romanian",
        /// Russian.
        Russian => "russian",
        /// Serbian (Cyrillic).
        SerbianCyrillic => "serbianCyrillic",
        /// Serbian (Latin).
        SerbianLatin => "serbianLatin",
        /// Slovak.
        Slovak => "slovak",
        /// Slovenian.
        Slovenian => "slovenian",
        /// Spanish.
        Spanish => "spanish",
        /// Swedish.
        Swedish => "swedish",
        /// Tamil.
        Tamil => "tamil",
        /// Telugu.
        Telugu => "telugu",
        /// Turkish.
        Turkish => "turkish",
        /// Ukrainian.
        Ukrainian => "ukrainian",
        /// Urdu.
        Urdu => "urdu",
    }
}

/// Grammar-based tokenizer suitable for most European-language documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassicTokenizer {
    /// Tokenizer name.
    pub name: String,
    /// Maximum token length. Service default 255.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token_length: Option<i32>,
}

impl ClassicTokenizer {
    /// Create a classic tokenizer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_token_length: None,
        }
    }
}

impl_variant!(ClassicTokenizer => ["#Microsoft.Azure.Search.ClassicTokenizer"], named);

/// Tokenizes the input from an edge into n-grams of the given size(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeNGramTokenizer {
    /// Tokenizer name.
    pub name: String,
    /// Minimum n-gram length. Service default 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_gram: Option<i32>,
    /// Maximum n-gram length. Service default 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gram: Option<i32>,
    /// Character classes to keep in tokens.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub token_chars: Vec<TokenCharacterKind>,
}

impl EdgeNGramTokenizer {
    /// Create an edge n-gram tokenizer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_gram: None,
            max_gram: None,
            token_chars: Vec::new(),
        }
    }
}

impl_variant!(EdgeNGramTokenizer => ["#Microsoft.Azure.Search.EdgeNGramTokenizer"], named);

/// Emits the entire input as a single token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordTokenizer {
    /// Tokenizer name.
    pub name: String,
    /// Maximum token length. Service default 256.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token_length: Option<i32>,
}

impl KeywordTokenizer {
    /// Create a keyword tokenizer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_token_length: None,
        }
    }
}

impl_variant!(KeywordTokenizer => ["#Microsoft.Azure.Search.KeywordTokenizerV2"], named);

/// Legacy keyword tokenizer, configured by read buffer size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordTokenizerV1 {
    /// Tokenizer name.
    pub name: String,
    /// Read buffer size in bytes. Service default 256.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_size: Option<i32>,
}

impl KeywordTokenizerV1 {
    /// Create a legacy keyword tokenizer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buffer_size: None,
        }
    }
}

impl_variant!(KeywordTokenizerV1 => ["#Microsoft.Azure.Search.KeywordTokenizer"], named);

/// Divides text using language-specific rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicrosoftLanguageTokenizer {
    /// Tokenizer name.
    pub name: String,
    /// Maximum token length. Service default 255.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token_length: Option<i32>,
    /// Whether this tokenizer is used at query time rather than indexing time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_search_tokenizer: Option<bool>,
    /// Language to use. Service default English.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<MicrosoftTokenizerLanguage>,
}

impl MicrosoftLanguageTokenizer {
    /// Create a language tokenizer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_token_length: None,
            is_search_tokenizer: None,
            language: None,
        }
    }
}

impl_variant!(MicrosoftLanguageTokenizer => ["#Microsoft.Azure.Search.MicrosoftLanguageTokenizer"], named);

/// Divides text using language-specific rules and reduces words to their base forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicrosoftLanguageStemmingTokenizer {
    /// Tokenizer name.
    pub name: String,
    /// Maximum token length. Service default 255.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token_length: Option<i32>,
    /// Whether this tokenizer is used at query time rather than indexing time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_search_tokenizer: Option<bool>,
    /// Language to use. Service default English.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<MicrosoftStemmingTokenizerLanguage>,
}

impl MicrosoftLanguageStemmingTokenizer {
    /// Create a stemming tokenizer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_token_length: None,
            is_search_tokenizer: None,
            language: None,
        }
    }
}

impl_variant!(
    MicrosoftLanguageStemmingTokenizer => ["#Microsoft.Azure.Search.MicrosoftLanguageStemmingTokenizer"],
    named
);

/// Tokenizes the input into n-grams of the given size(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NGramTokenizer {
    /// Tokenizer name.
    pub name: String,
    /// Minimum n-gram length. Service default 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_gram: Option<i32>,
    /// Maximum n-gram length. Service default 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gram: Option<i32>,
    /// Character classes to keep in tokens.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub token_chars: Vec<TokenCharacterKind>,
}

impl NGramTokenizer {
    /// Create an n-gram tokenizer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_gram: None,
            max_gram: None,
            token_chars: Vec::new(),
        }
    }
}

impl_variant!(NGramTokenizer => ["#Microsoft.Azure.Search.NGramTokenizer"], named);

/// Tokenizer for path-like hierarchies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathHierarchyTokenizer {
    /// Tokenizer name.
    pub name: String,
    /// Delimiter character. Service default `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,
    /// Replacement for the delimiter. Service default `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<char>,
    /// Maximum token length. Service default 300.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token_length: Option<i32>,
    /// Whether to emit tokens in reverse order.
    #[serde(rename = "reverse", skip_serializing_if = "Option::is_none")]
    pub reverse_token_order: Option<bool>,
    /// Number of initial tokens to skip.
    #[serde(rename = "skip", skip_serializing_if = "Option::is_none")]
    pub number_of_tokens_to_skip: Option<i32>,
}

impl PathHierarchyTokenizer {
    /// Create a path hierarchy tokenizer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delimiter: None,
            replacement: None,
            max_token_length: None,
            reverse_token_order: None,
            number_of_tokens_to_skip: None,
        }
    }
}

impl_variant!(PathHierarchyTokenizer => ["#Microsoft.Azure.Search.PathHierarchyTokenizerV2"], named);

/// Uses regex pattern matching to construct distinct tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternTokenizer {
    /// Tokenizer name.
    pub name: String,
    /// Token separator pattern. Service default `\W+`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// `|`-separated regex flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    /// Matching group to extract into tokens; `-1` splits on the pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<i32>,
}

impl PatternTokenizer {
    /// Create a pattern tokenizer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: None,
            flags: None,
            group: None,
        }
    }
}

impl_variant!(PatternTokenizer => ["#Microsoft.Azure.Search.PatternTokenizer"], named);

/// Breaks text following the Unicode Text Segmentation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuceneStandardTokenizer {
    /// Tokenizer name.
    pub name: String,
    /// Maximum token length. Service default 255, maximum 300.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token_length: Option<i32>,
}

impl LuceneStandardTokenizer {
    /// Create a standard tokenizer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_token_length: None,
        }
    }
}

impl_variant!(LuceneStandardTokenizer => ["#Microsoft.Azure.Search.StandardTokenizerV2"], named);

/// Legacy standard tokenizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuceneStandardTokenizerV1 {
    /// Tokenizer name.
    pub name: String,
    /// Maximum token length. Service default 255.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token_length: Option<i32>,
}

impl LuceneStandardTokenizerV1 {
    /// Create a legacy standard tokenizer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_token_length: None,
        }
    }
}

impl_variant!(LuceneStandardTokenizerV1 => ["#Microsoft.Azure.Search.StandardTokenizer"], named);

/// Tokenizes URLs and emails as one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UaxUrlEmailTokenizer {
    /// Tokenizer name.
    pub name: String,
    /// Maximum token length. Service default 255.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token_length: Option<i32>,
}

impl UaxUrlEmailTokenizer {
    /// Create a URL/email tokenizer with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_token_length: None,
        }
    }
}

impl_variant!(UaxUrlEmailTokenizer => ["#Microsoft.Azure.Search.UaxUrlEmailTokenizer"], named);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polymorphic::assert_round_trips;
    use serde_json::json;

    #[test]
    fn test_every_tokenizer_round_trips() {
        assert_round_trips!(LexicalTokenizer, [
            json!({"@odata.type": "#Microsoft.Azure.Search.ClassicTokenizer", "name": "classic", "maxTokenLength": 255}),
            json!({
                "@odata.type": "#Microsoft.Azure.Search.EdgeNGramTokenizer",
                "name": "edge",
                "minGram": 1,
                "maxGram": 2,
                "tokenChars": ["letter", "punctuation"]
            }),
            json!({"@odata.type": "#Microsoft.Azure.Search.KeywordTokenizerV2", "name": "kw", "maxTokenLength": 100}),
            json!({"@odata.type": "#Microsoft.Azure.Search.KeywordTokenizer", "name": "kw_legacy", "bufferSize": 512}),
            json!({
                "@odata.type": "#Microsoft.Azure.Search.MicrosoftLanguageTokenizer",
                "name": "ms_en",
                "maxTokenLength": 200,
                "isSearchTokenizer": true,
                "language": "english"
            }),
            json!({
                "@odata.type": "#Microsoft.Azure.Search.MicrosoftLanguageStemmingTokenizer",
                "name": "stem_fr",
                "isSearchTokenizer": false,
                "language": "french"
            }),
            json!({
                "@odata.type": "#Microsoft.Azure.Search.NGramTokenizer",
                "name": "ngram",
                "minGram": 3,
                "maxGram": 3,
                "tokenChars": ["digit", "symbol", "whitespace"]
            }),
            json!({
                "@odata.type": "#Microsoft.Azure.Search.PathHierarchyTokenizerV2",
                "name": "paths",
                "delimiter": "/",
                "replacement": "|",
                "maxTokenLength": 300,
                "reverse": true,
                "skip": 1
            }),
            json!({"@odata.type": "#Microsoft.Azure.Search.PatternTokenizer", "name": "pattern", "pattern": ",", "flags": "CASE_INSENSITIVE", "group": -1}),
            json!({"@odata.type": "#Microsoft.Azure.Search.StandardTokenizerV2", "name": "std", "maxTokenLength": 255}),
            json!({"@odata.type": "#Microsoft.Azure.Search.StandardTokenizer", "name": "std1"}),
            json!({"@odata.type": "#Microsoft.Azure.Search.UaxUrlEmailTokenizer", "name": "uax", "maxTokenLength": 50}),
        ]);
    }

    #[test]
    fn test_keyword_tokenizer_versions_are_distinct() {
        let v2 = serde_json::json!({
            "@odata.type": "#Microsoft.Azure.Search.KeywordTokenizerV2",
            "name": "kw",
            "maxTokenLength": 100
        });
        let v1 = serde_json::json!({
            "@odata.type": "#Microsoft.Azure.Search.KeywordTokenizer",
            "name": "kw_legacy",
            "bufferSize": 512
        });

        let parsed_v2: LexicalTokenizer = serde_json::from_value(v2.clone()).unwrap();
        let parsed_v1: LexicalTokenizer = serde_json::from_value(v1.clone()).unwrap();

        assert!(matches!(parsed_v2, LexicalTokenizer::Keyword(ref t) if t.max_token_length == Some(100)));
        assert!(matches!(parsed_v1, LexicalTokenizer::KeywordV1(ref t) if t.buffer_size == Some(512)));
        assert_eq!(serde_json::to_value(&parsed_v2).unwrap(), v2);
        assert_eq!(serde_json::to_value(&parsed_v1).unwrap(), v1);
    }

    #[test]
    fn test_standard_tokenizer_versions() {
        let current = LexicalTokenizer::from(LuceneStandardTokenizer::new("std"));
        let legacy = LexicalTokenizer::from(LuceneStandardTokenizerV1::new("std1"));
        assert_eq!(current.discriminator(), "#Microsoft.Azure.Search.StandardTokenizerV2");
        assert_eq!(legacy.discriminator(), "#Microsoft.Azure.Search.StandardTokenizer");
    }

    #[test]
    fn test_path_hierarchy_wire_names() {
        let mut tokenizer = PathHierarchyTokenizer::new("paths");
        tokenizer.delimiter = Some('\\');
        tokenizer.reverse_token_order = Some(true);
        tokenizer.number_of_tokens_to_skip = Some(1);

        let json = serde_json::to_value(LexicalTokenizer::from(tokenizer)).unwrap();
        assert_eq!(json["@odata.type"], "#Microsoft.Azure.Search.PathHierarchyTokenizerV2");
        assert_eq!(json["delimiter"], "\\");
        assert_eq!(json["reverse"], true);
        assert_eq!(json["skip"], 1);
    }

    #[test]
    fn test_microsoft_language_tokenizer_round_trip() {
        let json = serde_json::json!({
            "@odata.type": "#Microsoft.Azure.Search.MicrosoftLanguageStemmingTokenizer",
            "name": "stem_fr",
            "isSearchTokenizer": false,
            "language": "french"
        });
        let tokenizer: LexicalTokenizer = serde_json::from_value(json.clone()).unwrap();
        match &tokenizer {
            LexicalTokenizer::MicrosoftLanguageStemming(t) => {
                assert_eq!(t.language, Some(MicrosoftStemmingTokenizerLanguage::French));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(serde_json::to_value(&tokenizer).unwrap(), json);
    }

    #[test]
    fn test_edge_ngram_token_chars() {
        let mut tokenizer = EdgeNGramTokenizer::new("prefix");
        tokenizer.min_gram = Some(2);
        tokenizer.max_gram = Some(10);
        tokenizer.token_chars = vec![TokenCharacterKind::Letter, TokenCharacterKind::Digit];

        let json = serde_json::to_value(LexicalTokenizer::from(tokenizer)).unwrap();
        assert_eq!(json["tokenChars"], serde_json::json!(["letter", "digit"]));
        assert_eq!(json["minGram"], 2);
    }
}
