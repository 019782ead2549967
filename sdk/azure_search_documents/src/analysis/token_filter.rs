use serde::{Deserialize, Serialize};

use crate::polymorphic::{impl_variant, polymorphic_family, ODATA_TYPE};

polymorphic_family! {
    /// A token filter defined on an index.
    pub enum TokenFilter tagged ODATA_TYPE => {
        /// ASCII folding.
        AsciiFolding(AsciiFoldingTokenFilter),
        /// CJK bigrams.
        CjkBigram(CjkBigramTokenFilter),
        /// Common-term bigrams.
        CommonGram(CommonGramTokenFilter),
        /// Compound word decomposition.
        DictionaryDecompounder(DictionaryDecompounderTokenFilter),
        /// Edge n-grams.
        EdgeNGram(EdgeNGramTokenFilter),
        /// Edge n-grams (legacy form).
        EdgeNGramV1(EdgeNGramTokenFilterV1),
        /// Elision removal.
        Elision(ElisionTokenFilter),
        /// Keep-list.
        Keep(KeepTokenFilter),
        /// Keyword marking.
        KeywordMarker(KeywordMarkerTokenFilter),
        /// Length bounds.
        Length(LengthTokenFilter),
        /// Token count limit.
        Limit(LimitTokenFilter),
        /// N-grams.
        NGram(NGramTokenFilter),
        /// N-grams (legacy form).
        NGramV1(NGramTokenFilterV1),
        /// Regex capture.
        PatternCapture(PatternCaptureTokenFilter),
        /// Regex replace.
        PatternReplace(PatternReplaceTokenFilter),
        /// Phonetic encoding.
        Phonetic(PhoneticTokenFilter),
        /// Shingles.
        Shingle(ShingleTokenFilter),
        /// Snowball stemming.
        Snowball(SnowballTokenFilter),
        /// Language-specific stemming.
        Stemmer(StemmerTokenFilter),
        /// Dictionary stemming overrides.
        StemmerOverride(StemmerOverrideTokenFilter),
        /// Stopword removal.
        Stopwords(StopwordsTokenFilter),
        /// Synonyms.
        Synonym(SynonymTokenFilter),
        /// Term truncation.
        Truncate(TruncateTokenFilter),
        /// Duplicate removal.
        Unique(UniqueTokenFilter),
        /// Subword splitting.
        WordDelimiter(WordDelimiterTokenFilter),
    }
}

azure_sdk_core::expandable_enum! {
    /// Scripts ignored by [`CjkBigramTokenFilter`].
    pub enum CjkBigramTokenFilterScripts {
        /// Han (Chinese).
        Han => "han",
        /// Hiragana.
        Hiragana => "hiragana",
        /// Katakana.
        Katakana => "katakana",
        /// Hangul.
        Hangul => "hangul",
    }
}

azure_sdk_core::expandable_enum! {
    /// Which side of the input an edge n-gram is generated from.
    pub enum EdgeNGramTokenFilterSide {
        /// The front of the input.
        Front => "front",
        /// The back of the input.
        Back => "back",
    }
}

azure_sdk_core::expandable_enum! {
    /// Phonetic encoders for [`PhoneticTokenFilter`].
    pub enum PhoneticEncoder {
        /// Metaphone.
        Metaphone => "metaphone",
        /// Double metaphone.
        DoubleMetaphone => "doubleMetaphone",
        /// Soundex.
        Soundex => "soundex",
        /// Refined Soundex.
        RefinedSoundex => "refinedSoundex",
        /// Caverphone 1.0.
        Caverphone1 => "caverphone1",
        /// Caverphone 2.0.
        Caverphone2 => "caverphone2",
        /// Cologne phonetic.
        Cologne => "cologne",
        /// NYSIIS.
        Nysiis => "nysiis",
        /// Kölner Phonetik.
        KoelnerPhonetik => "koelnerPhonetik",
        /// Haase Phonetik.
        HaasePhonetik => "haasePhonetik",
        /// Beider-Morse.
        BeiderMorse => "beiderMorse",
    }
}

azure_sdk_core::expandable_enum! {
    /// Languages for [`SnowballTokenFilter`].
    pub enum SnowballTokenFilterLanguage {
        /// Armenian.
        Armenian => "armenian",
        /// Basque.
        Basque => "basque",
        /// Catalan.
        Catalan => "catalan",
        /// Danish.
        Danish => "danish",
        /// Dutch.
        Dutch => "dutch",
        /// English.
        English => "english",
        /// Finnish.
        Finnish => "finnish",
        /// French.
        French => "french",
        /// German.
        German => "german",
        /// German variant with umlaut folding.
        German2 => "german2",
        /// Hungarian.
        Hungarian => "hungarian",
        /// Italian.
        Italian => "italian",
        /// Dutch (Kraaij-Pohlmann).
        Kp => "kp",
        /// English (Lovins).
        Lovins => "lovins",
        /// Norwegian.
        Norwegian => "norwegian",
        /// English (Porter).
        Porter => "porter",
        /// Portuguese.
        Portuguese => "portuguese",
        /// Romanian.
        Romanian => "romanian",
        /// Russian.
        Russian => "russian",
        /// Spanish.
        Spanish => "spanish",
        /// Swedish.
        Swedish => "swedish",
        /// Turkish.
        Turkish => "turkish",
    }
}

azure_sdk_core::expandable_enum! {
    /// Languages for [`StemmerTokenFilter`].
    pub enum StemmerTokenFilterLanguage {
        /// Arabic.
        Arabic => "arabic",
        /// Armenian.
        Armenian => "armenian",
        /// Basque.
        Basque => "basque",
        /// Brazilian Portuguese.
        Brazilian => "brazilian",
        /// Bulgarian.
        Bulgarian => "bulgarian",
        /// Catalan.
        Catalan => "catalan",
        /// Czech.
        Czech => "czech",
        /// Danish.
        Danish => "danish",
        /// Dutch.
        Dutch => "dutch",
        /// Dutch (Kraaij-Pohlmann).
        DutchKp => "dutchKp",
        /// English.
        English => "english",
        /// Light English.
        LightEnglish => "lightEnglish",
        /// Minimal English.
        MinimalEnglish => "minimalEnglish",
        /// English possessive removal.
        PossessiveEnglish => "possessiveEnglish",
        /// English (Porter2).
        Porter2 => "porter2",
        /// English (Lovins).
        Lovins => "lovins",
        /// Finnish.
        Finnish => "finnish",
        /// Light Finnish.
        LightFinnish => "lightFinnish",
        /// French.
        French => "french",
        /// Light French.
        LightFrench => "lightFrench",
        /// Minimal French.
        MinimalFrench => "minimalFrench",
        /// Galician.
        Galician => "galician",
        /// German.
        German => "german",
        /// German variant with umlaut folding.
        German2 => "german2",
        /// Light German.
        LightGerman => "lightGerman",
        /// Minimal German.
        MinimalGerman => "minimalGerman",
        /// Greek.
        Greek => "greek",
        /// Hindi.
        Hindi => "hindi",
        /// Hungarian.
        Hungarian => "hungarian",
        /// Indonesian.
        Indonesian => "indonesian",
        /// Irish.
        Irish => "irish",
        /// Italian.
        Italian => "italian",
        /// Latvian.
        Latvian => "latvian",
        /// Norwegian.
        Norwegian => "norwegian",
        /// Portuguese.
        Portuguese => "portuguese",
        /// Light Portuguese.
        LightPortuguese => "lightPortuguese",
        /// Romanian.
        Romanian => "romanian",
        /// Russian.
        Russian => "russian",
        /// Light Russian.
        LightRussian => "lightRussian",
        /// Spanish.
        Spanish => "spanish",
        /// Light Spanish.
        LightSpanish => "lightSpanish",
        /// Swedish.
        Swedish => "swedish",
        /// Light Swedish.
        LightSwedish => "lightSwedish",
        /// Turkish.
        Turkish => "turkish",
    }
}

azure_sdk_core::expandable_enum! {
    /// Predefined stopword lists for [`StopwordsTokenFilter`].
    pub enum StopwordsList {
        /// Arabic.
        Arabic => "arabic",
        /// Armenian.
        Armenian => "armenian",
        /// Basque.
        Basque => "basque",
        /// Brazilian Portuguese.
        Brazilian => "brazilian",
        /// Bulgarian.
        Bulgarian => "bulgarian",
        /// Catalan.
        Catalan => "catalan",
        /// Czech.
        Czech => "czech",
        /// Danish.
        Danish => "danish",
        /// Dutch.
        Dutch => "dutch",
        /// English.
        English => "english",
        /// Finnish.
        Finnish => "finnish",
        /// French.
        French => "french",
        /// Galician.
        Galician => "galician",
        /// German.
        German => "german",
        /// Greek.
        Greek => "greek",
        /// Hindi.
        Hindi => "hindi",
        /// Hungarian.
        Hungarian => "hungarian",
        /// Indonesian.
        Indonesian => "indonesian",
        /// Irish.
        Irish => "irish",
        /// Italian.
        Italian => "italian",
        /// Latvian.
        Latvian => "latvian",
        /// Norwegian.
        Norwegian => "norwegian",
        /// Persian.
        Persian => "persian",
        /// Portuguese.
        Portuguese => "portuguese",
        /// Romanian.
        Romanian => "romanian",
        /// Russian.
        Russian => "russian",
        /// Sorani.
        Sorani => "sorani",
        /// Spanish.
        Spanish => "spanish",
        /// Swedish.
        Swedish => "swedish",
        /// Thai.
        Thai => "thai",
        /// Turkish.
        Turkish => "turkish",
    }
}

/// Converts alphabetic, numeric and symbolic Unicode characters outside the
/// Basic Latin block into their ASCII equivalents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsciiFoldingTokenFilter {
    /// Filter name.
    pub name: String,
    /// Whether the original token is kept as well.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_original: Option<bool>,
}

impl AsciiFoldingTokenFilter {
    /// Create an ASCII folding filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preserve_original: None,
        }
    }
}

impl_variant!(AsciiFoldingTokenFilter => ["#Microsoft.Azure.Search.AsciiFoldingTokenFilter"], named);

/// Forms bigrams of CJK terms generated from the standard tokenizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CjkBigramTokenFilter {
    /// Filter name.
    pub name: String,
    /// Scripts to ignore.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_scripts: Vec<CjkBigramTokenFilterScripts>,
    /// Whether to output unigrams as well as bigrams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_unigrams: Option<bool>,
}

impl CjkBigramTokenFilter {
    /// Create a CJK bigram filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ignore_scripts: Vec::new(),
            output_unigrams: None,
        }
    }
}

impl_variant!(CjkBigramTokenFilter => ["#Microsoft.Azure.Search.CjkBigramTokenFilter"], named);

/// Constructs bigrams for frequently occurring terms while indexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonGramTokenFilter {
    /// Filter name.
    pub name: String,
    /// The set of common words.
    pub common_words: Vec<String>,
    /// Whether common word matching is case-insensitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
    /// Whether the filter runs in query mode.
    #[serde(rename = "queryMode", skip_serializing_if = "Option::is_none")]
    pub use_query_mode: Option<bool>,
}

impl CommonGramTokenFilter {
    /// Create a common-grams filter over `common_words`.
    pub fn new(name: impl Into<String>, common_words: Vec<String>) -> Self {
        Self {
            name: name.into(),
            common_words,
            ignore_case: None,
            use_query_mode: None,
        }
    }
}

impl_variant!(CommonGramTokenFilter => ["#Microsoft.Azure.Search.CommonGramTokenFilter"], named);

/// Decomposes compound words found in many Germanic languages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryDecompounderTokenFilter {
    /// Filter name.
    pub name: String,
    /// Words to match against.
    pub word_list: Vec<String>,
    /// Minimum word size to process. Service default 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_word_size: Option<i32>,
    /// Minimum subword size. Service default 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_subword_size: Option<i32>,
    /// Maximum subword size. Service default 15.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_subword_size: Option<i32>,
    /// Whether only the longest matching subword is emitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_longest_match: Option<bool>,
}

impl DictionaryDecompounderTokenFilter {
    /// Create a decompounder over `word_list`.
    pub fn new(name: impl Into<String>, word_list: Vec<String>) -> Self {
        Self {
            name: name.into(),
            word_list,
            min_word_size: None,
            min_subword_size: None,
            max_subword_size: None,
            only_longest_match: None,
        }
    }
}

impl_variant!(
    DictionaryDecompounderTokenFilter => ["#Microsoft.Azure.Search.DictionaryDecompounderTokenFilter"],
    named
);

/// Generates n-grams starting from the front or back of an input token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeNGramTokenFilter {
    /// Filter name.
    pub name: String,
    /// Minimum n-gram length. Service default 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_gram: Option<i32>,
    /// Maximum n-gram length. Service default 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gram: Option<i32>,
    /// Side to generate from. Service default front.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<EdgeNGramTokenFilterSide>,
}

impl EdgeNGramTokenFilter {
    /// Create an edge n-gram filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_gram: None,
            max_gram: None,
            side: None,
        }
    }
}

impl_variant!(EdgeNGramTokenFilter => ["#Microsoft.Azure.Search.EdgeNGramTokenFilterV2"], named);

/// Legacy edge n-gram filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeNGramTokenFilterV1 {
    /// Filter name.
    pub name: String,
    /// Minimum n-gram length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_gram: Option<i32>,
    /// Maximum n-gram length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gram: Option<i32>,
    /// Side to generate from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<EdgeNGramTokenFilterSide>,
}

impl EdgeNGramTokenFilterV1 {
    /// Create a legacy edge n-gram filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_gram: None,
            max_gram: None,
            side: None,
        }
    }
}

impl_variant!(EdgeNGramTokenFilterV1 => ["#Microsoft.Azure.Search.EdgeNGramTokenFilter"], named);

/// Removes elisions, e.g. "l'avion" becomes "avion".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElisionTokenFilter {
    /// Filter name.
    pub name: String,
    /// Articles to remove.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub articles: Vec<String>,
}

impl ElisionTokenFilter {
    /// Create an elision filter with no articles.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            articles: Vec::new(),
        }
    }
}

impl_variant!(ElisionTokenFilter => ["#Microsoft.Azure.Search.ElisionTokenFilter"], named);

/// Keeps only tokens contained in a list of words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeepTokenFilter {
    /// Filter name.
    pub name: String,
    /// Words to keep.
    pub keep_words: Vec<String>,
    /// Whether to lowercase all words first.
    #[serde(rename = "keepWordsCase", skip_serializing_if = "Option::is_none")]
    pub lower_case_keep_words: Option<bool>,
}

impl KeepTokenFilter {
    /// Create a keep filter over `keep_words`.
    pub fn new(name: impl Into<String>, keep_words: Vec<String>) -> Self {
        Self {
            name: name.into(),
            keep_words,
            lower_case_keep_words: None,
        }
    }
}

impl_variant!(KeepTokenFilter => ["#Microsoft.Azure.Search.KeepTokenFilter"], named);

/// Marks terms as keywords so stemmers leave them alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMarkerTokenFilter {
    /// Filter name.
    pub name: String,
    /// Words to mark.
    pub keywords: Vec<String>,
    /// Whether matching is case-insensitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
}

impl KeywordMarkerTokenFilter {
    /// Create a keyword marker over `keywords`.
    pub fn new(name: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            name: name.into(),
            keywords,
            ignore_case: None,
        }
    }
}

impl_variant!(KeywordMarkerTokenFilter => ["#Microsoft.Azure.Search.KeywordMarkerTokenFilter"], named);

/// Removes words that are too long or too short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthTokenFilter {
    /// Filter name.
    pub name: String,
    /// Minimum length in characters.
    #[serde(rename = "min", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i32>,
    /// Maximum length in characters.
    #[serde(rename = "max", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i32>,
}

impl LengthTokenFilter {
    /// Create a length filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_length: None,
            max_length: None,
        }
    }
}

impl_variant!(LengthTokenFilter => ["#Microsoft.Azure.Search.LengthTokenFilter"], named);

/// Limits the number of tokens while indexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitTokenFilter {
    /// Filter name.
    pub name: String,
    /// Maximum number of tokens. Service default 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token_count: Option<i32>,
    /// Whether all tokens are consumed even past the limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consume_all_tokens: Option<bool>,
}

impl LimitTokenFilter {
    /// Create a limit filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_token_count: None,
            consume_all_tokens: None,
        }
    }
}

impl_variant!(LimitTokenFilter => ["#Microsoft.Azure.Search.LimitTokenFilter"], named);

/// Generates n-grams of the given size(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NGramTokenFilter {
    /// Filter name.
    pub name: String,
    /// Minimum n-gram length. Service default 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_gram: Option<i32>,
    /// Maximum n-gram length. Service default 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gram: Option<i32>,
}

impl NGramTokenFilter {
    /// Create an n-gram filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_gram: None,
            max_gram: None,
        }
    }
}

impl_variant!(NGramTokenFilter => ["#Microsoft.Azure.Search.NGramTokenFilterV2"], named);

/// Legacy n-gram filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NGramTokenFilterV1 {
    /// Filter name.
    pub name: String,
    /// Minimum n-gram length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_gram: Option<i32>,
    /// Maximum n-gram length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_gram: Option<i32>,
}

impl NGramTokenFilterV1 {
    /// Create a legacy n-gram filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_gram: None,
            max_gram: None,
        }
    }
}

impl_variant!(NGramTokenFilterV1 => ["#Microsoft.Azure.Search.NGramTokenFilter"], named);

/// Emits one token per capture group of one or more patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternCaptureTokenFilter {
    /// Filter name.
    pub name: String,
    /// Patterns to match.
    pub patterns: Vec<String>,
    /// Whether the original token is kept even if a pattern matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_original: Option<bool>,
}

impl PatternCaptureTokenFilter {
    /// Create a pattern capture filter over `patterns`.
    pub fn new(name: impl Into<String>, patterns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            patterns,
            preserve_original: None,
        }
    }
}

impl_variant!(PatternCaptureTokenFilter => ["#Microsoft.Azure.Search.PatternCaptureTokenFilter"], named);

/// Replaces characters in tokens matching a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternReplaceTokenFilter {
    /// Filter name.
    pub name: String,
    /// Pattern to match.
    pub pattern: String,
    /// Replacement text.
    pub replacement: String,
}

impl PatternReplaceTokenFilter {
    /// Create a pattern replace filter.
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

impl_variant!(PatternReplaceTokenFilter => ["#Microsoft.Azure.Search.PatternReplaceTokenFilter"], named);

/// Creates tokens for phonetic matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneticTokenFilter {
    /// Filter name.
    pub name: String,
    /// Phonetic encoder. Service default metaphone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoder: Option<PhoneticEncoder>,
    /// Whether encoded tokens replace the originals.
    #[serde(rename = "replace", skip_serializing_if = "Option::is_none")]
    pub replace_original_tokens: Option<bool>,
}

impl PhoneticTokenFilter {
    /// Create a phonetic filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            encoder: None,
            replace_original_tokens: None,
        }
    }
}

impl_variant!(PhoneticTokenFilter => ["#Microsoft.Azure.Search.PhoneticTokenFilter"], named);

/// Creates combinations of tokens as a single token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShingleTokenFilter {
    /// Filter name.
    pub name: String,
    /// Maximum shingle size. Service default 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_shingle_size: Option<i32>,
    /// Minimum shingle size. Service default 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_shingle_size: Option<i32>,
    /// Whether unigrams are emitted too.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_unigrams: Option<bool>,
    /// Whether unigrams are emitted when no shingles are available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_unigrams_if_no_shingles: Option<bool>,
    /// String joining adjacent tokens. Service default a single space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_separator: Option<String>,
    /// String inserted for positions without a token. Service default `_`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_token: Option<String>,
}

impl ShingleTokenFilter {
    /// Create a shingle filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_shingle_size: None,
            min_shingle_size: None,
            output_unigrams: None,
            output_unigrams_if_no_shingles: None,
            token_separator: None,
            filter_token: None,
        }
    }
}

impl_variant!(ShingleTokenFilter => ["#Microsoft.Azure.Search.ShingleTokenFilter"], named);

/// Stems words using a Snowball-generated stemmer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowballTokenFilter {
    /// Filter name.
    pub name: String,
    /// Stemmer language.
    pub language: SnowballTokenFilterLanguage,
}

impl SnowballTokenFilter {
    /// Create a Snowball filter for `language`.
    pub fn new(name: impl Into<String>, language: SnowballTokenFilterLanguage) -> Self {
        Self {
            name: name.into(),
            language,
        }
    }
}

impl_variant!(SnowballTokenFilter => ["#Microsoft.Azure.Search.SnowballTokenFilter"], named);

/// Language-specific stemming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StemmerTokenFilter {
    /// Filter name.
    pub name: String,
    /// Stemmer language.
    pub language: StemmerTokenFilterLanguage,
}

impl StemmerTokenFilter {
    /// Create a stemmer for `language`.
    pub fn new(name: impl Into<String>, language: StemmerTokenFilterLanguage) -> Self {
        Self {
            name: name.into(),
            language,
        }
    }
}

impl_variant!(StemmerTokenFilter => ["#Microsoft.Azure.Search.StemmerTokenFilter"], named);

/// Overrides other stemming filters with dictionary-based stemming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StemmerOverrideTokenFilter {
    /// Filter name.
    pub name: String,
    /// Rules in the form `word => stem`.
    pub rules: Vec<String>,
}

impl StemmerOverrideTokenFilter {
    /// Create a stemmer override with `rules`.
    pub fn new(name: impl Into<String>, rules: Vec<String>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }
}

impl_variant!(StemmerOverrideTokenFilter => ["#Microsoft.Azure.Search.StemmerOverrideTokenFilter"], named);

/// Removes stop words from a token stream.
///
/// Set either `stopwords` or `stopwords_list`, not both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopwordsTokenFilter {
    /// Filter name.
    pub name: String,
    /// Explicit stopwords.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stopwords: Vec<String>,
    /// A predefined stopword list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopwords_list: Option<StopwordsList>,
    /// Whether matching is case-insensitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
    /// Whether the last search term is ignored if it is a stopword.
    #[serde(rename = "removeTrailing", skip_serializing_if = "Option::is_none")]
    pub remove_trailing_stop_words: Option<bool>,
}

impl StopwordsTokenFilter {
    /// Create a stopwords filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stopwords: Vec::new(),
            stopwords_list: None,
            ignore_case: None,
            remove_trailing_stop_words: None,
        }
    }
}

impl_variant!(StopwordsTokenFilter => ["#Microsoft.Azure.Search.StopwordsTokenFilter"], named);

/// Matches single or multi-word synonyms in a token stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynonymTokenFilter {
    /// Filter name.
    pub name: String,
    /// Synonym rules, e.g. `incredible, unbelievable` or `a => b`.
    pub synonyms: Vec<String>,
    /// Whether matching is case-insensitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
    /// Whether equivalent synonyms map to each other.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<bool>,
}

impl SynonymTokenFilter {
    /// Create a synonym filter with `synonyms`.
    pub fn new(name: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            name: name.into(),
            synonyms,
            ignore_case: None,
            expand: None,
        }
    }
}

impl_variant!(SynonymTokenFilter => ["#Microsoft.Azure.Search.SynonymTokenFilter"], named);

/// Truncates terms to a specific length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruncateTokenFilter {
    /// Filter name.
    pub name: String,
    /// Length at which terms are truncated. Service default 300.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
}

impl TruncateTokenFilter {
    /// Create a truncate filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length: None,
        }
    }
}

impl_variant!(TruncateTokenFilter => ["#Microsoft.Azure.Search.TruncateTokenFilter"], named);

/// Filters out tokens with the same text as the previous token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueTokenFilter {
    /// Filter name.
    pub name: String,
    /// Whether duplicates are only removed at the same position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_on_same_position: Option<bool>,
}

impl UniqueTokenFilter {
    /// Create a unique filter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            only_on_same_position: None,
        }
    }
}

impl_variant!(UniqueTokenFilter => ["#Microsoft.Azure.Search.UniqueTokenFilter"], named);

/// Splits words into subwords and optionally transforms subword groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDelimiterTokenFilter {
    /// Filter name.
    pub name: String,
    /// Whether parts of words are generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_word_parts: Option<bool>,
    /// Whether number subwords are generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_number_parts: Option<bool>,
    /// Whether runs of word parts are catenated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catenate_words: Option<bool>,
    /// Whether runs of number parts are catenated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catenate_numbers: Option<bool>,
    /// Whether all subword parts are catenated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catenate_all: Option<bool>,
    /// Whether words are split on case changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_on_case_change: Option<bool>,
    /// Whether the original word is kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_original: Option<bool>,
    /// Whether words are split on numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_on_numerics: Option<bool>,
    /// Whether trailing `'s` is removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_english_possessive: Option<bool>,
    /// Tokens protected from being delimited.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub protected_words: Vec<String>,
}

impl WordDelimiterTokenFilter {
    /// Create a word delimiter with service defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl_variant!(WordDelimiterTokenFilter => ["#Microsoft.Azure.Search.WordDelimiterTokenFilter"], named);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polymorphic::assert_round_trips;
    use serde_json::json;

    #[test]
    fn test_unknown_token_filter_is_preserved() {
        let json = serde_json::json!({
            "@odata.type": "#Microsoft.Azure.Search.FancyNewTokenFilter",
            "name": "fancy",
            "sparkle": 11
        });
        let filter: TokenFilter = serde_json::from_value(json.clone()).expect("should not fail");

        assert!(filter.is_unknown());
        assert_eq!(filter.name(), Some("fancy"));
        assert_eq!(filter.discriminator(), "#Microsoft.Azure.Search.FancyNewTokenFilter");
        match &filter {
            TokenFilter::Unknown(raw) => assert_eq!(raw.properties["sparkle"], 11),
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(serde_json::to_value(&filter).unwrap(), json);
    }

    #[test]
    fn test_every_token_filter_round_trips() {
        assert_round_trips!(TokenFilter, [
            json!({"@odata.type": "#Microsoft.Azure.Search.AsciiFoldingTokenFilter", "name": "fold", "preserveOriginal": true}),
            json!({"@odata.type": "#Microsoft.Azure.Search.CjkBigramTokenFilter", "name": "cjk", "ignoreScripts": ["han", "hangul"], "outputUnigrams": true}),
            json!({"@odata.type": "#Microsoft.Azure.Search.CommonGramTokenFilter", "name": "common", "commonWords": ["the"], "ignoreCase": true, "queryMode": false}),
            json!({
                "@odata.type": "#Microsoft.Azure.Search.DictionaryDecompounderTokenFilter",
                "name": "decomp",
                "wordList": ["Donau", "dampf"],
                "minWordSize": 5,
                "minSubwordSize": 2,
                "maxSubwordSize": 15,
                "onlyLongestMatch": true
            }),
            json!({"@odata.type": "#Microsoft.Azure.Search.EdgeNGramTokenFilterV2", "name": "edge2", "minGram": 1, "maxGram": 3, "side": "front"}),
            json!({"@odata.type": "#Microsoft.Azure.Search.EdgeNGramTokenFilter", "name": "edge1", "side": "back"}),
            json!({"@odata.type": "#Microsoft.Azure.Search.ElisionTokenFilter", "name": "elide", "articles": ["l", "d"]}),
            json!({"@odata.type": "#Microsoft.Azure.Search.KeepTokenFilter", "name": "keep", "keepWords": ["azure"], "keepWordsCase": true}),
            json!({"@odata.type": "#Microsoft.Azure.Search.KeywordMarkerTokenFilter", "name": "mark", "keywords": ["running"], "ignoreCase": false}),
            json!({"@odata.type": "#Microsoft.Azure.Search.LengthTokenFilter", "name": "len", "min": 2, "max": 40}),
            json!({"@odata.type": "#Microsoft.Azure.Search.LimitTokenFilter", "name": "limit", "maxTokenCount": 5, "consumeAllTokens": true}),
            json!({"@odata.type": "#Microsoft.Azure.Search.NGramTokenFilterV2", "name": "ngram2", "minGram": 2, "maxGram": 4}),
            json!({"@odata.type": "#Microsoft.Azure.Search.NGramTokenFilter", "name": "ngram1", "maxGram": 2}),
            json!({"@odata.type": "#Microsoft.Azure.Search.PatternCaptureTokenFilter", "name": "capture", "patterns": ["(\\d+)"], "preserveOriginal": false}),
            json!({"@odata.type": "#Microsoft.Azure.Search.PatternReplaceTokenFilter", "name": "replace", "pattern": "-", "replacement": " "}),
            json!({"@odata.type": "#Microsoft.Azure.Search.PhoneticTokenFilter", "name": "sound", "encoder": "doubleMetaphone", "replace": false}),
            json!({
                "@odata.type": "#Microsoft.Azure.Search.ShingleTokenFilter",
                "name": "shingle",
                "maxShingleSize": 3,
                "minShingleSize": 2,
                "outputUnigrams": true,
                "outputUnigramsIfNoShingles": false,
                "tokenSeparator": " ",
                "filterToken": "_"
            }),
            json!({"@odata.type": "#Microsoft.Azure.Search.SnowballTokenFilter", "name": "snow", "language": "german2"}),
            json!({"@odata.type": "#Microsoft.Azure.Search.StemmerTokenFilter", "name": "stem", "language": "lightEnglish"}),
            json!({"@odata.type": "#Microsoft.Azure.Search.StemmerOverrideTokenFilter", "name": "override", "rules": ["ran => run"]}),
            json!({
                "@odata.type": "#Microsoft.Azure.Search.StopwordsTokenFilter",
                "name": "stop",
                "stopwordsList": "english",
                "ignoreCase": true,
                "removeTrailing": false
            }),
            json!({"@odata.type": "#Microsoft.Azure.Search.SynonymTokenFilter", "name": "syn", "synonyms": ["usa, united states"], "ignoreCase": true, "expand": true}),
            json!({"@odata.type": "#Microsoft.Azure.Search.TruncateTokenFilter", "name": "trunc", "length": 10}),
            json!({"@odata.type": "#Microsoft.Azure.Search.UniqueTokenFilter", "name": "unique", "onlyOnSamePosition": true}),
            json!({
                "@odata.type": "#Microsoft.Azure.Search.WordDelimiterTokenFilter",
                "name": "wd",
                "generateWordParts": true,
                "generateNumberParts": true,
                "catenateWords": false,
                "catenateNumbers": false,
                "catenateAll": false,
                "splitOnCaseChange": true,
                "preserveOriginal": false,
                "splitOnNumerics": true,
                "stemEnglishPossessive": true,
                "protectedWords": ["iPhone"]
            }),
        ]);
    }

    #[test]
    fn test_edge_ngram_versions() {
        let legacy = serde_json::json!({
            "@odata.type": "#Microsoft.Azure.Search.EdgeNGramTokenFilter",
            "name": "edge",
            "side": "back"
        });
        let filter: TokenFilter = serde_json::from_value(legacy).unwrap();
        assert!(matches!(
            filter,
            TokenFilter::EdgeNGramV1(ref f) if f.side == Some(EdgeNGramTokenFilterSide::Back)
        ));

        let current = TokenFilter::from(EdgeNGramTokenFilter::new("edge2"));
        assert_eq!(current.discriminator(), "#Microsoft.Azure.Search.EdgeNGramTokenFilterV2");
    }

    #[test]
    fn test_synonym_filter_serialization() {
        let mut filter = SynonymTokenFilter::new("syn", vec!["usa, united states".into()]);
        filter.expand = Some(true);

        let json = serde_json::to_value(TokenFilter::from(filter)).unwrap();
        assert_eq!(json["@odata.type"], "#Microsoft.Azure.Search.SynonymTokenFilter");
        assert_eq!(json["synonyms"][0], "usa, united states");
        assert_eq!(json["expand"], true);
        assert!(json.get("ignoreCase").is_none());
    }

    #[test]
    fn test_word_delimiter_defaults_are_omitted() {
        let json = serde_json::to_value(TokenFilter::from(WordDelimiterTokenFilter::new("wd"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "@odata.type": "#Microsoft.Azure.Search.WordDelimiterTokenFilter",
                "name": "wd"
            })
        );
    }
}
