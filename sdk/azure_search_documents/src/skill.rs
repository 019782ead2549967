//! Enrichment skills.
//!
//! A skill reads values from the enriched document tree through its
//! [`InputFieldMappingEntry`] list and writes new nodes through its
//! [`OutputFieldMappingEntry`] list. Skills are a polymorphic family keyed on
//! `@odata.type`; see [`SearchIndexerSkill`].
//!
//! ```rust
//! use azure_search_documents::skill::{
//!     InputFieldMappingEntry, OutputFieldMappingEntry, SearchIndexerSkill, SplitSkill, TextSplitMode,
//! };
//!
//! let mut split = SplitSkill::new(
//!     vec![InputFieldMappingEntry::new("text").source("/document/content")],
//!     vec![OutputFieldMappingEntry::new("textItems").target("pages")],
//! );
//! split.text_split_mode = Some(TextSplitMode::Pages);
//! split.maximum_page_length = Some(2000);
//!
//! let skill = SearchIndexerSkill::from(split);
//! assert_eq!(skill.discriminator(), "#Microsoft.Skills.Text.SplitSkill");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::indexing_parameters::{BlobIndexerDataToExtract, BlobIndexerParsingMode};
use crate::polymorphic::{impl_variant, polymorphic_family, ODATA_TYPE};
use crate::versioned_skill::{EntityRecognitionSkill, SentimentSkill};

// ---------------------------------------------------------------------------
// Field mappings
// ---------------------------------------------------------------------------

/// A skill input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFieldMappingEntry {
    /// Input name, as the skill expects it.
    pub name: String,

    /// Source path in the enriched document, e.g. `/document/content`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Context for recursive inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_context: Option<String>,

    /// Nested inputs used to build a complex type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputFieldMappingEntry>,
}

impl InputFieldMappingEntry {
    /// An input with no source yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            source_context: None,
            inputs: Vec::new(),
        }
    }

    /// Set the source path.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the source context.
    pub fn source_context(mut self, context: impl Into<String>) -> Self {
        self.source_context = Some(context.into());
        self
    }

    /// Add a nested input.
    pub fn input(mut self, input: InputFieldMappingEntry) -> Self {
        self.inputs.push(input);
        self
    }
}

/// A skill output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFieldMappingEntry {
    /// Output name, as the skill defines it.
    pub name: String,

    /// Node name in the enriched document. Defaults to `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
}

impl OutputFieldMappingEntry {
    /// An output written under its own name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_name: None,
        }
    }

    /// Write the output under `target`.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target_name = Some(target.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Family
// ---------------------------------------------------------------------------

polymorphic_family! {
    /// A skill in a skillset.
    pub enum SearchIndexerSkill tagged ODATA_TYPE => {
        /// `#Microsoft.Skills.Util.ConditionalSkill`.
        Conditional(ConditionalSkill),
        /// `#Microsoft.Skills.Text.KeyPhraseExtractionSkill`.
        KeyPhraseExtraction(KeyPhraseExtractionSkill),
        /// `#Microsoft.Skills.Vision.OcrSkill`.
        Ocr(OcrSkill),
        /// `#Microsoft.Skills.Vision.ImageAnalysisSkill`.
        ImageAnalysis(ImageAnalysisSkill),
        /// `#Microsoft.Skills.Text.LanguageDetectionSkill`.
        LanguageDetection(LanguageDetectionSkill),
        /// `#Microsoft.Skills.Util.ShaperSkill`.
        Shaper(ShaperSkill),
        /// `#Microsoft.Skills.Text.MergeSkill`.
        Merge(MergeSkill),
        /// Entity recognition, V1 or V3.
        EntityRecognition(EntityRecognitionSkill),
        /// Sentiment analysis, V1 or V3.
        Sentiment(SentimentSkill),
        /// `#Microsoft.Skills.Text.SplitSkill`.
        Split(SplitSkill),
        /// `#Microsoft.Skills.Text.PIIDetectionSkill`.
        PiiDetection(PiiDetectionSkill),
        /// `#Microsoft.Skills.Text.V3.EntityLinkingSkill`.
        EntityLinking(EntityLinkingSkill),
        /// `#Microsoft.Skills.Text.CustomEntityLookupSkill`.
        CustomEntityLookup(CustomEntityLookupSkill),
        /// `#Microsoft.Skills.Text.TranslationSkill`.
        TextTranslation(TextTranslationSkill),
        /// `#Microsoft.Skills.Util.DocumentExtractionSkill`.
        DocumentExtraction(DocumentExtractionSkill),
        /// `#Microsoft.Skills.Custom.WebApiSkill`.
        WebApi(WebApiSkill),
    }
}

impl SearchIndexerSkill {
    /// The skill's inputs. Empty for unknown skills.
    pub fn inputs(&self) -> &[InputFieldMappingEntry] {
        match self {
            Self::Conditional(s) => &s.inputs,
            Self::KeyPhraseExtraction(s) => &s.inputs,
            Self::Ocr(s) => &s.inputs,
            Self::ImageAnalysis(s) => &s.inputs,
            Self::LanguageDetection(s) => &s.inputs,
            Self::Shaper(s) => &s.inputs,
            Self::Merge(s) => &s.inputs,
            Self::EntityRecognition(s) => &s.inputs,
            Self::Sentiment(s) => &s.inputs,
            Self::Split(s) => &s.inputs,
            Self::PiiDetection(s) => &s.inputs,
            Self::EntityLinking(s) => &s.inputs,
            Self::CustomEntityLookup(s) => &s.inputs,
            Self::TextTranslation(s) => &s.inputs,
            Self::DocumentExtraction(s) => &s.inputs,
            Self::WebApi(s) => &s.inputs,
            Self::Unknown(_) => &[],
        }
    }

    /// The skill's outputs. Empty for unknown skills.
    pub fn outputs(&self) -> &[OutputFieldMappingEntry] {
        match self {
            Self::Conditional(s) => &s.outputs,
            Self::KeyPhraseExtraction(s) => &s.outputs,
            Self::Ocr(s) => &s.outputs,
            Self::ImageAnalysis(s) => &s.outputs,
            Self::LanguageDetection(s) => &s.outputs,
            Self::Shaper(s) => &s.outputs,
            Self::Merge(s) => &s.outputs,
            Self::EntityRecognition(s) => &s.outputs,
            Self::Sentiment(s) => &s.outputs,
            Self::Split(s) => &s.outputs,
            Self::PiiDetection(s) => &s.outputs,
            Self::EntityLinking(s) => &s.outputs,
            Self::CustomEntityLookup(s) => &s.outputs,
            Self::TextTranslation(s) => &s.outputs,
            Self::DocumentExtraction(s) => &s.outputs,
            Self::WebApi(s) => &s.outputs,
            Self::Unknown(_) => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

azure_sdk_core::expandable_enum! {
    /// Languages supported by key phrase extraction.
    pub enum KeyPhraseExtractionSkillLanguage {
        /// Danish.
        Da => "da",
        /// Dutch.
        Nl => "nl",
        /// English.
        En => "en",
        /// Finnish.
        Fi => "fi",
        /// French.
        Fr => "fr",
        /// German.
        De => "de",
        /// Italian.
        It => "it",
        /// Japanese.
        Ja => "ja",
        /// Korean.
        Ko => "ko",
        /// Norwegian (Bokmaal).
        No => "no",
        /// Polish.
        Pl => "pl",
        /// Portuguese (Portugal).
        PtPt => "pt-PT",
        /// Portuguese (Brazil).
        PtBr => "pt-BR",
        /// Russian.
        Ru => "ru",
        /// Spanish.
        Es => "es",
        /// Swedish.
        Sv => "sv",
    }
}

azure_sdk_core::expandable_enum! {
    /// Common OCR languages. Any language code the service supports is accepted.
    pub enum OcrSkillLanguage {
        /// Chinese Simplified.
        ZhHans => "zh-Hans",
        /// Chinese Traditional.
        ZhHant => "zh-Hant",
        /// Czech.
        Cs => "cs",
        /// Danish.
        Da => "da",
        /// Dutch.
        Nl => "nl",
        /// English.
        En => "en",
        /// Finnish.
        Fi => "fi",
        /// French.
        Fr => "fr",
        /// German.
        De => "de",
        /// Greek.
        El => "el",
        /// Hungarian.
        Hu => "hu",
        /// Italian.
        It => "it",
        /// Japanese.
        Ja => "ja",
        /// Korean.
        Ko => "ko",
        /// Norwegian.
        Nb => "nb",
        /// Polish.
        Pl => "pl",
        /// Portuguese.
        Pt => "pt",
        /// Russian.
        Ru => "ru",
        /// Spanish.
        Es => "es",
        /// Swedish.
        Sv => "sv",
        /// Turkish.
        Tr => "tr",
        /// Arabic.
        Ar => "ar",
        /// Romanian.
        Ro => "ro",
        /// Unknown; the service detects the language.
        Unk => "unk",
    }
}

azure_sdk_core::expandable_enum! {
    /// Line separator used by the OCR skill.
    pub enum OcrLineEnding {
        /// Space.
        Space => "space",
        /// Carriage return.
        CarriageReturn => "carriageReturn",
        /// Line feed.
        LineFeed => "lineFeed",
        /// Carriage return followed by line feed.
        CarriageReturnLineFeed => "carriageReturnLineFeed",
    }
}

azure_sdk_core::expandable_enum! {
    /// Languages supported by image analysis.
    pub enum ImageAnalysisSkillLanguage {
        /// English.
        En => "en",
        /// Spanish.
        Es => "es",
        /// Japanese.
        Ja => "ja",
        /// Portuguese.
        Pt => "pt",
        /// Chinese.
        Zh => "zh",
    }
}

azure_sdk_core::expandable_enum! {
    /// Visual features returned by image analysis.
    pub enum VisualFeature {
        /// Adult content detection.
        Adult => "adult",
        /// Brand detection.
        Brands => "brands",
        /// Image categorization.
        Categories => "categories",
        /// Human-readable description.
        Description => "description",
        /// Face detection.
        Faces => "faces",
        /// Object detection.
        Objects => "objects",
        /// Tags.
        Tags => "tags",
    }
}

azure_sdk_core::expandable_enum! {
    /// Domain-specific details returned by image analysis.
    pub enum ImageDetail {
        /// Celebrity recognition.
        Celebrities => "celebrities",
        /// Landmark recognition.
        Landmarks => "landmarks",
    }
}

azure_sdk_core::expandable_enum! {
    /// Languages supported by the split skill.
    pub enum SplitSkillLanguage {
        /// Danish.
        Da => "da",
        /// German.
        De => "de",
        /// English.
        En => "en",
        /// Spanish.
        Es => "es",
        /// Finnish.
        Fi => "fi",
        /// French.
        Fr => "fr",
        /// Italian.
        It => "it",
        /// Korean.
        Ko => "ko",
        /// Portuguese.
        Pt => "pt",
    }
}

azure_sdk_core::expandable_enum! {
    /// How the split skill chunks text.
    pub enum TextSplitMode {
        /// Chunks of at most `maximumPageLength` characters.
        Pages => "pages",
        /// Individual sentences.
        Sentences => "sentences",
    }
}

azure_sdk_core::expandable_enum! {
    /// How detected PII is masked in the output text.
    pub enum PiiDetectionSkillMaskingMode {
        /// No masking; only entities are returned.
        None => "none",
        /// Replace each entity with `maskingCharacter`.
        Replace => "replace",
    }
}

azure_sdk_core::expandable_enum! {
    /// Common translation languages. Any code the Translator service supports is accepted.
    pub enum TextTranslationSkillLanguage {
        /// Arabic.
        Ar => "ar",
        /// Chinese Simplified.
        ZhHans => "zh-Hans",
        /// Chinese Traditional.
        ZhHant => "zh-Hant",
        /// Dutch.
        Nl => "nl",
        /// English.
        En => "en",
        /// French.
        Fr => "fr",
        /// German.
        De => "de",
        /// Hindi.
        Hi => "hi",
        /// Italian.
        It => "it",
        /// Japanese.
        Ja => "ja",
        /// Korean.
        Ko => "ko",
        /// Polish.
        Pl => "pl",
        /// Portuguese.
        Pt => "pt",
        /// Russian.
        Ru => "ru",
        /// Spanish.
        Es => "es",
        /// Swedish.
        Sv => "sv",
        /// Turkish.
        Tr => "tr",
    }
}

azure_sdk_core::expandable_enum! {
    /// Languages supported by custom entity lookup.
    pub enum CustomEntityLookupSkillLanguage {
        /// Danish.
        Da => "da",
        /// German.
        De => "de",
        /// English.
        En => "en",
        /// Spanish.
        Es => "es",
        /// Finnish.
        Fi => "fi",
        /// French.
        Fr => "fr",
        /// Italian.
        It => "it",
        /// Korean.
        Ko => "ko",
        /// Portuguese.
        Pt => "pt",
    }
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// Chooses between two inputs based on a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalSkill {
    /// Skill name, unique within the skillset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Level at which the skill runs, e.g. `/document`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs: `condition`, `whenTrue`, `whenFalse`.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs: `output`.
    pub outputs: Vec<OutputFieldMappingEntry>,
}

impl ConditionalSkill {
    /// Create the skill.
    pub fn new(inputs: Vec<InputFieldMappingEntry>, outputs: Vec<OutputFieldMappingEntry>) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
        }
    }
}

impl_variant!(ConditionalSkill => ["#Microsoft.Skills.Util.ConditionalSkill"], optionally_named);

/// Extracts key phrases from text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPhraseExtractionSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// Language used when the input carries none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<KeyPhraseExtractionSkillLanguage>,
    /// Maximum key phrases to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_key_phrase_count: Option<i32>,
    /// Text Analytics model version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl KeyPhraseExtractionSkill {
    /// Create the skill.
    pub fn new(inputs: Vec<InputFieldMappingEntry>, outputs: Vec<OutputFieldMappingEntry>) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            default_language_code: None,
            max_key_phrase_count: None,
            model_version: None,
        }
    }
}

impl_variant!(
    KeyPhraseExtractionSkill => ["#Microsoft.Skills.Text.KeyPhraseExtractionSkill"],
    optionally_named
);

/// Extracts text from images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// Language of the text in the images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<OcrSkillLanguage>,
    /// Detect image orientation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detect_orientation: Option<bool>,
    /// Separator between detected lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_ending: Option<OcrLineEnding>,
}

impl OcrSkill {
    /// Create the skill.
    pub fn new(inputs: Vec<InputFieldMappingEntry>, outputs: Vec<OutputFieldMappingEntry>) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            default_language_code: None,
            detect_orientation: None,
            line_ending: None,
        }
    }
}

impl_variant!(OcrSkill => ["#Microsoft.Skills.Vision.OcrSkill"], optionally_named);

/// Extracts visual features from images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysisSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// Language of the returned text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<ImageAnalysisSkillLanguage>,
    /// Features to return.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visual_features: Vec<VisualFeature>,
    /// Domain-specific details to return.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ImageDetail>,
}

impl ImageAnalysisSkill {
    /// Create the skill.
    pub fn new(inputs: Vec<InputFieldMappingEntry>, outputs: Vec<OutputFieldMappingEntry>) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            default_language_code: None,
            visual_features: Vec::new(),
            details: Vec::new(),
        }
    }
}

impl_variant!(ImageAnalysisSkill => ["#Microsoft.Skills.Vision.ImageAnalysisSkill"], optionally_named);

/// Detects the language of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDetectionSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// ISO 3166-1 alpha-2 country hint for ambiguous text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_country_hint: Option<String>,
    /// Text Analytics model version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl LanguageDetectionSkill {
    /// Create the skill.
    pub fn new(inputs: Vec<InputFieldMappingEntry>, outputs: Vec<OutputFieldMappingEntry>) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            default_country_hint: None,
            model_version: None,
        }
    }
}

impl_variant!(
    LanguageDetectionSkill => ["#Microsoft.Skills.Text.LanguageDetectionSkill"],
    optionally_named
);

/// Reshapes inputs into a complex type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShaperSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs; nested inputs build nested members.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs: `output`.
    pub outputs: Vec<OutputFieldMappingEntry>,
}

impl ShaperSkill {
    /// Create the skill.
    pub fn new(inputs: Vec<InputFieldMappingEntry>, outputs: Vec<OutputFieldMappingEntry>) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
        }
    }
}

impl_variant!(ShaperSkill => ["#Microsoft.Skills.Util.ShaperSkill"], optionally_named);

/// Merges a collection of strings into a single text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// Tag inserted before each merged item. Service default a space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_pre_tag: Option<String>,
    /// Tag inserted after each merged item. Service default a space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_post_tag: Option<String>,
}

impl MergeSkill {
    /// Create the skill.
    pub fn new(inputs: Vec<InputFieldMappingEntry>, outputs: Vec<OutputFieldMappingEntry>) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            insert_pre_tag: None,
            insert_post_tag: None,
        }
    }
}

impl_variant!(MergeSkill => ["#Microsoft.Skills.Text.MergeSkill"], optionally_named);

/// Splits text into pages or sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// Language of the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<SplitSkillLanguage>,
    /// Pages or sentences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_split_mode: Option<TextSplitMode>,
    /// Page length in characters, for [`TextSplitMode::Pages`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_page_length: Option<i32>,
    /// Characters shared between consecutive pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_overlap_length: Option<i32>,
    /// Pages to produce; `0` for all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_pages_to_take: Option<i32>,
}

impl SplitSkill {
    /// Create the skill.
    pub fn new(inputs: Vec<InputFieldMappingEntry>, outputs: Vec<OutputFieldMappingEntry>) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            default_language_code: None,
            text_split_mode: None,
            maximum_page_length: None,
            page_overlap_length: None,
            maximum_pages_to_take: None,
        }
    }
}

impl_variant!(SplitSkill => ["#Microsoft.Skills.Text.SplitSkill"], optionally_named);

/// Detects and optionally masks personally identifiable information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiiDetectionSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// Language code of the input text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<String>,
    /// Confidence threshold between 0 and 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_precision: Option<f64>,
    /// Masking mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masking_mode: Option<PiiDetectionSkillMaskingMode>,
    /// Replacement character for [`PiiDetectionSkillMaskingMode::Replace`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masking_character: Option<String>,
    /// Text Analytics model version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    /// Categories to detect; all when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pii_categories: Vec<String>,
    /// Restrict detection to a domain, e.g. `phi`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl PiiDetectionSkill {
    /// Create the skill.
    pub fn new(inputs: Vec<InputFieldMappingEntry>, outputs: Vec<OutputFieldMappingEntry>) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            default_language_code: None,
            minimum_precision: None,
            masking_mode: None,
            masking_character: None,
            model_version: None,
            pii_categories: Vec::new(),
            domain: None,
        }
    }
}

impl_variant!(PiiDetectionSkill => ["#Microsoft.Skills.Text.PIIDetectionSkill"], optionally_named);

/// Links recognized entities to a knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityLinkingSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// Language code of the input text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<String>,
    /// Confidence threshold between 0 and 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_precision: Option<f64>,
    /// Text Analytics model version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl EntityLinkingSkill {
    /// Create the skill.
    pub fn new(inputs: Vec<InputFieldMappingEntry>, outputs: Vec<OutputFieldMappingEntry>) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            default_language_code: None,
            minimum_precision: None,
            model_version: None,
        }
    }
}

impl_variant!(EntityLinkingSkill => ["#Microsoft.Skills.Text.V3.EntityLinkingSkill"], optionally_named);

/// An entity matched by [`CustomEntityLookupSkill`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntity {
    /// Top-level entity descriptor, used as the match output.
    pub name: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Entity type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Entity subtype.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// Identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Whether matching `name` is case sensitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    /// Whether matching `name` is accent sensitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_sensitive: Option<bool>,
    /// Tolerated character edits, 0 to 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_edit_distance: Option<i32>,
    /// Default case sensitivity for aliases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_case_sensitive: Option<bool>,
    /// Default accent sensitivity for aliases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_accent_sensitive: Option<bool>,
    /// Default fuzzy edit distance for aliases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_fuzzy_edit_distance: Option<i32>,
    /// Alternative spellings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<CustomEntityAlias>,
}

impl CustomEntity {
    /// An entity matched by name only.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            entity_type: None,
            subtype: None,
            id: None,
            case_sensitive: None,
            accent_sensitive: None,
            fuzzy_edit_distance: None,
            default_case_sensitive: None,
            default_accent_sensitive: None,
            default_fuzzy_edit_distance: None,
            aliases: Vec::new(),
        }
    }
}

/// An alternative spelling of a [`CustomEntity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntityAlias {
    /// Alias text.
    pub text: String,
    /// Case sensitivity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    /// Accent sensitivity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_sensitive: Option<bool>,
    /// Tolerated character edits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_edit_distance: Option<i32>,
}

/// Matches text against a user-defined entity list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntityLookupSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// Language of the input text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<CustomEntityLookupSkillLanguage>,
    /// URL of a JSON or CSV entity definition file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities_definition_uri: Option<String>,
    /// Inline entity definitions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inline_entities_definition: Vec<CustomEntity>,
    /// Default case sensitivity for all entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_default_case_sensitive: Option<bool>,
    /// Default accent sensitivity for all entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_default_accent_sensitive: Option<bool>,
    /// Default fuzzy edit distance for all entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_default_fuzzy_edit_distance: Option<i32>,
}

impl CustomEntityLookupSkill {
    /// Create the skill.
    pub fn new(inputs: Vec<InputFieldMappingEntry>, outputs: Vec<OutputFieldMappingEntry>) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            default_language_code: None,
            entities_definition_uri: None,
            inline_entities_definition: Vec::new(),
            global_default_case_sensitive: None,
            global_default_accent_sensitive: None,
            global_default_fuzzy_edit_distance: None,
        }
    }
}

impl_variant!(
    CustomEntityLookupSkill => ["#Microsoft.Skills.Text.CustomEntityLookupSkill"],
    optionally_named
);

/// Translates text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextTranslationSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// Target language when the input carries none.
    pub default_to_language_code: TextTranslationSkillLanguage,
    /// Source language when the input carries none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_from_language_code: Option<TextTranslationSkillLanguage>,
    /// Source language used when detection fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_from: Option<TextTranslationSkillLanguage>,
}

impl TextTranslationSkill {
    /// Create the skill, translating into `to`.
    pub fn new(
        inputs: Vec<InputFieldMappingEntry>,
        outputs: Vec<OutputFieldMappingEntry>,
        to: TextTranslationSkillLanguage,
    ) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            default_to_language_code: to,
            default_from_language_code: None,
            suggested_from: None,
        }
    }
}

impl_variant!(TextTranslationSkill => ["#Microsoft.Skills.Text.TranslationSkill"], optionally_named);

/// Extracts content from a file within the enrichment pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentExtractionSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// Parsing mode. Service default `default`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsing_mode: Option<BlobIndexerParsingMode>,
    /// What to extract. Service default `contentAndMetadata`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_to_extract: Option<BlobIndexerDataToExtract>,
    /// Extraction configuration, e.g. `imageAction`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Map<String, Value>>,
}

impl DocumentExtractionSkill {
    /// Create the skill.
    pub fn new(inputs: Vec<InputFieldMappingEntry>, outputs: Vec<OutputFieldMappingEntry>) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            parsing_mode: None,
            data_to_extract: None,
            configuration: None,
        }
    }
}

impl_variant!(
    DocumentExtractionSkill => ["#Microsoft.Skills.Util.DocumentExtractionSkill"],
    optionally_named
);

/// Calls a custom web API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApiSkill {
    /// Skill name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// The endpoint to call.
    pub uri: String,
    /// Headers sent with each request.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub http_headers: BTreeMap<String, String>,
    /// HTTP method. Service default `POST`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    /// Request timeout as an ISO 8601 duration, e.g. `PT30S`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// Records per request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<i32>,
    /// Concurrent requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_of_parallelism: Option<i32>,
}

impl WebApiSkill {
    /// Create the skill calling `uri`.
    pub fn new(
        inputs: Vec<InputFieldMappingEntry>,
        outputs: Vec<OutputFieldMappingEntry>,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            uri: uri.into(),
            http_headers: BTreeMap::new(),
            http_method: None,
            timeout: None,
            batch_size: None,
            degree_of_parallelism: None,
        }
    }
}

impl_variant!(WebApiSkill => ["#Microsoft.Skills.Custom.WebApiSkill"], optionally_named);
