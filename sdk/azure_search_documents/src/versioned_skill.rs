//! Skills with more than one wire representation.
//!
//! Entity recognition and sentiment analysis each exist as a V1 and a V3
//! skill with different `@odata.type` values and slightly different
//! properties. [`EntityRecognitionSkill`] and [`SentimentSkill`] present one
//! API over both. The version is fixed at construction, or by the
//! discriminator when read from the service:
//!
//! - setters for a property the pinned version lacks return
//!   [`AzureError::UnsupportedForVersion`] and leave the skill unchanged;
//! - getters for such a property return `None`.
//!
//! ```rust
//! use azure_search_documents::skill::InputFieldMappingEntry;
//! use azure_search_documents::versioned_skill::{EntityRecognitionSkill, EntityRecognitionSkillVersion};
//!
//! let inputs = vec![InputFieldMappingEntry::new("text").source("/document/content")];
//!
//! let mut v1 = EntityRecognitionSkill::new(EntityRecognitionSkillVersion::V1, inputs.clone(), vec![]);
//! assert!(v1.set_model_version("latest").is_err());
//!
//! let mut v3 = EntityRecognitionSkill::new(EntityRecognitionSkillVersion::V3, inputs, vec![]);
//! v3.set_model_version("latest").unwrap();
//! assert_eq!(v3.model_version(), Some("latest"));
//! ```

use std::fmt;

use azure_sdk_core::error::{AzureError, AzureResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::polymorphic::PolymorphicVariant;
use crate::skill::{InputFieldMappingEntry, OutputFieldMappingEntry};

const ENTITY_RECOGNITION_V1: &str = "#Microsoft.Skills.Text.EntityRecognitionSkill";
const ENTITY_RECOGNITION_V3: &str = "#Microsoft.Skills.Text.V3.EntityRecognitionSkill";
const SENTIMENT_V1: &str = "#Microsoft.Skills.Text.SentimentSkill";
const SENTIMENT_V3: &str = "#Microsoft.Skills.Text.V3.SentimentSkill";

/// Declare a two-version skill version enum that (de)serializes as its discriminator.
macro_rules! skill_version {
    ($(#[$meta:meta])* $name:ident { V1 => $v1:expr, V3 => $v3:expr $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            /// The original Text Analytics skill.
            V1,
            /// The Text Analytics V3 skill.
            V3,
        }

        impl $name {
            /// The `@odata.type` of this version.
            pub const fn odata_type(self) -> &'static str {
                match self {
                    Self::V1 => $v1,
                    Self::V3 => $v3,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    Self::V1 => "V1",
                    Self::V3 => "V3",
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.odata_type())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                const EXPECTED: &[&str] = &[$v1, $v3];

                let tag = String::deserialize(deserializer)?;
                if tag == $v1 {
                    Ok(Self::V1)
                } else if tag == $v3 {
                    Ok(Self::V3)
                } else {
                    Err(serde::de::Error::unknown_variant(&tag, EXPECTED))
                }
            }
        }
    };
}

skill_version! {
    /// Wire version of [`EntityRecognitionSkill`].
    EntityRecognitionSkillVersion {
        V1 => ENTITY_RECOGNITION_V1,
        V3 => ENTITY_RECOGNITION_V3,
    }
}

skill_version! {
    /// Wire version of [`SentimentSkill`].
    SentimentSkillVersion {
        V1 => SENTIMENT_V1,
        V3 => SENTIMENT_V3,
    }
}

azure_sdk_core::expandable_enum! {
    /// Entity categories recognized by the entity recognition skill.
    pub enum EntityCategory {
        /// Locations.
        Location => "location",
        /// Organizations.
        Organization => "organization",
        /// People.
        Person => "person",
        /// Quantities.
        Quantity => "quantity",
        /// Dates and times.
        Datetime => "datetime",
        /// URLs.
        Url => "url",
        /// Email addresses.
        Email => "email",
    }
}

azure_sdk_core::expandable_enum! {
    /// Languages supported by entity recognition.
    pub enum EntityRecognitionSkillLanguage {
        /// Arabic.
        Ar => "ar",
        /// Czech.
        Cs => "cs",
        /// Chinese Simplified.
        ZhHans => "zh-Hans",
        /// Chinese Traditional.
        ZhHant => "zh-Hant",
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
        /// Turkish.
        Tr => "tr",
    }
}

azure_sdk_core::expandable_enum! {
    /// Languages supported by sentiment analysis.
    pub enum SentimentSkillLanguage {
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
        /// Italian.
        It => "it",
        /// Norwegian (Bokmaal).
        No => "no",
        /// Polish.
        Pl => "pl",
        /// Portuguese (Portugal).
        PtPt => "pt-PT",
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

// ---------------------------------------------------------------------------
// Entity recognition
// ---------------------------------------------------------------------------

/// Extracts entities of different types from text.
///
/// Properties the pinned version lacks are never emitted by the setters. If
/// the service returns one anyway it is kept for round-tripping but hidden
/// from the getters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecognitionSkill {
    #[serde(rename = "@odata.type")]
    version: EntityRecognitionSkillVersion,

    /// Skill name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// Categories to extract; all when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<EntityCategory>,
    /// Language used when the input carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<EntityRecognitionSkillLanguage>,
    /// Confidence threshold between 0 and 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_precision: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    include_typeless_entities: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model_version: Option<String>,
}

impl EntityRecognitionSkill {
    /// Create a skill pinned to `version`.
    pub fn new(
        version: EntityRecognitionSkillVersion,
        inputs: Vec<InputFieldMappingEntry>,
        outputs: Vec<OutputFieldMappingEntry>,
    ) -> Self {
        Self {
            version,
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            categories: Vec::new(),
            default_language_code: None,
            minimum_precision: None,
            include_typeless_entities: None,
            model_version: None,
        }
    }

    /// The pinned wire version.
    pub fn version(&self) -> EntityRecognitionSkillVersion {
        self.version
    }

    /// Whether entities without a type are returned. V1 only.
    pub fn include_typeless_entities(&self) -> Option<bool> {
        match self.version {
            EntityRecognitionSkillVersion::V1 => self.include_typeless_entities,
            EntityRecognitionSkillVersion::V3 => None,
        }
    }

    /// Set `includeTypelessEntities`.
    ///
    /// # Errors
    ///
    /// Returns [`AzureError::UnsupportedForVersion`] on a V3 skill.
    pub fn set_include_typeless_entities(&mut self, value: bool) -> AzureResult<&mut Self> {
        if self.version != EntityRecognitionSkillVersion::V1 {
            return Err(AzureError::unsupported_for_version(
                "include_typeless_entities",
                self.version,
            ));
        }
        self.include_typeless_entities = Some(value);
        Ok(self)
    }

    /// The Text Analytics model version. V3 only.
    pub fn model_version(&self) -> Option<&str> {
        match self.version {
            EntityRecognitionSkillVersion::V1 => None,
            EntityRecognitionSkillVersion::V3 => self.model_version.as_deref(),
        }
    }

    /// Set `modelVersion`.
    ///
    /// # Errors
    ///
    /// Returns [`AzureError::UnsupportedForVersion`] on a V1 skill.
    pub fn set_model_version(&mut self, value: impl Into<String>) -> AzureResult<&mut Self> {
        if self.version != EntityRecognitionSkillVersion::V3 {
            return Err(AzureError::unsupported_for_version("model_version", self.version));
        }
        self.model_version = Some(value.into());
        Ok(self)
    }
}

impl PolymorphicVariant for EntityRecognitionSkill {
    const DISCRIMINATORS: &'static [&'static str] = &[ENTITY_RECOGNITION_V3, ENTITY_RECOGNITION_V1];

    fn discriminator(&self) -> &'static str {
        self.version.odata_type()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Sentiment
// ---------------------------------------------------------------------------

/// Scores the sentiment of text.
///
/// See [`EntityRecognitionSkill`] for how version-specific properties behave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSkill {
    #[serde(rename = "@odata.type")]
    version: SentimentSkillVersion,

    /// Skill name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Execution context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Inputs.
    pub inputs: Vec<InputFieldMappingEntry>,
    /// Outputs.
    pub outputs: Vec<OutputFieldMappingEntry>,
    /// Language used when the input carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language_code: Option<SentimentSkillLanguage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    include_opinion_mining: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model_version: Option<String>,
}

impl SentimentSkill {
    /// Create a skill pinned to `version`.
    pub fn new(
        version: SentimentSkillVersion,
        inputs: Vec<InputFieldMappingEntry>,
        outputs: Vec<OutputFieldMappingEntry>,
    ) -> Self {
        Self {
            version,
            name: None,
            description: None,
            context: None,
            inputs,
            outputs,
            default_language_code: None,
            include_opinion_mining: None,
            model_version: None,
        }
    }

    /// The pinned wire version.
    pub fn version(&self) -> SentimentSkillVersion {
        self.version
    }

    /// Whether aspect-based opinion mining is enabled. V3 only.
    pub fn include_opinion_mining(&self) -> Option<bool> {
        match self.version {
            SentimentSkillVersion::V1 => None,
            SentimentSkillVersion::V3 => self.include_opinion_mining,
        }
    }

    /// Set `includeOpinionMining`.
    ///
    /// # Errors
    ///
    /// Returns [`AzureError::UnsupportedForVersion`] on a V1 skill.
    pub fn set_include_opinion_mining(&mut self, value: bool) -> AzureResult<&mut Self> {
        if self.version != SentimentSkillVersion::V3 {
            return Err(AzureError::unsupported_for_version(
                "include_opinion_mining",
                self.version,
            ));
        }
        self.include_opinion_mining = Some(value);
        Ok(self)
    }

    /// The Text Analytics model version. V3 only.
    pub fn model_version(&self) -> Option<&str> {
        match self.version {
            SentimentSkillVersion::V1 => None,
            SentimentSkillVersion::V3 => self.model_version.as_deref(),
        }
    }

    /// Set `modelVersion`.
    ///
    /// # Errors
    ///
    /// Returns [`AzureError::UnsupportedForVersion`] on a V1 skill.
    pub fn set_model_version(&mut self, value: impl Into<String>) -> AzureResult<&mut Self> {
        if self.version != SentimentSkillVersion::V3 {
            return Err(AzureError::unsupported_for_version("model_version", self.version));
        }
        self.model_version = Some(value.into());
        Ok(self)
    }
}

impl PolymorphicVariant for SentimentSkill {
    const DISCRIMINATORS: &'static [&'static str] = &[SENTIMENT_V3, SENTIMENT_V1];

    fn discriminator(&self) -> &'static str {
        self.version.odata_type()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
