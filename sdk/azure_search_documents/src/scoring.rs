//! Scoring profiles.
//!
//! A scoring profile boosts documents by field weights and by scoring
//! functions. Scoring functions are discriminated by a plain `type` property
//! rather than `@odata.type`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::polymorphic::{impl_variant, polymorphic_family};

/// Discriminator property of [`ScoringFunction`].
pub const SCORING_FUNCTION_TYPE: &str = "type";

/// Custom relevance scoring for an index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringProfile {
    /// Profile name.
    pub name: String,

    /// Field weights applied to text matches.
    #[serde(rename = "text", skip_serializing_if = "Option::is_none")]
    pub text_weights: Option<TextWeights>,

    /// Functions that influence scoring.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<ScoringFunction>,

    /// How the results of individual functions are combined. Service default sum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_aggregation: Option<ScoringFunctionAggregation>,
}

impl ScoringProfile {
    /// Create an empty profile.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text_weights: None,
            functions: Vec::new(),
            function_aggregation: None,
        }
    }
}

/// Weights on index fields for which matches should boost scoring.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextWeights {
    /// Field name to weight.
    pub weights: BTreeMap<String, f64>,
}

azure_sdk_core::expandable_enum! {
    /// How scoring function results are combined.
    pub enum ScoringFunctionAggregation {
        /// Sum of all function results.
        Sum => "sum",
        /// Average of all function results.
        Average => "average",
        /// Minimum function result.
        Minimum => "minimum",
        /// Maximum function result.
        Maximum => "maximum",
        /// Result of the first applicable function.
        FirstMatching => "firstMatching",
    }
}

azure_sdk_core::expandable_enum! {
    /// How boosting is interpolated across the function's range.
    pub enum ScoringFunctionInterpolation {
        /// Linearly decreasing boost.
        Linear => "linear",
        /// Constant boost.
        Constant => "constant",
        /// Quadratically decreasing boost.
        Quadratic => "quadratic",
        /// Logarithmically decreasing boost.
        Logarithmic => "logarithmic",
    }
}

polymorphic_family! {
    /// A function that boosts scores during ranking.
    pub enum ScoringFunction tagged SCORING_FUNCTION_TYPE => {
        /// Boost by geographic distance.
        Distance(DistanceScoringFunction),
        /// Boost by date-time freshness.
        Freshness(FreshnessScoringFunction),
        /// Boost by numeric magnitude.
        Magnitude(MagnitudeScoringFunction),
        /// Boost by tag overlap.
        Tag(TagScoringFunction),
    }
}

/// Boosts scores based on distance from a geographic location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceScoringFunction {
    /// The `Edm.GeographyPoint` field used as input.
    pub field_name: String,
    /// Multiplier for the raw score; must not equal 1.0.
    pub boost: f64,
    /// Interpolation across the range. Service default linear.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<ScoringFunctionInterpolation>,
    /// Distance parameters.
    #[serde(rename = "distance")]
    pub parameters: DistanceScoringParameters,
}

/// Parameters of a [`DistanceScoringFunction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceScoringParameters {
    /// Name of the query parameter carrying the reference location.
    pub reference_point_parameter: String,
    /// Distance in kilometers from the reference location where boosting ends.
    pub boosting_distance: f64,
}

impl DistanceScoringFunction {
    /// Create a distance function.
    pub fn new(
        field_name: impl Into<String>,
        boost: f64,
        parameters: DistanceScoringParameters,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            boost,
            interpolation: None,
            parameters,
        }
    }
}

impl_variant!(DistanceScoringFunction => ["distance"]);

/// Boosts scores based on the value of a date-time field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshnessScoringFunction {
    /// The `Edm.DateTimeOffset` field used as input.
    pub field_name: String,
    /// Multiplier for the raw score; must not equal 1.0.
    pub boost: f64,
    /// Interpolation across the range. Service default linear.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<ScoringFunctionInterpolation>,
    /// Freshness parameters.
    #[serde(rename = "freshness")]
    pub parameters: FreshnessScoringParameters,
}

/// Parameters of a [`FreshnessScoringFunction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshnessScoringParameters {
    /// ISO 8601 duration after which boosting stops, e.g. `P30D`.
    pub boosting_duration: String,
}

impl FreshnessScoringFunction {
    /// Create a freshness function.
    pub fn new(
        field_name: impl Into<String>,
        boost: f64,
        parameters: FreshnessScoringParameters,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            boost,
            interpolation: None,
            parameters,
        }
    }
}

impl_variant!(FreshnessScoringFunction => ["freshness"]);

/// Boosts scores based on the magnitude of a numeric field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagnitudeScoringFunction {
    /// The numeric field used as input.
    pub field_name: String,
    /// Multiplier for the raw score; must not equal 1.0.
    pub boost: f64,
    /// Interpolation across the range. Service default linear.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<ScoringFunctionInterpolation>,
    /// Magnitude parameters.
    #[serde(rename = "magnitude")]
    pub parameters: MagnitudeScoringParameters,
}

/// Parameters of a [`MagnitudeScoringFunction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagnitudeScoringParameters {
    /// Value at which boosting starts.
    pub boosting_range_start: f64,
    /// Value at which boosting ends.
    pub boosting_range_end: f64,
    /// Whether a constant boost applies beyond the range end.
    #[serde(
        rename = "constantBoostBeyondRange",
        skip_serializing_if = "Option::is_none"
    )]
    pub should_boost_beyond_range_by_constant: Option<bool>,
}

impl MagnitudeScoringFunction {
    /// Create a magnitude function.
    pub fn new(
        field_name: impl Into<String>,
        boost: f64,
        parameters: MagnitudeScoringParameters,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            boost,
            interpolation: None,
            parameters,
        }
    }
}

impl_variant!(MagnitudeScoringFunction => ["magnitude"]);

/// Boosts documents whose tags match those given in a query parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagScoringFunction {
    /// The string or string-collection field used as input.
    pub field_name: String,
    /// Multiplier for the raw score; must not equal 1.0.
    pub boost: f64,
    /// Interpolation across the range. Service default linear.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<ScoringFunctionInterpolation>,
    /// Tag parameters.
    #[serde(rename = "tag")]
    pub parameters: TagScoringParameters,
}

/// Parameters of a [`TagScoringFunction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagScoringParameters {
    /// Name of the query parameter carrying the tags to compare against.
    pub tags_parameter: String,
}

impl TagScoringFunction {
    /// Create a tag function.
    pub fn new(field_name: impl Into<String>, boost: f64, parameters: TagScoringParameters) -> Self {
        Self {
            field_name: field_name.into(),
            boost,
            interpolation: None,
            parameters,
        }
    }
}

impl_variant!(TagScoringFunction => ["tag"]);

impl ScoringFunction {
    /// The name of the field the function reads, if known.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Distance(f) => Some(&f.field_name),
            Self::Freshness(f) => Some(&f.field_name),
            Self::Magnitude(f) => Some(&f.field_name),
            Self::Tag(f) => Some(&f.field_name),
            Self::Unknown(u) => u.properties.get("fieldName").and_then(|v| v.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polymorphic::assert_round_trips;
    use serde_json::json;

    #[test]
    fn test_every_scoring_function_round_trips() {
        assert_round_trips!(ScoringFunction, [
            json!({
                "type": "distance",
                "fieldName": "location",
                "boost": 2.0,
                "interpolation": "linear",
                "distance": {"referencePointParameter": "currentLocation", "boostingDistance": 10.0}
            }),
            json!({
                "type": "freshness",
                "fieldName": "lastRenovationDate",
                "boost": 1.5,
                "interpolation": "quadratic",
                "freshness": {"boostingDuration": "P365D"}
            }),
            json!({
                "type": "magnitude",
                "fieldName": "rating",
                "boost": 3.0,
                "interpolation": "constant",
                "magnitude": {"boostingRangeStart": 1.0, "boostingRangeEnd": 5.0, "constantBoostBeyondRange": true}
            }),
            json!({
                "type": "tag",
                "fieldName": "tags",
                "boost": 1.25,
                "interpolation": "logarithmic",
                "tag": {"tagsParameter": "mytags"}
            }),
        ]);
    }

    #[test]
    fn test_distance_function_uses_type_discriminator() {
        let function = ScoringFunction::from(DistanceScoringFunction::new(
            "location",
            2.0,
            DistanceScoringParameters {
                reference_point_parameter: "currentLocation".into(),
                boosting_distance: 10.0,
            },
        ));

        let json = serde_json::to_value(&function).unwrap();
        assert_eq!(json["type"], "distance");
        assert!(json.get("@odata.type").is_none());
        assert_eq!(json["distance"]["referencePointParameter"], "currentLocation");
        assert_eq!(function.name(), None);
        assert_eq!(function.field_name(), Some("location"));
    }

    #[test]
    fn test_scoring_profile_round_trip() {
        let json = serde_json::json!({
            "name": "boostRecent",
            "text": {"weights": {"title": 5.0, "description": 1.5}},
            "functions": [
                {
                    "type": "freshness",
                    "fieldName": "lastRenovationDate",
                    "boost": 3.0,
                    "interpolation": "quadratic",
                    "freshness": {"boostingDuration": "P365D"}
                },
                {
                    "type": "magnitude",
                    "fieldName": "rating",
                    "boost": 2.0,
                    "magnitude": {
                        "boostingRangeStart": 1.0,
                        "boostingRangeEnd": 5.0,
                        "constantBoostBeyondRange": false
                    }
                },
                {
                    "type": "tag",
                    "fieldName": "tags",
                    "boost": 1.5,
                    "tag": {"tagsParameter": "mytags"}
                }
            ],
            "functionAggregation": "firstMatching"
        });

        let profile: ScoringProfile = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(profile.functions.len(), 3);
        assert!(matches!(profile.functions[0], ScoringFunction::Freshness(_)));
        assert_eq!(
            profile.function_aggregation,
            Some(ScoringFunctionAggregation::FirstMatching)
        );
        assert_eq!(serde_json::to_value(&profile).unwrap(), json);
    }

    #[test]
    fn test_unknown_scoring_function() {
        let json = serde_json::json!({"type": "popularity", "fieldName": "clicks", "boost": 2.0});
        let function: ScoringFunction = serde_json::from_value(json.clone()).unwrap();
        assert!(function.is_unknown());
        assert_eq!(function.discriminator(), "popularity");
        assert_eq!(function.field_name(), Some("clicks"));
        assert_eq!(serde_json::to_value(&function).unwrap(), json);
    }
}
