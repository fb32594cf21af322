use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single quiz question with a closed set of options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "answerKey")]
    pub answer_key: String,
}

impl Question {
    pub fn new(prompt: &str, options: &[&str], answer_key: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer_key: answer_key.to_string(),
        }
    }

    /// Whether `option` is one of this question's choices (exact match)
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// Answers collected so far, keyed by question answer key.
///
/// Recording a key twice replaces the earlier value, so there is never
/// more than one answer per question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the value it replaced (if any)
    pub fn record(&mut self, key: impl Into<String>, option: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), option.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Pet document as stored in the pets collection
///
/// Only the attributes used for matching are typed. Everything else on the
/// document (name, breed, photos, owner...) is kept in `attributes` so it can
/// be handed back to the client untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetRecord {
    #[serde(rename = "$id", default)]
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "activityLevel", default)]
    pub activity_level: String,
    #[serde(default)]
    pub weight: Option<Value>,
    #[serde(rename = "isHypoallergenic", default)]
    pub is_hypoallergenic: Option<bool>,
    #[serde(rename = "isNeutered", default)]
    pub is_neutered: Option<bool>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl PetRecord {
    /// Weight as a number.
    ///
    /// Numeric strings are parsed as numbers; anything else yields `None`.
    pub fn numeric_weight(&self) -> Option<f64> {
        match self.weight.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|w| w.is_finite()),
            _ => None,
        }
    }

    /// Helper to get is_hypoallergenic as a bool, defaulting to false
    pub fn hypoallergenic(&self) -> bool {
        self.is_hypoallergenic.unwrap_or(false)
    }

    /// Helper to get is_neutered as a bool, defaulting to false
    pub fn neutered(&self) -> bool {
        self.is_neutered.unwrap_or(false)
    }
}

/// Activity level stored on pet documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityTier {
    Low,
    Moderate,
    High,
}

impl ActivityTier {
    /// Map a quiz activity answer to the stored tier.
    ///
    /// Unrecognized or missing answers fall back to `Moderate`.
    pub fn from_answer(answer: Option<&str>) -> Self {
        match answer {
            Some("Couch Potato") => ActivityTier::Low,
            Some("Moderately Active") => ActivityTier::Moderate,
            Some("Very Active") => ActivityTier::High,
            _ => ActivityTier::Moderate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityTier::Low => "low",
            ActivityTier::Moderate => "moderate",
            ActivityTier::High => "high",
        }
    }
}

/// Weight band chosen in the size question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// `None` when no size was chosen (missing answer or "No Preference")
    pub fn from_answer(answer: Option<&str>) -> Option<Self> {
        match answer? {
            "Small" => Some(SizeClass::Small),
            "Medium" => Some(SizeClass::Medium),
            "Large" => Some(SizeClass::Large),
            _ => None,
        }
    }

    /// Small: < 10, Medium: 10..=25, Large: > 25
    #[inline]
    pub fn contains(&self, weight: f64) -> bool {
        match self {
            SizeClass::Small => weight < 10.0,
            SizeClass::Medium => (10.0..=25.0).contains(&weight),
            SizeClass::Large => weight > 25.0,
        }
    }
}

/// Equality-scoped query sent to the pet store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetQuery {
    pub category: String,
    pub activity_level: ActivityTier,
}

/// Outcome of a completed quiz
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub pets: Vec<PetRecord>,
    /// Records returned by the remote query
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    /// Records left after the local filters
    #[serde(rename = "filteredCandidates")]
    pub filtered_candidates: usize,
    /// User-facing message when the match could not be run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

impl MatchResult {
    pub fn failed(alert: impl Into<String>) -> Self {
        Self {
            alert: Some(alert.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}
