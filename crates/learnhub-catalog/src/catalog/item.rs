//! Tutorial records as loaded from the catalog document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::duration::{format_duration, parse_duration};
use crate::catalog::lenient;
use crate::ids::ItemId;

/// Rating shown for items that have none.
pub const DISPLAY_RATING_DEFAULT: f64 = 4.5;

/// Shown when an item lists no prerequisites.
pub const DEFAULT_PREREQUISITES: &str = "No prior experience required. Perfect for beginners!";

/// Known difficulty levels, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(DifficultyLevel::Beginner),
            "intermediate" => Some(DifficultyLevel::Intermediate),
            "advanced" => Some(DifficultyLevel::Advanced),
            _ => None,
        }
    }
}

/// A difficulty label exactly as the catalog spells it.
///
/// Filtering compares the raw label, so `"Beginner"` and `"beginner"` are
/// different filter values. [`Difficulty::level`] recognizes the known
/// levels for ordering and display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(String);

impl Difficulty {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The known level this label names, if any.
    pub fn level(&self) -> Option<DifficultyLevel> {
        DifficultyLevel::from_str(&self.0)
    }
}

impl From<DifficultyLevel> for Difficulty {
    fn from(level: DifficultyLevel) -> Self {
        Self(level.as_str().to_string())
    }
}

impl From<&str> for Difficulty {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One tutorial in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "RawItem", rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique identifier. Higher numeric ids are newer.
    pub id: ItemId,
    pub title: String,
    pub description: String,
    /// Category id (e.g. `technology`).
    pub category: String,
    pub difficulty: Difficulty,
    /// Duration as written in the source (e.g. `"1h 30m"`).
    pub duration: String,
    /// Duration in minutes, derived from `duration`.
    pub duration_minutes: u32,
    /// Student count.
    #[serde(rename = "students", skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub learning_objectives: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<String>,
}

impl CatalogItem {
    /// Create an item with the given id and title and empty attributes.
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            difficulty: Difficulty::default(),
            duration: String::new(),
            duration_minutes: 0,
            popularity: None,
            rating: None,
            icon: None,
            full_description: None,
            learning_objectives: Vec::new(),
            prerequisites: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<Difficulty>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Set the duration text; minutes are re-derived from it.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self.duration_minutes = parse_duration(&self.duration);
        self
    }

    pub fn with_popularity(mut self, students: u64) -> Self {
        self.popularity = Some(students);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Popularity for ranking. Missing counts as 0.
    pub fn popularity_rank(&self) -> u64 {
        self.popularity.unwrap_or(0)
    }

    /// Rating for ranking. Missing counts as 0, the worst possible.
    pub fn rating_rank(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Rating for display. Missing shows as 4.5.
    pub fn display_rating(&self) -> f64 {
        self.rating.unwrap_or(DISPLAY_RATING_DEFAULT)
    }

    /// Case-insensitive substring match on title, description and category.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }

    /// Long description, falling back to the short one.
    pub fn full_description(&self) -> &str {
        self.full_description.as_deref().unwrap_or(&self.description)
    }

    /// Prerequisites text, with the beginner-friendly default.
    pub fn prerequisites(&self) -> &str {
        self.prerequisites.as_deref().unwrap_or(DEFAULT_PREREQUISITES)
    }

    /// Learning objectives, or generic ones derived from the category.
    pub fn learning_objectives(&self) -> Vec<String> {
        if !self.learning_objectives.is_empty() {
            return self.learning_objectives.clone();
        }
        vec![
            format!("Master the fundamentals of {}", self.category),
            "Build practical projects and applications".to_string(),
            "Develop professional-level skills".to_string(),
            "Join a community of learners".to_string(),
        ]
    }
}

/// Wire shape of a catalog record. Every field is optional and loosely typed.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawItem {
    id: Value,
    title: Value,
    description: Value,
    category: Value,
    difficulty: Value,
    duration: Value,
    students: Value,
    rating: Value,
    icon: Value,
    full_description: Value,
    learning_objectives: Value,
    prerequisites: Value,
}

impl From<RawItem> for CatalogItem {
    fn from(raw: RawItem) -> Self {
        // A bare number of minutes is accepted in place of "1h 30m" text.
        let (duration, duration_minutes) = match &raw.duration {
            Value::String(s) => (s.clone(), parse_duration(s)),
            other => match lenient::count(other) {
                Some(m) => {
                    let m = u32::try_from(m).unwrap_or(u32::MAX);
                    (format_duration(m), m)
                }
                None => (String::new(), 0),
            },
        };

        Self {
            id: ItemId::from_value(&raw.id),
            title: lenient::string(&raw.title),
            description: lenient::string(&raw.description),
            category: lenient::string(&raw.category),
            difficulty: Difficulty::new(lenient::string(&raw.difficulty)),
            duration,
            duration_minutes,
            popularity: lenient::count(&raw.students),
            rating: lenient::float(&raw.rating),
            icon: lenient::opt_string(&raw.icon),
            full_description: lenient::opt_string(&raw.full_description),
            learning_objectives: lenient::string_list(&raw.learning_objectives),
            prerequisites: lenient::opt_string(&raw.prerequisites),
        }
    }
}
