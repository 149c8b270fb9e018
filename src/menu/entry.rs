//! Menu entry types: courses, filter selector, identifiers, and the
//! candidate-to-entry validation step.

use super::error::ValidationError;
use std::fmt;
use uuid::Uuid;

// ─────────────────────────────────────────────────────────────────────────────
// Course
// ─────────────────────────────────────────────────────────────────────────────

/// The fixed set of menu categories every dish belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Course {
    #[default]
    Starter,
    Main,
    Dessert,
}

impl Course {
    /// All courses in display order
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    /// Singular label ("Starter")
    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
        }
    }

    /// Plural label used by the summary panel ("Starters")
    pub fn plural(&self) -> &'static str {
        match self {
            Course::Starter => "Starters",
            Course::Main => "Mains",
            Course::Dessert => "Desserts",
        }
    }

    /// Next course in the cycle (wraps around)
    pub fn next(self) -> Self {
        match self {
            Course::Starter => Course::Main,
            Course::Main => Course::Dessert,
            Course::Dessert => Course::Starter,
        }
    }

    /// Previous course in the cycle (wraps around)
    pub fn prev(self) -> Self {
        match self {
            Course::Starter => Course::Dessert,
            Course::Main => Course::Starter,
            Course::Dessert => Course::Main,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter selector
// ─────────────────────────────────────────────────────────────────────────────

/// Course filter for the list view: everything, or a single course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    /// Every selector value, in picker order
    pub const OPTIONS: [CourseFilter; 4] = [
        CourseFilter::All,
        CourseFilter::Only(Course::Starter),
        CourseFilter::Only(Course::Main),
        CourseFilter::Only(Course::Dessert),
    ];

    /// Whether an entry of `course` passes this filter
    pub fn matches(&self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(wanted) => *wanted == course,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourseFilter::All => "All",
            CourseFilter::Only(course) => course.as_str(),
        }
    }

    fn position(&self) -> usize {
        Self::OPTIONS
            .iter()
            .position(|option| option == self)
            .unwrap_or(0)
    }

    /// Next selector value (wraps around)
    pub fn next(self) -> Self {
        Self::OPTIONS[(self.position() + 1) % Self::OPTIONS.len()]
    }

    /// Previous selector value (wraps around)
    pub fn prev(self) -> Self {
        let len = Self::OPTIONS.len();
        Self::OPTIONS[(self.position() + len - 1) % len]
    }
}

impl From<Course> for CourseFilter {
    fn from(course: Course) -> Self {
        CourseFilter::Only(course)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque unique identifier assigned to an entry at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entries
// ─────────────────────────────────────────────────────────────────────────────

/// A single dish on the menu. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub id: EntryId,
    pub name: String,
    /// May be empty; the UI shows a placeholder instead
    pub description: String,
    pub course: Course,
    /// Non-negative, rounded to cents
    pub price: f64,
}

/// A dish as typed into the form, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub description: String,
    pub course: Course,
    /// Raw price text, parsed on submit
    pub price_text: String,
}

impl NewEntry {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        course: Course,
        price_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            course,
            price_text: price_text.into(),
        }
    }

    /// Validate the candidate and build an entry with a fresh id.
    ///
    /// Checks run in order: name, price presence, price value. The first
    /// failure wins.
    pub fn validate(&self) -> Result<MenuEntry, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let price = parse_price(&self.price_text)?;

        Ok(MenuEntry {
            id: EntryId::generate(),
            name: name.to_string(),
            description: self.description.trim().to_string(),
            course: self.course,
            price,
        })
    }
}

/// Parse user-entered price text into a non-negative amount rounded to cents
pub fn parse_price(text: &str) -> Result<f64, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::MissingPrice);
    }

    let value: f64 = text.parse().map_err(|_| ValidationError::InvalidPrice)?;
    // str::parse::<f64> accepts "inf" and "NaN"
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidPrice);
    }

    let rounded = round_cents(value);
    if !rounded.is_finite() {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(rounded)
}

/// Round to two decimal places. Negative zero comes back as `0.0`.
pub fn round_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
