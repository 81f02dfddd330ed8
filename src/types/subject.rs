use crate::error::GpaError;
use crate::grade::Grade;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 4;

/// A school-year stage. Only levels 1 through 4 exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    pub const HIGHEST: Level = Level(MAX_LEVEL);

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Level {
    type Error = GpaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GpaError::InvalidLevel(value.to_string()))
        }
    }
}

impl FromStr for Level {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| GpaError::InvalidLevel(trimmed.to_string()))
            .and_then(Level::try_from)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Science,
    Humanities,
    Maths,
    Other,
}

impl Category {
    /// Categories that take part in the "best other" elective pick.
    pub fn is_elective_bucket(self) -> bool {
        matches!(self, Self::Science | Self::Humanities | Self::Maths)
    }
}

impl FromStr for Category {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Science" => Ok(Self::Science),
            "Humanities" => Ok(Self::Humanities),
            "Maths" => Ok(Self::Maths),
            "Other" => Ok(Self::Other),
            other => Err(GpaError::CatalogParse(format!("unknown category: {other}"))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Science => "Science",
            Self::Humanities => "Humanities",
            Self::Maths => "Maths",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subject {
    pub name: String,
    pub code: String,
    pub category: Category,
    pub levels: BTreeSet<Level>,
    pub compulsory: bool,
}

impl Subject {
    pub fn offered_at(&self, level: Level) -> bool {
        self.levels.contains(&level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CountingStatus {
    Counted,
    DoubleCounted,
    Uncounted,
}

impl fmt::Display for CountingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Counted => "counted",
            Self::DoubleCounted => "double counted",
            Self::Uncounted => "not counted",
        };
        f.write_str(label)
    }
}

/// A catalog subject copied for one computation, with the student's score.
///
/// `status` stays `None` under the normal algorithm; the advanced algorithm
/// fills it in for every subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSubject {
    #[serde(flatten)]
    pub subject: Subject,
    pub score: i32,
    #[serde(flatten)]
    pub grade: Grade,
    pub status: Option<CountingStatus>,
}

impl ScoredSubject {
    pub fn new(subject: Subject, score: i32, grade: Grade) -> Self {
        Self {
            subject,
            score,
            grade,
            status: None,
        }
    }

    pub fn code(&self) -> &str {
        &self.subject.code
    }
}
