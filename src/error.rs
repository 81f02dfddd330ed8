use thiserror::Error;

#[derive(Error, Debug)]
pub enum GpaError {
    #[error("unknown subject code: {0}")]
    UnknownSubjectCode(String),

    #[error("cannot compute GPA for an empty subject set")]
    EmptySubjectSet,

    #[error("no subject counts towards the GPA")]
    NoCountedSubjects,

    #[error("score out of range for {code}: {score} (scores start at 0)")]
    ScoreOutOfRange { code: String, score: i32 },

    #[error("invalid level: {0} (expected 1-4)")]
    InvalidLevel(String),

    #[error("subject {code} is not an elective at level {level}")]
    NotAnElective { code: String, level: u8 },

    #[error("subject entered more than once: {0}")]
    DuplicateSubject(String),

    #[error("catalog parse error: {0}")]
    CatalogParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GpaError {
    /// Errors caused by what the user typed, as opposed to broken files.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::UnknownSubjectCode(_)
                | Self::EmptySubjectSet
                | Self::NoCountedSubjects
                | Self::ScoreOutOfRange { .. }
                | Self::InvalidLevel(_)
                | Self::NotAnElective { .. }
                | Self::DuplicateSubject(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GpaError>;
