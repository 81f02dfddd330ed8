use crate::gpa::Algorithm;
use crate::types::subject::{Level, ScoredSubject};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GpaReport {
    pub level: Level,
    pub algorithm: Algorithm,
    pub gpa: f64,
    pub subjects: Vec<ScoredSubject>,
    pub generated_at: String,
}

impl GpaReport {
    pub fn new(
        level: Level,
        algorithm: Algorithm,
        gpa: f64,
        subjects: Vec<ScoredSubject>,
    ) -> Self {
        Self {
            level,
            algorithm,
            gpa,
            subjects,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}
