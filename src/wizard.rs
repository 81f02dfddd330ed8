//! The three-step flow: choose electives, list the score sheet, compute.

use crate::catalog::SubjectCatalog;
use crate::error::{GpaError, Result};
use crate::gpa::{self, GpaPolicy};
use crate::grade;
use crate::types::report::GpaReport;
use crate::types::subject::{Category, Level, ScoredSubject, Subject};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, warn};

/// A `code=score` pair as entered by the student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub code: String,
    pub score: i32,
}

impl FromStr for ScoreEntry {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (code, score) = s
            .split_once('=')
            .ok_or_else(|| format!("expected CODE=SCORE, found {s:?}"))?;
        let code = code.trim();
        if code.is_empty() {
            return Err(format!("missing subject code in {s:?}"));
        }
        let score = score
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("score must be a whole number in {s:?}"))?;
        Ok(Self {
            code: code.to_string(),
            score,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElectiveOptions<'a> {
    pub compulsory: Vec<&'a Subject>,
    pub science: Vec<&'a Subject>,
    pub humanities: Vec<&'a Subject>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElectiveStep<'a> {
    /// Every subject at the level is taken; go straight to scores.
    NotRequired,
    Choose(ElectiveOptions<'a>),
}

pub fn elective_options(catalog: &SubjectCatalog, level: Level) -> ElectiveStep<'_> {
    if !catalog.offers_electives(level) {
        return ElectiveStep::NotRequired;
    }

    let mut options = ElectiveOptions {
        compulsory: Vec::new(),
        science: Vec::new(),
        humanities: Vec::new(),
    };
    for subject in catalog.subjects_for_level(level) {
        if subject.compulsory {
            options.compulsory.push(subject);
        } else {
            match subject.category {
                Category::Science => options.science.push(subject),
                Category::Humanities => options.humanities.push(subject),
                Category::Maths | Category::Other => {}
            }
        }
    }
    ElectiveStep::Choose(options)
}

fn is_selectable_elective(subject: &Subject, level: Level) -> bool {
    subject.offered_at(level)
        && !subject.compulsory
        && matches!(subject.category, Category::Science | Category::Humanities)
}

/// Subjects the student enters scores for, in catalog order.
pub fn score_sheet<'a>(
    catalog: &'a SubjectCatalog,
    level: Level,
    electives: &[String],
) -> Result<Vec<&'a Subject>> {
    let mut chosen = HashSet::new();
    for code in electives {
        let subject = catalog.subject_by_code(code)?;
        if !is_selectable_elective(subject, level) {
            return Err(GpaError::NotAnElective {
                code: code.clone(),
                level: level.get(),
            });
        }
        if !chosen.insert(subject.code.as_str()) {
            return Err(GpaError::DuplicateSubject(code.clone()));
        }
    }
    debug!(%level, electives = ?chosen, "electives chosen");

    let takes_everything = !catalog.offers_electives(level);
    Ok(catalog
        .subjects_for_level(level)
        .into_iter()
        .filter(|subject| {
            takes_everything || subject.compulsory || chosen.contains(subject.code.as_str())
        })
        .collect())
}

/// Builds fresh scored copies of the catalog rows named in `entries`.
pub fn score_subjects(
    catalog: &SubjectCatalog,
    level: Level,
    entries: &[ScoreEntry],
) -> Result<Vec<ScoredSubject>> {
    let mut seen = HashSet::new();
    let mut scored = Vec::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.code.as_str()) {
            return Err(GpaError::DuplicateSubject(entry.code.clone()));
        }
        let subject = catalog.subject_by_code(&entry.code)?;
        if !subject.offered_at(level) {
            warn!(code = %subject.code, %level, "subject is not offered at this level");
        }
        let grade = grade::convert_for(&subject.code, entry.score)?;
        scored.push(ScoredSubject::new(subject.clone(), entry.score, grade));
    }
    Ok(scored)
}

pub fn compute_result(
    catalog: &SubjectCatalog,
    policy: &GpaPolicy,
    level: Level,
    entries: &[ScoreEntry],
) -> Result<GpaReport> {
    let mut subjects = score_subjects(catalog, level, entries)?;
    let outcome = gpa::compute(level, &mut subjects, policy)?;
    Ok(GpaReport::new(level, outcome.algorithm, outcome.gpa, subjects))
}
