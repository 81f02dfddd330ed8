//! GPA for the most advanced level: every compulsory subject, plus the best
//! Science elective, the best Humanities elective and the best remaining
//! Science/Humanities/Maths subject.
//!
//! A subject matching both rules is added to the totals twice. Only the
//! double-count subject (maths by default) is labelled as such; any other
//! subject keeps a single `Counted` label.

use super::{round2, GpaPolicy};
use crate::error::{GpaError, Result};
use crate::types::subject::{Category, CountingStatus, ScoredSubject};
use tracing::debug;

#[derive(Debug, Default, PartialEq)]
struct Picks {
    science: Option<String>,
    humanities: Option<String>,
    other: Option<String>,
}

impl Picks {
    fn contains(&self, code: &str) -> bool {
        [&self.science, &self.humanities, &self.other]
            .into_iter()
            .flatten()
            .any(|picked| picked == code)
    }
}

/// Keeps the earlier subject on equal scores.
///
/// Picks start empty, so an elective scored 0 can still win its bucket.
/// Seeding each pick at score 0 with a strict `>` would never select it.
fn keep_best<'a>(
    best: Option<&'a ScoredSubject>,
    candidate: &'a ScoredSubject,
) -> Option<&'a ScoredSubject> {
    match best {
        Some(current) if candidate.score <= current.score => Some(current),
        _ => Some(candidate),
    }
}

fn select_picks(subjects: &[ScoredSubject], policy: &GpaPolicy) -> Picks {
    let mut best_science = None;
    let mut best_humanities = None;
    for scored in subjects {
        match scored.subject.category {
            Category::Science => best_science = keep_best(best_science, scored),
            Category::Humanities if scored.code() != policy.reduced_weight_code => {
                best_humanities = keep_best(best_humanities, scored)
            }
            _ => {}
        }
    }

    let science = best_science.map(|scored| scored.code().to_string());
    let humanities = best_humanities.map(|scored| scored.code().to_string());

    let mut best_other = None;
    for scored in subjects {
        let code = scored.code();
        if scored.subject.category.is_elective_bucket()
            && code != policy.reduced_weight_code
            && science.as_deref() != Some(code)
            && humanities.as_deref() != Some(code)
        {
            best_other = keep_best(best_other, scored);
        }
    }

    Picks {
        science,
        humanities,
        other: best_other.map(|scored| scored.code().to_string()),
    }
}

/// Computes the advanced-level GPA and sets `status` on every subject.
pub fn compute_advanced(subjects: &mut [ScoredSubject], policy: &GpaPolicy) -> Result<f64> {
    if subjects.is_empty() {
        return Err(GpaError::EmptySubjectSet);
    }

    let picks = select_picks(subjects, policy);
    debug!(
        science = ?picks.science,
        humanities = ?picks.humanities,
        other = ?picks.other,
        "best electives selected"
    );

    let mut total_gpa = 0.0;
    let mut total_weight = 0.0;

    for scored in subjects.iter_mut() {
        scored.status = None;

        if scored.subject.compulsory {
            let weight = policy.weight_of(&scored.subject);
            total_gpa += scored.grade.grade_point * weight;
            total_weight += weight;
            scored.status = Some(CountingStatus::Counted);
        }

        if picks.contains(scored.code()) {
            total_gpa += scored.grade.grade_point;
            total_weight += 1.0;
            let already_counted = scored.status == Some(CountingStatus::Counted);
            scored.status = if already_counted && scored.code() == policy.double_count_code {
                Some(CountingStatus::DoubleCounted)
            } else {
                Some(CountingStatus::Counted)
            };
        }

        if scored.status.is_none() {
            scored.status = Some(CountingStatus::Uncounted);
        }
    }

    if total_weight == 0.0 {
        return Err(GpaError::NoCountedSubjects);
    }

    Ok(round2(total_gpa / total_weight))
}
