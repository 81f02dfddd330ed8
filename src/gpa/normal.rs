use super::{round2, GpaPolicy};
use crate::error::{GpaError, Result};
use crate::types::subject::ScoredSubject;

/// Weighted mean of every subject's grade point, rounded to 2 decimals.
pub fn compute_normal(subjects: &[ScoredSubject], policy: &GpaPolicy) -> Result<f64> {
    if subjects.is_empty() {
        return Err(GpaError::EmptySubjectSet);
    }

    let (total, weight) = subjects.iter().fold((0.0, 0.0), |(total, weight), scored| {
        let subject_weight = policy.weight_of(&scored.subject);
        (
            total + scored.grade.grade_point * subject_weight,
            weight + subject_weight,
        )
    });

    Ok(round2(total / weight))
}
