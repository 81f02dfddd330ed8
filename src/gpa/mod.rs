pub mod advanced;
pub mod normal;

use crate::error::Result;
use crate::types::subject::{Level, ScoredSubject, Subject};
use serde::Serialize;
use tracing::info;

/// Constants the engine applies when weighting and counting subjects.
#[derive(Debug, Clone, PartialEq)]
pub struct GpaPolicy {
    pub advanced_level: Level,
    pub reduced_weight_code: String,
    pub reduced_weight: f64,
    pub double_count_code: String,
}

impl Default for GpaPolicy {
    fn default() -> Self {
        Self {
            advanced_level: Level::HIGHEST,
            reduced_weight_code: "ss".to_string(),
            reduced_weight: 0.5,
            double_count_code: "maths".to_string(),
        }
    }
}

impl GpaPolicy {
    pub fn weight_of(&self, subject: &Subject) -> f64 {
        if subject.code == self.reduced_weight_code {
            self.reduced_weight
        } else {
            1.0
        }
    }

    pub fn algorithm_for(&self, level: Level) -> Algorithm {
        if level == self.advanced_level {
            Algorithm::Advanced
        } else {
            Algorithm::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Every subject counts, weighted.
    Normal,
    /// Compulsory subjects plus the best elective of each bucket.
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpaOutcome {
    pub algorithm: Algorithm,
    pub gpa: f64,
}

/// Computes the GPA for `level`, annotating `subjects` when the advanced
/// algorithm applies.
pub fn compute(
    level: Level,
    subjects: &mut [ScoredSubject],
    policy: &GpaPolicy,
) -> Result<GpaOutcome> {
    let algorithm = policy.algorithm_for(level);
    let gpa = match algorithm {
        Algorithm::Normal => normal::compute_normal(subjects, policy)?,
        Algorithm::Advanced => advanced::compute_advanced(subjects, policy)?,
    };
    info!(%level, ?algorithm, gpa, "gpa computed");
    Ok(GpaOutcome { algorithm, gpa })
}

/// Rounds to 2 decimals, exact ties to even.
///
/// Float formatting works on the exact binary value, so 2.675 (stored just
/// below the tie) gives 2.67 and 3.125 gives 3.12.
pub(crate) fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}


#[cfg(test)]
mod tests {
    use super::testing::scored;
    use super::*;
    use crate::error::GpaError;
    use crate::types::subject::{Category, CountingStatus};

    fn level(raw: u8) -> Level {
        Level::try_from(raw).expect("valid level")
    }

    #[test]
    fn default_policy_matches_fixed_rules() {
        let policy = GpaPolicy::default();
        assert_eq!(policy.advanced_level.get(), 4);
        let ss = scored("ss", Category::Humanities, true, 70);
        let maths = scored("maths", Category::Maths, true, 70);
        assert_eq!(policy.weight_of(&ss.subject), 0.5);
        assert_eq!(policy.weight_of(&maths.subject), 1.0);
    }

    #[test]
    fn compute_dispatches_on_level() {
        let policy = GpaPolicy::default();
        for raw in 1..=3 {
            let mut subjects = vec![
                scored("maths", Category::Maths, true, 90),
                scored("phy", Category::Science, false, 20),
            ];
            let outcome = compute(level(raw), &mut subjects, &policy).expect("gpa");
            assert_eq!(outcome.algorithm, Algorithm::Normal);
            assert_eq!(outcome.gpa, 2.5);
            assert!(subjects.iter().all(|subject| subject.status.is_none()));
        }

        let mut subjects = vec![
            scored("maths", Category::Maths, true, 90),
            scored("phy", Category::Science, false, 20),
        ];
        let outcome = compute(level(4), &mut subjects, &policy).expect("gpa");
        assert_eq!(outcome.algorithm, Algorithm::Advanced);
        assert!(subjects.iter().all(|subject| subject.status.is_some()));
        assert_eq!(subjects[1].status, Some(CountingStatus::Counted));
    }

    #[test]
    fn custom_advanced_level_is_respected() {
        let policy = GpaPolicy {
            advanced_level: level(3),
            ..GpaPolicy::default()
        };
        assert_eq!(policy.algorithm_for(level(3)), Algorithm::Advanced);
        assert_eq!(policy.algorithm_for(level(4)), Algorithm::Normal);
    }

    #[test]
    fn compute_fails_on_empty_input_for_both_algorithms() {
        let policy = GpaPolicy::default();
        for raw in [1, 4] {
            let err = compute(level(raw), &mut [], &policy).expect_err("empty set should fail");
            assert!(matches!(err, GpaError::EmptySubjectSet));
        }
    }

    #[test]
    fn round2_rounds_exact_ties_to_even() {
        assert_eq!(round2(7.0 / 1.5), 4.67);
        assert_eq!(round2(3.125), 3.12);
        assert_eq!(round2(3.375), 3.38);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(4.0), 4.0);
    }
}
