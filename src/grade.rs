use crate::error::{GpaError, Result};
use serde::Serialize;

/// Grade point and letter awarded for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Grade {
    pub grade_point: f64,
    pub letter: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub min_score: i32,
    pub grade: Grade,
}

const fn threshold(min_score: i32, grade_point: f64, letter: &'static str) -> Threshold {
    Threshold {
        min_score,
        grade: Grade {
            grade_point,
            letter,
        },
    }
}

/// Ordered by descending `min_score`, ending with a floor at 0.
pub const CONVERSION_TABLE: [Threshold; 10] = [
    threshold(85, 5.0, "A*"),
    threshold(75, 4.0, "A1"),
    threshold(70, 3.5, "A2"),
    threshold(65, 3.0, "B3"),
    threshold(60, 2.5, "B4"),
    threshold(55, 2.0, "C5"),
    threshold(50, 1.5, "C6"),
    threshold(45, 1.0, "D7"),
    threshold(40, 0.5, "E8"),
    threshold(0, 0.0, "F9"),
];

/// Converts a score to its grade by walking the table from the top band down.
///
/// Negative scores are rejected. Scores above 100 land in the top band.
pub fn convert(score: i32) -> Option<Grade> {
    CONVERSION_TABLE
        .iter()
        .find(|row| score >= row.min_score)
        .map(|row| row.grade)
}

/// Like [`convert`], but names the subject when the score is unusable.
pub fn convert_for(code: &str, score: i32) -> Result<Grade> {
    convert(score).ok_or_else(|| GpaError::ScoreOutOfRange {
        code: code.to_string(),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_strictly_descending_with_zero_floor() {
        assert!(CONVERSION_TABLE
            .windows(2)
            .all(|pair| pair[0].min_score > pair[1].min_score));
        assert_eq!(CONVERSION_TABLE.last().map(|row| row.min_score), Some(0));
    }

    #[test]
    fn band_edges_convert_to_expected_grades() {
        let cases = [
            (85, 5.0, "A*"),
            (84, 4.0, "A1"),
            (75, 4.0, "A1"),
            (74, 3.5, "A2"),
            (65, 3.0, "B3"),
            (60, 2.5, "B4"),
            (55, 2.0, "C5"),
            (50, 1.5, "C6"),
            (45, 1.0, "D7"),
            (40, 0.5, "E8"),
            (39, 0.0, "F9"),
            (0, 0.0, "F9"),
        ];
        for (score, point, letter) in cases {
            let grade = convert(score).expect("score in range should convert");
            assert_eq!(grade.grade_point, point, "grade point for {score}");
            assert_eq!(grade.letter, letter, "letter for {score}");
        }
    }

    #[test]
    fn every_score_maps_to_the_tightest_band() {
        for score in 0..=100 {
            let grade = convert(score).expect("score should convert");
            let expected = CONVERSION_TABLE
                .iter()
                .filter(|row| row.min_score <= score)
                .max_by_key(|row| row.min_score)
                .map(|row| row.grade)
                .expect("floor row always matches");
            assert_eq!(grade, expected);
        }
    }

    #[test]
    fn scores_above_hundred_use_top_band() {
        assert_eq!(convert(140).map(|grade| grade.letter), Some("A*"));
    }

    #[test]
    fn negative_scores_are_rejected() {
        assert!(convert(-1).is_none());
        let err = convert_for("maths", -5).expect_err("negative score should fail");
        assert!(err.to_string().contains("score out of range for maths: -5"));
    }
}
