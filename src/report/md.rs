use crate::gpa::Algorithm;
use crate::types::report::GpaReport;

pub fn to_markdown(report: &GpaReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# GPA Result: Level {}\n\n", report.level));
    output.push_str(&format!("GPA: {:.2}\n\n", report.gpa));
    output.push_str("## Subjects\n\n");

    for scored in &report.subjects {
        let mut line = format!(
            "- {} ({}): {} -> {} ({:.1})",
            scored.subject.name,
            scored.subject.code,
            scored.score,
            scored.grade.letter,
            scored.grade.grade_point
        );
        if let Some(status) = scored.status {
            line.push_str(&format!(" [{status}]"));
        }
        output.push_str(&line);
        output.push('\n');
    }

    if report.algorithm == Algorithm::Advanced {
        output.push_str(
            "\nCounted: compulsory subjects plus the best Science, Humanities and other elective.\n",
        );
    }

    output
}
