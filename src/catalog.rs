use crate::error::{GpaError, Result};
use crate::types::subject::{Category, Level, Subject};
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

const BUILTIN_CATALOG: &str = include_str!("../data/subjects.csv");

#[derive(Debug, Deserialize)]
struct SubjectRow {
    name: String,
    code: String,
    category: String,
    levels: String,
    compulsory: String,
}

/// Read-only list of subject definitions, built once at startup.
#[derive(Debug, Clone)]
pub struct SubjectCatalog {
    subjects: Vec<Subject>,
}

impl SubjectCatalog {
    pub fn builtin() -> Result<Self> {
        Self::from_reader(BUILTIN_CATALOG.as_bytes())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| GpaError::CatalogParse(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), subjects = catalog.subjects.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut subjects = Vec::new();
        let mut seen = HashSet::new();

        for (index, result) in rdr.deserialize().enumerate() {
            let row: SubjectRow = result?;
            // header is line 1
            let line = index + 2;
            let subject = parse_row(row).map_err(|e| match e {
                GpaError::CatalogParse(msg) => GpaError::CatalogParse(format!("line {line}: {msg}")),
                other => other,
            })?;
            if !seen.insert(subject.code.clone()) {
                return Err(GpaError::CatalogParse(format!(
                    "line {line}: duplicate subject code: {}",
                    subject.code
                )));
            }
            subjects.push(subject);
        }

        if subjects.is_empty() {
            return Err(GpaError::CatalogParse("catalog has no subjects".to_string()));
        }

        Ok(Self { subjects })
    }

    pub fn subjects_for_level(&self, level: Level) -> Vec<&Subject> {
        self.subjects
            .iter()
            .filter(|subject| subject.offered_at(level))
            .collect()
    }

    pub fn subject_by_code(&self, code: &str) -> Result<&Subject> {
        self.subjects
            .iter()
            .find(|subject| subject.code == code)
            .ok_or_else(|| GpaError::UnknownSubjectCode(code.to_string()))
    }

    /// Whether a student at `level` picks electives before entering scores.
    pub fn offers_electives(&self, level: Level) -> bool {
        self.subjects_for_level(level)
            .iter()
            .any(|subject| !subject.compulsory)
    }
}

fn parse_row(row: SubjectRow) -> Result<Subject> {
    if row.code.is_empty() {
        return Err(GpaError::CatalogParse("subject code must be non-empty".to_string()));
    }

    let category = row.category.parse::<Category>()?;
    let levels = parse_levels(&row.levels)?;
    let compulsory = match row.compulsory.as_str() {
        "T" => true,
        "F" => false,
        other => {
            return Err(GpaError::CatalogParse(format!(
                "compulsory flag for {} must be T or F, found {other:?}",
                row.code
            )))
        }
    };

    Ok(Subject {
        name: row.name,
        code: row.code,
        category,
        levels,
        compulsory,
    })
}

fn parse_levels(raw: &str) -> Result<BTreeSet<Level>> {
    let mut levels = BTreeSet::new();
    for ch in raw.chars().filter(|ch| !ch.is_whitespace()) {
        let digit = ch
            .to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .ok_or_else(|| GpaError::CatalogParse(format!("invalid level list: {raw:?}")))?;
        let level = Level::try_from(digit)
            .map_err(|_| GpaError::CatalogParse(format!("level out of range in {raw:?}")))?;
        levels.insert(level);
    }
    if levels.is_empty() {
        return Err(GpaError::CatalogParse("subject has no levels".to_string()));
    }
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn level(raw: u8) -> Level {
        Level::try_from(raw).expect("valid level")
    }

    #[test]
    fn builtin_catalog_parses() {
        let catalog = SubjectCatalog::builtin().expect("builtin catalog should parse");
        let ss = catalog.subject_by_code("ss").expect("ss should exist");
        assert_eq!(ss.category, Category::Humanities);
        assert!(ss.compulsory);
        assert!(ss.offered_at(level(4)));
        assert!(!ss.offered_at(level(1)));
    }

    #[test]
    fn subjects_for_level_filters_by_applicable_levels() {
        let catalog = SubjectCatalog::from_reader(
            "name,code,category,levels,compulsory\n\
             Mathematics,maths,Maths,1234,T\n\
             Physics,phy,Science,34,F\n"
                .as_bytes(),
        )
        .expect("catalog should parse");

        let lower: Vec<_> = catalog
            .subjects_for_level(level(1))
            .iter()
            .map(|subject| subject.code.as_str())
            .collect();
        let upper: Vec<_> = catalog
            .subjects_for_level(level(3))
            .iter()
            .map(|subject| subject.code.as_str())
            .collect();
        assert_eq!(lower, vec!["maths"]);
        assert_eq!(upper, vec!["maths", "phy"]);
        assert!(!catalog.offers_electives(level(1)));
        assert!(catalog.offers_electives(level(3)));
    }

    #[test]
    fn subject_by_code_reports_unknown_codes() {
        let catalog = SubjectCatalog::builtin().expect("builtin catalog should parse");
        let err = catalog
            .subject_by_code("astro")
            .expect_err("unknown code should fail");
        assert!(matches!(err, GpaError::UnknownSubjectCode(code) if code == "astro"));
    }

    #[test]
    fn duplicate_codes_are_rejected_with_line_number() {
        let err = SubjectCatalog::from_reader(
            "name,code,category,levels,compulsory\n\
             Physics,phy,Science,34,F\n\
             Physics Again,phy,Science,34,F\n"
                .as_bytes(),
        )
        .expect_err("duplicate should fail");
        assert!(err.to_string().contains("line 3: duplicate subject code: phy"));
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let cases = [
            ("Art,art,Crafts,12,T", "unknown category"),
            ("Art,art,Other,15,T", "level out of range"),
            ("Art,art,Other,1x,T", "invalid level list"),
            ("Art,art,Other,12,Y", "must be T or F"),
            ("Art,art,Other,,T", "no levels"),
        ];
        for (row, message) in cases {
            let input = format!("name,code,category,levels,compulsory\n{row}\n");
            let err = SubjectCatalog::from_reader(input.as_bytes())
                .expect_err("malformed row should fail");
            assert!(
                err.to_string().contains(message),
                "{row}: expected {message:?} in {err}"
            );
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = SubjectCatalog::from_reader("name,code,category,levels,compulsory\n".as_bytes())
            .expect_err("empty catalog should fail");
        assert!(err.to_string().contains("catalog has no subjects"));
    }

    #[test]
    fn load_reads_catalog_from_disk() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("subjects.csv");
        fs::write(
            &path,
            "name,code,category,levels,compulsory\nBiology, bio ,Science,3 4,F\n",
        )
        .expect("catalog should write");

        let catalog = SubjectCatalog::load(&path).expect("catalog should load");
        let bio = catalog.subject_by_code("bio").expect("bio should exist");
        assert_eq!(bio.levels.len(), 2);
        assert!(!bio.compulsory);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = SubjectCatalog::load(&dir.path().join("missing.csv"))
            .expect_err("missing file should fail");
        assert!(matches!(err, GpaError::CatalogParse(_)));
    }
}
