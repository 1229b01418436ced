use crate::api::CsvDataset;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BulkOperation {
    #[default]
    ExportStudents,
    ExportEnrollments,
    ImportStudents,
    BulkEnroll,
}

impl BulkOperation {
    pub const ALL: [BulkOperation; 4] = [
        BulkOperation::ExportStudents,
        BulkOperation::ExportEnrollments,
        BulkOperation::ImportStudents,
        BulkOperation::BulkEnroll,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BulkOperation::ExportStudents => "export-students",
            BulkOperation::ExportEnrollments => "export-enrollments",
            BulkOperation::ImportStudents => "import-students",
            BulkOperation::BulkEnroll => "bulk-enroll",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.key() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BulkOperation::ExportStudents => "Export students",
            BulkOperation::ExportEnrollments => "Export enrollments",
            BulkOperation::ImportStudents => "Import students",
            BulkOperation::BulkEnroll => "Bulk enroll students",
        }
    }

    pub fn dataset(&self) -> CsvDataset {
        match self {
            BulkOperation::ExportStudents | BulkOperation::ImportStudents => CsvDataset::Students,
            BulkOperation::ExportEnrollments | BulkOperation::BulkEnroll => {
                CsvDataset::Enrollments
            }
        }
    }

    pub fn is_import(&self) -> bool {
        matches!(
            self,
            BulkOperation::ImportStudents | BulkOperation::BulkEnroll
        )
    }
}

/// Result lines prefixed with `Error:` are row failures.
pub fn is_error_line(line: &str) -> bool {
    line.trim_start().starts_with("Error:")
}

pub fn error_line_count(lines: &[String]) -> usize {
    lines.iter().filter(|line| is_error_line(line)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn operations_map_to_datasets() {
        assert_eq!(BulkOperation::BulkEnroll.dataset(), CsvDataset::Enrollments);
        assert_eq!(BulkOperation::ImportStudents.dataset(), CsvDataset::Students);
        assert!(!BulkOperation::ExportStudents.is_import());
        assert_eq!(
            BulkOperation::parse("bulk-enroll"),
            Some(BulkOperation::BulkEnroll)
        );
        assert_eq!(BulkOperation::parse("drop-all"), None);
    }

    #[wasm_bindgen_test]
    fn error_lines_are_counted() {
        let lines = vec![
            "Row 1: created STU020".to_string(),
            "Error: row 2 is missing a registration number".to_string(),
            "  Error: row 3 duplicates STU001".to_string(),
        ];
        assert_eq!(error_line_count(&lines), 2);
        assert!(!is_error_line(&lines[0]));
    }
}
