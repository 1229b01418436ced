use crate::api::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Transcript,
    Certificate,
}

impl DocumentKind {
    pub fn filename(&self) -> &'static str {
        match self {
            DocumentKind::Transcript => "transcript.pdf",
            DocumentKind::Certificate => "certificate.pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Transcript => "Download transcript",
            DocumentKind::Certificate => "Download certificate",
        }
    }
}

pub fn format_gpa(gpa: Option<f64>) -> String {
    gpa.map(|value| format!("{:.2}", value))
        .unwrap_or_else(|| "N/A".to_string())
}

/// Courses on the transcript that already carry a grade.
pub fn graded_count(transcript: &Transcript) -> usize {
    transcript
        .courses
        .iter()
        .filter(|course| course.grade.as_deref().is_some_and(|g| !g.trim().is_empty()))
        .count()
}
