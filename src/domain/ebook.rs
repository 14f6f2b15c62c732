//! Downloadable e-book artifact and its inline preview.

use crate::domain::Audience;

/// Content type advertised for generated e-books.
pub const HTML_CONTENT_TYPE: &str = "text/html";

const FILE_NAME_SUFFIX: &str = "_Career_Guide.html";

/// Sanitized document packaged for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EbookArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub content: String,
}

impl EbookArtifact {
    pub fn new(audience: &Audience, content: String) -> Self {
        Self { file_name: file_name_for(audience), content_type: HTML_CONTENT_TYPE, content }
    }

    /// Bounded-height view over the same content that is downloaded.
    pub fn preview(&self, max_lines: usize) -> Preview<'_> {
        let total = self.content.lines().count();
        let lines: Vec<&str> = self.content.lines().take(max_lines).collect();
        let hidden_lines = total.saturating_sub(lines.len());
        Preview { lines, hidden_lines }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// `Data Scientists` becomes `Data_Scientists_Career_Guide.html`.
///
/// Path separators are replaced as well so the name is always a single file.
pub fn file_name_for(audience: &Audience) -> String {
    let stem: String = audience
        .as_str()
        .chars()
        .map(|c| if matches!(c, ' ' | '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}{}", stem, FILE_NAME_SUFFIX)
}

/// Visible window of an artifact's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview<'a> {
    pub lines: Vec<&'a str>,
    pub hidden_lines: usize,
}

impl Preview<'_> {
    pub fn is_truncated(&self) -> bool {
        self.hidden_lines > 0
    }
}
