/// A citation returned by the backend for one answer.
///
/// `score` is opaque to the client and is never ranked or validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub url: String,
    pub title: Option<String>,
    pub chunk_index: i64,
    pub score: f64,
}

impl Source {
    /// Display label: the title when present and non-empty, otherwise the url.
    pub fn label(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.url,
        }
    }
}

/// Sources cited by the most recent successful answer.
///
/// The set is only ever replaced as a whole. `revision` counts replacements so
/// a renderer can tell a fresh set from a redraw of the same one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CitationPanel {
    sources: Vec<Source>,
    revision: u64,
}

impl CitationPanel {
    pub fn replace(&mut self, sources: Vec<Source>) {
        self.sources = sources;
        self.revision += 1;
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
