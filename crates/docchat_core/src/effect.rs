#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Submit each URL for ingestion, in order, one at a time.
    IngestUrls { urls: Vec<String> },
    /// Ask a question. `urls: None` means "search everything ingested".
    Ask {
        question: String,
        urls: Option<Vec<String>>,
    },
}
