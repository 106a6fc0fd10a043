#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the resource-list input.
    UrlsInputChanged(String),
    /// User edited the question input.
    QuestionInputChanged(String),
    /// User asked to ingest the current resource list.
    IngestClicked,
    /// User submitted the current question.
    AskClicked,
    /// Every URL of the last ingestion batch was accepted.
    IngestSucceeded,
    /// An ingestion request failed; the rest of the batch was skipped.
    IngestFailed,
    /// The backend answered the outstanding question.
    AnswerReceived {
        answer: String,
        sources: Vec<crate::Source>,
    },
    /// The outstanding question could not be answered.
    AskFailed,
}
