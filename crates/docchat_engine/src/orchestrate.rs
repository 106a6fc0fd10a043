use docchat_logging::{docchat_debug, docchat_info, docchat_warn};

use crate::{Backend, BackendError, ChatRequest, ChatResponse};

/// Submits each URL in order, awaiting every request before issuing the next.
///
/// Stops at the first failure; later URLs are never sent. Returns how many
/// URLs were ingested.
pub async fn ingest_all(backend: &dyn Backend, urls: &[String]) -> Result<usize, BackendError> {
    let total = urls.len();
    for (index, url) in urls.iter().enumerate() {
        docchat_debug!("Ingest {}/{} url={}", index + 1, total, url);
        if let Err(err) = backend.ingest(url).await {
            docchat_warn!(
                "Ingest {}/{} failed url={} error={}; skipping {} remaining",
                index + 1,
                total,
                url,
                err,
                total - index - 1
            );
            return Err(err);
        }
    }
    docchat_info!("Ingested {} url(s)", total);
    Ok(total)
}

/// Asks one question, logging the outcome.
pub async fn ask(
    backend: &dyn Backend,
    request: &ChatRequest,
) -> Result<ChatResponse, BackendError> {
    docchat_debug!(
        "Chat question_len={} scoped_urls={:?}",
        request.question.len(),
        request.urls.as_ref().map(Vec::len)
    );
    match backend.chat(request).await {
        Ok(response) => {
            docchat_info!(
                "Chat answered answer_len={} sources={}",
                response.answer.len(),
                response.sources.as_ref().map_or(0, Vec::len)
            );
            Ok(response)
        }
        Err(err) => {
            docchat_warn!("Chat failed: {}", err);
            Err(err)
        }
    }
}
