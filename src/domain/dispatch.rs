use super::backend::QueryBackend;
use super::response::AnalysisResponse;
use anyhow::Result;

pub const CONNECTION_ERROR_TEXT: &str = "Error connecting to backend";

/// Runs one request/response cycle and turns its outcome into the text shown
/// in the output box. Never fails: every error collapses into
/// [`CONNECTION_ERROR_TEXT`], with the cause sent to the log only.
pub async fn dispatch(backend: &dyn QueryBackend, query: &str) -> String {
    match exchange(backend, query).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "dispatch failed");
            CONNECTION_ERROR_TEXT.to_string()
        }
    }
}

async fn exchange(backend: &dyn QueryBackend, query: &str) -> Result<String> {
    let payload = backend.analyse(query).await?;
    let response = AnalysisResponse::decode(payload)?;
    if let AnalysisResponse::ApplicationError { error, .. } = &response {
        tracing::warn!(%error, "backend reported an error");
    }
    Ok(response.render()?)
}
