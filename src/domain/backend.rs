use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryBackend: Send + Sync {
    // POSTs the query as the `query` form field and returns the parsed JSON body
    async fn analyse(&self, query: &str) -> Result<Value>;

    // Shown in the header
    fn endpoint(&self) -> String;
}
