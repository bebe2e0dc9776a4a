use crate::domain::backend::QueryBackend;
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://tds-p2-xn6o.onrender.com/api/";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid endpoint {endpoint}: {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct HttpBackend {
    client: Client,
    endpoint: Url,
}

impl HttpBackend {
    pub fn new(endpoint: &str) -> Result<Self, BackendError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(endpoint, client)
    }

    pub fn with_client(endpoint: &str, client: Client) -> Result<Self, BackendError> {
        let url = Url::parse(endpoint).map_err(|e| BackendError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(BackendError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                message: format!("unsupported scheme `{}`", url.scheme()),
            });
        }

        Ok(Self {
            client,
            endpoint: url,
        })
    }

    async fn post_query(&self, query: &str) -> Result<Value, BackendError> {
        let form = Form::new().text("query", query.to_string());

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        // Status is informational only; the body decides the outcome.
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, endpoint = %self.endpoint, "non-success status from backend");
        }

        let body = response.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "backend responded");
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl QueryBackend for HttpBackend {
    async fn analyse(&self, query: &str) -> anyhow::Result<Value> {
        Ok(self.post_query(query).await?)
    }

    fn endpoint(&self) -> String {
        self.endpoint.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    // One-shot HTTP server: captures the raw request and answers with `body`.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let reply = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{addr}/api/"), handle)
    }

    fn local(endpoint: &str) -> HttpBackend {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpBackend::with_client(endpoint, client).unwrap()
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&data).to_string();
            let Some(header_end) = text.find("\r\n\r\n") else {
                continue;
            };
            let headers = text[..header_end].to_ascii_lowercase();
            let body_len = data.len() - (header_end + 4);

            if let Some(len) = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
            {
                if body_len >= len {
                    break;
                }
            } else if headers.contains("transfer-encoding: chunked") && text.ends_with("0\r\n\r\n")
            {
                break;
            }
        }
        String::from_utf8_lossy(&data).to_string()
    }

    #[tokio::test]
    async fn test_posts_query_as_multipart_field() {
        let (endpoint, server) = serve_once("200 OK", r#""hello""#).await;
        let backend = local(&endpoint);

        let value = backend.analyse("how many rows?").await.unwrap();
        assert_eq!(value, json!("hello"));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/ HTTP/1.1"));
        let lower = request.to_ascii_lowercase();
        assert!(lower.contains("content-type: multipart/form-data; boundary="));
        assert!(request.contains("Content-Disposition: form-data; name=\"query\""));
        assert!(request.contains("\r\n\r\nhow many rows?\r\n"));
    }

    #[tokio::test]
    async fn test_non_success_status_still_parses_json() {
        let (endpoint, server) =
            serve_once("500 Internal Server Error", r#"{"error":"boom","raw":null}"#).await;
        let backend = local(&endpoint);

        let value = backend.analyse("q").await.unwrap();
        assert_eq!(value, json!({"error": "boom", "raw": null}));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let (endpoint, server) = serve_once("200 OK", "<html>bad gateway</html>").await;
        let backend = local(&endpoint);

        let err = backend.post_query("q").await.unwrap_err();
        assert!(matches!(err, BackendError::Json(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = local(&format!("http://{addr}/api/"));
        let err = backend.post_query("q").await.unwrap_err();
        assert!(matches!(err, BackendError::Http(_)));
    }

    #[test]
    fn test_rejects_bad_endpoints() {
        assert!(matches!(
            HttpBackend::new("not a url"),
            Err(BackendError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            HttpBackend::new("ftp://example.com/api/"),
            Err(BackendError::InvalidEndpoint { .. })
        ));
        assert!(HttpBackend::new(DEFAULT_ENDPOINT).is_ok());
    }
}
