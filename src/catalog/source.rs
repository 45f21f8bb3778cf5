//! Where the raw catalog document comes from

use crate::{DocsError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Capability returning the raw bytes of the catalog document
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the whole document
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// Human-readable location, used in logs
    fn location(&self) -> String;
}

/// Downloads the catalog over HTTP(S)
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("antd-docs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(DocsError::HttpStatus {
                url: self.url.clone(),
                status: response.status(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Reads the catalog from a local JSON file
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a local port
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/components.en-US.json", addr)
    }

    #[tokio::test]
    async fn test_http_source_returns_body() {
        let url = serve_once("HTTP/1.1 200 OK", r#"[{"Title":"Button"}]"#).await;
        let source = HttpCatalogSource::new(url.clone(), Duration::from_secs(5)).unwrap();

        let bytes = source.fetch().await.unwrap();
        assert_eq!(bytes, br#"[{"Title":"Button"}]"#);
        assert_eq!(source.location(), url);
    }

    #[tokio::test]
    async fn test_http_source_reports_failure_status() {
        let url = serve_once("HTTP/1.1 404 Not Found", "missing").await;
        let source = HttpCatalogSource::new(url, Duration::from_secs(5)).unwrap();

        let err = source.fetch().await.unwrap_err();
        match err {
            DocsError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 404),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileCatalogSource::new("/definitely/not/here/components.json");
        assert!(matches!(source.fetch().await, Err(DocsError::Io(_))));
    }
}
