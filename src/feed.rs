/// Loading the raw CSV feed from a URL or a local file
use std::path::PathBuf;

use tracing::info;

use crate::birthday::BirthdayDataset;

/// Errors raised while fetching the feed
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to fetch feed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed request returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to read feed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the feed comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

impl FeedSource {
    /// Pure function: Classify a configured location as a URL or a file path
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            FeedSource::Url(location.to_string())
        } else {
            let path = location.strip_prefix("file://").unwrap_or(location);
            FeedSource::File(PathBuf::from(path))
        }
    }
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedSource::Url(url) => write!(f, "{}", url),
            FeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads the feed text from its source
#[derive(Debug, Clone)]
pub struct FeedLoader {
    source: FeedSource,
    client: reqwest::Client,
}

impl FeedLoader {
    pub fn new(source: FeedSource) -> Self {
        Self {
            source,
            client: reqwest::Client::new(),
        }
    }

    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    /// Fetch the raw CSV text
    pub async fn fetch_text(&self) -> Result<String, FeedError> {
        match &self.source {
            FeedSource::Url(url) => {
                let response = self.client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FeedError::Status(status));
                }
                Ok(response.text().await?)
            }
            FeedSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| FeedError::Io {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }

    /// Fetch and parse the feed into a fresh dataset
    pub async fn load(&self) -> Result<BirthdayDataset, FeedError> {
        info!("Loading birthday feed from {}", self.source);
        let text = self.fetch_text().await?;
        Ok(BirthdayDataset::from_csv(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_feed_source_parse() {
        assert_eq!(
            FeedSource::parse("https://example.com/feed.csv"),
            FeedSource::Url("https://example.com/feed.csv".to_string())
        );
        assert_eq!(
            FeedSource::parse("file:///tmp/feed.csv"),
            FeedSource::File(PathBuf::from("/tmp/feed.csv"))
        );
        assert_eq!(
            FeedSource::parse(" data/birthdays.csv "),
            FeedSource::File(PathBuf::from("data/birthdays.csv"))
        );
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Иван,05.02.1990\r\nbroken,31.13.2020\r\n").unwrap();

        let loader = FeedLoader::new(FeedSource::File(file.path().to_path_buf()));
        let dataset = loader.load().await.unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.persons()[0].name, "Иван");
        assert_eq!(dataset.rejected().len(), 1);
    }

    /// Serve a CSV route and a failing route on an ephemeral local port
    async fn serve_feed() -> String {
        use axum::{http::StatusCode, routing::get, Router};

        let app = Router::new()
            .route("/feed.csv", get(|| async { "Иван,05.02.1990\r\nАнна,17.10.1985\r\nbad,xx" }))
            .route(
                "/broken.csv",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_load_from_url() {
        let base = serve_feed().await;
        let loader = FeedLoader::new(FeedSource::parse(&format!("{}/feed.csv", base)));

        let dataset = loader.load().await.unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.persons()[0].name, "Иван");
        assert_eq!(dataset.persons()[1].birthday_key, "10-17");
        assert_eq!(dataset.rejected().len(), 1);
        assert_eq!(dataset.rejected()[0].line, 3);
    }

    #[tokio::test]
    async fn test_load_from_url_error_status() {
        let base = serve_feed().await;
        let loader = FeedLoader::new(FeedSource::Url(format!("{}/broken.csv", base)));

        match loader.load().await {
            Err(FeedError::Status(status)) => assert_eq!(status.as_u16(), 500),
            other => panic!("expected a status error, got {:?}", other.map(|d| d.len())),
        }

        let missing = FeedLoader::new(FeedSource::Url(format!("{}/missing.csv", base)));
        assert!(matches!(missing.load().await, Err(FeedError::Status(s)) if s.as_u16() == 404));
    }

    #[tokio::test]
    async fn test_load_from_url_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let loader = FeedLoader::new(FeedSource::Url(format!("http://{}/feed.csv", addr)));
        assert!(matches!(loader.load().await, Err(FeedError::Http(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let loader = FeedLoader::new(FeedSource::File(PathBuf::from(
            "/nonexistent/birthdays.csv",
        )));
        assert!(matches!(loader.load().await, Err(FeedError::Io { .. })));
    }
}
