//! HTTP catalog client.
//!
//! Talks to a Gutendex-compatible endpoint:
//!
//! ```text
//! GET <base>?page=<n>&search=<text>&topic=<lowercase genre>
//! GET <base>?ids=<id>,<id>,...
//! ```
//!
//! Both return `{"count": .., "next": .., "previous": .., "results": [..]}`.
//! Only `count` and `results` are read.

use super::Catalog;
use crate::domain::{BookId, BookRecord, CatalogError, Query, ResultPage};
use crate::Config;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::Instrument;

/// Response envelope shared by page and id lookups.
#[derive(Debug, Deserialize)]
struct BooksResponse {
    #[serde(default)]
    count: u64,
    results: Vec<BookRecord>,
}

/// reqwest-backed [`Catalog`].
///
/// Transport failures and timeouts are retried up to `max_retries` times.
/// Non-2xx statuses and malformed bodies are returned immediately.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl HttpCatalog {
    /// Builds a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Network`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        max_retries: u32,
    ) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("shelfwise/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            max_retries,
        })
    }

    /// Builds a client from the `api_url`, `timeout_secs` and `max_retries`
    /// settings.
    ///
    /// # Errors
    ///
    /// See [`HttpCatalog::new`].
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        Self::new(
            config.api_url.clone(),
            Duration::from_secs(config.timeout_secs),
            config.max_retries,
        )
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, String)]) -> Result<T, CatalogError> {
        let mut attempt = 0;
        loop {
            match self.get_once(params).await {
                Err(e) if e.is_transport() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        error = %e,
                        attempt = attempt,
                        max_retries = self.max_retries,
                        "retrying catalog request"
                    );
                }
                other => return other,
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(
        &self,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "catalog returned error status");
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(map_transport_error)?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

fn map_transport_error(e: reqwest::Error) -> CatalogError {
    if e.is_timeout() {
        CatalogError::Timeout
    } else {
        CatalogError::Network(e.to_string())
    }
}

impl Catalog for HttpCatalog {
    async fn fetch_page(&self, query: &Query) -> Result<ResultPage, CatalogError> {
        let span = tracing::debug_span!(
            "fetch_page",
            page = query.page,
            search = %query.search,
            genre = %query.genre
        );

        async {
            let params = [
                ("page", query.page.to_string()),
                ("search", query.search.clone()),
                ("topic", query.topic()),
            ];
            let response: BooksResponse = self.get(&params).await?;

            tracing::debug!(
                count = response.count,
                results = response.results.len(),
                "page fetched"
            );
            Ok(ResultPage::new(query.clone(), response.count, response.results))
        }
        .instrument(span)
        .await
    }

    async fn fetch_by_ids(&self, ids: &[BookId]) -> Result<Vec<BookRecord>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids.iter().map(BookId::as_str).collect::<Vec<_>>().join(",");
        tracing::debug!(ids = %joined, "fetching books by id");

        let response: BooksResponse = self.get(&[("ids", joined)]).await?;
        Ok(response.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn catalog(server: &MockServer) -> HttpCatalog {
        HttpCatalog::new(server.url("/books"), Duration::from_secs(5), 0).unwrap()
    }

    fn book_json(id: u64, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": title,
            "authors": [{"name": "Melville, Herman", "birth_year": 1819, "death_year": 1891}],
            "bookshelves": ["Best Books Ever Listings"],
            "subjects": ["Whaling -- Fiction"],
            "formats": {"image/jpeg": format!("https://example.org/{id}.jpg")},
            "download_count": 1000
        })
    }

    #[tokio::test]
    async fn fetch_page_sends_query_and_parses_results() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/books")
                    .query_param("page", "2")
                    .query_param("search", "whale")
                    .query_param("topic", "adventure");
                then.status(200).json_body(json!({
                    "count": 120,
                    "next": null,
                    "previous": null,
                    "results": [book_json(2701, "Moby Dick; Or, The Whale")]
                }));
            })
            .await;

        let query = Query::new(2, "whale", "Adventure");
        let page = catalog(&server).fetch_page(&query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.query, query);
        assert_eq!(page.count, 120);
        assert_eq!(page.books.len(), 1);
        assert_eq!(page.books[0].id, 2701);
        assert_eq!(page.books[0].first_author(), Some("Melville, Herman"));
    }

    #[tokio::test]
    async fn fetch_by_ids_joins_identifiers() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/books").query_param("ids", "84,1342");
                then.status(200).json_body(json!({
                    "count": 1,
                    "results": [book_json(84, "Frankenstein")]
                }));
            })
            .await;

        let books = catalog(&server)
            .fetch_by_ids(&[BookId::from(84), BookId::from(1342)])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Frankenstein");
    }

    #[tokio::test]
    async fn fetch_by_ids_with_no_ids_skips_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|_when, then| {
                then.status(200).json_body(json!({"results": []}));
            })
            .await;

        let books = catalog(&server).fetch_by_ids(&[]).await.unwrap();

        assert!(books.is_empty());
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn error_status_is_not_retried() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/books");
                then.status(503);
            })
            .await;

        let catalog = HttpCatalog::new(server.url("/books"), Duration::from_secs(5), 2).unwrap();
        let err = catalog.fetch_page(&Query::default()).await.unwrap_err();

        assert_eq!(err, CatalogError::Status(503));
        assert_eq!(mock.hits_async().await, 1);
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/books");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let err = catalog(&server).fetch_page(&Query::default()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn missing_count_defaults_to_zero() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/books");
                then.status(200).json_body(json!({"results": []}));
            })
            .await;

        let page = catalog(&server).fetch_page(&Query::default()).await.unwrap();
        assert_eq!(page.count, 0);
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn timeout_is_retried_up_to_limit() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/books");
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .json_body(json!({"results": []}));
            })
            .await;

        let catalog = HttpCatalog::new(server.url("/books"), Duration::from_millis(50), 1).unwrap();
        let err = catalog.fetch_page(&Query::default()).await.unwrap_err();

        assert_eq!(err, CatalogError::Timeout);
        assert_eq!(mock.hits_async().await, 2);
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let catalog =
            HttpCatalog::new("http://127.0.0.1:1/books", Duration::from_secs(2), 0).unwrap();
        let err = catalog.fetch_page(&Query::default()).await.unwrap_err();

        assert!(err.is_transport(), "got {err:?}");
    }
}
