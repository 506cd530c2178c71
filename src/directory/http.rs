//! reqwest-backed Directory Service client.

use crate::directory::{DirectoryError, DirectoryService};
use crate::model::{PageNumber, Post, User, UserId};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

/// Public JSONPlaceholder instance the dashboard talks to by default.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// HTTP client for the `/users` and `/posts` endpoints.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    http: Client,
    base_url: Url,
}

impl HttpDirectory {
    /// Create a client rooted at `base_url`.
    ///
    /// A trailing slash is implied, so `https://host/api` and
    /// `https://host/api/` both resolve `users` to `https://host/api/users`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidBaseUrl` if the URL does not parse,
    /// `DirectoryError::UnsupportedBaseUrl` if it cannot carry a path, and
    /// `DirectoryError::Request` if the TLS backend fails to initialise.
    pub fn new(base_url: &str) -> Result<Self, DirectoryError> {
        let base_url = parse_base_url(base_url)?;
        let http = Client::builder()
            .user_agent(concat!("userdash/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Base URL with its trailing slash.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, DirectoryError> {
        self.base_url
            .join(path)
            .map_err(|source| DirectoryError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }
}

/// Parse a configured base URL, normalising it to end in `/`.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, DirectoryError> {
    let mut url = Url::parse(raw.trim()).map_err(|source| DirectoryError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(DirectoryError::UnsupportedBaseUrl(raw.to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// Turn non-2xx statuses into `DirectoryError::Status`.
fn check_status(response: Response) -> Result<Response, DirectoryError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(DirectoryError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

#[async_trait]
impl DirectoryService for HttpDirectory {
    async fn fetch_users(&self) -> Result<Vec<User>, DirectoryError> {
        let url = self.endpoint("users")?;
        debug!(%url, "Fetching users");

        let response = self.http.get(url).send().await?;
        let users: Vec<User> = check_status(response)?.json().await?;

        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    async fn fetch_posts(
        &self,
        user_id: UserId,
        page: PageNumber,
        limit: u32,
    ) -> Result<Vec<Post>, DirectoryError> {
        let url = self.endpoint("posts")?;
        debug!(%url, user_id = user_id.get(), page = page.get(), limit, "Fetching posts");

        let response = self
            .http
            .get(url)
            .query(&[
                ("userId", user_id.get().to_string()),
                ("_limit", limit.to_string()),
                ("_page", page.get().to_string()),
            ])
            .send()
            .await?;
        let posts: Vec<Post> = check_status(response)?.json().await?;

        debug!(count = posts.len(), "Fetched posts");
        Ok(posts)
    }
}
