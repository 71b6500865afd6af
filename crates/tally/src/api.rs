use gloo_net::http::{Request, Response};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Server error: {0}")]
    ServerError(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

impl ApiError {
    /// Maps a non-success status code to an error, `None` for 2xx.
    pub fn from_status(status: u16, path: &str) -> Option<Self> {
        match status {
            200..=299 => None,
            400 => Some(ApiError::BadRequest(format!("Bad request to {path}"))),
            404 => Some(ApiError::NotFound(format!("{path} not found"))),
            500..=599 => Some(ApiError::ServerError(status)),
            status => Some(ApiError::UnexpectedStatusCode(status)),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// Reusable response handling functions
fn handle_response_status(response: Response, path: &str) -> ApiResult<Response> {
    match ApiError::from_status(response.status(), path) {
        None => Ok(response),
        Some(err) => Err(err),
    }
}

async fn parse_json_response<T>(response: Response) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

async fn handle_json_response<T>(response: Response, path: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let validated_response = handle_response_status(response, path)?;
    parse_json_response(validated_response).await
}

/// A read-only client for the mock data API.
#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    /// Fetches `path` and decodes the JSON body.
    async fn get<T>(&self, path: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;
}

/// [`ApiClient`] backed by the browser's `fetch` through `gloo-net`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpApiClient {
    root_url: String,
}

impl HttpApiClient {
    /// `root_url` is prepended to every request path; a trailing slash is ignored.
    pub fn new(root_url: impl Into<String>) -> Self {
        let root_url = root_url.into().trim_end_matches('/').to_string();
        Self { root_url }
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.root_url, path)
    }

    async fn make_request(&self, path: &str) -> ApiResult<Response> {
        Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn get<T>(&self, path: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(path).await?;
        handle_json_response(response, path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(200, "/api/sales.json"), None);
        assert_eq!(ApiError::from_status(204, "/api/sales.json"), None);
        assert_eq!(
            ApiError::from_status(404, "/api/sales.json"),
            Some(ApiError::NotFound("/api/sales.json not found".to_string()))
        );
        assert!(matches!(
            ApiError::from_status(400, "/x"),
            Some(ApiError::BadRequest(_))
        ));
        assert_eq!(
            ApiError::from_status(503, "/x"),
            Some(ApiError::ServerError(503))
        );
        assert_eq!(
            ApiError::from_status(302, "/x"),
            Some(ApiError::UnexpectedStatusCode(302))
        );
    }

    #[test]
    fn test_url_joins_root() {
        let client = HttpApiClient::new("/dashboard/");
        assert_eq!(client.root_url(), "/dashboard");
        assert_eq!(client.url("/api/sales.json"), "/dashboard/api/sales.json");

        let client = HttpApiClient::new("");
        assert_eq!(client.url("/api/sales.json"), "/api/sales.json");
    }
}
