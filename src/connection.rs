use reqwest::{Client, RequestBuilder};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.weatherlink.com/v2";

/// Shared request plumbing: base URL plus the credential pair every
/// WeatherLink request carries (`api-key` query parameter, `X-Api-Secret`
/// header). Cheap to clone; the inner `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub(crate) struct ApiConnection {
    http: Client,
    base_url: String,
    api_key: String,
    api_secret: String,
}

impl ApiConnection {
    pub fn new(base_url: Option<String>, api_key: String, api_secret: String) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            api_secret,
        }
    }

    /// Absolute URL for an API path, used both for requests and error context.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET request with credentials attached.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http
            .get(url)
            .query(&[("api-key", self.api_key.as_str())])
            .header("X-Api-Secret", self.api_secret.as_str())
    }
}
