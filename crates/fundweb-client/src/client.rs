//! Reqwest implementation of the backend surface.

use crate::error::{ClientError, ClientResult};
use crate::types::{CreatorRecord, DonationRecord, NewCreator};
use crate::DonationBackend;
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

/// HTTP client for the donation platform backend.
///
/// # Example
///
/// ```ignore
/// use fundweb_client::BackendClient;
/// use std::time::Duration;
///
/// let client = BackendClient::new("http://localhost:8080", Duration::from_secs(30))?;
/// let creators = client.all_creators().await?;
/// println!("Found {} creators", creators.len());
/// ```
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new client for the given backend base URL.
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("fundweb/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Map transport-level failures, distinguishing unreachable backends.
    fn map_send_error(e: reqwest::Error) -> ClientError {
        if e.is_connect() || e.is_timeout() {
            ClientError::Unreachable(e.to_string())
        } else {
            ClientError::Request(e)
        }
    }

    /// Turn a non-success response into a `ServerError` with the body text.
    async fn error_from(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        ClientError::ServerError { status, message }
    }
}

#[async_trait]
impl DonationBackend for BackendClient {
    async fn all_creators(&self) -> ClientResult<Vec<CreatorRecord>> {
        let url = format!("{}/admin/allcreators", self.base_url);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if status.is_success() {
            let creators: Vec<CreatorRecord> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("invalid creator list: {}", e))
            })?;
            debug!("fetched {} creators", creators.len());
            Ok(creators)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn add_creator(&self, creator: &NewCreator) -> ClientResult<String> {
        let url = format!("{}/admin/addcreator", self.base_url);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .form(creator)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if status.is_success() {
            // The backend answers with a plain success message string
            Ok(response.text().await.unwrap_or_default())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn delete_creator(&self, id: u64) -> ClientResult<()> {
        let url = format!("{}/admin/deletecreator/{}", self.base_url, id);
        debug!("DELETE {}", url);

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if status.is_success() {
            debug!("creator {} deleted", id);
            Ok(())
        } else if status.as_u16() == 404 {
            // Already gone; the refetch re-establishes truth either way
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn donations_by_donor(&self, donor_id: u64) -> ClientResult<Vec<DonationRecord>> {
        let url = format!("{}/donation/by-donor/{}", self.base_url, donor_id);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if status.is_success() {
            let donations: Vec<DonationRecord> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("invalid donation list: {}", e))
            })?;
            debug!("fetched {} donations for donor {}", donations.len(), donor_id);
            Ok(donations)
        } else {
            Err(Self::error_from(response).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        let timeout = Duration::from_secs(5);

        // Valid URLs
        assert!(BackendClient::new("https://example.com", timeout).is_ok());
        assert!(BackendClient::new("http://localhost:8080", timeout).is_ok());

        // Invalid URLs
        assert!(BackendClient::new("", timeout).is_err());
        assert!(BackendClient::new("not-a-url", timeout).is_err());
        assert!(BackendClient::new("ftp://example.com", timeout).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            BackendClient::new("https://example.com///", Duration::from_secs(5)).expect("valid url");
        assert_eq!(client.base_url(), "https://example.com");
    }
}
