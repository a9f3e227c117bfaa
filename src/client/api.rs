use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    client::error::ClientError,
    entities::{
        about_me::AboutInfo,
        contact_me::{ContactMessageResponse, NewContactMessage},
        portfolio::PortfolioOverview,
        project::Project,
        skill::Skill,
    },
};

/// Thin JSON client for the `/api` routes.
#[derive(Debug, Clone)]
pub struct PortfolioApiClient {
    http: Client,
    base_url: Url,
}

impl PortfolioApiClient {
    /// `base_url` is the API root, e.g. `http://localhost:3000/api`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;

        // Url::join replaces the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(PortfolioApiClient { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// GETs `endpoint` relative to the API root. Non-2xx statuses are errors.
    pub async fn fetch_data<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        let url = self.endpoint_url(endpoint)?;

        let response = self.http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| ClientError::Decode {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }

    pub async fn portfolio_overview(&self) -> Result<PortfolioOverview, ClientError> {
        self.fetch_data("/portfolio").await
    }

    pub async fn projects(&self) -> Result<Vec<Project>, ClientError> {
        self.fetch_data("/projects").await
    }

    pub async fn skills(&self) -> Result<Vec<Skill>, ClientError> {
        self.fetch_data("/skills").await
    }

    pub async fn about(&self) -> Result<AboutInfo, ClientError> {
        self.fetch_data("/about").await
    }

    /// Posts the contact form fields as JSON.
    pub async fn submit_contact(
        &self,
        form: &NewContactMessage,
    ) -> Result<ContactMessageResponse, ClientError> {
        let endpoint = "/contact";
        let url = self.endpoint_url(endpoint)?;

        let response = self.http
            .post(url)
            .json(form)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<ContactMessageResponse>().await.map_err(|e| ClientError::Decode {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }
}
