use std::time::Duration;

use center_core::{Message, MessageId, ProjectFeeds};
use url::Url;

use crate::{MessageQuery, RemoteStats, RemoteTemplate, TransportError};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The backend API as the core consumes it.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn fetch_messages(
        &self,
        query: Option<&MessageQuery>,
    ) -> Result<Vec<Message>, TransportError>;
    async fn fetch_project_feeds(&self) -> Result<ProjectFeeds, TransportError>;
    async fn update_category(&self, id: MessageId, category: &str) -> Result<(), TransportError>;
    async fn refresh_messages(&self) -> Result<(), TransportError>;
    async fn refresh_feeds(&self) -> Result<(), TransportError>;
    async fn fetch_templates(&self) -> Result<Vec<RemoteTemplate>, TransportError>;
    async fn fetch_stats(&self) -> Result<RemoteStats, TransportError>;
}

/// `Transport` over the HTTP API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: Url, settings: ClientSettings) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| TransportError::Network(err.to_string()))?;
        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|err| TransportError::InvalidUrl(err.to_string()))
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, TransportError> {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response)
    }

    async fn post(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response, TransportError> {
        let mut request = self.client.post(self.endpoint(path)?);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(map_reqwest_error)?;
        check_status(response)
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn fetch_messages(
        &self,
        query: Option<&MessageQuery>,
    ) -> Result<Vec<Message>, TransportError> {
        let mut request = self.client.get(self.endpoint("api/messages")?);
        if let Some(query) = query {
            let mut params: Vec<(&str, String)> = Vec::new();
            if let Some(category) = &query.category {
                params.push(("category", category.clone()));
            }
            if let Some(source) = &query.source {
                params.push(("source", source.clone()));
            }
            if let Some(project) = &query.project {
                params.push(("project", project.clone()));
            }
            if let Some(limit) = query.limit {
                params.push(("limit", limit.to_string()));
            }
            request = request.query(&params);
        }
        let response = request.send().await.map_err(map_reqwest_error)?;
        decode(check_status(response)?).await
    }

    async fn fetch_project_feeds(&self) -> Result<ProjectFeeds, TransportError> {
        decode(self.get("api/project-feeds").await?).await
    }

    async fn update_category(&self, id: MessageId, category: &str) -> Result<(), TransportError> {
        let body = serde_json::json!({ "category": category });
        self.post(&format!("api/messages/{id}/category"), Some(&body))
            .await?;
        Ok(())
    }

    async fn refresh_messages(&self) -> Result<(), TransportError> {
        self.post("api/refresh", None).await?;
        Ok(())
    }

    async fn refresh_feeds(&self) -> Result<(), TransportError> {
        self.post("api/refresh-feeds", None).await?;
        Ok(())
    }

    async fn fetch_templates(&self) -> Result<Vec<RemoteTemplate>, TransportError> {
        decode(self.get("api/templates").await?).await
    }

    async fn fetch_stats(&self) -> Result<RemoteStats, TransportError> {
        decode(self.get("api/stats").await?).await
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, TransportError> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::HttpStatus(status.as_u16()));
    }
    Ok(response)
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, TransportError> {
    response
        .json::<T>()
        .await
        .map_err(|err| TransportError::InvalidBody(err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout;
    }
    TransportError::Network(err.to_string())
}
