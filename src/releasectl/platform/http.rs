use super::wire::{
    CreateChannelBody, GetChannelResponse, ListRegistriesResponse, RegistryLogsResponse,
    WireAppChannel,
};
use super::{sort_by_position, sort_newest_first, PlatformClient};
use crate::error::{ReleaseError, Result};
use crate::model::{AppChannel, ChannelRelease, Registry, RegistryLog};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the vendor API.
///
/// Every request carries the API token verbatim in the `Authorization`
/// header. Responses are checked against the status each endpoint promises;
/// anything else becomes [`ReleaseError::Status`].
pub struct HttpClient {
    client: Client,
    api_origin: String,
    api_key: String,
}

impl HttpClient {
    pub fn new(api_origin: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_origin, api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        api_origin: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("releasectl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReleaseError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_origin: api_origin.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn api_origin(&self) -> &str {
        &self.api_origin
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_origin, path)
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        self.client
            .request(method, endpoint)
            .header(AUTHORIZATION, &self.api_key)
            .header(ACCEPT, "application/json")
    }

    /// Sends a prepared request and returns the response if the status matches.
    fn execute(
        &self,
        op: &'static str,
        method: Method,
        endpoint: &str,
        builder: RequestBuilder,
        expected: StatusCode,
    ) -> Result<Response> {
        debug!(op, %method, endpoint, "sending request");
        let resp = builder.send().map_err(|source| ReleaseError::Transport {
            op,
            method: method.clone(),
            endpoint: endpoint.to_string(),
            source,
        })?;

        let status = resp.status();
        debug!(op, status = status.as_u16(), "received response");
        if status != expected {
            return Err(ReleaseError::Status {
                op,
                method,
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp)
    }

    fn get_json<T: DeserializeOwned>(&self, op: &'static str, path: &str) -> Result<T> {
        self.get_json_with_query(op, path, &[])
    }

    fn get_json_with_query<T: DeserializeOwned>(
        &self,
        op: &'static str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let endpoint = self.endpoint(path);
        let mut builder = self.request(Method::GET, &endpoint);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let resp = self.execute(op, Method::GET, &endpoint, builder, StatusCode::OK)?;
        decode(op, Method::GET, &endpoint, resp)
    }
}

fn decode<T: DeserializeOwned>(
    op: &'static str,
    method: Method,
    endpoint: &str,
    resp: Response,
) -> Result<T> {
    let body = resp.bytes().map_err(|source| ReleaseError::Transport {
        op,
        method,
        endpoint: endpoint.to_string(),
        source,
    })?;
    serde_json::from_slice(&body).map_err(|e| ReleaseError::Decode {
        op,
        message: e.to_string(),
    })
}

impl PlatformClient for HttpClient {
    fn list_channels(&self, app_id: &str) -> Result<Vec<AppChannel>> {
        let path = format!("/v1/app/{}/channels", app_id);
        // An app without channels comes back as `null`.
        let wire: Option<Vec<WireAppChannel>> = self.get_json("ListChannels", &path)?;
        let mut channels: Vec<AppChannel> = wire
            .unwrap_or_default()
            .into_iter()
            .map(AppChannel::from)
            .collect();
        sort_by_position(&mut channels);
        Ok(channels)
    }

    fn create_channel(&mut self, app_id: &str, name: &str, description: &str) -> Result<()> {
        let endpoint = self.endpoint(&format!("/v1/app/{}/channel", app_id));
        let body = CreateChannelBody { name, description };
        let builder = self.request(Method::POST, &endpoint).json(&body);
        // The response lists channels, but callers look the new one up explicitly.
        self.execute(
            "CreateChannel",
            Method::POST,
            &endpoint,
            builder,
            StatusCode::OK,
        )?;
        Ok(())
    }

    fn archive_channel(&mut self, app_id: &str, channel_id: &str) -> Result<()> {
        let endpoint = self.endpoint(&format!(
            "/v1/app/{}/channel/{}/archive",
            app_id, channel_id
        ));
        let builder = self.request(Method::POST, &endpoint);
        match self.execute(
            "ArchiveChannel",
            Method::POST,
            &endpoint,
            builder,
            StatusCode::NO_CONTENT,
        ) {
            Ok(_) => Ok(()),
            Err(ReleaseError::Status { status: 404, .. }) => Err(ReleaseError::NotFound),
            Err(e) => Err(e),
        }
    }

    fn get_channel(
        &self,
        app_id: &str,
        channel_id: &str,
    ) -> Result<(AppChannel, Vec<ChannelRelease>)> {
        let path = format!("/v1/app/{}/channel/{}/releases", app_id, channel_id);
        let resp: GetChannelResponse = self.get_json("GetChannel", &path)?;

        let mut releases: Vec<ChannelRelease> = resp
            .releases
            .into_iter()
            .map(ChannelRelease::from)
            .collect();
        sort_newest_first(&mut releases);
        Ok((AppChannel::from(resp.channel), releases))
    }

    fn list_registries(&self) -> Result<Vec<Registry>> {
        let resp: ListRegistriesResponse =
            self.get_json("ListRegistries", "/v3/external_registries")?;
        Ok(resp
            .external_registries
            .into_iter()
            .map(Registry::from)
            .collect())
    }

    fn registry_logs(&self, endpoint: &str) -> Result<Vec<RegistryLog>> {
        let resp: RegistryLogsResponse = self.get_json_with_query(
            "RegistryLogs",
            "/v3/external_registry/logs",
            &[("endpoint", endpoint)],
        )?;
        Ok(resp.logs.into_iter().map(RegistryLog::from).collect())
    }
}
