//! HTTP client for the Cloudera ML control plane
//!
//! Wraps every control-plane call behind one authenticated client bound to
//! a normalized base URL. Project-scoped v2 resources use `Bearer`
//! authorization; the v1 application endpoints use the `ApiKey` scheme
//! still required by older deployments.

use super::error::{ApiError, Result};
use super::types::{
    ApiErrorResponse, CreateApplicationRequest, CreateJobRequest, CreateJobRunRequest,
    CreateModelBuildRequest, CreateModelDeploymentRequest, FileMetadata, Job, JobList,
    ProjectList, RuntimeList,
};
use reqwest::{Client, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default per-request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent for API requests
const USER_AGENT: &str = concat!("cml-ctl/", env!("CARGO_PKG_VERSION"));

/// Runtime used for jobs when the caller does not pick one
pub const DEFAULT_RUNTIME_IDENTIFIER: &str =
    "docker.repository.cloudera.com/cloudera/cdsw/ml-runtime-jupyterlab-python3.10-standard:2024.10.1-b12";

/// Normalize a user-supplied host into a base URL.
///
/// Collapses accidental `https://https://` prefixes, inserts a scheme when
/// none is present and trims trailing slashes. Pure and idempotent: a
/// normalized value passes through unchanged.
pub fn normalize_host(raw: &str) -> String {
    let mut host = raw.trim().to_string();

    while host.starts_with("https://https://") {
        host = host.replacen("https://https://", "https://", 1);
    }

    if !host.starts_with("http://") && !host.starts_with("https://") {
        host = format!("https://{host}");
    }

    // Trailing slashes go, but the scheme's own `://` stays intact;
    // whitespace uncovered by the stripping goes with them.
    while (host.ends_with('/') && !host.ends_with("://"))
        || host.ends_with(char::is_whitespace)
    {
        host.pop();
    }

    host
}

/// Authorization header scheme
///
/// The v2 API family takes `Bearer <key>`; the v1 application endpoints
/// still expect `ApiKey <key>` on some deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    Bearer,
    ApiKey,
}

/// Client for the Cloudera ML control-plane API
pub struct CmlClient {
    /// HTTP client with configured timeout and user agent
    http_client: Client,
    /// Normalized base URL, derived once per run
    base_url: String,
    /// API key attached to every request
    api_key: String,
}

impl CmlClient {
    /// Create a client with the default request timeout
    pub fn new(host: &str, api_key: &str) -> Result<Self> {
        Self::with_timeout(host, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a caller-chosen per-request timeout
    pub fn with_timeout(host: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self {
            http_client,
            base_url: normalize_host(host),
            api_key: api_key.to_string(),
        })
    }

    /// The normalized base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(
        &self,
        builder: reqwest::RequestBuilder,
        scheme: AuthScheme,
    ) -> reqwest::RequestBuilder {
        match scheme {
            AuthScheme::Bearer => builder.bearer_auth(&self.api_key),
            AuthScheme::ApiKey => builder.header(
                reqwest::header::AUTHORIZATION,
                format!("ApiKey {}", self.api_key),
            ),
        }
    }

    /// Make an authenticated GET request
    async fn get<T: DeserializeOwned>(&self, path: &str, scheme: AuthScheme) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .authorize(self.http_client.get(&url), scheme)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make an authenticated POST request with a JSON body
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        scheme: AuthScheme,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .authorize(self.http_client.post(&url), scheme)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make an authenticated PATCH request with a JSON body
    async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        scheme: AuthScheme,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .authorize(self.http_client.patch(&url), scheme)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make an authenticated DELETE request, discarding the response body
    async fn delete(&self, path: &str, scheme: AuthScheme) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .authorize(self.http_client.delete(&url), scheme)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// POST one file as a multipart form to `path`.
    ///
    /// The part is named `file`; the remote stores it under a default
    /// object name until the metadata patch renames it.
    pub(crate) async fn post_file(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .authorize(self.http_client.post(&url), AuthScheme::Bearer)
            .multipart(form)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Handle the HTTP response, converting errors appropriately
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Map a non-2xx response to a typed error, salvaging the body text
    /// for the message when it is not the documented error shape.
    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let error_body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorResponse>(&error_body)
            .map(|e| e.get_message())
            .unwrap_or_else(|_| error_body.clone());

        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::PermissionDenied(message),
            404 => ApiError::NotFound(message),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::Server { status, message },
            _ => ApiError::Api { status, message },
        }
    }

    // =========================================================================
    // Project API methods
    // =========================================================================

    /// List all projects visible to the API key
    ///
    /// Endpoint: GET /api/v2/projects
    pub async fn list_projects(&self) -> Result<ProjectList> {
        self.get("/api/v2/projects", AuthScheme::Bearer).await
    }

    // =========================================================================
    // Job API methods
    // =========================================================================

    /// List jobs in a project
    ///
    /// Endpoint: GET /api/v2/projects/:projectId/jobs
    pub async fn list_jobs(&self, project_id: &str) -> Result<JobList> {
        self.get(
            &format!("/api/v2/projects/{project_id}/jobs"),
            AuthScheme::Bearer,
        )
        .await
    }

    /// Get one job
    ///
    /// Endpoint: GET /api/v2/projects/:projectId/jobs/:jobId
    pub async fn get_job(&self, project_id: &str, job_id: &str) -> Result<Job> {
        self.get(
            &format!("/api/v2/projects/{project_id}/jobs/{job_id}"),
            AuthScheme::Bearer,
        )
        .await
    }

    /// Create a job
    ///
    /// Endpoint: POST /api/v2/projects/:projectId/jobs
    pub async fn create_job(&self, project_id: &str, request: &CreateJobRequest) -> Result<Job> {
        self.post(
            &format!("/api/v2/projects/{project_id}/jobs"),
            request,
            AuthScheme::Bearer,
        )
        .await
    }

    /// Delete a job
    ///
    /// Endpoint: DELETE /api/v2/projects/:projectId/jobs/:jobId
    pub async fn delete_job(&self, project_id: &str, job_id: &str) -> Result<()> {
        self.delete(
            &format!("/api/v2/projects/{project_id}/jobs/{job_id}"),
            AuthScheme::Bearer,
        )
        .await
    }

    /// Start a run for a job
    ///
    /// Endpoint: POST /api/v2/projects/:projectId/jobs/:jobId/runs
    pub async fn create_job_run(
        &self,
        project_id: &str,
        job_id: &str,
        request: &CreateJobRunRequest,
    ) -> Result<serde_json::Value> {
        self.post(
            &format!("/api/v2/projects/{project_id}/jobs/{job_id}/runs"),
            request,
            AuthScheme::Bearer,
        )
        .await
    }

    /// List runs for a job
    ///
    /// Endpoint: GET /api/v2/projects/:projectId/jobs/:jobId/runs
    pub async fn list_job_runs(
        &self,
        project_id: &str,
        job_id: &str,
    ) -> Result<serde_json::Value> {
        self.get(
            &format!("/api/v2/projects/{project_id}/jobs/{job_id}/runs"),
            AuthScheme::Bearer,
        )
        .await
    }

    // =========================================================================
    // Runtime API methods
    // =========================================================================

    /// List available runtimes, falling back to the v1 endpoint on
    /// deployments where the v2 path does not exist yet.
    ///
    /// Endpoint: GET /api/v2/runtimes, then GET /api/v1/runtimes on 404
    pub async fn list_runtimes(&self) -> Result<RuntimeList> {
        match self.get("/api/v2/runtimes", AuthScheme::Bearer).await {
            Err(ApiError::NotFound(_)) => {
                log::info!("v2 runtimes endpoint not found, retrying against v1");
                self.get("/api/v1/runtimes", AuthScheme::Bearer).await
            }
            other => other,
        }
    }

    // =========================================================================
    // File API methods
    // =========================================================================

    /// Patch the metadata of the most recently uploaded object, giving it
    /// its real name and logical path inside the project.
    ///
    /// Endpoint: PATCH /api/v2/projects/:projectId/files/file
    pub async fn update_file_metadata(
        &self,
        project_id: &str,
        metadata: &FileMetadata,
    ) -> Result<serde_json::Value> {
        self.patch(
            &format!("/api/v2/projects/{project_id}/files/file"),
            metadata,
            AuthScheme::Bearer,
        )
        .await
    }

    // =========================================================================
    // Model API methods
    // =========================================================================

    /// Build a model from project code
    ///
    /// Endpoint: POST /api/v2/projects/:projectId/models/:modelId/builds
    pub async fn create_model_build(
        &self,
        project_id: &str,
        model_id: &str,
        request: &CreateModelBuildRequest,
    ) -> Result<serde_json::Value> {
        self.post(
            &format!("/api/v2/projects/{project_id}/models/{model_id}/builds"),
            request,
            AuthScheme::Bearer,
        )
        .await
    }

    /// Deploy a model build
    ///
    /// Endpoint: POST /api/v2/projects/:projectId/models/:modelId/builds/:buildId/deployments
    pub async fn create_model_deployment(
        &self,
        project_id: &str,
        model_id: &str,
        build_id: &str,
        request: &CreateModelDeploymentRequest,
    ) -> Result<serde_json::Value> {
        self.post(
            &format!(
                "/api/v2/projects/{project_id}/models/{model_id}/builds/{build_id}/deployments"
            ),
            request,
            AuthScheme::Bearer,
        )
        .await
    }

    // =========================================================================
    // Application API methods (v1 family, ApiKey scheme)
    // =========================================================================

    /// List applications in a project
    ///
    /// Endpoint: GET /api/v1/projects/:projectId/applications
    pub async fn list_applications(&self, project_id: &str) -> Result<serde_json::Value> {
        self.get(
            &format!("/api/v1/projects/{project_id}/applications"),
            AuthScheme::ApiKey,
        )
        .await
    }

    /// Get one application
    ///
    /// Endpoint: GET /api/v1/projects/:projectId/applications/:applicationId
    pub async fn get_application(
        &self,
        project_id: &str,
        application_id: &str,
    ) -> Result<serde_json::Value> {
        self.get(
            &format!("/api/v1/projects/{project_id}/applications/{application_id}"),
            AuthScheme::ApiKey,
        )
        .await
    }

    /// Create an application
    ///
    /// Endpoint: POST /api/v1/projects/:projectId/applications
    pub async fn create_application(
        &self,
        project_id: &str,
        request: &CreateApplicationRequest,
    ) -> Result<serde_json::Value> {
        self.post(
            &format!("/api/v1/projects/{project_id}/applications"),
            request,
            AuthScheme::ApiKey,
        )
        .await
    }

    /// Delete an application
    ///
    /// Endpoint: DELETE /api/v1/projects/:projectId/applications/:applicationId
    pub async fn delete_application(&self, project_id: &str, application_id: &str) -> Result<()> {
        self.delete(
            &format!("/api/v1/projects/{project_id}/applications/{application_id}"),
            AuthScheme::ApiKey,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_inserts_missing_scheme() {
        assert_eq!(normalize_host("ml.example.com"), "https://ml.example.com");
    }

    #[test]
    fn normalize_keeps_explicit_http() {
        assert_eq!(
            normalize_host("http://ml.internal:8080"),
            "http://ml.internal:8080"
        );
    }

    #[test]
    fn normalize_collapses_duplicated_prefix_and_trailing_slash() {
        assert_eq!(
            normalize_host("https://https://example.com/"),
            "https://example.com"
        );
    }

    #[test]
    fn normalize_strips_every_trailing_slash() {
        assert_eq!(
            normalize_host("https://example.com///"),
            "https://example.com"
        );
    }

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(
            normalize_host("  ml.example.com/ "),
            "https://ml.example.com"
        );
    }

    #[test]
    fn normalize_never_returns_empty() {
        assert_eq!(normalize_host(""), "https://");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in ".*") {
            let once = normalize_host(&raw);
            prop_assert_eq!(normalize_host(&once), once);
        }
    }

    #[test]
    fn client_normalizes_its_base_url() {
        let client = CmlClient::new("https://https://ml.example.com/", "key").unwrap();
        assert_eq!(client.base_url(), "https://ml.example.com");
    }

    #[test]
    fn user_agent_carries_the_crate_version() {
        assert!(USER_AGENT.starts_with("cml-ctl/"));
    }
}
