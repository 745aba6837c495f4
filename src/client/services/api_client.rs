use std::future::Future;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::common::config::ClientConfig;
use crate::common::error::WorkbenchError;
use crate::common::models::{
    ErrorBody, GenerateRequest, GenerateResponse, GenerationOptions, SolveRequest, SolveResponse,
};

pub const GENERATE_PATH: &str = "api/generate";
pub const SOLVE_PATH: &str = "api/solve";

pub const GENERATION_FAILED: &str = "Generation failed";
pub const SOLVER_FAILED: &str = "Solver failed";

/// The two remote operations the workbench depends on.
pub trait FormulaBackend {
    /// Returns the generated DIMACS text.
    fn generate(
        &self,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, WorkbenchError>> + Send;

    fn solve(&self, cnf: String) -> impl Future<Output = Result<SolveResponse, WorkbenchError>> + Send;
}

/// JSON-over-HTTP client for `/api/generate` and `/api/solve`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, WorkbenchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| WorkbenchError::Config {
            message: format!("failed to create HTTP client: {}", e),
        })?;

        // Url::join drops the last path segment unless the base ends with '/'
        let mut base_url = config.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, WorkbenchError> {
        self.base_url.join(path).map_err(|e| WorkbenchError::Config {
            message: format!("cannot build endpoint '{}': {}", path, e),
        })
    }

    async fn post_json<B, R>(&self, path: &str, body: &B, fallback: &str) -> Result<R, WorkbenchError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);

        let response = self.http.post(url.clone()).json(body).send().await.map_err(|e| {
            warn!("request to {} failed: {}", url, e);
            WorkbenchError::from(e)
        })?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            warn!("reading response from {} failed: {}", url, e);
            WorkbenchError::from(e)
        })?;

        if !status.is_success() {
            // a body that is not the expected JSON still counts as a server failure
            let body: ErrorBody = serde_json::from_slice(&bytes).unwrap_or_default();
            let err = WorkbenchError::server(status.as_u16(), body.error, fallback);
            warn!("{} answered {}: {}", url, status, err);
            return Err(err);
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!("cannot decode response from {}: {}", url, e);
            WorkbenchError::from(e)
        })
    }
}

impl FormulaBackend for ApiClient {
    fn generate(
        &self,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, WorkbenchError>> + Send {
        let client = self.clone();
        async move {
            let request = GenerateRequest { options };
            let response: GenerateResponse = client
                .post_json(GENERATE_PATH, &request, GENERATION_FAILED)
                .await?;
            Ok(response.cnf)
        }
    }

    fn solve(&self, cnf: String) -> impl Future<Output = Result<SolveResponse, WorkbenchError>> + Send {
        let client = self.clone();
        async move {
            let request = SolveRequest { cnf };
            client.post_json(SOLVE_PATH, &request, SOLVER_FAILED).await
        }
    }
}
