use crate::analyzer::backend::AnalysisBackend;
use crate::analyzer::payload::SubmissionPayload;
use crate::analyzer::progress::ProgressReporter;
use crate::error::BrainsightError;
use crate::models::ResultSet;
use futures::future::BoxFuture;
use reqwest::multipart::{Form, Part};

const INFER_PATH: &str = "/api/infer";
const ERROR_BODY_LIMIT: usize = 200;

/// Posts the scans to `{base}/api/infer` as multipart form data and decodes
/// the per-model JSON answer.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, BrainsightError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("brainsight/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: build_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn build_form(payload: &SubmissionPayload) -> Result<Form, BrainsightError> {
        let mut form = Form::new();

        for part in payload.parts() {
            let bytes = tokio::fs::read(&part.file.path).await.map_err(|source| {
                BrainsightError::FileAccess {
                    path: part.file.path.clone(),
                    source,
                }
            })?;

            let file_part = Part::bytes(bytes)
                .file_name(part.file.name.clone())
                .mime_str(&part.file.mime_type)?;
            form = form.part(part.field_name, file_part);
        }

        Ok(form)
    }

    async fn post(&self, payload: &SubmissionPayload) -> Result<ResultSet, BrainsightError> {
        let form = Self::build_form(payload).await?;

        tracing::info!(
            endpoint = %self.endpoint,
            files = payload.len(),
            bytes = payload.total_bytes(),
            "submitting scans"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(BrainsightError::BackendRejected {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        parse_response(&body)
    }
}

impl AnalysisBackend for HttpBackend {
    fn analyze<'a>(
        &'a self,
        payload: &'a SubmissionPayload,
        _progress: ProgressReporter,
    ) -> BoxFuture<'a, Result<ResultSet, BrainsightError>> {
        Box::pin(self.post(payload))
    }

    fn name(&self) -> &str {
        &self.endpoint
    }
}

fn build_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), INFER_PATH)
}

pub(crate) fn parse_response(body: &str) -> Result<ResultSet, BrainsightError> {
    let results: ResultSet = serde_json::from_str(body)
        .map_err(|e| BrainsightError::InvalidResponse(e.to_string()))?;

    let missing = results.missing_models();
    if !missing.is_empty() {
        tracing::warn!(
            "backend returned no result for: {}",
            missing
                .iter()
                .map(|id| id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(results)
}
