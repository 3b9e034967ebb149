//! HTTP inference backend.
//!
//! Sends `POST <endpoint>/<model>` with a bearer token and `{"inputs": prompt}`,
//! and reads the generated text out of the JSON reply. Accepted reply shapes:
//!
//! - `{"generated_text": ["..."]}`
//! - `{"generated_text": "..."}`
//! - `[{"generated_text": "..."}]`

use crate::error::{LetterError, Result};
use crate::placeholder::{FieldMap, substitute};
use serde_json::Value;
use std::time::Duration;

/// Client for a hosted text-generation model.
#[derive(Clone)]
pub struct RemoteInference {
    endpoint: String,
    model: String,
    token: String,
    timeout: Duration,
    prompt_template: String,
}

impl std::fmt::Debug for RemoteInference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteInference")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RemoteInference {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        token: impl Into<String>,
        timeout_seconds: u64,
        prompt_template: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            token: token.into(),
            timeout: Duration::from_secs(timeout_seconds),
            prompt_template: prompt_template.into(),
        }
    }

    /// Full request URL: endpoint with the model id appended.
    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.model.trim_start_matches('/')
        )
    }

    /// Prompt sent to the model for these fields.
    pub fn build_prompt(&self, fields: &FieldMap) -> Result<String> {
        substitute(&self.prompt_template, fields)
    }

    pub fn generate(&self, fields: &FieldMap) -> Result<String> {
        let prompt = self.build_prompt(fields)?;
        let url = self.url();

        log::info!("requesting completion from '{}'", url);
        log::debug!("prompt: {}", prompt);

        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();

        let response = agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Content-Type", "application/json")
            .send_json(ureq::json!({ "inputs": prompt }))
            .map_err(|e| match e {
                ureq::Error::Status(status, resp) => status_error(status, resp),
                other => {
                    LetterError::BackendError(format!("request to '{}' failed: {}", url, other))
                }
            })?;

        // ureq only reports >= 400 as an error; anything else outside 2xx is
        // still a failed generation.
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(status_error(status, response));
        }

        let body = response.into_string().map_err(|e| {
            LetterError::BackendError(format!("failed to read response from '{}': {}", url, e))
        })?;

        log::debug!("model replied with HTTP {} ({} bytes)", status, body.len());
        parse_generated_text(&body)
    }
}

/// Error for a non-2xx reply, carrying the raw body.
fn status_error(status: u16, response: ureq::Response) -> LetterError {
    match response.into_string() {
        Ok(body) => LetterError::BackendError(format!("model returned HTTP {}: {}", status, body)),
        Err(e) => LetterError::BackendError(format!(
            "model returned HTTP {} (failed to read response body: {})",
            status, e
        )),
    }
}

/// Pull the generated text out of a successful reply body.
pub(crate) fn parse_generated_text(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        LetterError::BackendError(format!("model reply is not valid JSON ({}): {}", e, body))
    })?;

    let field = match &value {
        Value::Array(items) => items.first().map(|item| &item["generated_text"]),
        Value::Object(_) => Some(&value["generated_text"]),
        _ => None,
    };

    let text = field.and_then(|field| match field {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => items.first().and_then(Value::as_str).map(str::to_string),
        _ => None,
    });

    text.ok_or_else(|| {
        LetterError::BackendError(format!("model reply has no generated_text: {}", body))
    })
}
