use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::MailRelay;
use crate::models::TemplateParams;

/// Sends template emails through the EmailJS REST API.
pub struct EmailJsRelay {
    api_url: String,
    public_key: String,
    access_token: Option<String>,
    client: reqwest::Client,
}

impl EmailJsRelay {
    pub fn new(api_url: String, public_key: String, access_token: Option<String>) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            public_key,
            access_token,
            client: reqwest::Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.public_key.trim().is_empty()
    }
}

#[async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> anyhow::Result<()> {
        anyhow::ensure!(self.is_configured(), "EmailJS public key is not set");

        let mut body = json!({
            "service_id": service_id,
            "template_id": template_id,
            "user_id": self.public_key,
            "template_params": params,
        });
        if let Some(token) = &self.access_token {
            body["accessToken"] = json!(token);
        }

        let resp = self
            .client
            .post(format!("{}/api/v1.0/email/send", self.api_url))
            .json(&body)
            .send()
            .await
            .context("failed to call EmailJS API")?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            anyhow::bail!("EmailJS API returned {status}: {detail}");
        }

        tracing::info!(service_id, template_id, "booking email accepted by EmailJS");
        Ok(())
    }
}
