pub mod emailjs;

use async_trait::async_trait;

use crate::models::TemplateParams;

#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> anyhow::Result<()>;
}
