use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub emailjs_public_key: String,
    pub emailjs_access_token: Option<String>,
    pub emailjs_api_url: String,
    pub booking_recipient: String,
    pub catalog_path: Option<String>,
    pub relay_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            emailjs_service_id: env::var("EMAILJS_SERVICE_ID").unwrap_or_default(),
            emailjs_template_id: env::var("EMAILJS_TEMPLATE_ID").unwrap_or_default(),
            emailjs_public_key: env::var("EMAILJS_PUBLIC_KEY").unwrap_or_default(),
            emailjs_access_token: env::var("EMAILJS_ACCESS_TOKEN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            emailjs_api_url: env::var("EMAILJS_API_URL")
                .unwrap_or_else(|_| "https://api.emailjs.com".to_string()),
            booking_recipient: env::var("BOOKING_RECIPIENT")
                .unwrap_or_else(|_| "Service Owner".to_string()),
            catalog_path: env::var("CATALOG_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            relay_timeout: parse_timeout(env::var("RELAY_TIMEOUT_SECS").ok().as_deref()),
        }
    }
}

/// `None`, garbage and `0` all mean "wait for the relay indefinitely".
fn parse_timeout(raw: Option<&str>) -> Option<Duration> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
