use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterForm {
    pub name: String,
    pub email: String,
}

impl NewsletterForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the thank-you text and clears the form when both fields are
    /// filled; otherwise leaves the form as it is.
    pub fn subscribe(&mut self) -> Option<String> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return None;
        }

        tracing::info!(email, "newsletter subscription");
        let thanks = format!("Thanks for subscribing, {name}!");
        *self = Self::default();
        Some(thanks)
    }
}
