use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::cart::{Cart, LineItem};
use crate::models::money::format_currency;

/// Flat named string fields handed to the mail relay template.
pub type TemplateParams = BTreeMap<String, String>;

/// Raw contents of the booking form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl BookingForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A validated booking, snapshotted from the form and the cart at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub items: Vec<LineItem>,
    pub total: Decimal,
}

impl BookingRequest {
    /// Fields are checked before the cart.
    pub fn new(form: &BookingForm, cart: &Cart) -> Result<Self, ValidationError> {
        let name = form.name.trim();
        let email = form.email.trim();
        let phone = form.phone.trim();

        if name.is_empty() || email.is_empty() || phone.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if cart.is_empty() {
            return Err(ValidationError::EmptyCart);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            items: cart.items().to_vec(),
            total: cart.total(),
        })
    }

    pub fn order_details(&self) -> String {
        self.items
            .iter()
            .map(|item| {
                format!(
                    "{} x {} = {}",
                    item.name,
                    item.quantity,
                    format_currency(item.subtotal())
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn template_params(&self, recipient: &str) -> TemplateParams {
        let mut params = TemplateParams::new();
        params.insert("to_name".to_string(), recipient.to_string());
        params.insert("from_name".to_string(), self.name.clone());
        params.insert("customer_email".to_string(), self.email.clone());
        params.insert("phone".to_string(), self.phone.clone());
        params.insert("order_details".to_string(), self.order_details());
        params.insert("total_amount".to_string(), format_currency(self.total));
        params.insert("message".to_string(), format!("New booking from {}", self.name));
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    Idle,
    Validating,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Sending => "sending",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Success,
    Error,
}

impl Tone {
    /// Colour the status line is painted in.
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Info => "gray",
            Tone::Success => "green",
            Tone::Error => "red",
        }
    }
}

/// The line under the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub tone: Tone,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            text: text.into(),
        }
    }
}
