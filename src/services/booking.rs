use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{
    BookingForm, BookingRequest, Cart, StatusMessage, SubmissionState, TemplateParams,
};
use crate::services::mail::MailRelay;

pub const SENDING_TEXT: &str = "Sending your booking...";
pub const SUCCESS_TEXT: &str = "Thank you For Booking the Service! We will get back to you soon.";
pub const RELAY_FAILURE_TEXT: &str =
    "Sorry, we could not send your booking right now. Please try again.";

/// Where booking notifications go.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub service_id: String,
    pub template_id: String,
    pub recipient: String,
    pub timeout: Option<Duration>,
}

impl RelaySettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            service_id: config.emailjs_service_id.clone(),
            template_id: config.emailjs_template_id.clone(),
            recipient: config.booking_recipient.clone(),
            timeout: config.relay_timeout,
        }
    }
}

/// A validated booking waiting to be handed to the relay.
///
/// Owns everything it needs so it can be awaited while the page keeps
/// handling other commands.
pub struct PendingSend {
    relay: Arc<dyn MailRelay>,
    service_id: String,
    template_id: String,
    params: TemplateParams,
    timeout: Option<Duration>,
}

impl PendingSend {
    pub fn params(&self) -> &TemplateParams {
        &self.params
    }

    pub async fn dispatch(self) -> Result<(), AppError> {
        let send = self
            .relay
            .send(&self.service_id, &self.template_id, &self.params);

        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, send).await {
                Ok(result) => result,
                Err(_) => return Err(AppError::RelayTimeout(limit.as_secs())),
            },
            None => send.await,
        };

        result.map_err(|e| AppError::Relay(format!("{e:#}")))
    }
}

/// Drives a booking through `Idle → Validating → Sending → Succeeded | Failed`.
pub struct BookingSubmitter {
    relay: Arc<dyn MailRelay>,
    settings: RelaySettings,
    state: SubmissionState,
    status: Option<StatusMessage>,
}

impl BookingSubmitter {
    pub fn new(relay: Arc<dyn MailRelay>, settings: RelaySettings) -> Self {
        Self {
            relay,
            settings,
            state: SubmissionState::Idle,
            status: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Validate the form and cart and build the relay payload.
    ///
    /// Nothing is mutated besides the submitter's own state: the cart and
    /// form are only touched in [`BookingSubmitter::complete`].
    pub fn begin(&mut self, form: &BookingForm, cart: &Cart) -> Result<PendingSend, AppError> {
        if self.state == SubmissionState::Sending {
            return Err(AppError::BookingInProgress);
        }

        self.state = SubmissionState::Validating;
        let request = match BookingRequest::new(form, cart) {
            Ok(request) => request,
            Err(e) => {
                tracing::info!(reason = %e, "booking rejected");
                self.state = SubmissionState::Failed;
                self.status = Some(StatusMessage::error(e.to_string()));
                return Err(e.into());
            }
        };

        let params = request.template_params(&self.settings.recipient);
        tracing::info!(
            customer = %request.name,
            items = request.items.len(),
            total = %request.total,
            "sending booking"
        );

        self.state = SubmissionState::Sending;
        self.status = Some(StatusMessage::info(SENDING_TEXT));

        Ok(PendingSend {
            relay: Arc::clone(&self.relay),
            service_id: self.settings.service_id.clone(),
            template_id: self.settings.template_id.clone(),
            params,
            timeout: self.settings.timeout,
        })
    }

    /// Apply the relay's answer. Only a confirmed send clears the cart and form.
    pub fn complete(
        &mut self,
        outcome: Result<(), AppError>,
        cart: &mut Cart,
        form: &mut BookingForm,
    ) -> Result<(), AppError> {
        if self.state != SubmissionState::Sending {
            tracing::warn!(
                state = self.state.as_str(),
                "relay result arrived with no send pending"
            );
            return outcome;
        }

        match outcome {
            Ok(()) => {
                tracing::info!("booking sent");
                self.state = SubmissionState::Succeeded;
                self.status = Some(StatusMessage::success(SUCCESS_TEXT));
                cart.clear();
                form.reset();
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to send booking");
                self.state = SubmissionState::Failed;
                self.status = Some(StatusMessage::error(RELAY_FAILURE_TEXT));
                Err(e)
            }
        }
    }
}
