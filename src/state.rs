use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{BookingForm, Cart, Catalog, StatusMessage, SubmissionState};
use crate::services::booking::{BookingSubmitter, PendingSend, RelaySettings};
use crate::services::mail::MailRelay;
use crate::services::newsletter::NewsletterForm;
use crate::services::view::{self, CartView};

/// One page session: the catalog, the cart and both forms.
pub struct BookingPage {
    catalog: Catalog,
    cart: Cart,
    booking_form: BookingForm,
    newsletter: NewsletterForm,
    submitter: BookingSubmitter,
}

impl BookingPage {
    pub fn new(catalog: Catalog, relay: Arc<dyn MailRelay>, settings: RelaySettings) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            booking_form: BookingForm::default(),
            newsletter: NewsletterForm::default(),
            submitter: BookingSubmitter::new(relay, settings),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn booking_form(&self) -> &BookingForm {
        &self.booking_form
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.submitter.status()
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submitter.state()
    }

    pub fn view(&self) -> CartView {
        view::render(&self.cart, &self.catalog)
    }

    pub fn on_add(&mut self, service_id: &str) -> Result<(), AppError> {
        let service = self
            .catalog
            .get(service_id)
            .ok_or_else(|| AppError::UnknownService(service_id.to_string()))?;

        self.cart.add_unit(&service.id, &service.name, service.unit_price);
        tracing::debug!(
            service_id,
            quantity = self.cart.quantity(service_id),
            "added to cart"
        );
        Ok(())
    }

    pub fn on_remove(&mut self, service_id: &str) {
        self.cart.remove_unit(service_id);
        tracing::debug!(
            service_id,
            quantity = self.cart.quantity(service_id),
            "removed from cart"
        );
    }

    /// Store the typed fields and validate them against the cart.
    pub fn begin_booking(&mut self, fields: BookingForm) -> Result<PendingSend, AppError> {
        if self.submitter.state() == SubmissionState::Sending {
            return Err(AppError::BookingInProgress);
        }
        self.booking_form = fields;
        self.submitter.begin(&self.booking_form, &self.cart)
    }

    pub fn finish_booking(&mut self, outcome: Result<(), AppError>) -> Result<(), AppError> {
        self.submitter
            .complete(outcome, &mut self.cart, &mut self.booking_form)
    }

    pub async fn on_submit_booking(&mut self, fields: BookingForm) -> Result<(), AppError> {
        let pending = self.begin_booking(fields)?;
        let outcome = pending.dispatch().await;
        self.finish_booking(outcome)
    }

    pub fn on_subscribe(&mut self, name: &str, email: &str) -> Option<String> {
        self.newsletter = NewsletterForm::new(name, email);
        self.newsletter.subscribe()
    }
}
