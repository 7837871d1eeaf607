pub mod booking;
pub mod cart;
pub mod money;
pub mod service;

pub use booking::{
    BookingForm, BookingRequest, StatusMessage, SubmissionState, TemplateParams, Tone,
};
pub use cart::{Cart, LineItem};
pub use money::{format_currency, CURRENCY_SYMBOL};
pub use service::{Catalog, Service};
