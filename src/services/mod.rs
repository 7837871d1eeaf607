pub mod booking;
pub mod mail;
pub mod newsletter;
pub mod view;
