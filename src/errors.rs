/// Problems the customer can fix by editing the form or the cart.
///
/// The `Display` text is shown verbatim in the booking status line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill all booking fields.")]
    MissingFields,

    #[error("Please add at least one service to cart before booking.")]
    EmptyCart,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("mail relay error: {0}")]
    Relay(String),

    #[error("mail relay did not answer within {0}s")]
    RelayTimeout(u64),

    #[error("a booking is already being sent")]
    BookingInProgress,
}
