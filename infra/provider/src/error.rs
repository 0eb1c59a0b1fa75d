use std::borrow::Cow;

/// Failures while fetching administrative data.
#[mdc_derive::mdc_error]
pub enum ProviderError {
    /// The backing document could not be read.
    #[error("Provider I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The backing document is not a valid snapshot.
    #[error("Malformed admin snapshot{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal provider error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
