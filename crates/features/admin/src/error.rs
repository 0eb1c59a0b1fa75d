use std::borrow::Cow;

/// A specialized [`AdminError`] enum of this crate.
#[mdc_derive::mdc_error]
pub enum AdminError {
    /// The mail server and its admin binding were built for different versions.
    #[error("Incompatible MDaemon version{}: {message}", format_context(.context))]
    Incompatible { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Administrative data could not be fetched.
    #[error("Admin data unavailable{}: {source}", format_context(.context))]
    Provider { source: mdc_provider::ProviderError, context: Option<Cow<'static, str>> },

    /// The menu loop stopped on a terminal failure.
    #[error("Console error{}: {source}", format_context(.context))]
    Menu { source: mdc_console::MenuError, context: Option<Cow<'static, str>> },

    /// Writing to the output stream failed.
    #[error("Output error{}: {source}", format_context(.context))]
    Output { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal admin error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
