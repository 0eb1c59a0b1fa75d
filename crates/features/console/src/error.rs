use std::borrow::Cow;

/// Errors that end the menu loop.
///
/// Failures raised by a feature's action are not listed here: the loop reports
/// them inline and keeps running.
#[mdc_derive::mdc_error]
pub enum MenuError {
    /// Reading a key from, or writing to, the terminal failed.
    #[error("Terminal I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal menu error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
