use mdc_derive::mdc_error;
use std::borrow::Cow;

#[mdc_error]
pub enum DemoError {
    #[error("Terminal error{}: {source}", format_context(.context))]
    Terminal {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
