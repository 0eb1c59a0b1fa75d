use std::borrow::Cow;
use std::fmt;
use std::io::Write;

/// Error type returned by feature actions.
pub type ActionError = Box<dyn std::error::Error + Send + Sync + 'static>;

type Action<'a> = Box<dyn Fn(&mut dyn Write) -> Result<(), ActionError> + 'a>;

pub(crate) enum FeatureKind<'a> {
    Action(Action<'a>),
    Quit,
}

/// A titled menu entry.
///
/// Actions capture whatever they query (usually a provider reference) and only
/// receive the output sink.
pub struct Feature<'a> {
    title: Cow<'static, str>,
    pub(crate) kind: FeatureKind<'a>,
}

impl<'a> Feature<'a> {
    pub fn new<F>(title: impl Into<Cow<'static, str>>, action: F) -> Self
    where
        F: Fn(&mut dyn Write) -> Result<(), ActionError> + 'a,
    {
        Self { title: title.into(), kind: FeatureKind::Action(Box::new(action)) }
    }

    /// The entry that clears the screen and ends the menu loop.
    pub fn quit(title: impl Into<Cow<'static, str>>) -> Self {
        Self { title: title.into(), kind: FeatureKind::Quit }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self.kind, FeatureKind::Quit)
    }
}

impl fmt::Debug for Feature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feature")
            .field("title", &self.title)
            .field("quit", &self.is_quit())
            .finish_non_exhaustive()
    }
}
