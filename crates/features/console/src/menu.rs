use crate::error::{MenuError, MenuErrorExt};
use crate::feature::{Feature, FeatureKind};
use crate::keys::{Key, KeySource};
use crate::render;
use colored::Colorize;
use std::borrow::Cow;
use std::io::Write;
use tracing::{debug, info, warn};

const PROMPT: &str = "Select an option: ";
const PAUSE: &str = "Press any key to return to the menu...";

/// What happened during one menu session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuOutcome {
    /// Times the menu was drawn.
    pub renders: usize,
    /// Actions dispatched, failed ones included.
    pub invoked: usize,
    /// Actions that returned an error.
    pub failed: usize,
    /// Keys that did not select anything.
    pub rejected: usize,
}

/// A fixed, ordered list of features behind a single-keypress prompt.
#[derive(Debug)]
pub struct Menu<'a> {
    title: Cow<'static, str>,
    features: Vec<Feature<'a>>,
}

impl<'a> Menu<'a> {
    pub fn new(title: impl Into<Cow<'static, str>>, features: Vec<Feature<'a>>) -> Self {
        Self { title: title.into(), features }
    }

    /// Maps a key to a zero-based feature index.
    ///
    /// Keys are read as a 1-based digit; anything else, `0`, and digits past the
    /// last feature select nothing.
    #[must_use]
    pub fn select(&self, key: Key) -> Option<usize> {
        let Key::Char(c) = key else { return None };
        let n = usize::try_from(c.to_digit(10)?).ok()?;
        (1..=self.features.len()).contains(&n).then(|| n - 1)
    }

    /// Writes the banner, one `N. Title` line per feature and the prompt.
    ///
    /// # Errors
    /// Returns [`MenuError::Io`] if the sink fails.
    pub fn render(&self, out: &mut impl Write) -> Result<(), MenuError> {
        render::banner(out, &self.title).context("Failed to draw menu")?;
        for (n, feature) in self.features.iter().enumerate() {
            writeln!(out, "{}. {}", (n + 1).to_string().bold(), feature.title())
                .context("Failed to draw menu")?;
        }
        writeln!(out).context("Failed to draw menu")?;
        write!(out, "{}", PROMPT.dimmed()).context("Failed to draw menu")?;
        out.flush().context("Failed to draw menu")
    }

    /// Runs the menu until the quit feature is chosen.
    ///
    /// After a successful action the loop waits for one more key before drawing
    /// the menu again. A failing action is reported with an error banner and the
    /// menu is drawn again right away.
    ///
    /// # Errors
    /// Returns [`MenuError`] when keys cannot be read or the sink fails.
    /// Action failures never end the loop.
    pub fn run(
        &self,
        keys: &mut impl KeySource,
        out: &mut impl Write,
    ) -> Result<MenuOutcome, MenuError> {
        let mut outcome = MenuOutcome::default();

        loop {
            self.render(out)?;
            outcome.renders += 1;

            let key = keys.next_key()?;
            writeln!(out).context("Failed to echo selection")?;

            let Some(index) = self.select(key) else {
                debug!(?key, "Key selects nothing");
                outcome.rejected += 1;
                continue;
            };

            let feature = &self.features[index];
            let action = match &feature.kind {
                FeatureKind::Quit => {
                    render::clear_screen(out).context("Failed to clear screen")?;
                    info!(?outcome, "Menu closed");
                    return Ok(outcome);
                },
                FeatureKind::Action(action) => action,
            };

            debug!(feature = feature.title(), "Running feature");
            outcome.invoked += 1;

            match action(out) {
                Ok(()) => {
                    writeln!(out).context("Failed to write pause prompt")?;
                    write!(out, "{}", PAUSE.dimmed()).context("Failed to write pause prompt")?;
                    out.flush().context("Failed to write pause prompt")?;
                    keys.next_key()?;
                    writeln!(out).context("Failed to write pause prompt")?;
                },
                Err(e) => {
                    warn!(feature = feature.title(), error = %e, "Feature failed");
                    outcome.failed += 1;
                    render::error_banner(out, &e.to_string()).context("Failed to report error")?;
                },
            }
        }
    }
}
