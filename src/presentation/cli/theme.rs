//! Terminal colour theme
//!
//! Styles are chosen once at startup and passed to whatever prints; the
//! analysis itself never sees them.

use console::Style;

/// Immutable set of styles used by the report and the prompt
#[derive(Debug, Clone)]
pub struct Theme {
    pub banner: Style,
    pub tagline: Style,
    pub heading: Style,
    pub prompt: Style,
    pub hex: Style,
    pub detected: Style,
    pub extension: Style,
    pub ok: Style,
    pub alert: Style,
    pub warning: Style,
    pub muted: Style,
    colored: bool,
}

impl Theme {
    /// ANSI colours
    pub fn colored() -> Self {
        Self {
            banner: Style::new().cyan().bright(),
            tagline: Style::new().yellow(),
            heading: Style::new().cyan().bright(),
            prompt: Style::new().bold(),
            hex: Style::new().blue().bright(),
            detected: Style::new().green().bright(),
            extension: Style::new().yellow(),
            ok: Style::new().green().bright().bold(),
            alert: Style::new().red().bright().bold(),
            warning: Style::new().yellow(),
            muted: Style::new().dim(),
            colored: true,
        }
    }

    /// No styling at all, for `--no-color` and for tests
    pub fn plain() -> Self {
        Self {
            banner: Style::new(),
            tagline: Style::new(),
            heading: Style::new(),
            prompt: Style::new(),
            hex: Style::new(),
            detected: Style::new(),
            extension: Style::new(),
            ok: Style::new(),
            alert: Style::new(),
            warning: Style::new(),
            muted: Style::new(),
            colored: false,
        }
    }

    /// Returns true if this theme emits colour
    pub fn is_colored(&self) -> bool {
        self.colored
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}
