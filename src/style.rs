//! Terminal decoration for the console output.

use console::Style;

/// Read-only set of styles used by the console output.
///
/// Colors degrade to plain text automatically when stdout is not a
/// terminal; `console` handles the detection.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Mode banner ("batch mode!", "auto mode!").
    pub header: Style,
    /// Informational lines (run banner prefix, summary).
    pub info: Style,
    /// Available names.
    pub ok: Style,
    /// Taken or unconfirmed names.
    pub err: Style,
}

impl Palette {
    /// The default palette.
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: Style::new().magenta().bright(),
            info: Style::new().blue().bright(),
            ok: Style::new().green().bright(),
            err: Style::new().red().bright(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
