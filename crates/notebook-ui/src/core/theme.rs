//! Theme selection shared by the shell and preference storage.

/// Theme mode applied to the document body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value, falling back to light for anything unknown.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "dark" | "notebook-dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The opposite mode, used by the header toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
