//! How the status image is fitted into the window.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Letterbox the whole image inside the window.
    #[default]
    Fit,
    /// Crop the image so it fills the window.
    Cover,
}

impl DisplayMode {
    /// Token used in the address (`fit` / `cover`).
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Fit => "fit",
            DisplayMode::Cover => "cover",
        }
    }

    /// Human label for the toggle button.
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Fit => "Fit",
            DisplayMode::Cover => "Cover",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Fit => DisplayMode::Cover,
            DisplayMode::Cover => DisplayMode::Fit,
        }
    }
}

/// Returned for anything other than the exact `fit` / `cover` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDisplayMode(pub String);

impl fmt::Display for UnknownDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown display mode: {:?}", self.0)
    }
}

impl std::error::Error for UnknownDisplayMode {}

impl FromStr for DisplayMode {
    type Err = UnknownDisplayMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fit" => Ok(DisplayMode::Fit),
            "cover" => Ok(DisplayMode::Cover),
            other => Err(UnknownDisplayMode(other.to_string())),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_exact_tokens() {
        assert_eq!("fit".parse::<DisplayMode>(), Ok(DisplayMode::Fit));
        assert_eq!("cover".parse::<DisplayMode>(), Ok(DisplayMode::Cover));
        for token in ["", "Fit", "COVER", "contain", " fit", "fill"] {
            assert!(token.parse::<DisplayMode>().is_err(), "{token:?}");
        }
    }

    #[test]
    fn toggling_twice_is_identity() {
        for mode in [DisplayMode::Fit, DisplayMode::Cover] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn token_and_label() {
        assert_eq!(DisplayMode::Cover.to_string(), "cover");
        assert_eq!(DisplayMode::Fit.label(), "Fit");
        assert_eq!(DisplayMode::default(), DisplayMode::Fit);
    }
}
