//! Output surfaces for a derived address and private key.
//!
//! Supports multiple presentation strategies:
//! - Serial: print both fields as labelled lines
//! - Display: rotate the fields on an emulated character display
//! - DisplaySerial: serial output followed by the display

mod display;
mod serial;

use std::fmt;
use std::io::{self, Stdout, Write};
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub use display::{
    prep_data, render_frame, DisplayGeometry, DisplayPresenter, DisplaySettings, MAX_FIELD_LEN,
};
pub use serial::SerialPresenter;

use crate::deriver::DerivedKey;

/// Label shown next to the private key.
pub const PRIVKEY_FORMAT_WIF: &str = "(WIF)";

/// Errors raised while presenting a derived key.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Output failed: {0}")]
    Io(#[from] io::Error),

    #[error("Display of {cols}x{rows} is too small to show the full key")]
    DisplayTooSmall { cols: usize, rows: usize },
}

/// Something that can show an address and its private key.
pub trait Presenter {
    fn present(&mut self, key: &DerivedKey) -> Result<(), OutputError>;
}

/// Where derived keys are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    Display,
    DisplaySerial,
    #[default]
    Serial,
}

impl OutputMode {
    /// Returns true if this mode drives the character display.
    pub fn uses_display(self) -> bool {
        matches!(self, OutputMode::Display | OutputMode::DisplaySerial)
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "display" | "screen" | "lcd" => Ok(OutputMode::Display),
            "both" | "display-serial" | "displayserial" => Ok(OutputMode::DisplaySerial),
            "serial" | "console" => Ok(OutputMode::Serial),
            _ => Err(format!("Unknown output mode: {}", s)),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Display => write!(f, "display"),
            OutputMode::DisplaySerial => write!(f, "display+serial"),
            OutputMode::Serial => write!(f, "serial"),
        }
    }
}

/// The configured output strategy.
pub enum Output<W: Write> {
    Serial(SerialPresenter<W>),
    Display(DisplayPresenter<W>),
    DisplaySerial(SerialPresenter<W>, DisplayPresenter<W>),
}

impl<W: Write> Output<W> {
    /// Builds the strategy for `mode`, opening one writer per surface.
    pub fn new(
        mode: OutputMode,
        settings: DisplaySettings,
        stop_flag: Arc<AtomicBool>,
        mut writer: impl FnMut() -> W,
    ) -> Self {
        match mode {
            OutputMode::Serial => Output::Serial(SerialPresenter::new(writer())),
            OutputMode::Display => {
                Output::Display(DisplayPresenter::new(writer(), settings, stop_flag))
            }
            OutputMode::DisplaySerial => Output::DisplaySerial(
                SerialPresenter::new(writer()),
                DisplayPresenter::new(writer(), settings, stop_flag),
            ),
        }
    }
}

impl Output<Stdout> {
    /// Builds the strategy writing to standard output.
    pub fn stdout(mode: OutputMode, settings: DisplaySettings, stop_flag: Arc<AtomicBool>) -> Self {
        Self::new(mode, settings, stop_flag, io::stdout)
    }
}

impl<W: Write> Presenter for Output<W> {
    fn present(&mut self, key: &DerivedKey) -> Result<(), OutputError> {
        match self {
            Output::Serial(serial) => serial.present(key),
            Output::Display(display) => display.present(key),
            Output::DisplaySerial(serial, display) => {
                serial.present(key)?;
                display.present(key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!("display".parse::<OutputMode>(), Ok(OutputMode::Display));
        assert_eq!("both".parse::<OutputMode>(), Ok(OutputMode::DisplaySerial));
        assert_eq!("Serial".parse::<OutputMode>(), Ok(OutputMode::Serial));
        assert!("printer".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_uses_display() {
        assert!(OutputMode::Display.uses_display());
        assert!(OutputMode::DisplaySerial.uses_display());
        assert!(!OutputMode::Serial.uses_display());
    }

    #[test]
    fn test_new_builds_matching_strategy() {
        let stop = Arc::new(AtomicBool::new(false));
        let settings = DisplaySettings::default();

        let output = Output::new(OutputMode::DisplaySerial, settings, stop, Vec::<u8>::new);
        assert!(matches!(output, Output::DisplaySerial(_, _)));
    }
}
