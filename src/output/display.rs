//! Character display emulation.
//!
//! Mimics a 20x4 character LCD: the address and the private key are shown
//! on alternating screens, each held for a fixed interval.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use zeroize::Zeroizing;

use super::{OutputError, Presenter, PRIVKEY_FORMAT_WIF};
use crate::deriver::DerivedKey;

/// Default time each screen is held.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// Granularity of stop flag checks while a screen is held.
const POLL_SLICE: Duration = Duration::from_millis(100);

/// Longest field shown: an uncompressed WIF is at most 51 base58 characters.
pub const MAX_FIELD_LEN: usize = 51;

/// Character grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub cols: usize,
    pub rows: usize,
}

impl DisplayGeometry {
    /// Returns true if a field of `len` characters fits below the heading line.
    pub fn fits(&self, len: usize) -> bool {
        self.cols > 0 && self.rows.saturating_sub(1) >= len.div_ceil(self.cols)
    }
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self { cols: 20, rows: 4 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub geometry: DisplayGeometry,
    /// How long each screen stays up
    pub interval: Duration,
    /// Full address/key rotations before returning (0 = until stopped)
    pub cycles: usize,
    /// Clear the terminal before each screen
    pub clear_screen: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            geometry: DisplayGeometry::default(),
            interval: DEFAULT_INTERVAL,
            cycles: 0,
            clear_screen: false,
        }
    }
}

/// Prepares a field for the display.
///
/// Drops anything outside `[A-Za-z0-9]` and breaks the line every `cols`
/// input characters.
pub fn prep_data(data: &str, cols: usize) -> String {
    let mut prepped = String::with_capacity(data.len() + data.len() / cols.max(1));

    for (i, c) in data.chars().enumerate() {
        if i != 0 && cols > 0 && i % cols == 0 {
            prepped.push('\n');
        }
        if c.is_ascii_alphanumeric() {
            prepped.push(c);
        }
    }

    prepped
}

/// Renders one screen: a heading line followed by the body lines, clipped
/// to the grid and surrounded by a border.
pub fn render_frame(heading: &str, body: &str, geometry: DisplayGeometry) -> String {
    let DisplayGeometry { cols, rows } = geometry;
    let border = format!("+{}+\n", "-".repeat(cols));

    let mut frame = String::with_capacity((cols + 3) * (rows + 2));
    frame.push_str(&border);

    let mut lines = std::iter::once(heading).chain(body.lines());
    for _ in 0..rows {
        let line = lines.next().unwrap_or("");
        let clipped: String = line.chars().take(cols).collect();
        let padding = cols - clipped.chars().count();
        frame.push('|');
        frame.push_str(&clipped);
        frame.push_str(&" ".repeat(padding));
        frame.push_str("|\n");
    }

    frame.push_str(&border);
    frame
}

/// Rotates the address and private key on an emulated character display.
pub struct DisplayPresenter<W: Write> {
    out: W,
    settings: DisplaySettings,
    stop_flag: Arc<AtomicBool>,
}

impl<W: Write> DisplayPresenter<W> {
    pub fn new(out: W, settings: DisplaySettings, stop_flag: Arc<AtomicBool>) -> Self {
        Self {
            out,
            settings,
            stop_flag,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn is_stopped(&self) -> bool {
        self.stop_flag.load(Ordering::Relaxed)
    }

    fn show(&mut self, screen: &str) -> Result<(), OutputError> {
        if self.settings.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.out.write_all(screen.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Holds the current screen. Returns false if stopped meanwhile.
    ///
    /// An interval too large to represent as an `Instant` holds until stopped.
    fn hold(&self) -> bool {
        let deadline = Instant::now().checked_add(self.settings.interval);
        loop {
            if self.is_stopped() {
                return false;
            }
            let slice = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return true;
                    }
                    POLL_SLICE.min(deadline - now)
                }
                None => POLL_SLICE,
            };
            thread::sleep(slice);
        }
    }
}

impl<W: Write> Presenter for DisplayPresenter<W> {
    fn present(&mut self, key: &DerivedKey) -> Result<(), OutputError> {
        let geometry = self.settings.geometry;
        let longest = key
            .address()
            .as_str()
            .len()
            .max(key.private_key().expose().len());
        if !geometry.fits(longest) {
            return Err(OutputError::DisplayTooSmall {
                cols: geometry.cols,
                rows: geometry.rows,
            });
        }

        let screens = [
            Zeroizing::new(render_frame(
                "Address:",
                &prep_data(key.address().as_str(), geometry.cols),
                geometry,
            )),
            Zeroizing::new(render_frame(
                &format!("Private Key {}:", PRIVKEY_FORMAT_WIF),
                &Zeroizing::new(prep_data(key.private_key().expose(), geometry.cols)),
                geometry,
            )),
        ];

        let mut cycle = 0;
        loop {
            for screen in &screens {
                if self.is_stopped() {
                    return Ok(());
                }
                self.show(screen)?;
                if !self.hold() {
                    return Ok(());
                }
            }

            cycle += 1;
            if self.settings.cycles > 0 && cycle >= self.settings.cycles {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::sha256;
    use crate::deriver::derive_from_entropy;
    use crate::network::Prefixes;

    fn known_key() -> DerivedKey {
        derive_from_entropy(&sha256(b"abc123"), Prefixes::default()).unwrap()
    }

    fn quick_settings(cycles: usize) -> DisplaySettings {
        DisplaySettings {
            interval: Duration::ZERO,
            cycles,
            ..DisplaySettings::default()
        }
    }

    #[test]
    fn test_prep_data_wraps_every_cols_chars() {
        assert_eq!(
            prep_data("1LG1ibbDtSWpL3UiKKvzspZTce2n7tLpNg", 20),
            "1LG1ibbDtSWpL3UiKKvz\nspZTce2n7tLpNg"
        );
    }

    #[test]
    fn test_prep_data_filters_unsupported_chars() {
        // Wrapping counts input characters, including dropped ones
        assert_eq!(prep_data("ab-cd_ef", 3), "ab\ncd\nef");
        assert_eq!(prep_data("a b", 20), "ab");
    }

    #[test]
    fn test_render_address_frame() {
        let frame = render_frame(
            "Address:",
            "1LG1ibbDtSWpL3UiKKvz\nspZTce2n7tLpNg",
            DisplayGeometry::default(),
        );
        assert_eq!(
            frame,
            "+--------------------+\n\
             |Address:            |\n\
             |1LG1ibbDtSWpL3UiKKvz|\n\
             |spZTce2n7tLpNg      |\n\
             |                    |\n\
             +--------------------+\n"
        );
    }

    #[test]
    fn test_render_clips_to_geometry() {
        let frame = render_frame("Heading", "abcdef\nline2\nline3", DisplayGeometry { cols: 4, rows: 2 });
        assert_eq!(frame, "+----+\n|Head|\n|abcd|\n+----+\n");
    }

    #[test]
    fn test_present_rotates_screens() {
        let stop = Arc::new(AtomicBool::new(false));
        let mut presenter = DisplayPresenter::new(Vec::<u8>::new(), quick_settings(2), stop);
        presenter.present(&known_key()).unwrap();

        let shown = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(shown.matches("|Address:").count(), 2);
        assert_eq!(shown.matches("|Private Key (WIF):").count(), 2);
        assert!(shown.contains("|5Je8PHUo5YkRsnNvUeG6|\n|3nmHCz9z1WXErPr3nbmU|\n|kWtsKeffhD4         |"));
    }

    #[test]
    fn test_present_honours_stop_flag() {
        let stop = Arc::new(AtomicBool::new(true));
        let mut presenter = DisplayPresenter::new(Vec::<u8>::new(), quick_settings(0), stop);
        presenter.present(&known_key()).unwrap();
        assert!(presenter.into_inner().is_empty());
    }

    #[test]
    fn test_clear_screen_prefix() {
        let stop = Arc::new(AtomicBool::new(false));
        let settings = DisplaySettings {
            clear_screen: true,
            ..quick_settings(1)
        };
        let mut presenter = DisplayPresenter::new(Vec::<u8>::new(), settings, stop);
        presenter.present(&known_key()).unwrap();

        let shown = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(shown.starts_with("\x1b[2J"));
        assert_eq!(shown.matches("\x1b[2J").count(), 2);
        assert!(shown.contains("|Address:"));
    }

    #[test]
    fn test_geometry_fits() {
        assert!(DisplayGeometry::default().fits(MAX_FIELD_LEN));
        assert!(DisplayGeometry { cols: 17, rows: 4 }.fits(MAX_FIELD_LEN));
        assert!(!DisplayGeometry { cols: 16, rows: 4 }.fits(MAX_FIELD_LEN));
        assert!(!DisplayGeometry { cols: 20, rows: 2 }.fits(MAX_FIELD_LEN));
        assert!(!DisplayGeometry { cols: 0, rows: 4 }.fits(1));
    }

    #[test]
    fn test_small_display_refuses_partial_key() {
        let stop = Arc::new(AtomicBool::new(false));
        let settings = DisplaySettings {
            geometry: DisplayGeometry { cols: 20, rows: 2 },
            ..quick_settings(1)
        };
        let mut presenter = DisplayPresenter::new(Vec::<u8>::new(), settings, stop);

        let result = presenter.present(&known_key());
        assert!(matches!(
            result,
            Err(OutputError::DisplayTooSmall { cols: 20, rows: 2 })
        ));
        assert!(presenter.into_inner().is_empty());
    }

    #[test]
    fn test_hold_with_unrepresentable_interval() {
        let stop = Arc::new(AtomicBool::new(false));
        let settings = DisplaySettings {
            interval: Duration::from_secs(u64::MAX),
            ..DisplaySettings::default()
        };
        let presenter = DisplayPresenter::new(Vec::<u8>::new(), settings, stop.clone());

        let stopper = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            stop.store(true, Ordering::Relaxed);
        });
        assert!(!presenter.hold());
        stopper.join().unwrap();
    }
}
