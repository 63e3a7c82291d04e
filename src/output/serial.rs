//! Line-oriented console output.

use std::io::Write;

use super::{OutputError, Presenter, PRIVKEY_FORMAT_WIF};
use crate::deriver::DerivedKey;

/// Prints the address and private key as two labelled lines.
pub struct SerialPresenter<W: Write> {
    out: W,
}

impl<W: Write> SerialPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for SerialPresenter<W> {
    fn present(&mut self, key: &DerivedKey) -> Result<(), OutputError> {
        writeln!(self.out, "Address: {}", key.address())?;
        writeln!(
            self.out,
            "Private Key {}: {}",
            PRIVKEY_FORMAT_WIF,
            key.private_key().expose()
        )?;
        self.out.flush()?;
        Ok(())
    }
}
