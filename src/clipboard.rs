//! Clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Anything that can receive a copied password.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via copypasta. The context is opened on first use so a
/// headless session only fails when the user actually copies.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the context now, failing early.
    pub fn open() -> Result<Self> {
        let mut clipboard = Self::new();
        clipboard.context()?;
        Ok(clipboard)
    }

    fn context(&mut self) -> Result<&mut ClipboardContext> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| Error::Clipboard("clipboard not initialised".into()))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        hand_off(self.context()?, text)?;
        log::debug!("copied {} chars to clipboard", text.chars().count());
        Ok(())
    }
}

/// Give `text` to the provider, then wipe the copy it hands back.
fn hand_off<P: ClipboardProvider + ?Sized>(provider: &mut P, text: &str) -> Result<()> {
    provider
        .set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    if let Ok(mut retrieved) = provider.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// In-memory clipboard for tests.
    #[derive(Default)]
    pub struct MemoryClipboard {
        pub contents: Option<String>,
        pub fail: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Clipboard("no display".into()));
            }
            self.contents = Some(text.to_owned());
            Ok(())
        }
    }
}
