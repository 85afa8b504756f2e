// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! System clipboard adapter backed by `arboard`.
//!
//! ## Feature
//!
//! Enable with `arboard` (implies `std`).
//!
//! ## Notes
//!
//! The adapter is a thin [`ClipboardSink`] over [`arboard::Clipboard`] for
//! hosts that apply [`Effect::WriteClipboard`](crate::Effect::WriteClipboard)
//! against the real system clipboard. Hosts with their own clipboard path
//! (native tools, a test buffer) implement the trait directly instead.

use alloc::string::ToString;

use crate::types::{ClipboardError, ClipboardSink};

/// A [`ClipboardSink`] writing to the platform clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl core::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

impl SystemClipboard {
    /// Open the platform clipboard.
    ///
    /// Fails with [`ClipboardError::Unavailable`] where no clipboard exists,
    /// for example on a headless display server.
    pub fn new() -> Result<Self, ClipboardError> {
        match arboard::Clipboard::new() {
            Ok(inner) => Ok(Self { inner }),
            Err(arboard::Error::ClipboardNotSupported) => Err(ClipboardError::Unavailable),
            Err(error) => Err(ClipboardError::Backend(error.to_string())),
        }
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text).map_err(|error| match error {
            arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable,
            arboard::Error::ClipboardOccupied => {
                ClipboardError::Backend("clipboard occupied".to_string())
            }
            other => ClipboardError::Backend(other.to_string()),
        })
    }
}
