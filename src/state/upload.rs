//! Selected-image state for the upload box.
//!
//! A selection happens in two steps: [`UploadController::begin_select`]
//! validates the media type and hands out a ticket, and
//! [`UploadController::finish_select`] installs the decoded image once the
//! file read completes. [`UploadController::reset`] invalidates all
//! outstanding tickets, so a read that finishes after a reset is dropped.

use std::future::Future;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::{debug, warn};

use crate::error::AppError;

/// An image held in memory for preview, encoded as a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub media_type: String,
    pub data_uri: String,
}

impl SelectedImage {
    pub fn from_bytes(media_type: &str, bytes: &[u8]) -> Self {
        Self {
            media_type: media_type.to_string(),
            data_uri: encode_data_uri(media_type, bytes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Empty,
    Previewing(SelectedImage),
}

/// Proof that a selection was accepted while the controller was at `epoch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeTicket {
    epoch: u64,
}

/// A file the user picked or dropped.
pub trait ImageSource {
    fn name(&self) -> String;
    /// Declared MIME type, e.g. `image/png`.
    fn media_type(&self) -> String;
    fn read_bytes(&self) -> impl Future<Output = Result<Vec<u8>, AppError>>;
}

#[derive(Debug, Default)]
pub struct UploadController {
    state: UploadState,
    epoch: u64,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        match &self.state {
            UploadState::Previewing(image) => Some(image),
            UploadState::Empty => None,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image().is_some()
    }

    /// Accept or reject a file by its declared type. State is not changed.
    pub fn begin_select(&self, media_type: &str) -> Result<DecodeTicket, AppError> {
        if !is_image_type(media_type) {
            return Err(AppError::InvalidType {
                media_type: media_type.to_string(),
            });
        }
        debug!("Accepted {} for decoding", media_type);
        Ok(DecodeTicket { epoch: self.epoch })
    }

    /// Install a decoded image. Returns false when the ticket predates a reset.
    /// Among concurrent reads the last one to finish wins.
    pub fn finish_select(&mut self, ticket: DecodeTicket, image: SelectedImage) -> bool {
        if ticket.epoch != self.epoch {
            warn!("Dropping stale image decode ({})", image.media_type);
            return false;
        }
        self.state = UploadState::Previewing(image);
        true
    }

    pub fn reset(&mut self) {
        self.state = UploadState::Empty;
        self.epoch = self.epoch.wrapping_add(1);
    }
}

pub fn is_image_type(media_type: &str) -> bool {
    media_type
        .trim()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

pub fn encode_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}
