//! Multipart frame uploads.

use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError};
use cqa_models::FRAMES_FIELD;
use cqa_scorer::FrameSource;
use thiserror::Error;

/// Why an uploaded frame could not be read.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("{}", .0.body_text())]
    Multipart(#[from] MultipartError),

    #[error("Too many frames (limit is {limit})")]
    TooManyFrames { limit: usize },
}

/// Reads `frames` parts from a multipart body in upload order.
///
/// Parts under any other field name are skipped. With no frame limit every
/// `frames` part is read.
pub struct MultipartFrames {
    multipart: Multipart,
    max_frames: Option<usize>,
    images_only: bool,
    read: usize,
}

impl MultipartFrames {
    pub fn new(multipart: Multipart, max_frames: Option<usize>) -> Self {
        Self {
            multipart,
            max_frames,
            images_only: false,
            read: 0,
        }
    }

    /// Skip parts whose content type is not `image/*`.
    pub fn images_only(mut self) -> Self {
        self.images_only = true;
        self
    }

    /// Number of frames read so far.
    pub fn read(&self) -> usize {
        self.read
    }
}

impl FrameSource for MultipartFrames {
    type Frame = Bytes;
    type Error = UploadError;

    async fn next_frame(&mut self) -> Option<Result<Bytes, UploadError>> {
        loop {
            let field = match self.multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => return None,
                Err(e) => return Some(Err(e.into())),
            };

            if field.name() != Some(FRAMES_FIELD) {
                continue;
            }
            if self.images_only
                && !field
                    .content_type()
                    .is_some_and(|ct| ct.starts_with("image/"))
            {
                continue;
            }
            if let Some(limit) = self.max_frames.filter(|&limit| self.read >= limit) {
                return Some(Err(UploadError::TooManyFrames { limit }));
            }

            self.read += 1;
            return Some(field.bytes().await.map_err(UploadError::from));
        }
    }
}
