//! Asynchronous frame sources.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::future::Future;

/// An ordered stream of frame buffers whose reads may be pending.
///
/// The scorer drains a source completely before computing anything, so a
/// read failure aborts the whole analysis.
pub trait FrameSource {
    type Frame: AsRef<[u8]> + Send;
    type Error;

    /// Read the next frame, or `None` once the source is exhausted.
    fn next_frame(
        &mut self,
    ) -> impl Future<Output = Option<Result<Self::Frame, Self::Error>>> + Send;
}

/// In-memory frames never fail to read.
impl<T> FrameSource for VecDeque<T>
where
    T: AsRef<[u8]> + Send,
{
    type Frame = T;
    type Error = Infallible;

    async fn next_frame(&mut self) -> Option<Result<T, Infallible>> {
        self.pop_front().map(Ok)
    }
}
