use crate::shared::error::FilterError;
use crate::shared::frame::Frame;

/// Domain interface for producing a filtered copy of a frame.
///
/// Implementations never mutate the input: the caller may still hold and
/// display the original. The returned frame has the same dimensions as
/// the input, and identical inputs always produce byte-identical outputs.
pub trait FrameFilter: Send {
    fn apply(&self, frame: &Frame) -> Result<Frame, FilterError>;
}
