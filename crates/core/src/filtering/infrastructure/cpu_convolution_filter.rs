use crate::filtering::domain::frame_filter::FrameFilter;
use crate::filtering::domain::kernel::Kernel3x3;
use crate::shared::error::FilterError;
use crate::shared::frame::Frame;

use super::convolve;

/// Baseline single-threaded convolution backend.
///
/// The effective coefficients (kernel times multiplier) are folded once at
/// construction; `apply` performs a single up-front output allocation and
/// no further allocation in the pixel loop.
pub struct CpuConvolutionFilter {
    coefficients: [f32; 9],
}

impl CpuConvolutionFilter {
    pub fn new(kernel: Kernel3x3) -> Self {
        Self {
            coefficients: kernel.effective(),
        }
    }
}

impl FrameFilter for CpuConvolutionFilter {
    fn apply(&self, frame: &Frame) -> Result<Frame, FilterError> {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        log::debug!("convolving {width}x{height} frame on a single thread");

        let len = frame.data().len();
        let mut out: Vec<u8> = Vec::new();
        out.try_reserve_exact(len)?;
        out.resize(len, 0);

        convolve::convolve_rows(frame.data(), width, height, &self.coefficients, 0, &mut out);
        Frame::from_rgba(out, frame.width(), frame.height())
    }
}
