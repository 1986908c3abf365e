use std::num::NonZeroUsize;
use std::thread;

use crate::filtering::domain::frame_filter::FrameFilter;
use crate::filtering::domain::kernel::Kernel3x3;
use crate::shared::error::FilterError;
use crate::shared::frame::{Frame, CHANNELS};

use super::convolve;

/// Row-parallel convolution backend.
///
/// The output buffer is split into contiguous row bands, one scoped thread
/// per band. Clamp-to-edge border handling makes every output row depend
/// only on the read-only input, so the bands need no synchronization and
/// the result is byte-identical to [`CpuConvolutionFilter`].
///
/// [`CpuConvolutionFilter`]: super::cpu_convolution_filter::CpuConvolutionFilter
pub struct ThreadedConvolutionFilter {
    coefficients: [f32; 9],
    threads: usize,
}

impl ThreadedConvolutionFilter {
    /// Uses one band per available CPU.
    pub fn new(kernel: Kernel3x3) -> Self {
        let threads = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self::with_threads(kernel, threads)
    }

    pub fn with_threads(kernel: Kernel3x3, threads: usize) -> Self {
        Self {
            coefficients: kernel.effective(),
            threads: threads.max(1),
        }
    }
}

impl FrameFilter for ThreadedConvolutionFilter {
    fn apply(&self, frame: &Frame) -> Result<Frame, FilterError> {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let row_bytes = width * CHANNELS;

        let len = frame.data().len();
        let mut out: Vec<u8> = Vec::new();
        out.try_reserve_exact(len)?;
        out.resize(len, 0);

        let bands = self.threads.min(height);
        let rows_per_band = height.div_ceil(bands);
        log::debug!(
            "convolving {width}x{height} frame across {bands} row bands of up to {rows_per_band} rows"
        );

        let src = frame.data();
        let coefficients = &self.coefficients;
        thread::scope(|scope| {
            for (band, chunk) in out.chunks_mut(rows_per_band * row_bytes).enumerate() {
                let y_start = band * rows_per_band;
                scope.spawn(move || {
                    convolve::convolve_rows(src, width, height, coefficients, y_start, chunk);
                });
            }
        });

        Frame::from_rgba(out, frame.width(), frame.height())
    }
}
