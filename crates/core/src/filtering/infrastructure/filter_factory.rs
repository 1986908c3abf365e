use crate::filtering::domain::frame_filter::FrameFilter;
use crate::filtering::domain::kernel::Kernel3x3;

use super::cpu_convolution_filter::CpuConvolutionFilter;
use super::threaded_convolution_filter::ThreadedConvolutionFilter;

/// Execution backend preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionMode {
    SingleThreaded,
    /// Row-parallel; `threads: 0` means one band per available CPU.
    Threaded { threads: usize },
}

/// Creates a convolution filter for the requested execution mode.
///
/// Both backends produce byte-identical output; the threaded one only
/// changes how the rows are partitioned across CPUs.
pub fn create_filter(kernel: Kernel3x3, mode: ExecutionMode) -> Box<dyn FrameFilter> {
    match mode {
        ExecutionMode::SingleThreaded => {
            log::info!("using single-threaded convolution backend");
            Box::new(CpuConvolutionFilter::new(kernel))
        }
        ExecutionMode::Threaded { threads: 0 } => {
            log::info!("using row-parallel convolution backend (auto thread count)");
            Box::new(ThreadedConvolutionFilter::new(kernel))
        }
        ExecutionMode::Threaded { threads } => {
            log::info!("using row-parallel convolution backend ({threads} threads)");
            Box::new(ThreadedConvolutionFilter::with_threads(kernel, threads))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::frame::Frame;

    fn make_frame(width: u32, height: u32, value: u8) -> Frame {
        Frame::from_rgba(vec![value; (width * height * 4) as usize], width, height).unwrap()
    }

    #[test]
    fn test_create_single_threaded_filter_works() {
        let filter = create_filter(Kernel3x3::box_blur(), ExecutionMode::SingleThreaded);
        let frame = make_frame(8, 8, 128);
        let out = filter.apply(&frame).unwrap();
        assert_eq!(out.width(), 8);
    }

    #[test]
    fn test_create_threaded_filter_works() {
        let filter = create_filter(Kernel3x3::box_blur(), ExecutionMode::Threaded { threads: 4 });
        let frame = make_frame(8, 8, 128);
        let out = filter.apply(&frame).unwrap();
        assert_eq!(out.height(), 8);
    }

    #[test]
    fn test_backends_agree() {
        let mut frame = make_frame(12, 12, 0);
        frame.data_mut()[300] = 255;
        let single = create_filter(Kernel3x3::emboss(), ExecutionMode::SingleThreaded)
            .apply(&frame)
            .unwrap();
        let threaded = create_filter(Kernel3x3::emboss(), ExecutionMode::Threaded { threads: 0 })
            .apply(&frame)
            .unwrap();
        assert_eq!(single, threaded);
    }
}
