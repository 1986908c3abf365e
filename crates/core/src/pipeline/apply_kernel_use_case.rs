use serde::{Deserialize, Serialize};

use crate::filtering::domain::kernel::Kernel3x3;
use crate::filtering::infrastructure::filter_factory::{create_filter, ExecutionMode};
use crate::shared::error::FilterError;
use crate::shared::frame::Frame;

fn default_multiplier() -> f32 {
    1.0
}

/// Kernel-filter request as sent by the upstream form: nine row-major
/// kernel values, a scalar multiplier, and a decoded RGBA image.
///
/// `multiplier` defaults to 1.0 so a payload carrying a pre-scaled kernel
/// (the original wire shape) deserializes unchanged.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FilterRequest {
    pub kernel: [f32; 9],
    #[serde(default = "default_multiplier")]
    pub multiplier: f32,
    pub width: u32,
    pub height: u32,
    pub image: Vec<u8>,
}

/// Filtered image returned to the caller, same dimensions as the input.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilteredImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Single-image filtering pipeline: validate → convolve → respond.
///
/// Validation happens before any pixel work; on error no partial output is
/// ever produced. The call is atomic from the caller's point of view.
pub struct ApplyKernelUseCase {
    mode: ExecutionMode,
}

impl ApplyKernelUseCase {
    pub fn new(mode: ExecutionMode) -> Self {
        Self { mode }
    }

    pub fn execute(&self, request: FilterRequest) -> Result<FilteredImage, FilterError> {
        let kernel = Kernel3x3::new(request.kernel, request.multiplier)?;
        let frame = Frame::from_rgba(request.image, request.width, request.height)?;
        log::debug!(
            "filtering {}x{} request (multiplier {})",
            request.width,
            request.height,
            request.multiplier
        );

        let filtered = create_filter(kernel, self.mode).apply(&frame)?;
        Ok(FilteredImage {
            width: filtered.width(),
            height: filtered.height(),
            data: filtered.into_raw(),
        })
    }
}
