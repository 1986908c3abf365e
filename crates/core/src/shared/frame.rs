use ndarray::{ArrayView3, ArrayViewMut3};

use crate::shared::error::FilterError;

/// Number of samples per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A single raster image: contiguous RGBA bytes in row-major order,
/// no padding between rows.
///
/// The length invariant (`width * height * 4`) is checked at construction;
/// a violated invariant is a fatal input error, never silently corrected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self, FilterError> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidDimensions { width, height });
        }
        let expected = (width as usize) * (height as usize) * CHANNELS;
        if data.len() != expected {
            return Err(FilterError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }
}
