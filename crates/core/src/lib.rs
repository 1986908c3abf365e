//! Core library for applying 3x3 convolution kernels to RGBA images.
//!
//! The engine is a pure transform: it reads an input [`shared::frame::Frame`],
//! allocates one output buffer, and returns the filtered frame. Format
//! conversion and user interaction happen upstream.

pub mod filtering;
pub mod pipeline;
pub mod shared;
