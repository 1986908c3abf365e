pub mod frame_filter;
pub mod kernel;
