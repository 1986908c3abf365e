mod convolve;
pub mod cpu_convolution_filter;
pub mod filter_factory;
pub mod threaded_convolution_filter;
