pub mod apply_kernel_use_case;
