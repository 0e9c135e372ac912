mod log_handle;

pub use log_handle::LogHandle;
