pub mod config;
pub mod dap;
pub mod log;
