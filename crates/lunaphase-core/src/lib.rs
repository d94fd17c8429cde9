pub mod batch;
pub mod cache;
pub mod config;
pub mod consts;
pub mod error;
pub mod frame;
pub mod io;
pub mod measure;
pub mod progress;
pub mod session;
