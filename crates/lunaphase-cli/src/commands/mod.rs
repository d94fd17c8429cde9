pub mod args;
pub mod calibrate;
pub mod config;
pub mod export;
pub mod info;
pub mod measure;
pub mod survey;
