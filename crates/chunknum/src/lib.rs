//! ChunkNum-rs library — application logic for the `chunknum` command.

pub mod app;
pub mod completion;
pub mod config;
pub mod errors;
pub mod output;
