//! Workspace-level integration tests for ChunkNum-rs.
//!
//! The tests live under `tests/`; this crate exposes no API of its own.
