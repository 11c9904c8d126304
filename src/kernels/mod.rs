//! This module contains the pure, stateless kernels that back the bridge's
//! byte transformer. Each kernel is panic-free and exposes a decoupled
//! `encode`/`decode` pair operating on raw byte slices.

pub mod passthrough;
pub mod zstd;
