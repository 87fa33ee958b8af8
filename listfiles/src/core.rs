// src/core.rs
pub mod collector;
pub mod config;
pub mod copier;
pub mod export;
pub mod filter;
pub mod pipeline;
