//! Core engine-independent types

pub mod config;
