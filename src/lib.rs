//! Hotkey settings and desktop notifications for the Nyrna process suspender.
//!
//! - [`config::ConfigStore`] loads and persists `nyrna_config.json`
//! - [`notify::Notifier`] sends the suspended/resumed/issue toasts

#![deny(unsafe_code)]

pub mod common;
pub mod config;
pub mod constants;
pub mod notify;
