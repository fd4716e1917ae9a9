//! HTTP access to the HookTheory API and its public song pages.
//!
//! All state lives in [`ClientConfig`] and the client value itself;
//! nothing here reads environment variables or process globals.

pub mod client;
pub mod config;
pub mod error;
pub mod id;

pub use client::{HookTheoryClient, TrendSong};
pub use config::ClientConfig;
pub use error::ClientError;
pub use id::pseudo_song_id;
