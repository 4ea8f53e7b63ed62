//! Manage zsh aliases and functions kept in a single dotfile.
//!
//! [`dotfile`] converts between the file text and [`AliasRecord`]s,
//! [`store::AliasStore`] owns the records between a load and a save, and
//! [`integration`] hooks the dotfile into the shell's startup script.

pub mod config;
pub mod dotfile;
pub mod integration;
pub mod record;
pub mod store;

pub use config::Config;
pub use integration::Integration;
pub use record::{AliasRecord, Kind};
pub use store::AliasStore;
