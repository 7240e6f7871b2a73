//! lproj-parity - key parity checker for `.lproj` localization files
//!
//! Checks that every `<lang>.lproj/<resource>.strings` file declares exactly
//! the keys of the base language's file, with no key declared twice.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, output, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key extraction and parity checking

pub mod cli;
pub mod config;
pub mod core;
