//! # headerfmt
//!
//! A tool that normalizes two conventions in C/C++/C# source trees by
//! rewriting files in place:
//!
//! * every source file starts with a standardized header comment block
//!   (file name, author, year, copyright notice);
//! * `.h` files use `#pragma once` instead of the classic
//!   `#ifndef`/`#define`/`#endif` include guard.
//!
//! `headerfmt` is a one-shot batch tool: it scans a tree once, sequentially,
//! and leaves files that already follow both conventions byte-for-byte
//! untouched.
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use headerfmt::config::ScanConfig;
//! use headerfmt::identity::FixedIdentity;
//! use headerfmt::processor::Processor;
//!
//! fn main() -> anyhow::Result<()> {
//!     let processor = Processor::new(
//!         ScanConfig::default(),
//!         Box::new(FixedIdentity("Jane Doe".to_string())),
//!         "2026".to_string(),
//!     );
//!
//!     let summary = processor.process(Path::new("src"))?;
//!     println!("rewrote {} of {} files", summary.files_rewritten, summary.files_scanned);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Core pipeline: tree walker, line buffer I/O, and the two normalizers
//! * [`config`] - Fixed exclusion sets applied during traversal
//! * [`identity`] - User display name lookup behind an injectable trait
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`config`]: crate::config
//! [`identity`]: crate::identity
//! [`logging`]: crate::logging

// Re-export modules for public API
pub mod config;
pub mod identity;
pub mod logging;
pub mod processor;
