//! # logoconvert
//!
//! A small library for converting a single `icon.jpeg` into the fixed set of
//! PNG assets an Expo mobile app expects: `icon.png`, `splash-icon.png` and
//! `adaptive-icon.png` at 1024x1024, and `favicon.png` at 96x96.
//!
//! Outputs are always plain RGB. Any alpha channel in the input is discarded,
//! so the generated splash/adaptive icons are fully opaque; edit them by hand
//! afterwards if they need transparency.
//!
//! ## Example
//!
//! ```no_run
//! use logoconvert::{Config, Converter};
//!
//! # fn main() -> logoconvert::Result<()> {
//! let config = Config::new("mobile-app/assets");
//! Converter::new(config).run()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{Config, Converter};
