//! Core library for strength-dict.
//!
//! Bundles the six password-strength dictionary assets (named numbers,
//! character sets, periods, the top-10 and top-10k password lists, and text
//! patterns) and exposes them as one immutable [`Dictionaries`] value.
//!
//! # Modules
//!
//! - [`dictionaries`] - Typed assets and the [`load_dictionaries`] aggregator
//! - [`source`] - Where raw asset text comes from ([`AssetSource`])
//! - [`assets`] - Build-time manifest of embedded assets
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use strength_dict_core::{Dictionaries, LogicalName};
//!
//! let dicts = Dictionaries::embedded().expect("embedded assets decode");
//! for (name, entries) in dicts.summary() {
//!     println!("{name}: {entries}");
//! }
//! assert_eq!(dicts.get(LogicalName::Top10).len(), 10);
//! ```
#![deny(unsafe_code)]

pub mod assets;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod source;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use dictionaries::{AssetRef, Dictionaries, LogicalName, load_dictionaries};
pub use error::{AssetError, AssetResult, ConfigError, ConfigResult};
pub use source::{AssetSource, DirectorySource, EmbeddedSource, OverlaySource};
