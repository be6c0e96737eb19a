//! Build a Dash/Zeal docset from a local copy of the WeChat mini-program
//! documentation.
//!
//! The build is a fixed pipeline, see [`docset::build`]:
//!
//! 1. [`stage`] recreates `<name>.docset` and copies the `dev` tree into it.
//! 2. [`db`] creates `docSet.dsidx` and fills it with the sections that
//!    [`nav`] extracts from a handful of entry pages.
//! 3. [`info`] writes `info.plist` and copies the icon.

pub mod config;
pub mod db;
pub mod docset;
pub mod error;
pub mod info;
pub mod models;
pub mod nav;
pub mod stage;

pub use config::DocsetConfig;
pub use error::{Error, Result};
