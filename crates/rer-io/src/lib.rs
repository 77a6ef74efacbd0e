//! # rer-io: Dataset & Settings I/O
//!
//! File input/output for the renewable-electricity report tool.
//!
//! ## Design Philosophy
//!
//! **The model is the contract, not the encoding.** The dataset ships as an
//! attribute-bearing XML tree (the format the data is published in); the
//! settings record is a flat TOML table. Both sides parse into the
//! `rer-core` model types and nothing downstream cares about the encoding.
//!
//! **Soft failure at the boundary.** Loaders return typed errors
//! ([`rer_core::RerError`]); callers log the diagnostic and continue with an
//! empty dataset or default selection instead of terminating.
//!
//! ## Module Overview
//!
//! - [`dataset`] - read-only loader for the renewable-electricity XML file
//! - [`settings`] - load/save of the last-viewed-report selection

pub mod dataset;
pub mod settings;

pub use dataset::{load_dataset, DATASET_FILENAME};
pub use settings::{load_settings, save_settings, SETTINGS_FILENAME};
