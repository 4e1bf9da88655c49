//! vue-localize - turn hard-coded Vue template text into i18n lookups
//!
//! Scans Vue single-file components, finds literal text inside `<template>`,
//! replaces it in place with `{{ $t('key') }}` and merges the generated keys
//! into a JSON locale file without touching values that already exist.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Localization engine (span location, keys, rewriting, catalog)
//! - `error`: Typed failures of the engine
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
