//! Default extension and name tables.
//!
//! These are the defaults behind every configurable list. The CLI exposes each
//! of them as a flag, so nothing here is load-bearing beyond "what happens when
//! the user says nothing".
//!
//! ## Source kinds
//!
//! - **Component**: single-file components (`.vue`); only the top-level
//!   `<template>` block is scanned
//! - **Stylesheet**: `.css`, `.scss`, `.sass`, `.less`; the whole file is scanned
//! - **Markup**: everything else configured as a source extension (`.html`)

/// Extensions of files scanned for asset references
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "vue",  // component
    "scss", // stylesheet
    "css",  // plain style
    "html", // markup
];

/// Extensions of image files tracked for usage
pub const ASSET_EXTENSIONS: &[&str] = &["jpg", "png", "svg"];

/// Directory names pruned from the walk at any depth
pub const EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// Basenames never reported or removed
pub const KEEP_BASENAMES: &[&str] = &["favicon.png", "favicon.svg"];

/// Extensions classified as single-file components
pub const COMPONENT_EXTENSIONS: &[&str] = &["vue"];

/// Extensions classified as stylesheets
pub const STYLESHEET_EXTENSIONS: &[&str] = &["css", "scss", "sass", "less"];
