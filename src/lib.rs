#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Student registration form with a validity gate and an asynchronous
//! passport photo preview.

pub mod logging;
pub mod model;
pub mod photo;
pub mod submit;
pub mod tui;
