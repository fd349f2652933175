//! Integration Tests Module
//!
//! End-to-end runs of the segmentation pipeline over synthetic snapshots,
//! file inputs and rendered reports.

pub mod file_inputs;
