//! Metrics API Service Library
//!
//! This crate provides the HTTP server exposing derived climate
//! metrics: the region catalog, per-region daily metric records, KPI
//! summaries, and an observation-submission endpoint that feeds the
//! derivation pipeline.

pub mod app;
pub mod config;
pub mod handlers;
pub mod state;
