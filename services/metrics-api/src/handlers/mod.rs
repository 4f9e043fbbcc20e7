//! HTTP request handlers for the metrics API.

pub mod common;
pub mod health;
pub mod kpi;
pub mod metrics;
pub mod observations;
pub mod regions;
