//! Scoring and stratification core for school health (UKS) screening
//! programs: anthropometric classification, behaviour and wage scoring,
//! service stratification, and the surrounding screening workflows.

pub mod config;
pub mod directory;
pub mod error;
pub mod scoring;
pub mod telemetry;
pub mod workflows;
