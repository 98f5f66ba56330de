//! Screening workflows built on the scoring core: family enrolment,
//! school service stratification, intervention requests, and the yearly
//! penjaringan CSV import.

pub mod family;
pub mod intervention;
pub mod penjaringan;
pub mod school;
