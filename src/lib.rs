//! Jobfit: Employee Attrition Prediction Library
//!
//! Trains a random forest classifier on a historical attrition dataset
//! and scores employee tables, appending prediction columns.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
