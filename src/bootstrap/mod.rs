//! Application bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently. The HTTP API server runs as an
//! independent job.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
