//! Core library for the credit risk assessment console: the applicant form
//! model, the evaluation engine client, verdict rendering, and the shared
//! configuration and telemetry plumbing the web service builds on.

pub mod config;
pub mod error;
pub mod form;
pub mod pages;
pub mod risk;
pub mod seo;
pub mod session;
pub mod telemetry;

pub(crate) mod html;
