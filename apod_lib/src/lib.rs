//! Library layer for the APOD browser: calendar helpers, search-form
//! validation, and a thin dispatching wrapper around the `apod_api` crate.
//!
//! Validation runs locally and synchronously; only a query that passes
//! every rule is ever handed to the network.

pub mod client;
pub mod dates;
pub mod error;
pub mod form;
pub mod validation;

pub use apod_api;
pub use apod_api::types;
pub use apod_api::{ApodQuery, Query};

pub use client::ApodClient;
pub use error::ApodError;
pub use form::{DateMode, SearchForm};
pub use validation::ValidationResult;
