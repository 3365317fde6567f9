//! zkrollup Utilities.
//!
//! Logging and domain helpers shared by the zkrollup binaries.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![warn(missing_docs)]

mod domain;
mod logger;

pub use domain::*;
pub use logger::*;
