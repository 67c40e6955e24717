#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! searchapi-core
//!
//! Serde records mirroring the JSON payloads of the search API, plus a
//! registry (`shape`) that names every record and can check a document
//! against one of them.

pub mod config;
pub mod error;
pub mod shape;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use shape::Shape;
