#![forbid(unsafe_code)]

mod bind;
mod error;
mod pattern;
mod router;

pub use crate::bind::{FieldParser, Kind, Record, Registry, Value};
pub use crate::error::RouteError;
pub use crate::pattern::{compile, Matcher};
pub use crate::router::Router;

#[cfg(feature = "hyper-service")]
pub mod hyper_service;
