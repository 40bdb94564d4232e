//! Country lookup server.
//!
//! A small web service that answers: "what is the capital, currency and
//! population of this country?" Answers come from the REST Countries API
//! and are cached in memory for the lifetime of the process.

pub mod cache;
pub mod config;
pub mod domain;
pub mod lookup;
pub mod restcountries;
pub mod web;
