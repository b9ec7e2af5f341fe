#![doc = "The `todovault` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, in-memory stores, authentication"]
#![doc = "mechanisms, routing configuration, and error handling for the todovault"]
#![doc = "service. It is used by the main binary (`main.rs`) to construct and run"]
#![doc = "the application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
