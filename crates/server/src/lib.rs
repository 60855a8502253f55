#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod state;

pub mod api;

#[cfg(feature = "server")]
pub mod rest;

#[cfg(feature = "server")]
pub mod openapi;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod auth;

// Outbound calls to the backend API
#[cfg(feature = "server")]
pub mod services;
