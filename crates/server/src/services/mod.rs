pub mod admin;
pub mod client;
pub mod tutors;

pub use client::{ApiClient, Upstream};
