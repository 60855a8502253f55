pub mod client;
pub mod cookies;
pub mod extractors;
pub mod middleware;
pub mod proxy;
pub mod session;
