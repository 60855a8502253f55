pub mod error;
pub mod feature_flags;
pub mod models;
pub mod navigation;
pub mod requests;
pub mod service_result;
pub mod shell;
pub mod tutor;

pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use navigation::{routes_for, routes_for_role, NavItem, RouteGroup};
pub use requests::*;
pub use service_result::*;
pub use shell::*;
pub use tutor::*;
