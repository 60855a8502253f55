// Standalone components
pub mod alert;
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod stat_card;
pub mod textarea;

// Primitive wrappers
pub mod toast;

// Depends on avatar
pub mod nav_sidebar;

pub use alert::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use nav_sidebar::*;
pub use page_header::*;
pub use skeleton::*;
pub use stat_card::*;
pub use textarea::*;
pub use toast::*;
