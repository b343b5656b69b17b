pub mod auth;
pub mod layout;
pub mod navbar;

pub use auth::{Protected, RequireAcl};
pub use layout::Layout;
pub use navbar::NavBar;
