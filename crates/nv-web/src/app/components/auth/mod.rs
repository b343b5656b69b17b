// Authentication components

pub mod protected;
pub mod require_acl;

pub use protected::Protected;
pub use require_acl::RequireAcl;
