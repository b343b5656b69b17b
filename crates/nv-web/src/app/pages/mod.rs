pub mod appointments;
pub mod login;
pub mod logout;
pub mod messages;
pub mod properties;
pub mod property_detail;
pub mod unauthorized;

pub use appointments::AppointmentsPage;
pub use login::LoginPage;
pub use logout::LogoutPage;
pub use messages::MessagesPage;
pub use properties::PropertiesPage;
pub use property_detail::PropertyDetailPage;
pub use unauthorized::UnauthorizedPage;
