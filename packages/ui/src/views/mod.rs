mod admin;
pub use admin::AdminView;

mod forgot_password;
pub use forgot_password::ForgotPasswordView;

mod home;
pub use home::HomeView;
