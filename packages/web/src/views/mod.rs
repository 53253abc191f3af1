mod admin;
pub use admin::Admin;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod home;
pub use home::Home;
