//! Dialogs. Each is rendered only while open, so its local state starts
//! fresh every time it is shown.

mod confirm_delete;
mod confirm_delete_user;
mod login;
mod meditation_details;
mod register;
mod upload_sound_file;

pub use confirm_delete::ModalConfirmDelete;
pub use confirm_delete_user::ModalConfirmDeleteUser;
pub use login::ModalLogin;
pub use meditation_details::ModalMeditationDetails;
pub use register::ModalRegister;
pub use upload_sound_file::ModalUploadSoundFile;
