pub mod config;
pub mod format;
pub mod models;
pub mod script;
pub mod state;
pub mod validation;

pub use config::{AppConfig, ConfigError, Environment};
pub use models::{
    AdminUser, BackupFile, MantraElement, Meditation, QueueRecord, QueueStatus, SoundFile, User,
    Visibility,
};
pub use script::{
    CreateMantraRequest, DraftErrors, MeditationDraft, MoveDirection, RowField, RowKind,
    ScriptBuilder, ScriptRow,
};
pub use state::{AuthState, MeditationPatch, MeditationState, PendingFavorite, UiState};
pub use validation::{Validation, ValidationError};
