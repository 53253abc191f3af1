//! # Application state slices
//!
//! Three containers hold everything the UI shares across components:
//!
//! | Slice | Holds |
//! |-------|-------|
//! | [`AuthState`] | The signed-in [`User`] and the bearer token for API calls. |
//! | [`MeditationState`] | The meditation library with its loading/error status. |
//! | [`UiState`] | The global blocking loader used by long admin operations. |
//!
//! Each slice is a plain struct with reducer-style methods. The `ui` crate
//! stores them in signals, so every mutation goes through these methods and
//! components re-render on change.

use serde::{Deserialize, Serialize};

use crate::models::{Meditation, User, Visibility};
use crate::script::DraftErrors;
use crate::validation::{validate_description, validate_meditation_title};

/// Session state. Serialisable so it can be persisted between page loads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn login(&mut self, user: User, access_token: String) {
        self.user = Some(user);
        self.access_token = Some(access_token);
        self.is_authenticated = true;
    }

    pub fn logout(&mut self) {
        *self = Self::default();
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated && self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn user_id(&self) -> Option<u64> {
        self.user.as_ref().map(|u| u.id)
    }

    /// Whether a guarded page may render. Admin pages also need an admin.
    pub fn may_access(&self, require_admin: bool) -> bool {
        self.is_authenticated && self.user.is_some() && (!require_admin || self.is_admin())
    }

    /// Admins may delete any account except their own.
    pub fn can_delete_user(&self, user_id: u64) -> bool {
        self.is_admin() && self.user_id() != Some(user_id)
    }

    /// Token to send, only while authenticated.
    pub fn bearer_token(&self) -> Option<&str> {
        if self.is_authenticated {
            self.access_token.as_deref()
        } else {
            None
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restore a persisted session. A session without a token is discarded.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        let state: Self = serde_json::from_str(s)?;
        if state.is_authenticated && state.access_token.is_none() {
            return Ok(Self::default());
        }
        Ok(state)
    }
}

/// Partial update of a meditation; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeditationPatch {
    #[serde(skip)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl MeditationPatch {
    /// Validate an owner's edit and build the patch to send. A blank
    /// description is left untouched.
    pub fn from_edit(
        id: u64,
        title: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<Self, DraftErrors> {
        let errors = DraftErrors {
            title: validate_meditation_title(title).err(),
            description: validate_description(description).err(),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        let description = description.trim();
        Ok(Self {
            id,
            title: Some(title.trim().to_string()),
            description: (!description.is_empty()).then(|| description.to_string()),
            visibility: Some(visibility),
        })
    }
}

/// A favorite flag applied before the server confirmed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingFavorite {
    pub id: u64,
    pub previous: bool,
    pub next: bool,
}

/// The meditation library.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeditationState {
    pub meditations: Vec<Meditation>,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped by every [`MeditationState::begin_fetch`].
    generation: u64,
}

impl MeditationState {
    pub fn set_meditations(&mut self, meditations: Vec<Meditation>) {
        self.meditations = meditations;
        self.loading = false;
        self.error = None;
    }

    pub fn add_meditation(&mut self, meditation: Meditation) {
        self.meditations.insert(0, meditation);
    }

    pub fn delete_meditation(&mut self, id: u64) {
        self.meditations.retain(|m| m.id != id);
    }

    pub fn update_meditation(&mut self, patch: MeditationPatch) {
        let Some(meditation) = self.meditations.iter_mut().find(|m| m.id == patch.id) else {
            return;
        };
        if let Some(title) = patch.title {
            meditation.title = title;
        }
        if let Some(description) = patch.description {
            meditation.description = Some(description);
        }
        if let Some(visibility) = patch.visibility {
            meditation.visibility = visibility.as_str().to_string();
        }
    }

    pub fn toggle_favorite(&mut self, id: u64, is_favorite: bool) {
        if let Some(meditation) = self.meditations.iter_mut().find(|m| m.id == id) {
            meditation.is_favorite = Some(is_favorite);
        }
    }

    /// Flip the favorite flag of `id` ahead of the request. The returned
    /// value undoes it through [`MeditationState::rollback_favorite`].
    pub fn begin_favorite_toggle(&mut self, id: u64) -> Option<PendingFavorite> {
        let meditation = self.meditations.iter_mut().find(|m| m.id == id)?;
        let previous = meditation.is_favorite();
        meditation.is_favorite = Some(!previous);
        Some(PendingFavorite {
            id,
            previous,
            next: !previous,
        })
    }

    /// Undo a failed toggle, unless the flag has changed again since.
    pub fn rollback_favorite(&mut self, pending: PendingFavorite) {
        if let Some(meditation) = self.meditations.iter_mut().find(|m| m.id == pending.id) {
            if meditation.is_favorite() == pending.next {
                meditation.is_favorite = Some(pending.previous);
            }
        }
    }

    /// Mark a library load as started. Only the latest load may land.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.error = None;
        self.loading = true;
        self.generation
    }

    /// Apply the outcome of load `generation`. Returns false, changing
    /// nothing, when a newer load has started since.
    pub fn finish_fetch(&mut self, generation: u64, result: Result<Vec<Meditation>, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        match result {
            Ok(meditations) => self.set_meditations(meditations),
            Err(message) => self.set_error(Some(message)),
        }
        true
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
        self.loading = false;
    }

    /// Rows the library table shows: public meditations, plus the viewer's
    /// own when signed in.
    pub fn visible_rows(&self, is_authenticated: bool) -> Vec<&Meditation> {
        self.meditations
            .iter()
            .filter(|m| m.is_public() || (is_authenticated && m.is_owned()))
            .collect()
    }
}

/// Global UI chrome state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub loading: bool,
    pub loading_message: Option<String>,
}

impl UiState {
    pub fn show_loading(&mut self, message: impl Into<String>) {
        self.loading = true;
        self.loading_message = Some(message.into());
    }

    pub fn hide_loading(&mut self) {
        self.loading = false;
        self.loading_message = None;
    }
}
