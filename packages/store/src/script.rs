//! # Meditation script builder
//!
//! The create form composes a meditation as an ordered list of rows, each a
//! spoken [`RowKind::Text`], a [`RowKind::Pause`] or a [`RowKind::Sound`].
//! [`ScriptBuilder`] owns those rows and their per-field errors.
//!
//! Row ids are always the 1-based position of the row. Errors are keyed by
//! id, so every structural change (delete, move) renumbers the rows and
//! discards pending errors.
//!
//! [`MeditationDraft`] wraps the builder together with title, description
//! and visibility and turns the whole form into a [`CreateMantraRequest`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{MantraElement, Visibility};
use crate::validation::{
    validate_description, validate_meditation_title, validate_pause_duration, validate_speed,
    ValidationError,
};

/// What a script row produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowKind {
    #[default]
    Text,
    Pause,
    Sound,
}

impl RowKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RowKind::Text => "text",
            RowKind::Pause => "pause",
            RowKind::Sound => "sound",
        }
    }

    pub fn from_form_value(value: &str) -> Self {
        match value {
            "pause" => RowKind::Pause,
            "sound" => RowKind::Sound,
            _ => RowKind::Text,
        }
    }
}

/// An editable field of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RowField {
    Text,
    Speed,
    PauseDuration,
    SoundFile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// A row as typed into the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptRow {
    pub id: u32,
    pub kind: RowKind,
    pub text: String,
    pub speed: String,
    pub pause_duration: String,
    pub sound_file: String,
}

impl ScriptRow {
    fn empty(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn field(&self, field: RowField) -> &str {
        match field {
            RowField::Text => &self.text,
            RowField::Speed => &self.speed,
            RowField::PauseDuration => &self.pause_duration,
            RowField::SoundFile => &self.sound_file,
        }
    }

    fn field_mut(&mut self, field: RowField) -> &mut String {
        match field {
            RowField::Text => &mut self.text,
            RowField::Speed => &mut self.speed,
            RowField::PauseDuration => &mut self.pause_duration,
            RowField::SoundFile => &mut self.sound_file,
        }
    }

    /// Field errors for this row; empty when the row is valid.
    pub fn validate(&self) -> RowErrors {
        let mut errors = RowErrors::new();
        match self.kind {
            RowKind::Text => {
                if self.text.trim().is_empty() {
                    errors.insert(RowField::Text, ValidationError::TextRequired);
                }
                if !self.speed.trim().is_empty() {
                    if let Err(e) = validate_speed(&self.speed) {
                        errors.insert(RowField::Speed, e);
                    }
                }
            }
            RowKind::Pause => {
                if let Err(e) = validate_pause_duration(&self.pause_duration) {
                    errors.insert(RowField::PauseDuration, e);
                }
            }
            RowKind::Sound => {
                if self.sound_file.is_empty() {
                    errors.insert(RowField::SoundFile, ValidationError::SoundFileRequired);
                }
            }
        }
        errors
    }

    /// Wire form of this row.
    pub fn to_element(&self) -> MantraElement {
        match self.kind {
            RowKind::Text => {
                let speed = self.speed.trim();
                MantraElement {
                    id: self.id,
                    text: Some(self.text.trim().to_string()),
                    speed: (!speed.is_empty()).then(|| speed.to_string()),
                    ..Default::default()
                }
            }
            RowKind::Pause => MantraElement {
                id: self.id,
                pause_duration: Some(self.pause_duration.trim().to_string()),
                ..Default::default()
            },
            RowKind::Sound => MantraElement {
                id: self.id,
                sound_file: Some(self.sound_file.clone()),
                ..Default::default()
            },
        }
    }
}

pub type RowErrors = BTreeMap<RowField, ValidationError>;

/// Ordered, editable list of script rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptBuilder {
    rows: Vec<ScriptRow>,
    errors: BTreeMap<u32, RowErrors>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[ScriptRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, id: u32) -> Option<&ScriptRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn error(&self, id: u32, field: RowField) -> Option<&ValidationError> {
        self.errors.get(&id).and_then(|e| e.get(&field))
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|e| !e.is_empty())
    }

    /// Append an empty text row; returns its id.
    pub fn add_row(&mut self) -> u32 {
        let id = self.rows.len() as u32 + 1;
        self.rows.push(ScriptRow::empty(id));
        id
    }

    pub fn delete_row(&mut self, id: u32) {
        self.rows.retain(|r| r.id != id);
        self.renumber();
        self.errors.clear();
    }

    pub fn move_row(&mut self, id: u32, direction: MoveDirection) {
        let Some(index) = self.rows.iter().position(|r| r.id == id) else {
            return;
        };
        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.rows.len() => index + 1,
            _ => return,
        };
        let row = self.rows.remove(index);
        self.rows.insert(target, row);
        self.renumber();
        self.errors.clear();
    }

    /// Edit one field, clearing any error recorded against it.
    pub fn update_row(&mut self, id: u32, field: RowField, value: String) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            *row.field_mut(field) = value;
        }
        if let Some(errors) = self.errors.get_mut(&id) {
            errors.remove(&field);
        }
    }

    /// Switch a row's kind. All of its fields and errors are reset.
    pub fn set_kind(&mut self, id: u32, kind: RowKind) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            *row = ScriptRow { id, kind, ..Default::default() };
        }
        self.errors.insert(id, RowErrors::new());
    }

    /// Re-run every row check; returns true when all rows are valid.
    pub fn validate(&mut self) -> bool {
        self.errors = self
            .rows
            .iter()
            .map(|r| (r.id, r.validate()))
            .filter(|(_, e)| !e.is_empty())
            .collect();
        self.errors.is_empty()
    }

    pub fn to_elements(&self) -> Vec<MantraElement> {
        self.rows.iter().map(ScriptRow::to_element).collect()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.errors.clear();
    }

    fn renumber(&mut self) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.id = index as u32 + 1;
        }
    }
}

/// Body of `POST /mantras/create`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMantraRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub visibility: Visibility,
    pub mantra_array: Vec<MantraElement>,
}

/// Errors on the draft's own fields (rows keep theirs in the builder).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftErrors {
    pub title: Option<ValidationError>,
    pub description: Option<ValidationError>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// The whole create-meditation form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeditationDraft {
    pub title: String,
    pub description: String,
    pub visibility: Visibility,
    pub script: ScriptBuilder,
    pub errors: DraftErrors,
}

impl MeditationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the first row when the form is opened empty.
    pub fn open(&mut self) {
        if self.script.is_empty() {
            self.script.add_row();
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.script.is_empty()
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.errors.title = None;
    }

    /// Description is checked as the user types.
    pub fn set_description(&mut self, description: String) {
        self.errors.description = validate_description(&description).err();
        self.description = description;
    }

    /// Title check run when the field loses focus.
    pub fn check_title(&mut self) {
        if let Err(e) = validate_meditation_title(&self.title) {
            self.errors.title = Some(e);
        }
    }

    /// Validate every field and row. On success returns the request body.
    pub fn submit(&mut self) -> Option<CreateMantraRequest> {
        self.errors = DraftErrors {
            title: validate_meditation_title(&self.title).err(),
            description: validate_description(&self.description).err(),
        };
        let rows_ok = self.script.validate();
        if !self.errors.is_empty() || !rows_ok || !self.can_submit() {
            return None;
        }
        let description = self.description.trim();
        Some(CreateMantraRequest {
            title: self.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            visibility: self.visibility,
            mantra_array: self.script.to_elements(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn builder_with(n: usize) -> ScriptBuilder {
        let mut builder = ScriptBuilder::new();
        for i in 0..n {
            let id = builder.add_row();
            builder.update_row(id, RowField::Text, format!("line {i}"));
        }
        builder
    }

    fn texts(builder: &ScriptBuilder) -> Vec<String> {
        builder.rows().iter().map(|r| r.text.clone()).collect()
    }

    #[test]
    fn test_add_row_appends_text_row() {
        let mut builder = ScriptBuilder::new();
        assert_eq!(builder.add_row(), 1);
        assert_eq!(builder.add_row(), 2);
        assert_eq!(builder.rows()[1].kind, RowKind::Text);
        assert!(builder.rows()[1].text.is_empty());
    }

    #[test]
    fn test_delete_row_renumbers() {
        let mut builder = builder_with(3);
        builder.delete_row(2);
        let ids: Vec<u32> = builder.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(texts(&builder), vec!["line 0", "line 2"]);
    }

    #[test]
    fn test_move_row_swaps_and_ignores_edges() {
        let mut builder = builder_with(3);
        builder.move_row(3, MoveDirection::Up);
        assert_eq!(texts(&builder), vec!["line 0", "line 2", "line 1"]);

        let before = builder.clone();
        builder.move_row(1, MoveDirection::Up);
        builder.move_row(3, MoveDirection::Down);
        builder.move_row(42, MoveDirection::Down);
        assert_eq!(builder, before);
    }

    #[test]
    fn test_structural_changes_clear_errors() {
        let mut builder = builder_with(2);
        builder.update_row(1, RowField::Text, "  ".to_string());
        assert!(!builder.validate());
        assert!(builder.error(1, RowField::Text).is_some());
        builder.move_row(1, MoveDirection::Down);
        assert!(!builder.has_errors());
    }

    #[test]
    fn test_update_row_clears_field_error() {
        let mut builder = ScriptBuilder::new();
        builder.add_row();
        builder.validate();
        assert_eq!(
            builder.error(1, RowField::Text),
            Some(&ValidationError::TextRequired)
        );
        builder.update_row(1, RowField::Text, "Breathe in".to_string());
        assert!(builder.error(1, RowField::Text).is_none());
    }

    #[test]
    fn test_set_kind_blanks_fields() {
        let mut builder = builder_with(1);
        builder.update_row(1, RowField::Speed, "1.1".to_string());
        builder.set_kind(1, RowKind::Pause);
        let row = builder.row(1).unwrap();
        assert_eq!(row.kind, RowKind::Pause);
        assert!(row.text.is_empty());
        assert!(row.speed.is_empty());
    }

    #[test]
    fn test_row_validation_per_kind() {
        let mut builder = ScriptBuilder::new();
        builder.add_row();
        builder.update_row(1, RowField::Text, "Hello".to_string());
        builder.update_row(1, RowField::Speed, "2".to_string());
        builder.add_row();
        builder.set_kind(2, RowKind::Pause);
        builder.update_row(2, RowField::PauseDuration, "0".to_string());
        builder.add_row();
        builder.set_kind(3, RowKind::Sound);

        assert!(!builder.validate());
        assert_eq!(
            builder.error(1, RowField::Speed),
            Some(&ValidationError::SpeedOutOfRange)
        );
        assert!(builder.error(1, RowField::Text).is_none());
        assert_eq!(
            builder.error(2, RowField::PauseDuration),
            Some(&ValidationError::DurationNotPositive)
        );
        assert_eq!(
            builder.error(3, RowField::SoundFile),
            Some(&ValidationError::SoundFileRequired)
        );
    }

    #[test]
    fn test_to_elements_shapes_each_kind() {
        let mut builder = ScriptBuilder::new();
        builder.add_row();
        builder.update_row(1, RowField::Text, "  Let go  ".to_string());
        builder.update_row(1, RowField::Speed, " ".to_string());
        builder.add_row();
        builder.set_kind(2, RowKind::Pause);
        builder.update_row(2, RowField::PauseDuration, " 5 ".to_string());
        builder.add_row();
        builder.set_kind(3, RowKind::Sound);
        builder.update_row(3, RowField::SoundFile, "rain.mp3".to_string());

        let elements = builder.to_elements();
        assert_eq!(elements[0].text.as_deref(), Some("Let go"));
        assert_eq!(elements[0].speed, None);
        assert_eq!(elements[1].pause_duration.as_deref(), Some("5"));
        assert_eq!(elements[2].sound_file.as_deref(), Some("rain.mp3"));
        assert_eq!(elements[2].id, 3);
    }

    #[test]
    fn test_draft_submit_builds_request() {
        let mut draft = MeditationDraft::new();
        draft.open();
        draft.set_title("  Evening clarity ".to_string());
        draft.set_description("   ".to_string());
        draft.visibility = Visibility::Private;
        draft.script.update_row(1, RowField::Text, "Breathe".to_string());

        let request = draft.submit().expect("valid draft");
        assert_eq!(request.title, "Evening clarity");
        assert_eq!(request.description, None);
        assert_eq!(request.visibility, Visibility::Private);
        assert_eq!(request.mantra_array.len(), 1);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["visibility"], "private");
        assert!(json.get("mantraArray").is_some());
    }

    #[test]
    fn test_draft_submit_collects_errors() {
        let mut draft = MeditationDraft::new();
        draft.open();
        draft.set_description("x".repeat(301));
        assert!(draft.errors.description.is_some());
        assert!(draft.submit().is_none());
        assert_eq!(draft.errors.title, Some(ValidationError::TitleRequired));
        assert!(draft.script.error(1, RowField::Text).is_some());
    }

    #[test]
    fn test_draft_without_rows_cannot_submit() {
        let mut draft = MeditationDraft::new();
        draft.set_title("Quiet".to_string());
        assert!(!draft.can_submit());
        assert!(draft.submit().is_none());
    }

    #[test]
    fn test_draft_reset() {
        let mut draft = MeditationDraft::new();
        draft.open();
        draft.set_title("Something".to_string());
        draft.reset();
        assert_eq!(draft, MeditationDraft::default());
    }

    proptest! {
        #[test]
        fn prop_ids_stay_sequential(n in 1usize..8, ops in prop::collection::vec((0u32..10, 0u8..3), 0..20)) {
            let mut builder = builder_with(n);
            for (id, op) in ops {
                match op {
                    0 => builder.delete_row(id),
                    1 => builder.move_row(id, MoveDirection::Up),
                    _ => builder.move_row(id, MoveDirection::Down),
                }
                let ids: Vec<u32> = builder.rows().iter().map(|r| r.id).collect();
                let expected: Vec<u32> = (1..=builder.len() as u32).collect();
                prop_assert_eq!(ids, expected);
            }
        }

        #[test]
        fn prop_moves_are_permutations(n in 1usize..8, moves in prop::collection::vec((1u32..9, any::<bool>()), 0..20)) {
            let mut builder = builder_with(n);
            let mut original = texts(&builder);
            for (id, up) in moves {
                let direction = if up { MoveDirection::Up } else { MoveDirection::Down };
                builder.move_row(id, direction);
            }
            let mut after = texts(&builder);
            original.sort();
            after.sort();
            prop_assert_eq!(original, after);
        }
    }
}
