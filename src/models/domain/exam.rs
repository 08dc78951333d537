use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Per-exam settings, stored as a JSON blob. Only `allow_retakes` is
/// interpreted by the submission flow; timer and navigation fields pass
/// through untouched for the client to render.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ExamSettings {
    #[serde(default)]
    pub allow_retakes: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Exam {
    pub id: i64,
    /// Capability token: unguessable, shareable, the only public handle.
    pub link_id: String,
    pub title: String,
    pub teacher_id: i64,
    pub settings: ExamSettings,
    pub is_active: bool,
}

impl Exam {
    pub fn new(title: &str, teacher_id: i64, settings: ExamSettings) -> Self {
        Exam {
            id: 0,
            link_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            teacher_id,
            settings,
            is_active: true,
        }
    }
}
