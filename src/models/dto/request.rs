use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    #[validate(length(min = 1, max = 256))]
    pub password: String,
}

/// Profile fields accompanying every submission. They are trusted as-is:
/// there is no login binding a person to a school_id, so the latest
/// submission always wins.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StudentProfileInput {
    #[validate(length(min = 1, max = 64))]
    pub school_id: String,

    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(length(max = 32))]
    #[serde(default)]
    pub roll: String,

    #[validate(length(max = 32))]
    #[serde(default)]
    pub class: String,

    #[validate(length(max = 32))]
    #[serde(default)]
    pub section: String,
}

/// Unknown fields are deliberately ignored rather than rejected: a client
/// that sends its own `score`/`total` must have no effect on grading.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitExamRequest {
    #[validate(nested)]
    pub student: StudentProfileInput,

    /// question id -> selected choice id
    #[serde(default)]
    pub answers: HashMap<i64, i64>,
}
