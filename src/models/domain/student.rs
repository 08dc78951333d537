use serde::{Deserialize, Serialize};

/// A student is identified by `school_id`, a natural key this system does
/// not mint. There is no login: whoever holds the ID string is trusted,
/// and the mutable profile fields track the latest submission.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Student {
    pub id: i64,
    pub school_id: String,
    pub name: String,
    pub roll: String,
    pub class_name: String,
    pub section: String,
}
