use crate::utils::AppError;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User document as stored in the `users` collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// User as returned over HTTP, with the id rendered as hex
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
        }
    }
}

/// Record built from a create payload. Construction never fails; required
/// fields are checked by the store at insert time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl NewUser {
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        NewUser {
            first_name: field_text(payload, "firstName"),
            last_name: field_text(payload, "lastName"),
            email: field_text(payload, "email"),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let missing: Vec<String> = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
        ]
        .iter()
        // An empty string counts as missing
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(field, _)| format!("{}: Path `{}` is required.", field, field))
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(missing.join(", ")))
        }
    }

    /// Stored document for this record under a freshly assigned id
    pub fn into_user(self, id: ObjectId) -> User {
        User {
            id: Some(id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

/// Update applied by `PUT /updateuser/id={id}`.
///
/// All three fields are always written: a field missing from the request
/// body overwrites the stored value with `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl UserUpdate {
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        UserUpdate {
            first_name: field_text(payload, "firstName"),
            last_name: field_text(payload, "lastName"),
            email: field_text(payload, "email"),
        }
    }

    pub fn apply_to(&self, user: &mut User) {
        user.first_name = self.first_name.clone();
        user.last_name = self.last_name.clone();
        user.email = self.email.clone();
    }
}

/// Result of `delete_by_id`; zero is a valid, successful outcome
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

// Scalars are cast to text; null, arrays and objects leave the field unset
fn field_text(payload: &Map<String, Value>, field: &str) -> Option<String> {
    match payload.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
