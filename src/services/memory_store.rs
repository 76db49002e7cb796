use crate::{
    models::{DeleteOutcome, NewUser, User, UserUpdate},
    services::user_service::{parse_object_id, UserStore},
    utils::AppError,
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local store with the same contract as `MongoUserStore`.
///
/// ObjectIds embed a timestamp and counter, so the ordered map lists users
/// in insertion order like a collection scan would.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<BTreeMap<ObjectId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn insert_one(&self, user: NewUser) -> Result<String, AppError> {
        user.validate()?;

        let id = ObjectId::new();
        self.users.write().await.insert(id, user.into_user(id));

        Ok(id.to_hex())
    }

    async fn update_by_id(&self, id: &str, update: &UserUpdate) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;

        let mut users = self.users.write().await;
        let user = users
            .get_mut(&object_id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        update.apply_to(user);

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<DeleteOutcome, AppError> {
        let object_id = parse_object_id(id)?;

        let removed = self.users.write().await.remove(&object_id);

        Ok(DeleteOutcome {
            deleted_count: u64::from(removed.is_some()),
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
