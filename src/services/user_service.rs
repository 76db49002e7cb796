// ==================== USER STORAGE ====================
// Data access for the `users` collection. Handlers only see the
// `UserStore` trait; the concrete store is chosen at startup.

use crate::{
    database::MongoDB,
    models::{DeleteOutcome, NewUser, User, UserUpdate},
    utils::AppError,
};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::Collection;

pub const COLLECTION: &str = "users";

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every user, no filter
    async fn list_all(&self) -> Result<Vec<User>, AppError>;

    /// Persists a new user and returns its generated id (hex)
    async fn insert_one(&self, user: NewUser) -> Result<String, AppError>;

    /// Overwrites the allow-listed fields of the user with `id`
    async fn update_by_id(&self, id: &str, update: &UserUpdate) -> Result<(), AppError>;

    /// Removes the user with `id`; a missing id yields a zero count, not an error
    async fn delete_by_id(&self, id: &str) -> Result<DeleteOutcome, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}

/// `$set` document for an update; absent fields are written as null
pub fn update_document(update: &UserUpdate) -> Document {
    fn field(value: &Option<String>) -> Bson {
        value.clone().map(Bson::String).unwrap_or(Bson::Null)
    }

    doc! {
        "firstName": field(&update.first_name),
        "lastName": field(&update.last_name),
        "email": field(&update.email),
    }
}

pub struct MongoUserStore {
    db: MongoDB,
}

impl MongoUserStore {
    pub fn new(db: MongoDB) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<User> {
        self.db.collection::<User>(COLLECTION)
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.users().find(doc! {}).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    async fn insert_one(&self, user: NewUser) -> Result<String, AppError> {
        user.validate()?;

        let id = ObjectId::new();
        self.users().insert_one(user.into_user(id)).await?;

        Ok(id.to_hex())
    }

    async fn update_by_id(&self, id: &str, update: &UserUpdate) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;

        let result = self
            .users()
            .update_one(doc! { "_id": object_id }, doc! { "$set": update_document(update) })
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<DeleteOutcome, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self.users().delete_one(doc! { "_id": object_id }).await?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.ping().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);

        assert_eq!(
            parse_object_id("not-an-id"),
            Err(AppError::InvalidId("not-an-id".to_string()))
        );
    }

    #[test]
    fn test_update_document_writes_null_for_absent_fields() {
        let update = UserUpdate {
            first_name: Some("Robert".into()),
            last_name: None,
            email: None,
        };

        let set = update_document(&update);

        assert_eq!(set.get_str("firstName").unwrap(), "Robert");
        assert_eq!(set.get("lastName"), Some(&Bson::Null));
        assert_eq!(set.get("email"), Some(&Bson::Null));
        assert_eq!(set.len(), 3);
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongo_store_crud() {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/user_service_test".to_string());
        let db = MongoDB::new(&uri, "user_service_test").await.unwrap();
        let store = MongoUserStore::new(db);

        let id = store
            .insert_one(NewUser {
                first_name: Some("Bob".into()),
                last_name: Some("Ross".into()),
                email: Some("bob@x.com".into()),
            })
            .await
            .unwrap();

        let users = store.list_all().await.unwrap();
        assert!(users.iter().any(|u| u.id.map(|i| i.to_hex()) == Some(id.clone())));

        let outcome = store.delete_by_id(&id).await.unwrap();
        assert_eq!(outcome.deleted_count, 1);

        let missing = store.update_by_id(&id, &UserUpdate::default()).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
