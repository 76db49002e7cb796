use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "CRUD over a single `users` collection.\n\n**Note:** an update failure, including an unknown id, is reported with HTTP 200 and `success: false`."
    ),
    paths(
        crate::api::users::get_users,
        crate::api::users::create_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::UserResponse,
            crate::models::NewUser,
            crate::models::UserUpdate,
            crate::models::DeleteOutcome,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "List, create, update and delete users."),
        (name = "Health", description = "Service and storage health."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in ["/", "/createuser", "/updateuser/id={id}", "/delete/id={id}", "/health"] {
            assert!(paths.iter().any(|p| p.as_str() == path), "missing {}", path);
        }
    }
}
