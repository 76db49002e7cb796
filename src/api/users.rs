use actix_web::{web, HttpRequest, HttpResponse, Responder};
use crate::{
    api::payload::{parse_body, Body},
    models::{NewUser, UserResponse, UserUpdate},
    services::UserStore,
    utils::AppError,
};

/// GET / - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user, as `{success: true, data: [...]}`", body = [UserResponse]),
        (status = 400, description = "Storage error, as `{success: false, error}`")
    )
)]
pub async fn get_users(store: web::Data<dyn UserStore>) -> impl Responder {
    log::info!("📋 GET / - Listing users");

    match store.list_all().await {
        Ok(users) => {
            log::info!("✅ Listed {} users", users.len());
            let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "data": data
            }))
        }
        Err(e) => {
            log::error!("❌ Error listing users: {}", e);
            HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e.detail()
            }))
        }
    }
}

/// POST /createuser - Cria novo usuário
#[utoipa::path(
    post,
    path = "/createuser",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 200, description = "`{success: true, id, message: \"New user added.\"}`"),
        (status = 400, description = "`{success: false, error: \"Please provide an item\"}` for an empty body, `{error, message: \"Insert failed\"}` when the insert fails")
    )
)]
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    req: HttpRequest,
    payload: web::Bytes,
) -> impl Responder {
    let body = match parse_body(&req, &payload) {
        Body::Fields(body) => body,
        rejected => {
            log::warn!("⚠️ POST /createuser - No item in body: {:?}", rejected);
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "Please provide an item"
            }));
        }
    };

    let user = NewUser::from_payload(&body);

    log::info!("📝 POST /createuser - Adding user {:?}", user.email);

    match store.insert_one(user).await {
        Ok(id) => {
            log::info!("✅ User added: {}", id);
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "id": id,
                "message": "New user added."
            }))
        }
        Err(e) => {
            log::warn!("⚠️ Insert failed: {}", e);
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.detail(),
                "message": "Insert failed"
            }))
        }
    }
}

/// PUT /updateuser/id={id} - Atualiza usuário
///
/// Failures are reported with status 200 and `success: false`, including
/// an unknown id.
#[utoipa::path(
    put,
    path = "/updateuser/id={id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ObjectId (hex)")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "`{success: true, msg: \"User updated\", Details: <update>}` or `{success: false, msg: \"Update failed\", Details: <error>}`")
    )
)]
pub async fn update_user(
    store: web::Data<dyn UserStore>,
    id: web::Path<String>,
    req: HttpRequest,
    payload: web::Bytes,
) -> impl Responder {
    log::info!("🔧 PUT /updateuser/id={} - Updating user", id);

    // An absent body nulls every field; an unreadable one never reaches storage
    let update = match parse_body(&req, &payload) {
        Body::Empty => UserUpdate::default(),
        Body::Fields(body) => UserUpdate::from_payload(&body),
        Body::Invalid(reason) => {
            let e = AppError::InvalidBody(reason);
            log::warn!("⚠️ Failed to update: {}", e);
            return HttpResponse::Ok().json(serde_json::json!({
                "success": false,
                "msg": "Update failed",
                "Details": e.detail()
            }));
        }
    };

    match store.update_by_id(&id, &update).await {
        Ok(()) => {
            log::info!("✅ User updated");
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "msg": "User updated",
                "Details": update
            }))
        }
        Err(e) => {
            log::warn!("⚠️ Failed to update: {}", e);
            HttpResponse::Ok().json(serde_json::json!({
                "success": false,
                "msg": "Update failed",
                "Details": e.detail()
            }))
        }
    }
}

/// DELETE /delete/id={id} - Remove usuário
#[utoipa::path(
    delete,
    path = "/delete/id={id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ObjectId (hex)")),
    responses(
        (status = 200, description = "`{success: true, data: {deletedCount}}`, also when nothing matched", body = crate::models::DeleteOutcome),
        (status = 400, description = "Storage error or malformed id, as `{success: false, error}`")
    )
)]
pub async fn delete_user(store: web::Data<dyn UserStore>, id: web::Path<String>) -> impl Responder {
    log::info!("🗑️  DELETE /delete/id={} - Removing user", id);

    match store.delete_by_id(&id).await {
        Ok(outcome) => {
            log::info!("✅ Deleted {} user(s)", outcome.deleted_count);
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "data": outcome
            }))
        }
        Err(e) => {
            log::error!("❌ Error deleting user: {}", e);
            HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": e.detail()
            }))
        }
    }
}
