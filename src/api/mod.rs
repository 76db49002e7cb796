pub mod health;
pub mod payload;
pub mod swagger;
pub mod users;

use actix_web::web;

/// Route table: one handler per (method, path)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(users::get_users))
        .route("/createuser", web::post().to(users::create_user))
        .route("/updateuser/id={id}", web::put().to(users::update_user))
        .route("/delete/id={id}", web::delete().to(users::delete_user))
        .route("/health", web::get().to(health::health_check));
}
