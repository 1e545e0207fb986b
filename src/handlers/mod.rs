pub mod auth;
pub mod user;

pub use auth::{login, logout, register};
pub use user::{delete_profile, get_profile, update_profile};

use actix_web::web;

/// Mount all API routes under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/logout", web::post().to(auth::logout)),
            )
            .service(
                web::resource("/profile")
                    .route(web::get().to(user::get_profile))
                    .route(web::patch().to(user::update_profile))
                    .route(web::delete().to(user::delete_profile)),
            ),
    );
}
