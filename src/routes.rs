use crate::{
    api::{attendance, users},
    auth::handlers,
    error::json_error_handler,
    store::Store,
};
use actix_web::web;

/// Mounts every API route under `prefix`.
///
/// Handlers expect `web::Data<S>` and `web::Data<TokenIssuer>` to be
/// registered on the app.
pub fn configure<S: Store>(cfg: &mut web::ServiceConfig, prefix: &str) {
    cfg.service(
        web::scope(prefix)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(
                web::resource("/register{trailing:/?}")
                    .route(web::post().to(handlers::register::<S>)),
            )
            .service(
                web::resource("/login{trailing:/?}").route(web::post().to(handlers::login::<S>)),
            )
            // users
            .service(
                web::resource("/users{trailing:/?}").route(web::get().to(users::get_users::<S>)),
            )
            // an empty id still reaches the handler; a trailing slash is optional everywhere
            .service(
                web::resource("/get_users/{id:[^/]*}{trailing:/?}")
                    .route(web::get().to(users::get_user_by_id::<S>)),
            )
            .service(
                web::resource("/delete_user/{id:[^/]*}{trailing:/?}")
                    .route(web::delete().to(users::delete_user::<S>)),
            )
            // attendance
            .service(
                web::resource("/create_attendance{trailing:/?}")
                    .route(web::post().to(attendance::create_attendance::<S>)),
            )
            .service(
                web::resource("/attendance{trailing:/?}")
                    .route(web::get().to(attendance::get_attendance::<S>)),
            )
            .service(
                web::resource("/get_attendance/{id:[^/]*}{trailing:/?}")
                    .route(web::get().to(attendance::get_attendance_by_id::<S>)),
            )
            .service(
                web::resource("/delete_attendance/{id:[^/]*}{trailing:/?}")
                    .route(web::delete().to(attendance::delete_attendance::<S>)),
            ),
    );
}
