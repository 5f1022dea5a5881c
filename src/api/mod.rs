use actix_web::web;

pub mod auth;
pub mod favorites;
pub mod health;
pub mod recipes;
pub mod swagger;

use crate::middleware::AuthMiddleware;

/// Route table, shared by `main` and the handler tests.
///
/// The favorites scope is guarded by [`AuthMiddleware`]; recipe routes mix
/// public reads and authenticated writes on the same paths, so their
/// handlers authenticate in-handler instead.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1/auth")
                .route("/register", web::post().to(auth::register))
                .route("/login", web::post().to(auth::login))
                .route("/logout", web::post().to(auth::logout))
                .route("/me", web::get().to(auth::get_me)),
        )
        .service(
            web::scope("/api/v1/recipes")
                .service(
                    web::resource("")
                        .route(web::get().to(recipes::search_recipes))
                        .route(web::post().to(recipes::create_recipe)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(recipes::get_recipe))
                        .route(web::put().to(recipes::update_recipe))
                        .route(web::delete().to(recipes::delete_recipe)),
                ),
        )
        .service(
            web::scope("/api/v1/favorites")
                .wrap(AuthMiddleware)
                .service(web::resource("").route(web::get().to(favorites::list_favorites)))
                .service(
                    web::resource("/{recipe_id}")
                        .route(web::post().to(favorites::add_favorite))
                        .route(web::delete().to(favorites::remove_favorite)),
                ),
        );
}
