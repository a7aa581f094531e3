//! Member route handlers
//!
//! - Sign up and email uniqueness probe
//! - Login
//! - Profile read, update and account deletion (authenticated)
//! - Password confirmation and change (authenticated)

pub mod login;
pub mod password;
pub mod profile;
pub mod signup;

use actix_web::web;

use sc_core::repositories::{CartItemRepository, CustomerRepository, ProductRepository};

use crate::middleware::JwtAuth;

/// Register the `/api/members` routes; everything under `/auth` requires a token
pub fn configure<C, P, I>(cfg: &mut web::ServiceConfig, jwt_auth: JwtAuth)
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    cfg.route("", web::post().to(signup::sign_up::<C, P, I>))
        .route("/check-email", web::get().to(signup::check_email::<C, P, I>))
        .route("/login", web::post().to(login::login::<C, P, I>))
        .service(
            web::scope("/auth")
                .wrap(jwt_auth)
                .route("/me", web::get().to(profile::find_me::<C, P, I>))
                .route("/me", web::patch().to(profile::update_me::<C, P, I>))
                .route("/me", web::delete().to(profile::delete_me::<C, P, I>))
                .route(
                    "/password-check",
                    web::post().to(password::check_password::<C, P, I>),
                )
                .route(
                    "/password",
                    web::patch().to(password::update_password::<C, P, I>),
                ),
        );
}
