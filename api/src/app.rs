//! Application state and factory
//!
//! Builds the services from repository implementations and wires every
//! route, extractor config and middleware into an actix-web `App`.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};

use sc_core::repositories::{CartItemRepository, CustomerRepository, ProductRepository};
use sc_core::services::{
    AuthService, CartService, CustomerService, PasswordHasher, ProductService, TokenService,
    TokenServiceConfig,
};
use sc_shared::{AppConfig, AuthConfig};

use crate::handlers::error::{
    json_error_handler, path_error_handler, query_error_handler, ApiError,
};
use crate::middleware::{create_cors, JwtAuth, SecurityMiddleware, TokenAuthenticator};
use crate::routes;

/// Application state that holds shared services
pub struct AppState<C, P, I>
where
    C: CustomerRepository,
    P: ProductRepository,
    I: CartItemRepository,
{
    pub auth_service: Arc<AuthService<C>>,
    pub customer_service: Arc<CustomerService<C>>,
    pub product_service: Arc<ProductService<P>>,
    pub cart_service: Arc<CartService<C, P, I>>,
}

impl<C, P, I> AppState<C, P, I>
where
    C: CustomerRepository,
    P: ProductRepository,
    I: CartItemRepository,
{
    /// Build every service on top of the given repositories
    pub fn new(
        customer_repository: Arc<C>,
        product_repository: Arc<P>,
        cart_item_repository: Arc<I>,
        auth_config: &AuthConfig,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&auth_config.jwt)));
        let password_hasher = PasswordHasher::from_config(&auth_config.password);

        Self {
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&customer_repository),
                token_service,
                password_hasher,
            )),
            customer_service: Arc::new(CustomerService::new(
                Arc::clone(&customer_repository),
                password_hasher,
            )),
            product_service: Arc::new(ProductService::new(Arc::clone(&product_repository))),
            cart_service: Arc::new(CartService::new(
                customer_repository,
                product_repository,
                cart_item_repository,
            )),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<C, P, I>(
    app_state: web::Data<AppState<C, P, I>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let authenticator: Arc<dyn TokenAuthenticator> = app_state.auth_service.clone();
    let jwt_auth = JwtAuth::new(authenticator);
    let members_auth = jwt_auth.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        // Middleware order matters: security first, then CORS, then logging
        .wrap(Logger::default())
        .wrap(create_cors(&config.cors, config.environment))
        .wrap(SecurityMiddleware::for_environment(config.environment))
        .route("/health", web::get().to(routes::health::health_check))
        .service(
            web::scope("/api/members")
                .configure(move |cfg| routes::members::configure::<C, P, I>(cfg, members_auth)),
        )
        .service(
            web::scope("/api/carts")
                .wrap(jwt_auth)
                .configure(routes::carts::configure::<C, P, I>),
        )
        .service(web::scope("/api/products").configure(routes::products::configure::<C, P, I>))
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> Result<actix_web::HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}
