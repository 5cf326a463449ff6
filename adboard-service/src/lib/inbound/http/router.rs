use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::advertisements::create_advertisement::create_advertisement;
use super::handlers::advertisements::delete_advertisement::delete_advertisement;
use super::handlers::advertisements::get_advertisement::get_advertisement;
use super::handlers::advertisements::list_advertisements::list_advertisements;
use super::handlers::advertisements::update_advertisement::update_advertisement;
use super::handlers::auth::sign_in::sign_in;
use super::handlers::auth::sign_up::sign_up;
use super::handlers::categories::create_category::create_category;
use super::handlers::categories::delete_category::delete_category;
use super::handlers::categories::get_category::get_category;
use super::handlers::categories::update_category::update_category;
use super::handlers::complaints::create_complaint::create_complaint;
use super::handlers::complaints::delete_complaint::delete_complaint;
use super::handlers::complaints::get_complaint::get_complaint;
use super::handlers::complaints::list_complaints::list_complaints;
use super::handlers::complaints::update_complaint::update_complaint;
use super::handlers::reviews::create_review::create_review;
use super::handlers::reviews::delete_review::delete_review;
use super::handlers::reviews::get_review::get_review;
use super::handlers::reviews::list_reviews::list_reviews;
use super::handlers::reviews::update_review::update_review;
use super::handlers::users::appoint_admin::appoint_admin;
use super::handlers::users::ban_user::ban_user;
use super::handlers::users::create_user::create_user;
use super::handlers::users::delete_user::delete_user;
use super::handlers::users::get_user::get_user;
use super::handlers::users::unban_user::unban_user;
use super::handlers::users::update_user::update_user;
use super::middleware::alert_on_failure;
use super::middleware::authenticate;
use super::middleware::require_admin;
use crate::domain::access::guards::Guards;
use crate::domain::advertisement::service::AdvertisementService;
use crate::domain::category::service::CategoryService;
use crate::domain::complaint::service::ComplaintService;
use crate::domain::review::service::ReviewService;
use crate::domain::user::service::UserService;
use crate::outbound::alerting::AlertNotifier;
use crate::outbound::repositories::PostgresAdvertisementRepository;
use crate::outbound::repositories::PostgresCategoryRepository;
use crate::outbound::repositories::PostgresComplaintRepository;
use crate::outbound::repositories::PostgresOwnershipProbe;
use crate::outbound::repositories::PostgresReviewRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub category_service: Arc<CategoryService<PostgresCategoryRepository>>,
    pub advertisement_service:
        Arc<AdvertisementService<PostgresAdvertisementRepository, PostgresCategoryRepository>>,
    pub review_service: Arc<ReviewService<PostgresReviewRepository, PostgresAdvertisementRepository>>,
    pub complaint_service:
        Arc<ComplaintService<PostgresComplaintRepository, PostgresAdvertisementRepository>>,
    pub guards: Arc<Guards<PostgresOwnershipProbe>>,
    pub tokens: Arc<TokenService>,
    pub notifier: Arc<dyn AlertNotifier>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/register", post(sign_up))
        .route("/auth/login", post(sign_in));

    // Authenticated routes; per-route admin checks (review/complaint
    // listings) happen in the handlers.
    let protected_routes = Router::new()
        .route("/adv", post(create_advertisement).get(list_advertisements))
        .route(
            "/adv/:adv_id",
            get(get_advertisement)
                .patch(update_advertisement)
                .delete(delete_advertisement),
        )
        .route("/review", get(list_reviews))
        .route(
            "/review/:id",
            post(create_review)
                .get(get_review)
                .patch(update_review)
                .delete(delete_review),
        )
        .route("/complaint", get(list_complaints))
        .route(
            "/complaint/:id",
            post(create_complaint)
                .get(get_complaint)
                .patch(update_complaint)
                .delete(delete_complaint),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    // Admin-only routers; authenticate runs first (outermost), then the
    // admin gate, so banned admins are rejected before the admin check.
    let admin_routes = Router::new()
        .route("/user", post(create_user))
        .route(
            "/user/:user_id",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/user/ban/:user_id", patch(ban_user))
        .route("/user/unban/:user_id", patch(unban_user))
        .route("/user/adm/:user_id", patch(appoint_admin))
        .route("/category", post(create_category))
        .route(
            "/category/:cat_id",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            alert_on_failure,
        ))
        .with_state(state)
}
