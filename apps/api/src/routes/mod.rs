pub mod health;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::content::handlers;
use crate::state::AppState;

/// The original server greets on the root path.
async fn root_handler() -> &'static str {
    "Hello World"
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health::health_handler))
        // Banner intro (update is the one validated write)
        .route(
            "/banner-intro",
            get(handlers::list_banner_intro).post(handlers::create_banner_intro),
        )
        .route("/banner-intro/:id", patch(handlers::update_banner_intro))
        // Social links
        .route(
            "/social-links",
            get(handlers::list_social_links).post(handlers::create_social_link),
        )
        .route(
            "/social-links/:id",
            patch(handlers::update_social_link).delete(handlers::delete_social_link),
        )
        // About me
        .route(
            "/about-me",
            get(handlers::list_about_me).post(handlers::create_about_me),
        )
        .route("/about-me/:id", patch(handlers::update_about_me))
        // Skills
        .route(
            "/skills",
            get(handlers::list_skills).post(handlers::create_skill),
        )
        .route("/skills/:id", patch(handlers::update_skill))
        // Educational qualification
        .route(
            "/educational-qualification",
            get(handlers::list_educational_qualifications)
                .post(handlers::create_educational_qualification),
        )
        .route(
            "/educational-qualification/:id",
            patch(handlers::update_educational_qualification),
        )
        // Achievements (admin dashboard sends PATCH, PUT, and DELETE)
        .route(
            "/achievements",
            get(handlers::list_achievements).post(handlers::create_achievement),
        )
        .route(
            "/achievements/:id",
            patch(handlers::update_achievement)
                .put(handlers::update_achievement)
                .delete(handlers::delete_achievement),
        )
        // Projects (the only resource with a get-one route)
        .route(
            "/project",
            get(handlers::list_projects).post(handlers::create_project),
        )
        .route(
            "/project/:id",
            get(handlers::get_project).patch(handlers::update_project),
        )
        .with_state(state)
}
