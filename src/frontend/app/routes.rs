//! Application routing system.

use crate::frontend::components::layout::{AdminLayout, AuthLayout, MemberLayout};
use crate::frontend::pages::{
    AdminDashboard, Analytics, BlogAdmin, Courses, Dashboard, Login, NotFound,
};
use dioxus::prelude::*;
use dioxus_router::Routable;

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Sign-in pages, reachable without a session.
    #[layout(AuthLayout)]
        #[redirect("/auth", || Route::Login {})]
        #[route("/auth/login")]
        Login {},
    #[end_layout]

    // Any signed-in profile.
    #[layout(MemberLayout)]
        #[redirect("/", || Route::Dashboard {})]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/courses")]
        Courses {},
    #[end_layout]

    // Administrators only.
    #[layout(AdminLayout)]
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/admin/analytics")]
        Analytics {},
        #[route("/admin/blog")]
        BlogAdmin {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
