//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    about::AboutPage,
    auth::{AuthMode, AuthPage},
    dashboard::DashboardPage,
    features::FeaturesPage,
    landing::LandingPage,
    program_detail::ProgramDetailPage,
    programs::ProgramsPage,
};
use crate::state::auth::SessionContext;

/// Root application component.
///
/// Provides the session context, kicks off restoration from
/// `sessionStorage`, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    SessionContext::provide().restore();

    view! {
        <Stylesheet id="leptos" href="/pkg/sportsid.css"/>
        <Title text="SportsID"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("features") view=FeaturesPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("programs") view=ProgramsPage/>
                    <Route path=(StaticSegment("programs"), ParamSegment("id")) view=ProgramDetailPage/>
                    <Route path=StaticSegment("login") view=|| view! { <AuthPage mode=AuthMode::Login/> }/>
                    <Route path=StaticSegment("register") view=|| view! { <AuthPage mode=AuthMode::Register/> }/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
