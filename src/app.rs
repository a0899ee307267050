//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::authenticated_route::AuthenticatedRoute;
use crate::net::api::GraphQlApi;
use crate::pages::{home::HomePage, log_in::LogInPage, register::RegisterPage};
use crate::state::session::SessionGate;
use crate::util::env::EnvConfig;

/// Root application component.
///
/// Provides the resolved config, the API client, and the session, starts
/// the one-time session fetch, and sets up client-side routing.
#[component]
pub fn App(config: EnvConfig) -> impl IntoView {
    provide_meta_context();

    let api = GraphQlApi::new(config.api_host);
    let session = SessionGate::new();

    provide_context(config);
    provide_context(api.clone());
    provide_context(session);

    spawn_session_fetch(session, api);

    view! {
        <Title text="Budgie"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("log-in") view=LogInPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=|| view! { <AuthenticatedRoute view=HomePage/> }/>
            </Routes>
        </Router>
    }
}

fn spawn_session_fetch(session: SessionGate, api: GraphQlApi) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        session.fetch_once(&api).await;
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, api);
    }
}
