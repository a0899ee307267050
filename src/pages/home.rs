//! Authenticated landing page.

use leptos::prelude::*;

use crate::net::api::GraphQlApi;
use crate::state::session::SessionGate;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionGate>();
    let api = expect_context::<GraphQlApi>();

    let name = move || session.user().map(|u| u.display_name()).unwrap_or_default();
    let on_log_out = move |_| spawn_log_out(session, api.clone());

    view! {
        <div class="home">
            <p class="home__greeting">"Home " {name}</p>
            <button class="auth-button" on:click=on_log_out>"Log Out"</button>
        </div>
    }
}

fn spawn_log_out(session: SessionGate, api: GraphQlApi) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        session.log_out(&api).await;
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, api);
    }
}
