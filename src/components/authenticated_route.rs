//! Session-gated route wrapper.
//!
//! Re-evaluated whenever the session changes, so a logout turns the
//! protected view into a redirect without a reload. The decision is memoized,
//! so session updates that keep it at `Redirect` do not mount a second
//! redirect.
//!
//! The guard takes no route params and forwards none. The wrapped view is
//! rendered inside the matched route and reads its own params with
//! `use_params` if it has any; `/` has none.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionGate;
use crate::util::auth::{GuardDecision, LOG_IN_PATH, guard_decision};

/// Render `view` for signed-in users, a placeholder while the session loads,
/// and a redirect to the log-in page otherwise.
#[component]
pub fn AuthenticatedRoute<F, V>(view: F) -> impl IntoView
where
    F: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let session = expect_context::<SessionGate>();
    let decision = Memo::new(move |_| session.with_state(guard_decision));

    move || match decision.get() {
        GuardDecision::Loading => view! { <div class="auth-loader">"Loading..."</div> }.into_any(),
        GuardDecision::Render => view().into_any(),
        GuardDecision::Redirect => view! { <Redirect path=LOG_IN_PATH/> }.into_any(),
    }
}
