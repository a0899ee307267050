//! Log-in page: email + password against the `login` mutation.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the identity is handed to `SessionGate` and the user lands on
//! `/`. A `null` answer keeps the user here with a form-level message.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::net::api::GraphQlApi;
use crate::net::types::LoginInput;
use crate::state::login::LoginForm;
use crate::state::session::SessionGate;
use crate::util::auth::REGISTER_PATH;

#[component]
pub fn LogInPage() -> impl IntoView {
    let session = expect_context::<SessionGate>();
    let api = expect_context::<GraphQlApi>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = form.try_update(LoginForm::submit).flatten() else {
            return;
        };
        spawn_log_in(form, session, api.clone(), input, navigate.clone());
    };

    view! {
        <form class="auth-form" data-testid="logIn_form" on:submit=on_submit>
            {move || {
                form.with(LoginForm::invalid_credentials)
                    .map(|message| view! { <p class="auth-form__message">{message}</p> })
            }}
            <FormField
                id="logIn_email"
                label="Email"
                value=Signal::derive(move || form.with(|f| f.email().to_owned()))
                on_input=Callback::new(move |v| form.update(|f| f.set_email(v)))
            />
            <FormField
                id="logIn_password"
                label="Password"
                input_type="password"
                value=Signal::derive(move || form.with(|f| f.password().to_owned()))
                on_input=Callback::new(move |v| form.update(|f| f.set_password(v)))
            />
            <button class="auth-button" type="submit">"Log In"</button>
            <p>"Don't have an account? " <A href=REGISTER_PATH>"Register"</A></p>
        </form>
    }
}

fn spawn_log_in<N>(form: RwSignal<LoginForm>, session: SessionGate, api: GraphQlApi, input: LoginInput, navigate: N)
where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::net::api::AuthApi;
        use crate::state::login::LoginOutcome;

        let result = api.log_in(&input).await;
        if let Some(LoginOutcome::LoggedIn(user)) = form.try_update(|f| f.finish(result)) {
            session.set_user(user);
            navigate(crate::util::auth::HOME_PATH, NavigateOptions::default());
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (form, session, api, input, navigate);
    }
}
