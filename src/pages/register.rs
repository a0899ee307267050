//! Registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field state lives in `RegistrationForm`. The email input is debounced
//! before it reaches the form, and each settled value may start one
//! `userExists` lookup. A lookup answered for an email the user has since
//! replaced is discarded and the current email is checked instead.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::net::api::GraphQlApi;
use crate::net::types::RegistrationInput;
use crate::state::registration::{RegistrationForm, SubmitOutcome};
use crate::state::session::SessionGate;
use crate::util::auth::LOG_IN_PATH;
use crate::util::debounce::{DEBOUNCE_WINDOW_MS, use_debounced};
use crate::util::validation::Field;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionGate>();
    let api = expect_context::<GraphQlApi>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());

    let email_input = Memo::new(move |_| form.with(|f| f.value(Field::Email).to_owned()));
    let debounced = use_debounced(email_input.into(), DEBOUNCE_WINDOW_MS);

    let check_api = api.clone();
    Effect::new(move || {
        let email = debounced.get();
        form.update(|f| f.on_debounced_email(&email));
        start_email_check(form, check_api.clone());
    });

    let value = move |field: Field| Signal::derive(move || form.with(|f| f.value(field).to_owned()));
    let error = move |field: Field| Signal::derive(move || form.with(|f| f.visible_error(field)));
    let on_input = move |field: Field| Callback::new(move |v| form.update(|f| f.set_field(field, v)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(RegistrationForm::submit) {
            Some(SubmitOutcome::Ready(input)) => {
                spawn_registration(form, session, api.clone(), input, navigate.clone());
            }
            Some(SubmitOutcome::AwaitingEmail) => start_email_check(form, api.clone()),
            _ => {}
        }
    };

    view! {
        <form class="auth-form" data-testid="register_form" on:submit=on_submit>
            {move || {
                form.with(RegistrationForm::form_error)
                    .map(|message| view! { <p class="auth-form__message">{message}</p> })
            }}
            <FormField
                id="register_firstName"
                label="First Name"
                value=value(Field::FirstName)
                on_input=on_input(Field::FirstName)
                error=error(Field::FirstName)
            />
            <FormField
                id="register_lastName"
                label="Last Name"
                value=value(Field::LastName)
                on_input=on_input(Field::LastName)
                error=error(Field::LastName)
            />
            <FormField
                id="register_email"
                label="Email"
                value=value(Field::Email)
                on_input=on_input(Field::Email)
                error=error(Field::Email)
            />
            <Show when=move || form.with(RegistrationForm::email_loading_visible)>
                <div class="auth-loader" data-testid="register_email_loading">"Validating..."</div>
            </Show>
            <FormField
                id="register_password"
                label="Password"
                input_type="password"
                value=value(Field::Password)
                on_input=on_input(Field::Password)
                error=error(Field::Password)
            />
            <FormField
                id="register_confirm_password"
                label="Confirm Password"
                input_type="password"
                value=value(Field::ConfirmPassword)
                on_input=on_input(Field::ConfirmPassword)
                error=error(Field::ConfirmPassword)
            />
            <button
                class="auth-button"
                type="submit"
                disabled=move || form.with(RegistrationForm::submit_disabled)
            >
                "Register"
            </button>
            <p>"Already have an account? " <A href=LOG_IN_PATH>"Log In"</A></p>
        </form>
    }
}

/// Start a server lookup for the form's current email if it needs one.
fn start_email_check(form: RwSignal<RegistrationForm>, api: GraphQlApi) {
    let Some(ticket) = form.try_update(RegistrationForm::begin_email_check).flatten() else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::net::api::AuthApi;
        use crate::state::email_check::CommitOutcome;

        let result = api.user_exists(ticket.email()).await;
        if form.try_update(|f| f.commit_email_check(ticket, result)) == Some(CommitOutcome::Stale) {
            start_email_check(form, api);
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ticket, api);
    }
}

fn spawn_registration<N>(
    form: RwSignal<RegistrationForm>,
    session: SessionGate,
    api: GraphQlApi,
    input: RegistrationInput,
    navigate: N,
) where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::net::api::AuthApi;
        use crate::state::registration::RegistrationOutcome;

        let result = api.register(&input).await;
        if let Some(RegistrationOutcome::Registered(user)) = form.try_update(|f| f.finish_submit(result)) {
            session.set_user(user);
            navigate(crate::util::auth::HOME_PATH, NavigateOptions::default());
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (form, session, api, input, navigate);
    }
}
