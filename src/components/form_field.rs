//! Labelled text input with an inline error line.

use leptos::prelude::*;

use crate::error::FieldError;

#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] error: Option<Signal<Option<FieldError>>>,
) -> impl IntoView {
    view! {
        <label class="auth-label" for=id>{label}</label>
        <input
            class="auth-input"
            id=id
            name=id
            type=input_type
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
        {move || {
            error
                .and_then(|e| e.get())
                .map(|e| view! { <div class="auth-error">{e.to_string()}</div> })
        }}
    }
}
