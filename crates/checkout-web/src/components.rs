//! UI Components

use checkout_core::{Field, FormState, ValidationErrors};
use leptos::prelude::*;

/// Labelled card input with its inline validation message
#[component]
pub fn CardField(
    field: Field,
    form: ReadSignal<FormState>,
    set_form: WriteSignal<FormState>,
    errors: ReadSignal<ValidationErrors>,
) -> impl IntoView {
    let error = move || errors.with(|e| e.get(field).to_string());

    view! {
        <div class="field">
            <label for=field.as_str()>{field.label()}</label>
            <input
                type="text"
                id=field.as_str()
                placeholder=field.placeholder()
                required=true
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_form.update(|f| f.update_field(field, value));
                }
            />
            <Show when=move || !error().is_empty()>
                <p class="field-error">{error}</p>
            </Show>
        </div>
    }
}
