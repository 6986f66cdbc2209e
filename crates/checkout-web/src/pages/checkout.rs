//! Checkout Page

use checkout_core::{
    CheckoutContext, CheckoutError, Field, FormState, SubmissionStatus, ValidationErrors,
    begin_submit,
};
use leptos::{ev::SubmitEvent, logging::log, prelude::*};
use leptos_router::hooks::use_query_map;

use crate::api;
use crate::components::CardField;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let query = use_query_map();
    let context = query.with_untracked(|q| CheckoutContext::new(q.get("userId"), q.get("planId")));
    log!("User ID: {:?}, Plan ID: {:?}", context.user_id, context.plan_id);

    let (form, set_form) = signal(FormState::default());
    let (errors, set_errors) = signal(ValidationErrors::default());
    let (status, set_status) = signal(SubmissionStatus::Idle);
    let loading = move || status.with(SubmissionStatus::is_pending);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let gate = status.with_untracked(|s| form.with_untracked(|f| begin_submit(s, f, &context)));
        let request = match gate {
            Ok(request) => request,
            Err(CheckoutError::Validation(validation)) => {
                set_errors.set(validation);
                return;
            }
            Err(_) => return,
        };

        set_errors.set(ValidationErrors::default());
        set_status.set(SubmissionStatus::Pending);
        leptos::task::spawn_local(async move {
            set_status.set(api::submit_checkout(request).await);
        });
    };

    view! {
        <div class="checkout">
            <h1>"Checkout"</h1>
            <form class="checkout-form" on:submit=submit>
                {Field::ALL
                    .into_iter()
                    .map(|field| view! { <CardField field=field form=form set_form=set_form errors=errors /> })
                    .collect_view()}
                <div class="actions">
                    <button
                        type="submit"
                        class=move || if loading() { "btn btn-disabled" } else { "btn btn-primary" }
                        disabled=loading
                    >
                        {move || if loading() { "Processing..." } else { "Pay Now" }}
                    </button>
                </div>
            </form>
            {move || {
                status.with(|s| s.message().map(|message| {
                    let message = message.to_string();
                    view! { <p class="result">{message}</p> }
                }))
            }}
        </div>
    }
}
