//! Home Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"Welcome to Our Store"</h1>
                <p class="tagline">"Your journey to seamless payments starts here."</p>
                <div class="cta">
                    <a href="/checkout" class="btn btn-primary">"Go to Checkout"</a>
                </div>
            </header>
        </div>
    }
}
