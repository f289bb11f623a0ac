//! Neutral loading indicator shown while auth state is unsettled.

use leptos::prelude::*;

/// Full-screen spinner. Route guards render this instead of protected
/// content or a redirect while a session check is in flight.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p class="loading-screen__label">"Loading..."</p>
        </div>
    }
}
