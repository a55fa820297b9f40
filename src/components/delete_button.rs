//! Delete Button Component

use leptos::prelude::*;

/// × button whose click never reaches the enclosing row
#[component]
pub fn DeleteButton(
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="delete-btn"
            title="Delete"
            on:click=move |ev| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            "×"
        </button>
    }
}
