//! New Item Form Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Text input + Add button; blank titles are ignored
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_title, set_new_title) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add(new_title.get_untracked()) {
            set_new_title.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Add new item..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
