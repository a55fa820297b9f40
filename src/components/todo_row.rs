//! Todo Row Component
//!
//! One item. Clicking anywhere on the row toggles it.

use leptos::prelude::*;

use crate::components::DeleteButton;
use crate::context::use_app_context;
use crate::models::Item;

#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let completed = item.completed;

    view! {
        <div
            class=if completed { "item-row completed" } else { "item-row" }
            on:click=move |_| ctx.toggle(id)
        >
            <input type="checkbox" prop:checked=completed tabindex="-1" />
            <span class="item-text">{item.title}</span>
            <DeleteButton on_delete=move |_| ctx.remove(id) />
        </div>
    }
}
