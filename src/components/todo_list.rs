//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_board_store, BoardStateStoreFields};

/// Rows in insertion order
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_board_store();
    let rows = move || store.items().get().into_vec();

    view! {
        <div class="todo-list">
            <For
                each=rows
                // completed and title are part of the key so an edited row re-renders
                key=|item| (item.id, item.completed, item.title.clone())
                children=move |item| view! { <TodoRow item=item /> }
            />
        </div>
    }
}
