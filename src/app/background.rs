use leptos::prelude::*;

use crate::portfolio::PointerState;

/// Blurred colour blobs behind the page. The first one trails the cursor.
#[component]
pub fn Background(#[prop(into)] pointer: Signal<PointerState>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none">
            <div
                class="absolute w-96 h-96 bg-purple-500 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-pulse"
                style=move || pointer.get().blob_style()
            />
            <div class="absolute top-1/4 right-1/4 w-72 h-72 bg-pink-500 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-pulse delay-700" />
            <div class="absolute bottom-1/4 left-1/3 w-72 h-72 bg-blue-500 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-pulse delay-1000" />
        </div>
    }
}
