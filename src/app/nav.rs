use leptos::prelude::*;

use crate::portfolio::{nav_class, nav_item_class, Action, Section};

#[component]
pub fn NavBar(
    initials: String,
    #[prop(into)] is_scrolled: Signal<bool>,
    #[prop(into)] active: Signal<Section>,
    dispatch: Callback<Action>,
) -> impl IntoView {
    view! {
        <nav class=move || nav_class(is_scrolled.get())>
            <div class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
                <div class="text-2xl font-bold bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                    {initials}
                </div>
                <div class="flex gap-8">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class=move || nav_item_class(section, active.get())
                                    on:click=move |_| dispatch.run(Action::Navigate(section))
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
