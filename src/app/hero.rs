use leptos::prelude::*;

use crate::portfolio::{Action, Section};
use crate::profile::{Profile, ProfileLink};

#[component]
pub fn Hero(profile: &'static Profile, dispatch: Callback<Action>) -> impl IntoView {
    view! {
        <section id=Section::Home.id() class="min-h-screen flex items-center justify-center relative px-6">
            <div class="text-center z-10 space-y-6 animate-fade-in">
                <div class="inline-block px-4 py-2 bg-purple-500/20 rounded-full text-sm mb-4 backdrop-blur-sm">
                    {profile.greeting.clone()}
                </div>
                <h1 class="text-6xl md:text-8xl font-bold mb-4">
                    <span class="bg-gradient-to-r from-purple-400 via-pink-400 to-purple-400 bg-clip-text text-transparent animate-gradient">
                        {profile.name.clone()}
                    </span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-400 max-w-2xl mx-auto">
                    {profile.headline.clone()}
                </p>
                <p class="text-lg text-gray-500">{profile.affiliation.clone()}</p>
                <div class="flex gap-6 justify-center mt-8">
                    {profile.links.iter().map(|link| view! { <LinkBadge link /> }).collect_view()}
                </div>
                <button
                    class="mt-12 animate-bounce text-purple-400"
                    aria-label="Scroll to about"
                    on:click=move |_| dispatch.run(Action::Navigate(Section::About))
                >
                    <i class="icon-chevron-down" />
                </button>
            </div>
        </section>
    }
}

#[component]
fn LinkBadge(link: &'static ProfileLink) -> impl IntoView {
    let (target, rel) = if link.is_external() {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    view! {
        <a
            href=link.href.clone()
            target=target
            rel=rel
            aria-label=link.label.clone()
            class="p-3 bg-white/10 rounded-full hover:bg-white/20 transition-all hover:scale-110 flex items-center justify-center text-2xl"
        >
            <i class=link.icon.clone() />
        </a>
    }
}
