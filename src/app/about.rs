use leptos::prelude::*;

use crate::portfolio::Section;
use crate::profile::{AboutCard, Profile, Skill};

#[component]
pub fn About(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="min-h-screen flex items-center justify-center px-6 py-20">
            <div class="max-w-6xl w-full z-10">
                <h2 class="text-5xl font-bold mb-12 text-center bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                    "About Me"
                </h2>
                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        {profile.about.iter().map(|card| view! { <Card card /> }).collect_view()}
                    </div>
                    <div class="space-y-4">
                        <h3 class="text-2xl font-bold mb-6">"Skills & Expertise"</h3>
                        {profile.skills.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Card(card: &'static AboutCard) -> impl IntoView {
    view! {
        <div class="bg-white/5 backdrop-blur-sm rounded-2xl p-8 border border-white/10 hover:border-purple-500/50 transition-all">
            <div class="text-5xl mb-4">{card.icon.clone()}</div>
            <h3 class="text-2xl font-bold mb-4">{card.title.clone()}</h3>
            <p class="text-gray-400 leading-relaxed">{card.body.clone()}</p>
        </div>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <div class="flex justify-between text-sm">
                <span>{skill.name.clone()}</span>
                <span class="text-purple-400">{skill.level.label()}</span>
            </div>
            <div class="h-2 bg-white/10 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-purple-500 to-pink-500 rounded-full transition-all duration-1000"
                    style=skill.level.width_style()
                />
            </div>
        </div>
    }
}
