use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
};

use crate::portfolio::{Action, ContactForm, FormField, Section};
use crate::profile::ContactInfo;

const INPUT_CLASS: &str = "w-full px-6 py-4 bg-white/5 border border-white/10 rounded-xl focus:border-purple-500 focus:outline-none transition-all";

#[component]
pub fn Contact(
    contact: &'static ContactInfo,
    #[prop(into)] form: Signal<ContactForm>,
    dispatch: Callback<Action>,
) -> impl IntoView {
    let value = move |field: FormField| form.with(|f| f.get(field).to_string());
    let on_input = move |field: FormField| {
        move |ev: Event| dispatch.run(Action::FieldChanged(field, event_target_value(&ev)))
    };

    view! {
        <section id=Section::Contact.id() class="min-h-screen flex items-center justify-center px-6 py-20">
            <div class="max-w-2xl w-full z-10 text-center">
                <h2 class="text-5xl font-bold mb-6 bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                    {contact.heading.clone()}
                </h2>
                <p class="text-xl text-gray-400 mb-12">{contact.blurb.clone()}</p>
                <div class="bg-white/5 backdrop-blur-sm rounded-2xl p-8 border border-white/10">
                    // novalidate: the demo accepts any input, including empty fields
                    <form
                        class="space-y-6"
                        novalidate=true
                        on:submit=move |ev: SubmitEvent| {
                            ev.prevent_default();
                            dispatch.run(Action::Submit);
                        }
                    >
                        <input
                            type="text"
                            placeholder="Your Name"
                            class=INPUT_CLASS
                            prop:value=move || value(FormField::Name)
                            on:input=on_input(FormField::Name)
                        />
                        <input
                            type="email"
                            placeholder="Your Email"
                            class=INPUT_CLASS
                            prop:value=move || value(FormField::Email)
                            on:input=on_input(FormField::Email)
                        />
                        <textarea
                            placeholder="Your Message"
                            rows="6"
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=move || value(FormField::Message)
                            on:input=on_input(FormField::Message)
                        />
                        <button
                            type="submit"
                            class="w-full px-8 py-4 bg-gradient-to-r from-purple-500 to-pink-500 rounded-xl font-bold hover:shadow-lg hover:shadow-purple-500/50 transition-all hover:scale-105"
                        >
                            "Send Message"
                        </button>
                    </form>
                </div>
                <div class="mt-8 flex gap-6 justify-center">
                    <a href=contact.mailto() class="text-gray-400 hover:text-purple-400 transition-all">
                        {contact.email.clone()}
                    </a>
                </div>
            </div>
        </section>
    }
}
