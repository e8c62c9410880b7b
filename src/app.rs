mod about;
mod background;
mod contact;
mod hero;
mod nav;

use leptos::{either::Either, ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_window};

use crate::portfolio::{Action, Browser, ViewState};
use crate::profile::{Profile, PROFILE};

use about::About;
use background::Background;
use contact::Contact;
use hero::Hero;
use nav::NavBar;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match &*PROFILE {
        Ok(profile) => Either::Left(view! { <PortfolioPage profile /> }),
        Err(e) => {
            log::error!("couldn't load profile: {}", e);
            Either::Right(view! {
                <Title text="Portfolio" />
                <main class="min-h-screen flex items-center justify-center bg-gray-900 text-white">
                    <p class="text-red-400">{format!("Couldn't load profile: {}", e)}</p>
                </main>
            })
        }
    }
}

/// Effects run against the live document. Only reached from event handlers, so only in the
/// browser.
struct Page;

impl Browser for Page {
    fn scroll_into_view(&self, id: &str) -> bool {
        match document().get_element_by_id(id) {
            Some(el) => {
                // smoothing comes from `scroll-smooth` on <html>
                el.scroll_into_view();
                true
            }
            None => false,
        }
    }

    fn alert(&self, text: &str) {
        if let Err(e) = window().alert_with_message(text) {
            log::warn!("couldn't show alert: {:?}", e);
        }
    }
}

/// Forwards window scroll and pointer movement to `dispatch`. Both listeners are removed when
/// the calling owner is disposed.
pub fn use_window_listeners(dispatch: Callback<Action>) {
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        dispatch.run(Action::Scrolled(offset));
    });
    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        dispatch.run(Action::PointerMoved {
            x: f64::from(ev.client_x()),
            y: f64::from(ev.client_y()),
        });
    });
}

#[component]
fn PortfolioPage(profile: &'static Profile) -> impl IntoView {
    let state = RwSignal::new(ViewState::new());
    let dispatch = Callback::new(move |action: Action| {
        let effect = state.try_update(|s| s.update(action)).flatten();
        if let Some(effect) = effect {
            effect.apply(&Page);
        }
    });

    use_window_listeners(dispatch);

    let is_scrolled = Memo::new(move |_| state.with(|s| s.is_scrolled()));
    let active = Memo::new(move |_| state.with(|s| s.active_section()));
    let pointer = Memo::new(move |_| state.with(|s| s.pointer()));
    let form = Memo::new(move |_| state.with(|s| s.form().clone()));

    view! {
        <Title text=profile.name.clone() />
        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-purple-900 to-gray-900 text-white overflow-hidden">
            <Background pointer />
            <NavBar initials=profile.initials.clone() is_scrolled active dispatch />
            <Hero profile dispatch />
            <About profile />
            <Contact contact=&profile.contact form dispatch />
            <Footer text=profile.copyright(env!("BUILD_YEAR")) />
        </div>
    }
}

#[component]
fn Footer(text: String) -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-gray-400 border-t border-white/10">
            <p>{text}</p>
        </footer>
    }
}
