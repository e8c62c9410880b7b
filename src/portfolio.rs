//! View state for the portfolio page.
//!
//! Every browser input becomes an [`Action`]. [`ViewState::update`] applies it and may hand back
//! an [`Effect`] for the presentation layer to run against the page (scrolling, notifications).
//! Nothing in here touches the DOM, so it all runs under plain `cargo test`.

use log::{debug, info};

/// Vertical offset (px) past which the nav bar gets its backdrop.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Half the size of the cursor-following blob, so it stays centred on the pointer.
pub const BLOB_RADIUS: f64 = 192.0;

pub const DEMO_ACKNOWLEDGEMENT: &str = "Message sent! (This is a demo)";

const NAV_BASE: &str = "fixed top-0 w-full z-50 transition-all duration-300";
const NAV_SCROLLED: &str = "bg-gray-900/95 backdrop-blur-md shadow-lg";
const NAV_ITEM_BASE: &str = "capitalize transition-all hover:text-purple-400";
const NAV_ITEM_ACTIVE: &str = "text-purple-400";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::About, Section::Contact];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

/// Last seen pointer position in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

impl PointerState {
    pub fn blob_style(&self) -> String {
        format!(
            "left: {}px; top: {}px; transition: all 0.3s ease-out",
            self.x - BLOB_RADIUS,
            self.y - BLOB_RADIUS
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Scrolled(f64),
    PointerMoved { x: f64, y: f64 },
    Navigate(Section),
    FieldChanged(FormField, String),
    Submit,
}

/// Side effects requested by a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ScrollIntoView(Section),
    Notify(&'static str),
}

/// The parts of the page a transition can reach out to.
pub trait Browser {
    /// Smooth-scrolls the element with `id` into view. Returns `false` when there is no such
    /// element.
    fn scroll_into_view(&self, id: &str) -> bool;

    fn alert(&self, text: &str);
}

impl Effect {
    pub fn apply<B: Browser>(self, browser: &B) {
        match self {
            Effect::ScrollIntoView(section) => {
                if !browser.scroll_into_view(section.id()) {
                    debug!("no element with id '{}', skipping scroll", section.id());
                }
            }
            Effect::Notify(text) => browser.alert(text),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    active_section: Section,
    is_scrolled: bool,
    pointer: PointerState,
    form: ContactForm,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn update(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Scrolled(offset) => {
                self.on_scroll(offset);
                None
            }
            Action::PointerMoved { x, y } => {
                self.on_pointer_move(x, y);
                None
            }
            Action::Navigate(section) => Some(self.navigate_to(section)),
            Action::FieldChanged(field, value) => {
                self.on_form_field_change(field, value);
                None
            }
            Action::Submit => Some(self.submit()),
        }
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.is_scrolled = offset > SCROLL_THRESHOLD;
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = PointerState { x, y };
    }

    /// The section becomes active even if the scroll it asks for cannot happen.
    pub fn navigate_to(&mut self, section: Section) -> Effect {
        debug!("navigating to {:?}", section);
        self.active_section = section;
        Effect::ScrollIntoView(section)
    }

    pub fn on_form_field_change(&mut self, field: FormField, value: String) {
        *self.form.field_mut(field) = value;
    }

    /// Demo submit: nothing is delivered anywhere, the form is just cleared.
    pub fn submit(&mut self) -> Effect {
        let form = std::mem::take(&mut self.form);
        info!(
            "contact form submitted (demo, not delivered): name={} email={} message={} chars",
            form.name.chars().count(),
            form.email.chars().count(),
            form.message.chars().count()
        );
        Effect::Notify(DEMO_ACKNOWLEDGEMENT)
    }
}

pub fn nav_class(is_scrolled: bool) -> String {
    if is_scrolled {
        format!("{NAV_BASE} {NAV_SCROLLED}")
    } else {
        NAV_BASE.to_string()
    }
}

pub fn nav_item_class(section: Section, active: Section) -> String {
    if section == active {
        format!("{NAV_ITEM_BASE} {NAV_ITEM_ACTIVE}")
    } else {
        NAV_ITEM_BASE.to_string()
    }
}
