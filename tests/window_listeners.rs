#![cfg(all(feature = "hydrate", target_arch = "wasm32"))]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use leptos::prelude::*;
use portfolio_site::{app::use_window_listeners, portfolio::Action};
use wasm_bindgen_test::*;
use web_sys::{Event, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn fire_scroll() {
    let event = Event::new("scroll").expect("should be able to create scroll event");
    window()
        .dispatch_event(&event)
        .expect("should be able to dispatch scroll event");
}

fn fire_mousemove(x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init)
        .expect("should be able to create mousemove event");
    window()
        .dispatch_event(&event)
        .expect("should be able to dispatch mousemove event");
}

#[wasm_bindgen_test]
fn test_listeners_forward_window_events() {
    let seen = Arc::new(Mutex::new(Vec::<Action>::new()));
    let owner = Owner::new();
    owner.with(|| {
        let seen = Arc::clone(&seen);
        let dispatch = Callback::new(move |action: Action| {
            seen.lock().expect("should be able to lock").push(action);
        });
        use_window_listeners(dispatch);
    });

    fire_scroll();
    fire_mousemove(12, 34);

    let seen = seen.lock().expect("should be able to lock");
    assert_eq!(seen.len(), 2);
    assert!(matches!(seen[0], Action::Scrolled(_)));
    assert_eq!(seen[1], Action::PointerMoved { x: 12.0, y: 34.0 });
    drop(seen);
    owner.cleanup();
}

#[wasm_bindgen_test]
fn test_listeners_detach_on_owner_cleanup() {
    let count = Arc::new(AtomicUsize::new(0));
    let owner = Owner::new();
    owner.with(|| {
        let count = Arc::clone(&count);
        let dispatch = Callback::new(move |_: Action| {
            count.fetch_add(1, Ordering::SeqCst);
        });
        use_window_listeners(dispatch);
    });

    fire_scroll();
    fire_mousemove(1, 1);
    assert_eq!(count.load(Ordering::SeqCst), 2);

    owner.cleanup();

    fire_scroll();
    fire_mousemove(2, 2);
    assert_eq!(count.load(Ordering::SeqCst), 2);
}
