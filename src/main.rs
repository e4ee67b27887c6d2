//! Flitter entry point
//!
//! Owns all browser glue: logger setup, mobile gate, DOM lookups, keyboard
//! and resize listeners, and the requestAnimationFrame loop that drives the
//! simulation one tick per frame.
//!
//! Expected host page elements: `#playground` (the viewport), `#fly` (the
//! entity, positioned absolutely), `#mobile-warning` (small-screen overlay)
//! with an optional `#dismiss-warning` button, and optionally `#hud-fps`
//! for the FPS readout.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlElement};

    use flitter::Settings;
    use flitter::platform;
    use flitter::sim::{Direction, FlyState, InputState, tick};

    /// Everything the frame loop and the event handlers share
    struct App {
        state: FlyState,
        input: InputState,
        settings: Settings,
        playground: Element,
        fly: HtmlElement,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        fn new(playground: Element, fly: HtmlElement, settings: Settings) -> Self {
            let bounds = playground_bounds(&playground);
            Self {
                state: FlyState::new(bounds),
                input: InputState::default(),
                settings,
                playground,
                fly,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Advance one tick and push the new position into the DOM
        fn frame(&mut self, time: f64) {
            tick(&mut self.state, &self.input);
            self.render();
            self.track_fps(time);
        }

        /// Write the authoritative position into the fly element's style
        fn render(&self) {
            let style = self.fly.style();
            let _ = style.set_property("left", &format!("{}px", self.state.pos.x));
            let _ = style.set_property("top", &format!("{}px", self.state.pos.y));
        }

        fn on_resize(&mut self) {
            let bounds = playground_bounds(&self.playground);
            self.state.resize(bounds);
            self.render();
            log::info!("Playground resized to {}x{}", bounds.x, bounds.y);
        }

        /// Rolling 60-frame FPS, shown in the HUD when enabled
        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }

            if self.settings.show_fps {
                let el = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("hud-fps"));
                if let Some(el) = el {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }
        }
    }

    /// Current viewport extent, read from the playground's client size
    fn playground_bounds(playground: &Element) -> Vec2 {
        Vec2::new(
            playground.client_width() as f32,
            playground.client_height() as f32,
        )
    }

    /// Set an element's CSS display value, ignoring failures
    fn set_display(element: &Element, value: &str) {
        if let Ok(html) = element.clone().dyn_into::<HtmlElement>() {
            let _ = html.style().set_property("display", value);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flitter starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();

        // Small screens get a warning overlay instead of a keyboard toy
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0) as i32;
        if settings.mobile_warning && platform::is_mobile_device(&user_agent, viewport_width) {
            if let Some(warning) = document.get_element_by_id("mobile-warning") {
                set_display(&warning, "flex");
            }
            if let Some(playground) = document.get_element_by_id("playground") {
                set_display(&playground, "none");
            }
            setup_dismiss_warning_button(&document);
            log::warn!("Mobile device detected, not starting the simulation");
            return;
        }

        let playground = document
            .get_element_by_id("playground")
            .expect("no playground element");
        let fly: HtmlElement = document
            .get_element_by_id("fly")
            .expect("no fly element")
            .dyn_into()
            .expect("fly is not an html element");

        let app = Rc::new(RefCell::new(App::new(playground, fly, settings)));
        app.borrow().render();

        setup_input_handlers(app.clone());
        setup_resize_handler(app.clone());

        // Start the frame loop
        request_animation_frame(app);

        log::info!("Flitter running!");
    }

    /// "Continue anyway" on the mobile warning: remember the choice, reload
    fn setup_dismiss_warning_button(document: &web_sys::Document) {
        if let Some(btn) = document.get_element_by_id("dismiss-warning") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut settings = Settings::load();
                settings.mobile_warning = false;
                settings.save();
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key press
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(direction) = Direction::from_key(&event.key()) {
                    app.borrow_mut().input.set(direction, true);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key release
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(direction) = Direction::from_key(&event.key()) {
                    app.borrow_mut().input.set(direction, false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().on_resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flitter (native) starting...");
    log::info!("Browser-only toy - run with `trunk serve` for the web version");

    println!("\nRunning headless sim check...");
    headless_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_check() {
    use flitter::consts::FLY_SIZE;
    use flitter::sim::{FlyState, InputState, tick};
    use glam::Vec2;

    let bounds = Vec2::new(400.0, 300.0);
    let mut state = FlyState::new(bounds);
    let input = InputState::default();
    for _ in 0..240 {
        tick(&mut state, &input);
    }
    assert!(state.pos.y <= bounds.y - FLY_SIZE, "fly escaped the floor");
    println!("✓ Fly settled at ({:.1}, {:.1})", state.pos.x, state.pos.y);
}
