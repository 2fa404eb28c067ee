//! Scratch promo entry point
//!
//! Handles platform-specific initialization and wires the widget to the page.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_widget {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement,
        HtmlImageElement, MouseEvent, Touch, TouchEvent,
    };

    use scratch_promo::consts::*;
    use scratch_promo::fx::{self, Countdown, CountdownDisplay, RngState, ScratchSession};
    use scratch_promo::timers::{IntervalHandle, TimeoutHandle};
    use scratch_promo::{RevealFlag, Settings};

    /// Widget instance holding all state
    struct Widget {
        session: ScratchSession,
        settings: Settings,
        flag: RevealFlag,
        rng: Pcg32,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        countdown: Option<Countdown>,
        countdown_timer: Option<IntervalHandle>,
        burst_timer: Option<IntervalHandle>,
        burst_stop: Option<TimeoutHandle>,
    }

    impl Widget {
        /// Sample the overlay alpha channel and advance the reveal state.
        /// Returns true when this sample crossed the reveal threshold.
        fn sample_reveal(&mut self) -> bool {
            let w = self.canvas.width() as f64;
            let h = self.canvas.height() as f64;
            let image = match self.ctx.get_image_data(0.0, 0.0, w, h) {
                Ok(image) => image,
                Err(_) => return false,
            };
            let data = image.data();
            self.session.check_reveal_threshold(&data)
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Scratch promo widget starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let mut rng = RngState::new(seed).to_rng();
        log::info!("Widget initialized with seed: {}", seed);

        if settings.reduced_motion {
            log::info!("Reduced motion enabled, skipping decorations");
        } else {
            spawn_decorations(&document, &mut rng);
        }

        init_scratch_card(&document, settings, rng);

        log::info!("Scratch promo widget running!");
    }

    fn spawn_decorations(document: &Document, rng: &mut Pcg32) {
        let container = match document.get_element_by_id("coinContainer") {
            Some(el) => el,
            None => {
                log::error!("Coin container not found");
                return;
            }
        };

        for decoration in fx::generate_decorations(DECOR_COUNT, rng) {
            let img: HtmlImageElement = match document
                .create_element("img")
                .ok()
                .and_then(|el| el.dyn_into().ok())
            {
                Some(img) => img,
                None => continue,
            };
            let _ = img.class_list().add_1("coin-floating");
            img.set_src(&encode_asset(decoration.image));
            img.set_alt("Bonus Coin");

            let style = img.style();
            let _ = style.set_property("width", &format!("{}px", decoration.size));
            let _ = style.set_property("left", &format!("{}%", decoration.x));
            let _ = style.set_property("top", &format!("{}%", decoration.y));
            let _ = style.set_property("animation", &decoration.animation_value());
            let _ = style.set_property("opacity", &decoration.opacity.to_string());

            let _ = container.append_child(&img);
        }

        log::info!("Spawned {} floating coins", DECOR_COUNT);
    }

    /// Percent-encode an asset name before using it as a src reference
    fn encode_asset(name: &str) -> String {
        js_sys::encode_uri_component(name)
            .as_string()
            .unwrap_or_else(|| name.to_string())
    }

    fn init_scratch_card(document: &Document, settings: Settings, rng: Pcg32) {
        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("scratchCanvas")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => return,
        };
        let ctx = match context_2d(&canvas) {
            Some(ctx) => ctx,
            None => return,
        };

        let flag = RevealFlag::load();
        let already_revealed = flag.is_revealed();

        let widget = Rc::new(RefCell::new(Widget {
            session: ScratchSession::new(already_revealed),
            settings,
            flag,
            rng,
            canvas: canvas.clone(),
            ctx,
            countdown: None,
            countdown_timer: None,
            burst_timer: None,
            burst_stop: None,
        }));

        if already_revealed {
            // Returning visitor: the card stays hidden, only the toast runs
            let _ = canvas.style().set_property("display", "none");
            log::info!("Bonus already revealed in a previous session");
            celebrate(&widget, false);
            return;
        }

        size_to_parent(&canvas);
        {
            let wgt = widget.borrow();
            paint_overlay(&wgt.ctx, canvas.width() as f64, canvas.height() as f64);
        }
        setup_input_handlers(&canvas, widget);
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
        canvas.get_context("2d").ok()??.dyn_into().ok()
    }

    fn size_to_parent(canvas: &HtmlCanvasElement) {
        if let Some(parent) = canvas
            .parent_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            canvas.set_width(parent.offset_width().max(0) as u32);
            canvas.set_height(parent.offset_height().max(0) as u32);
        }
    }

    fn paint_overlay(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
        // Fallback silver
        ctx.set_fill_style_str("#C0C0C0");
        if let Ok(gradient) = ctx.create_linear_gradient(0.0, 0.0, width, height) {
            let _ = gradient.add_color_stop(0.0, "#9E9E9E");
            let _ = gradient.add_color_stop(0.5, "#E0E0E0");
            let _ = gradient.add_color_stop(1.0, "#9E9E9E");
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
        ctx.fill_rect(0.0, 0.0, width, height);

        ctx.set_font("bold 20px Montserrat");
        ctx.set_fill_style_str("#555");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let _ = ctx.fill_text("SCRATCH ME", width / 2.0, height / 2.0);

        ctx.set_line_width(30.0);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, widget: Rc<RefCell<Widget>>) {
        // Mouse press starts scratching immediately
        {
            let widget = widget.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                widget.borrow_mut().session.press();
                let pos = mouse_pos(&canvas_clone, &event);
                scratch_at(&widget, pos, &event);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move
        {
            let widget = widget.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = mouse_pos(&canvas_clone, &event);
                scratch_at(&widget, pos, &event);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse release, also when the pointer leaves the card
        for event_name in ["mouseup", "mouseleave"] {
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                widget.borrow_mut().session.release();
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let widget = widget.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                widget.borrow_mut().session.press();
                if let Some(touch) = event.touches().get(0) {
                    let pos = touch_pos(&canvas_clone, &touch);
                    scratch_at(&widget, pos, &event);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let widget = widget.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let pos = touch_pos(&canvas_clone, &touch);
                    scratch_at(&widget, pos, &event);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let widget = widget.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                widget.borrow_mut().session.release();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Mouse event position relative to the canvas origin
    fn mouse_pos(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            event.client_x() as f32 - rect.left() as f32,
            event.client_y() as f32 - rect.top() as f32,
        )
    }

    /// Touch position relative to the canvas origin
    fn touch_pos(canvas: &HtmlCanvasElement, touch: &Touch) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            touch.client_x() as f32 - rect.left() as f32,
            touch.client_y() as f32 - rect.top() as f32,
        )
    }

    /// Erase one circle if the session allows it, then re-check progress
    fn scratch_at(widget: &Rc<RefCell<Widget>>, pos: Vec2, event: &web_sys::Event) {
        let mut wgt = widget.borrow_mut();
        if let Some(point) = wgt.session.attempt_erase(pos) {
            // Prevent scrolling on mobile while actively scratching
            event.prevent_default();
            erase_circle(&wgt.ctx, point);
            if wgt.sample_reveal() {
                drop(wgt);
                finish_reveal(widget);
            }
        }
    }

    fn erase_circle(ctx: &CanvasRenderingContext2d, point: Vec2) {
        let _ = ctx.set_global_composite_operation("destination-out");
        ctx.begin_path();
        let _ = ctx.arc(
            point.x as f64,
            point.y as f64,
            ERASE_RADIUS,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }

    fn finish_reveal(widget: &Rc<RefCell<Widget>>) {
        {
            let mut wgt = widget.borrow_mut();
            wgt.flag.mark_revealed();
            wgt.flag.save();

            // Fade the overlay out, then take it out of the layout
            let style = wgt.canvas.style();
            let _ = style.set_property("transition", "opacity 0.5s");
            let _ = style.set_property("opacity", "0");

            if let Some(window) = web_sys::window() {
                let canvas = wgt.canvas.clone();
                let hide = Closure::once_into_js(move || {
                    let _ = canvas.style().set_property("display", "none");
                });
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    hide.unchecked_ref(),
                    FADE_OUT_MS,
                );
            }
        }

        log::info!("Scratch card revealed");
        celebrate(widget, true);
    }

    fn celebrate(widget: &Rc<RefCell<Widget>>, with_fireworks: bool) {
        if with_fireworks {
            if widget.borrow().settings.effective_fireworks() {
                start_fireworks(widget);
            } else {
                log::info!("Fireworks suppressed by settings");
            }
        }
        show_toast(widget);
    }

    fn show_toast(widget: &Rc<RefCell<Widget>>) {
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document,
            None => return,
        };
        let toast = match document.get_element_by_id("bottomToast") {
            Some(el) => el,
            None => return,
        };
        let _ = toast.class_list().add_1("show");
        start_countdown(widget, TOAST_SECONDS);
    }

    /// Start (or restart) the toast countdown. Replacing the stored handle
    /// cancels any interval from a previous start.
    fn start_countdown(widget: &Rc<RefCell<Widget>>, seconds: u32) {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let display = match window
            .document()
            .and_then(|d| d.get_element_by_id("countdown"))
        {
            Some(el) => el,
            None => return,
        };

        let tick = {
            let widget = widget.clone();
            Closure::wrap(Box::new(move || {
                let mut wgt = widget.borrow_mut();
                let state = match wgt.countdown.as_mut() {
                    Some(countdown) => countdown.tick(),
                    None => return,
                };
                display.set_text_content(Some(state.text()));
                if state == CountdownDisplay::Expired {
                    if let Some(timer) = wgt.countdown_timer.take() {
                        timer.cancel();
                    }
                    wgt.countdown = None;
                    log::info!("Countdown expired");
                }
            }) as Box<dyn FnMut()>)
        };

        let handle = IntervalHandle::new(&window, tick, 1000);
        let mut wgt = widget.borrow_mut();
        wgt.countdown = Some(Countdown::new(seconds));
        wgt.countdown_timer = handle;
        log::info!("Countdown started ({} s)", seconds);
    }

    fn start_fireworks(widget: &Rc<RefCell<Widget>>) {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let document = match window.document() {
            Some(document) => document,
            None => return,
        };
        let wrapper = match document.query_selector(".scratch-wrapper").ok().flatten() {
            Some(el) => el,
            None => return,
        };

        log::info!("Launching fireworks");
        spawn_burst(&document, &wrapper, widget);

        let repeat = {
            let widget = widget.clone();
            let document = document.clone();
            let wrapper = wrapper.clone();
            Closure::wrap(Box::new(move || {
                spawn_burst(&document, &wrapper, &widget);
            }) as Box<dyn FnMut()>)
        };
        let burst_timer = IntervalHandle::new(&window, repeat, BURST_INTERVAL_MS);

        let stop = {
            let widget = widget.clone();
            Closure::wrap(Box::new(move || {
                let mut wgt = widget.borrow_mut();
                if let Some(timer) = wgt.burst_timer.take() {
                    timer.cancel();
                }
                // Release the fired stop handle as well
                let _ = wgt.burst_stop.take();
                log::info!("Fireworks finished");
            }) as Box<dyn FnMut()>)
        };
        let burst_stop = TimeoutHandle::new(&window, stop, FIREWORKS_DURATION_MS);

        let mut wgt = widget.borrow_mut();
        wgt.burst_timer = burst_timer;
        wgt.burst_stop = burst_stop;
    }

    /// Spawn one burst of particle divs at the wrapper's current center
    fn spawn_burst(document: &Document, wrapper: &Element, widget: &Rc<RefCell<Widget>>) {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let body = match document.body() {
            Some(body) => body,
            None => return,
        };

        let rect = wrapper.get_bounding_client_rect();
        let origin = Vec2::new(
            (rect.left() + rect.width() / 2.0) as f32,
            (rect.top() + rect.height() / 2.0) as f32,
        );
        let particles = {
            let mut wgt = widget.borrow_mut();
            fx::burst(origin, &mut wgt.rng)
        };

        for particle in &particles {
            let el: HtmlElement = match document
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into().ok())
            {
                Some(el) => el,
                None => continue,
            };
            let _ = el.class_list().add_1("particle");

            let style = el.style();
            let _ = style.set_property("background-color", particle.color);
            let _ = style.set_property("width", &format!("{}px", particle.size));
            let _ = style.set_property("height", &format!("{}px", particle.size));
            let _ = style.set_property("border-radius", "50%");
            let _ = style.set_property("left", &format!("{}px", particle.pos.x));
            let _ = style.set_property("top", &format!("{}px", particle.pos.y));
            let _ = style.set_property("--tx", &format!("{}px", particle.vel.x));
            let _ = style.set_property("--ty", &format!("{}px", particle.vel.y));

            if body.append_child(&el).is_err() {
                continue;
            }

            // Each particle removes itself after its animation is done
            let remove = Closure::once_into_js(move || {
                el.remove();
            });
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref(),
                PARTICLE_LIFETIME_MS,
            );
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_widget::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Scratch promo (native) starting...");
    log::info!("Native mode is a headless check of the effect logic - run with `trunk serve` for the web widget");

    // Run checks
    println!("\nRunning widget smoke pass...");
    smoke_decorations();
    smoke_scratch_reveal();
    smoke_countdown();
    smoke_fireworks();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_decorations() {
    use scratch_promo::consts::*;
    use scratch_promo::fx::{RngState, generate_decorations};

    let mut rng = RngState::new(7).to_rng();
    let decorations = generate_decorations(DECOR_COUNT, &mut rng);
    assert_eq!(decorations.len(), DECOR_COUNT);
    for d in &decorations {
        assert!(d.size >= DECOR_SIZE_MIN && d.size < DECOR_SIZE_MAX);
        assert!(d.opacity >= DECOR_OPACITY_MIN && d.opacity < DECOR_OPACITY_MAX);
    }
    println!("✓ Decoration generation ok ({} coins)", decorations.len());
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_scratch_reveal() {
    use glam::Vec2;
    use scratch_promo::fx::ScratchSession;

    let mut session = ScratchSession::new(false);
    session.press();
    assert!(session.attempt_erase(Vec2::new(5.0, 5.0)).is_some());

    // A fully transparent overlay crosses the threshold at once
    let cleared = vec![0u8; 40 * 40];
    assert!(session.check_reveal_threshold(&cleared));
    assert!(!session.check_reveal_threshold(&cleared));
    println!("✓ Scratch reveal transition ok");
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_countdown() {
    use scratch_promo::fx::{Countdown, CountdownDisplay};

    let mut countdown = Countdown::new(90);
    assert_eq!(countdown.tick().text(), "01:29");
    for _ in 1..89 {
        countdown.tick();
    }
    assert_eq!(countdown.tick(), CountdownDisplay::Expired);
    println!("✓ Countdown ok");
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_fireworks() {
    use glam::Vec2;
    use scratch_promo::consts::*;
    use scratch_promo::fx::{RngState, burst, burst_schedule};

    let mut rng = RngState::new(11).to_rng();
    let particles = burst(Vec2::new(160.0, 120.0), &mut rng);
    assert_eq!(particles.len(), BURST_PARTICLES);

    let schedule = burst_schedule(FIREWORKS_DURATION_MS as u32, BURST_INTERVAL_MS as u32);
    assert_eq!(schedule.len(), 17);
    println!(
        "✓ Fireworks ok ({} bursts of {} particles)",
        schedule.len(),
        particles.len()
    );
}
