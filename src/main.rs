//! Shake Sort entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use shake_sort::Settings;
    use shake_sort::audio::{AudioManager, SoundEffect};
    use shake_sort::platform::web::{ContainerShake, TimerText, now_ms};
    use shake_sort::renderer::canvas::CanvasSurface;
    use shake_sort::renderer::{Layout, render_frame};
    use shake_sort::sim::{GameEvent, GameSession};

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        settings: Settings,
        layout: Layout,
        surface: CanvasSurface,
        container: ContainerShake,
        timer_text: TimerText,
        audio: AudioManager,
        /// Stopwatch interval callback, installed while the timer runs
        tick_fn: Option<js_sys::Function>,
        interval_id: Option<i32>,
    }

    impl Game {
        /// Run after every input callback: sounds, readout, timer schedule
        fn after_input(&mut self) {
            for event in self.session.drain_events() {
                if let GameEvent::Won {
                    elapsed_ms,
                    shuffles,
                } = event
                {
                    log::info!("Won in {:.0}ms ({} shuffles)", elapsed_ms, shuffles);
                }
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
            }
            self.timer_text.set(self.session.timer().display());
            self.sync_timer();
        }

        /// Keep the recurring tick installed exactly while the stopwatch runs
        fn sync_timer(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let running = self.session.timer().is_running();
            match (running, self.interval_id) {
                (true, None) => {
                    if let Some(tick_fn) = &self.tick_fn {
                        self.interval_id = window
                            .set_interval_with_callback_and_timeout_and_arguments_0(
                                tick_fn,
                                self.settings.timer_interval_ms,
                            )
                            .ok();
                    }
                }
                (false, Some(id)) => {
                    window.clear_interval_with_handle(id);
                    self.interval_id = None;
                }
                _ => {}
            }
        }

        fn on_timer_tick(&mut self) {
            if self.session.timer_tick(now_ms()) {
                self.timer_text.set(self.session.timer().display());
            }
            if !self.session.timer().is_running() {
                self.sync_timer();
            }
        }

        fn frame(&mut self) {
            render_frame(
                &mut self.session,
                &self.layout,
                &mut self.surface,
                &mut self.container,
            );
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Shake Sort starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let settings = Settings::load();
        // Write back the sanitized copy so the stored key is always well-formed
        settings.save();
        let seed = js_sys::Date::now() as u64;
        let mut session = GameSession::new(seed);
        settings.apply_to(&mut session);
        log::info!("Session created with seed: {}", seed);

        let timer_text = TimerText::new(&document, "timer");
        timer_text.set(session.timer().display());

        let game = Rc::new(RefCell::new(Game {
            session,
            layout: Layout::new(canvas.width() as f64, canvas.height() as f64),
            surface: CanvasSurface::new(ctx),
            container: ContainerShake::new(&document, "game-container", settings.effective_shake()),
            timer_text,
            audio: AudioManager::new(settings.effective_volume()),
            settings,
            tick_fn: None,
            interval_id: None,
        }));

        // Stopwatch tick, reused every time a game starts
        {
            let game_tick = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                game_tick.borrow_mut().on_timer_tick();
            });
            let tick_fn: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
            game.borrow_mut().tick_fn = Some(tick_fn);
            closure.forget();
        }

        setup_input_handlers(&canvas, game.clone())?;
        setup_reset_button(game.clone());

        // Start render loop
        request_animation_frame(game);

        log::info!("Shake Sort running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;

        // Click: button = primary action, elsewhere = shake
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left();
                let y = event.client_y() as f64 - rect.top();
                let mut g = game.borrow_mut();
                let on_button = g.layout.hit_button(x, y);
                g.session.on_click(on_button, now_ms());
                g.after_input();
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key down: any key shakes, Escape resets
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if event.key() == "Escape" {
                    g.session.reset_to_initial();
                } else {
                    g.session.on_key_down(now_ms());
                }
                g.after_input();
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up: release the held-key latch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: KeyboardEvent| {
                game.borrow_mut().session.on_key_up();
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_reset_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.session.reset_to_initial();
                g.after_input();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // Handed to JS as a one-shot function that frees itself after it runs
        let callback = Closure::once_into_js(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(callback.unchecked_ref());
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Shake Sort (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Headless demo: keep shaking seeded games until they land sorted
    println!("\nPlaying demo games...");
    for seed in 1..=3 {
        demo_game(seed);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_game(seed: u64) {
    use shake_sort::sim::{GameEvent, GamePhase, GameSession};

    /// Simulated gap between shakes (ms)
    const SHAKE_GAP_MS: f64 = 120.0;
    const MAX_SHAKES: u32 = 10_000;

    let mut session = GameSession::new(seed);
    let mut now = 0.0;
    session.on_primary_action(now);

    while session.phase() == GamePhase::Active && session.shuffles() < MAX_SHAKES {
        now += SHAKE_GAP_MS;
        session.advance_frame();
        session.on_player_input(now);
    }

    let won = session.drain_events().into_iter().find_map(|e| match e {
        GameEvent::Won { shuffles, .. } => Some(shuffles),
        _ => None,
    });
    match won {
        Some(shuffles) => println!(
            "✓ seed {seed}: sorted in {} after {shuffles} shakes",
            session.timer().display()
        ),
        None => println!("✗ seed {seed}: gave up after {MAX_SHAKES} shakes"),
    }
}
