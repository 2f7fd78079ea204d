//! Cube Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use cube_runner::input::{self, Action, InputState};
    use cube_runner::renderer::vertex::colors;
    use cube_runner::renderer::{RenderState, overlay_text, score_text, status_text};
    use cube_runner::{FrameClock, Session, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session,
        render_state: Option<RenderState>,
        input: InputState,
        clock: FrameClock,
        /// Last (score, status) pushed to the DOM
        last_hud: Option<(u32, cube_runner::sim::GameStatus)>,
    }

    impl Game {
        fn new(tuning: Tuning) -> Self {
            Self {
                session: Session::new(tuning),
                render_state: None,
                input: InputState::new(),
                clock: FrameClock::new(),
                last_hud: None,
            }
        }

        /// Run the simulation steps due for this frame
        fn update(&mut self, time: f64) {
            let steps = self.clock.advance(time);
            for _ in 0..steps {
                let snapshot = self.input.snapshot();
                self.session.tick(&snapshot);
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.session.view()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let hud = (self.session.score(), self.session.status());
            if self.last_hud == Some(hud) {
                return;
            }
            self.last_hud = Some(hud);
            let (score, status) = hud;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&score_text(score)));
            }
            if let Some(el) = document.get_element_by_id("status") {
                el.set_text_content(Some(status_text(status)));
            }

            let Some(overlay) = document.get_element_by_id("overlay") else {
                return;
            };
            match overlay_text(status, score) {
                Some(text) => {
                    let _ = overlay.set_attribute("class", "");
                    if let Some(title) = document.get_element_by_id("overlay-title") {
                        title.set_text_content(Some(text.title));
                        let _ = title.set_attribute(
                            "style",
                            &format!("color: {}", colors::css(text.title_color)),
                        );
                    }
                    if let Some(lines) = document.get_element_by_id("overlay-lines") {
                        lines.set_text_content(Some(&text.lines.join("\n")));
                        let _ = lines.set_attribute(
                            "style",
                            &format!("color: {}", colors::css(colors::OVERLAY_TEXT)),
                        );
                    }
                }
                None => {
                    let _ = overlay.set_attribute("class", "hidden");
                }
            }
        }
    }

    /// Tuning overrides from the canvas's `data-tuning` attribute
    fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
        let Some(json) = canvas.get_attribute("data-tuning") else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring bad data-tuning ({}), using defaults", e);
                Tuning::default()
            }
        }
    }

    fn find_canvas(document: &Document) -> Option<HtmlCanvasElement> {
        document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Cube Runner starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = find_canvas(&document) else {
            log::error!("No #gameCanvas element");
            return;
        };

        let tuning = load_tuning(&canvas);
        let display = glam::Vec2::new(tuning.display_width, tuning.display_height);

        // Backing store at device resolution, layout in logical pixels
        let dpr = window.device_pixel_ratio();
        let width = (display.x as f64 * dpr) as u32;
        let height = (display.y as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new(tuning)));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, display).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        setup_input_handlers(game.clone());
        setup_restart_key(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Cube Runner running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down - mark held, keep arrows and space from scrolling the page
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if input::suppresses_default(&key) {
                    event.prevent_default();
                }
                game.borrow_mut().input.key_down(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - key-ups are not delivered while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                g.input.release_all();
                g.clock.reset();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Restart fires straight from the key event, whatever the run's status
    fn setup_restart_key(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if Action::from_key(&event.key()) == Some(Action::Restart) {
                game.borrow_mut().session.restart();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cube Runner (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    run_autopilot();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a session with scripted input and report how the run ended
#[cfg(not(target_arch = "wasm32"))]
fn run_autopilot() {
    use cube_runner::sim::{GameStatus, TickInput};
    use cube_runner::{Session, Tuning};

    const MAX_FRAMES: u32 = 60 * 60;

    let mut session = Session::new(Tuning::default());
    for _ in 0..MAX_FRAMES {
        // Run right, hop whenever there is ground to hop from
        let input = TickInput {
            move_right: true,
            jump: session.actor().grounded,
            ..Default::default()
        };
        let outcome = session.tick(&input);
        if outcome.coins_collected() > 0 {
            log::info!(
                "Frame {}: coin at x={:.0}, score {}",
                session.frame(),
                session.actor().pos.x,
                session.score()
            );
        }
        if session.status().is_terminal() {
            break;
        }
    }

    match session.status() {
        GameStatus::Won => log::info!("Finished in {} frames, score {}", session.frame(), session.score()),
        GameStatus::Lost => log::info!(
            "Fell at x={:.0} after {} frames, score {}",
            session.actor().pos.x,
            session.frame(),
            session.score()
        ),
        GameStatus::Playing => log::info!("Still running after {} frames", session.frame()),
    }
}
