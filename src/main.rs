//! Pong: Lava vs Ice entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use glam::Vec2;
    use lava_pong::audio::{AudioSink, SoundEffect, WebAudio};
    use lava_pong::consts::*;
    use lava_pong::renderer::{background_color, scene, RenderState};
    use lava_pong::sim::{tick, GameMode, GameState, Screen, TickInput};
    use lava_pong::tuning::Difficulty;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        audio: WebAudio,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
        /// CSS size of the canvas, for pointer scaling
        canvas_css: (f32, f32),
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                render_state: None,
                audio: WebAudio::new(),
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
                canvas_css: (SCREEN_WIDTH, SCREEN_HEIGHT),
            }
        }

        /// Map a CSS-pixel position on the canvas to logical screen coords
        fn pointer_to_logical(&self, x: f32, y: f32) -> Vec2 {
            let (css_w, css_h) = self.canvas_css;
            Vec2::new(
                x * SCREEN_WIDTH / css_w.max(1.0),
                y * SCREEN_HEIGHT / css_h.max(1.0),
            )
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.clone();
                tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.click = false;
                self.input.confirm = false;
                self.input.back = false;
                self.input.menu_up = false;
                self.input.menu_down = false;
            }

            // Hand queued triggers to the synth
            for event in self.state.drain_events() {
                self.audio.play(SoundEffect::from_event(event));
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = scene(&self.state);
            let clear = background_color(self.state.screen, self.state.mode);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices, clear) {
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

        /// Update overlay elements in the DOM (all text lives there)
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            set_visible(&document, "screen-menu", self.state.screen == Screen::Menu);
            set_visible(
                &document,
                "screen-mode",
                self.state.screen == Screen::ModeSelect,
            );
            set_visible(
                &document,
                "screen-difficulty",
                self.state.screen == Screen::DifficultySelect,
            );
            set_visible(
                &document,
                "game-over",
                self.state.screen == Screen::GameOver,
            );
            set_visible(
                &document,
                "hud-score",
                matches!(self.state.screen, Screen::Playing | Screen::GameOver),
            );
            set_visible(
                &document,
                "back-label",
                matches!(self.state.screen, Screen::Playing | Screen::GameOver),
            );

            // Scores
            if let Some(el) = document.get_element_by_id("score-left") {
                el.set_text_content(Some(&self.state.left_score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("score-right") {
                el.set_text_content(Some(&self.state.right_score.to_string()));
            }

            // Menu cursors
            for (i, mode) in GameMode::ALL.iter().enumerate() {
                if let Some(el) = document.get_element_by_id(&format!("mode-{i}")) {
                    el.set_text_content(Some(mode.label()));
                    let class = if i == self.state.mode_cursor {
                        "item selected"
                    } else {
                        "item"
                    };
                    let _ = el.set_attribute("class", class);
                }
            }
            for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
                if let Some(el) = document.get_element_by_id(&format!("diff-{i}")) {
                    el.set_text_content(Some(difficulty.label()));
                    let class = if i == self.state.difficulty_cursor {
                        "item selected"
                    } else {
                        "item"
                    };
                    let _ = el.set_attribute("class", class);
                }
            }

            // Winner banner
            if let Some(el) = document.get_element_by_id("winner-text") {
                let text = self
                    .state
                    .winner
                    .map(|w| w.win_label())
                    .unwrap_or_default();
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "overlay" } else { "overlay hidden" });
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pong: Lava vs Ice starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed logical playfield; back the canvas at device resolution
        let dpr = window.device_pixel_ratio();
        let width = (SCREEN_WIDTH as f64 * dpr) as u32;
        let height = (SCREEN_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        game.borrow_mut().canvas_css =
            (canvas.client_width() as f32, canvas.client_height() as f32);

        log::info!("Session initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Pong: Lava vs Ice running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - track the pointer in logical coordinates
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.canvas_css = (
                    canvas_clone.client_width() as f32,
                    canvas_clone.client_height() as f32,
                );
                let pointer =
                    g.pointer_to_logical(event.offset_x() as f32, event.offset_y() as f32);
                g.input.pointer = pointer;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down - click edge; also the user gesture that unlocks audio
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let pointer =
                    g.pointer_to_logical(event.offset_x() as f32, event.offset_y() as f32);
                g.input.pointer = pointer;
                g.input.click = true;
                g.audio.resume();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard - edges on keydown (ignoring auto-repeat), levels via keyup
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "Enter" => {
                        if !event.repeat() {
                            g.input.confirm = true;
                        }
                        g.audio.resume();
                    }
                    "Escape" => {
                        if !event.repeat() {
                            g.input.back = true;
                        }
                    }
                    "ArrowUp" => {
                        if !event.repeat() {
                            g.input.menu_up = true;
                        }
                        g.input.up_held = true;
                        event.prevent_default();
                    }
                    "ArrowDown" => {
                        if !event.repeat() {
                            g.input.menu_down = true;
                        }
                        g.input.down_held = true;
                        event.prevent_default();
                    }
                    "w" | "W" => g.input.w_held = true,
                    "s" | "S" => g.input.s_held = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" => g.input.up_held = false,
                    "ArrowDown" => g.input.down_held = false,
                    "w" | "W" => g.input.w_held = false,
                    "s" | "S" => g.input.s_held = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
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
    use lava_pong::audio::{AudioSink, NullAudio, SoundEffect};
    use lava_pong::consts::*;
    use lava_pong::sim::{tick, GameState, Screen, TickInput};

    env_logger::init();
    log::info!("Pong: Lava vs Ice (native) starting...");
    log::info!("The playable build targets the browser - serve the wasm bundle to play");

    // Headless demo: drive the menus, then let the paddles fight it out
    let mut state = GameState::new(0xDECAF);
    let mut audio = NullAudio;

    let confirm = TickInput {
        confirm: true,
        ..Default::default()
    };
    let down = TickInput {
        menu_down: true,
        ..Default::default()
    };
    tick(&mut state, &confirm, SIM_DT); // title -> mode select
    tick(&mut state, &down, SIM_DT); // pick vs-computer
    tick(&mut state, &confirm, SIM_DT); // -> difficulty select
    tick(&mut state, &down, SIM_DT); // pick medium
    tick(&mut state, &confirm, SIM_DT); // -> playing

    let mut ticks = 0u32;
    while state.screen == Screen::Playing && ticks < 60 * 600 {
        // The left paddle shadows the ball so rallies actually happen
        let input = TickInput {
            w_held: state.ball.pos.y < state.left_paddle.center_y(),
            s_held: state.ball.pos.y > state.left_paddle.center_y(),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        for event in state.drain_events() {
            audio.play(SoundEffect::from_event(event));
        }
        ticks += 1;
    }

    log::info!(
        "Demo match finished after {} ticks: Lava {} - Ice {} ({})",
        ticks,
        state.left_score,
        state.right_score,
        state.winner.map(|w| w.win_label()).unwrap_or("no winner")
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
