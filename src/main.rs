//! Rally Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use rally_pong::consts::*;
    use rally_pong::renderer::RenderState;
    use rally_pong::sim::{GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        accumulator: f32,
        /// Timestamp of the previous animation frame, in ms
        last_time: Option<f64>,
        input: TickInput,
        /// Canvas CSS height, for scaling pointer coordinates into the arena
        canvas_height: f32,
        /// Smoothed frames per second for the HUD
        fps: f32,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                render_state: None,
                accumulator: 0.0,
                last_time: None,
                input: TickInput::default(),
                canvas_height: ARENA_HEIGHT,
                fps: 0.0,
            }
        }

        fn set_canvas_height(&mut self, h: f32) {
            self.canvas_height = h;
        }

        /// Convert a pointer y in CSS pixels to a paddle target in arena
        /// units, centering the paddle on the pointer
        fn pointer_to_arena_y(&self, y: f32) -> f32 {
            let scale = ARENA_HEIGHT / self.canvas_height.max(1.0);
            y * scale - PADDLE_HEIGHT / 2.0
        }

        /// Run simulation ticks for one animation frame
        fn update(&mut self, dt: f32) {
            // A stalled tab reports a huge dt; cap what one frame may owe
            self.accumulator += dt.min(0.1);

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let events = tick(&mut self.state, &self.input);
                if events.scored() {
                    log::debug!(
                        "point scored, now {} - {}",
                        self.state.player.score,
                        self.state.computer.score
                    );
                    update_scoreboard(&self.state);
                }
                if events.paddle_hit {
                    log::debug!(
                        "paddle strike, ball vel ({:.2}, {:.2})",
                        self.state.ball.vel.x,
                        self.state.ball.vel.y
                    );
                }
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            // Exponential moving average over frame rates
            if dt > 0.0 {
                self.fps = self.fps * 0.9 + 0.1 / dt;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
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

        /// Update the FPS readout if the page has one
        fn update_hud(&self) {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = document.get_element_by_id("fps") {
                    let fps = self.fps.round() as u32;
                    el.set_text_content(Some(&fps.to_string()));
                }
            }
        }
    }

    /// Push both score counters into the page
    fn update_scoreboard(state: &GameState) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = document.get_element_by_id("playerScore") {
                el.set_text_content(Some(&state.player.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("computerScore") {
                el.set_text_content(Some(&state.computer.score.to_string()));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Rally Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Match the backing buffer to the CSS size and device pixel ratio
        let dpr = window.device_pixel_ratio();
        let client_h = canvas.client_height();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        game.borrow_mut().set_canvas_height(client_h as f32);

        log::info!("New game, seed {}", seed);

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

        log::info!("Adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        // Seed the scoreboard before the first point lands
        update_scoreboard(&game.borrow().state);

        request_animation_frame(game);

        log::info!("Rally Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Key down: take a direction and reclaim control from the pointer
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" => {
                        g.input.move_dir = -1;
                        g.input.pointer_y = None;
                    }
                    "ArrowDown" => {
                        g.input.move_dir = 1;
                        g.input.pointer_y = None;
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: releasing either direction key stops the paddle
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" | "ArrowDown" => g.input.move_dir = 0,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move: absolute paddle target under the cursor
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.set_canvas_height(canvas_clone.client_height() as f32);
                let target = g.pointer_to_arena_y(event.offset_y() as f32);
                g.input.pointer_y = Some(target);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move: the first touch point steers like the mouse
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    g.set_canvas_height(canvas_clone.client_height() as f32);
                    let rect = canvas_clone.get_bounding_client_rect();
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    let target = g.pointer_to_arena_y(y);
                    g.input.pointer_y = Some(target);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
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

            let dt = match g.last_time {
                Some(prev) => ((time - prev) / 1000.0) as f32,
                None => SIM_DT,
            };
            g.last_time = Some(time);

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
    use rally_pong::consts::SIM_DT;
    use rally_pong::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Rally Pong (native) starting...");
    log::info!("The playable build targets the browser; running a headless demo rally");

    let mut state = GameState::new(42);
    let input = TickInput::default();

    // Ten simulated seconds at the nominal tick rate
    let ticks = (10.0 / SIM_DT) as u32;
    for _ in 0..ticks {
        let events = tick(&mut state, &input);
        if events.player_scored {
            log::info!(
                "player scores: {} - {}",
                state.player.score,
                state.computer.score
            );
        }
        if events.computer_scored {
            log::info!(
                "computer scores: {} - {}",
                state.player.score,
                state.computer.score
            );
        }
    }

    println!(
        "Final score after {} ticks: player {} - computer {}",
        ticks, state.player.score, state.computer.score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
