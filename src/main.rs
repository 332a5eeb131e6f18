//! Math Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use math_catch::Settings;
    use math_catch::audio::{AudioManager, SoundEffect};
    use math_catch::platform::{FrameClock, InputState, Key};
    use math_catch::renderer::{RenderState, build_scene};
    use math_catch::sim::{GamePhase, GameState, Snapshot, tick};

    type Shared = Rc<RefCell<Game>>;

    /// DOM overlay elements, looked up once
    struct Hud {
        target: Option<Element>,
        score: Option<Element>,
        round: Option<Element>,
        fps: Option<Element>,
        fps_row: Option<Element>,
        prompt: Option<Element>,
        prompt_text: Option<Element>,
        countdown: Option<Element>,
        countdown_target: Option<Element>,
        countdown_count: Option<Element>,
        pause_menu: Option<Element>,
    }

    impl Hud {
        fn find(document: &Document) -> Self {
            let q = |selector: &str| document.query_selector(selector).ok().flatten();
            Self {
                target: q("#hud-target .hud-value"),
                score: q("#hud-score .hud-value"),
                round: q("#hud-round .hud-value"),
                fps: q("#hud-fps .hud-value"),
                fps_row: q("#hud-fps"),
                prompt: q("#target-prompt"),
                prompt_text: q("#target-prompt .big"),
                countdown: q("#countdown"),
                countdown_target: q("#countdown .target"),
                countdown_count: q("#countdown .count"),
                pause_menu: q("#pause-menu"),
            }
        }

        fn set_text(el: &Option<Element>, text: &str) {
            if let Some(el) = el {
                if el.text_content().as_deref() != Some(text) {
                    el.set_text_content(Some(text));
                }
            }
        }

        fn show(el: &Option<Element>, visible: bool) {
            if let Some(el) = el {
                let _ = el.class_list().toggle_with_force("hidden", !visible);
            }
        }

        fn update(&self, snapshot: &Snapshot, fps: Option<u32>) {
            let target = format!("Target: {}", snapshot.target);

            Self::set_text(&self.target, &snapshot.target.to_string());
            Self::set_text(&self.score, &snapshot.score.to_string());
            Self::set_text(&self.round, &snapshot.round.to_string());
            Self::show(&self.fps_row, fps.is_some());
            if let Some(fps) = fps {
                Self::set_text(&self.fps, &fps.to_string());
            }

            Self::show(&self.prompt, snapshot.phase == GamePhase::Target);
            Self::set_text(&self.prompt_text, &target);

            Self::show(&self.countdown, snapshot.phase == GamePhase::Countdown);
            Self::set_text(&self.countdown_target, &target);
            Self::set_text(&self.countdown_count, &snapshot.countdown_label);

            Self::show(&self.pause_menu, snapshot.phase == GamePhase::Paused);
        }
    }

    struct Game {
        state: GameState,
        renderer: Option<RenderState>,
        clock: FrameClock,
        input: InputState,
        audio: AudioManager,
        settings: Settings,
        hud: Hud,
    }

    impl Game {
        /// One frame: input, simulation, sound, then drawing
        fn frame(&mut self, now_ms: f64) {
            let dt = self.clock.advance(now_ms);
            let input = self.input.take_tick_input();
            tick(&mut self.state, &input, dt);

            for event in self.state.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
            }

            let snapshot = Snapshot::capture(&self.state);
            self.draw(&snapshot);
            let fps = self.settings.show_fps.then(|| self.clock.fps());
            self.hud.update(&snapshot, fps);
        }

        fn draw(&mut self, snapshot: &Snapshot) {
            let Some(renderer) = self.renderer.as_mut() else {
                return;
            };
            match renderer.render(&build_scene(snapshot)) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => log::error!("GPU out of memory"),
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Focus left the game: drop held keys and pause a live round
        fn focus_lost(&mut self, why: &str) {
            self.input.release_all();
            // Next frame after coming back starts from a zero step
            self.clock.reset();
            if self.settings.pause_on_blur && self.state.phase == GamePhase::Play {
                self.state.pause();
                log::info!("Auto-paused ({})", why);
            }
        }
    }

    /// Attach a listener that lives for the rest of the page
    fn listen<E, F>(target: &EventTarget, name: &str, handler: F)
    where
        E: FromWasmAbi + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        if target
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Could not listen for {}", name);
        }
        closure.forget();
    }

    fn canvas_pixel_size(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = window.device_pixel_ratio();
        (
            (canvas.client_width() as f64 * dpr) as u32,
            (canvas.client_height() as f64 * dpr) as u32,
        )
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No canvas element");
            return;
        };

        let settings = canvas
            .get_attribute("data-settings")
            .map(|json| Settings::from_json_or_default(&json))
            .unwrap_or_default();

        let (width, height) = canvas_pixel_size(&window, &canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Math Catch starting with seed {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let renderer = match init_renderer(&instance, &canvas, width, height).await {
            Ok(renderer) => Some(renderer),
            Err(msg) => {
                // The simulation and HUD still run without a GPU
                log::error!("{}", msg);
                None
            }
        };

        let game: Shared = Rc::new(RefCell::new(Game {
            state: GameState::new(seed),
            renderer,
            clock: FrameClock::new(),
            input: InputState::new(),
            audio: AudioManager::new(settings.effective_volume()),
            hud: Hud::find(&document),
            settings,
        }));

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.class_list().add_1("hidden");
        }

        install_input(&window, &canvas, &game);
        install_focus_handlers(&window, &document, &game);
        install_resize(&window, &canvas, &game);

        schedule_frame(game);
    }

    async fn init_renderer(
        instance: &wgpu::Instance,
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<RenderState, String> {
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| format!("Failed to create surface: {e}"))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| format!("Failed to get adapter: {e}"))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| format!("Failed to create device: {e}"))
    }

    fn install_input(window: &web_sys::Window, canvas: &HtmlCanvasElement, game: &Shared) {
        let g = game.clone();
        listen(window, "keydown", move |event: KeyboardEvent| {
            let Some(key) = Key::from_dom(&event.key()) else {
                return;
            };
            // Auto-repeat only matters for held steering keys
            if event.repeat() && !matches!(key, Key::Left | Key::Right) {
                return;
            }
            event.prevent_default();
            let mut g = g.borrow_mut();
            g.audio.resume();
            g.input.key_down(key);
        });

        let g = game.clone();
        listen(window, "keyup", move |event: KeyboardEvent| {
            if let Some(key) = Key::from_dom(&event.key()) {
                g.borrow_mut().input.key_up(key);
            }
        });

        let g = game.clone();
        listen(canvas, "mousedown", move |event: MouseEvent| {
            if event.button() == 0 {
                let mut g = g.borrow_mut();
                g.audio.resume();
                g.input.click();
            }
        });

        // Tap starts; a held finger steers toward its half of the canvas
        let g = game.clone();
        let target = canvas.clone();
        let on_touch = move |event: TouchEvent| {
            event.prevent_default();
            let mut g = g.borrow_mut();
            if event.type_() == "touchstart" {
                g.audio.resume();
                g.input.click();
            }
            g.input.release_all();
            if let Some(touch) = event.touches().get(0) {
                let rect = target.get_bounding_client_rect();
                let x = touch.client_x() as f64 - rect.left();
                g.input.key_down(if x < rect.width() / 2.0 {
                    Key::Left
                } else {
                    Key::Right
                });
            }
        };
        let on_touch = Rc::new(RefCell::new(on_touch));
        for name in ["touchstart", "touchmove", "touchend", "touchcancel"] {
            let handler = on_touch.clone();
            listen(canvas, name, move |event: TouchEvent| {
                (handler.borrow_mut())(event)
            });
        }
    }

    fn install_focus_handlers(window: &web_sys::Window, document: &Document, game: &Shared) {
        let g = game.clone();
        let doc = document.clone();
        listen(document, "visibilitychange", move |_: web_sys::Event| {
            if doc.visibility_state() == web_sys::VisibilityState::Hidden {
                g.borrow_mut().focus_lost("tab hidden");
            }
        });

        let g = game.clone();
        listen(window, "blur", move |_: web_sys::FocusEvent| {
            g.borrow_mut().focus_lost("window blur");
        });
    }

    fn install_resize(window: &web_sys::Window, canvas: &HtmlCanvasElement, game: &Shared) {
        let g = game.clone();
        let win = window.clone();
        let canvas = canvas.clone();
        listen(window, "resize", move |_: web_sys::Event| {
            let (width, height) = canvas_pixel_size(&win, &canvas);
            if width == 0 || height == 0 {
                return;
            }
            canvas.set_width(width);
            canvas.set_height(height);
            if let Some(renderer) = g.borrow_mut().renderer.as_mut() {
                renderer.resize(width, height);
            }
        });
    }

    fn schedule_frame(game: Shared) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |now_ms: f64| {
            game.borrow_mut().frame(now_ms);
            schedule_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn accepts_listener<E: FromWasmAbi + 'static>() {
            let _ = listen::<E, fn(E)>;
        }

        #[test]
        fn test_dom_events_can_be_listened_for() {
            accepts_listener::<KeyboardEvent>();
            accepts_listener::<MouseEvent>();
            accepts_listener::<TouchEvent>();
            accepts_listener::<web_sys::FocusEvent>();
            accepts_listener::<web_sys::Event>();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use math_catch::Settings;
    use math_catch::headless::{HeadlessConfig, run_headless};

    #[derive(Parser, Debug)]
    #[command(about = "Run Math Catch headless and report the session", version)]
    pub struct Args {
        /// Simulated seconds to play
        #[arg(long, default_value_t = 60.0)]
        seconds: f32,
        /// RNG seed (overrides the settings file)
        #[arg(long)]
        seed: Option<u64>,
        /// Seconds between basket direction changes
        #[arg(long, default_value_t = 1.5)]
        sweep_period: f32,
        /// Settings JSON file
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        let settings = match &args.settings {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading settings from {}", path.display()))?;
                Settings::from_json(&json)
                    .with_context(|| format!("parsing settings in {}", path.display()))?
            }
            None => Settings::default(),
        };

        let seed = args.seed.or(settings.seed).unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let summary = run_headless(&HeadlessConfig {
            seconds: args.seconds,
            seed,
            sweep_period: args.sweep_period,
        });

        if args.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("Seed:             {}", summary.seed);
            println!("Session time:     {:.1}s", summary.session_secs);
            println!("Frames:           {}", summary.frames);
            println!("Rounds completed: {}", summary.rounds_completed);
            println!("Score:            {}", summary.score);
            println!("Catches / misses: {} / {}", summary.catches, summary.misses);
            println!("Spawn interval:   {:.2}s", summary.spawn_interval);
            println!(
                "Final round:      {} (target {}, current {})",
                summary.final_snapshot.round,
                summary.final_snapshot.target,
                summary.final_snapshot.current
            );
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Math Catch (native) starting...");
    log::info!("Native builds run headless - use `trunk serve` for the playable web version");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
