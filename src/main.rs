//! Lilac Runner entry point
//!
//! Browser: WebGPU canvas driven by requestAnimationFrame, one tick per frame.
//! Native: headless autopilot demo that logs a few runs and prints a summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use lilac_runner::renderer::{Palette, RenderState};
    use lilac_runner::sinks::{GAME_OVER_HEADLINE, GAME_OVER_HINT, HELP_TEXT, final_score_text};
    use lilac_runner::{
        GameOverOverlay, OverlayChange, RenderSink, ScoreSink, Session, Settings, Snapshot,
        format_score_label,
    };

    /// Score label element in the page
    struct DomScoreLabel {
        element: Option<Element>,
    }

    impl ScoreSink for DomScoreLabel {
        fn score_changed(&mut self, score: u32, high_score: u32) {
            if let Some(el) = &self.element {
                el.set_text_content(Some(&format_score_label(score, high_score)));
            }
        }
    }

    /// Canvas drawing plus the game-over screen kept in the DOM
    struct PageRenderer {
        gpu: RenderState,
        overlay: GameOverOverlay,
        game_over: Option<Element>,
        final_score: Option<Element>,
    }

    impl PageRenderer {
        fn new(gpu: RenderState, document: &web_sys::Document) -> Self {
            if let Some(el) = document.get_element_by_id("game-over-title") {
                el.set_text_content(Some(GAME_OVER_HEADLINE));
            }
            if let Some(el) = document.get_element_by_id("game-over-hint") {
                el.set_text_content(Some(GAME_OVER_HINT));
            }
            let game_over = document.get_element_by_id("game-over");
            if let Some(el) = &game_over {
                let _ = el.set_attribute("class", "hidden");
            }
            Self {
                gpu,
                overlay: GameOverOverlay::default(),
                game_over,
                final_score: document.get_element_by_id("final-score"),
            }
        }
    }

    impl RenderSink for PageRenderer {
        fn render(&mut self, snapshot: &Snapshot<'_>) {
            self.gpu.render(snapshot);

            match self.overlay.update(snapshot) {
                Some(OverlayChange::Show { score }) => {
                    if let Some(el) = &self.final_score {
                        el.set_text_content(Some(&final_score_text(score)));
                    }
                    if let Some(el) = &self.game_over {
                        let _ = el.set_attribute("class", "");
                    }
                }
                Some(OverlayChange::Hide) => {
                    if let Some(el) = &self.game_over {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
                None => {}
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        renderer: PageRenderer,
        label: DomScoreLabel,
        settings: Settings,
    }

    impl Game {
        /// Run one tick and paint it
        fn frame(&mut self) {
            self.session.frame(&mut self.renderer, &mut self.label);
        }

        fn toggle_autopilot(&mut self) {
            self.settings.autopilot = !self.settings.autopilot;
            self.session.set_autopilot(self.settings.autopilot);
            self.settings.save();
        }

        fn toggle_high_contrast(&mut self) {
            self.settings.high_contrast = !self.settings.high_contrast;
            self.renderer.gpu.palette = Palette::for_contrast(self.settings.high_contrast);
            self.settings.save();
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Lilac Runner starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        if let Some(help) = document.get_element_by_id("help") {
            help.set_text_content(Some(HELP_TEXT));
        }

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);
        let tuning = settings.tuning.clone();
        log::info!("Game initialized with seed: {}", seed);

        let gpu = RenderState::for_canvas(
            canvas.clone(),
            (tuning.field_width, tuning.field_height),
            Palette::for_contrast(settings.high_contrast),
        )
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut session = Session::new(tuning, seed);
        session.set_autopilot(settings.autopilot);

        let game = Rc::new(RefCell::new(Game {
            session,
            renderer: PageRenderer::new(gpu, &document),
            label: DomScoreLabel {
                element: document.get_element_by_id("scoreLabel"),
            },
            settings,
        }));

        setup_input_handlers(&window, &canvas, game.clone());
        setup_restart_button(&document, game.clone());

        request_animation_frame(game);

        log::info!("Lilac Runner running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " => {
                        event.prevent_default();
                        // Holding the key must not jump again on landing
                        if !event.repeat() {
                            g.session.request_jump();
                        }
                    }
                    "i" | "I" => g.toggle_autopilot(),
                    "h" | "H" => g.toggle_high_contrast(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click / tap on the field
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                game.borrow_mut().session.request_jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().session.request_reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use lilac_runner::ScoreSink;

    /// Ticks to simulate before giving up on reaching `MAX_RUNS`
    pub const DEMO_TICKS: u64 = 20_000;
    /// Runs to play before stopping
    pub const MAX_RUNS: u32 = 3;

    /// Logs every score change
    #[derive(Debug, Default)]
    pub struct LogScores {
        pub score: u32,
        pub high_score: u32,
    }

    impl ScoreSink for LogScores {
        fn score_changed(&mut self, score: u32, high_score: u32) {
            self.score = score;
            self.high_score = high_score;
            log::info!("{}", lilac_runner::format_score_label(score, high_score));
        }
    }

    /// Seed from the wall clock
    pub fn time_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lilac_runner::renderer::{HeadlessRenderer, Palette};
    use lilac_runner::sim::GameEvent;
    use lilac_runner::sinks::{GAME_OVER_HEADLINE, HELP_TEXT, final_score_text};
    use lilac_runner::{Session, Settings};

    env_logger::init();
    log::info!("Lilac Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use `trunk serve` for the playable web version");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load_from(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{path}: {err}");
                std::process::exit(1);
            }
        },
        None => Settings::load(),
    };

    log::info!("{HELP_TEXT}");

    let seed = settings.seed.unwrap_or_else(demo::time_seed);
    log::info!("Seed: {seed}");

    let mut session = Session::new(settings.tuning.clone(), seed);
    session.set_autopilot(true);
    let mut renderer = HeadlessRenderer::new(Palette::for_contrast(settings.high_contrast));
    let mut scores = demo::LogScores::default();

    let mut finished_runs = Vec::new();
    for _ in 0..demo::DEMO_TICKS {
        let events = session.frame(&mut renderer, &mut scores);
        for event in events {
            if let GameEvent::Collision { score } = event {
                log::info!("{} {}", GAME_OVER_HEADLINE, final_score_text(score));
                finished_runs.push(score);
                // Jumping while the run is over starts the next one
                session.request_jump();
            }
        }
        if finished_runs.len() as u32 >= demo::MAX_RUNS {
            break;
        }
    }

    println!("\nLilac Runner demo (seed {seed})");
    println!("  frames rendered: {}", renderer.frames());
    for (i, score) in finished_runs.iter().enumerate() {
        println!("  run {}: {} points", i + 1, score);
    }
    if finished_runs.len() < demo::MAX_RUNS as usize {
        println!("  last run still going: {} points", scores.score);
    }
    println!("  best: {}", scores.high_score);
}
