//! GeoChessr entry point
//!
//! Handles browser initialization and wires DOM events to the puzzle flow.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{
        CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlInputElement,
        KeyboardEvent, MouseEvent, TouchEvent,
    };

    use geochessr::api::{
        self, CheckPositionRequest, CheckPositionResponse, CreateRunRequest, NextPuzzleResponse,
        RunStats,
    };
    use geochessr::audio::{AudioManager, SoundEffect};
    use geochessr::board::{self, FRAGMENT_PREFIX, TARGET_PREFIX};
    use geochessr::consts::*;
    use geochessr::feedback;
    use geochessr::fen::SubBoard;
    use geochessr::history::{self, HistoryEntry, RunHistory};
    use geochessr::placement::{BoardMetrics, Placement};
    use geochessr::run::{PuzzleRecord, RunPhase, RunState};
    use geochessr::settings::Settings;

    /// The puzzle currently on screen
    struct CurrentPuzzle {
        id: i64,
        fragment: SubBoard,
        white_to_move: Option<bool>,
        /// Page clock (ms) when the fragment appeared
        shown_at_ms: f64,
    }

    /// App instance holding all state
    struct App {
        phase: RunPhase,
        run: Option<RunState>,
        puzzle: Option<CurrentPuzzle>,
        candidate: Option<Placement>,
        settings: Settings,
        audio: AudioManager,
        history: RunHistory,
    }

    impl App {
        fn new() -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_sfx_volume(settings.sfx_volume);
            audio.set_muted(settings.muted);
            Self {
                phase: RunPhase::Loading,
                run: None,
                puzzle: None,
                candidate: None,
                settings,
                audio,
                history: RunHistory::load(),
            }
        }

        /// Dimensions of the current fragment, if one is on screen
        fn fragment_dims(&self) -> Option<(u8, u8)> {
            let puzzle = self.puzzle.as_ref()?;
            Some((puzzle.fragment.width() as u8, puzzle.fragment.height() as u8))
        }

        /// Update the candidate placement; returns it only when it changed
        fn aim_at(&mut self, col: u8, row: u8) -> Option<Placement> {
            if self.phase != RunPhase::Aiming {
                return None;
            }
            let (w, h) = self.fragment_dims()?;
            let placement = Placement::centered_on(col, row, w, h)?;
            if self.candidate == Some(placement) {
                return None;
            }
            self.candidate = Some(placement);
            Some(placement)
        }
    }

    // === Small DOM helpers ===

    fn document() -> Document {
        web_sys::window().expect("no window").document().expect("no document")
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_status(text: &str) {
        set_text(&document(), "status", text);
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let list = el.class_list();
            if hidden {
                let _ = list.add_1("hidden");
            } else {
                let _ = list.remove_1("hidden");
            }
        }
    }

    /// Pixel geometry of the target board as currently laid out
    fn target_metrics(target: &Element) -> BoardMetrics {
        let rect = target.get_bounding_client_rect();
        BoardMetrics::new(
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
        )
    }

    /// Feedback canvas context, resized to match the target board
    fn feedback_canvas(document: &Document) -> Option<(CanvasRenderingContext2d, f64, f64)> {
        let target = document.get_element_by_id("targetBoard")?;
        let rect = target.get_bounding_client_rect();
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("feedbackCanvas")?
            .dyn_into()
            .ok()?;
        canvas.set_width(rect.width() as u32);
        canvas.set_height(rect.height() as u32);
        let ctx: CanvasRenderingContext2d =
            canvas.get_context("2d").ok()??.dyn_into().ok()?;
        Some((ctx, rect.width(), rect.height()))
    }

    fn clear_feedback_canvas(document: &Document) {
        if let Some((ctx, w, h)) = feedback_canvas(document) {
            feedback::clear_canvas(&ctx, w, h);
        }
    }

    /// Draw the miss arrow between two placements (canvas-local coordinates)
    fn draw_miss_arrow(document: &Document, guess: &Placement, answer: &Placement) {
        let Some((ctx, w, h)) = feedback_canvas(document) else {
            return;
        };
        let metrics = BoardMetrics::new(Vec2::ZERO, Vec2::new(w as f32, h as f32));
        feedback::clear_canvas(&ctx, w, h);
        feedback::draw_guess_arrow(
            &ctx,
            metrics.placement_center(guess),
            metrics.placement_center(answer),
        );
    }

    /// Strip every overlay the previous puzzle left on the target board
    fn reset_target_overlays(document: &Document) {
        board::clear_target_board(document);
        board::apply_placement_class(document, None, "candidate");
        board::apply_placement_class(document, None, "correct-box");
        board::apply_placement_class(document, None, "incorrect-box");
        clear_feedback_canvas(document);
    }

    /// Game metadata panel shown after the reveal
    fn render_game_info(document: &Document, resp: &CheckPositionResponse) {
        let Some(panel) = document.get_element_by_id("gameInfo") else {
            return;
        };
        panel.set_inner_html("");

        let mut lines: Vec<String> = Vec::new();
        if let (Some(white), Some(black)) = (&resp.white_player, &resp.black_player) {
            lines.push(format!("{white} vs {black}"));
        }
        if let (Some(white), Some(black)) = (resp.white_elo, resp.black_elo) {
            lines.push(format!("Elo {white} / {black}"));
        }
        if let Some(half_moves) = resp.half_move_num {
            lines.push(format!("Move {}", (half_moves + 1) / 2));
        }
        if let Some(result) = resp.result_label() {
            lines.push(format!("Result {result}"));
        }
        if let Some(opening) = &resp.opening_name {
            lines.push(opening.clone());
        }
        if let Some(year) = resp.year {
            lines.push(format!("Played in {year}"));
        }

        for line in &lines {
            if let Ok(div) = document.create_element("div") {
                div.set_class_name("game-info-line");
                div.set_text_content(Some(line));
                let _ = panel.append_child(&div);
            }
        }
        if let Some(url) = &resp.url {
            if let Ok(link) = document.create_element("a") {
                let _ = link.set_attribute("href", url);
                let _ = link.set_attribute("target", "_blank");
                let _ = link.set_attribute("rel", "noopener noreferrer");
                link.set_text_content(Some("View game"));
                let _ = panel.append_child(&link);
            }
        } else if let Some(pgn) = &resp.pgn {
            // Historical games carry a PGN instead of a game link
            if let Ok(div) = document.create_element("div") {
                div.set_class_name("game-info-pgn");
                div.set_text_content(Some(pgn));
                let _ = panel.append_child(&div);
            }
        }
    }

    fn update_mute_button(document: &Document, muted: bool) {
        set_text(
            document,
            "muteBtn",
            if muted { "Sound: Off" } else { "Sound: On" },
        );
    }

    // === Run flow ===

    /// Run parameters from the setup inputs, defaults where absent
    fn read_run_request(document: &Document) -> CreateRunRequest {
        fn input_value(document: &Document, id: &str) -> Option<String> {
            let input: HtmlInputElement = document.get_element_by_id(id)?.dyn_into().ok()?;
            let value = input.value();
            if value.trim().is_empty() {
                None
            } else {
                Some(value)
            }
        }

        let mut req = CreateRunRequest::default();
        if let Some(v) = input_value(document, "difficultyInput") {
            req.difficulty = v;
        }
        if let Some(v) = input_value(document, "puzzleCountInput") {
            req.n_puzzles = v.trim().parse().unwrap_or(DEFAULT_RUN_LENGTH);
        }
        if let Some(v) = input_value(document, "minMoveInput") {
            req.min_move = v.trim().parse().unwrap_or(DEFAULT_MIN_MOVE);
        }
        if let Some(v) = input_value(document, "maxMoveInput") {
            req.max_move = v.trim().parse().unwrap_or(DEFAULT_MAX_MOVE);
        }
        if let Some(v) = input_value(document, "sourceInput") {
            req.source = v;
        }
        req
    }

    fn start_run(app: Rc<RefCell<App>>) {
        let document = document();
        let req = read_run_request(&document);

        {
            let mut a = app.borrow_mut();
            a.phase = RunPhase::Loading;
            a.run = None;
            a.puzzle = None;
            a.candidate = None;
        }
        reset_target_overlays(&document);
        set_hidden(&document, "runSummary", true);
        set_hidden(&document, "nextBtn", true);
        set_text(&document, "gameInfo", "");
        set_status("Creating run...");

        spawn_local(async move {
            match api::create_run(&req).await {
                Ok(resp) => {
                    log::info!("Run {} created ({} puzzles)", resp.run_id, req.n_puzzles);
                    app.borrow_mut().run = Some(RunState::new(
                        resp.run_id,
                        req.n_puzzles,
                        js_sys::Date::now(),
                    ));
                    load_next_puzzle(app);
                }
                Err(err) => {
                    log::warn!("create_run failed: {err}");
                    set_status(&format!("Could not create a run: {err}"));
                }
            }
        });
    }

    fn load_next_puzzle(app: Rc<RefCell<App>>) {
        let Some((run_id, index)) = app
            .borrow()
            .run
            .as_ref()
            .map(|r| (r.run_id.clone(), r.index))
        else {
            return;
        };

        {
            let mut a = app.borrow_mut();
            a.phase = RunPhase::Loading;
            a.candidate = None;
        }
        set_status("Loading puzzle...");

        spawn_local(async move {
            match api::next_puzzle(&run_id, index).await {
                Ok(next) => show_puzzle(&app, next),
                Err(err) => {
                    log::warn!("next_puzzle failed: {err}");
                    set_status(&format!("Could not load the next puzzle: {err}"));
                }
            }
        });
    }

    fn show_puzzle(app: &Rc<RefCell<App>>, next: NextPuzzleResponse) {
        let document = document();

        let fragment = match SubBoard::parse(&next.initial_subfen) {
            Ok(fragment) => fragment,
            Err(err) => {
                log::error!("Bad puzzle notation {:?}: {err}", next.initial_subfen);
                set_status(&format!("Bad puzzle data: {err}"));
                return;
            }
        };
        if fragment.width() > BOARD_FILES as usize || fragment.height() > BOARD_RANKS as usize {
            set_status("Puzzle fragment does not fit on the board.");
            return;
        }

        if let Some(container) = document.get_element_by_id("puzzleBoard") {
            let built = board::build_board_squares(
                &document,
                &container,
                FRAGMENT_PREFIX,
                fragment.width(),
                fragment.height(),
                false,
            )
            .and_then(|_| board::render_pieces(&document, FRAGMENT_PREFIX, &fragment));
            if let Err(err) = built {
                log::error!("Failed to render fragment: {err:?}");
            }
        }

        reset_target_overlays(&document);
        set_text(&document, "gameInfo", "");
        set_hidden(&document, "nextBtn", true);

        let (index, len) = {
            let mut a = app.borrow_mut();
            if let Some(run) = a.run.as_mut() {
                run.sync_progress(next.index, next.len);
            }
            a.puzzle = Some(CurrentPuzzle {
                id: next.geochess_id,
                fragment,
                white_to_move: next.white_to_move,
                shown_at_ms: js_sys::Date::now(),
            });
            a.candidate = None;
            a.phase = RunPhase::Aiming;
            (next.index, next.len)
        };

        set_text(&document, "progress", &format!("Puzzle {} of {}", index + 1, len));
        let hint = match next.white_to_move {
            Some(true) => "White to move",
            Some(false) => "Black to move",
            None => "",
        };
        set_text(&document, "turnHint", hint);
        set_status("Find this fragment on the board.");
    }

    fn submit_guess(app: Rc<RefCell<App>>) {
        let req = {
            let mut a = app.borrow_mut();
            if a.phase != RunPhase::Aiming {
                return;
            }
            let (Some(candidate), Some(puzzle)) = (a.candidate, a.puzzle.as_ref()) else {
                return;
            };
            let req = CheckPositionRequest {
                id: puzzle.id,
                x: candidate.x,
                y: candidate.y,
            };
            a.phase = RunPhase::Checking;
            a.audio.play(SoundEffect::Submit);
            req
        };

        set_status("Checking...");
        spawn_local(async move {
            match api::check_position(&req).await {
                Ok(resp) => handle_verdict(&app, resp),
                Err(err) => {
                    log::warn!("check_position failed: {err}");
                    // Unfreeze so the guess can be retried
                    app.borrow_mut().phase = RunPhase::Aiming;
                    set_status(&format!("Could not check your guess: {err}"));
                }
            }
        });
    }

    fn handle_verdict(app: &Rc<RefCell<App>>, resp: CheckPositionResponse) {
        let document = document();

        let (guess, answer, ghost, run_complete) = {
            let mut a = app.borrow_mut();
            let Some(puzzle) = a.puzzle.as_ref() else {
                return;
            };
            let Some(guess) = a.candidate else {
                return;
            };
            let answer = Placement::at(resp.answer.x, resp.answer.y, guess.w, guess.h);
            let record = PuzzleRecord {
                puzzle_id: puzzle.id,
                success: resp.correct,
                guess: (guess.x, guess.y),
                answer: (resp.answer.x, resp.answer.y),
                time_ms: js_sys::Date::now() - puzzle.shown_at_ms,
            };
            if let Some(run) = a.run.as_mut() {
                run.record(record);
            }
            a.phase = RunPhase::Revealed;
            a.audio.play(if resp.correct {
                SoundEffect::Correct
            } else {
                SoundEffect::Incorrect
            });
            let ghost = a.settings.ghost_preview;
            let run_complete = a.run.as_ref().is_some_and(|r| r.is_complete());
            (guess, answer, ghost, run_complete)
        };

        board::apply_placement_class(&document, None, "candidate");
        board::apply_placement_class(&document, Some(&answer), "correct-box");
        if resp.correct {
            clear_feedback_canvas(&document);
            set_status("Correct!");
        } else {
            board::apply_placement_class(&document, Some(&guess), "incorrect-box");
            draw_miss_arrow(&document, &guess, &answer);
            set_status("Not quite - the correct spot is outlined.");
        }

        if ghost {
            if let Some(full_fen) = &resp.full_fen {
                match SubBoard::parse(full_fen) {
                    Ok(position) => {
                        if let Err(err) = board::render_ghost_position(&document, &position) {
                            log::warn!("Ghost render failed: {err:?}");
                        }
                    }
                    Err(err) => log::warn!("Unparseable fullFen from server: {err}"),
                }
            }
        }

        render_game_info(&document, &resp);

        if run_complete {
            finish_run(app, resp.run_stats);
        } else {
            set_hidden(&document, "nextBtn", false);
        }
    }

    fn finish_run(app: &Rc<RefCell<App>>, stats: Option<RunStats>) {
        let document = document();

        let (records, solved, len, time_seconds, best, played, previous) = {
            let mut a = app.borrow_mut();
            a.phase = RunPhase::Summary;
            a.audio.play(SoundEffect::RunComplete);
            let Some(run) = a.run.as_ref() else {
                return;
            };
            let now = js_sys::Date::now();
            let solved = run.solved_count();
            let len = run.len;
            let time_seconds = run.elapsed_seconds(now);
            let records = run.records.clone();
            let run_id = run.run_id.clone();
            a.history.add(HistoryEntry {
                run_id,
                solved,
                len,
                time_seconds,
                timestamp: now,
            });
            a.history.save();
            let best = a.history.best_solved(len).unwrap_or(solved);
            let played = a.history.entries.len();
            let previous = a.history.entries.get(1).map(|e| e.timestamp);
            (records, solved, len, time_seconds, best, played, previous)
        };

        log::info!("Run complete: {solved}/{len} in {time_seconds}s");

        set_hidden(&document, "runSummary", false);
        set_hidden(&document, "nextBtn", true);
        set_status("Run complete!");

        if let Some(boxes) = document.get_element_by_id("runSummaryBoxes") {
            if let Err(err) = feedback::render_summary_boxes(&document, &boxes, &records) {
                log::warn!("Summary boxes failed: {err:?}");
            }
        }
        if let Some(time_el) = document.get_element_by_id("runSummaryTime") {
            if let Err(err) = feedback::render_summary_stats(
                &document,
                &time_el,
                solved,
                len,
                time_seconds,
                stats.as_ref(),
            ) {
                log::warn!("Summary stats failed: {err:?}");
            }
        }
        let mut best_line = format!("Personal best: {best}/{len} \u{00b7} {played} runs played");
        if let Some(ts) = previous {
            best_line.push_str(&format!(" \u{00b7} previous run {}", history::format_date(ts)));
        }
        set_text(&document, "runSummaryBest", &best_line);
    }

    fn advance(app: Rc<RefCell<App>>) {
        let ready = {
            let a = app.borrow();
            a.phase == RunPhase::Revealed && a.run.as_ref().is_some_and(|r| !r.is_complete())
        };
        if ready {
            load_next_puzzle(app);
        }
    }

    // === Event wiring ===

    fn setup_pointer_handlers(target: &Element, app: Rc<RefCell<App>>) {
        // Mouse move - candidate placement follows the hovered square
        {
            let app = app.clone();
            let target_clone = target.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let metrics = target_metrics(&target_clone);
                let point = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                let Some((col, row)) = metrics.square_at(point) else {
                    return;
                };
                let changed = app.borrow_mut().aim_at(col, row);
                if let Some(placement) = changed {
                    board::apply_placement_class(&document(), Some(&placement), "candidate");
                }
            });
            let _ = target
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse leave - drop the candidate
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                if a.phase == RunPhase::Aiming && a.candidate.take().is_some() {
                    drop(a);
                    board::apply_placement_class(&document(), None, "candidate");
                }
            });
            let _ = target
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click - submit the frozen candidate
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow().audio.resume();
                submit_guess(app.clone());
            });
            let _ = target
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start/move - aim with the finger
        for event_name in ["touchstart", "touchmove"] {
            let app = app.clone();
            let target_clone = target.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let metrics = target_metrics(&target_clone);
                    let point = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                    let Some((col, row)) = metrics.square_at(point) else {
                        return;
                    };
                    let changed = app.borrow_mut().aim_at(col, row);
                    if let Some(placement) = changed {
                        board::apply_placement_class(&document(), Some(&placement), "candidate");
                    }
                }
            });
            let _ = target
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end - submit where the finger last aimed
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow().audio.resume();
                submit_guess(app.clone());
            });
            let _ = target
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            match event.key().as_str() {
                " " | "Enter" => {
                    // Only claim the key while a verdict is on screen, so
                    // typing into the setup inputs keeps working
                    let revealed = app.borrow().phase == RunPhase::Revealed;
                    if revealed {
                        event.prevent_default();
                        advance(app.clone());
                    }
                }
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Free-entry notation preview; only wired when the page carries the form
    fn setup_fen_preview() {
        let document = document();
        let Some(form) = document.get_element_by_id("fenForm") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let Some(input) = document
                .get_element_by_id("fenInput")
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            match SubBoard::parse(&input.value()) {
                Ok(fragment) => {
                    if let Some(container) = document.get_element_by_id("puzzleBoard") {
                        let built = board::build_board_squares(
                            &document,
                            &container,
                            FRAGMENT_PREFIX,
                            fragment.width(),
                            fragment.height(),
                            false,
                        )
                        .and_then(|_| board::render_pieces(&document, FRAGMENT_PREFIX, &fragment));
                        if let Err(err) = built {
                            log::error!("Failed to render preview: {err:?}");
                        }
                    }
                    set_status("");
                }
                Err(err) => set_status(&err.to_string()),
            }
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let document = document();

        if let Some(btn) = document.get_element_by_id("nextBtn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                advance(app.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("newRunBtn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                start_run(app.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("muteBtn") {
            let document = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let muted = {
                    let mut a = app.borrow_mut();
                    let muted = !a.settings.muted;
                    a.settings.muted = muted;
                    a.audio.set_muted(muted);
                    a.settings.save();
                    muted
                };
                update_mute_button(&document, muted);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("GeoChessr starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let app = Rc::new(RefCell::new(App::new()));

        let target = document
            .get_element_by_id("targetBoard")
            .expect("no target board");
        let coordinates = app.borrow().settings.show_coordinates;
        if let Err(err) = board::build_board_squares(
            &document,
            &target,
            TARGET_PREFIX,
            BOARD_FILES as usize,
            BOARD_RANKS as usize,
            coordinates,
        ) {
            log::error!("Failed to build target board: {err:?}");
        }

        setup_pointer_handlers(&target, app.clone());
        setup_keyboard_handlers(app.clone());
        setup_buttons(app.clone());
        setup_fen_preview();
        update_mute_button(&document, app.borrow().settings.muted);

        start_run(app);

        log::info!("GeoChessr running!");
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
    log::info!("GeoChessr (native) starting...");
    log::info!("Native mode is test-only - run with `trunk serve` for the web version");

    // Quick self-check of the parser and placement math
    println!("\nRunning notation checks...");
    check_notation_and_placement();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn check_notation_and_placement() {
    use geochessr::fen::SubBoard;
    use geochessr::placement::Placement;

    let fragment = SubBoard::parse("r2/bb1/B2").expect("demo fragment should parse");
    assert_eq!(fragment.width(), 3);
    assert_eq!(fragment.height(), 3);
    assert_eq!(fragment.to_fen(), "r2/bb1/B2");

    let placement = Placement::centered_on(7, 7, 3, 3).expect("placement should fit");
    assert_eq!((placement.x, placement.y), (5, 5));
    println!("✓ Notation checks passed!");
}
