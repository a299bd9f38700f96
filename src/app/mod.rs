//! App Module - event-wiring glue
//!
//! [`DemoApp`] owns one surface per output region, the four controllers,
//! the session-scoped counter, and the rate-limited wrappers, and maps
//! demo events onto them. The status row is reactive: handlers write a
//! status signal and a render effect mirrors it onto the status surface.
//!
//! Key bindings:
//!
//! - digits / `.` / `-`  type into the input buffer (debounced echo)
//! - `Enter`             run the calculator on the buffer
//! - `t`                 cycle text style and format the buffer
//! - `r`                 random color
//! - `s`                 scope demo
//! - `a` / `x` / `z`     animation start / stop / reset
//! - `f` / `g`           flip card / reset card
//! - `l` / `k`           loading start / stop
//! - `m` / `Esc`         modal open / close (click outside also closes)
//! - `q` / `Ctrl+C`      quit

mod input;

pub use input::{DemoEvent, convert_key_event, poll_event, read_event};

use std::io::{Write, stdout};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute, queue};
use spark_signals::{Signal, effect, signal};

use crate::controllers::{AnimationController, FlipCard, LoadingBar, Modal};
use crate::ops::{self, Debounce, ScopeSession, TextStyle, Throttle};
use crate::surface::{MemorySurface, StyleProperty, Surface, TermSurface};

/// Quiet period before the input echo settles.
const ECHO_WAIT: Duration = Duration::from_millis(300);

/// Minimum spacing between counted keypresses (throttle demo).
const KEY_METER_WINDOW: Duration = Duration::from_millis(500);

// =============================================================================
// Status signal
// =============================================================================

thread_local! {
    static STATUS: Signal<String> = signal(String::new());
}

/// Set the status line. The render effect mirrors it onto the status
/// surface.
pub fn set_status(message: impl Into<String>) {
    STATUS.with(|s| s.set(message.into()));
}

/// Current status line.
pub fn status() -> String {
    STATUS.with(|s| s.get())
}

// =============================================================================
// Regions
// =============================================================================

/// One surface per output region, plus the modal's row so clicks can be
/// classified as inside/outside the content area.
pub struct Regions {
    pub status: Arc<dyn Surface>,
    pub input: Arc<dyn Surface>,
    pub calc: Arc<dyn Surface>,
    pub text: Arc<dyn Surface>,
    pub color: Arc<dyn Surface>,
    pub scope: Arc<dyn Surface>,
    pub animation: Arc<dyn Surface>,
    pub card: Arc<dyn Surface>,
    pub loading: Arc<dyn Surface>,
    pub modal: Arc<dyn Surface>,
    pub modal_row: u16,
}

/// First terminal row used by output regions (rows above hold the
/// header and key help).
const FIRST_REGION_ROW: u16 = 3;

/// Region labels in row order; the modal is last.
const REGION_LABELS: [&str; 10] = [
    "status",
    "input",
    "calculator",
    "formatter",
    "color",
    "scope",
    "animation",
    "flip card",
    "loading",
    "modal",
];

/// Row of the modal region.
const MODAL_ROW: u16 = FIRST_REGION_ROW + REGION_LABELS.len() as u16 - 1;

impl Regions {
    /// Terminal-backed regions, one row each.
    pub fn terminal() -> Self {
        let surface = |index: usize| -> Arc<dyn Surface> {
            Arc::new(TermSurface::new(
                REGION_LABELS[index],
                FIRST_REGION_ROW + index as u16,
            ))
        };

        Self {
            status: surface(0),
            input: surface(1),
            calc: surface(2),
            text: surface(3),
            color: surface(4),
            scope: surface(5),
            animation: surface(6),
            card: surface(7),
            loading: surface(8),
            modal: surface(9),
            modal_row: MODAL_ROW,
        }
    }

    /// Headless regions for tests and non-terminal use.
    pub fn headless() -> Self {
        let surface = || -> Arc<dyn Surface> { Arc::new(MemorySurface::new()) };

        Self {
            status: surface(),
            input: surface(),
            calc: surface(),
            text: surface(),
            color: surface(),
            scope: surface(),
            animation: surface(),
            card: surface(),
            loading: surface(),
            modal: surface(),
            modal_row: MODAL_ROW,
        }
    }
}

// =============================================================================
// Terminal guard
// =============================================================================

/// Undoes raw mode, mouse capture, and cursor hiding when dropped.
/// Restore failures on an already torn-down terminal are ignored.
struct TermGuard;

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

// =============================================================================
// DemoApp
// =============================================================================

/// The wired-up demo: regions, controllers, session state, rate limiters.
pub struct DemoApp {
    regions: Regions,
    session: ScopeSession,
    style: TextStyle,
    input_buffer: String,
    animation: AnimationController,
    card: FlipCard,
    loading: LoadingBar,
    modal: Modal,
    echo: Debounce<String>,
    key_meter: Throttle<()>,
    keys_counted: Arc<AtomicU32>,
    quit: bool,
}

impl DemoApp {
    pub fn new(regions: Regions) -> Self {
        tracing::info!(
            ops = "compute, format, random_color, scope, debounce, throttle",
            "chalkboard ready"
        );

        let echo_surface = regions.input.clone();
        let echo = Debounce::new(
            move |buffer: String| echo_surface.set_text(&format!("> {buffer} (settled)")),
            ECHO_WAIT,
        );

        let keys_counted = Arc::new(AtomicU32::new(0));
        let meter = keys_counted.clone();
        let key_meter = Throttle::new(
            move |()| {
                meter.fetch_add(1, Ordering::SeqCst);
            },
            KEY_METER_WINDOW,
        );

        let animation = AnimationController::new(regions.animation.clone());
        let card = FlipCard::new(regions.card.clone());
        let loading = LoadingBar::new(regions.loading.clone());
        let modal = Modal::new(regions.modal.clone());

        Self {
            regions,
            session: ScopeSession::new(),
            style: TextStyle::default(),
            input_buffer: String::new(),
            animation,
            card,
            loading,
            modal,
            echo,
            key_meter,
            keys_counted,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Keypresses counted by the throttled meter.
    pub fn keys_counted(&self) -> u32 {
        self.keys_counted.load(Ordering::SeqCst)
    }

    /// Dispatch one demo event to its handler. Handler failures render
    /// into their own region and never propagate.
    pub fn handle(&mut self, event: DemoEvent) {
        if !matches!(event, DemoEvent::None | DemoEvent::Resize) {
            self.key_meter.call(());
        }

        match event {
            DemoEvent::Char(c) => self.handle_char(c),
            DemoEvent::Enter => self.run_calculator(),
            DemoEvent::Backspace => {
                self.input_buffer.pop();
                self.show_input();
            }
            DemoEvent::Escape => {
                if self.modal.is_open() {
                    self.modal.close();
                    set_status("modal closing");
                }
            }
            DemoEvent::Click(_, row) => {
                // Clicking outside the modal content area closes it
                if self.modal.is_open() && row != self.regions.modal_row {
                    self.modal.close();
                    set_status("modal closed (clicked outside)");
                }
            }
            DemoEvent::Quit => self.quit = true,
            DemoEvent::Resize | DemoEvent::None => {}
        }
    }

    fn handle_char(&mut self, c: char) {
        match c {
            '0'..='9' | '.' | '-' => {
                self.input_buffer.push(c);
                self.show_input();
            }
            'a' => {
                self.animation.start();
                set_status("animation started");
            }
            'x' => {
                self.animation.stop();
                set_status("animation stopped");
            }
            'z' => {
                self.animation.reset();
                set_status("animation reset");
            }
            'f' => {
                self.card.flip();
                let face = if self.card.is_flipped() { "back" } else { "front" };
                self.regions.card.set_text(face);
                set_status("card flipped");
            }
            'g' => {
                self.card.reset();
                self.regions.card.set_text("front");
                set_status("card reset");
            }
            'l' => {
                self.loading.start();
                set_status("loading started");
            }
            'k' => {
                self.loading.stop();
                set_status("loading stopped");
            }
            'm' => {
                self.modal.open();
                self.regions.modal.set_text("press Esc or click outside to close");
                set_status("modal opened");
            }
            't' => self.run_formatter(),
            'r' => self.run_color(),
            's' => self.run_scope(),
            'q' => self.quit = true,
            _ => {}
        }
    }

    /// Show the buffer immediately; the echo settles after the debounce
    /// wait so bursts of typing produce one settled line.
    fn show_input(&mut self) {
        self.regions.input.set_text(&format!("> {}", self.input_buffer));
        self.echo.call(self.input_buffer.clone());
    }

    fn run_calculator(&mut self) {
        let raw = self.input_buffer.trim();
        if raw.is_empty() {
            self.regions.calc.set_text("type a number first");
            return;
        }

        match ops::calc::compute_str(raw) {
            Ok(report) => {
                let factorial = report
                    .factorial
                    .map_or_else(|| "undefined".to_string(), |f| f.to_string());
                let parity = if report.is_even { "even" } else { "odd" };
                self.regions.calc.set_text(&format!(
                    "sq {} | cube {} | root {} | {} | ! {}",
                    report.squared, report.cubed, report.square_root, parity, factorial
                ));
                set_status(format!("computed {raw}"));
            }
            Err(err) => {
                // The one expected failure: render it, don't propagate
                self.regions.calc.set_text(&format!("error: {err}"));
                set_status("calculator error");
            }
        }
    }

    fn run_formatter(&mut self) {
        self.style = self.style.next();
        let sample = if self.input_buffer.is_empty() {
            "hello world"
        } else {
            self.input_buffer.as_str()
        };
        let formatted = ops::format(sample, self.style);
        self.regions
            .text
            .set_text(&format!("{}: {formatted}", self.style.name()));
        set_status(format!("style -> {}", self.style.name()));
    }

    fn run_color(&mut self) {
        let rgba = ops::random_rgba();
        let hex = rgba.to_hex();
        self.regions
            .color
            .apply_style(StyleProperty::Background(rgba));
        self.regions.color.set_text(&hex);
        set_status(format!("color {hex}"));
    }

    fn run_scope(&mut self) {
        let report = self.session.run();
        self.regions.scope.set_text(&format!(
            "session {} | local {} | nested {}",
            report.global_count, report.local_count, report.nested_value
        ));
        set_status("scope demo ran");
    }

    // =========================================================================
    // Terminal loop
    // =========================================================================

    /// Run the interactive loop on the terminal. Blocks until quit.
    pub fn run(&mut self) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        // Restore the terminal on every exit path, early errors and
        // panics included.
        let _guard = TermGuard;
        let mut out = stdout();
        execute!(
            out,
            Clear(ClearType::All),
            cursor::Hide,
            EnableMouseCapture
        )?;
        self.draw_chrome()?;

        // Render effect: status surface follows the status signal
        let status_surface = self.regions.status.clone();
        let keys = self.keys_counted.clone();
        let stop_effect = effect(move || {
            let line = status();
            let counted = keys.load(Ordering::SeqCst);
            status_surface.set_text(&format!("{line}  (keys counted: {counted})"));
        });
        set_status("ready");

        while !self.quit {
            if let Some(event) = poll_event(Duration::from_millis(16))? {
                self.handle(event);
            }
        }

        stop_effect();
        Ok(())
    }

    /// Header, key help, and the initial empty regions.
    fn draw_chrome(&self) -> std::io::Result<()> {
        let mut out = stdout();
        queue!(
            out,
            MoveTo(0, 0),
            Print("chalkboard - scripting concepts on a terminal"),
            MoveTo(0, 1),
            Print("keys: digits+Enter calc | t format | r color | s scope | a/x/z anim | f/g card | l/k load | m/Esc modal | q quit"),
        )?;
        out.flush()?;

        for region in [
            &self.regions.status,
            &self.regions.input,
            &self.regions.calc,
            &self.regions.text,
            &self.regions.color,
            &self.regions.scope,
            &self.regions.animation,
            &self.regions.card,
            &self.regions.loading,
            &self.regions.modal,
        ] {
            region.commit();
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
