use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    prelude::Frame,
    Terminal,
};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::flow::{Flow, FlowEvent, ScreenKind};
use crate::screens::{self, ConfirmQuitScreen};
use crate::ui::common_nav::is_quit_chord;

pub enum Transition {
    Stay,
    /// Ask the state machine to move on. A screen returns this at most once.
    Advance(FlowEvent),
    /// Close an overlay.
    Dismiss,
    Quit,
}

/// State shared by every mounted screen. Only decoration lives here; the
/// prompt is owned by the state machine.
pub struct AppCtx {
    pub rng: ChaCha8Rng,
    pub stars: usize,
}

impl AppCtx {
    pub fn new(seed: Option<u64>, stars: usize) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng, stars }
    }
}

pub trait ScreenWidget {
    fn title(&self) -> &str { "WhatIf" }
    fn draw(&self, f: &mut Frame<'_>, area: Rect, ctx: &AppCtx);

    /// Advances this screen's timers by `dt` of wall time.
    fn on_tick(&mut self, _dt: Duration, _ctx: &mut AppCtx) -> Transition {
        Transition::Stay
    }

    fn on_key(&mut self, key: KeyEvent, ctx: &mut AppCtx) -> Transition;
}

/// Owns the state machine and the one mounted controller for its current
/// screen. Replacing the controller drops its timers with it.
pub struct App {
    ctx: AppCtx,
    flow: Flow,
    active: Box<dyn ScreenWidget>,
    overlay: Option<Box<dyn ScreenWidget>>,
    quit: bool,
}

impl App {
    pub fn new(mut ctx: AppCtx) -> Self {
        let flow = Flow::new();
        let active = screens::mount(flow.screen(), &mut ctx);
        Self { ctx, flow, active, overlay: None, quit: false }
    }

    pub fn flow(&self) -> &Flow { &self.flow }
    pub fn active(&self) -> ScreenKind { self.flow.screen().kind() }
    pub fn should_quit(&self) -> bool { self.quit }
    #[cfg(test)]
    fn overlay_open(&self) -> bool { self.overlay.is_some() }

    pub fn tick(&mut self, dt: Duration) {
        let t = self.active.on_tick(dt, &mut self.ctx);
        self.apply(t);
    }

    pub fn on_key(&mut self, k: KeyEvent) {
        if let Some(overlay) = self.overlay.as_mut() {
            let t = overlay.on_key(k, &mut self.ctx);
            self.apply(t);
            return;
        }
        if is_quit_chord(k) {
            self.overlay = Some(Box::new(ConfirmQuitScreen::new()));
            return;
        }
        let t = self.active.on_key(k, &mut self.ctx);
        self.apply(t);
    }

    pub fn draw(&self, f: &mut Frame<'_>) {
        let size = f.size();
        self.active.draw(f, size, &self.ctx);
        if let Some(overlay) = &self.overlay {
            overlay.draw(f, size, &self.ctx);
        }
    }

    fn apply(&mut self, t: Transition) {
        match t {
            Transition::Stay => {}
            Transition::Advance(event) => {
                if self.flow.apply(&event) {
                    self.active = screens::mount(self.flow.screen(), &mut self.ctx);
                }
            }
            Transition::Dismiss => self.overlay = None,
            Transition::Quit => self.quit = true,
        }
    }
}

pub struct RunOpts {
    pub fps: u16,
    pub stars: usize,
    pub seed: Option<u64>,
}

pub async fn run(opts: RunOpts) -> Result<()> {
    enable_raw_mode().context("enabling raw mode")?;
    let res = session(&opts).await;

    // restore, even when setup or the loop failed
    let restored = disable_raw_mode()
        .context("disabling raw mode")
        .and_then(|_| leave_screen(&mut io::stdout()).context("leaving alternate screen"));
    res.and(restored)
}

async fn session(opts: &RunOpts) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")?;
    terminal.clear().context("clearing terminal")?;

    let mut app = App::new(AppCtx::new(opts.seed, opts.stars));
    info!(fps = opts.fps, stars = opts.stars, "starting");
    let res = event_loop(&mut terminal, &mut app, opts.fps).await;
    info!(screen = ?app.active(), prompt = app.flow().prompt_text(), "bye");
    res
}

/// Leaves the alternate screen and shows the cursor again. Safe to call
/// when the alternate screen was never entered.
fn leave_screen<W: io::Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, fps: u16) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let pump = tokio::task::spawn_blocking(move || pump_input(tx));

    let mut frames = time::interval(Duration::from_secs(1) / u32::from(fps.max(1)));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last = Instant::now();

    let res: Result<()> = loop {
        if let Err(e) = terminal.draw(|f| app.draw(f)) {
            break Err(e).context("drawing frame");
        }

        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                app.tick(now - last);
                last = now;
            }
            ev = rx.recv() => match ev {
                Some(Event::Key(k)) if k.kind == KeyEventKind::Press => app.on_key(k),
                Some(_) => {}
                // the pump only hangs up on error; joining it below reports why
                None => break Ok(()),
            },
        }

        if app.should_quit() {
            break Ok(());
        }
    };

    drop(rx);
    pump.await
        .context("joining input pump")?
        .context("reading terminal events")?;
    res
}

/// Blocking reader feeding crossterm events into the loop. Exits once the
/// receiver is gone.
fn pump_input(tx: mpsc::UnboundedSender<Event>) -> io::Result<()> {
    while !tx.is_closed() {
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            if tx.send(ev).is_err() {
                break;
            }
        }
    }
    debug!("input pump stopped");
    Ok(())
}
