use crate::{
    feeders,
    field::{Focus, InputField},
    pane::{self, PaneLine},
    styles,
    view::{self, ViewSnap},
};
use anyhow::Result;
use bizscout_search::{SearchBackend, SearchError, SearchQuery, SearchResponse};
use bizscout_view::{ViewState, render};
use crossterm::{
    event::{Event as CtEvent, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self, Stdout},
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::mpsc::{Receiver, Sender, channel};

const BRAILLE_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub enum TuiMsg {
    InputEvent(CtEvent),
    Tick,
    Submit,
    SearchDone(Result<SearchResponse, SearchError>),
    Quit,
}

#[derive(PartialEq)]
enum Flow {
    Continue,
    Exit,
}

struct Tui {
    backend: Arc<dyn SearchBackend>,

    // terminal
    term: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    last_tick: Instant,

    // form state
    location: InputField,
    search_term: InputField,
    focus: Focus,

    // results pane
    lines: Vec<PaneLine>,
    scroll: usize,
    dirty: bool,

    // busy/spinner
    busy: u32,
    spin_idx: usize,
}

/// Run the interactive UI until the user quits.
pub async fn run(backend: Arc<dyn SearchBackend>) -> Result<()> {
    let (tx, mut rx) = channel::<TuiMsg>(64);
    feeders::spawn(tx.clone());

    let mut tui = Tui::new(backend)?;
    let result = tui.drive(&mut rx, &tx).await;
    tui.restore();
    result
}

impl Tui {
    fn new(backend: Arc<dyn SearchBackend>) -> Result<Self> {
        let mut stdout = io::stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen)?;
        let backend_term = CrosstermBackend::new(stdout);
        let mut term = Terminal::new(backend_term)?;
        term.clear()?;

        Ok(Self {
            backend,
            term,
            tick_rate: Duration::from_millis(80),
            last_tick: Instant::now(),
            location: InputField::default(),
            search_term: InputField::default(),
            focus: Focus::Location,
            lines: vec![PaneLine::new(
                "Enter a location and a search term, then press Enter.",
                styles::system(),
            )],
            scroll: 0,
            dirty: true,
            busy: 0,
            spin_idx: 0,
        })
    }

    async fn drive(&mut self, rx: &mut Receiver<TuiMsg>, tx: &Sender<TuiMsg>) -> Result<()> {
        self.draw()?;
        while let Some(msg) = rx.recv().await {
            if self.handle(msg, tx)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    fn restore(&mut self) {
        disable_raw_mode().ok();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }

    fn handle(&mut self, msg: TuiMsg, tx: &Sender<TuiMsg>) -> Result<Flow> {
        match msg {
            TuiMsg::InputEvent(ev) => {
                if let CtEvent::Key(key) = ev
                    && let Some(next) = self.handle_key(key)
                {
                    let _ = tx.try_send(next);
                }
            }
            TuiMsg::Submit => self.submit_search(tx),
            TuiMsg::SearchDone(outcome) => {
                self.set_busy(false);
                // The renderer collapses transport detail to the generic
                // message; the client already logged it.
                self.apply(render(outcome));
            }
            TuiMsg::Tick => {
                self.step_spinner();
                if self.dirty || self.last_tick.elapsed() >= self.tick_rate {
                    self.draw()?;
                    self.last_tick = Instant::now();
                    self.dirty = false;
                }
            }
            TuiMsg::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<TuiMsg> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL) => return Some(TuiMsg::Quit),
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
                self.focus = self.focus.next();
                self.dirty = true;
            }
            (KeyCode::Enter, _) => return Some(TuiMsg::Submit),
            (KeyCode::PageUp, _) => {
                self.scroll = self.scroll.saturating_sub(5);
                self.dirty = true;
            }
            (KeyCode::PageDown, _) => {
                self.scroll = self.scroll.saturating_add(5);
                self.dirty = true;
            }
            (KeyCode::Up, _) => {
                self.scroll = self.scroll.saturating_sub(1);
                self.dirty = true;
            }
            (KeyCode::Down, _) => {
                self.scroll = self.scroll.saturating_add(1);
                self.dirty = true;
            }
            (KeyCode::Left, _) => {
                self.focused_field().left();
                self.dirty = true;
            }
            (KeyCode::Right, _) => {
                self.focused_field().right();
                self.dirty = true;
            }
            (KeyCode::Home, _) => {
                self.focused_field().home();
                self.dirty = true;
            }
            (KeyCode::End, _) => {
                self.focused_field().end();
                self.dirty = true;
            }
            (KeyCode::Backspace, _) => {
                self.focused_field().backspace();
                self.dirty = true;
            }
            (KeyCode::Delete, _) => {
                self.focused_field().delete();
                self.dirty = true;
            }
            (KeyCode::Esc, _) => {
                self.focused_field().clear();
                self.dirty = true;
            }
            (KeyCode::Char(ch), _) => {
                self.focused_field().insert(ch);
                self.dirty = true;
            }
            _ => {}
        }
        None
    }

    fn focused_field(&mut self) -> &mut InputField {
        match self.focus {
            Focus::Location => &mut self.location,
            Focus::Term => &mut self.search_term,
        }
    }

    fn submit_search(&mut self, tx: &Sender<TuiMsg>) {
        let location = self.location.text().trim().to_string();
        let term = self.search_term.text().trim().to_string();
        if location.is_empty() || term.is_empty() {
            self.lines = vec![PaneLine::new(
                "Both a location and a search term are needed.",
                styles::system(),
            )];
            self.scroll = 0;
            self.dirty = true;
            return;
        }

        // Loading goes up before the request leaves; the terminal state
        // replaces it when the completion message lands.
        self.apply(ViewState::Loading);
        self.set_busy(true);

        let query = SearchQuery::new(location, term);
        let backend = self.backend.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = backend.search(&query).await;
            let _ = tx.send(TuiMsg::SearchDone(outcome)).await;
        });
    }

    fn apply(&mut self, state: ViewState) {
        self.lines = pane::lines(&state);
        self.scroll = 0;
        self.dirty = true;
    }

    fn spinner(&self) -> &'static str {
        if self.busy > 0 {
            BRAILLE_FRAMES[self.spin_idx % BRAILLE_FRAMES.len()]
        } else {
            " "
        }
    }

    fn set_busy(&mut self, on: bool) {
        if on {
            self.busy = self.busy.saturating_add(1);
        } else {
            self.busy = self.busy.saturating_sub(1);
        }
        self.dirty = true;
    }

    fn step_spinner(&mut self) {
        if self.busy > 0 {
            self.spin_idx = (self.spin_idx + 1) % BRAILLE_FRAMES.len();
            self.dirty = true;
        }
    }

    fn draw(&mut self) -> Result<()> {
        let snap = ViewSnap {
            location: self.location.text().to_string(),
            location_cursor: self.location.cursor(),
            term: self.search_term.text().to_string(),
            term_cursor: self.search_term.cursor(),
            focus: self.focus,
            lines: self.lines.clone(),
            scroll: self.scroll,
            busy: self.busy,
            spinner: self.spinner(),
        };
        view::draw(&mut self.term, &snap)
    }
}
