//! Interactive practice dashboard.
//!
//! Keybindings: j/k or arrows select, `a` add skill, `h` add hours,
//! space/`s` start or stop the timer, `t` toggle theme, q/Esc quit.

use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, Utc};
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::ListState;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::skill::{Skill, SkillIcon, SkillId};
use crate::core::store::{Rejected, StoreSummary};
use crate::error::Result;
use crate::tracker::{Action, Outcome, Tracker};
use crate::tui::render;
use crate::tui::ticker::Ticker;

const INPUT_POLL: Duration = Duration::from_millis(50);
const MAX_NAME_LEN: usize = 48;
const MAX_HOURS_INPUT: usize = 8;

/// What the keyboard is currently editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    NameInput { buffer: String },
    IconPicker { name: String, icon: SkillIcon },
    HoursInput { id: SkillId, buffer: String },
}

#[derive(Debug)]
pub struct Dashboard {
    tracker: Tracker,
    mode: Mode,
    list_state: ListState,
    /// Clock reading used for timer display; refreshed on ticks and after
    /// every action, never between.
    display_now: DateTime<Utc>,
    history_days: u32,
    default_icon: SkillIcon,
    status: Option<String>,
    quit: bool,
}

impl Dashboard {
    #[must_use]
    pub fn new(tracker: Tracker, config: &Config) -> Self {
        let mut list_state = ListState::default();
        if !tracker.store().is_empty() {
            list_state.select(Some(0));
        }
        let display_now = tracker.now();
        Self {
            tracker,
            mode: Mode::Normal,
            list_state,
            display_now,
            history_days: config.display.history_days,
            default_icon: config.tracking.default_icon,
            status: None,
            quit: false,
        }
    }

    #[must_use]
    pub const fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    #[must_use]
    pub const fn list_state(&self) -> &ListState {
        &self.list_state
    }

    #[must_use]
    pub const fn display_now(&self) -> DateTime<Utc> {
        self.display_now
    }

    #[must_use]
    pub const fn history_days(&self) -> u32 {
        self.history_days
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    #[must_use]
    pub fn selected_skill(&self) -> Option<&Skill> {
        self.list_state
            .selected()
            .and_then(|idx| self.tracker.store().skills().get(idx))
    }

    fn selected_id(&self) -> Option<SkillId> {
        self.selected_skill().map(|skill| skill.id)
    }

    /// Refresh the displayed clock. Does not touch any totals.
    pub fn on_tick(&mut self) {
        self.display_now = self.tracker.now();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        let mode = std::mem::replace(&mut self.mode, Mode::Normal);
        self.mode = match mode {
            Mode::Normal => {
                self.handle_normal_key(key.code);
                std::mem::replace(&mut self.mode, Mode::Normal)
            }
            Mode::NameInput { buffer } => self.handle_name_key(key.code, buffer),
            Mode::IconPicker { name, icon } => self.handle_icon_key(key.code, name, icon),
            Mode::HoursInput { id, buffer } => self.handle_hours_key(key.code, id, buffer),
        };
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        self.status = None;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('a') => {
                self.mode = Mode::NameInput {
                    buffer: String::new(),
                };
            }
            KeyCode::Char('h') => {
                if let Some(id) = self.selected_id() {
                    self.mode = Mode::HoursInput {
                        id,
                        buffer: String::new(),
                    };
                }
            }
            KeyCode::Char(' ' | 's') => {
                if let Some(id) = self.selected_id() {
                    self.dispatch(Action::ToggleTimer { id });
                }
            }
            KeyCode::Char('t') => {
                self.dispatch(Action::ToggleTheme);
            }
            _ => {}
        }
    }

    fn handle_name_key(&mut self, code: KeyCode, mut buffer: String) -> Mode {
        match code {
            KeyCode::Esc => return Mode::Normal,
            KeyCode::Enter => {
                if buffer.trim().is_empty() {
                    self.status = Some("Name cannot be blank".to_string());
                } else {
                    self.status = None;
                    return Mode::IconPicker {
                        name: buffer,
                        icon: self.default_icon,
                    };
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) if buffer.chars().count() < MAX_NAME_LEN => buffer.push(c),
            _ => {}
        }
        Mode::NameInput { buffer }
    }

    fn handle_icon_key(&mut self, code: KeyCode, name: String, icon: SkillIcon) -> Mode {
        match code {
            KeyCode::Esc => Mode::NameInput { buffer: name },
            KeyCode::Left | KeyCode::Char('h') => Mode::IconPicker {
                name,
                icon: icon.cycle(false),
            },
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Mode::IconPicker {
                name,
                icon: icon.cycle(true),
            },
            KeyCode::Enter => {
                if let Outcome::SkillAdded { .. } = self.dispatch(Action::AddSkill { name, icon }) {
                    let last = self.tracker.store().len().saturating_sub(1);
                    self.list_state.select(Some(last));
                }
                Mode::Normal
            }
            _ => Mode::IconPicker { name, icon },
        }
    }

    fn handle_hours_key(&mut self, code: KeyCode, id: SkillId, mut buffer: String) -> Mode {
        match code {
            KeyCode::Esc => return Mode::Normal,
            KeyCode::Enter => {
                let hours = parse_hours(&buffer);
                match self.dispatch(Action::AddHours { id, hours }) {
                    Outcome::Ignored {
                        reason: Rejected::NonPositiveHours,
                    } => {
                        self.status = Some("Enter a positive number of hours".to_string());
                    }
                    Outcome::Ignored {
                        reason: Rejected::HoursOverflow,
                    } => {
                        self.status = Some("That many hours would overflow the total".to_string());
                    }
                    _ => return Mode::Normal,
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c)
                if (c.is_ascii_digit() || c == '.' || c == ',')
                    && buffer.len() < MAX_HOURS_INPUT =>
            {
                buffer.push(c);
            }
            _ => {}
        }
        Mode::HoursInput { id, buffer }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.tracker.store().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.list_state.select(Some(next));
    }

    fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = self.tracker.apply(action);
        debug!(?outcome, "dashboard action");
        match &outcome {
            Outcome::TimerStopped { elapsed_hours, .. } => {
                self.status = Some(format!("Logged {elapsed_hours:.2} h"));
            }
            Outcome::HoursAdded { hours, .. } => {
                self.status = Some(format!("Added {hours} h"));
            }
            _ => {}
        }
        self.display_now = self.tracker.now();
        outcome
    }
}

/// Accepts `1.5` and `1,5`. Anything unparsable becomes NaN and is
/// rejected downstream like any other non-positive amount.
fn parse_hours(input: &str) -> f64 {
    input.trim().replace(',', ".").parse().unwrap_or(f64::NAN)
}

/// Run the dashboard until the user quits, then hand back the final stats.
pub fn run_dashboard(tracker: Tracker, config: &Config) -> Result<StoreSummary> {
    let mut dashboard = Dashboard::new(tracker, config);

    let screen = ScreenGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let result = Terminal::new(backend)
        .map_err(Into::into)
        .and_then(|mut terminal| run_event_loop(&mut terminal, &mut dashboard, config));
    screen.restore()?;

    result?;

    let summary = dashboard.tracker().store().summary();
    info!(
        total_hours = summary.total_hours,
        skills = summary.skill_count,
        "dashboard closed"
    );
    Ok(summary)
}

/// Raw mode plus the alternate screen. Dropping the guard undoes whatever
/// part of the setup succeeded.
struct ScreenGuard<W: Write> {
    out: W,
    raw: bool,
    alternate: bool,
}

impl<W: Write> ScreenGuard<W> {
    fn enter(out: W) -> Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            out,
            raw: true,
            alternate: false,
        };
        guard.out.execute(EnterAlternateScreen)?;
        guard.alternate = true;
        Ok(guard)
    }

    /// Tear down and report the first failure.
    fn restore(mut self) -> Result<()> {
        self.teardown()
    }

    fn teardown(&mut self) -> Result<()> {
        let raw = if std::mem::take(&mut self.raw) {
            disable_raw_mode()
        } else {
            Ok(())
        };
        if std::mem::take(&mut self.alternate) {
            self.out.execute(LeaveAlternateScreen)?;
        }
        raw?;
        Ok(())
    }
}

impl<W: Write> Drop for ScreenGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = self.teardown() {
            debug!(%err, "terminal restore failed");
        }
    }
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    dashboard: &mut Dashboard,
    config: &Config,
) -> Result<()> {
    let ticker = Ticker::spawn(Duration::from_millis(config.timer.tick_ms))?;

    loop {
        terminal.draw(|frame| render::draw(frame, dashboard))?;

        if dashboard.should_quit() {
            break;
        }

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    dashboard.handle_key(key);
                }
            }
        }

        if ticker.try_tick() {
            dashboard.on_tick();
        }
    }

    ticker.cancel();
    Ok(())
}
