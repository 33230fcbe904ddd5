use std::rc::Rc;

use chrono::{DateTime, Duration};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use tenk::config::Config;
use tenk::core::{ManualClock, SkillStore};
use tenk::output::ThemeMode;
use tenk::tracker::Tracker;
use tenk::tui::Dashboard;
use tenk::tui::render::draw;

fn demo_dashboard() -> (Dashboard, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::new(
        DateTime::from_timestamp(1_772_000_000, 0).unwrap(),
    ));
    let tracker = Tracker::new(
        SkillStore::with_demo_skills(true),
        ThemeMode::Dark,
        Box::new(Rc::clone(&clock)),
    );
    (Dashboard::new(tracker, &Config::default()), clock)
}

fn render(dashboard: &Dashboard) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|frame| draw(frame, dashboard)).unwrap();
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn press(dashboard: &mut Dashboard, code: KeyCode) {
    dashboard.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn demo_session_shows_skills_and_totals() {
    let (dashboard, _clock) = demo_dashboard();
    let screen = render(&dashboard);

    assert!(screen.contains("10,000 hours"));
    assert!(screen.contains("Programming"));
    assert!(screen.contains("Design"));
    assert!(screen.contains("English"));
    assert!(screen.contains("7,430"));
    assert!(screen.contains("2,450"));
    assert!(screen.contains("Amateur"));
}

#[test]
fn running_timer_is_drawn() {
    let (mut dashboard, clock) = demo_dashboard();
    press(&mut dashboard, KeyCode::Char(' '));
    clock.advance(Duration::seconds(65));
    dashboard.on_tick();

    let screen = render(&dashboard);
    assert!(screen.contains("00:01:05"));
    assert!(screen.contains("timer running"));
}

#[test]
fn empty_session_renders() {
    let clock = ManualClock::new(DateTime::from_timestamp(1_772_000_000, 0).unwrap());
    let tracker = Tracker::new(SkillStore::new(true), ThemeMode::Light, Box::new(clock));
    let dashboard = Dashboard::new(tracker, &Config::default());

    let screen = render(&dashboard);
    assert!(screen.contains("10,000 hours"));
    assert!(screen.contains("skills in progress"));
}

#[test]
fn add_skill_prompt_is_drawn() {
    let (mut dashboard, _clock) = demo_dashboard();
    press(&mut dashboard, KeyCode::Char('a'));
    for c in "Chess".chars() {
        press(&mut dashboard, KeyCode::Char(c));
    }

    let screen = render(&dashboard);
    assert!(screen.contains("Skill name"));
    assert!(screen.contains("Chess_"));
}
