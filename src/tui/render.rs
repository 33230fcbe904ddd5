//! Dashboard drawing. Pure functions of [`Dashboard`] state.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap};

use crate::core::skill::{Skill, SkillIcon};
use crate::core::tier::{MASTERY_HOURS, Standing, TierAccent};
use crate::output::Palette;
use crate::tui::dashboard::{Dashboard, Mode};
use crate::utils::format::{format_hours, spark_bars, truncate_string};

const LIST_NAME_WIDTH: usize = 28;

pub fn draw(frame: &mut Frame, dashboard: &Dashboard) {
    let palette = dashboard.tracker().theme().palette();
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let [header, stats, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(2),
    ])
    .areas(area);

    render_header(frame, header, dashboard, &palette);
    render_stats(frame, stats, dashboard, &palette);

    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);
    render_skill_list(frame, list_area, dashboard, &palette);
    render_detail(frame, detail_area, dashboard, &palette);
    render_footer(frame, footer, dashboard, &palette);

    match dashboard.mode() {
        Mode::Normal => {}
        Mode::NameInput { buffer } => {
            render_prompt(frame, "New skill", "Skill name", &format!("{buffer}_"), &palette);
        }
        Mode::IconPicker { name, icon } => render_icon_picker(frame, name, *icon, &palette),
        Mode::HoursInput { buffer, .. } => {
            render_prompt(
                frame,
                "Add time",
                "How many hours did you practice?",
                &format!("{buffer}_"),
                &palette,
            );
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, dashboard: &Dashboard, palette: &Palette) {
    let theme = dashboard.tracker().theme();
    let title = Line::from(vec![
        Span::styled(
            "10,000 hours",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  mastery through deliberate practice  ",
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            format!("[t] {}", theme.toggle_glyph()),
            Style::default().fg(palette.muted),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border_style(false));
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center).block(block),
        area,
    );
}

fn render_stats(frame: &mut Frame, area: Rect, dashboard: &Dashboard, palette: &Palette) {
    let summary = dashboard.tracker().store().summary();
    let cells = [
        (format_hours(summary.total_hours), "total hours", palette.primary),
        (
            summary.skill_count.to_string(),
            "skills in progress",
            palette.accent(TierAccent::Purple),
        ),
        (
            summary.legend_count.to_string(),
            "legends",
            palette.accent(TierAccent::Orange),
        ),
    ];
    let areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
    for ((value, label, color), cell) in cells.into_iter().zip(areas.iter()) {
        let text = vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(palette.muted))),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), *cell);
    }
}

fn skill_item<'a>(skill: &'a Skill, dashboard: &Dashboard, palette: &Palette) -> ListItem<'a> {
    let standing = skill.standing();
    let mut first = vec![
        Span::raw(format!("{} ", skill.icon.glyph())),
        Span::styled(
            truncate_string(&skill.name, LIST_NAME_WIDTH),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if skill.timer.is_running() {
        first.push(Span::styled(
            format!("  ⏱ {}", skill.timer.display(dashboard.display_now())),
            Style::default().fg(palette.timer),
        ));
    }
    let second = Line::from(vec![
        Span::styled(
            format!(
                "  {} / {} h  ",
                format_hours(skill.hours),
                format_hours(MASTERY_HOURS)
            ),
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            format!(" {} ", standing.tier.name),
            palette.badge(standing.tier.accent),
        ),
        Span::raw(format!("  {:.1}%", standing.progress_percent)),
    ]);
    ListItem::new(vec![Line::from(first), second])
}

fn render_skill_list(frame: &mut Frame, area: Rect, dashboard: &Dashboard, palette: &Palette) {
    let block = Block::default()
        .title(" My skills ")
        .borders(Borders::ALL)
        .border_style(palette.border_style(matches!(dashboard.mode(), Mode::Normal)));

    let store = dashboard.tracker().store();
    if store.is_empty() {
        let hint = Paragraph::new("No skills yet. Press [a] to add one.")
            .style(Style::default().fg(palette.muted))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = store
        .iter()
        .map(|skill| skill_item(skill, dashboard, palette))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(palette.highlight))
        .highlight_symbol("▶ ");
    let mut state = dashboard.list_state().clone();
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut Frame, area: Rect, dashboard: &Dashboard, palette: &Palette) {
    let Some(skill) = dashboard.selected_skill() else {
        let block = Block::default()
            .title(" Details ")
            .borders(Borders::ALL)
            .border_style(palette.border_style(false));
        frame.render_widget(block, area);
        return;
    };

    let block = Block::default()
        .title(format!(" {} {} ", skill.icon.glyph(), skill.name))
        .borders(Borders::ALL)
        .border_style(palette.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [badge_area, gauge_area, text_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(inner);

    let standing = skill.standing();
    let badge = Line::from(vec![
        Span::styled(format!(" {} ", standing.tier.name), palette.badge(standing.tier.accent)),
        Span::raw(format!("  {:.1}%", standing.progress_percent)),
    ]);
    frame.render_widget(Paragraph::new(badge), badge_area);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.accent(standing.tier.accent)))
        .ratio(standing.progress_percent / 100.0)
        .label(format!("{} / {} h", format_hours(skill.hours), format_hours(MASTERY_HOURS)))
        .use_unicode(true);
    frame.render_widget(gauge, gauge_area);

    frame.render_widget(
        Paragraph::new(detail_lines(skill, &standing, dashboard, palette)).wrap(Wrap { trim: false }),
        text_area,
    );
}

fn detail_lines(
    skill: &Skill,
    standing: &Standing,
    dashboard: &Dashboard,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let store = dashboard.tracker().store();
    let now = dashboard.display_now();
    let mut lines = Vec::new();

    if let (Some(next), Some(remaining)) = (standing.next_tier, standing.hours_to_next) {
        lines.push(Line::from(Span::styled(
            format!("{} h to \"{}\"", format_hours(remaining), next.name),
            Style::default().fg(palette.muted),
        )));
    }
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::styled("Today  ", Style::default().fg(palette.today)),
        Span::styled(
            format!("{:.1} h", store.today_hours(skill.id, now)),
            Style::default()
                .fg(palette.today)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    if store.tracks_daily() {
        let days = store.recent_days(skill.id, now, dashboard.history_days());
        let values: Vec<f64> = days.iter().map(|(_, hours)| *hours).collect();
        let labels: String = days
            .iter()
            .map(|(date, _)| date.format("%d").to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let bars: String = spark_bars(&values)
            .chars()
            .map(|bar| format!("{bar}{bar} "))
            .collect();
        lines.push(Line::from(Span::styled(
            format!("Last {} days", dashboard.history_days()),
            Style::default().fg(palette.muted),
        )));
        lines.push(Line::from(Span::styled(
            bars.trim_end().to_string(),
            Style::default().fg(palette.primary),
        )));
        lines.push(Line::from(Span::styled(labels, Style::default().fg(palette.muted))));
    }
    lines.push(Line::default());

    if skill.timer.is_running() {
        lines.push(Line::from(vec![
            Span::styled(
                skill.timer.display(now),
                Style::default()
                    .fg(palette.timer)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  timer running", Style::default().fg(palette.muted)),
        ]));
        lines.push(Line::from("[space] stop   [h] add hours"));
    } else {
        lines.push(Line::from("[space] start  [h] add hours"));
    }
    lines
}

fn render_footer(frame: &mut Frame, area: Rect, dashboard: &Dashboard, palette: &Palette) {
    let keys = "[a] add skill  [h] add hours  [space] start/stop  [j/k] select  [t] theme  [q] quit";
    let mut lines = vec![Line::from(Span::styled(keys, Style::default().fg(palette.muted)))];
    if let Some(status) = dashboard.status() {
        lines.push(Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(palette.focus),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_prompt(frame: &mut Frame, title: &str, label: &str, value: &str, palette: &Palette) {
    let area = centered_rect(50, 7, frame.area());
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(palette.border_style(true))
        .style(palette.base());
    let text = vec![
        Line::from(Span::styled(label.to_string(), Style::default().fg(palette.muted))),
        Line::default(),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "[enter] confirm  [esc] cancel",
            Style::default().fg(palette.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_icon_picker(frame: &mut Frame, name: &str, selected: SkillIcon, palette: &Palette) {
    let area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" Icon for {name} "))
        .borders(Borders::ALL)
        .border_style(palette.border_style(true))
        .style(palette.base());

    let mut lines: Vec<Line> = SkillIcon::ALL
        .chunks(5)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|icon| {
                        let style = if *icon == selected {
                            Style::default()
                                .fg(palette.primary)
                                .add_modifier(Modifier::REVERSED)
                        } else {
                            Style::default().fg(palette.muted)
                        };
                        Span::styled(format!(" {} ", icon.glyph()), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("{selected}   [←/→] choose  [enter] add  [esc] back"),
        Style::default().fg(palette.muted),
    )));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
