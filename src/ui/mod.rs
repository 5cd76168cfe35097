use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::block::Title;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, OverlayState};
use crate::catalog::{MenuItem, SectionKind};
use crate::definitions::HitTarget;
use crate::i18n::{self, Field, SUPPORTED_LANGS};

mod theme;
use theme::*;

/// Minimum display width of a card; columns are added as the terminal
/// widens, like the page's auto-fill grid.
const CARD_MIN_WIDTH: u16 = 34;
/// Outer card height: border plus three content lines.
const CARD_HEIGHT: u16 = 5;
const CARD_GAP: u16 = 1;

fn cell_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}

/// Truncates `text` to at most `max` display columns, appending an ellipsis
/// when something was cut. Width-aware so CJK text never overflows a card.
fn truncate_to_width(text: &str, max: u16) -> String {
    if cell_width(text) <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0u16;
    for ch in text.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(1).max(1) as u16;
        if used + width > budget {
            break;
        }
        out.push(ch);
        used += width;
    }
    out.push('…');
    out
}

pub fn render(f: &mut Frame<'_>, app: &mut App) {
    let size = f.size();
    app.hits.clear();

    if size.width < 80 || size.height < 24 {
        let block = Paragraph::new("Terminal too small — resize to at least 80x24.")
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title("MIGNON")
                    .borders(Borders::ALL)
                    .style(Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY)),
            )
            .style(Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY));
        f.render_widget(block, size);
        return;
    }

    let base = Block::default().style(Style::default().bg(BG_PRIMARY));
    f.render_widget(base, size);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header bar
            Constraint::Length(3), // hero
            Constraint::Length(2), // section title + vote hint
            Constraint::Min(CARD_HEIGHT), // card grid
            Constraint::Length(1), // status bar
        ])
        .split(size);

    render_header(f, app, vertical[0]);
    render_hero(f, app, vertical[1]);
    render_section_head(f, app, vertical[2]);
    render_card_grid(f, app, vertical[3]);
    render_status_bar(f, app, vertical[4]);

    if let Some(overlay) = app.overlay {
        render_overlay(f, app, overlay);
    }
    if app.toast.is_some() {
        render_toast(f, app);
    }
}

/// Header bar: brand, store name, section nav, language toggle, share.
///
/// Spans are laid out with a running cursor so each button's rect can be
/// registered for mouse hit-testing as it is emitted.
fn render_header(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let ui = app.lang.ui();
    let mut spans: Vec<Span<'_>> = Vec::new();
    let area_end = area.x.saturating_add(area.width);
    let mut cursor = area.x;

    let mut emit = |spans: &mut Vec<Span<'_>>,
                    cursor: &mut u16,
                    text: String,
                    style: Style,
                    target: Option<HitTarget>,
                    hits: &mut crate::definitions::HitRegistry| {
        let width = cell_width(&text);
        if *cursor >= area_end {
            return;
        }
        let rect = Rect {
            x: *cursor,
            y: area.y,
            width: width.min(area_end.saturating_sub(*cursor)),
            height: 1,
        };
        if let Some(target) = target {
            hits.register(target, rect);
        }
        spans.push(Span::styled(text, style));
        *cursor = cursor.saturating_add(width);
    };

    let plain = Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY);
    let dim = Style::default().fg(FG_DIM).bg(BG_PRIMARY);
    let brand = Style::default().fg(BRAND_FG).bg(BRAND_BG).add_modifier(Modifier::BOLD);

    emit(&mut spans, &mut cursor, String::from(" 🥐 MIGNON "), brand, None, &mut app.hits);
    emit(
        &mut spans,
        &mut cursor,
        format!(" {} ", ui.store_name()),
        dim,
        None,
        &mut app.hits,
    );

    for section in [SectionKind::Seasonal, SectionKind::Classic] {
        let label = match section {
            SectionKind::Seasonal => ui.seasonal(),
            SectionKind::Classic => ui.classic(),
        };
        let style = if app.active_section() == section {
            Style::default().fg(BUTTON_ACTIVE_FG).bg(BUTTON_ACTIVE_BG)
        } else {
            plain
        };
        emit(
            &mut spans,
            &mut cursor,
            format!("[{label}]"),
            style,
            Some(HitTarget::Nav(section)),
            &mut app.hits,
        );
        emit(&mut spans, &mut cursor, String::from(" "), plain, None, &mut app.hits);
    }

    emit(&mut spans, &mut cursor, String::from(" "), plain, None, &mut app.hits);
    for lang in SUPPORTED_LANGS {
        let style = if app.lang == lang {
            Style::default().fg(BUTTON_ACTIVE_FG).bg(BUTTON_ACTIVE_BG)
        } else {
            dim
        };
        emit(
            &mut spans,
            &mut cursor,
            format!("[{}]", lang.code()),
            style,
            Some(HitTarget::LangButton(lang)),
            &mut app.hits,
        );
    }

    emit(&mut spans, &mut cursor, String::from("  "), plain, None, &mut app.hits);
    emit(
        &mut spans,
        &mut cursor,
        format!("[{}]", ui.share()),
        plain,
        Some(HitTarget::Share),
        &mut app.hits,
    );

    let bar = Paragraph::new(Line::from(spans)).style(plain);
    f.render_widget(bar, area);
}

fn render_hero(f: &mut Frame<'_>, app: &App, area: Rect) {
    let ui = app.lang.ui();
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", ui.hero_title()),
            Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", ui.hero_tagline()),
            Style::default().fg(FG_DIM),
        )),
    ])
    .style(Style::default().bg(BG_PRIMARY));
    f.render_widget(hero, area);
}

fn render_section_head(f: &mut Frame<'_>, app: &App, area: Rect) {
    let ui = app.lang.ui();
    let title = match app.active_section() {
        SectionKind::Seasonal => ui.seasonal(),
        SectionKind::Classic => ui.classic(),
    };
    let head = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {title}"),
            Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", ui.vote_hint()),
            Style::default().fg(FG_DIM),
        )),
    ])
    .style(Style::default().bg(BG_PRIMARY));
    f.render_widget(head, area);
}

/// Lays the active section out as a grid and renders the visible card rows.
///
/// Column count falls out of the terminal width; the row window follows the
/// keyboard selection, so this also writes `grid_columns` and `scroll_row`
/// back into the app state.
fn render_card_grid(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let section = app.active_section();
    let items = app.catalog().section(section);
    if items.is_empty() {
        return;
    }

    let columns = ((area.width.saturating_sub(2)) / (CARD_MIN_WIDTH + CARD_GAP)).max(1) as usize;
    let card_width = (area.width.saturating_sub(2) / columns as u16).saturating_sub(CARD_GAP);
    let rows = items.len().div_ceil(columns);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    app.grid_columns = columns;

    // Keep the selected card's row inside the window.
    let selected_row = app.selection.index.min(items.len() - 1) / columns;
    if selected_row < app.scroll_row {
        app.scroll_row = selected_row;
    } else if selected_row >= app.scroll_row + visible_rows {
        app.scroll_row = selected_row + 1 - visible_rows;
    }
    app.scroll_row = app.scroll_row.min(rows.saturating_sub(visible_rows));

    for (window_row, row) in (app.scroll_row..rows).take(visible_rows).enumerate() {
        for column in 0..columns {
            let index = row * columns + column;
            let Some(item) = items.get(index) else {
                break;
            };
            let card_area = Rect {
                x: area.x + 1 + column as u16 * (card_width + CARD_GAP),
                y: area.y + window_row as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            };
            render_card(f, app, card_area, section, index, item);
        }
    }

    // More rows below the window: hint at them in the bottom-right corner.
    if app.scroll_row + visible_rows < rows {
        let hint = "▼";
        let hint_area = Rect {
            x: area.x + area.width.saturating_sub(2),
            y: area.y + area.height.saturating_sub(1),
            width: 1,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(hint).style(Style::default().fg(FG_DIM).bg(BG_PRIMARY)),
            hint_area,
        );
    }
}

fn render_card(
    f: &mut Frame<'_>,
    app: &mut App,
    area: Rect,
    section: SectionKind,
    index: usize,
    item: &MenuItem,
) {
    let selected = app.selection.section == section && app.selection.index == index;
    let border = if selected { BORDER_FOCUS } else { BORDER_IDLE };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border).bg(BG_PRIMARY))
        .style(Style::default().bg(BG_PRIMARY));
    if let Some(tag) = item.tag {
        block = block.title(
            Title::from(Line::from(Span::styled(
                format!(" {tag} "),
                Style::default().fg(BADGE_FG).bg(BADGE_BG),
            )))
            .alignment(Alignment::Right),
        );
    }
    let inner = block.inner(area);
    f.render_widget(block, area);
    app.hits.register(HitTarget::Card(section, index), area);
    if inner.width < 8 || inner.height < 3 {
        return;
    }

    let name = i18n::resolve(item, Field::Name, app.lang);
    let desc = i18n::resolve(item, Field::Description, app.lang);
    let pill = format!("👍 {}", app.displayed_count(item.key));
    let pill_width = cell_width(&pill);

    // Title row: emoji + name left, vote pill right.
    let title = truncate_to_width(
        &format!("{} {}", item.emoji, name),
        inner.width.saturating_sub(pill_width + 1),
    );
    let padding = inner
        .width
        .saturating_sub(cell_width(&title) + pill_width) as usize;
    let title_line = Line::from(vec![
        Span::styled(title, Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding)),
        Span::styled(
            pill.clone(),
            Style::default().fg(if selected { BORDER_FOCUS } else { FG_PRIMARY }),
        ),
    ]);
    app.hits.register(
        HitTarget::VoteButton(section, index),
        Rect {
            x: inner.x + inner.width.saturating_sub(pill_width),
            y: inner.y,
            width: pill_width,
            height: 1,
        },
    );

    let desc_line = Line::from(Span::styled(
        truncate_to_width(desc, inner.width),
        Style::default().fg(FG_DIM),
    ));

    // Price row: yen left, view button right.
    let view = format!("[{}]", app.lang.ui().btn_view());
    let view_width = cell_width(&view);
    let price = format!("¥{}", item.price);
    let price_padding = inner
        .width
        .saturating_sub(cell_width(&price) + view_width) as usize;
    let price_line = Line::from(vec![
        Span::styled(price, Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(price_padding)),
        Span::styled(view, Style::default().fg(FG_DIM)),
    ]);
    app.hits.register(
        HitTarget::ViewButton(section, index),
        Rect {
            x: inner.x + inner.width.saturating_sub(view_width),
            y: inner.y + 2,
            width: view_width,
            height: 1,
        },
    );

    let body = Paragraph::new(vec![title_line, desc_line, price_line])
        .style(Style::default().bg(BG_PRIMARY));
    f.render_widget(body, inner);
}

fn render_status_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let total: u64 = app.displayed_votes.values().sum();
    let right = format!("{} | 👍 {} ", app.lang.code(), total);
    let right_width = cell_width(&right);
    let left = truncate_to_width(
        &format!(" {}", app.status_message),
        area.width.saturating_sub(right_width + 1),
    );
    let padding = area.width.saturating_sub(cell_width(&left) + right_width) as usize;

    let bar = Paragraph::new(Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(padding)),
        Span::raw(right),
    ]))
    .style(Style::default().fg(BUTTON_ACTIVE_FG).bg(BUTTON_ACTIVE_BG));
    f.render_widget(bar, area);
}

/// Centered modal notice, e.g. "please order at the counter".
fn render_overlay(f: &mut Frame<'_>, app: &App, overlay: OverlayState) {
    let OverlayState::OrderNotice = overlay;
    let ui = app.lang.ui();
    let size = f.size();

    let text = ui.alert_order();
    let width = (cell_width(text) + 6).clamp(30, size.width.saturating_sub(4));
    let height = 5;
    let popup = Rect {
        x: size.width.saturating_sub(width) / 2,
        y: size.height.saturating_sub(height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);
    let block = Block::default()
        .title(format!(" {} ", ui.store_name()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_FOCUS))
        .style(Style::default().fg(FG_PRIMARY).bg(BG_PRIMARY));
    let body = Paragraph::new(vec![
        Line::from(Span::styled(text, Style::default().fg(FG_PRIMARY))),
        Line::default(),
        Line::from(Span::styled("Esc / Enter", Style::default().fg(FG_DIM))),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(body, popup);
}

/// Bottom-right toast, the page's "link copied" chip.
fn render_toast(f: &mut Frame<'_>, app: &App) {
    let Some(toast) = &app.toast else {
        return;
    };
    let size = f.size();
    let width = (cell_width(&toast.message) + 4).min(size.width.saturating_sub(2));
    let toast_area = Rect {
        x: size.width.saturating_sub(width + 1),
        y: size.height.saturating_sub(4),
        width,
        height: 3,
    };

    f.render_widget(Clear, toast_area);
    let chip = Paragraph::new(truncate_to_width(&toast.message, width.saturating_sub(2)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(TOAST_BG)),
        )
        .style(Style::default().fg(TOAST_FG).bg(TOAST_BG));
    f.render_widget(chip, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text_intact() {
        assert_eq!(truncate_to_width("Plain", 10), "Plain");
    }

    #[test]
    fn truncate_is_cjk_width_aware() {
        // Each kana is two columns wide; 7 columns fit three kana plus the
        // ellipsis.
        assert_eq!(truncate_to_width("プレーンクロワッサン", 7), "プレー…");
    }

    #[test]
    fn truncate_never_exceeds_the_budget() {
        for max in 1..20 {
            let out = truncate_to_width("抹茶クロワッサン Matcha", max);
            assert!(cell_width(&out) <= max, "{out:?} exceeds {max}");
        }
    }
}
