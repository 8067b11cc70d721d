//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]). Rendering is pure: it reads `App`
//! and draws widgets, so layout changes never touch business logic.
//!
//! The screen is a vertical stack — clock and weather side by side on top,
//! then the quote, the search box, the news pane, and a one-line status bar.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::App;
use crate::clock;
use crate::source::Category;

/// Theme colors, switched as a unit by the dark-mode flag.
struct Palette {
    text: Color,
    dim: Color,
    accent: Color,
    note: Color,
}

fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        Palette {
            text: Color::White,
            dim: Color::DarkGray,
            accent: Color::Magenta,
            note: Color::Yellow,
        }
    } else {
        Palette {
            text: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            note: Color::Yellow,
        }
    }
}

/// Draw the complete dashboard for one frame.
pub fn draw(app: &App, frame: &mut Frame) {
    let [top_area, quote_area, search_area, news_area, status_area] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [clock_area, weather_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(top_area);

    draw_clock(app, frame, clock_area);
    draw_weather(app, frame, weather_area);
    draw_quote(app, frame, quote_area);
    draw_search(app, frame, search_area);
    draw_news(app, frame, news_area);
    draw_status_bar(app, frame, status_area);
}

fn draw_clock(app: &App, frame: &mut Frame, area: Rect) {
    let colors = palette(app.dark_mode);
    let lines = vec![
        Line::from(Span::styled(
            clock::time_line(app.now),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            clock::date_line(app.now),
            Style::default().fg(colors.text),
        )),
        Line::from(Span::styled(
            clock::OFFSET_LABEL,
            Style::default().fg(colors.dim),
        )),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Yangon Time ").borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn draw_weather(app: &App, frame: &mut Frame, area: Rect) {
    let colors = palette(app.dark_mode);
    let title = match &app.weather.data {
        Some(weather) => format!(" Weather in {} ", weather.location),
        None => " Weather ".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let lines = if app.weather.loading {
        vec![Line::from(Span::styled(
            "Loading weather data…",
            Style::default().fg(colors.dim),
        ))]
    } else if let Some(weather) = &app.weather.data {
        vec![
            Line::from(vec![
                Span::styled(weather.icon, Style::default().fg(colors.accent)),
                Span::raw(" "),
                Span::styled(weather.description, Style::default().fg(colors.text)),
            ]),
            Line::from(Span::styled(
                format!(
                    "{:.0}°C  (feels like {:.0}°C)",
                    weather.temperature_c, weather.feels_like_c
                ),
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "wind {:.1} km/h   humidity {:.0}%",
                    weather.wind_kmh, weather.humidity_pct
                ),
                Style::default().fg(colors.dim),
            )),
        ]
    } else {
        // The unavailable state replaces the whole widget body.
        let note = app.weather.error_note.unwrap_or("Weather data unavailable");
        vec![Line::from(Span::styled(
            note,
            Style::default().fg(colors.note),
        ))]
    };

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(widget, area);
}

fn draw_quote(app: &App, frame: &mut Frame, area: Rect) {
    let colors = palette(app.dark_mode);
    let block = Block::default()
        .title(" Daily Inspiration ")
        .borders(Borders::ALL);

    let lines = if app.quote.loading {
        vec![Line::from(Span::styled(
            "Loading quote…",
            Style::default().fg(colors.dim),
        ))]
    } else if let Some(quote) = &app.quote.data {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", quote.content),
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                format!("— {}", quote.author),
                Style::default().fg(colors.dim),
            )),
        ];
        if let Some(note) = app.quote.error_note {
            lines.push(Line::from(Span::styled(
                note,
                Style::default().fg(colors.note),
            )));
        }
        lines
    } else {
        vec![Line::from(Span::styled(
            "Unable to load quote",
            Style::default().fg(colors.dim),
        ))]
    };

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, area);
}

fn draw_search(app: &App, frame: &mut Frame, area: Rect) {
    let colors = palette(app.dark_mode);
    let border_style = if app.search_focused {
        Style::default().fg(colors.accent)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(" Search the Web ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut spans = vec![Span::styled(
        &app.search_query,
        Style::default().fg(colors.text),
    )];
    if app.search_focused {
        spans.push(Span::styled("▏", Style::default().fg(colors.accent)));
    } else if app.search_query.is_empty() {
        spans = vec![Span::styled(
            "press / to search Google…",
            Style::default().fg(colors.dim),
        )];
    }

    let widget = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(widget, area);
}

fn draw_news(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Today's Headlines ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [tabs_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_category_tabs(app, frame, tabs_area);

    if app.news.loading {
        let colors = palette(app.dark_mode);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Loading headlines…",
                Style::default().fg(colors.dim),
            )),
            list_area,
        );
    } else {
        draw_article_list(app, frame, list_area);
    }

    draw_news_footer(app, frame, footer_area);
}

fn draw_category_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let colors = palette(app.dark_mode);
    let selected = Category::ALL
        .iter()
        .position(|c| *c == app.category)
        .unwrap_or(0);
    let tabs = Tabs::new(Category::ALL.iter().map(|c| c.label()))
        .select(selected)
        .style(Style::default().fg(colors.dim))
        .highlight_style(
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_article_list(app: &App, frame: &mut Frame, area: Rect) {
    let colors = palette(app.dark_mode);
    let items: Vec<ListItem> = app
        .current_articles()
        .iter()
        .map(|article| {
            let mut lines = vec![
                Line::from(Span::styled(
                    article.title.clone(),
                    Style::default()
                        .fg(colors.text)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(
                        article.source_name.clone(),
                        Style::default().fg(colors.accent),
                    ),
                    Span::styled(
                        format!(" • {}", article.published.format("%Y-%m-%d")),
                        Style::default().fg(colors.dim),
                    ),
                ]),
            ];
            if !article.description.is_empty() {
                lines.push(Line::from(Span::styled(
                    article.description.clone(),
                    Style::default().fg(colors.dim),
                )));
            }
            ListItem::new(lines)
        })
        .collect();
    frame.render_widget(List::new(items), area);
}

fn draw_news_footer(app: &App, frame: &mut Frame, area: Rect) {
    let colors = palette(app.dark_mode);
    let mut spans = vec![Span::styled(
        format!("Page {} of {}", app.page, app.total_pages()),
        Style::default().fg(colors.text),
    )];
    if let Some(note) = app.news.error_note {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(note, Style::default().fg(colors.note)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let colors = palette(app.dark_mode);
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(&app.status, Style::default().fg(colors.note)),
        Span::styled(
            "  q: quit  r: new quote  Tab: category  ←/→: page  /: search  d: theme",
            Style::default().fg(colors.dim),
        ),
    ]));
    frame.render_widget(status, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Article, CurrentWeather, FetchState, Quote};
    use chrono::{TimeZone, Utc};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(app, f)).unwrap();
        buffer_text(&terminal)
    }

    fn sample_weather() -> CurrentWeather {
        CurrentWeather {
            temperature_c: 31.0,
            feels_like_c: 36.0,
            humidity_pct: 74.0,
            wind_kmh: 12.5,
            description: "Overcast",
            icon: "⛅",
            location: "Yangon",
        }
    }

    fn sample_articles(n: usize) -> Vec<Article> {
        (0..n)
            .map(|i| Article {
                title: format!("headline {i}"),
                description: String::new(),
                image: String::new(),
                source_name: "Wire".to_string(),
                published: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
            })
            .collect()
    }

    #[test]
    fn draw_does_not_panic_while_everything_loads() {
        let app = App::new(false);
        render(&app);
    }

    #[test]
    fn draw_shows_all_widget_data() {
        let mut app = App::new(true);
        app.now = Utc.with_ymd_and_hms(2026, 1, 5, 8, 30, 0).unwrap();
        app.quote = FetchState {
            data: Some(Quote {
                content: "Stay curious".to_string(),
                author: "Nobody".to_string(),
            }),
            loading: false,
            error_note: None,
        };
        app.weather = FetchState {
            data: Some(sample_weather()),
            loading: false,
            error_note: None,
        };
        app.news = FetchState {
            data: Some(sample_articles(3)),
            loading: false,
            error_note: None,
        };

        let text = render(&app);
        assert!(text.contains("03:00:00 PM"));
        assert!(text.contains("Overcast"));
        assert!(text.contains("Stay curious"));
        assert!(text.contains("headline 0"));
        assert!(text.contains("Page 1 of 1"));
    }

    #[test]
    fn unavailable_weather_replaces_the_widget_body() {
        let mut app = App::new(false);
        app.weather = FetchState {
            data: None,
            loading: false,
            error_note: Some("Weather data unavailable"),
        };
        let text = render(&app);
        assert!(text.contains("Weather data unavailable"));
        assert!(!text.contains("feels like"));
    }

    #[test]
    fn degraded_news_shows_the_note_next_to_pagination() {
        let mut app = App::new(false);
        app.news = FetchState {
            data: Some(sample_articles(5)),
            loading: false,
            error_note: Some("Using sample news due to API limitations"),
        };
        let text = render(&app);
        assert!(text.contains("Page 1 of 1"));
        assert!(text.contains("Using sample news"));
    }

    #[test]
    fn pagination_footer_reflects_the_current_page() {
        let mut app = App::new(false);
        app.news = FetchState {
            data: Some(sample_articles(25)),
            loading: false,
            error_note: None,
        };
        app.next_page();
        let text = render(&app);
        assert!(text.contains("Page 2 of 3"));
    }

    #[test]
    fn focused_search_box_shows_query_and_cursor() {
        let mut app = App::new(false);
        app.focus_search();
        for c in "rust tui".chars() {
            app.push_search_char(c);
        }
        let text = render(&app);
        assert!(text.contains("rust tui"));
    }
}
