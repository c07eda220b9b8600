use anyhow::{Context, Result};
use bmi_calculator::bmi::{BmiCategory, BmiResult};
use bmi_calculator::form::{BmiForm, Field};
use bmi_calculator::tips::RECOMMENDATIONS_TITLE;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

pub struct App {
    pub form: BmiForm,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            form: BmiForm::new(),
            should_quit: false,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Enter => {
                self.form.calculate();
            }
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_previous(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c)
                if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
            {
                self.form.input_char(c)
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Terminal event loop failed")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            tracing::debug!(code = ?key.code, "key");
            app.on_key(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let result = app.form.result();
    let show_tips = result.is_some_and(|r| r.category.needs_recommendations());

    let mut constraints = vec![
        Constraint::Length(3), // Header
        Constraint::Length(3), // Inputs
        Constraint::Length(3), // Calculate button
    ];
    if result.is_some() {
        constraints.push(Constraint::Length(5)); // Results
    }
    constraints.push(Constraint::Min(0)); // Recommendations (empty for normal)
    constraints.push(Constraint::Length(3)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.size());

    render_header(f, chunks[0]);
    render_inputs(f, chunks[1], &app.form);
    render_button(f, chunks[2], &app.form);

    if let Some(result) = result {
        render_results(f, chunks[3], result);
        if show_tips {
            render_recommendations(f, chunks[4], app.form.recommendations());
        }
    }

    render_status_bar(f, chunks[chunks.len() - 1]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("⚖  ", Style::default().fg(Color::Blue)),
        Span::styled(
            "BMI Calculator",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_inputs(f: &mut Frame, area: Rect, form: &BmiForm) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (field, value, column) in [
        (Field::Weight, &form.weight, columns[0]),
        (Field::Height, &form.height, columns[1]),
    ] {
        let focused = form.focus == field;

        let text = if value.is_empty() {
            Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw(value.as_str())
        };

        let input = Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(focused))
                .title(format!(" {} ", field.label())),
        );
        f.render_widget(input, column);

        if focused {
            let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
            let x = column.x.saturating_add(1).saturating_add(typed);
            f.set_cursor(x.min(column.right().saturating_sub(2)), column.y + 1);
        }
    }
}

fn render_button(f: &mut Frame, area: Rect, form: &BmiForm) {
    let focused = form.focus == Field::Calculate;
    let style = if focused {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} → ", Field::Calculate.label()),
        style,
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused)),
    );

    f.render_widget(button, area);
}

fn category_color(category: BmiCategory) -> Color {
    match category {
        BmiCategory::Normal => Color::Green,
        BmiCategory::Underweight => Color::Yellow,
        BmiCategory::Overweight => Color::Red,
    }
}

fn render_results(f: &mut Frame, area: Rect, result: &BmiResult) {
    let content = vec![
        Line::from(vec![Span::styled(
            format!("  {}", result.display_value()),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Category: "),
            Span::styled(
                result.category.label(),
                Style::default()
                    .fg(category_color(result.category))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let panel = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Your Results "),
    );

    f.render_widget(panel, area);
}

fn render_recommendations(f: &mut Frame, area: Rect, tips: &[&str]) {
    let content: Vec<Line> = tips
        .iter()
        .map(|tip| Line::from(vec![Span::raw("  • "), Span::raw(*tip)]))
        .collect();

    let panel = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(format!(" {} ", RECOMMENDATIONS_TITLE)),
        );

    f.render_widget(panel, area);
}

fn render_status_bar(f: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled("Tab/↑↓", Style::default().fg(Color::Cyan)),
        Span::raw(" move  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" calculate  "),
        Span::styled("Backspace", Style::default().fg(Color::Cyan)),
        Span::raw(" delete  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" quit"),
    ]);

    let status = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
