// statusbar-cli/src/main.rs
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::Color,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::{
    cell::RefCell,
    io,
    rc::Rc,
    time::{Duration, Instant},
};

use statusbar_core::{
    CommandError, CommandExecutor, ConfigFile, ContextMenuPresenter, ContextMenuRequest,
    EditorSurface, EntryRegistry, NotificationSink, STRIP_HEIGHT, Services, StatusBar,
    TelemetrySink, Theme, ThemeHandle, WorkspaceHandle, WorkspaceState, theme::keys,
};
use statusbar_entries::register_builtin_entries;

/// Demo host: every collaborator call lands in a shared log rendered above
/// the strip, so the strip's side effects are visible.
struct DemoHost {
    log: Rc<RefCell<Vec<String>>>,
}

impl DemoHost {
    fn record(&self, line: String) {
        let mut log = self.log.borrow_mut();
        log.push(line);
        let overflow = log.len().saturating_sub(50);
        if overflow > 0 {
            log.drain(..overflow);
        }
    }
}

impl CommandExecutor for DemoHost {
    fn execute(&self, id: &str, args: &[String]) -> Result<(), CommandError> {
        self.record(format!("execute: {} {:?}", id, args));
        Ok(())
    }
}

impl NotificationSink for DemoHost {
    fn error(&self, message: &str) {
        self.record(format!("error: {}", message));
    }
}

impl TelemetrySink for DemoHost {
    fn public_log(&self, event: &str, properties: &[(&str, &str)]) {
        self.record(format!("telemetry: {} {:?}", event, properties));
    }
}

impl ContextMenuPresenter for DemoHost {
    fn show(&self, request: ContextMenuRequest<'_>) {
        let labels: Vec<_> = request
            .actions
            .iter()
            .map(|action| action.label.as_str())
            .collect();
        self.record(format!("menu for {}: {:?}", request.context, labels));
    }
}

impl EditorSurface for DemoHost {
    fn focus(&self) {
        self.record("focus: editor".to_string());
    }
}

fn light_theme() -> Theme {
    let mut theme = Theme::new("light");
    theme
        .set(keys::BACKGROUND, Color::Rgb(221, 221, 221))
        .set(keys::FOREGROUND, Color::Rgb(51, 51, 51))
        .set(keys::BORDER, Color::Rgb(180, 180, 180))
        .set(keys::NO_FOLDER_BACKGROUND, Color::Rgb(104, 42, 122))
        .set(keys::NO_FOLDER_FOREGROUND, Color::White)
        .set(keys::NO_FOLDER_BORDER, Color::Rgb(82, 33, 96));
    theme
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigFile::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}. Using default.", e);
        ConfigFile::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let log = Rc::new(RefCell::new(Vec::new()));
    let host = Rc::new(DemoHost {
        log: Rc::clone(&log),
    });
    let services = Services {
        commands: host.clone(),
        notifications: host.clone(),
        telemetry: host.clone(),
        context_menu: host.clone(),
        editor: Some(host.clone()),
    };

    let theme = ThemeHandle::new(Theme::default_dark());
    let workspace = WorkspaceHandle::new(WorkspaceState::HasFolder);

    let mut registry = EntryRegistry::new();
    register_builtin_entries(&mut registry);

    let mut bar = StatusBar::new(theme.clone(), workspace.clone(), services);
    bar.bootstrap(&registry, &config.status_bar);

    let mut dark = true;
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [body, strip] = Layout::vertical([
                Constraint::Min(0),
                Constraint::Length(if config.status_bar.visible {
                    STRIP_HEIGHT
                } else {
                    0
                }),
            ])
            .areas(area);

            let lines: Vec<Line> = log.borrow().iter().map(|l| Line::raw(l.clone())).collect();
            let paragraph = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" q quit | m message | t theme | w workspace | click the strip "),
            );
            f.render_widget(paragraph, body);

            if config.status_bar.visible {
                bar.layout(strip.width, strip.height);
                bar.render(strip, f.buffer_mut());
            }
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                CEvent::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        match key.code {
                            KeyCode::Char('q') => break,
                            KeyCode::Char('m') => {
                                let _handle = bar.set_message(
                                    "Saved demo.txt",
                                    Some(Duration::from_secs(3)),
                                    Duration::from_millis(150),
                                );
                            }
                            KeyCode::Char('t') => {
                                dark = !dark;
                                theme.switch(if dark {
                                    Theme::default_dark()
                                } else {
                                    light_theme()
                                });
                            }
                            KeyCode::Char('w') => {
                                let next = match workspace.state() {
                                    WorkspaceState::Empty => WorkspaceState::HasFolder,
                                    WorkspaceState::HasFolder => WorkspaceState::Empty,
                                };
                                workspace.set_state(next);
                            }
                            _ => {}
                        }
                    }
                }
                CEvent::Mouse(mouse) => bar.handle_mouse(mouse),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            bar.update(Instant::now());
            last_tick = Instant::now();
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
