use anyhow::{Context, Result, bail};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use rulemark_config::Config;
use rulemark_engine::{RuleVariant, read_document, render, to_html, to_plain_text};
use std::{
    env,
    io::{Stdout, stdout},
    path::Path,
    process,
};

mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Interactive,
    Html,
    Plain,
    Raw,
}

#[derive(Debug, PartialEq, Eq)]
struct Options {
    mode: OutputMode,
    target: Option<String>,
}

const USAGE: &str = "Usage: rulemark-cli [--html | --plain | --raw] [claude | universal | <document-name> | <file.md>]";

fn parse_args(args: &[String]) -> Result<Options> {
    let mut mode = OutputMode::Interactive;
    let mut target = None;

    for arg in args {
        match arg.as_str() {
            "--html" => mode = OutputMode::Html,
            "--plain" => mode = OutputMode::Plain,
            "--raw" => mode = OutputMode::Raw,
            flag if flag.starts_with("--") => bail!("Unknown option '{flag}'\n{}", USAGE),
            _ if target.is_some() => bail!("Too many arguments\n{}", USAGE),
            value => target = Some(value.to_string()),
        }
    }

    Ok(Options { mode, target })
}

/// A document the viewer can show.
#[derive(Debug, Clone)]
struct Source {
    title: String,
    text: String,
    /// Set for the built-in documents.
    variant: Option<RuleVariant>,
}

impl Source {
    fn variant(variant: RuleVariant) -> Self {
        Self {
            title: format!("{} Rules", variant.label()),
            text: variant.document().to_string(),
            variant: Some(variant),
        }
    }

    fn file(title: &str, path: &Path) -> Result<Self> {
        let text = read_document(path)
            .with_context(|| format!("Failed to load document '{}'", path.display()))?;
        Ok(Self {
            title: title.to_string(),
            text,
            variant: None,
        })
    }

    /// Confirmation shown once a built-in document has been printed raw.
    fn copied_notice(&self) -> Option<String> {
        self.variant.map(RuleVariant::copied_message)
    }
}

/// Builds the list of viewable documents and the index to start on.
///
/// Built-in variants come first, then config documents, then an explicit
/// file argument. Config documents that fail to load are skipped unless the
/// target names them, in which case the load error is returned.
fn collect_sources(config: &Config, target: Option<&str>) -> Result<(Vec<Source>, usize)> {
    let mut sources: Vec<Source> = RuleVariant::ALL.into_iter().map(Source::variant).collect();

    for entry in &config.documents {
        match Source::file(&entry.name, &entry.path) {
            Ok(source) => sources.push(source),
            Err(e) => log::warn!("Skipping document '{}': {e:#}", entry.name),
        }
    }

    let start = match target {
        Some(target) => {
            if let Ok(variant) = target.parse::<RuleVariant>() {
                variant_index(variant)
            } else if let Some(entry) = config.document(target) {
                let loaded = sources
                    .iter()
                    .skip(RuleVariant::ALL.len())
                    .position(|s| s.title == entry.name);
                match loaded {
                    Some(i) => RuleVariant::ALL.len() + i,
                    None => {
                        sources.push(Source::file(&entry.name, &entry.path)?);
                        sources.len() - 1
                    }
                }
            } else {
                let path = Path::new(target);
                let title = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| target.to_string());
                sources.push(Source::file(&title, path)?);
                sources.len() - 1
            }
        }
        None => match config.default_variant.as_deref() {
            Some(key) => variant_index(
                key.parse::<RuleVariant>()
                    .context("Invalid default_variant in config file")?,
            ),
            None => variant_index(RuleVariant::default()),
        },
    };

    Ok((sources, start))
}

fn variant_index(variant: RuleVariant) -> usize {
    RuleVariant::ALL
        .iter()
        .position(|v| *v == variant)
        .unwrap_or_default()
}

struct App {
    sources: Vec<Source>,
    selected: usize,
    lines: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(sources: Vec<Source>, selected: usize) -> Self {
        let mut app = Self {
            sources,
            selected,
            lines: Vec::new(),
            scroll: 0,
        };
        app.update_content_for_selection();
        app
    }

    fn current(&self) -> &Source {
        &self.sources[self.selected]
    }

    fn next_source(&mut self) {
        self.selected = (self.selected + 1) % self.sources.len();
        self.update_content_for_selection();
    }

    fn previous_source(&mut self) {
        self.selected = if self.selected == 0 {
            self.sources.len() - 1
        } else {
            self.selected - 1
        };
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let blocks = render(&self.current().text);
        self.lines = view::document_lines(&blocks);
        self.scroll = 0;
    }

    fn scroll_down(&mut self) {
        let max = u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let (sources, selected) = match collect_sources(&config, options.target.as_deref()) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    let source = &sources[selected];
    match options.mode {
        OutputMode::Html => println!("{}", to_html(&render(&source.text))),
        OutputMode::Plain => println!("{}", to_plain_text(&render(&source.text))),
        OutputMode::Raw => {
            println!("{}", source.text);
            if let Some(notice) = source.copied_notice() {
                log::info!("{notice}");
            }
        }
        OutputMode::Interactive => {
            log::info!("rulemark viewer starting on '{}'", source.title);
            run_interactive(App::new(sources, selected))?;
        }
    }

    Ok(())
}

fn run_interactive(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    res
}

/// Runs every restore step, then reports the first one that failed.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();

    raw?;
    screen?;
    cursor?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Tab => app.next_source(),
                KeyCode::BackTab => app.previous_source(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let content = Paragraph::new(app.lines.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.current().title.clone()),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[0]);

    let position = format!(" [{}/{}]", app.selected + 1, app.sources.len());
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("Tab/Shift-Tab: Switch rules | "),
        Span::raw("↑/k ↓/j: Scroll"),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
    ]);

    f.render_widget(Paragraph::new(help_text), chunks[1]);
}
