//! docmap: render a markdown document as a collapsible outline beside its content.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use docmap::app_state::{AppState, Focus};
use docmap::config::Config;
use docmap::highlight::{Highlighter, NoHighlight, SyntectHighlighter};
use docmap::render::content::{build_content, render_content};
use docmap::render::outline::{build_outline, render_outline};
use docmap::render::page::{render_error_page, render_page};
use docmap::{input, parse_with, ui, Error};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Lines moved by PgUp/PgDn in the content pane.
const PAGE: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Standalone page with outline and content side by side
    Html,
    /// Outline markup only
    Outline,
    /// Content markup only
    Content,
    /// Section tree as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "docmap")]
#[command(about = "Collapsible outlines and synchronized views for markdown", long_about = None)]
struct Args {
    /// Markdown file to render, or `-` for standard input
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Write output to a file instead of standard output
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Syntax-highlight fenced code blocks
    #[arg(long)]
    highlight: bool,

    /// Keep colliding section ids as they are
    #[arg(long)]
    no_dedupe: bool,

    /// Configuration file (defaults to docmap.toml in the working directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Browse the document in the terminal
    #[arg(long, short = 'i')]
    interactive: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> docmap::Result<()> {
    let mut cfg = args
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_requested);

    // Override config with command line args
    if args.highlight {
        cfg.highlight = true;
    }
    if args.no_dedupe {
        cfg.dedupe_ids = false;
    }

    let source = input::source_for(&args.path);
    let title = source.name();
    let markdown = match source.fetch() {
        Ok(text) => text,
        Err(err) => {
            log::error!("could not load {title}: {err}");
            if args.format == Format::Html && !args.interactive {
                let page = render_error_page(&err, &cfg.page_options(&title));
                emit(args.output.as_deref(), &page)?;
            }
            return Err(err.into());
        }
    };
    log::info!("loaded {title} ({} bytes)", markdown.len());

    let document = parse_with(&markdown, &cfg.parse_options());

    if args.interactive {
        return run_tui(AppState::new(title, document, cfg.outline_width));
    }

    let rendered = match args.format {
        Format::Html => render_page(&document, &cfg.page_options(&title)),
        Format::Outline => render_outline(&build_outline(document.toc())),
        Format::Content => render_content(&build_content(&document.sections)),
        Format::Json => serde_json::to_string_pretty(&document)?,
    };

    let highlighter: Box<dyn Highlighter> = if cfg.highlight && args.format != Format::Json {
        Box::new(SyntectHighlighter::new(&cfg.theme)?)
    } else {
        Box::new(NoHighlight)
    };

    emit(args.output.as_deref(), &highlighter.highlight(&rendered))
}

fn emit(output: Option<&Path>, rendered: &str) -> docmap::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn run_tui(mut app: AppState) -> docmap::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map_err(Error::from)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.code, app.focus) {
            (KeyCode::Char('q') | KeyCode::Esc, _) => return Ok(()),
            (KeyCode::Tab, _) => app.switch_focus(),
            (KeyCode::PageUp, _) => app.scroll_content(-PAGE),
            (KeyCode::PageDown, _) => app.scroll_content(PAGE),
            (KeyCode::Up | KeyCode::Char('k'), Focus::Content) => app.scroll_content(-1),
            (KeyCode::Down | KeyCode::Char('j'), Focus::Content) => app.scroll_content(1),
            (KeyCode::Up | KeyCode::Char('k'), Focus::Outline) => app.navigate_up(),
            (KeyCode::Down | KeyCode::Char('j'), Focus::Outline) => app.navigate_down(),
            (KeyCode::Left | KeyCode::Char('h'), Focus::Outline) => app.navigate_to_parent(),
            (KeyCode::Home, Focus::Outline) => app.navigate_to_first(),
            (KeyCode::End, Focus::Outline) => app.navigate_to_last(),
            (KeyCode::Char(' '), Focus::Outline) => app.toggle_current(),
            (KeyCode::Enter, Focus::Outline) => app.select_current(),
            _ => {}
        }
    }
}
