mod app;
mod core;
mod models;
mod ui;
mod utils;

use app::App;
use clap::Parser;
use core::actions::{find_action, generate_command_bar_items};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use ui::{CommandBar, Dialog, GuideList, LayoutMode, StatusBar, TextKey, WarningScreen};
use utils::config::{AppConfig, ConfigSource, Overrides};
use utils::error::Result;
use utils::logging;

#[derive(Parser)]
#[command(name = "guidejudge")]
#[command(about = "Record selection verdicts for a roster of guides", long_about = None)]
struct Cli {
    /// Guide names (appended to the configured roster)
    guides: Vec<String>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme name (dark, light, high_contrast or a custom theme)
    #[arg(short, long)]
    theme: Option<String>,

    /// UI language
    #[arg(short, long, value_parser = ["en", "ko"])]
    lang: Option<String>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = ConfigSource::from_env(cli.config.as_deref());
    let config = AppConfig::load(&source)?.apply(Overrides {
        theme: cli.theme,
        language: cli.lang,
        guides: cli.guides,
    });

    // 화면 전환 전에 로깅 설치 (실패해도 계속 진행)
    let log_path = logging::resolve_log_path(
        cli.log_file.as_deref(),
        config.log_file.as_deref(),
        std::env::var(logging::LOG_ENV).ok(),
        dirs::cache_dir(),
    );
    match logging::init(log_path) {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), ?source, "logging initialized"),
        Ok(None) => {}
        Err(err) => eprintln!("Warning: logging disabled: {}", err),
    }

    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();
            app.layout.update(size);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(app.theme_manager.current())
                        .language(app.language);
                    f.render_widget(warning, size);
                }
                LayoutMode::Normal => render_main_ui(f, app),
            }
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if app.is_dialog_active() {
                        app.handle_dialog_key(key.modifiers, key.code);
                    } else if let Some(action) = find_action(key.modifiers, key.code) {
                        app.execute_action(action);
                    }
                }
            }
        }

        app.clear_expired_toast();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 상단 제목 줄
fn render_header(f: &mut ratatui::Frame<'_>, app: &App, area: Rect) {
    let theme = app.theme_manager.current();
    let title = format!(
        " {}  [{}] [{}]",
        app.i18n().tr(TextKey::AppTitle),
        app.theme_manager.current_name(),
        app.language.code()
    );
    let header = Paragraph::new(title).style(
        Style::default()
            .bg(theme.header_bg.to_color())
            .fg(theme.header_fg.to_color())
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(header, area);
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();

    render_header(f, app, areas.header);

    let list = GuideList::new(app.roster.guides())
        .cursor(app.roster.cursor())
        .language(app.language)
        .theme(theme);
    f.render_widget(list, areas.list);

    let summary = app.status_summary();
    let detail = app.status_detail();
    let status_bar = StatusBar::new()
        .summary(&summary)
        .detail(&detail)
        .toast(app.toast_display())
        .theme(theme);
    f.render_widget(status_bar, areas.status_bar);

    let command_bar = CommandBar::new()
        .commands(generate_command_bar_items(app.language, !app.roster.is_empty()))
        .theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if app.is_dialog_active() {
        let dialog = Dialog::new(&app.judge_dialog)
            .theme(theme)
            .language(app.language);
        f.render_widget(dialog, f.area());
    }
}
