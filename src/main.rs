use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Position, Rect},
    Terminal,
};
use std::{fs::OpenOptions, io, sync::Arc, sync::Mutex, time::Instant};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use ceka::api::BackendClient;
use ceka::cache::CacheDb;
use ceka::config::Config;
use ceka::context::{AppContext, Session};
use ceka::model::Model;
use ceka::repository::{demo_session, InMemoryRepository, RemoteRepository, Repository};
use ceka::services::{spawn_api_service, ApiRequest, ApiResponse};
use ceka::widget::WidgetController;
use ceka::{logic, Page};

/// CEKA civic education terminal client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/ceka-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Sign in with this email; password is read from CEKA_PASSWORD
    #[arg(long)]
    email: Option<String>,

    /// Use built-in demo data even when a backend is configured
    #[arg(long)]
    offline: bool,
}

mod app;
mod handlers;
mod ui;
mod utils;

pub struct App {
    pub model: Model,
    pub ctx: AppContext,
    pub widget: WidgetController,
    pub support_url: String,

    /// Screen area of the widget at last render, for mouse hit-testing
    pub widget_area: Option<Rect>,
    /// Last reported pointer position
    pub last_pointer: Option<Position>,

    api_tx: mpsc::UnboundedSender<ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,
    expiry_rx: mpsc::UnboundedReceiver<()>,
}

impl App {
    fn new(
        config: Config,
        repo: Arc<dyn Repository>,
        session: Option<Session>,
        now: Instant,
    ) -> Result<Self> {
        let timings = config.widget.timings()?;
        let ctx = AppContext::new(session, config.theme, config.language);
        let (api_tx, api_rx) = spawn_api_service(repo, ctx.session.subscribe());

        let (expiry_tx, expiry_rx) = mpsc::unbounded_channel();
        let widget = WidgetController::mount(timings, now).with_expiry_listener(move || {
            let _ = expiry_tx.send(());
        });

        let mut app = Self {
            model: Model::new(config.vim_mode, config.page_size),
            ctx,
            widget,
            support_url: config.support_url,
            widget_area: None,
            last_pointer: None,
            api_tx,
            api_rx,
            expiry_rx,
        };
        app.request_page(Page::Bills);
        Ok(app)
    }

    /// Handle API responses from background worker
    /// Delegated to handlers::api module
    fn handle_api_response(&mut self, response: ApiResponse) {
        handlers::handle_api_response(self, response);
    }
}

fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ceka=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Pick the repository: demo data offline, otherwise the backend with cache
async fn build_repository(
    config: &Config,
    args: &Args,
) -> Result<(Arc<dyn Repository>, Option<Session>)> {
    let backend = match (&config.backend, args.offline) {
        (Some(backend), false) => backend,
        _ => {
            info!("using built-in demo data");
            return Ok((Arc::new(InMemoryRepository::seeded()), Some(demo_session())));
        }
    };

    let client = BackendClient::new(backend.url.clone(), backend.anon_key.clone())?;

    let session = match &args.email {
        Some(email) => {
            let password = std::env::var("CEKA_PASSWORD")
                .context("CEKA_PASSWORD must be set when using --email")?;
            let session = client
                .sign_in_with_password(email, &password)
                .await
                .context("Sign-in failed")?;
            debug!(user_id = %session.user_id, "signed in");
            Some(session)
        }
        None => None,
    };

    let client = match &session {
        Some(s) => client.with_access_token(&s.access_token),
        None => client,
    };

    let cache = match CacheDb::new() {
        Ok(cache) => cache,
        Err(e) => {
            warn!(error = %e, "cache unavailable, using in-memory cache");
            CacheDb::new_in_memory()?
        }
    };

    Ok((Arc::new(RemoteRepository::new(client, cache)), session))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;

    let (mut config, config_path) = Config::load_or_default(args.config.as_deref())?;
    match &config_path {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("no config file found, using defaults"),
    }

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let (repo, session) = build_repository(&config, &args).await?;
    let mut app = App::new(config, repo, session, Instant::now())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    app.widget.unmount();

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Fire widget timers that came due while waiting for input
        app.widget.advance(Instant::now());
        while app.expiry_rx.try_recv().is_ok() {
            app.on_widget_expired();
        }

        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;
        app.sync_hover();

        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            app.widget.unmount();
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        // Wake up in time for the next widget timer
        let timeout = logic::ui::poll_timeout(app.widget.next_deadline(), Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::handle_key(app, key)?;
                }
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
