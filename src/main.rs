use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event;

use studyvault::app::App;
use studyvault::config::{self, Config, ConfigResult};
use studyvault::list;
use studyvault::logging;
use studyvault::pointer::PointerObserver;
use studyvault::suggest::SuggestClient;

/// Search-as-you-type for StudyVault folders and files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Initial search text
    query: Option<String>,

    /// StudyVault server URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Config file to read instead of ~/.config/studyvault/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print suggestions for QUERY and exit without starting the UI
    #[arg(long, requires = "query")]
    list: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    logging::init();

    let ConfigResult {
        config: mut app_config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }
    if let Some(base_url) = args.base_url {
        app_config.server.base_url = base_url;
    }

    let client = SuggestClient::new(
        &app_config.server.base_url,
        Duration::from_millis(app_config.server.timeout_ms),
    )?;
    let query = args.query.unwrap_or_default();

    if args.list {
        for suggestion in list::list_suggestions(&client, &app_config.search, &query)? {
            println!("{}", list::format_line(&client, &suggestion));
        }
        return Ok(());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let navigation = run(terminal, &app_config, client, &query);
    ratatui::restore();

    // Print after restoring so the link lands on the real stdout
    if let Some(url) = navigation? {
        println!("{}", url);
    }

    Ok(())
}

/// Attach the controller, drive the UI, and return the chosen link
fn run(
    mut terminal: DefaultTerminal,
    app_config: &Config,
    client: SuggestClient,
    query: &str,
) -> Result<Option<String>> {
    let pointer = PointerObserver::acquire()?;
    let mut app = App::new(app_config, client, query, Instant::now())?;
    app.hold_pointer(pointer);

    let result = event_loop(&mut terminal, &mut app);
    app.detach();

    result.map(|()| app.navigation.take())
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.next_wakeup(Instant::now()))? {
            app.handle_event(event::read()?, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
