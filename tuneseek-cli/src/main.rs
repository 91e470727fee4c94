use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{error, info};
use tuneseek_core::{
    parse_route_id, resolve_details, CatalogConfig, ConfigError, DetailsView, ItunesCatalog,
    SearchOrchestrator, SearchSelectors, SearchState, SearchStore, Track,
};

/// tuneseek - search the iTunes catalog from the terminal.
#[derive(Parser)]
#[command(name = "tuneseek")]
struct Args {
    /// YAML file with catalog settings.
    #[arg(long, env = "TUNESEEK_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog origin, e.g. https://itunes.apple.com
    #[arg(long, env = "TUNESEEK_CATALOG_URL")]
    base_url: Option<String>,

    /// Maximum number of results (1-200).
    #[arg(long, env = "TUNESEEK_RESULT_LIMIT")]
    limit: Option<u32>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search tracks by term.
    Search { term: String },
    /// Show one track by its catalog id.
    Track { id: String },
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// File (if any), then `TUNESEEK_*`, then command-line flags.
fn load_config(args: &Args) -> Result<CatalogConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => CatalogConfig::from_file(path)?,
        None => CatalogConfig::default(),
    }
    .with_env()?;

    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    config.validate()
}

type CliOrchestrator = SearchOrchestrator<ItunesCatalog, Rc<RefCell<SearchStore>>>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    configure_logging();
    if dotenv_loaded {
        info!("Loaded environment from .env");
    }
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        error!("Invalid configuration: {e}");
        std::process::exit(2);
    });
    info!("Using catalog at {}", config.base_url);

    let store = Rc::new(RefCell::new(SearchStore::new()));
    let quiet_period = config.debounce();
    let orchestrator: CliOrchestrator =
        SearchOrchestrator::new(ItunesCatalog::new(config), Rc::clone(&store), quiet_period);

    let ok = match &args.command {
        Command::Search { term } => run_search(&orchestrator, &store, term, args.json).await,
        Command::Track { id } => run_track(&orchestrator, &store, id, args.json).await,
    };

    if !ok {
        std::process::exit(1);
    }
}

async fn run_search(
    orchestrator: &CliOrchestrator,
    store: &Rc<RefCell<SearchStore>>,
    term: &str,
    json: bool,
) -> bool {
    if term.trim().is_empty() {
        error!("Search term is empty");
        return false;
    }
    orchestrator.search_now(term).await;

    let state = store.borrow().state();
    if let Some(err) = &state.error {
        error!("Search failed: {err}");
        return false;
    }
    if json {
        print_json(state.tracks.as_slice());
    } else {
        print!("{}", format_results(&state));
    }
    true
}

async fn run_track(
    orchestrator: &CliOrchestrator,
    store: &Rc<RefCell<SearchStore>>,
    id: &str,
    json: bool,
) -> bool {
    if parse_route_id(id).is_none() {
        error!("Track {id} not found: catalog ids are numeric");
        return false;
    }
    orchestrator.lookup_track(id).await;

    let selectors = SearchSelectors::new();
    let state = store.borrow().state();
    let track = parse_route_id(id).and_then(|n| selectors.track_by_id(&state, n));
    let view = resolve_details(
        id,
        track,
        selectors.loading(&state),
        selectors.error(&state),
        true,
    );

    match view {
        DetailsView::Ready(track) => {
            if json {
                print_json(&track);
            } else {
                print!("{}", format_track(&track));
            }
            true
        }
        DetailsView::Failed(err) => {
            error!("Lookup failed: {err}");
            false
        }
        DetailsView::NotFound | DetailsView::Loading | DetailsView::Lookup(_) => {
            error!("Track {id} not found");
            false
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(out) => println!("{out}"),
        Err(e) => error!("Could not encode output: {e}"),
    }
}

fn format_results(state: &SearchState) -> String {
    if state.tracks.is_empty() {
        return format!("No tracks found for \"{}\"\n", state.query);
    }
    let mut out = String::new();
    for track in state.tracks.iter() {
        out.push_str(&format!(
            "{:>12}  {} - {}\n",
            track.id, track.artist_name, track.name
        ));
    }
    out
}

fn format_track(track: &Track) -> String {
    let mut lines = vec![
        format!("{} - {}", track.artist_name, track.name),
        format!("  id:       {}", track.id),
    ];
    if let Some(album) = &track.collection_name {
        lines.push(format!("  album:    {album}"));
    }
    if !track.genre.is_empty() {
        lines.push(format!("  genre:    {}", track.genre));
    }
    if let Some(release) = track.release_date_label() {
        lines.push(format!("  released: {release}"));
    }
    if let Some(preview) = &track.preview_url {
        lines.push(format!("  preview:  {preview}"));
    }
    lines.join("\n") + "\n"
}
