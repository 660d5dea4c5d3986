use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::Context;
use champ_roster::api::client::RosterApiClient;
use champ_roster::api::RosterBackend;
use champ_roster::config::Config;
use champ_roster::display::output::{
    display_error, display_info, display_pick, display_roster, display_success,
};
use champ_roster::error::AppError;
use champ_roster::roster::filter::{FlagField, TriState};
use champ_roster::roster::ranking::Weight;
use champ_roster::roster::sort::SortKey;
use champ_roster::roster::view::RosterView;
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "champ-roster")]
#[command(about = "Rank, filter and pick champions from your roster", long_about = None)]
struct Args {
    /// Roster service base URL (overrides ROSTER_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Win-rate weight for the metric, 0-60 in steps of 5 (overrides ROSTER_WEIGHT)
    #[arg(short, long)]
    weight: Option<u32>,

    /// Seed for random picks (reproducible sessions)
    #[arg(long)]
    seed: Option<u64>,

    /// Fetch, print the table and exit
    #[arg(long)]
    print: bool,
}

/// One line typed at the roster prompt.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the table
    Show,
    /// Sort by a column; the same column again flips the direction
    Sort { column: Column },
    /// Filter on played champions
    Played { value: Toggle },
    /// Filter on won champions
    Won { value: Toggle },
    /// Search names; `|` separates alternatives, no terms clears the search
    Search {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        terms: Vec<String>,
    },
    /// Set the weight: a value, `up` or `down`
    Weight { value: String },
    /// Pick a champion by id or name
    Pick {
        #[arg(num_args = 1.., trailing_var_arg = true, required = true)]
        champion: Vec<String>,
    },
    /// Pick a random visible champion other than the last pick
    Random,
    /// Fetch the roster again
    Refresh,
    /// Ask the service to randomize teams
    Teams,
    /// Leave
    #[command(alias = "exit")]
    Quit,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Column {
    Name,
    Winrate,
    Mastery,
    Metric,
    Won,
    Played,
}

impl From<Column> for SortKey {
    fn from(column: Column) -> Self {
        match column {
            Column::Name => SortKey::Name,
            Column::Winrate => SortKey::WinRate,
            Column::Mastery => SortKey::Mastery,
            Column::Metric => SortKey::Metric,
            Column::Won => SortKey::Won,
            Column::Played => SortKey::Played,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Toggle {
    Both,
    Yes,
    No,
}

impl From<Toggle> for TriState {
    fn from(toggle: Toggle) -> Self {
        match toggle {
            Toggle::Both => TriState::Both,
            Toggle::Yes => TriState::OnlyTrue,
            Toggle::No => TriState::OnlyFalse,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

fn main() {
    let args = Args::parse();
    init_tracing();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(api_url) = args.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }
    if let Some(weight) = args.weight {
        config.weight = Weight::new(weight)?;
    }

    display_info(&format!("Using roster service at {}", config.api_url));

    let client = RosterApiClient::new(config.clone());
    let mut view = RosterView::new(client, config.weight);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if args.print {
        refresh_with_spinner(&mut view).context("failed to fetch roster")?;
        display_roster(&view);
        return Ok(());
    }

    if let Err(e) = refresh_with_spinner(&mut view) {
        display_error(&e.to_string());
    }
    display_roster(&view);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("roster> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let mut command = match Line::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                e.print().ok();
                continue;
            }
        };
        if let Command::Search { terms } = &mut command {
            *terms = vec![search_text(&line).to_string()];
        }

        match execute(&mut view, &mut rng, command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => display_error(&e.to_string()),
        }
    }

    Ok(())
}

fn execute<B: RosterBackend>(
    view: &mut RosterView<B>,
    rng: &mut StdRng,
    command: Command,
) -> Result<Flow, AppError> {
    match command {
        Command::Show => display_roster(view),
        Command::Sort { column } => {
            view.sort_by(column.into());
            display_roster(view);
        }
        Command::Played { value } => {
            view.set_flag_filter(FlagField::Played, value.into());
            display_roster(view);
        }
        Command::Won { value } => {
            view.set_flag_filter(FlagField::Won, value.into());
            display_roster(view);
        }
        Command::Search { terms } => {
            view.set_search(&terms.concat());
            display_roster(view);
        }
        Command::Weight { value } => {
            let weight = view.weight().adjust(&value)?;
            view.set_weight(weight);
            display_roster(view);
        }
        Command::Pick { champion } => {
            let id = view.resolve(&champion.join(" "))?;
            view.pick(id);
            if let Some(champ) = view.champion(id) {
                display_pick(champ);
            }
        }
        Command::Random => match view.pick_random(rng) {
            Ok(id) => {
                if let Some(champ) = view.champion(id) {
                    display_pick(champ);
                }
            }
            Err(AppError::EmptyCandidateSet) => {
                display_info("No other visible champion to pick");
            }
            Err(e) => return Err(e),
        },
        Command::Refresh => {
            refresh_with_spinner(view)?;
            display_roster(view);
        }
        Command::Teams => {
            view.randomize_teams();
            display_success("Requested team randomization");
        }
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Everything after the command word, spacing kept as typed.
fn search_text(line: &str) -> &str {
    line.trim_start()
        .split_once(char::is_whitespace)
        .map_or("", |(_, rest)| rest)
}

fn refresh_with_spinner<B: RosterBackend>(view: &mut RosterView<B>) -> Result<(), AppError> {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Fetching roster");

    let result = view.refresh();
    pb.finish_and_clear();

    let count = result?;
    display_success(&format!("Loaded {} champions", count));
    Ok(())
}
