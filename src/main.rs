use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use recipebox::{AppConfig, Error, FavoriteChange, Session, view};

#[derive(Parser, Debug)]
#[command(name = "recipebox", about = "Browse TheMealDB recipes and keep favorites")]
struct Cli {
    /// Overrides `RECIPEBOX_API_BASE_URL`.
    #[arg(long)]
    api_base_url: Option<String>,

    /// Overrides `RECIPEBOX_DATA_DIR`.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Overrides `RECIPEBOX_DEFAULT_CATEGORY`.
    #[arg(long)]
    default_category: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List recipe categories.
    Categories,
    /// List recipes in a category (`all` or none for the default).
    List { category: Option<String> },
    /// Search recipes by name.
    Search { query: String },
    /// Show one recipe in full.
    Show { id: String },
    Favorites(FavoritesCommand),
    Theme(ThemeCommand),
    /// Wipe favorites and the theme preference.
    ClearAll,
}

#[derive(Args, Debug)]
struct FavoritesCommand {
    #[command(subcommand)]
    command: FavoritesSubcommand,
}

#[derive(Subcommand, Debug)]
enum FavoritesSubcommand {
    List,
    Add { id: String },
    Remove { id: String },
    Toggle { id: String },
    Clear,
}

#[derive(Args, Debug)]
struct ThemeCommand {
    #[command(subcommand)]
    command: ThemeSubcommand,
}

#[derive(Subcommand, Debug)]
enum ThemeSubcommand {
    Get,
    Set { theme: String },
    Toggle,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "command failed");
            eprintln!("{}", user_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig, Error> {
    let mut config = AppConfig::from_env()?;
    if let Some(url) = &cli.api_base_url {
        config.api_base_url.clone_from(url);
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir.clone_from(dir);
    }
    if let Some(category) = &cli.default_category {
        config.default_category.clone_from(category);
    }
    config.validated()
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = load_config(&cli)?;
    let session = Session::from_config(&config)?;

    match cli.command {
        Command::Categories => {
            print!("{}", view::categories(&session.categories().await?));
        }
        Command::List { category } => {
            let recipes = session.recipes_in(category.as_deref()).await?;
            print!("{}", view::recipe_list(&recipes, view::EMPTY_RESULTS));
        }
        Command::Search { query } => {
            let query = query.trim();
            if query.is_empty() {
                println!("Enter a recipe name to search.");
                return Ok(());
            }
            let recipes = session.search(query).await?;
            print!("{}", view::recipe_list(&recipes, view::EMPTY_RESULTS));
        }
        Command::Show { id } => {
            print!("{}", view::recipe_detail(&session.detail(&id).await?));
        }
        Command::Favorites(FavoritesCommand { command }) => run_favorites(&session, command).await?,
        Command::Theme(ThemeCommand { command }) => run_theme(&session, command)?,
        Command::ClearAll => {
            session.clear_all()?;
            println!("Cleared favorites and preferences.");
        }
    }
    Ok(())
}

async fn run_favorites(session: &Session, command: FavoritesSubcommand) -> Result<(), Error> {
    match command {
        FavoritesSubcommand::List => {
            print!("{}", view::recipe_list(&session.favorites().list(), view::EMPTY_FAVORITES));
        }
        FavoritesSubcommand::Add { id } => {
            if session.add_favorite(&id).await? {
                println!("{}", view::favorite_change(FavoriteChange::Added, &id));
            } else {
                println!("{id} is already a favorite.");
            }
        }
        FavoritesSubcommand::Remove { id } => {
            session.favorites().remove(&id)?;
            println!("{}", view::favorite_change(FavoriteChange::Removed, &id));
        }
        FavoritesSubcommand::Toggle { id } => {
            let change = session.toggle_favorite(&id).await?;
            println!("{}", view::favorite_change(change, &id));
        }
        FavoritesSubcommand::Clear => {
            session.favorites().clear()?;
            println!("Favorites cleared.");
        }
    }
    Ok(())
}

fn run_theme(session: &Session, command: ThemeSubcommand) -> Result<(), Error> {
    let prefs = session.preferences();
    match command {
        ThemeSubcommand::Get => println!("{}", prefs.get_theme()),
        ThemeSubcommand::Set { theme } => {
            prefs.set_theme_str(&theme)?;
            println!("{}", view::theme_changed(prefs.get_theme()));
        }
        ThemeSubcommand::Toggle => println!("{}", view::theme_changed(session.toggle_theme()?)),
    }
    Ok(())
}

fn user_message(error: &Error) -> String {
    match error {
        Error::NotFound { id } => format!("No recipe with id {id}."),
        Error::InvalidArgument(msg) => format!("Invalid input: {msg}"),
        e if e.is_network() => format!("Could not reach the recipe service. Please try again. ({e})"),
        e => format!("Something went wrong: {e}"),
    }
}
