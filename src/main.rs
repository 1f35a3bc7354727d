use anyhow::Result;
use clap::{Parser, Subcommand};
use crud_console_lib::domain::entities::{
    HelpRequest, MenuItem, MenuItemReview, Organization, RecommendationRequest,
};
use crud_console_lib::domain::value_objects::{CurrentUser, EntityKind};
use crud_console_lib::presentation::table::TableEntity;
use crud_console_lib::shared::logging;
use crud_console_lib::{AppConfig, ConsoleState};
use tracing::info;

#[derive(Parser)]
#[command(name = "crud-console")]
#[command(about = "Admin console for CRUD entities served by a REST backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL (e.g. http://localhost:8080)
    #[arg(short, long, env = "CRUD_CONSOLE_BACKEND_URL")]
    backend_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the index page of an entity
    List {
        /// helprequest, menuitemreview, recommendationrequest, organization, menuitem
        entity: EntityKind,
    },
    /// Render the edit form of one record
    Show {
        entity: EntityKind,
        /// Record identifier (numeric id, or orgCode for organizations)
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init("crud-console");
    info!("Starting crud-console v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::from_env();
    if let Some(url) = cli.backend_url {
        config.backend.base_url = url.trim_end_matches('/').to_string();
    }
    let state = ConsoleState::new(config)?;
    let user = state.current_user().await;

    match cli.command {
        Commands::List { entity } => match entity {
            EntityKind::HelpRequest => list::<HelpRequest>(&state, user).await,
            EntityKind::MenuItemReview => list::<MenuItemReview>(&state, user).await,
            EntityKind::RecommendationRequest => {
                list::<RecommendationRequest>(&state, user).await
            }
            EntityKind::Organization => list::<Organization>(&state, user).await,
            EntityKind::MenuItem => list::<MenuItem>(&state, user).await,
        },
        Commands::Show { entity, id } => match entity {
            EntityKind::HelpRequest => show::<HelpRequest>(&state, &id).await,
            EntityKind::MenuItemReview => show::<MenuItemReview>(&state, &id).await,
            EntityKind::RecommendationRequest => show::<RecommendationRequest>(&state, &id).await,
            EntityKind::Organization => show::<Organization>(&state, &id).await,
            EntityKind::MenuItem => show::<MenuItem>(&state, &id).await,
        },
    }
}

async fn list<E: TableEntity>(state: &ConsoleState, user: CurrentUser) -> Result<()> {
    let mut page = state.index_page::<E>(user);
    page.load().await;

    let rendered = page.render();
    println!("{}", rendered.title);
    if let Some(link) = &rendered.create_link {
        println!("[{}] -> {}", link.label, link.href);
    }
    println!("{}", rendered.table);
    Ok(())
}

async fn show<E: TableEntity>(state: &ConsoleState, id: &str) -> Result<()> {
    let mut page = state.edit_page::<E>(id)?;
    page.load().await;

    let rendered = page.render();
    println!("{}", rendered.title);
    match rendered.form {
        Some(form) => println!("{form}"),
        None => anyhow::bail!("{} {} could not be loaded", E::KIND, id),
    }
    Ok(())
}
