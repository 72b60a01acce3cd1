//! Kaiten API CLI binary.
//!
//! A command-line interface for interacting with the Kaiten API.

use clap::Parser;
use kaitenapi::cli::{Cli, Command, Entity};
use kaitenapi::{
    Create, CreateSpaceParams, Get, KaitenClient, List, PrettyPrint, Remove, Space, Update,
    UpdateSpaceParams,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();

    let client = match KaitenClient::from_options(
        cli.token.as_deref(),
        cli.domain.as_deref(),
        cli.api_url.as_deref(),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set KAITEN_TOKEN and KAITEN_DOMAIN environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &KaitenClient, cli: Cli) -> kaitenapi::Result<()> {
    match cli.command {
        Command::Get { entity, id } => handle_get(client, entity, id, cli.json).await,
        Command::List { entity } => handle_list(client, entity, cli.json).await,
        Command::Create {
            entity,
            title,
            external_id,
        } => handle_create(client, entity, title, external_id, cli.json).await,
        Command::Update {
            entity,
            id,
            title,
            external_id,
            allowed_card_type_ids,
        } => {
            let params = UpdateSpaceParams {
                title,
                external_id,
                allowed_card_type_ids,
            };
            handle_update(client, entity, id, params, cli.json).await
        }
        Command::Remove { entity, id } => handle_remove(client, entity, id, cli.json).await,
    }
}

async fn handle_get(client: &KaitenClient, entity: Entity, id: u64, json: bool) -> kaitenapi::Result<()> {
    match entity {
        Entity::Space => {
            let space = Space::get(client, id).await?.into_data();
            output_single(&space, json)?;
        }
    }
    Ok(())
}

async fn handle_list(client: &KaitenClient, entity: Entity, json: bool) -> kaitenapi::Result<()> {
    match entity {
        Entity::Space => {
            let spaces = Space::list(client).await?.into_data();
            output_list(&spaces, json, |s| SpaceRow::from(s))?;
        }
    }
    Ok(())
}

async fn handle_create(
    client: &KaitenClient,
    entity: Entity,
    title: Option<String>,
    external_id: Option<u64>,
    json: bool,
) -> kaitenapi::Result<()> {
    match entity {
        Entity::Space => {
            let params = CreateSpaceParams { title, external_id };
            let space = Space::create(client, params).await?.into_data();
            output_single(&space, json)?;
        }
    }
    Ok(())
}

async fn handle_update(
    client: &KaitenClient,
    entity: Entity,
    id: u64,
    params: UpdateSpaceParams,
    json: bool,
) -> kaitenapi::Result<()> {
    match entity {
        Entity::Space => {
            let space = Space::update(client, id, params).await?.into_data();
            output_single(&space, json)?;
        }
    }
    Ok(())
}

async fn handle_remove(client: &KaitenClient, entity: Entity, id: u64, json: bool) -> kaitenapi::Result<()> {
    match entity {
        Entity::Space => {
            let response = Space::remove(client, id).await?;
            if json {
                let out = serde_json::json!({ "removed": id, "status": response.status().as_u16() });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Removed space {id}");
            }
        }
    }
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> kaitenapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_list<T, R, F>(items: &[T], json: bool, to_row: F) -> kaitenapi::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\n{} total", items.len());
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct SpaceRow {
    id: u64,
    title: String,
    access: String,
    archived: bool,
}

impl From<&Space> for SpaceRow {
    fn from(s: &Space) -> Self {
        Self {
            id: s.id,
            title: s.title.clone(),
            access: s.access.clone().unwrap_or_default(),
            archived: s.archived,
        }
    }
}
