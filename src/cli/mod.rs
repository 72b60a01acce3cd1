//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the kaitenapi binary.

use clap::{Parser, Subcommand, ValueEnum};

/// Kaiten API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "kaitenapi", about = "Kaiten API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Kaiten API token.
    #[arg(long, global = true, env = "KAITEN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Tenant subdomain (the `acme` in `acme.kaiten.ru`).
    #[arg(long, global = true, env = "KAITEN_DOMAIN")]
    pub domain: Option<String>,

    /// Base URL override, e.g. for on-premise installs.
    #[arg(long, global = true, env = "KAITEN_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single entity by ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The entity ID.
        id: u64,
    },

    /// List all entities of a type.
    List {
        /// The type of entity to list.
        entity: Entity,
    },

    /// Create an entity.
    Create {
        /// The type of entity to create.
        entity: Entity,

        /// Title of the new entity.
        #[arg(long)]
        title: Option<String>,

        /// External ID of the new entity.
        #[arg(long)]
        external_id: Option<u64>,
    },

    /// Update an entity.
    Update {
        /// The type of entity to update.
        entity: Entity,

        /// The ID of the entity to update.
        id: u64,

        /// New title for the entity.
        #[arg(long)]
        title: Option<String>,

        /// New external ID for the entity.
        #[arg(long)]
        external_id: Option<u64>,

        /// Card type allowed in the space. Repeat to allow several.
        #[arg(long = "allowed-card-type-id", value_name = "ID")]
        allowed_card_type_ids: Option<Vec<String>>,
    },

    /// Remove an entity.
    Remove {
        /// The type of entity to remove.
        entity: Entity,

        /// The ID of the entity to remove.
        id: u64,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A Kaiten space.
    #[value(alias = "spaces")]
    Space,
}
