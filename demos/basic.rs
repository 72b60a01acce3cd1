//! Basic example demonstrating the Kaiten API client.
//!
//! Run with:
//! ```
//! KAITEN_TOKEN=your-token KAITEN_DOMAIN=your-company cargo run --example basic
//! ```

use kaitenapi::{
    Create, CreateSpaceParams, Get, KaitenClient, List, PrettyPrint, Remove, Space, Update,
    UpdateSpaceParams,
};

#[tokio::main]
async fn main() -> kaitenapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Creating Kaiten client...");
    let client = KaitenClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    println!("\n--- Listing Spaces ---");
    let spaces = Space::list(&client).await?.into_data();
    println!("Found {} spaces", spaces.len());

    for space in &spaces {
        let marker = if space.is_archived() { " [archived]" } else { "" };
        println!("  - {} ({}){}", space.title, space.id, marker);
    }

    println!("\n--- Creating a Space ---");
    let created = Space::create(
        &client,
        CreateSpaceParams {
            title: Some("kaitenapi demo".to_string()),
            external_id: None,
        },
    )
    .await?;
    println!("Created space #{} ({})", created.data.id, created.response.status());

    println!("\n--- Getting Space Details ---");
    let space = Space::get(&client, created.data.id).await?.into_data();
    println!("{}", space.pretty_print());

    println!("\n--- Renaming the Space ---");
    let renamed = Space::update(
        &client,
        space.id,
        UpdateSpaceParams {
            title: Some("kaitenapi demo (renamed)".to_string()),
            ..Default::default()
        },
    )
    .await?
    .into_data();
    println!("New title: {}", renamed.title);

    println!("\n--- Removing the Space ---");
    let response = Space::remove(&client, renamed.id).await?;
    println!("Removed space #{} ({})", renamed.id, response.status());

    println!("\nDone!");
    Ok(())
}
