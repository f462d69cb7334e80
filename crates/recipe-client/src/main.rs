//! # recipe-client
//!
//! Command-line front end for the recipe-sharing API. Every subcommand is one
//! screen of the app: reads print what the screen would show (live or bundled
//! data), writes print the created record or the failure.
//!
//! ```bash
//! recipe-client --platform android --dev feed
//! recipe-client --api-host 192.168.1.20 publish --title Toast --ingredients Bread --instructions "Toast it"
//! RUST_LOG=debug recipe-client --config recipe-client.toml friends
//! ```

use anyhow::Context;
use api_framework::tracing::setup_tracing;
use api_framework::{DataSource, Resolution};
use clap::Parser;
use recipe_client::config::{Cli, Command, Config};
use recipe_client::forms::{RecipeForm, StatusForm};
use recipe_client::lifecycle::RecipeSystem;
use recipe_client::model::{FoodStatus, Recipe, RecipeUpdate, User};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let cli = Cli::parse();
    let config = Config::load(&cli)?;
    let system = RecipeSystem::connect(&config).context("creating API client")?;
    info!(base_url = system.base_url(), "Starting recipe client");

    run(&system, cli.command).await
}

async fn run(system: &RecipeSystem, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Feed => {
            let feed = system.load_feed().await;
            info!(source = ?feed.source, count = feed.data.len(), "Feed loaded");
            report(&feed, |recipes| recipes.iter().for_each(print_recipe_line));
        }
        Command::Stories => {
            let stories = system.load_stories().await;
            info!(source = ?stories.source, count = stories.data.len(), "Stories loaded");
            report(&stories, |stories| stories.iter().for_each(print_story));
        }
        Command::Recipe { id } => {
            let detail = system.load_recipe(id).await;
            report(&detail, |recipe| {
                if let Some(recipe) = recipe {
                    print_recipe(recipe);
                }
            });
        }
        Command::User { id } => {
            let user = system.load_user(id).await;
            report(&user, |user| {
                if let Some(user) = user {
                    print_user(user);
                }
            });
        }
        Command::Friends => {
            let view = system.load_friends().await;
            println!("My Friends ({})", view.accepted().count());
            report(&view.friendships, |_| {
                for friendship in view.accepted() {
                    println!("  {}", friendship.addressee.username);
                }
            });
            println!("People");
            report(&view.users, |users| users.iter().for_each(print_user));
        }
        Command::Profile => {
            let profile = system.load_profile().await;
            report(&profile.user, |user| match user {
                Some(user) => print_user(user),
                None => println!("No user"),
            });
            report(&profile.recipes, |recipes| {
                println!("{} recipes", recipes.len());
                recipes.iter().for_each(print_recipe_line);
            });
        }
        Command::Publish {
            title,
            ingredients,
            instructions,
            description,
            prep_time,
            image_url,
            visibility,
        } => {
            let form = RecipeForm {
                title,
                description,
                ingredients,
                prep_time: prep_time.unwrap_or_default(),
                instructions,
                image_url: image_url.unwrap_or_default(),
                visibility,
            };
            match system.publish_recipe(&form).await {
                Ok(recipe) => {
                    println!("Recipe created!");
                    if let Some(recipe) = recipe {
                        print_recipe(&recipe);
                    }
                }
                Err(e) => {
                    error!(error = %e, "Failed to create recipe");
                    anyhow::bail!("Failed to create recipe: {e}");
                }
            }
        }
        Command::Edit {
            id,
            title,
            description,
            ingredients,
            instructions,
            prep_time,
            image_url,
            visibility,
        } => {
            let update = RecipeUpdate {
                title,
                description,
                ingredients,
                prep_time,
                instructions,
                image_url,
                visibility,
            };
            anyhow::ensure!(!update.is_empty(), "nothing to change");
            let recipe = system
                .edit_recipe(id, &update)
                .await
                .context("Failed to update recipe")?;
            match recipe {
                Some(recipe) => print_recipe(&recipe),
                None => println!("Recipe {id} updated"),
            }
        }
        Command::Delete { id } => {
            system
                .delete_recipe(id)
                .await
                .context("Failed to delete recipe")?;
            println!("Recipe {id} deleted");
        }
        Command::Post {
            content,
            image_url,
            visibility,
        } => {
            let form = StatusForm {
                content,
                image_url: image_url.unwrap_or_default(),
                visibility,
            };
            let status = system
                .post_status(&form)
                .await
                .context("Failed to post status")?;
            match status {
                Some(status) => print_story(&status),
                None => println!("Status posted"),
            }
        }
        Command::Befriend { user_id } => {
            let friendship = system
                .add_friend(user_id)
                .await
                .context("Failed to add friend")?;
            match friendship {
                Some(friendship) => println!(
                    "Friend request to {} is {:?}",
                    friendship.addressee.username, friendship.status
                ),
                None => println!("Friend request to user {user_id} sent"),
            }
        }
    }
    Ok(())
}

/// Prints the data, or a retry hint when the read failed with nothing to show.
fn report<D>(resolution: &Resolution<D>, show: impl FnOnce(&D)) {
    match (&resolution.source, &resolution.error) {
        (DataSource::Unavailable, Some(e)) => println!("{e}\nRun the command again to retry."),
        _ => show(&resolution.data),
    }
}

fn print_recipe_line(recipe: &Recipe) {
    println!(
        "#{:<3} {:<20} {:<10} by {}",
        recipe.id,
        recipe.title,
        recipe.prep_time.as_deref().unwrap_or("-"),
        recipe.author.username
    );
}

fn print_recipe(recipe: &Recipe) {
    println!("{} (#{}, {})", recipe.title, recipe.id, recipe.visibility);
    println!("by {} on {}", recipe.author.display_name(), recipe.created_at.format("%Y-%m-%d"));
    if !recipe.description.is_empty() {
        println!("\n{}", recipe.description);
    }
    if let Some(prep_time) = &recipe.prep_time {
        println!("\nPrep time: {prep_time}");
    }
    println!("\nIngredients:");
    for ingredient in recipe
        .ingredients
        .split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        println!("  - {ingredient}");
    }
    println!("\nInstructions:\n{}", recipe.instructions);
}

fn print_story(status: &FoodStatus) {
    println!(
        "{} ({}): {}",
        status.author.username,
        status.created_at.format("%Y-%m-%d %H:%M"),
        status.content
    );
}

fn print_user(user: &User) {
    println!("@{} {} <{}>", user.username, user.display_name(), user.email);
}
