//! # CLI Dispatch
//!
//! Builds the [`AppContext`] once per process and routes each parsed command
//! to a `handle_*` function. Handlers call the API and print the `CmdResult`;
//! they never touch the store directly.
//!
//! The same context serves one-shot invocations (`arbor list`) and every line
//! of an interactive session, so mutations made in a session are visible to
//! the lines that follow.

use super::render::{print_messages, render_detail, render_grid, render_table};
use super::session;
use super::setup::{Cli, Commands, TreeArgs};
use arbor::api::{ArborApi, ArborPaths, CmdMessage, CmdResult, ConfigAction};
use arbor::config::{ArborConfig, ViewMode};
use arbor::error::{ArborError, Result};
use arbor::form::TreeForm;
use arbor::store::memory::InMemoryStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, warn};

pub(super) struct AppContext {
    pub api: ArborApi<InMemoryStore>,
    pub view: ViewMode,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    super::init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        None | Some(Commands::Shell) => session::run(&mut ctx),
        Some(command) => dispatch(&mut ctx, command),
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("ARBOR_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("org", "arbor", "arbor")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ArborError::Config("Could not determine config dir".to_string()))
}

fn init_context() -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = ArborConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(dir = %config_dir.display(), error = %e, "ignoring unreadable config");
        ArborConfig::default()
    });
    debug!(?config, "loaded config");

    let store = if config.seed_demo {
        InMemoryStore::seeded()
    } else {
        InMemoryStore::new()
    };
    let api = ArborApi::new(store, ArborPaths { config_dir });

    Ok(AppContext {
        api,
        view: config.view,
    })
}

pub(super) fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::List { search, view, json } => handle_list(ctx, search, view, json),
        Commands::Search { term, view, json } => handle_list(ctx, Some(term), view, json),
        Commands::View { id, json } => handle_view(ctx, &id, json),
        Commands::Add { id, fields } => handle_add(ctx, id, fields),
        Commands::Edit {
            id,
            new_id,
            clear_photos,
            fields,
        } => handle_edit(ctx, &id, new_id, clear_photos, fields),
        Commands::Delete { id, yes } => handle_delete(ctx, &id, yes),
        Commands::Config { key, value } => handle_config(ctx, key, value),
        Commands::Shell => {
            print_messages(&[CmdMessage::info("Already in a session.")]);
            Ok(())
        }
    }
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    view: Option<ViewMode>,
    json: bool,
) -> Result<()> {
    let result = ctx.api.list_trees(search.as_deref())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_trees)?);
        return Ok(());
    }

    if !result.listed_trees.is_empty() {
        let rendered = match view.unwrap_or(ctx.view) {
            ViewMode::Table => render_table(&result.listed_trees),
            ViewMode::Grid => render_grid(&result.listed_trees),
        };
        print!("{}", rendered);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, id: &str, json: bool) -> Result<()> {
    let result = ctx.api.view_tree(id)?;
    for tree in &result.listed_trees {
        if json {
            println!("{}", serde_json::to_string_pretty(tree)?);
        } else {
            print!("{}", render_detail(tree));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, id: Option<String>, fields: TreeArgs) -> Result<()> {
    let mut form = TreeForm {
        id: id.unwrap_or_default(),
        ..TreeForm::default()
    };
    fields.apply_to(&mut form);

    let result = ctx.api.create_tree(&form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: &str,
    new_id: Option<String>,
    clear_photos: bool,
    fields: TreeArgs,
) -> Result<()> {
    let Some(current) = ctx.api.find_tree(id) else {
        print_messages(&ctx.api.view_tree(id)?.messages);
        return Ok(());
    };

    let mut form = TreeForm::from_tree(&current);
    if let Some(new_id) = new_id {
        form.id = new_id;
    }
    if clear_photos {
        form.photos.clear();
    }
    fields.apply_to(&mut form);

    let result = ctx.api.update_tree(id, &form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str, yes: bool) -> Result<()> {
    if !yes {
        if let Some(tree) = ctx.api.find_tree(id) {
            if !confirm_delete(id, tree.display_name())? {
                print_messages(&[CmdMessage::info("Operation cancelled.")]);
                return Ok(());
            }
        }
    }

    let result = ctx.api.delete_tree(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm_delete(id: &str, name: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        print_messages(&[CmdMessage::warning(
            "Refusing to delete without confirmation; pass --yes.",
        )]);
        return Ok(false);
    }

    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("Delete tree {} ({})?", id, name))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result: CmdResult = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        for key in ArborConfig::KEYS {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    if let Some(config) = &result.config {
        ctx.view = config.view;
    }
    print_messages(&result.messages);
    Ok(())
}
