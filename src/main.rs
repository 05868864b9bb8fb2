mod config;
mod error;
mod font;
mod paint;
mod pattern;
mod schedule;
mod vcs;

use anyhow::Result;
use chrono::Local;
use log::info;

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = config::Config::from_env()?;
    info!("Commit Stencil starting...");
    info!("Message: {}", config.message);
    match &config.repo_dir {
        Some(dir) => info!("Repository: {}", dir.display()),
        None => info!("Repository: (current working directory)"),
    }

    let font = font::Font::default_5x7();
    let bitmap = pattern::render_message(&font, &config.message)?;
    info!(
        "Pattern is {} weeks wide ({} cells)",
        bitmap.width(),
        bitmap.width() * bitmap.rows().len()
    );

    let anchor = schedule::most_recent_sunday(Local::now().date_naive());
    info!("Anchor date (most recent Sunday): {anchor}");

    let plan = schedule::build_schedule(&bitmap, anchor, config.commits_per_cell);

    let mut git = vcs::GitCli::new(config.repo_dir.clone());
    let total = paint::paint_schedule(&mut git, &plan, config.repo_dir.as_deref())?;
    info!("Made {total} backdated commits");

    if config.no_push {
        info!("Push skipped (COMMIT_STENCIL_NO_PUSH set)");
    } else {
        use vcs::Vcs;
        git.push()?;
        info!("Pushed all commits to the remote");
    }

    Ok(())
}
