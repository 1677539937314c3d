use clap::Parser;
use dialoguer::{Confirm, Input, MultiSelect};
use indicatif::{ProgressBar, ProgressStyle};
use packwise::{assistant, cli, config, error, export, game, luggage, planner, summary};
use packwise_common::{compose_trip_description, Checklist, FlowEvent, PackingPlan, ScreenFlow, TriageSession, TRIP_TAGS};
use cli::{Cli, Commands};
use config::Config;
use error::{PackwiseError, Result};
use planner::{CacheFile, SavedPlan};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;
    debug!(model = %config.model, provider = ?cli.ai_provider, "config loaded");

    match cli.command {
        Commands::Plan { trip, tags, output, no_cache } => {
            println!("🧳 packwise - plan\n");

            let trip = read_trip(trip, &tags)?;
            println!("[1/2] Planning: {}", trip);
            let plan = with_spinner(
                "Asking the planner...",
                planner::generate_plan(&trip, cli.ai_provider, &config, config.use_cache && !no_cache),
            )
            .await?;
            println!("✔ {} categories, {} items\n", plan.categories.len(), plan.item_count());

            println!("[2/2] Saving plan...");
            SavedPlan { trip, plan }.save(&output)?;
            println!("✔ Saved: {}", output.display());
        }

        Commands::Pack { plan, trip, tags, output, threshold, no_cache } => {
            println!("🧳 packwise\n");
            let mut flow = ScreenFlow::new();
            flow.handle(FlowEvent::SplashDone);

            // 1. trip + plan
            let saved = match plan {
                Some(path) => {
                    let saved = SavedPlan::load(&path)?;
                    flow.handle(FlowEvent::PlanSubmitted);
                    saved
                }
                None => {
                    let use_cache = config.use_cache && !no_cache;
                    let mut trip_arg = trip;
                    loop {
                        let trip = read_trip(trip_arg.take(), &tags)?;
                        flow.handle(FlowEvent::PlanSubmitted);
                        println!("[1/4] Planning: {}", trip);
                        let result = with_spinner(
                            "Asking the planner...",
                            planner::generate_plan(&trip, cli.ai_provider, &config, use_cache),
                        )
                        .await;
                        match result {
                            Ok(plan) => {
                                let saved = SavedPlan { trip, plan };
                                let plan_path = output.with_extension("plan.json");
                                saved.save(&plan_path)?;
                                println!("✔ Plan saved: {}\n", plan_path.display());
                                break saved;
                            }
                            Err(e) => {
                                warn!(error = %e, "plan request failed");
                                flow.handle(FlowEvent::PlanFailed);
                                eprintln!("✖ AI connection failed: {}", e);
                                let retry = Confirm::new()
                                    .with_prompt("Try again?")
                                    .default(true)
                                    .interact()?;
                                if !retry {
                                    return Err(e);
                                }
                            }
                        }
                    }
                }
            };
            flow.handle(FlowEvent::PlanReady);
            debug!(screen = ?flow.current(), "plan ready");

            // 2. luggage
            println!("[2/4] Luggage");
            luggage::confirm_luggage(&saved.plan)?;
            flow.handle(FlowEvent::LuggageConfirmed);

            // 3. game
            println!("[3/4] Packing game");
            let mut session = TriageSession::from_categories(&saved.plan.categories);
            let outcome = game::run_game(&mut session, threshold.unwrap_or(config.swipe_threshold))?;
            flow.handle(FlowEvent::PackingFinished);

            // 4. summary
            println!("[4/4] Summary\n");
            let mut checklist = Checklist::from_decisions(outcome.into_decisions());
            println!("{}", summary::render_summary(&checklist, Some(&saved.plan)));
            summary::edit_checklist(&mut checklist)?;
            save_checklist(&checklist, &output)?;
            println!("\n✅ Checklist saved: {}", output.display());
        }

        Commands::Chat { plan, message } => {
            let saved = SavedPlan::load(&plan)?;
            match message {
                Some(text) => {
                    let mut transcript = packwise_common::ChatTranscript::new(&saved.trip, &saved.plan);
                    if let Some(reply) = assistant::send(&mut transcript, &text, cli.ai_provider, &config).await {
                        println!("{}", reply);
                    }
                }
                None => assistant::run_chat(&saved, cli.ai_provider, &config).await?,
            }
        }

        Commands::Summary { checklist, plan } => {
            let checklist = load_checklist(&checklist)?;
            let plan = load_plan(plan.as_deref())?;
            println!("{}", summary::render_summary(&checklist, plan.as_ref()));
        }

        Commands::Export { input, format, output, title, plan } => {
            println!("📄 packwise - export\n");
            let checklist = load_checklist(&input)?;
            let plan = load_plan(plan.as_deref())?;
            let output = output.unwrap_or_else(|| PathBuf::from("."));

            println!("[1/1] Exporting {} ({})...", input.display(), format);
            let written = export::export_checklist(&checklist, plan.as_ref(), format, &output, &title)?;
            println!("\n✅ Export done ({} file(s))", written.len());
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if let Some(model) = set_model {
                config.model = model;
                config.save()?;
                println!("✔ Model set: {}", config.model);
            }

            if show {
                println!("Settings ({})", Config::config_path()?.display());
                println!("  API key: {}", if config.api_key.is_some() { "set" } else { "not set" });
                println!("  Model: {}", config.model);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!("  Swipe threshold: {}", config.swipe_threshold);
                println!("  Plan cache: {}", if config.use_cache { "on" } else { "off" });
            }
        }

        Commands::Cache { clear, info } => {
            let dir = CacheFile::default_dir()?;
            let cache_path = CacheFile::cache_path(&dir);

            if info || !clear {
                if cache_path.exists() {
                    let cache = CacheFile::load(&dir);
                    println!("📦 Plan cache");
                    println!("  Path: {}", cache_path.display());
                    println!("  Entries: {}", cache.len());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  Size: {:.1} KB", meta.len() as f64 / 1024.0);
                    }
                } else {
                    println!("No plan cache: {}", cache_path.display());
                }
            }

            if clear {
                match CacheFile::clear(&dir) {
                    Ok(true) => println!("✔ Cache deleted: {}", cache_path.display()),
                    Ok(false) => println!("No plan cache: {}", cache_path.display()),
                    Err(e) => eprintln!("✖ Could not delete cache: {}", e),
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("packwise={level},packwise_common={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn with_spinner<T>(message: &str, fut: impl std::future::Future<Output = T>) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    let result = fut.await;
    spinner.finish_and_clear();
    result
}

/// Trip text from the argument or the input screen, plus quick tags
fn read_trip(trip: Option<String>, tags: &[String]) -> Result<String> {
    if let Some(trip) = compose_trip_description(trip.as_deref().unwrap_or(""), tags) {
        return Ok(trip);
    }

    loop {
        let text: String = Input::new()
            .with_prompt("Where are you going?")
            .allow_empty(true)
            .interact_text()?;
        let picked = MultiSelect::new()
            .with_prompt("Quick tags (space to toggle)")
            .items(TRIP_TAGS)
            .interact()?;
        let mut chosen: Vec<&str> = tags.iter().map(String::as_str).collect();
        chosen.extend(picked.into_iter().map(|i| TRIP_TAGS[i]));

        match compose_trip_description(&text, &chosen) {
            Some(trip) => return Ok(trip),
            None => eprintln!("  {}", PackwiseError::EmptyTrip),
        }
    }
}

fn load_checklist(path: &Path) -> Result<Checklist> {
    if !path.exists() {
        return Err(PackwiseError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn load_plan(path: Option<&Path>) -> Result<Option<PackingPlan>> {
    path.map(|p| SavedPlan::load(p).map(|saved| saved.plan)).transpose()
}

fn save_checklist(checklist: &Checklist, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(checklist)?;
    std::fs::write(path, json)?;
    Ok(())
}
