//! CLI entrypoint for Code Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use quiz_application::{
    LeaderboardRepository, RunQuizError, RunQuizUseCase, SubmitScoreError, SubmitScoreUseCase,
};
use quiz_infrastructure::{ConfigLoader, FileConfig, JsonlLeaderboardStore, QuestionBank};
use quiz_presentation::{
    Cli, ConsoleFormatter, ConsolePresenter, LeaderboardFormatter, OutputConfig,
    StdinAnswerSource, prompt_initials,
};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting Code Quiz");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // CLI flags beat every config source
    if let Some(duration) = cli.duration {
        config.quiz.duration_seconds = duration;
    }
    if cli.no_shuffle {
        config.quiz.shuffle_questions = false;
    }
    config.validate().context("Invalid configuration")?;

    let output = OutputConfig {
        color: config.output.color,
        show_progress: config.output.show_progress,
    }
    .with_overrides(cli.no_color, cli.quiet);
    output.apply_color();

    // === Dependency Injection ===
    let store = Arc::new(JsonlLeaderboardStore::new(
        config.leaderboard.resolved_path(),
    ));
    let shown = config.leaderboard.max_entries_shown;

    if cli.clear_leaderboard {
        store.clear().context("Failed to clear leaderboard")?;
        println!("Leaderboard cleared ({})", store.path().display());
        return Ok(());
    }

    if cli.leaderboard {
        let board = store.load().context("Failed to read leaderboard")?;
        println!("{}", LeaderboardFormatter::format(&board, shown, None));
        return Ok(());
    }

    let bank = QuestionBank::from_config(&config);
    info!("Loaded {} questions ({:?} bank)", bank.len(), bank.source());

    let params = config.session_params();
    let engine = params.new_engine(bank.to_questions());
    let presenter = Arc::new(
        ConsolePresenter::new(output).with_penalty(params.scoring.wrong_answer_penalty_secs),
    );

    let shutdown = CancellationToken::new();
    {
        let token = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received Ctrl+C, stopping");
                token.cancel();
            }
        });
    }

    let use_case = RunQuizUseCase::new(presenter, params).with_cancellation(shutdown.clone());
    let mut answers = StdinAnswerSource::spawn();

    // === Run ===
    let outcome = match use_case.execute(engine, &mut answers).await {
        Ok(outcome) => outcome,
        Err(RunQuizError::Cancelled) => {
            println!("\nQuiz cancelled.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", ConsoleFormatter::format_outcome(&outcome));

    // === Save score ===
    let initials = match cli.initials {
        Some(initials) => Some(initials),
        None => {
            let mut stdout = std::io::stdout();
            tokio::select! {
                _ = shutdown.cancelled() => None,
                result = prompt_initials(&mut answers, &mut stdout) => result?,
            }
        }
    };

    let Some(initials) = initials else {
        println!("Score not saved.");
        return Ok(());
    };

    let submit = SubmitScoreUseCase::new(Arc::clone(&store));
    match submit.execute(&initials, &outcome) {
        Ok(saved) => {
            let highlight = (saved.rank <= shown).then_some(saved.rank);
            println!(
                "{}",
                LeaderboardFormatter::format(&saved.leaderboard, shown, highlight)
            );
        }
        Err(SubmitScoreError::InvalidRecord(e)) => {
            warn!("Score not saved: {}", e);
            println!("Score not saved: {}", e);
        }
        Err(e) => return Err(e).context("Failed to save score"),
    }

    Ok(())
}

/// Console logging on stderr, filtered by `-v` count, plus an optional
/// plain-text log file.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::registry().with(console_layer).init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file needs a file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(Some(guard))
}
