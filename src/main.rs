mod config;
mod input;
mod meter;
mod paths;
mod todos;
mod ui;
mod update;

use anyhow::Result;
use config::Config;
use input::StatusInput;
use meter::ContextMeter;
use statusline_git::{CommandRunner, Renderer, collect};
use std::io::{self, Read, Write};
use ui::StatusLine;

/// Environment variable holding the log filter (e.g. "debug").
const LOG_ENV: &str = "STATUSLINE_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    // Never break the host's status bar: on any error print nothing
    match run().await {
        Ok(line) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(line.as_bytes()).and_then(|_| stdout.flush()) {
                log::debug!("writing status line: {}", e);
            }
        }
        Err(e) => log::debug!("status line suppressed: {:#}", e),
    }
}

fn init_logging() {
    let env = env_logger::Env::new().filter_or(LOG_ENV, "off");
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format_timestamp_millis()
        .try_init();
}

async fn run() -> Result<String> {
    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    let input = StatusInput::parse(&raw)?;

    let config = Config::load().unwrap_or_else(|e| {
        log::debug!("config not loaded, using defaults: {:#}", e);
        Config::default()
    });

    Ok(build_line(&input, &config).await)
}

async fn build_line(input: &StatusInput, config: &Config) -> String {
    let dir = input.current_dir();

    let git = if config.git.enabled {
        let runner = CommandRunner::new(config.git.timeout());
        let record = collect(&runner, &dir).await;
        Renderer::new(config.colors.palette(), config.icons.icons()).render(record.as_ref())
    } else {
        String::new()
    };

    let claude_dir = paths::claude_dir(config.paths.claude_dir.as_deref());

    let line = StatusLine {
        model: input.model_name().to_string(),
        dir_name: ui::dir_name(&dir),
        git,
        task: todos::current_task(&paths::todos_dir(&claude_dir), input.session_id()),
        meter: input
            .remaining_percentage()
            .map(|remaining| ContextMeter::from_remaining(remaining, config.limit_percent()).render()),
        update_available: update::update_available(&paths::update_cache_file(&claude_dir)),
    };

    ui::format_line(&line)
}
