//! Command dispatch

use std::io::Write;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Load settings from the usual layers and run the command, writing data to stdout.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let cwd = std::env::current_dir().map_err(|e| InfraError::io("current directory", e))?;
    let settings = Settings::load(Some(&cwd))?;
    let container = ServiceContainer::new(settings);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_with(cli, &container, &mut out)
}

/// Run the command against `container`, writing data output to `out`.
pub fn execute_with(cli: &Cli, container: &ServiceContainer, out: &mut dyn Write) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Print) => cmd_print(cli, container, out),
        Some(Commands::Tree) => cmd_tree(cli, container, out),
        Some(Commands::Search { name }) => cmd_search(cli, container, name, out),
        Some(Commands::List) => cmd_list(cli, container, out),
        Some(Commands::Sample {
            output: target,
            force,
        }) => match target {
            Some(path) => {
                container.chart_service.write_sample(path, *force)?;
                output::success(&format!("wrote sample chart to {}", path.display()));
                Ok(())
            }
            None => {
                let toml = container.chart_service.sample_definition()?;
                emit(out, toml.trim_end())
            }
        },
        Some(Commands::Config { command }) => cmd_config(command, container, out),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, out);
            Ok(())
        }
        None => Err(CliError::Usage(
            "missing command, see `orgchart --help`".to_string(),
        )),
    }
}

fn emit(out: &mut dyn Write, text: &str) -> CliResult<()> {
    writeln!(out, "{}", text).map_err(|e| InfraError::io("write output", e))?;
    Ok(())
}

#[instrument(level = "debug", skip_all)]
fn cmd_print(cli: &Cli, container: &ServiceContainer, out: &mut dyn Write) -> CliResult<()> {
    let university = container.chart_service.load_or_sample(cli.chart.as_deref())?;
    let text = container.chart_service.render_print(&university);
    emit(out, text.trim_end())
}

#[instrument(level = "debug", skip_all)]
fn cmd_tree(cli: &Cli, container: &ServiceContainer, out: &mut dyn Write) -> CliResult<()> {
    let university = container.chart_service.load_or_sample(cli.chart.as_deref())?;
    let text = container.chart_service.render_tree(&university);
    emit(out, text.trim_end())
}

#[instrument(level = "debug", skip(cli, container, out))]
fn cmd_search(
    cli: &Cli,
    container: &ServiceContainer,
    name: &str,
    out: &mut dyn Write,
) -> CliResult<()> {
    let university = container.chart_service.load_or_sample(cli.chart.as_deref())?;
    let outcome = container.chart_service.search(&university, name);
    debug!("search outcome: {:?}", outcome);
    if outcome.is_ambiguous() {
        output::warning(&format!(
            "{} committees named '{}', showing the last one visited",
            outcome.matches, name
        ));
    }
    match outcome.committee {
        Some(committee) => emit(out, &committee),
        None => Err(CliError::NotFound(outcome.query)),
    }
}

#[instrument(level = "debug", skip_all)]
fn cmd_list(cli: &Cli, container: &ServiceContainer, out: &mut dyn Write) -> CliResult<()> {
    let university = container.chart_service.load_or_sample(cli.chart.as_deref())?;
    for visited in container.chart_service.list(&university) {
        emit(out, &visited.to_string())?;
    }
    Ok(())
}

fn cmd_config(
    command: &ConfigCommands,
    container: &ServiceContainer,
    out: &mut dyn Write,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let toml = container.settings.to_toml()?;
            emit(out, toml.trim_end())
        }
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unavailable>".to_string());
            emit(out, &output::labelled("global", &global))?;
            let cwd =
                std::env::current_dir().map_err(|e| InfraError::io("current directory", e))?;
            emit(
                out,
                &output::labelled("local", &local_config_path(&cwd).display()),
            )
        }
    }
}
