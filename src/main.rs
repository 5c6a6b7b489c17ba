mod cli;
mod settings;
mod workflow;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use chrono::Utc;
use joblist::{PreferenceStore, Theme, logging};
use tracing::warn;

use cli::{CliArgs, OutputFormat, PlainStyle, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::{BrowseRequest, BrowseWorkflow};

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let theme = resolve_theme(&cli, &resolved);
	run_browse(&cli, resolved, theme)
}

/// Pick the theme from configuration, the saved preference or the terminal
/// background, remembering an explicit `--theme` choice for later runs.
fn resolve_theme(cli: &CliArgs, config: &ResolvedConfig) -> Theme {
	let preferences = match PreferenceStore::open_default() {
		Ok(store) => Some(store),
		Err(err) => {
			warn!("preferences unavailable: {err:#}");
			None
		}
	};

	if let (Some(choice), Some(store)) = (cli.theme, preferences.as_ref()) {
		if let Err(err) = store.set_theme(choice.into()) {
			warn!("failed to save theme preference: {err:#}");
		}
	}

	if let Some(theme) = config.theme {
		return theme;
	}

	preferences
		.and_then(|store| match store.theme() {
			Ok(saved) => saved,
			Err(err) => {
				warn!("ignoring saved preferences: {err:#}");
				None
			}
		})
		.or_else(Theme::detect)
		.unwrap_or_default()
}

/// Execute the browse workflow and print output in the chosen format.
fn run_browse(cli: &CliArgs, config: ResolvedConfig, theme: Theme) -> Result<()> {
	let format = config.output;
	let workflow = BrowseWorkflow::from_config(&config, BrowseRequest::from_cli(cli))?;
	let outcome = workflow.run();

	match format {
		OutputFormat::Plain => {
			let style = PlainStyle {
				theme,
				color: stdout().is_terminal(),
				now: Utc::now(),
				wide: cli.wide,
			};
			print_plain(&outcome, &style);
		}
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
