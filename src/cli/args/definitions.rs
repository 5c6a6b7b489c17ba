use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, ShowArg, SortArg, ThemeArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `joblist` binary.
#[derive(Parser, Debug)]
#[command(
	name = "joblist",
	version,
	long_version = long_version(),
	about = "Browse, filter and summarise job listings from a JSON file",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "FILE",
		help = "JSON file containing the listings to browse (default: listings.path from config)"
	)]
	pub(crate) listings: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "JOBLIST_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'r',
		long,
		value_name = "TEXT",
		help = "Match titles, companies or skills containing TEXT (default: no constraint)"
	)]
	pub(crate) role: Option<String>,
	#[arg(
		short = 'l',
		long,
		value_name = "TEXT",
		help = "Match locations containing TEXT (default: no constraint)"
	)]
	pub(crate) location: Option<String>,
	#[arg(
		long,
		value_enum,
		conflicts_with_all = ["role", "location"],
		help = "Show a predefined view instead of searching"
	)]
	pub(crate) show: Option<ShowArg>,
	#[arg(
		short = 's',
		long,
		value_enum,
		help = "Order the results (default: listings.sort from config, else file order)"
	)]
	pub(crate) sort: Option<SortArg>,
	#[arg(
		short = 'P',
		long,
		value_name = "NUM",
		default_value_t = 1,
		value_parser = RangedU64ValueParser::<usize>::new().range(1..),
		help = "Number of result pages to reveal"
	)]
	pub(crate) pages: usize,
	#[arg(
		long = "page-size",
		value_name = "NUM",
		help = "Listings per page (default: 12)"
	)]
	pub(crate) page_size: Option<usize>,
	#[arg(
		long,
		value_enum,
		help = "Colour theme; the choice is remembered for later runs (default: saved preference)"
	)]
	pub(crate) theme: Option<ThemeArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		help = "Choose how to print the result (default: plain)"
	)]
	pub(crate) output: Option<OutputFormat>,
	#[arg(
		short = 'w',
		long,
		help = "Show description, skills, remote status and apply link under each listing"
	)]
	pub(crate) wide: bool,
	#[arg(
		short = 'v',
		long,
		help = "Log store operations to stderr (default: warnings only)"
	)]
	pub(crate) verbose: bool,
}
