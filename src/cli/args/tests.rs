use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::{ShowArg, SortArg};
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["joblist"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, None);
	assert_eq!(parsed.pages, 1);
	assert!(parsed.listings.is_none());
}

#[test]
fn browse_flags_are_parsed() {
	let parsed = CliArgs::parse_from([
		"joblist",
		"jobs.json",
		"--role",
		"developer",
		"-l",
		"europe",
		"--sort",
		"company",
		"--pages",
		"3",
		"-o",
		"json",
		"--wide",
	]);
	assert_eq!(parsed.role.as_deref(), Some("developer"));
	assert_eq!(parsed.location.as_deref(), Some("europe"));
	assert_eq!(parsed.sort, Some(SortArg::Company));
	assert_eq!(parsed.pages, 3);
	assert_eq!(parsed.output, Some(OutputFormat::Json));
	assert!(parsed.wide);
}

#[test]
fn show_conflicts_with_search_queries() {
	let result = CliArgs::try_parse_from(["joblist", "--show", "internship", "--role", "x"]);
	assert!(result.is_err());

	let parsed = CliArgs::parse_from(["joblist", "--show", "internship"]);
	assert_eq!(parsed.show, Some(ShowArg::Internship));
}

#[test]
fn zero_pages_is_rejected() {
	assert!(CliArgs::try_parse_from(["joblist", "--pages", "0"]).is_err());
}
