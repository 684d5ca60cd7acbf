//! Configuration for when-next.
//!
//! Options come from command-line flags and an optional config file passed
//! with `--config`, with the following precedence:
//! 1. Flags given on the command line (highest priority)
//! 2. Flags in the config file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```text
//! # ~/.config/when-next/poll.conf
//! --webhook https://discord.com/api/webhooks/123/abc
//! --question When do we play?
//! -duration=48
//! --multi-select=false
//! ```
//!
//! Each line holds one flag, optionally followed by its value, either as
//! `--flag value` or `--flag=value`. Single-dash long flags (`-webhook`) are
//! accepted here and on the command line. A config file may not point at
//! another config file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use reqwest::Url;

use crate::discord::MAX_DURATION_HOURS;
use crate::error::{ConfigError, ConfigResult};
use crate::picker::try_format_date;

/// Default date layout, e.g. `Mon, 02 Jan 06`.
pub const DEFAULT_LAYOUT: &str = "%a, %d %b %y";

/// Default poll question.
pub const DEFAULT_QUESTION: &str = "WHEN?";

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(
    name = "when-next",
    version,
    about = "Pick candidate dates in the terminal and post them as a Discord poll"
)]
pub struct Cli {
    /// Path to config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Discord webhook url.
    #[arg(long, value_name = "URL")]
    pub webhook: Option<String>,

    /// Date layout, in chrono strftime syntax.
    #[arg(long, value_name = "FORMAT", default_value = DEFAULT_LAYOUT)]
    pub layout: String,

    /// The question of the poll.
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_QUESTION)]
    pub question: String,

    /// Number of hours the poll should be open for, up to 32 days.
    #[arg(long, value_name = "HOURS", default_value_t = 24)]
    pub duration: u32,

    /// Whether a user can select multiple answers.
    #[arg(
        long = "multi-select",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub multi_select: bool,

    /// Message text posted along with the poll.
    #[arg(long, value_name = "TEXT")]
    pub content: Option<String>,

    /// Override the webhook's username.
    #[arg(long, value_name = "NAME")]
    pub username: Option<String>,

    /// Override the webhook's avatar.
    #[arg(long = "avatar-url", value_name = "URL")]
    pub avatar_url: Option<String>,
}

impl Cli {
    /// Take values the config file set, unless the command line set them too.
    fn merge_file(&mut self, matches: &ArgMatches, file: Cli, file_matches: &ArgMatches) {
        let from_file = |id: &str| {
            matches.value_source(id) != Some(ValueSource::CommandLine)
                && file_matches.value_source(id) == Some(ValueSource::CommandLine)
        };

        if from_file("webhook") {
            self.webhook = file.webhook;
        }
        if from_file("layout") {
            self.layout = file.layout;
        }
        if from_file("question") {
            self.question = file.question;
        }
        if from_file("duration") {
            self.duration = file.duration;
        }
        if from_file("multi_select") {
            self.multi_select = file.multi_select;
        }
        if from_file("content") {
            self.content = file.content;
        }
        if from_file("username") {
            self.username = file.username;
        }
        if from_file("avatar_url") {
            self.avatar_url = file.avatar_url;
        }
    }
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub webhook: Url,
    pub layout: String,
    pub question: String,
    pub duration: u32,
    pub allow_multiselect: bool,
    pub content: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

impl Config {
    /// Parse flags (the first item is the binary name), load the config
    /// file if one is given, and validate the result.
    pub fn from_args<I, T>(args: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = args.into_iter().enumerate().map(|(i, arg)| {
            let arg: OsString = arg.into();
            match arg.to_str() {
                Some(s) if i > 0 => OsString::from(normalize_flag(s)),
                _ => arg,
            }
        });
        let matches = Cli::command().try_get_matches_from(args)?;
        let mut cli = Cli::from_arg_matches(&matches)?;

        if let Some(path) = cli.config.take() {
            let file_args = read_config_file(&path)?;
            let invalid = |source: clap::Error| ConfigError::InvalidFile {
                path: path.clone(),
                source,
            };
            let file_matches = Cli::command()
                .try_get_matches_from(
                    std::iter::once(OsString::from("when-next"))
                        .chain(file_args.into_iter().map(OsString::from)),
                )
                .map_err(&invalid)?;
            let file_cli = Cli::from_arg_matches(&file_matches).map_err(&invalid)?;
            cli.merge_file(&matches, file_cli, &file_matches);
        }

        Self::try_from(cli)
    }

    /// One-line description for the log, without the webhook secret.
    pub fn summary(&self) -> String {
        format!(
            "host={} layout='{}' question='{}' duration={}h multiselect={}",
            self.webhook.host_str().unwrap_or("-"),
            self.layout,
            self.question,
            self.duration,
            self.allow_multiselect
        )
    }
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> ConfigResult<Self> {
        let raw = cli
            .webhook
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingWebhook)?;
        let webhook = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidWebhook {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(webhook.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidWebhook {
                url: raw,
                reason: "scheme must be http or https".to_string(),
            });
        }

        if !(1..=MAX_DURATION_HOURS).contains(&cli.duration) {
            return Err(ConfigError::DurationOutOfRange {
                got: cli.duration,
                max: MAX_DURATION_HOURS,
            });
        }

        if try_format_date(NaiveDate::default(), &cli.layout).is_none() {
            return Err(ConfigError::InvalidLayout(cli.layout));
        }

        Ok(Self {
            webhook,
            layout: cli.layout,
            question: cli.question,
            duration: cli.duration,
            allow_multiselect: cli.multi_select,
            content: cli.content,
            username: cli.username,
            avatar_url: cli.avatar_url,
        })
    }
}

fn read_config_file(path: &Path) -> ConfigResult<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    config_file_args(path, &contents)
}

/// Split config file contents into arguments.
fn config_file_args(path: &Path, contents: &str) -> ConfigResult<Vec<String>> {
    let mut args = vec![];

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // `--flag=value with spaces` stays one argument
        let (first, value) = match line.split_once(char::is_whitespace) {
            Some((flag, value)) if flag.starts_with('-') && !flag.contains('=') => {
                (flag, Some(value.trim()))
            }
            _ => (line, None),
        };

        let first = normalize_flag(first);
        if first.starts_with("--config") {
            return Err(ConfigError::NestedConfig(path.to_path_buf()));
        }

        args.push(first);
        if let Some(value) = value {
            args.push(value.to_string());
        }
    }

    Ok(args)
}

/// `-webhook` → `--webhook`; short flags, negative numbers and values are
/// left alone.
fn normalize_flag(arg: &str) -> String {
    let long_name = arg
        .strip_prefix('-')
        .filter(|rest| !rest.starts_with('-') && rest.len() > 1)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic());
    if long_name {
        format!("-{}", arg)
    } else {
        arg.to_string()
    }
}
