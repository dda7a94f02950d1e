use clap::{crate_description, crate_name, crate_version, App, Arg, ArgMatches};
use log::LevelFilter;
use ppk_convert::putty::PrivateLinesPolicy;
use ppk_convert::ConvertOptions;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "frontend/sftp.ppk";
pub const DEFAULT_OUTPUT: &str = "frontend/id_rsa_converted";

pub const ARG_INPUT: &str = "input";
pub const ARG_OUTPUT: &str = "output";
pub const ARG_AUTO_PRIVATE_LINES: &str = "auto-private-lines";
pub const ARG_STRICT_KEY_TYPE: &str = "strict-key-type";

pub const ARG_LOGGING: &str = "logging";
pub const ARG_LOGGING_TRACE: &str = "trace";
pub const ARG_LOGGING_DEBUG: &str = "debug";
pub const ARG_LOGGING_INFO: &str = "info";
pub const ARG_LOGGING_WARN: &str = "warn";
pub const ARG_LOGGING_ERROR: &str = "error";

/// Settings for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: ConvertOptions,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches<'_>) -> Self {
        let private_lines = if matches.is_present(ARG_AUTO_PRIVATE_LINES) {
            PrivateLinesPolicy::FromMarker
        } else {
            PrivateLinesPolicy::default()
        };

        let log_level = match matches.value_of(ARG_LOGGING) {
            Some(ARG_LOGGING_TRACE) => LevelFilter::Trace,
            Some(ARG_LOGGING_DEBUG) => LevelFilter::Debug,
            Some(ARG_LOGGING_INFO) => LevelFilter::Info,
            Some(ARG_LOGGING_WARN) => LevelFilter::Warn,
            Some(ARG_LOGGING_ERROR) => LevelFilter::Error,
            _ => LevelFilter::Off,
        };

        Self {
            input: PathBuf::from(matches.value_of(ARG_INPUT).unwrap_or(DEFAULT_INPUT)),
            output: PathBuf::from(matches.value_of(ARG_OUTPUT).unwrap_or(DEFAULT_OUTPUT)),
            options: ConvertOptions {
                private_lines,
                validate_key_type: matches.is_present(ARG_STRICT_KEY_TYPE),
            },
            log_level,
        }
    }
}

pub fn app() -> App<'static, 'static> {
    App::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name(ARG_INPUT)
                .short("i")
                .long(ARG_INPUT)
                .value_name("PPK")
                .help("Path to the PuTTY private key to convert")
                .takes_value(true)
                .default_value(DEFAULT_INPUT)
                .display_order(0),
        )
        .arg(
            Arg::with_name(ARG_OUTPUT)
                .short("o")
                .long(ARG_OUTPUT)
                .value_name("FILE")
                .help("Path where to save the converted key")
                .takes_value(true)
                .default_value(DEFAULT_OUTPUT)
                .display_order(1),
        )
        .arg(
            Arg::with_name(ARG_AUTO_PRIVATE_LINES)
                .long(ARG_AUTO_PRIVATE_LINES)
                .help("Read as many private key lines as the `Private-Lines` marker declares instead of exactly 14")
                .display_order(2),
        )
        .arg(
            Arg::with_name(ARG_STRICT_KEY_TYPE)
                .long(ARG_STRICT_KEY_TYPE)
                .help("Fail unless the private key section names `ssh-rsa`")
                .display_order(3),
        )
        .arg(
            Arg::with_name(ARG_LOGGING)
                .short("l")
                .long(ARG_LOGGING)
                .value_name("LOG_LEVEL")
                .help("Turn on logging to stderr with provided level")
                .takes_value(true)
                .possible_values(&[
                    ARG_LOGGING_TRACE,
                    ARG_LOGGING_DEBUG,
                    ARG_LOGGING_INFO,
                    ARG_LOGGING_WARN,
                    ARG_LOGGING_ERROR,
                ])
                .display_order(4),
        )
}

pub fn config() -> Config {
    Config::from_matches(&app().get_matches())
}
