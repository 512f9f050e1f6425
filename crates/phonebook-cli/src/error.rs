use anyhow::Error;
use phonebook_config::ConfigError;
use phonebook_core::{CoreError, ErrorKind};
use phonebook_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

/// A failed command inside the session. Always recoverable.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command.")]
    UnknownCommand(String),
    #[error("Not enough arguments. Usage: {usage}")]
    NotEnoughArguments { usage: &'static str },
    #[error("Too many arguments. Usage: {usage}")]
    TooManyArguments { usage: &'static str },
    #[error("Invalid number of days: {0}")]
    InvalidDays(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandErrorKind {
    UnknownCommand,
    ArgumentCount,
    Validation,
    NotFound,
    Conflict,
}

impl CommandError {
    pub fn kind(&self) -> CommandErrorKind {
        match self {
            CommandError::UnknownCommand(_) => CommandErrorKind::UnknownCommand,
            CommandError::NotEnoughArguments { .. } | CommandError::TooManyArguments { .. } => {
                CommandErrorKind::ArgumentCount
            }
            CommandError::InvalidDays(_) => CommandErrorKind::Validation,
            CommandError::Core(err) => match err.kind() {
                ErrorKind::Validation => CommandErrorKind::Validation,
                ErrorKind::NotFound => CommandErrorKind::NotFound,
                ErrorKind::Conflict => CommandErrorKind::Conflict,
            },
        }
    }
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return ExitCode::from(store_exit_code(store_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::Json
        | StoreErrorKind::Core
        | StoreErrorKind::InvalidDataPath
        | StoreErrorKind::UnsupportedVersion => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir | ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidWindowDays(_)
        | ConfigError::InvalidDataPath(_)
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
