//! Common functionality shared by the command layers

use clap::Args;

/// Logging and terminal output arguments
#[derive(Args, Debug, Clone, Default)]
pub struct LoggingArgs {
    /// Show debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors; hides progress and status lines
    #[arg(short, long)]
    pub quiet: bool,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::PomGraphError>;
}

/// Trait for configurations that can be created from the parsed CLI
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Cli) -> Result<Self, crate::error::PomGraphError>;
}

/// Macro to implement `TryFrom<Cli>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Cli> for $config {
            type Error = $crate::error::PomGraphError;

            fn try_from(command: $crate::cli::Cli) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
