use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args)]
pub struct GlobalArgs {
    /// Extra alphabet registry (TOML) merged over the built-in and user ones
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Log configuration details to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true, default_value = "104857600")]
    pub max_size: usize,

    /// Process inputs exceeding --max-size
    #[arg(long, global = true)]
    pub force: bool,
}
