use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "forradskollen")]
#[command(about = "Checks stockholmshem.se for available storage units")]
pub struct CliArgs {
    /// Request timeout in milliseconds
    #[arg(long, default_value_t = crate::config::DEFAULT_TIMEOUT_MILLIS)]
    pub timeout_millis: u64,

    /// Override the login endpoint (mainly for testing against a mock site)
    #[arg(long)]
    pub login_url: Option<String>,

    /// Override the widgets endpoint
    #[arg(long)]
    pub widgets_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// Overlay the command-line overrides onto an env-sourced config.
    pub fn apply(&self, config: &mut crate::config::Config) {
        config.timeout_millis = self.timeout_millis;
        if let Some(url) = &self.login_url {
            config.login_url = url.clone();
        }
        if let Some(url) = &self.widgets_url {
            config.widgets_url = url.clone();
        }
    }
}
