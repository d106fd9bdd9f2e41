pub mod toml_config;

pub use toml_config::ScenarioConfig;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::adapters::OutputFormat;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "uni-registrar")]
    #[command(about = "University registration report generator")]
    pub struct CliConfig {
        /// TOML scenario file; the built-in demo is used when omitted
        #[arg(short, long)]
        pub scenario: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        pub output: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(scenario) = &self.scenario {
                validate_path("scenario", scenario)?;
            }
            if let Some(output) = &self.output {
                validate_path("output", output)?;
            }
            Ok(())
        }
    }

}
