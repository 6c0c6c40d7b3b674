use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "numval")]
#[command(about = "Validate numeric strings: optional minus, digits, optional point, digits")]
pub struct CliConfig {
    /// Inputs to validate; read from --file or stdin when omitted.
    /// Negative numbers are taken as inputs, so put flags before them.
    #[arg(allow_hyphen_values = true)]
    pub inputs: Vec<String>,

    /// Read inputs from a file, one per line
    #[arg(short, long, conflicts_with = "inputs")]
    pub file: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report format: text, json or csv
    #[arg(long, value_parser = ["text", "json", "csv"])]
    pub format: Option<String>,

    /// Message style: standard or form
    #[arg(long, value_parser = ["standard", "form"])]
    pub style: Option<String>,

    /// Write the report to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}
