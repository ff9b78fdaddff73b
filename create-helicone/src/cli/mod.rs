// CLI argument parsing and definitions

use clap::Parser;
use helicone_templates::DEFAULT_TEMPLATE;

#[derive(Debug, Clone, Parser)]
#[command(name = "create-helicone")]
#[command(about = "Create a new project with Helicone integration")]
#[command(version)]
pub struct Args {
    /// Directory to create the project in (prompts for details when omitted)
    pub project_directory: Option<String>,

    /// Template to use
    #[arg(long, value_name = "NAME", default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Install dependencies after project creation
    #[arg(long)]
    pub install: bool,

    /// Initialize git repository
    #[arg(long)]
    pub git: bool,

    /// List available templates
    #[arg(long)]
    pub list: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,
}
