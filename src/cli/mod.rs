use clap::Parser;

/// A daily journal with AI reflections
#[derive(Parser, Debug)]
#[clap(name = "solace", about = "A daily journal with AI reflections")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
