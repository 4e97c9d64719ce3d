use clap::Parser;

use bulletlist::{Config, ParseOptions, RenderOptions};

#[derive(Parser)]
#[command(name = "bulletlist")]
#[command(version, about = "Generate a nested ordered list in text")]
#[command(after_help = "SPEC is number:length[:option]*[;children], e.g. '1:3:type=roman;[2:2]'")]
struct Cli {
    /// List specifications, printed one after another
    specs: Vec<String>,

    /// String added to the indent at each nesting level
    #[arg(long)]
    indent: Option<String>,

    /// Reject malformed numbers instead of reading them as 0
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();
    bulletlist::init_logging();

    let config = Config::compiled_default();

    let parse_options = ParseOptions {
        strict: cli.strict,
        ..ParseOptions::from(&config)
    };
    let mut render_options = RenderOptions::from(&config);
    if let Some(indent) = cli.indent {
        render_options.indent = indent;
    }

    let text = match bulletlist::specs_to_text_with_options(
        &cli.specs,
        &parse_options,
        &render_options,
    ) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", text);
}
