use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{Level, debug};

use bin2cpp::{DEFAULT_LINE_LENGTH, EncodingConfig, STDOUT_TOKEN, make_identifier};

#[derive(Parser)]
#[command(name = "bin2cpp")]
#[command(version, about = "Embed a binary file in C/C++ source as a string literal", long_about = None)]
struct Cli {
    /// Input file, or "stdin"
    #[arg(value_name = "INFILE")]
    input: String,

    /// Output file, or "stdout"
    #[arg(value_name = "OUTFILE", default_value = STDOUT_TOKEN)]
    output: String,

    /// Output mutable variables instead of consts
    #[arg(long)]
    no_const: bool,

    /// Unconditionally escape every character
    #[arg(long)]
    always_escape: bool,

    /// Specify how long a line should be
    #[arg(
        short,
        long,
        value_name = "LENGTH",
        default_value_t = DEFAULT_LINE_LENGTH,
        value_parser = parse_line_length,
    )]
    line_length: usize,

    /// Overwrite the identifier instead of using the file name
    #[arg(short, long, value_name = "IDENT")]
    ident: Option<String>,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_line_length(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("line length must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            // Nothing useful to do if the terminal is gone
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logging(cli.verbose);

    let ident = make_identifier(cli.ident.as_deref().unwrap_or(&cli.input));
    let mut config = EncodingConfig::new(ident).line_length(cli.line_length);
    if cli.no_const {
        config = config.no_const();
    }
    if cli.always_escape {
        config = config.always_escape();
    }
    debug!(?config, "resolved configuration");

    match bin2cpp::convert(&cli.input, &cli.output, &config) {
        Ok(size) => {
            if cli.verbose {
                eprintln!("> Embedded {} bytes as {}", size, config.identifier());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
