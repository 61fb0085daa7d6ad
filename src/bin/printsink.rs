use std::error::Error;
use std::io;

use printsink::cli::{OutputArg, ValueType, run_lines, unescape};
use printsink::config::SinkConfig;
use sarge::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  printsink [--format <template>] [--output <token>] [--type <str|int|float>] [--append]"
    );
    eprintln!();
    eprintln!("Reads stdin line by line and writes each line through the template.");
    eprintln!("The template defaults to \"{{}}\\n\"; \\n, \\t and \\\\ escapes are understood.");
    eprintln!();
    eprintln!("Output tokens:");
    eprintln!("  - | stdout         Write to stdout");
    eprintln!("  stderr             Write to stderr");
    eprintln!("  <path> | @<path>   Write to a file (overwritten unless --append)");
}

fn init_logging() {
    // RUST_LOG wins; otherwise only warnings reach stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let format_ref = reader.add::<String>(tag::both('f', "format"));
    let output_ref = reader.add::<OutputArg>(tag::both('o', "output"));
    let type_ref = reader.add::<ValueType>(tag::both('t', "type"));
    let append_ref = reader.add::<bool>(tag::both('a', "append"));

    let args = reader.parse()?;

    let template = match format_ref.get(&args) {
        Some(Ok(v)) => unescape(&v),
        Some(Err(_)) => unreachable!("String parsing is infallible"),
        None => "{}\n".to_string(),
    };

    let output = match output_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("OutputArg parsing is infallible"),
        None => OutputArg::default(),
    };

    let ty = match type_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(e)) => return Err(e.into()),
        None => ValueType::default(),
    };

    let append = matches!(append_ref.get(&args), Some(Ok(true)));

    let config = SinkConfig::new(template).with_target(output.to_target(append));
    run_lines(io::stdin().lock(), &config, ty)?;

    Ok(())
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("printsink error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
