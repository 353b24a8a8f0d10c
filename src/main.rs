use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use tracing::{error, info, Level};

mod error;
mod files;
mod header;
mod huffman;
mod stream;

use error::Error;
use huffman::Tree;

// options
use clap::Parser;

/// represent all acceptable arguments
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// header file of whitespace separated word and code pairs
    #[clap(parse(from_os_str))]
    header: PathBuf,

    /// file of 0s and 1s to decode, newlines are ignored
    #[clap(parse(from_os_str))]
    code: PathBuf,

    /// directory the input files are read from and the decoded words are written to
    #[clap(short, long, parse(from_os_str), default_value = "input_output")]
    dir: PathBuf,

    /// log more, repeat for even more
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<(), Error> {
    let header_path = args.dir.join(&args.header);
    let code_path = args.dir.join(&args.code);
    let output_path = files::output_path(&args.dir, &args.code);

    files::directory_exists(&args.dir)?;
    files::regular_file_exists_and_is_available(&header_path)?;
    files::regular_file_exists_and_is_available(&code_path)?;
    files::can_open_for_writing(&output_path)?;

    let pairs = header::read_header(&header_path)?;
    let tree = Tree::build(pairs).map_err(Error::InvalidHeader)?;

    let code = File::open(&code_path).map_err(|source| Error::UnableToOpen {
        path: code_path.clone(),
        source,
    })?;
    let output = File::create(&output_path).map_err(|source| Error::UnableToOpenForWriting {
        path: output_path.clone(),
        source,
    })?;
    let mut output = BufWriter::new(output);

    // words decoded before a failure are still flushed to the output file
    let decoded = stream::decode_message(&tree, code, &mut output);
    output.flush()?;
    let words = decoded?;

    info!(words, output = %output_path.display(), "decoded message");
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(&args) {
        error!("{}", err);
        process::exit(1);
    }
}
