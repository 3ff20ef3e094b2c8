extern crate clap;
use clap::*;

use ladder_cores::libs::io;
use ladder_cores::libs::stepladder;

fn main() -> anyhow::Result<()> {
    let args = Command::new("stepladder")
        .version(crate_version!())
        .author(crate_authors!())
        .about("Branch-and-bound DFS search for the highest-scoring stepladder")
        .arg(
            Arg::new("infile")
                .long("infile")
                .short('f')
                .num_args(1)
                .default_value("stdin")
                .help("Input filename. [stdin] for screen"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
        .get_matches();

    let reader = io::reader(args.get_one::<String>("infile").unwrap());
    let writer = io::writer(args.get_one::<String>("outfile").unwrap());

    stepladder::run(reader, writer)
}
