extern crate clap;
use clap::*;

use ladder_cores::libs::feed_optimizer;
use ladder_cores::libs::io;

fn main() -> anyhow::Result<()> {
    let args = Command::new("feed_optimizer")
        .version(crate_version!())
        .author(crate_authors!())
        .about("Incremental knapsack feed optimizer over a stream of S/R events")
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

    feed_optimizer::run(reader, writer)
}
