use std::io::{BufRead, BufReader, BufWriter, Write};

/// Opens `input` for buffered reading, treating the literal `"stdin"` as a
/// request to read from the process's standard input.
///
/// ```
/// use std::io::Write;
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("in.txt");
/// std::fs::File::create(&path).unwrap().write_all(b"hello\n").unwrap();
/// let mut reader = ladder_cores::libs::io::reader(path.to_str().unwrap());
/// let mut line = String::new();
/// std::io::BufRead::read_line(&mut reader, &mut line).unwrap();
/// assert_eq!(line, "hello\n");
/// ```
pub fn reader(input: &str) -> Box<dyn BufRead> {
    if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        match std::fs::File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(why) => {
                eprintln!(
                    "The requested file {} does not exist ({}); reading from stdin instead.",
                    path.display(),
                    why
                );
                Box::new(BufReader::new(std::io::stdin()))
            }
        }
    }
}

/// Opens `output` for buffered writing, treating the literal `"stdout"` as a
/// request to write to the process's standard output.
pub fn writer(output: &str) -> Box<dyn Write> {
    if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        match std::fs::File::create(output) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(why) => {
                eprintln!(
                    "Could not create output file {} ({}); writing to stdout instead.",
                    output, why
                );
                Box::new(BufWriter::new(std::io::stdout()))
            }
        }
    }
}
