pub mod dictionary;
pub mod solver;

use std::io::{BufRead, Write};

use dictionary::Dictionary;

/// Reads a word length `K`, a word count `N` and `N` candidate words from
/// `reader`, writing the single best stepladder score to `writer`.
pub fn run<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> anyhow::Result<()> {
    let mut k_line = String::new();
    reader.read_line(&mut k_line)?;
    let k: usize = k_line
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("missing or malformed word length K on the first line"))?;

    let mut n_line = String::new();
    reader.read_line(&mut n_line)?;
    let n: usize = n_line
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("missing or malformed word count N on the second line"))?;

    let mut words = Vec::with_capacity(n);
    for _ in 0..n {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            anyhow::bail!("word stream truncated before {} words were read", n);
        }
        words.push(line.trim().to_string());
    }

    let dict = Dictionary::build(&words, k);
    writeln!(writer, "{}", solver::solve(&dict))?;
    Ok(())
}
