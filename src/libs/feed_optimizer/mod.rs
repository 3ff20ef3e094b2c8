pub mod engine;
pub mod knapsack;
pub mod solution;
pub mod story;
pub mod story_list;

use std::io::{BufRead, Write};

pub use engine::FeedEngine;

/// Reads an `N W H` header followed by `N` `S`/`R` events from `reader`,
/// writing one output line per `R` event to `writer`.
pub fn run<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> anyhow::Result<()> {
    let mut header = String::new();
    reader.read_line(&mut header)?;
    let mut fields = header.split_whitespace();
    let n: usize = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("missing event count N on the header line"))?
        .parse()?;
    let window: i64 = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("missing window W on the header line"))?
        .parse()?;
    let capacity: u32 = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("missing page height H on the header line"))?
        .parse()?;

    let mut engine = FeedEngine::new(window, capacity);
    let mut next_id: u32 = 1;

    for _ in 0..n {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            anyhow::bail!("event stream truncated before {} events were read", n);
        }
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("S") => {
                let t: i64 = parts.next().ok_or_else(|| anyhow::anyhow!("malformed S event"))?.parse()?;
                let score: u32 = parts.next().ok_or_else(|| anyhow::anyhow!("malformed S event"))?.parse()?;
                let height: u32 = parts.next().ok_or_else(|| anyhow::anyhow!("malformed S event"))?.parse()?;
                engine.store(next_id, t, score, height);
                next_id += 1;
            }
            Some("R") => {
                let t: i64 = parts.next().ok_or_else(|| anyhow::anyhow!("malformed R event"))?.parse()?;
                writeln!(writer, "{}", engine.reload(t))?;
            }
            other => anyhow::bail!("unrecognized event type {:?}", other),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_reproduces_scenario_1() {
        let input = "4 3 100\nS 1 60 10\nS 2 100 20\nR 2\nR 10\n";
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "160 2 1 2\n0 0\n");
    }
}
