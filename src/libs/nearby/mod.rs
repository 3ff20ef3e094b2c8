pub mod query;
pub mod sstree;
pub mod topic;
pub mod topk;

use std::io::{BufRead, Write};

use indexmap::IndexMap;

use sstree::SsTree;
use topic::{Question, Topic};

/// Reads a `T Q N` header, `T` topics, `Q` questions and `N` queries from
/// `reader`, writing one answer line per query to `writer`.
pub fn run<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> anyhow::Result<()> {
    let mut header = String::new();
    reader.read_line(&mut header)?;
    let mut fields = header.split_whitespace();
    let t: usize = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("missing topic count T on the header line"))?
        .parse()?;
    let q: usize = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("missing question count Q on the header line"))?
        .parse()?;
    let n: usize = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("missing query count N on the header line"))?
        .parse()?;

    let mut tree = SsTree::new();
    for _ in 0..t {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            anyhow::bail!("topic stream truncated before {} topics were read", t);
        }
        let mut parts = line.split_whitespace();
        let id: u32 = parts.next().ok_or_else(|| anyhow::anyhow!("malformed topic line"))?.parse()?;
        let x: f64 = parts.next().ok_or_else(|| anyhow::anyhow!("malformed topic line"))?.parse()?;
        let y: f64 = parts.next().ok_or_else(|| anyhow::anyhow!("malformed topic line"))?.parse()?;
        tree.insert(Topic::new(id, x, y));
    }

    let mut questions = Vec::with_capacity(q);
    let mut topic_to_questions: IndexMap<u32, Vec<u32>> = IndexMap::new();
    for _ in 0..q {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            anyhow::bail!("question stream truncated before {} questions were read", q);
        }
        let mut parts = line.split_whitespace();
        let id: u32 = parts.next().ok_or_else(|| anyhow::anyhow!("malformed question line"))?.parse()?;
        let qn: usize = parts.next().ok_or_else(|| anyhow::anyhow!("malformed question line"))?.parse()?;
        let mut relevant_topics = Vec::with_capacity(qn);
        for _ in 0..qn {
            let topic_id: u32 = parts
                .next()
                .ok_or_else(|| anyhow::anyhow!("question {} is missing a relevant topic id", id))?
                .parse()?;
            relevant_topics.push(topic_id);
            topic_to_questions.entry(topic_id).or_default().push(id);
        }
        questions.push(Question::new(id, relevant_topics));
    }

    for _ in 0..n {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            anyhow::bail!("query stream truncated before {} queries were read", n);
        }
        let mut parts = line.split_whitespace();
        let kind = parts.next().ok_or_else(|| anyhow::anyhow!("malformed query line"))?;
        let k: usize = parts.next().ok_or_else(|| anyhow::anyhow!("malformed query line"))?.parse()?;
        let x: f64 = parts.next().ok_or_else(|| anyhow::anyhow!("malformed query line"))?.parse()?;
        let y: f64 = parts.next().ok_or_else(|| anyhow::anyhow!("malformed query line"))?.parse()?;

        let ids = match kind.to_ascii_lowercase().as_str() {
            "t" => query::nearest_topics(&tree, x, y, k),
            "q" => query::nearest_questions(&tree, &topic_to_questions, &questions, x, y, k),
            other => anyhow::bail!("unrecognized query type {:?}", other),
        };

        let line = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" ");
        writeln!(writer, "{}", line)?;
    }

    Ok(())
}
