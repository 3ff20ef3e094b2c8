use crate::libs::stepladder::dictionary::Dictionary;

struct Frame {
    bottom: usize,
    top: usize,
    used: Vec<bool>,
    score: u64,
}

/// Highest-scoring stepladder reachable in `dict`, or `0` for an empty
/// dictionary.
///
/// Explicit stack, not recursion, per this engine's branch-and-bound
/// convention: every popped frame is itself a complete, valid stepladder
/// (a single word is a stepladder of length 1), so `best` is simply the
/// maximum score ever seen across all frames ever visited.
pub fn solve(dict: &Dictionary) -> u32 {
    let n = dict.len();
    if n == 0 {
        return 0;
    }

    let mut best: u64 = 0;

    for start in 0..n {
        let s = dict.scores[start] as u64;
        if s * s <= best {
            continue;
        }

        let mut used = vec![false; n];
        used[start] = true;
        let mut stack = vec![Frame { bottom: start, top: start, used, score: s }];

        while let Some(frame) = stack.pop() {
            if frame.score > best {
                best = frame.score;
            }

            let bottom_candidates: Vec<usize> = dict.adjacency[frame.bottom]
                .iter()
                .copied()
                .filter(|&w| !frame.used[w] && dict.scores[w] < dict.scores[frame.bottom])
                .collect();
            let top_candidates: Vec<usize> = dict.adjacency[frame.top]
                .iter()
                .copied()
                .filter(|&w| !frame.used[w] && dict.scores[w] < dict.scores[frame.top])
                .collect();

            for &wb in &bottom_candidates {
                for &wt in &top_candidates {
                    if wb == wt {
                        continue;
                    }
                    let sb = dict.scores[wb] as u64;
                    let st = dict.scores[wt] as u64;
                    let bound = frame.score + sb * (sb + 1) / 2 + st * (st + 1) / 2;
                    if bound <= best {
                        continue;
                    }
                    let mut used = frame.used.clone();
                    used[wb] = true;
                    used[wt] = true;
                    stack.push(Frame { bottom: wb, top: wt, used, score: frame.score + sb + st });
                }
            }
        }
    }

    best as u32
}
