use indexmap::IndexMap;

use crate::libs::nearby::sstree::{NodeId, SsTree};
use crate::libs::nearby::topic::Question;
use crate::libs::nearby::topk::TopK;

/// Finds the k topics nearest to `(x, y)`.
///
/// Descends the tree depth-first, always visiting the more promising of two
/// sibling subtrees first (smaller lower-bound distance), and prunes a
/// subtree as soon as its lower bound exceeds the current k-th distance
/// (plus tolerance). The stack holds `(lower_bound, node)` pairs so the
/// best candidate is always examined next.
pub fn nearest_topics(tree: &SsTree, x: f64, y: f64, k: usize) -> Vec<u32> {
    let mut top = TopK::new(k);
    let mut stack: Vec<(f64, NodeId)> = vec![(tree.lower_bound(tree.root(), x, y), tree.root())];

    while let Some(pos) = best_index(&stack) {
        let (lb, node) = stack.swap_remove(pos);
        if lb > top.kth_distance() + crate::libs::nearby::topk::TOLERANCE {
            continue;
        }
        match tree.points(node) {
            Some(points) => {
                for p in points {
                    top.consider(p.distance(x, y), p.id);
                }
            }
            None => {
                for &child in tree.children(node).unwrap() {
                    stack.push((tree.lower_bound(child, x, y), child));
                }
            }
        }
    }

    top.finish()
}

fn best_index(stack: &[(f64, NodeId)]) -> Option<usize> {
    stack
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.0.partial_cmp(&b.0).unwrap())
        .map(|(i, _)| i)
}

/// Finds the k questions whose minimum distance to `(x, y)` (over their
/// relevant topics) is smallest. A question with no relevant topics never
/// appears. Rather than building a second spatial index over questions,
/// this collects every topic's distance once (the tree already holds them
/// all, so there's no pruning benefit to gain here) and, for each question,
/// takes the minimum over its relevant topics via a reverse topic-to-question
/// map built once by the caller.
pub fn nearest_questions(
    tree: &SsTree,
    topic_to_questions: &IndexMap<u32, Vec<u32>>,
    questions: &[Question],
    x: f64,
    y: f64,
    k: usize,
) -> Vec<u32> {
    let mut distances: IndexMap<u32, f64> = IndexMap::new();
    collect_topic_distances(tree, tree.root(), x, y, &mut distances);

    let mut best: IndexMap<u32, f64> = IndexMap::new();
    for (&topic_id, &dist) in &distances {
        if let Some(qids) = topic_to_questions.get(&topic_id) {
            for &qid in qids {
                let entry = best.entry(qid).or_insert(f64::INFINITY);
                if dist < *entry {
                    *entry = dist;
                }
            }
        }
    }

    let mut top = TopK::new(k);
    for q in questions {
        if q.relevant_topics.is_empty() {
            continue;
        }
        if let Some(&d) = best.get(&q.id) {
            top.consider(d, q.id);
        }
    }
    top.finish()
}

fn collect_topic_distances(tree: &SsTree, node: NodeId, x: f64, y: f64, out: &mut IndexMap<u32, f64>) {
    match tree.points(node) {
        Some(points) => {
            for p in points {
                out.insert(p.id, p.distance(x, y));
            }
        }
        None => {
            for &child in tree.children(node).unwrap() {
                collect_topic_distances(tree, child, x, y, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::nearby::topic::Topic;

    fn tree_of(points: &[(u32, f64, f64)]) -> SsTree {
        let mut tree = SsTree::new();
        for &(id, x, y) in points {
            tree.insert(Topic::new(id, x, y));
        }
        tree
    }

    #[test]
    fn nearest_topics_orders_by_distance() {
        let tree = tree_of(&[(1, 0.0, 0.0), (2, 10.0, 0.0), (3, 1.0, 0.0)]);
        assert_eq!(nearest_topics(&tree, 0.0, 0.0, 2), vec![1, 3]);
    }

    #[test]
    fn nearest_topics_respects_k() {
        let tree = tree_of(&[(1, 0.0, 0.0), (2, 1.0, 0.0), (3, 2.0, 0.0)]);
        assert_eq!(nearest_topics(&tree, 0.0, 0.0, 1), vec![1]);
    }

    #[test]
    fn nearest_questions_uses_minimum_distance_over_relevant_topics() {
        let tree = tree_of(&[(1, 0.0, 0.0), (2, 10.0, 0.0)]);
        let mut map: IndexMap<u32, Vec<u32>> = IndexMap::new();
        map.insert(1, vec![100]);
        map.insert(2, vec![100]);
        let questions = vec![Question::new(100, vec![1, 2])];
        let result = nearest_questions(&tree, &map, &questions, 0.0, 0.0, 1);
        assert_eq!(result, vec![100]);
    }

    #[test]
    fn question_with_no_relevant_topics_never_appears() {
        let tree = tree_of(&[(1, 0.0, 0.0)]);
        let map: IndexMap<u32, Vec<u32>> = IndexMap::new();
        let questions = vec![Question::new(1, Vec::new())];
        let result = nearest_questions(&tree, &map, &questions, 0.0, 0.0, 5);
        assert!(result.is_empty());
    }
}
