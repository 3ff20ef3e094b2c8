use crate::libs::feed_optimizer::solution::Solution;
use crate::libs::feed_optimizer::story::Story;

/// Horowitz-Sahni branch-and-bound for the capacity-bounded story selection.
///
/// `stories` must already be sorted by [`Story::scaled_score`] descending (the
/// order [`super::story_list::StoryList`] maintains). `floor` seeds the
/// Dantzig-bound pruning with a score that is already known to be achievable
/// (typically the previous best, decremented for any expired stories); it is
/// only ever used to prune faster, never to fabricate a solution, so passing
/// `0` always returns the same answer a from-scratch solve would.
///
/// The search only prunes a subtree when its upper bound is strictly below
/// the best score found so far; an upper bound that merely ties the current
/// best is still explored. This costs a little pruning opportunity but keeps
/// the search exhaustive over every subset that could match or beat the
/// incumbent, which is what lets an incremental engine's output agree with a
/// from-scratch resolve at every `R`.
pub fn solve(stories: &[Story], capacity: u32, floor: u64) -> Solution {
    let n = stories.len();
    let mut included: Vec<usize> = Vec::new();
    let mut cur_score: u64 = 0;
    let mut cur_height: u32 = 0;
    let mut best: Option<Solution> = None;
    let mut j = 0usize;

    loop {
        while j < n {
            let story = &stories[j];
            if cur_height + story.height <= capacity {
                included.push(j);
                cur_height += story.height;
                cur_score += story.score as u64;
                j += 1;
            } else {
                let threshold = best.as_ref().map_or(floor, |b| b.score);
                let residual = (capacity - cur_height) as f64;
                let ub = cur_score + (story.scaled_score() * residual).floor() as u64;
                if ub < threshold {
                    break;
                }
                j += 1;
            }
        }

        if j == n {
            let mut ids: Vec<u32> = included.iter().map(|&p| stories[p].id).collect();
            ids.sort_unstable();
            let candidate = Solution { score: cur_score, height: cur_height, size: included.len(), ids };
            if best.as_ref().map_or(true, |b| candidate.dominates(b)) {
                best = Some(candidate);
            }
        }

        match included.pop() {
            None => break,
            Some(k) => {
                cur_height -= stories[k].height;
                cur_score -= stories[k].score as u64;
                j = k + 1;
            }
        }
    }

    best.unwrap_or_else(Solution::empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story_list(tuples: &[(u32, i64, u32, u32)]) -> Vec<Story> {
        let mut stories: Vec<Story> =
            tuples.iter().map(|&(id, t, s, h)| Story::new(id, t, s, h)).collect();
        stories.sort_by(|a, b| b.scaled_score().partial_cmp(&a.scaled_score()).unwrap());
        stories
    }

    #[test]
    fn empty_input_yields_empty_solution() {
        let result = solve(&[], 100, 0);
        assert_eq!(result, Solution::empty());
    }

    #[test]
    fn picks_both_when_they_exactly_fill_capacity() {
        let stories = story_list(&[(1, 1, 10, 4), (2, 2, 6, 3)]);
        let result = solve(&stories, 7, 0);
        assert_eq!(result.score, 16);
        assert_eq!(result.size, 2);
        assert_eq!(result.ids, vec![1, 2]);
    }

    #[test]
    fn drops_to_single_best_item_when_both_dont_fit() {
        let stories = story_list(&[(1, 1, 10, 4), (2, 2, 6, 3)]);
        let result = solve(&stories, 6, 0);
        assert_eq!(result.score, 10);
        assert_eq!(result.size, 1);
        assert_eq!(result.ids, vec![1]);
    }

    #[test]
    fn tie_break_prefers_fewer_items_then_smaller_ids() {
        // Two items scoring 5 each (total 10, height 2) tie against one item
        // scoring 10 at height 2: fewer items wins.
        let stories = story_list(&[(1, 1, 5, 1), (2, 1, 5, 1), (3, 1, 10, 2)]);
        let result = solve(&stories, 2, 0);
        assert_eq!(result.score, 10);
        assert_eq!(result.size, 1);
        assert_eq!(result.ids, vec![3]);
    }

    #[test]
    fn floor_hint_does_not_change_the_answer() {
        let stories = story_list(&[(1, 1, 10, 4), (2, 2, 6, 3), (3, 3, 1, 1)]);
        let plain = solve(&stories, 7, 0);
        let seeded = solve(&stories, 7, 10);
        assert_eq!(plain, seeded);
    }
}
