use crate::libs::feed_optimizer::knapsack;
use crate::libs::feed_optimizer::solution::Solution;
use crate::libs::feed_optimizer::story::Story;
use crate::libs::feed_optimizer::story_list::StoryList;

/// Incremental engine behind the feed optimizer's event loop.
///
/// Between events it keeps the live [`StoryList`] and the current best
/// subset. A `store` that trivially extends the best (it still fits under
/// the page height) is folded in for free; anything else sets `recompute`,
/// deferring the real knapsack solve to the next `reload`. This stream has no
/// look-ahead (events arrive one at a time off a `BufRead`), so the spec's
/// "peek at the next event" shortcut is unavailable and `recompute` is set
/// unconditionally whenever a store doesn't trivially extend the best.
pub struct FeedEngine {
    window: i64,
    capacity: u32,
    stories: StoryList,
    best: Solution,
    recompute: bool,
}

impl FeedEngine {
    pub fn new(window: i64, capacity: u32) -> Self {
        Self { window, capacity, stories: StoryList::new(), best: Solution::empty(), recompute: false }
    }

    /// Handles an `S t s h` event. Stories taller than the page are dropped
    /// on arrival; they can never contribute to any future subset.
    pub fn store(&mut self, id: u32, t: i64, score: u32, height: u32) {
        if height > self.capacity {
            return;
        }
        let story = Story::new(id, t, score, height);
        self.stories.insert(story);

        if self.best.height + height <= self.capacity {
            self.best.score += score as u64;
            self.best.height += height;
            self.best.size += 1;
            let pos = self.best.ids.partition_point(|&x| x < id);
            self.best.ids.insert(pos, id);
        } else {
            self.recompute = true;
        }
    }

    /// Handles an `R t` event: purges stories older than `t - window`,
    /// refreshes the best subset if needed, and returns the output line.
    pub fn reload(&mut self, t: i64) -> String {
        let min_time = t - self.window;
        let expired = self.stories.purge_expired(min_time);
        for story in &expired {
            if let Ok(pos) = self.best.ids.binary_search(&story.id) {
                self.best.ids.remove(pos);
                self.best.score -= story.score as u64;
                self.best.height -= story.height;
                self.best.size -= 1;
                self.recompute = true;
            }
        }

        if self.recompute {
            self.best = knapsack::solve(self.stories.as_slice(), self.capacity, self.best.score);
            self.recompute = false;
        }

        self.best.to_line()
    }
}
