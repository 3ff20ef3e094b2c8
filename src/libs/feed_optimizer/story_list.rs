use crate::libs::feed_optimizer::story::Story;

/// The live set of stories, always kept in non-increasing [`Story::scaled_score`]
/// order. Ties keep the arrival order of the stories that produced them: a new
/// story is inserted immediately before the first existing story with a
/// strictly smaller scaled score, so two stories that tie never swap places
/// relative to each other once inserted.
#[derive(Debug, Clone, Default)]
pub struct StoryList {
    stories: Vec<Story>,
}

impl StoryList {
    pub fn new() -> Self {
        Self { stories: Vec::new() }
    }

    pub fn as_slice(&self) -> &[Story] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Inserts `story`, preserving the non-increasing scaled-score invariant.
    pub fn insert(&mut self, story: Story) {
        let scaled = story.scaled_score();
        let pos = self
            .stories
            .iter()
            .position(|s| s.scaled_score() < scaled)
            .unwrap_or(self.stories.len());
        self.stories.insert(pos, story);
    }

    /// Removes every story created strictly before `min_time`, returning them.
    /// List order among the survivors is unchanged.
    pub fn purge_expired(&mut self, min_time: i64) -> Vec<Story> {
        let mut expired = Vec::new();
        self.stories.retain(|s| {
            if s.t < min_time {
                expired.push(*s);
                false
            } else {
                true
            }
        });
        expired
    }
}
