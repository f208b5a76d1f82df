//! Review counts and tag frequency for a center.

use serde::Serialize;

/// The facts about one review the summary needs.
#[derive(Debug, Clone)]
pub struct ReviewRecord {
    pub tags: Vec<String>,
    pub answered: bool,
}

/// Frequency of one tag across all of a center's reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

/// Derived review metrics for a center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewsSummary {
    pub count_total: u64,
    pub count_answered: u64,
    pub count_not_answered: u64,
    /// Multiset tag counts, descending by count; ties keep first-seen order.
    pub tag_frequency: Vec<TagCount>,
}

/// Computes the reviews summary.
pub fn summarize_reviews(reviews: &[ReviewRecord]) -> ReviewsSummary {
    let count_total = reviews.len() as u64;
    let count_answered = reviews.iter().filter(|r| r.answered).count() as u64;

    // Vec keeps first-seen order so ties sort stably below.
    let mut tag_frequency: Vec<TagCount> = Vec::new();
    for review in reviews {
        for tag in &review.tags {
            match tag_frequency.iter_mut().find(|t| &t.tag == tag) {
                Some(entry) => entry.count += 1,
                None => tag_frequency.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                }),
            }
        }
    }
    tag_frequency.sort_by(|a, b| b.count.cmp(&a.count));

    ReviewsSummary {
        count_total,
        count_answered,
        count_not_answered: count_total - count_answered,
        tag_frequency,
    }
}
