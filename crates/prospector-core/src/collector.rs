//! Run-wide accumulation of [`Person`] rows, deduplicated by profile URL.

use std::collections::HashSet;

use crate::name_title::split_name_title;
use crate::person::{Person, ProfileHit};
use crate::query::SearchQuery;

/// Accumulates people across every query of a run.
///
/// The first hit for a URL wins; later hits for the same URL are counted in
/// [`ProfileCollector::duplicates`] and dropped.
#[derive(Debug, Default)]
pub struct ProfileCollector {
    seen: HashSet<String>,
    people: Vec<Person>,
    duplicates: usize,
}

impl ProfileCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the hits returned for `query`, returning how many new people were kept.
    pub fn absorb<I>(&mut self, query: &SearchQuery, hits: I) -> usize
    where
        I: IntoIterator<Item = ProfileHit>,
    {
        let mut added = 0;
        for hit in hits {
            if !self.seen.insert(hit.url.clone()) {
                self.duplicates += 1;
                tracing::debug!(url = %hit.url, "skipping duplicate profile");
                continue;
            }
            let (name, title) = split_name_title(&hit.title);
            self.people.push(Person {
                name,
                title,
                company_filter: query.company.clone(),
                role_filter: query.role.clone(),
                profile_url: hit.url,
            });
            added += 1;
        }
        added
    }

    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// People in first-seen order.
    #[must_use]
    pub fn into_people(self) -> Vec<Person> {
        self.people
    }
}
