use bepviet_shared::recipe::Tag;
use time::{Duration, OffsetDateTime};

use crate::Catalog;

/// Tag catalog snapshot reused across requests until it is older than `ttl`.
#[derive(Clone, Debug)]
pub struct TagCache {
    tags: Vec<Tag>,
    fetched_at: Option<OffsetDateTime>,
    ttl: Duration,
}

impl TagCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            tags: vec![],
            fetched_at: None,
            ttl,
        }
    }

    pub fn is_fresh(&self, now: OffsetDateTime) -> bool {
        self.fetched_at
            .is_some_and(|fetched_at| now - fetched_at < self.ttl)
    }

    pub fn store(&mut self, tags: Vec<Tag>, now: OffsetDateTime) {
        self.tags = tags;
        self.fetched_at = Some(now);
    }

    pub fn invalidate(&mut self) {
        self.fetched_at = None;
    }

    pub async fn get_or_refresh<C: Catalog + ?Sized>(
        &mut self,
        catalog: &C,
        now: OffsetDateTime,
    ) -> anyhow::Result<Vec<Tag>> {
        if self.is_fresh(now) {
            tracing::debug!(tags = self.tags.len(), "tag cache hit");
            return Ok(self.tags.clone());
        }

        let tags = catalog.list_all_tags().await?;
        tracing::debug!(tags = tags.len(), "tag cache refreshed");
        self.store(tags.clone(), now);

        Ok(tags)
    }
}
