//! Lazy record sequence over a paginated endpoint
//!
//! The sequence holds exactly one page. Items are handed out one at a time;
//! the next page is requested only when the current one runs dry and the
//! count reported by the first page says more records are owed.

use super::types::PageToken;
use crate::client::ResourceClient;
use crate::error::{Error, Result};
use crate::record::{decode_checked, Record, RecordDecoder};
use crate::types::{JsonValue, ResourceKind};
use futures::stream::{self, Stream};
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, trace};

/// Stream of records produced by [`PaginatedSequence::into_stream`]
pub type RecordStream = Pin<Box<dyn Stream<Item = Result<Record>> + Send>>;

/// Pull-based cursor over every record of one kind
///
/// Created by [`PaginatedSequence::open`], which fetches the first page to
/// learn the total count. Each call to [`advance`](Self::advance) yields one
/// record and performs at most one page fetch. Once `count` records have
/// been yielded the sequence is terminal and keeps returning `None`.
///
/// After any error the sequence should be discarded.
pub struct PaginatedSequence {
    kind: ResourceKind,
    client: Arc<dyn ResourceClient>,
    decoder: RecordDecoder,
    /// Total captured from the first page
    count: u64,
    /// Unconsumed items of the current page
    items: std::vec::IntoIter<JsonValue>,
    /// `next` link of the current page
    next: Option<String>,
    yielded: u64,
    pages_fetched: usize,
}

impl PaginatedSequence {
    /// Fetch the first page of `kind` and position before its first item
    pub async fn open(
        kind: ResourceKind,
        client: Arc<dyn ResourceClient>,
        decoder: RecordDecoder,
    ) -> Result<Self> {
        let token = PageToken::first();
        let page = client.fetch_page(kind, &token).await?;
        debug!(
            kind = %kind,
            count = page.count,
            items = page.results.len(),
            "Fetched first page"
        );

        let mut sequence = Self {
            kind,
            client,
            decoder,
            count: page.count,
            items: page.results.into_iter(),
            next: page.next,
            yielded: 0,
            pages_fetched: 1,
        };
        if sequence.is_exhausted() {
            sequence.release_page();
        }
        Ok(sequence)
    }

    /// Yield the next record, or `None` once all `count` records were yielded
    pub async fn advance(&mut self) -> Result<Option<Record>> {
        if self.is_exhausted() {
            return Ok(None);
        }

        let raw = match self.items.next() {
            Some(raw) => raw,
            None => self.turn_page().await?,
        };
        let record = decode_checked(self.kind, self.decoder, raw)?;
        self.yielded += 1;
        trace!(kind = %self.kind, yielded = self.yielded, record = %record, "Yielded record");

        if self.is_exhausted() {
            debug!(kind = %self.kind, pages = self.pages_fetched, "Sequence exhausted");
            self.release_page();
        }
        Ok(Some(record))
    }

    /// Replace the current page with the one its `next` link points at and
    /// return that page's first item
    async fn turn_page(&mut self) -> Result<JsonValue> {
        let link = self.next.take().ok_or_else(|| {
            Error::protocol(format!(
                "{} of {} {} records yielded but the server provided no next-page token",
                self.yielded, self.count, self.kind
            ))
        })?;
        let token = PageToken::from_next_link(&link)?;

        let page = self.client.fetch_page(self.kind, &token).await?;
        self.pages_fetched += 1;
        debug!(
            kind = %self.kind,
            page = %token,
            items = page.results.len(),
            "Fetched page"
        );

        self.next = page.next;
        self.items = page.results.into_iter();
        self.items.next().ok_or_else(|| {
            Error::protocol(format!(
                "Page {token} of {} is empty but {} more records are owed",
                self.kind.endpoint(),
                self.count - self.yielded
            ))
        })
    }

    fn release_page(&mut self) {
        self.items = Vec::new().into_iter();
        self.next = None;
    }

    /// Total number of records, as reported by the first page
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Kind this sequence walks
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Records yielded so far
    pub fn yielded(&self) -> u64 {
        self.yielded
    }

    /// Pages fetched so far, including the first
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Whether every record has been yielded
    pub fn is_exhausted(&self) -> bool {
        self.yielded >= self.count
    }

    /// Turn the sequence into a `Stream`
    ///
    /// The stream ends after the last record, or right after the first error.
    pub fn into_stream(self) -> RecordStream {
        Box::pin(stream::try_unfold(self, |mut sequence| async move {
            let next = sequence.advance().await?;
            Ok::<_, Error>(next.map(|record| (record, sequence)))
        }))
    }
}

impl fmt::Display for PaginatedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let endpoint = self.kind.endpoint();
        let mut chars = endpoint.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        write!(f, "Sequence: {} objects", self.count)
    }
}

impl fmt::Debug for PaginatedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginatedSequence")
            .field("kind", &self.kind)
            .field("count", &self.count)
            .field("yielded", &self.yielded)
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}
