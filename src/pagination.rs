//! Helpers for paginated listing endpoints.

use crate::errors::{check, CgiError};
use async_stream::try_stream;
use futures::Stream;
use reqwest_middleware::ClientWithMiddleware;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Page size used when draining a paged endpoint client-side.
pub(crate) const DRAIN_PAGE_SIZE: u32 = 100;

/// Empty filter for listings which take none.
pub(crate) const NO_QUERY: [(&str, &str); 0] = [];

/// Query string parameters for paginated GET endpoints.
#[derive(Serialize, Debug, Copy, Clone, Eq, PartialEq)]
pub struct PageQuery {
    pub size: u32,
    pub page: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        PageQuery { size: 10, page: 0 }
    }
}

/// One page of a listing endpoint, with the server-reported pagination
/// metadata. Consecutive pages with a fixed `size` partition the full
/// listing in server order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Zero-based index of this page.
    pub number: u32,
    pub size: u32,
}

impl<T> Page<T> {
    /// Whether the server has no page after this one.
    pub fn is_last(&self) -> bool {
        self.number + 1 >= self.total_pages
    }
}

/// Create a [futures::Stream] that yields every item of a paged endpoint,
/// requesting consecutive pages as needed. Used for listings which have no
/// server-side `/full` counterpart.
pub(crate) fn paginate<'a, Q, R>(
    client: &'a ClientWithMiddleware,
    url: String,
    query: &'a Q,
) -> impl Stream<Item = Result<R, CgiError>> + 'a
where
    Q: Serialize,
    R: DeserializeOwned + 'a,
{
    try_stream! {
        let mut page = 0;
        loop {
            let res = client
                .get(&url)
                .query(query)
                .query(&PageQuery {
                    size: DRAIN_PAGE_SIZE,
                    page,
                })
                .send()
                .await?;
            let parsed: Page<R> = check(res).await?.json().await?;
            let is_last = parsed.is_last();
            for item in parsed.content {
                yield item;
            }
            if is_last {
                break;
            }
            page += 1;
        }
    }
}
