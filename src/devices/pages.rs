//! Lazy cursor over the server-paginated list endpoints.
//!
//! A list endpoint answers with a body like
//! `{"channels": [...], "next_page": "https://..."}`. The cursor serves the
//! records of one page in order and only requests the next page once the
//! current one is used up. The sole end-of-list signal is a page without
//! `next_page`; an empty record array with a `next_page` just moves on.

use crate::executor::Request;
use crate::types::{Envelope, Record};
use crate::{Client, Error, Result};
use futures::{Stream, TryStreamExt};
use serde_json::Value;

#[derive(Debug)]
enum Cursor {
    /// Nothing fetched yet; the next fetch hits the listing URL.
    Start,
    /// The last page pointed here.
    Next(String),
    /// The last page had no `next_page` (or was malformed).
    Done,
}

/// Pull-based cursor over every record of a list endpoint.
///
/// Obtained from a list accessor's `iter()`; each call starts over at page one.
pub struct Pages {
    client: Client,
    url: String,
    field: &'static str,
    cursor: Cursor,
    page: std::vec::IntoIter<Record>,
}

impl Pages {
    pub(crate) fn new(client: Client, url: String, field: &'static str) -> Self {
        Self {
            client,
            url,
            field,
            cursor: Cursor::Start,
            page: Vec::new().into_iter(),
        }
    }

    /// Name of the array field holding the records.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// True once the final page has been fetched and fully served.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.cursor, Cursor::Done) && self.page.as_slice().is_empty()
    }

    /// Next record, fetching further pages as needed. `Ok(None)` at the end.
    ///
    /// If the executor fails, the error is returned and the cursor stays put:
    /// calling again re-requests the same page.
    pub async fn next_record(&mut self) -> Result<Option<Record>> {
        loop {
            if let Some(record) = self.page.next() {
                return Ok(Some(record));
            }
            let url = match &self.cursor {
                Cursor::Start => self.url.clone(),
                Cursor::Next(url) => url.clone(),
                Cursor::Done => return Ok(None),
            };
            self.fetch(url).await?;
        }
    }

    async fn fetch(&mut self, url: String) -> Result<()> {
        let envelope = self.client.send_request(Request::get(url.as_str())).await?;
        let (records, next) = match split_page(self.field, envelope) {
            Ok(page) => page,
            Err(err) => {
                self.cursor = Cursor::Done;
                return Err(err);
            }
        };
        tracing::debug!(
            url = %url,
            records = records.len(),
            has_next = next.is_some(),
            "fetched {} page",
            self.field
        );
        self.page = records.into_iter();
        self.cursor = match next {
            Some(next) => Cursor::Next(next),
            None => Cursor::Done,
        };
        Ok(())
    }

    /// Adapt the cursor into a stream of records.
    pub fn into_stream(self) -> impl Stream<Item = Result<Record>> {
        futures::stream::try_unfold(self, |mut pages| async move {
            Ok::<_, Error>(pages.next_record().await?.map(|record| (record, pages)))
        })
    }

    /// Fetch every remaining page and return all records in order.
    pub async fn collect_all(self) -> Result<Vec<Record>> {
        self.into_stream().try_collect().await
    }
}

/// Pull the record array and the continuation URL out of one page.
fn split_page(field: &str, envelope: Envelope) -> Result<(Vec<Record>, Option<String>)> {
    let Value::Object(mut body) = envelope.body else {
        return Err(Error::malformed_page(field, "body is not an object"));
    };

    let next = match body.remove("next_page") {
        None | Some(Value::Null) => None,
        Some(Value::String(url)) => Some(url),
        Some(_) => return Err(Error::malformed_page(field, "`next_page` is not a string")),
    };

    let items = match body.remove(field) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(Error::malformed_page(
                field,
                format!("`{field}` is not an array"),
            ))
        }
        None => {
            return Err(Error::malformed_page(
                field,
                format!("missing `{field}` array"),
            ))
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(Error::malformed_page(
                field,
                format!("record {i} is not an object"),
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((records, next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::ReplayExecutor;
    use futures::StreamExt;
    use serde_json::json;
    use std::sync::Arc;

    const LIST_URL: &str = "https://example.test/api/things/";

    fn page(items: Vec<Value>, next: Option<&str>) -> Envelope {
        let mut body = json!({ "things": items });
        if let Some(next) = next {
            body["next_page"] = json!(next);
        }
        Envelope::new(200, body)
    }

    fn item(n: u64) -> Value {
        json!({ "n": n })
    }

    fn setup(pages: Vec<Envelope>) -> (Arc<ReplayExecutor>, Pages) {
        let exec = Arc::new(ReplayExecutor::from_responses(pages));
        let client = Client::new(exec.clone());
        let pages = Pages::new(client, LIST_URL.to_string(), "things");
        (exec, pages)
    }

    #[tokio::test]
    async fn follows_next_page_urls_in_order() {
        let (exec, pages) = setup(vec![
            page(vec![item(1), item(2)], Some("https://example.test/p2")),
            page(vec![item(3)], Some("https://example.test/p3")),
            page(vec![item(4), item(5)], None),
        ]);
        let records = pages.collect_all().await.unwrap();
        let ns: Vec<u64> = records.iter().map(|r| r["n"].as_u64().unwrap()).collect();
        assert_eq!(ns, vec![1, 2, 3, 4, 5]);

        let urls: Vec<String> = exec.requests().await.into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![LIST_URL, "https://example.test/p2", "https://example.test/p3"]
        );
    }

    #[tokio::test]
    async fn empty_page_with_next_is_not_the_end() {
        let (exec, mut pages) = setup(vec![
            page(vec![], Some("https://example.test/p2")),
            page(vec![], Some("https://example.test/p3")),
            page(vec![item(7)], None),
        ]);
        let first = pages.next_record().await.unwrap().unwrap();
        assert_eq!(first["n"], 7);
        assert!(pages.next_record().await.unwrap().is_none());
        assert!(pages.is_exhausted());
        assert_eq!(exec.request_count().await, 3);
    }

    #[tokio::test]
    async fn lazy_until_boundary() {
        let (exec, mut pages) = setup(vec![
            page(vec![item(1), item(2)], Some("https://example.test/p2")),
            page(vec![item(3)], None),
        ]);
        assert_eq!(exec.request_count().await, 0);
        pages.next_record().await.unwrap();
        pages.next_record().await.unwrap();
        assert_eq!(exec.request_count().await, 1);
        assert!(!pages.is_exhausted());
        pages.next_record().await.unwrap();
        assert_eq!(exec.request_count().await, 2);
        assert!(pages.is_exhausted());
    }

    #[tokio::test]
    async fn null_next_page_ends_iteration() {
        let (exec, pages) = setup(vec![Envelope::new(
            200,
            json!({"things": [{"n": 1}], "next_page": null}),
        )]);
        assert_eq!(pages.collect_all().await.unwrap().len(), 1);
        assert_eq!(exec.request_count().await, 1);
    }

    #[tokio::test]
    async fn missing_array_is_malformed() {
        let (exec, mut pages) = setup(vec![
            Envelope::new(200, json!({"next_page": "https://example.test/p2"})),
            page(vec![item(1)], None),
        ]);
        let err = pages.next_record().await.unwrap_err();
        assert!(matches!(err, Error::MalformedPage { ref field, .. } if field == "things"));
        assert!(pages.next_record().await.unwrap().is_none());
        assert_eq!(exec.request_count().await, 1);
    }

    #[tokio::test]
    async fn non_object_record_is_malformed() {
        let (_exec, pages) = setup(vec![Envelope::new(200, json!({"things": [{"n": 1}, 2]}))]);
        let err = pages.collect_all().await.unwrap_err();
        assert_eq!(err.to_string(), "malformed things page: record 1 is not an object");
    }

    #[tokio::test]
    async fn transport_failure_keeps_cursor() {
        let exec = Arc::new(ReplayExecutor::new());
        exec.push(page(vec![item(1)], Some("https://example.test/p2"))).await;
        exec.push_failure("connection reset").await;
        exec.push(page(vec![item(2)], None)).await;
        let client = Client::new(exec.clone());
        let mut pages = Pages::new(client, LIST_URL.to_string(), "things");

        assert_eq!(pages.next_record().await.unwrap().unwrap()["n"], 1);
        assert!(matches!(
            pages.next_record().await,
            Err(Error::Transport(_))
        ));
        assert_eq!(pages.next_record().await.unwrap().unwrap()["n"], 2);

        let urls: Vec<String> = exec.requests().await.into_iter().map(|r| r.url).collect();
        assert_eq!(urls[1], urls[2]);
    }

    #[tokio::test]
    async fn stream_can_stop_early() {
        let (exec, pages) = setup(vec![
            page(vec![item(1), item(2)], Some("https://example.test/p2")),
            page(vec![item(3)], None),
        ]);
        let first_two: Vec<_> = pages.into_stream().take(2).collect().await;
        assert_eq!(first_two.len(), 2);
        assert_eq!(exec.request_count().await, 1);
    }
}
