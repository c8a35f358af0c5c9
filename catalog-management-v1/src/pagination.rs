//! Client side paging over list endpoints.
//!
//! A list response carries a `next` link. The pager extracts the cursor query
//! parameter from that link (`start` tokens or integer `offset`s) and applies it
//! to the endpoint before requesting the following page.

use crate::{
    models::{
        AccessListResult, AuditLogs, ObjectListResult, ObjectSearchResult, OfferingSearchResult,
    },
    Client, Error,
};
use cloud_api_framework::Endpoint;
use futures::Stream;
use url::Url;

/// Resolves relative `next` links.
const LINK_BASE: &str = "http://localhost/";

/// A single page of a paginated collection.
pub trait Paginated {
    type Item;

    fn items(self) -> Vec<Self::Item>;

    /// The link to the following page, if any.
    fn next_link(&self) -> Option<&str>;
}

/// Query parameter used to request a page.
pub trait PageCursor: Sized {
    const PARAM: &'static str;

    fn parse(value: &str) -> Result<Self, Error>;
}

impl PageCursor for String {
    const PARAM: &'static str = "start";

    fn parse(value: &str) -> Result<Self, Error> {
        Ok(value.to_string())
    }
}

impl PageCursor for i64 {
    const PARAM: &'static str = "offset";

    fn parse(value: &str) -> Result<Self, Error> {
        value.parse().map_err(|_| Error::InvalidCursor {
            param: Self::PARAM,
            value: value.to_string(),
        })
    }
}

/// An endpoint returning one page of a collection.
pub trait PaginatedEndpoint: Endpoint {
    type Cursor: PageCursor;

    fn cursor(&self) -> Option<&Self::Cursor>;

    fn set_cursor(&mut self, cursor: Self::Cursor);
}

/// Returns the first value of the `name` query parameter of `link`.
///
/// Relative links (e.g. `/api/v1-beta/catalogs?start=xyz`) are accepted.
pub fn get_query_param(link: &str, name: &str) -> Result<Option<String>, Error> {
    let url = Url::parse(LINK_BASE)
        .and_then(|base| base.join(link))
        .map_err(|error| Error::InvalidLink {
            link: link.to_string(),
            error,
        })?;
    let value = url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned());
    Ok(value)
}

type PageItem<E> = <<E as Endpoint>::Response as Paginated>::Item;

pub struct Pager<E: PaginatedEndpoint> {
    client: Client,
    endpoint: E,
    next_cursor: Option<E::Cursor>,
    has_next: bool,
    pages: usize,
}

impl<E> Pager<E>
where
    E: PaginatedEndpoint,
    E::Response: Paginated,
{
    /// Fails when `endpoint` already has a cursor set.
    pub fn new(client: Client, endpoint: E) -> Result<Self, Error> {
        if endpoint.cursor().is_some() {
            return Err(cloud_api_framework::Error::InvalidArgument {
                arg: E::Cursor::PARAM.to_string(),
                error: "must not be set on the endpoint passed to a pager".to_string(),
            }
            .into());
        }
        Ok(Self {
            client,
            endpoint,
            next_cursor: None,
            has_next: true,
            pages: 0,
        })
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub async fn next_page(&mut self) -> Result<Vec<PageItem<E>>, Error> {
        if !self.has_next {
            return Err(Error::NoMoreResults);
        }
        if let Some(cursor) = self.next_cursor.take() {
            self.endpoint.set_cursor(cursor);
        }

        let page = self.client.request(&self.endpoint).await?;

        let next_cursor = match page.next_link() {
            Some(link) => get_query_param(link, E::Cursor::PARAM)?
                .map(|value| E::Cursor::parse(&value))
                .transpose()?,
            None => None,
        };
        self.pages += 1;
        self.has_next = next_cursor.is_some();
        self.next_cursor = next_cursor;
        if !self.has_next {
            tracing::info!(pages = self.pages, "pager reached the last page");
        }

        Ok(page.items())
    }

    /// Collects the items of all remaining pages.
    pub async fn all(mut self) -> Result<Vec<PageItem<E>>, Error> {
        let mut items = Vec::new();
        while self.has_next() {
            items.extend(self.next_page().await?);
        }
        Ok(items)
    }

    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<PageItem<E>>, Error>> {
        futures::stream::try_unfold(self, |mut pager| async move {
            if !pager.has_next() {
                return Ok::<_, Error>(None);
            }
            let page = pager.next_page().await?;
            Ok(Some((page, pager)))
        })
    }
}

impl Paginated for AuditLogs {
    type Item = crate::models::AuditLogDigest;

    fn items(self) -> Vec<Self::Item> {
        self.audits
    }

    fn next_link(&self) -> Option<&str> {
        self.next.as_ref().and_then(|link| link.href.as_deref())
    }
}

impl Paginated for AccessListResult {
    type Item = crate::models::Access;

    fn items(self) -> Vec<Self::Item> {
        self.resources
    }

    fn next_link(&self) -> Option<&str> {
        self.next.as_ref().and_then(|link| link.href.as_deref())
    }
}

macro_rules! impl_offset_paginated {
    ($($response:ty => $item:ty),* $(,)?) => {
        $(
            impl Paginated for $response {
                type Item = $item;

                fn items(self) -> Vec<Self::Item> {
                    self.resources
                }

                fn next_link(&self) -> Option<&str> {
                    self.next.as_deref()
                }
            }
        )*
    };
}

impl_offset_paginated!(
    OfferingSearchResult => crate::models::Offering,
    ObjectListResult => crate::models::CatalogObject,
    ObjectSearchResult => crate::models::CatalogObject,
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("https://cm.example.com/api/v1-beta/catalogs?start=abc&limit=10", "start", Some("abc"))]
    #[case("/api/v1-beta/catalogaccount/audits?limit=10&start=tok%3D", "start", Some("tok="))]
    #[case("/offerings?offset=20&offset=40", "offset", Some("20"))]
    #[case("catalogs?limit=10", "start", None)]
    #[case("/catalogs", "start", None)]
    fn query_param_from_link(
        #[case] link: &str,
        #[case] name: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            get_query_param(link, name).unwrap().as_deref(),
            expected
        );
    }

    #[test]
    fn invalid_link_is_an_error() {
        assert!(matches!(
            get_query_param("http://[::1", "start"),
            Err(Error::InvalidLink { .. })
        ));
    }

    #[test]
    fn token_link_without_href_ends_paging() {
        let page: AuditLogs =
            serde_json::from_str(r#"{"next":{"start":"tok"},"audits":null}"#).unwrap();
        assert_eq!(page.next_link(), None);
        assert!(page.items().is_empty());
    }

    #[test]
    fn null_access_resources_are_an_empty_page() {
        let page: AccessListResult = serde_json::from_str(
            r#"{"resources":null,"next":{"href":"/access?start=abc"}}"#,
        )
        .unwrap();
        assert_eq!(page.next_link(), Some("/access?start=abc"));
        assert!(page.items().is_empty());
    }

    #[test]
    fn offset_cursor_must_be_integer() {
        assert_eq!(<i64 as PageCursor>::parse("40").unwrap(), 40);
        assert!(matches!(
            <i64 as PageCursor>::parse("forty"),
            Err(Error::InvalidCursor { param: "offset", .. })
        ));
    }
}
