use super::access::{Access, AdminAccess, UserAccess};
use crate::auth::ApiToken;
use crate::errors::{check, CgiError};
use crate::pagination::{paginate, Page, PageQuery};
use crate::types::ApiUrl;
use bytes::Bytes;
use futures::{pin_mut, TryStreamExt};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::marker::PhantomData;

/// Client with ordinary project-member access.
pub type UserClient = CgiClient<UserAccess>;

/// Client asserting the superadmin role, which unlocks the `get_all_*`
/// full listings.
pub type AdminClient = CgiClient<AdminAccess>;

/// CGI-Clinics API client.
///
/// Holds the resolved token in its default headers and no other state;
/// every method is one independent request (uploads are a fixed two-step
/// sequence). Cloning is cheap and calls may be issued concurrently.
#[derive(Debug)]
pub struct CgiClient<A: Access> {
    pub(crate) client: reqwest_middleware::ClientWithMiddleware,
    url: ApiUrl,
    phantom: PhantomData<A>,
}

impl<A: Access> Clone for CgiClient<A> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            url: self.url.clone(),
            phantom: Default::default(),
        }
    }
}

pub struct CgiClientBuilder<A: Access> {
    url: ApiUrl,
    builder: reqwest_middleware::ClientBuilder,
    phantom: PhantomData<A>,
}

impl<A: Access> CgiClientBuilder<A> {
    pub(crate) fn new(url: ApiUrl, token: &ApiToken) -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new()
            .default_headers(token2header(token))
            .build()?;
        let builder = reqwest_middleware::ClientBuilder::new(client);
        Ok(Self {
            url,
            builder,
            phantom: Default::default(),
        })
    }

    /// Add middleware to the HTTP client. The library performs no retries
    /// of its own; attach retry or timeout middleware here if needed.
    pub fn with<M: reqwest_middleware::Middleware>(self, middleware: M) -> Self {
        Self {
            url: self.url,
            builder: self.builder.with(middleware),
            phantom: self.phantom,
        }
    }

    /// Finish building the client. No request is made here: the API has no
    /// handshake, the first call authenticates implicitly.
    pub fn build(self) -> CgiClient<A> {
        CgiClient {
            client: self.builder.build(),
            url: self.url,
            phantom: Default::default(),
        }
    }
}

fn token2header(token: &ApiToken) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let mut value: HeaderValue = token.as_str().parse().unwrap();
    value.set_sensitive(true);
    headers.insert("X-Api-Key", value);
    headers.insert(ACCEPT, "application/json".parse().unwrap());
    headers
}

impl<A: Access> CgiClient<A> {
    /// Create a client builder.
    pub fn build(url: ApiUrl, token: &ApiToken) -> Result<CgiClientBuilder<A>, reqwest::Error> {
        CgiClientBuilder::new(url, token)
    }

    /// Get the API URL this client talks to.
    pub fn url(&self) -> &ApiUrl {
        &self.url
    }

    pub(crate) fn route(&self, path: impl Display) -> String {
        format!("{}{}", self.url, path)
    }

    // ==================================================
    //                 REQUEST HELPERS
    // ==================================================

    /// GET a JSON resource.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, url: String) -> Result<T, CgiError> {
        log::debug!("GET {}", url);
        let res = self.client.get(&url).send().await?;
        Ok(check(res).await?.json().await?)
    }

    /// GET a JSON listing with filter parameters. Absent filters are
    /// omitted from the query string.
    pub(crate) async fn fetch_query<T, Q>(&self, url: String, query: &Q) -> Result<T, CgiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        log::debug!("GET {}", url);
        let res = self.client.get(&url).query(query).send().await?;
        Ok(check(res).await?.json().await?)
    }

    /// GET exactly one page of a listing.
    pub(crate) async fn get_page<T, Q>(
        &self,
        url: String,
        query: &Q,
        page: PageQuery,
    ) -> Result<Page<T>, CgiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        log::debug!("GET {} (page {} size {})", url, page.page, page.size);
        let res = self.client.get(&url).query(query).query(&page).send().await?;
        Ok(check(res).await?.json().await?)
    }

    /// Drain every page of a listing client-side.
    pub(crate) async fn drain<T, Q>(&self, url: String, query: &Q) -> Result<Vec<T>, CgiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        log::debug!("GET {} (draining all pages)", url);
        let stream = paginate(&self.client, url, query);
        pin_mut!(stream);
        stream.try_collect().await
    }

    pub(crate) async fn post_json<B, T>(&self, url: String, body: &B) -> Result<T, CgiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("POST {}", url);
        let res = self.client.post(&url).json(body).send().await?;
        Ok(check(res).await?.json().await?)
    }

    pub(crate) async fn put_json<B, T>(&self, url: String, body: &B) -> Result<T, CgiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("PUT {}", url);
        let res = self.client.put(&url).json(body).send().await?;
        Ok(check(res).await?.json().await?)
    }

    /// DELETE a resource. Success has no content.
    pub(crate) async fn delete_item(&self, url: String) -> Result<(), CgiError> {
        log::debug!("DELETE {}", url);
        let res = self.client.delete(&url).send().await?;
        check(res).await?;
        Ok(())
    }

    /// GET a text artifact verbatim.
    pub(crate) async fn get_text(&self, url: String) -> Result<String, CgiError> {
        log::debug!("GET {}", url);
        let res = self.client.get(&url).send().await?;
        Ok(check(res).await?.text().await?)
    }

    /// GET a binary artifact. The whole payload is buffered in memory;
    /// persisting it is the caller's concern.
    pub(crate) async fn get_bytes(&self, url: String) -> Result<Bytes, CgiError> {
        log::debug!("GET {}", url);
        let res = self.client.get(&url).send().await?;
        Ok(check(res).await?.bytes().await?)
    }
}

impl AdminClient {
    /// Drop the superadmin assertion.
    pub fn into_user(self) -> UserClient {
        CgiClient {
            client: self.client,
            url: self.url,
            phantom: Default::default(),
        }
    }
}
