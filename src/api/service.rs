use std::time::Duration;

use backoff::Error;
use graph_serialization::create_from_bytes;
use ureq::http::Response;
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::{Agent, Body};
use url::Url;

use crate::helpers::{backoff_policy, backoff_retry};
use crate::models::{SitePage, SitePageCollectionResponse};

use super::{GraphConfig, GraphError};

const RETRY_AFTER: &str = "Retry-After";
const RETRY_ATTEMPT: &str = "Retry-Attempt";

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Delete => "DELETE",
        }
    }
}

/// Blocking client for the parts of the Graph beta endpoint the models cover.
pub struct BetaService {
    agent: Agent,
    base_url: Url,
    bearer: String,
    config: GraphConfig,
}

impl BetaService {
    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        let token = config
            .access_token
            .clone()
            .ok_or_else(|| GraphError::Config("no access token configured".to_string()))?;
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(GraphError::Config(format!(
                "'{}' cannot be used as a base URL",
                config.base_url
            )));
        }

        let agent_config = Agent::config_builder()
            .tls_config(TlsConfig::builder().provider(TlsProvider::NativeTls).build())
            .timeout_global(Some(config.request_timeout))
            .http_status_as_error(false)
            .build();

        Ok(BetaService {
            agent: Agent::new_with_config(agent_config),
            base_url,
            bearer: format!("Bearer {token}"),
            config,
        })
    }

    pub fn get_site_page(&self, site_id: &str, page_id: &str) -> Result<SitePage, GraphError> {
        let url = self.url(&["sites", site_id, "pages", page_id]);
        let body = self.send(Method::Get, &url)?;
        Ok(create_from_bytes(
            &body,
            SitePage::create_from_discriminator_value,
        )?)
    }

    /// Fetches each of `page_ids`. Pages that no longer exist are skipped.
    pub fn get_site_pages<S: AsRef<str>>(
        &self,
        site_id: &str,
        page_ids: &[S],
    ) -> Result<Vec<SitePage>, GraphError> {
        let mut pages = Vec::with_capacity(page_ids.len());
        for page_id in page_ids {
            let page_id = page_id.as_ref();
            match self.get_site_page(site_id, page_id) {
                Ok(page) => pages.push(page),
                Err(err) if err.is_not_found() => {
                    log::warn!("Page {page_id} of site {site_id} not found, skipping");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(pages)
    }

    /// Every page of the site, across all result pages.
    pub fn list_site_pages(&self, site_id: &str) -> Result<Vec<SitePage>, GraphError> {
        let mut pages = Vec::new();
        let mut next = Some(self.url(&["sites", site_id, "pages"]));
        while let Some(url) = next.take() {
            let body = self.send(Method::Get, &url)?;
            let response = create_from_bytes(
                &body,
                SitePageCollectionResponse::create_from_discriminator_value,
            )?;
            if let Some(value) = response.value() {
                pages.extend(value.iter().cloned());
            }
            if let Some(link) = response.odata_next_link() {
                next = Some(Url::parse(link)?);
            }
            log::debug!("Listed {} pages of site {site_id} so far", pages.len());
        }
        Ok(pages)
    }

    pub fn delete_site_page(&self, site_id: &str, page_id: &str) -> Result<(), GraphError> {
        let url = self.url(&["sites", site_id, "pages", page_id]);
        self.send(Method::Delete, &url)?;
        Ok(())
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends one request, retrying transient failures, and returns the body of
    /// the 2xx response.
    fn send(&self, method: Method, url: &Url) -> Result<Vec<u8>, GraphError> {
        let mut attempt = 0u32;
        let request = || -> Result<Vec<u8>, Error<GraphError>> {
            let mut builder = match method {
                Method::Get => self.agent.get(url.as_str()),
                Method::Delete => self.agent.delete(url.as_str()),
            }
            .header("Authorization", &self.bearer)
            .header("Accept", "application/json");
            if attempt > 0 {
                builder = builder.header(RETRY_ATTEMPT, &attempt.to_string());
            }
            attempt += 1;

            let mut response = builder.call().map_err(transport_error)?;
            let status = response.status().as_u16();
            let retry_after = retry_after(&response);
            let body = response.body_mut().read_to_vec().map_err(transport_error)?;
            self.log_exchange(method, url, status, &body);

            if (200..300).contains(&status) {
                return Ok(body);
            }
            let err = GraphError::from_response(status, &body);
            match (status, retry_after) {
                (429 | 503 | 504, Some(delay)) => Err(Error::retry_after(err, delay)),
                (429 | 503 | 504, None) => Err(Error::transient(err)),
                _ => Err(Error::permanent(err)),
            }
        };

        backoff_retry(
            backoff_policy(
                self.config.retry_initial_interval,
                self.config.max_retry_elapsed,
            ),
            request,
        )
    }

    fn log_exchange(&self, method: Method, url: &Url, status: u16, body: &[u8]) {
        let success = (200..300).contains(&status);
        if self.config.log_requests {
            if success {
                log::info!("{} {url} -> {status}", method.as_str());
            } else {
                log::info!(
                    "{} {url} -> {status}: {}",
                    method.as_str(),
                    String::from_utf8_lossy(body)
                );
            }
        } else {
            log::debug!("{} {url} -> {status}", method.as_str());
        }
    }
}

fn transport_error(err: ureq::Error) -> Error<GraphError> {
    let retriable = matches!(
        err,
        ureq::Error::Io(_)
            | ureq::Error::Timeout(_)
            | ureq::Error::HostNotFound
            | ureq::Error::ConnectionFailed
    );
    if retriable {
        Error::transient(GraphError::Http(err))
    } else {
        Error::permanent(GraphError::Http(err))
    }
}

/// `Retry-After` in delta-seconds. HTTP-date values are ignored.
fn retry_after(response: &Response<Body>) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}
