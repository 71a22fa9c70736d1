//! HTTP fetcher for dealer site pages.

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,\
     image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";

/// Fetches dealer pages with a browser-like header bundle.
///
/// Redirects are followed. The status code is deliberately not checked:
/// the site serves usable markup on some non-2xx responses, so the body
/// is returned regardless and failures surface only at the network level.
pub struct OfferClient {
    http: reqwest::Client,
    base_url: String,
    cookie: String,
}

impl OfferClient {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cookie: config.cookie.clone(),
        })
    }

    /// GETs a page and returns its body.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let mut request = self
            .http
            .get(url)
            .header("accept", ACCEPT)
            .header("accept-language", "en-US,en;q=0.9")
            .header("cache-control", "max-age=0")
            .header("upgrade-insecure-requests", "1")
            .header(
                "sec-ch-ua",
                "\"Chromium\";v=\"124\", \"Google Chrome\";v=\"124\", \"Not-A.Brand\";v=\"99\"",
            )
            .header("sec-ch-ua-mobile", "?0")
            .header("sec-ch-ua-platform", "\"Windows\"")
            .header("sec-fetch-site", "none")
            .header("sec-fetch-mode", "navigate")
            .header("sec-fetch-user", "?1")
            .header("sec-fetch-dest", "document");
        if !self.cookie.is_empty() {
            request = request.header("cookie", &self.cookie);
        }

        let resp = request.send().await?;
        Ok(resp.text().await?)
    }

    /// Prefixes the base URL onto site-relative hrefs.
    pub fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }
}
