//! Card icons.
//!
//! Each card starts with its tool's icon, or the fallback asset when the
//! tool has none. A probe checks icon reachability in the background and
//! reports broken ones so the card can switch to the fallback, once.

use futures::stream::{self, StreamExt};
use reqwest::{Client, StatusCode, Url};

use crate::catalog::Tool;

/// What a card currently shows as its icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    Primary(String),
    Fallback,
}

impl IconSource {
    pub fn for_tool(tool: &Tool) -> Self {
        match &tool.icon {
            Some(icon) if !icon.trim().is_empty() => IconSource::Primary(icon.clone()),
            _ => IconSource::Fallback,
        }
    }

    /// Switch to the fallback after a load failure. Returns `true` if the
    /// source changed.
    pub fn fail(&mut self) -> bool {
        if *self == IconSource::Fallback {
            return false;
        }
        *self = IconSource::Fallback;
        true
    }

    /// The path or URL to display.
    pub fn display<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            IconSource::Primary(url) => url,
            IconSource::Fallback => fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, IconSource::Fallback)
    }
}

/// Resolve an icon reference the way the catalog page would: absolute URLs
/// stand, everything else is relative to the site root of `base`.
pub fn resolve_icon(base: &Url, icon: &str) -> Option<Url> {
    base.join("/").and_then(|root| root.join(icon)).ok()
}

async fn icon_reachable(client: &Client, url: Url) -> bool {
    match client.head(url.clone()).send().await {
        Ok(resp) if resp.status().is_success() => true,
        Ok(resp) if resp.status() == StatusCode::METHOD_NOT_ALLOWED => client
            .get(url)
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false),
        Ok(resp) => {
            log::debug!("Icon {} returned {}", url, resp.status());
            false
        }
        Err(e) => {
            log::debug!("Icon {} unreachable: {}", url, e);
            false
        }
    }
}

/// Background reachability check for card icons.
#[derive(Debug, Clone)]
pub struct IconProbe {
    client: Client,
    base: Url,
    concurrency: usize,
}

impl IconProbe {
    /// `base` is any URL on the site serving the icons, usually the endpoint.
    pub fn new(client: Client, base: Url, concurrency: usize) -> Self {
        Self {
            client,
            base,
            concurrency: concurrency.max(1),
        }
    }

    /// Primary icons of `tools` as (position, reference) pairs.
    pub fn targets(tools: &[Tool]) -> Vec<(usize, String)> {
        tools
            .iter()
            .enumerate()
            .filter_map(|(i, tool)| match IconSource::for_tool(tool) {
                IconSource::Primary(icon) => Some((i, icon)),
                IconSource::Fallback => None,
            })
            .collect()
    }

    /// Probe every icon and call `on_broken` with the position of each one
    /// that cannot be loaded.
    pub async fn run<F>(&self, icons: Vec<(usize, String)>, on_broken: F)
    where
        F: Fn(usize),
    {
        let client = &self.client;
        let base = &self.base;
        log::debug!("Probing {} icons", icons.len());

        let mut results = stream::iter(icons)
            .map(|(position, icon)| async move {
                let ok = match resolve_icon(base, &icon) {
                    Some(url) => icon_reachable(client, url).await,
                    None => false,
                };
                (position, ok)
            })
            .buffer_unordered(self.concurrency);

        while let Some((position, ok)) = results.next().await {
            if !ok {
                on_broken(position);
            }
        }
    }
}
