//! Network retrieval of the catalog and detail pages.
//!
//! Pages are fetched one at a time with a short pause between detail requests.
//! There is no retry: the first failed request aborts the stage, and because
//! stored pages are skipped, re-running the stage resumes where it stopped.

use log::{debug, info};
use url::Url;

use crate::config::{Config, DETAIL_ID_PARAM};
use crate::error_handling::FetchError;
use crate::models::ItemStub;
use crate::storage::{DocumentSource, DocumentStore};

/// Counts from one detail fetch pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchReport {
    /// Pages downloaded in this pass
    pub downloaded: usize,
    /// Pages already stored and not requested again
    pub skipped: usize,
}

/// URL of the detail page for `id`.
pub fn detail_url(config: &Config, id: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(&config.detail_url)?;
    url.query_pairs_mut().append_pair(DETAIL_ID_PARAM, id);
    Ok(url)
}

/// Downloads the catalog page as the raw response body.
pub async fn fetch_index_document(
    client: &reqwest::Client,
    config: &Config,
) -> Result<Vec<u8>, FetchError> {
    let url = Url::parse(&config.index_url)?;
    fetch_document(client, url).await
}

/// Downloads the detail page for one item as the raw response body.
pub async fn fetch_detail_document(
    client: &reqwest::Client,
    config: &Config,
    id: &str,
) -> Result<Vec<u8>, FetchError> {
    fetch_document(client, detail_url(config, id)?).await
}

/// Downloads every detail page that is not already stored.
///
/// Items are visited in order. Stored pages are skipped without a request;
/// each downloaded page is persisted before the next request is made.
///
/// # Errors
///
/// The first request or write failure ends the pass.
pub async fn fetch_missing_documents(
    client: &reqwest::Client,
    config: &Config,
    store: &DocumentStore,
    items: &[ItemStub],
) -> Result<FetchReport, FetchError> {
    let mut report = FetchReport::default();

    for item in items {
        if store.exists(&item.id) {
            debug!("Exists already: \"{} - {}\" - skipping", item.id, item.name_local);
            report.skipped += 1;
            continue;
        }

        let document = fetch_detail_document(client, config, &item.id).await?;
        store.persist(&item.id, &document)?;
        report.downloaded += 1;
        info!("Downloaded: \"{} - {}\"", item.id, item.name_local);

        if !config.request_delay.is_zero() {
            tokio::time::sleep(config.request_delay).await;
        }
    }

    info!(
        "Detail pages: {} downloaded, {} already stored",
        report.downloaded, report.skipped
    );
    Ok(report)
}

async fn fetch_document(client: &reqwest::Client, url: Url) -> Result<Vec<u8>, FetchError> {
    debug!("GET {}", url);
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}
