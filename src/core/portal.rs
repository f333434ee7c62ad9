use std::time::Duration;

use log::{error, info};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use url::Url;

use crate::config::settings::PortalSettings;
use crate::core::course::filter_rows;
use crate::core::grouper::group_notifications;
use crate::core::html_parser;
use crate::error::portal::PortalError;
use crate::http::log_middleware::RequestLogMiddleware;
use crate::http::random_headers::browser_headers;
use crate::model::notification::{NotificationGroup, RawRow};

/// Client for the university examination portal.
pub struct Portal {
    client: ClientWithMiddleware,
    url: Url,
    resolve_links: bool,
}

impl Portal {
    pub fn new(settings: &PortalSettings) -> Result<Self, PortalError> {
        let url = Url::parse(&settings.url)?;
        let client = Client::builder()
            .default_headers(browser_headers())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        let client = ClientBuilder::new(client).with(RequestLogMiddleware).build();

        Ok(Portal {
            client,
            url,
            resolve_links: settings.resolve_links,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn get_page(&self) -> Result<String, PortalError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortalError::status(status));
        }
        Ok(response.text().await?)
    }

    /// Rows that are headings or mention `course` in one of their cells.
    ///
    /// A page that cannot be fetched or parsed gives no rows.
    pub async fn extract_tables(&self, course: &str) -> Vec<RawRow> {
        let rows = match self.get_page().await {
            Ok(html) => html_parser::parse_rows(&html),
            Err(err) => Err(err),
        };

        match rows {
            Ok(rows) => filter_rows(rows, course),
            Err(err) => {
                error!("failed to retrieve the notification page: {}", err);
                Vec::new()
            }
        }
    }

    pub async fn get_notifications(&self, course: &str) -> Vec<NotificationGroup> {
        let rows = self.extract_tables(course).await;
        let base = self.resolve_links.then_some(&self.url);
        let groups = group_notifications(&rows, base);
        info!(
            "grouped {} rows into {} groups (course filter {:?})",
            rows.len(),
            groups.len(),
            course
        );
        groups
    }
}
