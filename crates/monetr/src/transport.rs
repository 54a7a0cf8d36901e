//! HTTP transport for report submission.

use crate::config::Config;
use crate::types::{DataPoint, RealtimeValue};
use crate::Error;
use tracing::{debug, warn};

/// Header carrying the SDK token.
const TOKEN_HEADER: &str = "monetr-sdk-token";

/// Header carrying the organization identifier on bulk reports.
const ORGANIZATION_HEADER: &str = "monetr-data-organization";

/// HTTP transport for sending reports to the monetr API.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    api_base: String,
    token: String,
    organization: String,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base().to_string(),
            token: config.token().to_string(),
            organization: config.organization().to_string(),
        })
    }

    /// Submit one value to the realtime report endpoint.
    pub async fn send_realtime(
        &self,
        kpi_id: u64,
        dimension_id: u64,
        body: &RealtimeValue,
    ) -> Result<(), Error> {
        let endpoint = format!(
            "{}/kpis/{}/values/report-realtime/{}",
            self.api_base, kpi_id, dimension_id
        );

        debug!(endpoint = %endpoint, value = body.value, "sending realtime report");

        let response = self
            .client
            .post(&endpoint)
            .header(TOKEN_HEADER, &self.token)
            .json(body)
            .send()
            .await?;

        self.check_status(response).await
    }

    /// Submit one block of data points to the bulk report endpoint.
    pub async fn send_block(&self, block: &[DataPoint]) -> Result<(), Error> {
        let endpoint = format!("{}/sdk/kpi-values/report", self.api_base);

        debug!(endpoint = %endpoint, len = block.len(), "sending bulk report block");

        let response = self
            .client
            .post(&endpoint)
            .header(TOKEN_HEADER, &self.token)
            .header(ORGANIZATION_HEADER, &self.organization)
            .json(&block)
            .send()
            .await?;

        self.check_status(response).await
    }

    async fn check_status(&self, response: reqwest::Response) -> Result<(), Error> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            warn!(status = %status, body = %body, "API request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
