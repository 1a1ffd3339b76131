//! Firmographic lookup for a business.

use bizlens_core::BusinessProfile;
use serde::{Deserialize, Serialize};

use crate::client::SourceClient;
use crate::error::SourceError;
use crate::fetched::Fetched;

const SOURCE: &str = "enrichment";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub founded_year: Option<u16>,
    #[serde(default)]
    pub employee_range: Option<String>,
    #[serde(default)]
    pub annual_revenue_range: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EnrichmentSource {
    client: SourceClient,
}

impl EnrichmentSource {
    #[must_use]
    pub fn new(client: SourceClient) -> Self {
        Self { client }
    }

    /// True when a usable API key is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client.has_credentials()
    }

    pub async fn lookup(&self, profile: &BusinessProfile) -> Fetched<CompanyProfile> {
        if !self.client.has_credentials() {
            return Fetched::without_credentials(SOURCE, canned(profile));
        }
        let result = self.fetch(profile).await;
        Fetched::settle(SOURCE, result, || canned(profile))
    }

    async fn fetch(&self, profile: &BusinessProfile) -> Result<CompanyProfile, SourceError> {
        let url = self.client.build_url(
            "v1/companies/lookup",
            &[
                ("name", profile.name.as_str()),
                ("zip", profile.zip_code.as_str()),
            ],
        );
        self.client.get_json(url, true).await
    }
}

fn canned(profile: &BusinessProfile) -> CompanyProfile {
    CompanyProfile {
        name: profile.name.clone(),
        website: None,
        founded_year: None,
        employee_range: Some("1-10".to_string()),
        annual_revenue_range: Some("$250k-$1M".to_string()),
        tags: vec![profile.industry.label().to_lowercase(), "independent".to_string()],
    }
}
