use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::record::{self, Resource, DEFAULT_CATEGORY};

/// A professional certificate entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub issuer: String,
    pub category: String,
    pub credential_url: String,
    pub image_url: String,
    pub date: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificatePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub issuer: Option<String>,
    pub category: Option<String>,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<String>,
}

impl Resource for Certificate {
    type Patch = CertificatePatch;

    const KIND: &'static str = "certificate";
    const LABEL: &'static str = "Certificate";

    fn id(&self) -> i64 {
        self.id
    }

    fn validate(patch: &CertificatePatch) -> Result<(), ModelError> {
        record::require_title_and_description(&patch.title, &patch.description)
    }

    fn create(id: i64, patch: CertificatePatch) -> Self {
        Certificate {
            id,
            title: patch.title.unwrap_or_default(),
            description: patch.description.unwrap_or_default(),
            issuer: patch.issuer.unwrap_or_default(),
            category: patch.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            credential_url: patch.credential_url.unwrap_or_default(),
            image_url: patch.image_url.unwrap_or_default(),
            date: patch.date.unwrap_or_else(record::current_month),
        }
    }

    fn merge(&mut self, patch: CertificatePatch) {
        if let Some(v) = patch.title { self.title = v; }
        if let Some(v) = patch.description { self.description = v; }
        if let Some(v) = patch.issuer { self.issuer = v; }
        if let Some(v) = patch.category { self.category = v; }
        if let Some(v) = patch.credential_url { self.credential_url = v; }
        if let Some(v) = patch.image_url { self.image_url = v; }
        if let Some(v) = patch.date { self.date = v; }
    }

    fn sample() -> Self {
        Certificate {
            id: 1,
            title: "AWS Certified Solutions Architect".into(),
            description: "Professional certification for designing distributed systems on AWS.".into(),
            issuer: "Amazon Web Services".into(),
            category: DEFAULT_CATEGORY.into(),
            credential_url: "https://aws.amazon.com/verification".into(),
            image_url: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&q=80".into(),
            date: "2024-08".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_issuer_and_urls_to_empty() {
        let patch = CertificatePatch {
            title: Some("Cert".into()),
            description: Some("Desc".into()),
            ..Default::default()
        };
        let c = Certificate::create(3, patch);
        assert_eq!(c.id, 3);
        assert!(c.issuer.is_empty());
        assert!(c.credential_url.is_empty());
        assert_eq!(c.category, "Other");
    }

    #[test]
    fn merge_overwrites_only_supplied_fields() {
        let mut c = Certificate::sample();
        c.merge(CertificatePatch { issuer: Some("Acme".into()), ..Default::default() });
        assert_eq!(c.issuer, "Acme");
        assert_eq!(c.title, "AWS Certified Solutions Architect");
    }
}
