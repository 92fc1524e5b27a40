use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Error, Result};

pub const UTM_MEDIUM: &str = "utm_medium";
pub const UTM_SOURCE: &str = "utm_source";
pub const UTM_CAMPAIGN: &str = "utm_campaign";
pub const UTM_TERM: &str = "utm_term";
pub const UTM_CONTENT: &str = "utm_content";

/// Raw UTM parameters as they arrive, before validation.
///
/// Deserializes from a query string or any string-keyed map using the
/// `utm_*` names. A non-string value for one of these keys is a
/// deserialization error, so it never reaches [`UtmQuery::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UtmQuery {
    pub utm_medium: Option<String>,
    pub utm_source: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,
}

impl UtmQuery {
    /// Checks the required parameters and fills in the optional ones.
    ///
    /// `utm_medium` is checked before `utm_source`. An empty value counts as
    /// missing.
    pub fn validate(self) -> Result<UtmParams> {
        let medium = required(self.utm_medium, UTM_MEDIUM)?;
        let source = required(self.utm_source, UTM_SOURCE)?;

        Ok(UtmParams {
            medium,
            source,
            campaign: self.utm_campaign.unwrap_or_default(),
            term: self.utm_term.unwrap_or_default(),
            content: self.utm_content.unwrap_or_default(),
        })
    }
}

fn required(value: Option<String>, key: &'static str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            tracing::warn!(param = key, "required utm parameter missing");
            Err(Error::MissingParam(key))
        }
    }
}

/// Validated attribution values for a new lead source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtmParams {
    pub(crate) medium: String,
    pub(crate) source: String,
    pub(crate) campaign: String,
    pub(crate) term: String,
    pub(crate) content: String,
}

impl UtmParams {
    /// Builds params from the two required values.
    ///
    /// Fails with [`Error::MissingParam`] if either is empty.
    pub fn new(medium: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        UtmQuery {
            utm_medium: Some(medium.into()),
            utm_source: Some(source.into()),
            ..UtmQuery::default()
        }
        .validate()
    }

    /// Validates a loosely-typed `utm_*` map. Unrecognized keys are ignored.
    pub fn from_map(params: &HashMap<String, String>) -> Result<Self> {
        let get = |key: &str| params.get(key).cloned();

        UtmQuery {
            utm_medium: get(UTM_MEDIUM),
            utm_source: get(UTM_SOURCE),
            utm_campaign: get(UTM_CAMPAIGN),
            utm_term: get(UTM_TERM),
            utm_content: get(UTM_CONTENT),
        }
        .validate()
    }

    pub fn with_campaign(mut self, campaign: impl Into<String>) -> Self {
        self.campaign = campaign.into();
        self
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn medium(&self) -> &str {
        &self.medium
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn campaign(&self) -> &str {
        &self.campaign
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl TryFrom<UtmQuery> for UtmParams {
    type Error = Error;

    fn try_from(query: UtmQuery) -> Result<Self> {
        query.validate()
    }
}

impl TryFrom<&HashMap<String, String>> for UtmParams {
    type Error = Error;

    fn try_from(params: &HashMap<String, String>) -> Result<Self> {
        Self::from_map(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let params = UtmParams::from_map(&map(&[("utm_medium", "cpc"), ("utm_source", "google")]))
            .unwrap();

        assert_eq!(params.medium(), "cpc");
        assert_eq!(params.source(), "google");
        assert_eq!(params.campaign(), "");
        assert_eq!(params.term(), "");
        assert_eq!(params.content(), "");
    }

    #[test]
    fn missing_medium_is_named() {
        let err = UtmParams::from_map(&map(&[("utm_source", "google")])).unwrap_err();
        assert!(matches!(err, Error::MissingParam("utm_medium")));
        assert_eq!(err.to_string(), "missing utm param: utm_medium");
    }

    #[test]
    fn missing_source_is_named() {
        let err = UtmParams::from_map(&map(&[("utm_medium", "email")])).unwrap_err();
        assert!(matches!(err, Error::MissingParam("utm_source")));
    }

    #[test]
    fn medium_is_reported_first_when_both_missing() {
        let err = UtmParams::from_map(&HashMap::new()).unwrap_err();
        assert!(matches!(err, Error::MissingParam("utm_medium")));
    }

    #[test]
    fn empty_required_value_counts_as_missing() {
        let err = UtmParams::new("cpc", "").unwrap_err();
        assert!(matches!(err, Error::MissingParam("utm_source")));
    }

    #[test]
    fn all_fields_and_extra_keys() {
        let params = UtmParams::from_map(&map(&[
            ("utm_medium", "referral"),
            ("utm_source", "internal"),
            ("utm_campaign", "profile"),
            ("utm_term", "abc123"),
            ("utm_content", "book me"),
            ("gclid", "ignored"),
        ]))
        .unwrap();

        assert_eq!(
            params,
            UtmParams::new("referral", "internal")
                .unwrap()
                .with_campaign("profile")
                .with_term("abc123")
                .with_content("book me")
        );
    }

    #[test]
    fn query_rejects_non_string_values() {
        let ok: UtmQuery =
            serde_json::from_str(r#"{"utm_medium": "cpc", "utm_source": "google"}"#).unwrap();
        assert!(ok.validate().is_ok());

        let bad = serde_json::from_str::<UtmQuery>(r#"{"utm_medium": 42, "utm_source": "google"}"#);
        assert!(bad.is_err());
    }
}
