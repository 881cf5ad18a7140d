use url::Url;

use crate::error::ConfigError;

const DEFAULT_BASE_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api/";

/// Client configuration, read from the environment after `dotenvy::dotenv()`.
///
/// `PUPPY_BOWL_COHORT` names the deployment-specific path segment and has no
/// sensible default. `PUPPY_BOWL_BASE_URL` overrides the API root, mainly for
/// pointing the client at a local stub.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub cohort: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let cohort = std::env::var("PUPPY_BOWL_COHORT")
            .map_err(|_| ConfigError::MissingVar("PUPPY_BOWL_COHORT"))?;

        let raw = std::env::var("PUPPY_BOWL_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl {
            var: "PUPPY_BOWL_BASE_URL",
            source,
        })?;

        Ok(Config { base_url, cohort })
    }

    /// The fixed root all API operations are relative to:
    /// `{base_url}/{cohort}/`. Trailing slashes are normalized so that
    /// `Url::join` treats the cohort as a directory segment.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let mut base = self.base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        base.push_str(self.cohort.trim_matches('/'));
        base.push('/');
        Url::parse(&base).map_err(|source| ConfigError::InvalidUrl {
            var: "PUPPY_BOWL_BASE_URL",
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_cohort_as_directory() {
        let config = Config {
            base_url: Url::parse("https://fsa-puppy-bowl.herokuapp.com/api").unwrap(),
            cohort: "2302-ACC-ET-WEB-PT-C".to_string(),
        };
        let endpoint = config.endpoint().unwrap();
        assert_eq!(
            endpoint.as_str(),
            "https://fsa-puppy-bowl.herokuapp.com/api/2302-ACC-ET-WEB-PT-C/"
        );
        assert_eq!(
            endpoint.join("players").unwrap().as_str(),
            "https://fsa-puppy-bowl.herokuapp.com/api/2302-ACC-ET-WEB-PT-C/players"
        );
    }

    #[test]
    fn endpoint_tolerates_slash_decorated_cohort() {
        let config = Config {
            base_url: Url::parse("http://127.0.0.1:8080/api/").unwrap(),
            cohort: "/test-cohort/".to_string(),
        };
        let endpoint = config.endpoint().unwrap();
        assert_eq!(endpoint.as_str(), "http://127.0.0.1:8080/api/test-cohort/");
    }
}
