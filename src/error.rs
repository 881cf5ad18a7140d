use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network failure talking to {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not decode response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Sorts a reqwest failure into the two-variant taxonomy: decode failures
    /// are parse errors, everything else (connect, timeout, non-2xx status)
    /// counts as a network error.
    pub fn from_reqwest(url: &url::Url, source: reqwest::Error) -> Self {
        if source.is_decode() {
            ApiError::Parse {
                url: url.to_string(),
                source,
            }
        } else {
            ApiError::Network {
                url: url.to_string(),
                source,
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}
