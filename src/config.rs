use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_BUCKET: &str = "my-iac-bucket-name";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024; // 10 MiB

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(var: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            var,
            reason: reason.into(),
        }
    }
}

/// Service configuration, read from `AIRPORTS_*` environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
    pub region: String,
    pub bucket: String,
    /// Prefix for image URLs handed back to clients, no trailing slash
    pub public_base_url: String,
    /// Endpoint override for S3-compatible stores (LocalStack, MinIO)
    pub endpoint_url: Option<String>,
    pub max_upload_bytes: usize,
    pub enable_v2: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            region: DEFAULT_REGION.to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
            public_base_url: bucket_base_url(DEFAULT_BUCKET),
            endpoint_url: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            enable_v2: true,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    /// Unset and empty variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get("AIRPORTS_PORT") {
            Some(raw) => match raw.parse::<u16>() {
                Ok(0) => return Err(ConfigError::invalid("AIRPORTS_PORT", "port must be non-zero")),
                Ok(port) => port,
                Err(e) => return Err(ConfigError::invalid("AIRPORTS_PORT", e.to_string())),
            },
            None => DEFAULT_PORT,
        };

        let region = get("AIRPORTS_S3_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());
        let bucket = get("AIRPORTS_S3_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string());

        let public_base_url = match get("AIRPORTS_PUBLIC_BASE_URL") {
            Some(url) => {
                validate_url("AIRPORTS_PUBLIC_BASE_URL", &url)?;
                url.trim_end_matches('/').to_string()
            }
            None => bucket_base_url(&bucket),
        };

        let endpoint_url = match get("AIRPORTS_S3_ENDPOINT_URL") {
            Some(url) => {
                validate_url("AIRPORTS_S3_ENDPOINT_URL", &url)?;
                Some(url)
            }
            None => None,
        };

        let max_upload_bytes = match get("AIRPORTS_MAX_UPLOAD_BYTES") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::invalid(
                        "AIRPORTS_MAX_UPLOAD_BYTES",
                        "limit must be greater than zero",
                    ))
                }
                Ok(limit) => limit,
                Err(e) => return Err(ConfigError::invalid("AIRPORTS_MAX_UPLOAD_BYTES", e.to_string())),
            },
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let enable_v2 = match get("AIRPORTS_ENABLE_V2") {
            Some(raw) => parse_bool("AIRPORTS_ENABLE_V2", &raw)?,
            None => true,
        };

        Ok(Self {
            port,
            region,
            bucket,
            public_base_url,
            endpoint_url,
            max_upload_bytes,
            enable_v2,
        })
    }
}

/// Virtual-hosted style URL of a public bucket
pub fn bucket_base_url(bucket: &str) -> String {
    format!("https://{}.s3.amazonaws.com", bucket)
}

fn validate_url(var: &'static str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::invalid(var, format!("expected an http(s) URL, got {}", url)))
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::invalid(var, format!("expected a boolean, got {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.public_base_url, "https://my-iac-bucket-name.s3.amazonaws.com");
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(config.enable_v2);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("AIRPORTS_PORT", "9090"),
            ("AIRPORTS_S3_REGION", "ap-south-1"),
            ("AIRPORTS_S3_BUCKET", "bd-airports"),
            ("AIRPORTS_S3_ENDPOINT_URL", "http://localhost:4566"),
            ("AIRPORTS_MAX_UPLOAD_BYTES", "1024"),
            ("AIRPORTS_ENABLE_V2", "false"),
        ])
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.region, "ap-south-1");
        assert_eq!(config.bucket, "bd-airports");
        assert_eq!(config.public_base_url, "https://bd-airports.s3.amazonaws.com");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.max_upload_bytes, 1024);
        assert!(!config.enable_v2);
    }

    #[test]
    fn test_public_base_url_trailing_slash_stripped() {
        let config = config_from(&[("AIRPORTS_PUBLIC_BASE_URL", "https://cdn.example.com/img/")]).unwrap();
        assert_eq!(config.public_base_url, "https://cdn.example.com/img");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("AIRPORTS_S3_BUCKET", "  "), ("AIRPORTS_PORT", "")]).unwrap();
        assert_eq!(config.bucket, DEFAULT_BUCKET);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let cases = [
            ("AIRPORTS_PORT", "0"),
            ("AIRPORTS_PORT", "http"),
            ("AIRPORTS_PUBLIC_BASE_URL", "ftp://bucket"),
            ("AIRPORTS_S3_ENDPOINT_URL", "localhost:4566"),
            ("AIRPORTS_MAX_UPLOAD_BYTES", "0"),
            ("AIRPORTS_MAX_UPLOAD_BYTES", "-5"),
            ("AIRPORTS_ENABLE_V2", "maybe"),
        ];

        for (var, value) in cases {
            let err = config_from(&[(var, value)]).unwrap_err();
            assert!(
                err.to_string().starts_with(var),
                "{} = {} gave {}",
                var,
                value,
                err
            );
        }
    }
}
