//! Signer configuration.
//!
//! Provides [`SignerConfig`] for configuring the presigned URL signer.
//! Configuration values are loaded from environment variables (`R2_*`
//! names, matching common R2 deployment conventions).

use typed_builder::TypedBuilder;

/// Presigned URL signer configuration.
///
/// Credential and location fields default to empty strings; the signer
/// rejects an incomplete configuration at construction time rather than
/// producing a partial signature.
///
/// # Examples
///
/// ```
/// use presign_core::config::SignerConfig;
///
/// let config = SignerConfig::default();
/// assert_eq!(config.storage_host, "r2.cloudflarestorage.com");
/// assert_eq!(config.upload_expiry_secs, 900);
/// ```
#[derive(Clone, TypedBuilder)]
pub struct SignerConfig {
    /// Access key ID used in `X-Amz-Credential`.
    #[builder(default)]
    pub access_key_id: String,

    /// Secret access key seeding the signing key derivation.
    #[builder(default)]
    pub secret_access_key: String,

    /// Account identifier prefixing the storage host.
    #[builder(default)]
    pub account_id: String,

    /// Bucket name prefixing every canonical object path.
    #[builder(default)]
    pub bucket_name: String,

    /// Storage host suffix (e.g. `r2.cloudflarestorage.com`).
    #[builder(default = String::from("r2.cloudflarestorage.com"))]
    pub storage_host: String,

    /// Region token in the credential scope and key derivation chain.
    #[builder(default = String::from("auto"))]
    pub region: String,

    /// Service token in the credential scope and key derivation chain.
    #[builder(default = String::from("s3"))]
    pub service: String,

    /// Expiry window for upload (PUT) URLs, in seconds.
    #[builder(default = 900)]
    pub upload_expiry_secs: u64,

    /// Expiry window for read (GET) URLs, in seconds.
    #[builder(default = 3600)]
    pub read_expiry_secs: u64,
}

impl std::fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignerConfig")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field("account_id", &self.account_id)
            .field("bucket_name", &self.bucket_name)
            .field("storage_host", &self.storage_host)
            .field("region", &self.region)
            .field("service", &self.service)
            .field("upload_expiry_secs", &self.upload_expiry_secs)
            .field("read_expiry_secs", &self.read_expiry_secs)
            .finish()
    }
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            access_key_id: String::new(),
            secret_access_key: String::new(),
            account_id: String::new(),
            bucket_name: String::new(),
            storage_host: String::from("r2.cloudflarestorage.com"),
            region: String::from("auto"),
            service: String::from("s3"),
            upload_expiry_secs: 900,
            read_expiry_secs: 3600,
        }
    }
}

impl SignerConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `R2_ACCESS_KEY_ID` | *(empty)* |
    /// | `R2_SECRET_ACCESS_KEY` | *(empty)* |
    /// | `R2_ACCOUNT_ID` | *(empty)* |
    /// | `R2_BUCKET_NAME` | *(empty)* |
    /// | `R2_STORAGE_HOST` | `r2.cloudflarestorage.com` |
    /// | `UPLOAD_EXPIRY_SECS` | `900` |
    /// | `READ_EXPIRY_SECS` | `3600` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("R2_ACCESS_KEY_ID") {
            config.access_key_id = v;
        }
        if let Ok(v) = std::env::var("R2_SECRET_ACCESS_KEY") {
            config.secret_access_key = v;
        }
        if let Ok(v) = std::env::var("R2_ACCOUNT_ID") {
            config.account_id = v;
        }
        if let Ok(v) = std::env::var("R2_BUCKET_NAME") {
            config.bucket_name = v;
        }
        if let Ok(v) = std::env::var("R2_STORAGE_HOST") {
            config.storage_host = v;
        }
        if let Ok(v) = std::env::var("UPLOAD_EXPIRY_SECS") {
            if let Ok(n) = v.parse::<u64>() {
                config.upload_expiry_secs = n;
            }
        }
        if let Ok(v) = std::env::var("READ_EXPIRY_SECS") {
            if let Ok(n) = v.parse::<u64>() {
                config.read_expiry_secs = n;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = SignerConfig::default();
        assert!(config.access_key_id.is_empty());
        assert!(config.secret_access_key.is_empty());
        assert_eq!(config.storage_host, "r2.cloudflarestorage.com");
        assert_eq!(config.region, "auto");
        assert_eq!(config.service, "s3");
        assert_eq!(config.upload_expiry_secs, 900);
        assert_eq!(config.read_expiry_secs, 3600);
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = SignerConfig::builder()
            .access_key_id("AKID".into())
            .secret_access_key("secret".into())
            .account_id("acct".into())
            .bucket_name("media".into())
            .build();

        assert_eq!(config.access_key_id, "AKID");
        assert_eq!(config.bucket_name, "media");
        assert_eq!(config.region, "auto");
    }

    #[test]
    fn test_should_redact_secret_in_debug_output() {
        let config = SignerConfig::builder()
            .secret_access_key("super-secret".into())
            .build();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("***"));
    }
}
