use std::fmt::{Debug, Formatter};

use crate::constants::*;
use paasign_core::{utils::Redact, Context};

/// Config carries all the configuration for Product Advertising API clients.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ENV_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ENV_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `associate_tag` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ENV_ASSOCIATE_TAG`]
    pub associate_tag: Option<String>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ENV_REGION`]
    ///
    /// There is no default region.
    pub region: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key_id
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_access_key
    pub fn with_secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Set associate_tag
    pub fn with_associate_tag(mut self, associate_tag: impl Into<String>) -> Self {
        self.associate_tag = Some(associate_tag.into());
        self
    }

    /// Set region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(ENV_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ENV_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ENV_ASSOCIATE_TAG) {
            self.associate_tag.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ENV_REGION) {
            self.region.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("associate_tag", &Redact::from(&self.associate_tag))
            .field("region", &self.region)
            .finish()
    }
}
