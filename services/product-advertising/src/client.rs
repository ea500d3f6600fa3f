use std::collections::HashMap;

use bytes::Bytes;
use http::request::Parts;
use log::{debug, warn};
use paasign_core::{Context, Error, ProvideCredential, Result, Signer};

use crate::constants::*;
use crate::encode::percent_encode;
use crate::provide_credential::{EnvCredentialProvider, StaticCredentialProvider};
use crate::{Config, Credential, Region, RequestSigner};

/// Client for the Product Advertising API.
///
/// Every call signs a fresh request with the current time. The client holds no
/// mutable state besides the cached credential, so it can be shared across
/// tasks.
///
/// ```no_run
/// use paasign_core::Context;
/// use paasign_http_send_reqwest::ReqwestHttpSend;
/// use paasign_product_advertising::{Client, Config};
///
/// # async fn example() -> paasign_core::Result<()> {
/// let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
/// let cfg = Config::new()
///     .with_access_key_id("AKIDEXAMPLE")
///     .with_secret_access_key("secret")
///     .with_associate_tag("tag-01")
///     .with_region("US");
///
/// let client = Client::from_config(ctx, cfg)?;
/// let body = client.lookup(&["B007HCCNJU"], "Accessories", "ASIN").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    region: Region,
    signer: Signer<Credential>,
}

impl Client {
    /// Create a new client.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
        signer: RequestSigner,
    ) -> Self {
        Self {
            region: signer.region(),
            signer: Signer::new(ctx, provider, signer),
        }
    }

    /// Create a new client from config.
    ///
    /// The region is required. If the config carries both access key id and
    /// secret, they are used as is, otherwise credentials are loaded from env
    /// on first use.
    pub fn from_config(ctx: Context, config: Config) -> Result<Self> {
        let region: Region = config
            .region
            .as_deref()
            .ok_or_else(|| Error::config_invalid("region is required"))?
            .parse()?;
        let signer = RequestSigner::new(region);

        let client = match (config.access_key_id, config.secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => {
                let cred = Credential {
                    access_key_id,
                    secret_access_key,
                    associate_tag: config.associate_tag.unwrap_or_default(),
                };
                Self::new(ctx, StaticCredentialProvider::from(cred), signer)
            }
            _ => Self::new(ctx, EnvCredentialProvider::new(), signer),
        };
        Ok(client)
    }

    /// The region requests are sent to.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Build the signed url for `params` without sending it.
    pub async fn build_url<K, V>(&self, params: impl IntoIterator<Item = (K, V)>) -> Result<String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let parts = self.sign(params).await?;
        Ok(parts.uri.to_string())
    }

    /// Perform an `ItemLookup` request.
    ///
    /// ```no_run
    /// # async fn example(client: paasign_product_advertising::Client) -> paasign_core::Result<()> {
    /// let body = client
    ///     .lookup(&["01289328", "2837423"], "Medium,Accessories", "ASIN")
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn lookup<S: AsRef<str>>(
        &self,
        item_ids: &[S],
        response_groups: &str,
        id_type: &str,
    ) -> Result<Bytes> {
        let item_ids = item_ids
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(",");

        self.get([
            (OPERATION, OPERATION_ITEM_LOOKUP),
            (ITEM_ID, item_ids.as_str()),
            (RESPONSE_GROUP, response_groups),
            (ID_TYPE, id_type),
        ])
        .await
    }

    /// Perform an `ItemSearch` request.
    ///
    /// `Keywords` is only sent when `query` is not empty. Pairs in `extra` are
    /// applied last and overwrite the parameters built from the other
    /// arguments.
    pub async fn search(
        &self,
        query: &str,
        search_index: &str,
        response_groups: &str,
        sort: &str,
        extra: Option<&HashMap<String, String>>,
    ) -> Result<Bytes> {
        self.get(search_params(
            query,
            search_index,
            response_groups,
            sort,
            extra,
        ))
        .await
    }

    async fn sign<K, V>(&self, params: impl IntoIterator<Item = (K, V)>) -> Result<Parts>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        // SigningRequest decodes this query with form_urlencoded, so every byte
        // must come back unchanged: keep encoding `+` and `%`.
        let mut uri = format!("http://{}{}", self.region.domain(), REQUEST_PATH);
        for (i, (k, v)) in params.into_iter().enumerate() {
            uri.push(if i == 0 { '?' } else { '&' });
            uri.push_str(&percent_encode(k.as_ref()));
            uri.push('=');
            uri.push_str(&percent_encode(v.as_ref()));
        }

        let (mut parts, _) = http::Request::get(uri).body(())?.into_parts();
        self.signer.sign(&mut parts).await?;
        Ok(parts)
    }

    async fn get<K, V>(&self, params: impl IntoIterator<Item = (K, V)>) -> Result<Bytes>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let parts = self.sign(params).await?;
        let req = http::Request::from_parts(parts, Bytes::new());

        let resp = self.signer.context().http_send(req).await?;
        let status = resp.status();
        if status.is_success() {
            debug!("got response with status {status}");
        } else {
            warn!("got response with non-success status {status}");
        }

        Ok(resp.into_body())
    }
}

/// Build `ItemSearch` params, `extra` wins on conflicts.
fn search_params(
    query: &str,
    search_index: &str,
    response_groups: &str,
    sort: &str,
    extra: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    let mut params = HashMap::from([
        (OPERATION.to_string(), OPERATION_ITEM_SEARCH.to_string()),
        (SEARCH_INDEX.to_string(), search_index.to_string()),
        (RESPONSE_GROUP.to_string(), response_groups.to_string()),
        (SORT.to_string(), sort.to_string()),
    ]);
    if !query.is_empty() {
        params.insert(KEYWORDS.to_string(), query.to_string());
    }
    if let Some(extra) = extra {
        params.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    params
}
