use std::collections::HashMap;
use std::fmt::Write;
use std::mem;

use async_trait::async_trait;
use http::request::Parts;
use http::uri::{Authority, Scheme};
use http::Method;
use log::debug;
use paasign_core::hash::base64_hmac_sha256;
use paasign_core::time::{format_timestamp, now, DateTime};
use paasign_core::{Context, Error, Result, SignRequest, SigningRequest};

use crate::constants::*;
use crate::encode::percent_encode;
use crate::{Credential, Region};

/// RequestSigner that implements the Product Advertising API request signature.
///
/// The signature is a base64 encoded HMAC-SHA256 over
///
/// ```text
/// GET
/// <domain>
/// /onca/xml
/// <canonical query string>
/// ```
///
/// and is appended to the query as `Signature`.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    region: Region,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given region.
    pub fn new(region: Region) -> Self {
        Self { region, time: None }
    }

    /// Create a new signer from a two letter region code like `US`.
    ///
    /// Unknown codes fail with [`paasign_core::ErrorKind::ConfigInvalid`].
    pub fn from_region_code(code: &str) -> Result<Self> {
        Ok(Self::new(code.parse()?))
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests, the service rejects
    /// stale timestamps. Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The region this signer signs for.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Build the signed request url for `params`.
    ///
    /// Authentication parameters (`AWSAccessKeyId`, `Service`, `AssociateTag`,
    /// `Version`, `Timestamp`) are merged in and overwrite caller supplied
    /// values of the same name.
    pub fn build_url<K, V>(
        &self,
        cred: &Credential,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let query = self.signed_query(cred, params)?;

        let mut url = format!("http://{}{}?", self.region.domain(), REQUEST_PATH);
        write_query(&mut url, &query)?;
        Ok(url)
    }

    /// Merge, canonicalize and sign `params`.
    ///
    /// Returns the encoded query pairs in canonical order with `Signature` last.
    fn signed_query<K, V>(
        &self,
        cred: &Credential,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Vec<(String, String)>>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let now = self.time.unwrap_or_else(now);

        let mut params: HashMap<String, String> = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        params.insert(AWS_ACCESS_KEY_ID.into(), cred.access_key_id.clone());
        params.insert(SERVICE.into(), SERVICE_NAME.into());
        params.insert(ASSOCIATE_TAG.into(), cred.associate_tag.clone());
        params.insert(VERSION.into(), API_VERSION.into());
        params.insert(TIMESTAMP.into(), format_timestamp(now));

        let mut query = canonicalize_query(params);
        let canonical_query = {
            let mut s = String::new();
            write_query(&mut s, &query)?;
            s
        };
        debug!("calculated canonical query string: {canonical_query}");

        let string_to_sign = string_to_sign(self.region.domain(), &canonical_query)?;
        debug!("calculated string to sign: {string_to_sign}");

        let signature = base64_hmac_sha256(
            cred.secret_access_key.as_bytes(),
            string_to_sign.as_bytes(),
        );
        query.push((SIGNATURE.into(), percent_encode(&signature).into_owned()));

        Ok(query)
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        parts: &mut Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        if parts.method != Method::GET {
            return Err(Error::request_invalid(format!(
                "only {REQUEST_METHOD} requests can be signed, got {}",
                parts.method
            )));
        }

        let mut req = SigningRequest::build(parts)?;
        req.scheme = Scheme::HTTP;
        req.authority = Authority::from_static(self.region.domain());
        req.path = REQUEST_PATH.to_string();
        req.query = self.signed_query(cred, mem::take(&mut req.query))?;

        req.apply(parts)
    }
}

/// Sort params by key and percent encode every key and value.
///
/// Keys are compared byte-wise, which is what `Ord for String` does.
pub fn canonicalize_query(params: HashMap<String, String>) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = params.into_iter().collect();
    pairs.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    pairs
        .into_iter()
        .map(|(k, v)| {
            (
                percent_encode(&k).into_owned(),
                percent_encode(&v).into_owned(),
            )
        })
        .collect()
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// "GET" + "\n" +
/// Domain + "\n" +
/// "/onca/xml" + "\n" +
/// CanonicalQueryString
/// ```
pub fn string_to_sign(domain: &str, canonical_query: &str) -> Result<String> {
    let mut s = String::with_capacity(
        REQUEST_METHOD.len() + domain.len() + REQUEST_PATH.len() + canonical_query.len() + 3,
    );
    writeln!(s, "{REQUEST_METHOD}")?;
    writeln!(s, "{domain}")?;
    writeln!(s, "{REQUEST_PATH}")?;
    write!(s, "{canonical_query}")?;
    Ok(s)
}

fn write_query(f: &mut String, query: &[(String, String)]) -> Result<()> {
    for (i, (k, v)) in query.iter().enumerate() {
        if i > 0 {
            f.push('&');
        }
        write!(f, "{k}={v}")?;
    }
    Ok(())
}
