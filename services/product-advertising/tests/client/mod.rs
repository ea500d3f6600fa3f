use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{TimeZone, Utc};
use http::StatusCode;
use paasign_core::time::DateTime;
use paasign_core::{Context, Error, ErrorKind, HttpSend, Result};
use paasign_product_advertising::{
    Client, Config, Credential, RequestSigner, Region, StaticCredentialProvider,
};
use pretty_assertions::assert_eq;

/// RecordingHttpSend remembers every url it was asked to fetch.
#[derive(Debug, Clone)]
struct RecordingHttpSend {
    urls: Arc<Mutex<Vec<String>>>,
    status: StatusCode,
    body: Bytes,
    fail: bool,
}

impl RecordingHttpSend {
    fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            urls: Arc::default(),
            status,
            body: Bytes::from_static(body.as_bytes()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(StatusCode::OK, "")
        }
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl HttpSend for RecordingHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        assert_eq!(req.method(), http::Method::GET);
        assert!(req.body().is_empty());
        self.urls
            .lock()
            .expect("lock poisoned")
            .push(req.uri().to_string());

        if self.fail {
            return Err(Error::transport("failed to send request")
                .with_source(anyhow::anyhow!("connection reset by peer")));
        }

        Ok(http::Response::builder()
            .status(self.status)
            .body(self.body.clone())
            .expect("response must be valid"))
    }
}

fn test_time() -> DateTime {
    Utc.with_ymd_and_hms(2012, 4, 18, 14, 3, 5).unwrap()
}

fn test_credential() -> Credential {
    Credential::new("AKIDEXAMPLE", "secret", "tag-01")
}

fn test_client(region: Region, http: &RecordingHttpSend) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    Client::new(
        Context::new().with_http_send(http.clone()),
        StaticCredentialProvider::from(test_credential()),
        RequestSigner::new(region).with_time(test_time()),
    )
}

fn query_of(url: &str) -> HashMap<String, String> {
    let (_, query) = url.split_once('?').expect("url must have query");
    query
        .split('&')
        .map(|kv| {
            let (k, v) = kv.split_once('=').expect("pair must have =");
            (k.to_string(), v.to_string())
        })
        .collect()
}

#[tokio::test]
async fn test_lookup() -> anyhow::Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, "<ItemLookupResponse/>");
    let client = test_client(Region::US, &http);

    let body = client
        .lookup(&["B007HCCNJU", "0316067938"], "Accessories", "ASIN")
        .await?;
    assert_eq!(body, Bytes::from_static(b"<ItemLookupResponse/>"));

    let expected = RequestSigner::new(Region::US)
        .with_time(test_time())
        .build_url(
            &test_credential(),
            [
                ("Operation", "ItemLookup"),
                ("ItemId", "B007HCCNJU,0316067938"),
                ("ResponseGroup", "Accessories"),
                ("IdType", "ASIN"),
            ],
        )?;
    assert_eq!(http.urls(), vec![expected]);

    let query = query_of(&http.urls()[0]);
    assert_eq!(query["ItemId"], "B007HCCNJU%2C0316067938");
    Ok(())
}

#[tokio::test]
async fn test_search_without_query_omits_keywords() -> anyhow::Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, "<ItemSearchResponse/>");
    let client = test_client(Region::US, &http);

    client
        .search("", "Books", "Images,Small", "salesrank", None)
        .await?;

    let query = query_of(&http.urls()[0]);
    assert!(!query.contains_key("Keywords"));
    assert_eq!(query["Operation"], "ItemSearch");
    assert_eq!(query["SearchIndex"], "Books");
    assert_eq!(query["Sort"], "salesrank");
    Ok(())
}

#[tokio::test]
async fn test_search_with_query() -> anyhow::Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, "<ItemSearchResponse/>");
    let client = test_client(Region::UK, &http);

    client
        .search("Romance", "Books", "Images,Small", "salesrank", None)
        .await?;

    let url = &http.urls()[0];
    assert!(url.starts_with("http://ecs.amazonaws.co.uk/onca/xml?"));
    assert_eq!(query_of(url)["Keywords"], "Romance");
    Ok(())
}

#[tokio::test]
async fn test_search_extra_overrides_sort() -> anyhow::Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, "<ItemSearchResponse/>");
    let client = test_client(Region::US, &http);

    let extra = HashMap::from([("Sort".to_string(), "price".to_string())]);
    client
        .search("Romance", "Books", "Images,Small", "salesrank", Some(&extra))
        .await?;

    let url = &http.urls()[0];
    assert_eq!(query_of(url)["Sort"], "price");
    assert!(!url.contains("salesrank"));
    Ok(())
}

#[tokio::test]
async fn test_non_success_body_is_returned_verbatim() -> anyhow::Result<()> {
    let body = "<ItemLookupErrorResponse><Error><Code>RequestExpired</Code></Error></ItemLookupErrorResponse>";
    let http = RecordingHttpSend::new(StatusCode::BAD_REQUEST, body);
    let client = test_client(Region::US, &http);

    let got = client.lookup(&["B007HCCNJU"], "Small", "ASIN").await?;
    assert_eq!(got, Bytes::from_static(body.as_bytes()));
    Ok(())
}

#[tokio::test]
async fn test_transport_error_is_propagated() {
    let http = RecordingHttpSend::failing();
    let client = test_client(Region::US, &http);

    let err = client
        .lookup(&["B007HCCNJU"], "Small", "ASIN")
        .await
        .expect_err("transport fails");
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_network_error());
    assert_eq!(http.urls().len(), 1);
}

#[tokio::test]
async fn test_unknown_region_fails_before_transport() {
    let http = RecordingHttpSend::new(StatusCode::OK, "");
    let cfg = Config::new()
        .with_access_key_id("AKIDEXAMPLE")
        .with_secret_access_key("secret")
        .with_associate_tag("tag-01")
        .with_region("ZZ");

    let err = Client::from_config(Context::new().with_http_send(http.clone()), cfg)
        .expect_err("ZZ is not a region");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(http.urls().is_empty());
}

#[tokio::test]
async fn test_build_url_golden() -> anyhow::Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, "");
    let client = test_client(Region::US, &http);

    let url = client
        .build_url([("Operation", "ItemLookup"), ("ItemId", "B007HCCNJU")])
        .await?;
    assert_eq!(
        url,
        "http://ecs.amazonaws.com/onca/xml?AWSAccessKeyId=AKIDEXAMPLE&AssociateTag=tag-01&ItemId=B007HCCNJU&Operation=ItemLookup&Service=AWSEcommerceService&Timestamp=2012-04-18T14%3A03%3A05Z&Version=2011-08-01&Signature=nQqidR4fi4YAzjZaoCDJSOgQ%2FtNCqaTa7mY6E46h03Q%3D"
    );
    // Building a url never touches the transport.
    assert!(http.urls().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_build_url_keeps_awkward_params_intact() -> anyhow::Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, "");
    let client = test_client(Region::UK, &http);

    let params = [
        ("Operation", "ItemSearch"),
        ("Keywords", "a+b %20 café"),
        ("Title", "100%"),
        ("Nul", "x\0y"),
        ("Sort", ""),
        ("", "empty key"),
    ];

    let url = client.build_url(params).await?;
    let expected = RequestSigner::new(Region::UK)
        .with_time(test_time())
        .build_url(&test_credential(), params)?;
    assert_eq!(url, expected);
    assert!(url.contains("&Keywords=a%2Bb%20%2520%20caf%C3%A9&"));
    assert!(url.contains("&Sort=&"));
    Ok(())
}

#[tokio::test]
async fn test_client_is_shared_across_tasks() -> anyhow::Result<()> {
    let http = RecordingHttpSend::new(StatusCode::OK, "<ok/>");
    let client = test_client(Region::JP, &http);

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .lookup(&[format!("B00000000{i}")], "Small", "ASIN")
                .await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await??, Bytes::from_static(b"<ok/>"));
    }

    let urls = http.urls();
    assert_eq!(urls.len(), 8);
    assert!(urls
        .iter()
        .all(|u| u.starts_with("http://ecs.amazonaws.jp/onca/xml?")));
    Ok(())
}
