use std::env;

use log::{debug, warn};
use paasign_core::{Context, OsEnv};
use paasign_http_send_reqwest::ReqwestHttpSend;
use paasign_product_advertising::{Client, Config};

/// Initialize a client against the real service.
///
/// Credentials and region come from `AWSKey`, `AWSSecret`, `ATag` and `AWSRegion`.
fn init_live_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PAASIGN_PRODUCT_ADVERTISING_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);

    Some(Client::from_config(ctx, config).expect("config must be valid"))
}

#[tokio::test]
async fn test_live_lookup() -> anyhow::Result<()> {
    let Some(client) = init_live_client() else {
        warn!("PAASIGN_PRODUCT_ADVERTISING_TEST is not set, skipped");
        return Ok(());
    };

    let body = client.lookup(&["B007HCCNJU"], "Accessories", "ASIN").await?;
    debug!("got response: {}", String::from_utf8_lossy(&body));
    assert!(!body.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_live_search() -> anyhow::Result<()> {
    let Some(client) = init_live_client() else {
        warn!("PAASIGN_PRODUCT_ADVERTISING_TEST is not set, skipped");
        return Ok(());
    };

    let body = client
        .search("Romance", "Books", "Images,Small", "salesrank", None)
        .await?;
    debug!("got response: {}", String::from_utf8_lossy(&body));
    assert!(!body.is_empty());
    Ok(())
}
