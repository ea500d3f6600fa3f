use anyhow::Result;
use paasign_core::{Context, OsEnv};
use paasign_http_send_reqwest::ReqwestHttpSend;
use paasign_product_advertising::{Client, Config};

/// Look up an item with credentials from `AWSKey`, `AWSSecret`, `ATag` and `AWSRegion`.
///
/// ```shell
/// RUST_LOG=debug cargo run --example item_lookup -- B007HCCNJU
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let item_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "B007HCCNJU".to_string());

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    let client = Client::from_config(ctx, config)?;

    let body = client.lookup(&[item_id], "Accessories", "ASIN").await?;
    println!("{}", String::from_utf8_lossy(&body));

    Ok(())
}
