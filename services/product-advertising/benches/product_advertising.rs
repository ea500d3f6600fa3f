use chrono::{TimeZone, Utc};
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use once_cell::sync::Lazy;
use paasign_core::Context;
use paasign_product_advertising::{
    percent_encode, Client, Credential, Region, RequestSigner, StaticCredentialProvider,
};

criterion_group!(benches, bench);
criterion_main!(benches);

static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("must success")
});

const PARAMS: [(&str, &str); 5] = [
    ("Operation", "ItemSearch"),
    ("SearchIndex", "Books"),
    ("ResponseGroup", "Images,Small"),
    ("Sort", "salesrank"),
    ("Keywords", "Romance novels"),
];

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("product_advertising");
    let time = Utc.with_ymd_and_hms(2012, 4, 18, 14, 3, 5).unwrap();
    let cred = Credential::new("AKIDEXAMPLE", "secret", "tag-01");

    group.bench_function("percent_encode", |b| {
        b.iter(|| percent_encode("2012-04-18T14:03:05Z Romance novels, Images/Small"))
    });

    group.bench_function("build_url", |b| {
        let signer = RequestSigner::new(Region::US).with_time(time);

        b.iter(|| signer.build_url(&cred, PARAMS).expect("must success"))
    });

    group.bench_function("client_build_url", |b| {
        let client = Client::new(
            Context::new(),
            StaticCredentialProvider::from(cred.clone()),
            RequestSigner::new(Region::US).with_time(time),
        );

        b.to_async(&*RUNTIME).iter(|| async {
            client.build_url(PARAMS).await.expect("must success")
        })
    });

    group.finish()
}
