use bptf_classifieds::{Classifieds, ClassifiedsOptions};
use bptf_classifieds::request::{GetListingsParams, SearchParams};
use bptf_classifieds::enums::SearchIntent;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let sku = std::env::args().nth(1).unwrap_or_else(|| "The Team Captain".into());
    let classifieds = Classifieds::new(ClassifiedsOptions {
        token: std::env::var("USER_TOKEN").ok(),
        api_key: std::env::var("API_KEY").ok(),
    });

    let (tx, rx) = tokio::sync::oneshot::channel();

    // The outcome is delivered to the callback. The returned call resolves to None.
    classifieds.get_listings(GetListingsParams::new(sku.clone()).callback(move |result| {
        match result.map(|payload| payload.into_data()) {
            Ok(Some(snapshot)) => {
                for listing in snapshot.listings {
                    println!("{} {} for {:?}", listing.intent, snapshot.sku, listing.currencies);
                }
            },
            Ok(None) => println!("No snapshot returned"),
            Err(error) => eprintln!("{}: {error}", error.name()),
        }

        let _ = tx.send(());
    }))?.await;

    rx.await?;

    let search = classifieds.search(SearchParams {
        intent: Some(SearchIntent::Sell),
        item: Some(sku),
        ..Default::default()
    })?;

    if let Some(Ok(payload)) = search.await {
        let total = payload
            .into_data()
            .and_then(|response| response.response.sell)
            .map(|sell| sell.total)
            .unwrap_or_default();

        println!("{total} sell listings found");
    }

    Ok(())
}
