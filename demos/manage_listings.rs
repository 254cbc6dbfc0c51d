use bptf_classifieds::{Classifieds, ClassifiedsOptions, Currencies, Payload};
use bptf_classifieds::request::{
    CreatableItem,
    CreatableListing,
    CreateListingsParams,
    DeleteListingsParams,
    GetMyListingsParams,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let classifieds = Classifieds::new(ClassifiedsOptions {
        token: std::env::var("USER_TOKEN").ok(),
        api_key: None,
    });
    let listing = CreatableListing::buy(
        CreatableItem::new("Unique", "Trencher's Tunic"),
        Currencies::metal(1.33),
    ).details("Buying Trencher's Tunic for 1.33 ref!");

    if let Some(result) = classifieds.create_listings(CreateListingsParams::new(vec![listing]))?.await {
        if let Payload::Data(response) = result? {
            for (name, result) in response.listings {
                println!("{name}: created {}", result.is_created());
            }
        }
    }

    let ids = match classifieds.get_my_listings(GetMyListingsParams::default())?.await {
        Some(result) => result?
            .into_data()
            .map(|response| response.listings.into_iter().map(|listing| listing.id).collect::<Vec<_>>())
            .unwrap_or_default(),
        None => Vec::new(),
    };

    println!("{} listings", ids.len());

    if ids.is_empty() {
        return Ok(());
    }

    if let Some(result) = classifieds.delete_listings(DeleteListingsParams::new(ids))?.await {
        match result? {
            Payload::Data(response) => println!("Deleted {} listings", response.deleted),
            Payload::Status(status) => println!("Responded with {status}"),
        }
    }

    Ok(())
}
