use bptf_classifieds::{Classifieds, ClassifiedsOptions};
use bptf_classifieds::request::GetUserLimitsParams;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let classifieds = Classifieds::new(ClassifiedsOptions {
        token: std::env::var("USER_TOKEN").ok(),
        api_key: None,
    });
    let call = classifieds.get_user_limits(GetUserLimitsParams::default())?;

    if let Some(result) = call.await {
        match result?.into_data() {
            Some(response) => {
                let limits = response.listings;

                println!("Using {} of {} listing slots ({} remaining)", limits.used, limits.total, limits.remaining());
            },
            None => println!("No limits returned"),
        }
    }

    Ok(())
}
