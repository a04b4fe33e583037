use corkboard::client::Client;
use corkboard::provider::{Provider, RefreshScope};
use corkboard::session::Session;
use corkboard::utils::{pause, print_state};

// TODO: change these values with yours
const URL: &str = "https://my.server.com/api/v1";
const USER_ID: &str = "john";
const TOKEN: &str = "a_secret_bearer_token";

#[tokio::main]
async fn main() {
    env_logger::init();

    println!("This will fetch your planner documents from the backend and print them.");
    println!("Make sure the constants at the top of this file are set to your server:");
    println!("  * URL = {}", URL);
    println!("  * USER_ID = {}", USER_ID);
    pause();

    let session = Session::new(USER_ID.to_string(), TOKEN.to_string());
    let client = Client::new_with_session(URL, session).unwrap();
    let mut provider = Provider::new(client);

    provider.refresh(RefreshScope::ALL).await.unwrap();

    println!("---- The planner, as persisted on the backend ----");
    print_state(provider.state());
    println!("Settings: {:?}", provider.settings());
}
