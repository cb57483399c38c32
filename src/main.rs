use dotenvy::dotenv;
use std::sync::Arc;
use storefront::client::{ApiClient, AuthContext, UreqTransport};
use storefront::config::{self, env::get_api_token};
use storefront::errors::Result;
use storefront::pages::PageContext;
use storefront::pages::admin::DashboardPage;
use storefront::pages::storefront::HomePage;
use storefront::ui::{ConsoleDialogs, MemoryBlobStore, MemoryNavigator, ViewState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;

    // 4. Build the client; the token comes from the environment only
    let token = get_api_token();
    if token.is_none() {
        info!("STOREFRONT_TOKEN not set, admin requests will be anonymous.");
    }
    let client = ApiClient::new(
        app_config.api.base_url.clone(),
        AuthContext::new(token),
        Arc::new(UreqTransport::new()),
    );
    info!("Using API at {}", client.base_url());

    let route = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let ctx = PageContext {
        client,
        config: Arc::new(app_config),
        dialogs: Arc::new(ConsoleDialogs),
        navigator: Arc::new(MemoryNavigator::at(&route, "")),
        blobs: Arc::new(MemoryBlobStore::new()),
    };

    // 5. Render the requested page
    match route.as_str() {
        "/admin" => {
            let mut page = DashboardPage::new(ctx);
            page.load().await;
            match page.state() {
                ViewState::Ready(stats) => {
                    println!("Sản phẩm: {}", stats.products);
                    println!("Đơn hàng: {}", stats.orders);
                    println!("Doanh thu: {}", stats.revenue_display());
                }
                ViewState::Failed(message) => println!("{message}"),
                ViewState::Loading => {}
            }
        }
        "/" => {
            let mut home = HomePage::new(&ctx);
            home.load().await;
            print!("{}", home.render());
        }
        other => warn!("No page is rendered for route {}", other),
    }

    Ok(())
}
