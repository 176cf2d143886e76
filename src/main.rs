use clap::Parser;
use log::{debug, info};

use repository_browser::{
    BrowserSession, DEFAULT_PAGE_SIZE, FetcherConfig, GITHUB_API_ENDPOINT, RestFetcher, StdResult,
    TerminalView,
};

/// Command line arguments for the repository browser
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// GitHub account whose repositories are listed
    #[arg(short, long, default_value = "TaiwoEnoch")]
    username: String,

    /// API token attached to the listing request
    #[arg(long, env = "GITHUB_API_TOKEN", hide_env_values = true)]
    github_api_token: Option<String>,

    /// Number of repositories shown per page
    #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    info!("Starting repository browser");
    let args = Args::parse();

    let config = FetcherConfig::new(&args.username, args.github_api_token, GITHUB_API_ENDPOINT);
    let fetcher = RestFetcher::try_new(config)?;
    let mut session = BrowserSession::new(args.page_size);
    session.activate(&fetcher).await;
    debug!("Load status after activation: {}", session.status());

    TerminalView::new(&args.username).run(&mut session).await?;
    info!("Browsing completed");

    Ok(())
}
