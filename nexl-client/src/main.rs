use anyhow::{anyhow, Result};
use futures::future::join_all;
use std::env;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use nexl_client::constants::defaults;
use nexl_client::{ConfigManager, DeploymentClient, NexlClient, NexlResult};

const USAGE: &str = "usage: nexl-client <path> [expression...]\n       nexl-client --deploy <expression...>";

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("nexl_client=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (first, rest) = args.split_first().ok_or_else(|| anyhow!(USAGE))?;

    let config_dir = env::var("NEXL_CONFIG_DIR").unwrap_or_else(|_| defaults::CONFIG_DIR.to_string());
    let config_manager = ConfigManager::new(config_dir).await?;
    let client = NexlClient::new(config_manager.get_current_config())?;

    let results: Vec<NexlResult<String>> = if first == "--deploy" {
        if rest.is_empty() {
            return Err(anyhow!(USAGE));
        }
        let deployment = DeploymentClient::new(client);
        info!("Evaluating {} expression(s) against {}", rest.len(), deployment.path());
        join_all(rest.iter().map(|expression| deployment.call(expression))).await
    } else if rest.is_empty() {
        vec![client.call(first, "").await]
    } else {
        info!("Evaluating {} expression(s) against {}", rest.len(), first);
        join_all(rest.iter().map(|expression| client.call(first, expression))).await
    };

    let mut failures = 0;
    for result in results {
        match result {
            Ok(body) => println!("{}", body),
            Err(e) => {
                error!("NEXL call failed: {}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(anyhow!("{} NEXL call(s) failed", failures));
    }

    Ok(())
}
