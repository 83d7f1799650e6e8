use std::path::Path;

use workload_deployer::controllers::deployer::Deployer;
use workload_deployer::models::workload::WorkloadTemplate;
use workload_deployer::utils::client::client_from_kubeconfig;
use workload_deployer::utils::error::Error;

/// Path to the kubeconfig credential bundle, relative to the invocation directory.
const KUBECONFIG_PATH: &str = "./kubeconfig";

#[tokio::main]
async fn main() {
    env_logger::init();

    // Every failure below is terminal; the decision to exit lives here and
    // nowhere in the library code.
    if let Err(error) = run().await {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let client = client_from_kubeconfig(Path::new(KUBECONFIG_PATH)).await?;

    let deployer = Deployer::new(client, WorkloadTemplate::default());
    let name = deployer.create_deployment().await?;

    println!("Created deployment {}", name);

    Ok(())
}
