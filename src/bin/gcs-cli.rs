//! Command-line client for a running GCS gateway.

use clap::{Parser, Subcommand};
use gcs_gateway::message::{BoundingBox, DetectedObject};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gcs-cli")]
#[command(about = "Command-line client for the GCS gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the controller status
    Status,
    /// Fetch the current controller tick
    Tick,
    /// Fetch the latest capture
    Capture,
    /// Send a detected object to the controller
    Message {
        #[arg(long)]
        label: String,
        #[arg(long, default_value_t = 0.0)]
        confidence: f64,
        #[arg(long, default_value_t = 0)]
        track_id: u32,
        /// Bounding box as x,y,width,height
        #[arg(long, value_delimiter = ',')]
        bbox: Option<Vec<f64>>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Status => client.get(format!("{}/api/v1/obc/status", base)).send().await?,
        Commands::Tick => client.get(format!("{}/api/v1/obc/tick", base)).send().await?,
        Commands::Capture => client.get(format!("{}/api/v1/obc/capture", base)).send().await?,
        Commands::Message {
            label,
            confidence,
            track_id,
            bbox,
        } => {
            let bounding_box = match bbox.as_deref() {
                None => None,
                Some(&[x, y, width, height]) => Some(BoundingBox { x, y, width, height }),
                Some(_) => return Err("--bbox expects x,y,width,height".into()),
            };
            let message = DetectedObject {
                label,
                confidence,
                track_id,
                bounding_box,
            };
            client
                .post(format!("{}/api/v1/obc/message", base))
                .json(&message)
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
