use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "mocks-cli")]
#[command(about = "Manage mocks on a running mocknroll server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a mock (path is relative to the server's prefix)
    Add {
        path: String,

        #[arg(short, long, default_value_t = 200)]
        code: u16,

        /// Response body as JSON
        #[arg(short, long)]
        body: String,
    },
    /// List registered mocks
    List,
    /// Remove every mock
    Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let endpoint = format!("{}/mocks", cli.url.trim_end_matches('/'));

    match cli.command {
        Commands::Add { path, code, body } => {
            let body: Value = serde_json::from_str(&body)?;
            let res = client
                .post(&endpoint)
                .json(&json!({ "path": path, "code": code, "body": body }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::List => {
            let res = client.get(&endpoint).send().await?;
            print_response(res).await?;
        }
        Commands::Clear => {
            let res = client.delete(&endpoint).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: control API returned status {}", status);
        if !text.is_empty() {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    if text.is_empty() {
        println!("{}", status);
        return Ok(());
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
