use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tiktok_profile::session::LOADING_TEXT;
use tiktok_profile::{Presenter, RegionTable, Session, TtClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tiktok-profile", version, about = "Show a TikTok user's public profile")]
struct Cli {
    /// Username, without the leading `@`.
    username: String,
    #[arg(long, help = "Save the profile picture as <handle>_profile_pic.jpg")]
    save_picture: bool,
    #[arg(long, help = "Directory the profile picture is written to")]
    output_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match TtClient::builder().build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut presenter = Presenter::new(client.clone(), Arc::new(RegionTable::builtin()));
    if let Some(dir) = cli.output_dir {
        presenter = presenter.output_dir(dir);
    }
    let session = Session::new(client, presenter);

    eprintln!("{LOADING_TEXT}");
    let pending = match session.submit(cli.username, cli.save_picture) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = pending.wait().await;
    println!("{outcome}");
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
