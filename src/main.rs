//! # Insignia CLI
//!
//! Command-line interface for branded QR code generation.
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! insignia serve --listen 0.0.0.0:8080 --logo assets/logo.png
//!
//! # Generate a branded code and save it as PNG
//! insignia generate "https://example.com" --size 800 --png code.png
//!
//! # Generate without the logo, base64 to stdout
//! insignia generate "https://example.com" --no-logo
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use insignia::{
    InsigniaError,
    qr::{self, EncodingRequest},
    server::{self, ServerConfig},
};

/// Insignia - Branded QR code generator
#[derive(Parser, Debug)]
#[command(name = "insignia")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Path to the brand logo image
        #[arg(long, default_value = "assets/logo.png")]
        logo: PathBuf,
    },

    /// Generate a single QR code
    Generate {
        /// Text content to encode
        content: String,

        /// Output size in pixels (0 = default 500, clamped to 100-2000)
        #[arg(long, default_value_t = 0)]
        size: u32,

        /// Skip the logo overlay (uses low error correction)
        #[arg(long)]
        no_logo: bool,

        /// Path to the brand logo image
        #[arg(long, default_value = "assets/logo.png")]
        logo: PathBuf,

        /// Write the PNG to a file instead of printing base64 to stdout
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), InsigniaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { listen, logo } => {
            let config = ServerConfig {
                listen_addr: listen,
                logo_path: logo,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))
        }
        Commands::Generate {
            content,
            size,
            no_logo,
            logo,
            png,
        } => {
            let use_logo = !no_logo;
            let request = EncodingRequest::new(&content, size, use_logo);
            let logo_img = if use_logo { qr::logo::load(&logo) } else { None };

            match png {
                Some(path) => {
                    let bytes = qr::generate_png(&request, logo_img.as_ref())?;
                    std::fs::write(&path, &bytes)?;
                    println!(
                        "Saved {}x{} QR code to {}",
                        request.size(),
                        request.size(),
                        path.display()
                    );
                }
                None => {
                    let encoded = qr::generate(&request, logo_img.as_ref())?;
                    println!("{}", encoded);
                }
            }

            Ok(())
        }
    }
}
