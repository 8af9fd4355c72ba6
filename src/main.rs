//! Skin Disease Recognition System CLI
//!
//! This is the main entry point for the skin disease recognition system:
//! classify a photograph with the pre-trained CNN, look up disease
//! information, or run the HTTP recognition server.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use skinscan::backend::{backend_name, default_device};
use skinscan::catalog::{self, DiseaseCategory, CLASS_NAMES};
use skinscan::inference::Predictor;
use skinscan::server::state::ServerConfig;
use skinscan::utils::logging::{init_logging, LogConfig};

/// Skin Disease Recognition System
///
/// Classifies skin photographs into one of ten disease categories with a
/// pre-trained CNN and prints canned information about the result.
#[derive(Parser, Debug)]
#[command(name = "skinscan")]
#[command(version = "0.1.0")]
#[command(about = "Skin disease recognition from photographs", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP recognition server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Path to the trained model record file
        #[arg(short, long, default_value = "models/skin_disease_model.mpk")]
        model: PathBuf,
    },

    /// Classify a single image or a directory of images
    Infer {
        /// Path to input image or directory
        #[arg(short, long)]
        input: PathBuf,

        /// Path to the trained model record file
        #[arg(short, long, default_value = "models/skin_disease_model.mpk")]
        model: PathBuf,
    },

    /// Ask the health bot about a disease by name
    Ask {
        /// Free-text disease name, e.g. "ringworm"
        query: String,
    },

    /// List the known disease classes by category
    Classes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    };

    let _ = init_logging(&log_config);

    print_banner();

    match cli.command {
        Commands::Serve { port, host, model } => {
            let config = ServerConfig {
                model_path: model,
                ..ServerConfig::default()
            };
            skinscan::server::serve(config, &host, port).await?;
        }

        Commands::Infer { input, model } => {
            cmd_infer(&input, &model)?;
        }

        Commands::Ask { query } => {
            cmd_ask(&query);
        }

        Commands::Classes => {
            cmd_classes();
        }
    }

    Ok(())
}

fn print_banner() {
    println!(
        "{}",
        r#"
 ================================================
   Skin Disease Recognition System
   CNN classification with Burn + Rust
 ================================================
"#
        .green()
    );
}

fn cmd_infer(input: &Path, model: &Path) -> Result<()> {
    info!("Running inference");
    info!("  Input: {}", input.display());
    info!("  Model: {}", model.display());

    println!("{}", "Inference Configuration:".cyan().bold());
    println!("  Input:   {}", input.display());
    println!("  Model:   {}", model.display());
    println!("  Backend: {}", backend_name());
    println!();

    if !input.exists() {
        println!(
            "{} Input path not found: {}",
            "Error:".red(),
            input.display()
        );
        return Ok(());
    }

    println!("{}", "Loading model...".cyan());
    let device = default_device();
    let predictor = Predictor::load(model, &device)?;

    // Single file or directory of images
    let files: Vec<PathBuf> = if input.is_dir() {
        std::fs::read_dir(input)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .map(|e| ["jpg", "jpeg", "png"].contains(&e.to_lowercase().as_str()))
                    .unwrap_or(false)
            })
            .take(10) // Limit to 10 images
            .collect()
    } else {
        vec![input.to_path_buf()]
    };

    println!("{}", "Running inference...".cyan());
    println!();

    for file_path in &files {
        let result = predictor.predict_file(file_path)?;

        println!(
            "{}",
            file_path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .bold()
        );
        println!("  Predicted:  {}", result.class_name.green());
        println!("  Confidence: {:.1}%", result.confidence * 100.0);
        println!("  Time:       {:.2} ms", result.inference_time_ms);
        println!("  Top-{}:", result.top_k.len());
        for (i, score) in result.top_k.iter().enumerate() {
            println!(
                "    {}. {} ({:.1}%)",
                i + 1,
                score.class_name,
                score.probability * 100.0
            );
        }
        println!();
        println!("  {}", result.info);
        println!();
    }

    Ok(())
}

fn cmd_ask(query: &str) {
    println!("{}", "Health Bot:".cyan().bold());
    println!();

    match catalog::search(query) {
        Some(name) => {
            println!(
                "  {} ({})",
                name.green().bold(),
                DiseaseCategory::from_label(name)
            );
            println!();
            println!("  {}", catalog::disease_info(name));
        }
        None => {
            println!(
                "{} Disease not found. Please check spelling.",
                "Warning:".yellow()
            );
        }
    }
}

fn cmd_classes() {
    println!("{}", "Disease Categories:".cyan().bold());
    println!();

    let categories = [
        DiseaseCategory::Bacterial,
        DiseaseCategory::Fungal,
        DiseaseCategory::Parasitic,
        DiseaseCategory::Viral,
        DiseaseCategory::Precancerous,
    ];

    for category in categories {
        println!("{}", category.to_string().yellow().bold());
        for (idx, &name) in CLASS_NAMES.iter().enumerate() {
            if DiseaseCategory::from_label(name) == category {
                println!("  {:>2}. {}", idx, name);
            }
        }
        println!();
    }
}
