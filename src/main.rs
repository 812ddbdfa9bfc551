use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use loopx::config::{Config, PipelineConfig};
use loopx::embeddings::onnx::LazyEmbedder;

/// loopx: research gap discovery.
///
/// Mines the limitation statements of a batch of PDF papers, groups
/// similar ones, and reports each group as a recurring research gap.
#[derive(Parser)]
#[command(name = "loopx", version, about)]
struct Cli {
    /// JSON file overriding pipeline thresholds and vocabularies
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Clustering knobs shared by `cluster` and `analyze`.
#[derive(Args)]
struct ClusterArgs {
    /// Upper bound on the number of clusters (default: 6)
    #[arg(long)]
    max_clusters: Option<usize>,

    /// Smallest cluster reported as a gap (default: 3)
    #[arg(long)]
    min_cluster_size: Option<usize>,

    /// Seed for k-means initialisation (default: 42)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract candidate sentences from a directory of PDFs
    Extract {
        /// Directory containing the papers (default: LOOPX_PAPERS_DIR or data/papers)
        #[arg(long)]
        papers_dir: Option<PathBuf>,

        /// Where to write the sentences, one per line
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Cluster extracted sentences into research gaps and write the reports
    Cluster {
        /// Sentence file produced by `extract`
        #[arg(long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        tuning: ClusterArgs,
    },

    /// Run extraction and clustering end to end
    Analyze {
        /// Directory containing the papers (default: LOOPX_PAPERS_DIR or data/papers)
        #[arg(long)]
        papers_dir: Option<PathBuf>,

        #[command(flatten)]
        tuning: ClusterArgs,
    },

    /// Display a previously generated gap report
    Show {
        /// JSON report to display
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Download the sentence embedding model (~90 MB)
    DownloadModel,

    /// Show configured paths, model status, and existing reports
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("loopx=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let pipeline_config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };

    match cli.command {
        Commands::Extract { papers_dir, output } => {
            let papers_dir = papers_dir.unwrap_or_else(|| config.papers_dir.clone());
            let output = output.unwrap_or_else(|| config.limitations_path());

            println!("Extracting sentences from {}...", papers_dir.display());
            let sentences = loopx::pipeline::extract_papers(&papers_dir, &pipeline_config)?;
            loopx::pipeline::write_limitations(&output, &sentences)?;

            println!(
                "\n{}",
                format!("Extracted {} candidate sentences.", sentences.len()).bold()
            );
            println!("Saved to {}", output.display());
        }

        Commands::Cluster { input, tuning } => {
            let pipeline_config = apply_tuning(pipeline_config, &tuning)?;
            let input = input.unwrap_or_else(|| config.limitations_path());

            let candidates = loopx::pipeline::read_limitations(&input)?;
            info!(path = %input.display(), lines = candidates.len(), "Loaded sentence file");

            run_clustering(&config, &pipeline_config, &candidates).await?;
        }

        Commands::Analyze { papers_dir, tuning } => {
            let pipeline_config = apply_tuning(pipeline_config, &tuning)?;
            let papers_dir = papers_dir.unwrap_or_else(|| config.papers_dir.clone());

            println!("Analyzing papers in {}...", papers_dir.display());
            let candidates = loopx::pipeline::extract_papers(&papers_dir, &pipeline_config)?;
            loopx::pipeline::write_limitations(&config.limitations_path(), &candidates)?;
            println!("  {} candidate sentences extracted", candidates.len());

            run_clustering(&config, &pipeline_config, &candidates).await?;
        }

        Commands::Show { input } => {
            let input = input.unwrap_or_else(|| config.json_report_path());
            let gaps = loopx::output::report::read_json_report(&input)?;
            loopx::output::terminal::display_gaps(&gaps);
        }

        Commands::DownloadModel => {
            let model_dir = &config.model_dir;

            println!("Downloading sentence embedding model...");
            println!("  Destination: {}", model_dir.display());

            loopx::embeddings::download::download_model(model_dir).await?;

            println!("\n{}", "Model downloaded successfully.".bold());
            println!("You can now run `loopx analyze`.");
        }

        Commands::Status => {
            loopx::status::show(&config)?;
        }
    }

    Ok(())
}

/// Apply command-line overrides on top of the loaded pipeline config.
fn apply_tuning(mut pipeline_config: PipelineConfig, tuning: &ClusterArgs) -> Result<PipelineConfig> {
    if let Some(max_clusters) = tuning.max_clusters {
        pipeline_config.max_clusters = max_clusters;
    }
    if let Some(min_cluster_size) = tuning.min_cluster_size {
        pipeline_config.min_cluster_size = min_cluster_size;
    }
    if let Some(seed) = tuning.seed {
        pipeline_config.seed = seed;
    }
    pipeline_config.validate()?;
    Ok(pipeline_config)
}

/// Stage 2 plus reporting: filter, cluster, write both reports, display.
async fn run_clustering(
    config: &Config,
    pipeline_config: &PipelineConfig,
    candidates: &[String],
) -> Result<()> {
    // The model is only loaded if the normal clustering path is taken
    let embedder = LazyEmbedder::new(&config.model_dir);
    let analysis = loopx::pipeline::analyze(candidates, &embedder, pipeline_config).await?;

    let text_path = config.text_report_path();
    let json_path = config.json_report_path();
    loopx::output::report::write_reports(&analysis.gaps, &text_path, &json_path)?;

    loopx::output::terminal::display_summary(&analysis);
    loopx::output::terminal::display_gaps(&analysis.gaps);
    print_artifacts(&text_path, &json_path);
    Ok(())
}

fn print_artifacts(text_path: &Path, json_path: &Path) {
    println!("{}", "Research-gap analysis completed successfully.".bold());
    println!("  Text report: {}", text_path.display());
    println!("  JSON report: {}", json_path.display());
}
