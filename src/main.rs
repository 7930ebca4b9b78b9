use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a user's portfolio repository (default if no subcommand)
    Analyze {
        /// GitHub username (defaults to `username` from config)
        username: Option<String>,
        /// Emit the assessment as JSON instead of the terminal report
        #[arg(long)]
        json: bool,
    },
    /// Show every repository ranked by detection score
    Rank {
        /// GitHub username (defaults to `username` from config)
        username: Option<String>,
    },
    /// Open the detected portfolio repository in the browser
    Open {
        /// GitHub username (defaults to `username` from config)
        username: Option<String>,
    },
    /// Write a config file with the shipped scoring policy
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "GitHub portfolio detection and scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/folio/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Analyze {
        username: None,
        json: false,
    });

    // Load config
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = command {
        match folio::config::write_default_config(config_path) {
            Ok(path) => {
                println!("Wrote default config to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    let config = match folio::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let weights = config.detection.clone().unwrap_or_default();
    let rubric = config.rubric.clone().unwrap_or_default();

    // Validate scoring policy at startup
    if let Err(errors) = folio::scoring::validate_policy(&weights, &rubric) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let cli_username = match &command {
        Commands::Analyze { username, .. }
        | Commands::Rank { username }
        | Commands::Open { username } => username.clone(),
        Commands::Init => unreachable!(),
    };
    let username = match cli_username.or_else(|| config.username.clone()) {
        Some(u) => u,
        None => {
            eprintln!("No GitHub username given.");
            eprintln!("Pass one on the command line (folio analyze <username>)");
            eprintln!("or set it in ~/.config/folio/config.yaml:");
            eprintln!("  username: jdoe");
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Token is optional; it only raises the API rate limit
    let token = std::env::var("GITHUB_TOKEN").ok();
    if cli.verbose {
        eprintln!(
            "GitHub auth: {}",
            if token.is_some() {
                "token from GITHUB_TOKEN"
            } else {
                "unauthenticated"
            }
        );
    }

    let client = match folio::github::create_client(token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create GitHub client: {}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };

    let repositories = match folio::github::list_user_repos(&client, &username).await {
        Ok(repos) => repos,
        Err(e) => {
            eprintln!("Failed to list repositories: {}", e);
            std::process::exit(EXIT_NETWORK);
        }
    };
    if cli.verbose {
        eprintln!("Fetched {} repositories for {}", repositories.len(), username);
    }

    let use_colors = folio::output::should_use_colors();

    match command {
        Commands::Analyze { json, .. } => {
            let assessment = folio::scoring::analyze_repositories(
                &repositories,
                Some(username.as_str()),
                &weights,
                &rubric,
                Utc::now(),
            );

            if json {
                match serde_json::to_string_pretty(&assessment) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize assessment: {}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                }
            } else {
                println!(
                    "{}",
                    folio::output::format_assessment(&assessment, &username, use_colors)
                );
            }
        }
        Commands::Rank { .. } => {
            let ranked =
                folio::scoring::rank_candidates(&repositories, Some(username.as_str()), &weights);
            if cli.verbose {
                eprintln!(
                    "Detection threshold: {} (top candidate scores {})",
                    weights.threshold,
                    ranked.first().map(|c| c.score).unwrap_or(0)
                );
            }
            println!(
                "{}",
                folio::output::format_candidate_table(&ranked, use_colors)
            );
        }
        Commands::Open { .. } => {
            let detected =
                folio::scoring::detect_portfolio(&repositories, Some(username.as_str()), &weights);
            let Some(result) = detected else {
                eprintln!("No portfolio repository found for {}.", username);
                std::process::exit(EXIT_CONFIG);
            };
            let url = result
                .repository
                .html_url
                .clone()
                .unwrap_or_else(|| {
                    format!("https://github.com/{}/{}", username, result.repository.name)
                });
            if let Err(e) = folio::browser::open_url(&url) {
                eprintln!("Failed to open browser: {}", e);
                std::process::exit(EXIT_NETWORK);
            }
            println!("Opening {} in browser: {}", result.repository.name, url);
        }
        Commands::Init => unreachable!(),
    }

    std::process::exit(EXIT_SUCCESS);
}
