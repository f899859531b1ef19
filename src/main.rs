use std::io::Read;
use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use jobform::config::{self, mask_secret, Config, RelayMode, DEFAULT_HOST, DEFAULT_PORT};
use jobform::form::FieldDecoder;
use jobform::models::AppState;
use jobform::report::{render_html, render_text, Report};
use jobform::utils::parse_urlencoded_pairs;

fn load_config(env_file: Option<&str>) -> Config {
    config::load_env_file(env_file);
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(%e, "Invalid configuration");
            eprintln!("{}: {}", yansi::Paint::red("Invalid configuration"), e);
            process::exit(1);
        }
    }
}

async fn start_server(config: Config, host: &str, port: u16) {
    if let Some(reason) = config.relay.missing() {
        tracing::warn!(mode = %config.relay.mode, reason, "Relay is not configured; submissions will only be logged");
    }

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    };

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = jobform::build_router(state);
    tracing::info!(%addr, "Starting job application server");
    println!(
        "{} {}",
        yansi::Paint::new("Application form running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn print_config(config: &Config) {
    let relay = &config.relay;
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }

    let unset = || "(not set)".to_string();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["Relay mode".to_string(), relay.mode.to_string()]);
    table.add_row(vec!["Recipient".to_string(), relay.recipient_email.clone()]);
    table.add_row(vec!["CC".to_string(), relay.cc_email.clone().unwrap_or_else(unset)]);
    table.add_row(vec!["Sender".to_string(), relay.sender_email.clone()]);
    table.add_row(vec!["Subject".to_string(), relay.subject.clone()]);
    table.add_row(vec!["Form relay URL".to_string(), relay.form_relay_url.clone().unwrap_or_else(unset)]);
    table.add_row(vec!["Email API URL".to_string(), relay.email_api_url.clone()]);
    table.add_row(vec![
        "Email API key".to_string(),
        relay.email_api_key.as_deref().map(mask_secret).unwrap_or_else(unset),
    ]);
    table.add_row(vec!["Relay timeout".to_string(), format!("{}s", relay.timeout.as_secs())]);
    table.add_row(vec!["Max group index".to_string(), config.max_group_index.to_string()]);
    table.add_row(vec!["Max group slots".to_string(), config.max_group_slots.to_string()]);
    table.add_row(vec!["Max body bytes".to_string(), config.max_body_bytes.to_string()]);
    println!("\n{table}\n");
}

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

#[derive(Parser)]
#[command(
    name = "jobform",
    author,
    version,
    about = "EBNY job application form server",
    long_about = r#"Serves the bilingual job application form and forwards each submission to a form relay (Formspree/FormSubmit) or the Resend email API.

Configuration comes from environment variables, optionally loaded from a .env file:
  RELAY_MODE, FORMSPREE_ID, FORM_RELAY_URL, RESEND_API_KEY, RESEND_API_URL,
  RECIPIENT_EMAIL, CC_EMAIL, SENDER_EMAIL, MAIL_SUBJECT,
  RELAY_TIMEOUT_SECS, MAX_GROUP_INDEX, MAX_GROUP_SLOTS, MAX_BODY_BYTES

Examples:
  1) Run the server:
      jobform serve --host 0.0.0.0 --port 8080
  2) Show the resolved configuration:
      jobform check-config --env-file .env
  3) Render the email for a captured body:
      jobform preview body.txt --html
"#,
    after_help = "Use `jobform <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration (env vars / relay credentials)
    #[command(
        about = "Validate configuration for the selected relay.",
        long_about = "Print the resolved configuration with secrets masked, and exit non-zero when the selected relay is missing its URL or API key."
    )]
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Render the report for a URL-encoded form body
    #[command(
        about = "Render the report for a URL-encoded form body.",
        long_about = "Decode a URL-encoded form body read from FILE (use - for stdin) and print the plain-text report, or the HTML email body with --html."
    )]
    Preview {
        file: String,
        /// Print the HTML email body instead of plain text
        #[arg(long)]
        html: bool,
        /// Highest group index accepted
        #[arg(long, default_value_t = jobform::form::DEFAULT_MAX_GROUP_INDEX)]
        max_group_index: usize,
        /// Group positions allocated across all groups
        #[arg(long, default_value_t = jobform::form::DEFAULT_MAX_GROUP_SLOTS)]
        max_group_slots: usize,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // Serve with defaults when no command is given
    let command = cli.command.unwrap_or(Commands::Serve {
        host: DEFAULT_HOST.to_string(),
        port: DEFAULT_PORT,
        env_file: None,
    });

    match command {
        Commands::Serve { host, port, env_file } => {
            let config = load_config(env_file.as_deref());
            start_server(config, &host, port).await;
        }
        Commands::CheckConfig { env_file } => {
            let config = load_config(env_file.as_deref());
            print_config(&config);
            match config.relay.missing() {
                Some(reason) => {
                    eprintln!("{} {}", yansi::Paint::new(format!("Relay {} is not configured:", config.relay.mode)).red(), reason);
                    process::exit(1);
                }
                None if config.relay.mode == RelayMode::Disabled => {
                    println!("{}", yansi::Paint::new("Relay is disabled; submissions will only be logged").yellow());
                }
                None => {
                    println!("{}", yansi::Paint::new("Configuration OK").green());
                }
            }
        }
        Commands::Preview { file, html, max_group_index, max_group_slots } => {
            let raw = match read_input(&file) {
                Ok(raw) => raw,
                Err(e) => {
                    eprintln!("{} {}: {}", yansi::Paint::red("Failed to read"), file, e);
                    process::exit(1);
                }
            };
            let payload = FieldDecoder::new(max_group_index)
                .with_max_slots(max_group_slots)
                .decode(parse_urlencoded_pairs(raw.trim_end()));
            let report = Report::build(&payload);
            if html {
                match render_html(&report) {
                    Ok(body) => println!("{}", body),
                    Err(e) => {
                        eprintln!("{}: {}", yansi::Paint::red("Failed to render HTML"), e);
                        process::exit(1);
                    }
                }
            } else {
                print!("{}", render_text(&report));
            }
        }
    }
}
