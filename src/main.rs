use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};

use paramlog::config::{self, Settings};
use paramlog::container::Container;
use paramlog::error::ServerError;
use paramlog::logging;
use paramlog::routes::RouteTable;
use paramlog::sink::SinkKind;

#[derive(Parser)]
#[command(
    name = "paramlog",
    author,
    version,
    about = "Log user_id / user_pw request parameters",
    long_about = r#"paramlog serves /login (GET) and /login4 (GET, POST) and writes the submitted
user_id and user_pw values to the console.

Passwords are written in clear text unless --mask-password (or
PARAMLOG_MASK_PASSWORD=1) is given.

Examples:
  1) Serve with defaults:
      paramlog serve --host 127.0.0.1 --port 8080
  2) Try it:
      curl 'http://127.0.0.1:8080/login?user_id=alice&user_pw=secret'
      curl -d 'user_id=alice&user_pw=secret' http://127.0.0.1:8080/login4
"#,
    after_help = "Use `paramlog <subcommand> --help` to get subcommand specific options."
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
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Where request lines are written
        #[arg(long, value_enum)]
        sink: Option<SinkKind>,
        /// Write user_pw as asterisks
        #[arg(long)]
        mask_password: bool,
    },
    /// Print the route table
    Routes,
    /// Print the resolved settings as JSON
    #[command(long_about = "Load the .env file and environment variables, print the resolved settings and check that host and port form a valid listen address.")]
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

fn load_settings(env_file: Option<&str>) -> Settings {
    config::load_env_file(env_file);
    match Settings::from_env() {
        Ok(s) => s,
        Err(e) => fail(&e),
    }
}

fn fail(e: &ServerError) -> ! {
    tracing::error!(%e, "paramlog failed");
    eprintln!("{}", yansi::Paint::red(&e.to_string()));
    process::exit(1);
}

async fn start_server(settings: Settings) {
    let addr = match settings.socket_addr() {
        Ok(a) => a,
        Err(e) => fail(&e),
    };
    let table = match RouteTable::standard(&settings) {
        Ok(t) => t,
        Err(e) => fail(&e.into()),
    };
    if !settings.mask_password {
        tracing::warn!("user_pw values are written in clear text; use --mask-password to hide them");
    }

    let container = Container::new(table, settings.sink.build());
    tracing::info!(%addr, sink = %settings.sink, "Starting paramlog server");
    eprintln!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    if let Err(e) = container.run(addr).await {
        if matches!(e, ServerError::Bind { .. }) {
            eprintln!(
                "{}",
                yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
        }
        fail(&e);
    }
}

fn print_routes(table: &RouteTable) {
    let mut out = Table::new();
    out.load_preset(presets::UTF8_FULL);
    out.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    out.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        out.set_width(w.saturating_sub(4));
    }
    out.set_header(vec!["Path", "Method", "Servlet"]);
    for (path, verb, name) in table.paths() {
        out.add_row(vec![path, verb.to_string(), name.to_string()]);
    }
    println!("\n{out}\n");
}

#[tokio::main]
async fn main() {
    logging::init_logger();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // No subcommand: serve with settings from the environment.
    let Some(command) = cli.command else {
        start_server(load_settings(None)).await;
        return;
    };

    match command {
        Commands::Serve {
            host,
            port,
            env_file,
            sink,
            mask_password,
        } => {
            let mut settings = load_settings(env_file.as_deref());
            if let Some(host) = host {
                settings.host = host;
            }
            if let Some(port) = port {
                settings.port = port;
            }
            if let Some(sink) = sink {
                settings.sink = sink;
            }
            settings.mask_password |= mask_password;
            start_server(settings).await;
        }
        Commands::Routes => {
            let settings = load_settings(None);
            match RouteTable::standard(&settings) {
                Ok(table) => print_routes(&table),
                Err(e) => fail(&e.into()),
            }
        }
        Commands::CheckConfig { env_file } => {
            let settings = load_settings(env_file.as_deref());
            let json = serde_json::to_string_pretty(&settings).unwrap_or_else(|_| "<non-json>".into());
            println!("{json}");
            match settings.socket_addr() {
                Ok(addr) => println!("{} {}", yansi::Paint::new("Listen address is valid:").green(), addr),
                Err(e) => fail(&e),
            }
        }
    }
}
