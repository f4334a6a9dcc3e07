use clap::Parser;
use schoolfinder_api::{RestApi, ServerConfig, DEFAULT_JSON_LIMIT};
use schoolfinder_core::Catalog;
use schoolfinder_storage::{seed_if_empty, LmdbCatalog, MemoryCatalog};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// A school directory that ranks entries by distance from the caller
#[derive(Parser, Debug)]
#[command(name = "schoolfinder")]
#[command(about = "School directory with proximity search", long_about = None)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// HTTP API port
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Path to the data directory
    #[arg(short, long, env = "DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// Keep the catalog in memory only
    #[arg(long, env = "IN_MEMORY")]
    in_memory: bool,

    /// Do not add the sample schools to an empty catalog
    #[arg(long)]
    no_seed: bool,

    /// Directory of static assets served at `/`
    #[arg(long, env = "STATIC_DIR", default_value = "./public")]
    static_dir: PathBuf,

    /// Maximum accepted JSON body size in bytes
    #[arg(long, env = "JSON_LIMIT", default_value_t = DEFAULT_JSON_LIMIT)]
    json_limit: usize,

    /// Log level, overridden by RUST_LOG
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting schoolfinder v{}", env!("CARGO_PKG_VERSION"));

    let catalog: Arc<dyn Catalog> = if args.in_memory {
        info!("Using in-memory catalog");
        Arc::new(MemoryCatalog::new())
    } else {
        let path = args.data_dir.join("lmdb");
        info!("Data directory: {:?}", path);
        Arc::new(LmdbCatalog::open(&path)?)
    };

    if !args.no_seed {
        // a failed seed leaves the server usable with whatever is stored
        if let Err(e) = seed_if_empty(catalog.as_ref()) {
            warn!("Seeding failed (server still starting): {}", e);
        }
    }

    let config = ServerConfig {
        host: args.host.clone(),
        port: args.port,
        static_dir: Some(args.static_dir.clone()),
        json_limit: args.json_limit,
    };

    let http_catalog = catalog.clone();
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on {}:{}", config.host, config.port);
        let sys = actix_web::rt::System::new();
        sys.block_on(RestApi::start(http_catalog, config))
    });

    info!("schoolfinder started successfully");
    info!("HTTP API: http://{}:{}/", args.host, args.port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        joined = tokio::task::spawn_blocking(move || http_handle.join()) => {
            server_exit(joined?)?;
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}

/// Turn the server thread's outcome into the process result
fn server_exit(joined: std::thread::Result<std::io::Result<()>>) -> anyhow::Result<()> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            error!("HTTP server error: {}", e);
            Err(anyhow::Error::new(e).context("HTTP server failed"))
        }
        Err(_) => anyhow::bail!("HTTP server thread panicked"),
    }
}
