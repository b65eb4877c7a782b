use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sqlx::migrate::Migrate;
use sqlx::PgPool;
use tracing::info;
use users_service::config::Settings;
use users_service::db::{self, MIGRATOR};

/// Applies or reverts the `users` schema
#[derive(Parser)]
#[command(name = "migrate", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply every pending migration
    Upgrade,
    /// Revert the latest applied migration, or everything above --target
    Downgrade {
        #[arg(long)]
        target: Option<i64>,
    },
    /// List known migrations and whether they are applied
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "migrate=info,sqlx=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;

    info!("Connecting to database: {}", settings.database.redacted_url());
    let pool = db::create_pool(&settings.database).await?;

    match cli.command {
        Command::Upgrade => {
            MIGRATOR
                .run(&pool)
                .await
                .context("Failed to apply migrations")?;
            info!("Schema upgraded");
        }
        Command::Downgrade { target } => {
            let target = match target {
                Some(target) => target,
                None => previous_version(&pool).await?,
            };
            MIGRATOR
                .undo(&pool, target)
                .await
                .context("Failed to revert migrations")?;
            info!("Schema downgraded to version {}", target);
        }
        Command::Status => {
            let applied = applied_versions(&pool).await?;
            for migration in MIGRATOR
                .iter()
                .filter(|m| !m.migration_type.is_down_migration())
            {
                let state = if applied.contains(&migration.version) {
                    "applied"
                } else {
                    "pending"
                };
                println!("{:>4} {:<8} {}", migration.version, state, migration.description);
            }
        }
    }

    Ok(())
}

async fn applied_versions(pool: &PgPool) -> Result<Vec<i64>> {
    let mut conn = pool.acquire().await?;
    conn.ensure_migrations_table().await?;

    let mut versions: Vec<i64> = conn
        .list_applied_migrations()
        .await?
        .into_iter()
        .map(|m| m.version)
        .collect();
    versions.sort_unstable();
    Ok(versions)
}

/// Version just below the latest applied one, 0 when at most one is applied
async fn previous_version(pool: &PgPool) -> Result<i64> {
    let versions = applied_versions(pool).await?;
    Ok(match versions.len() {
        0 | 1 => 0,
        n => versions[n - 2],
    })
}
