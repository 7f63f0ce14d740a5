use clap::{Parser, Subcommand};
use ebs_volume_spec::{Result, VolumeSpec, constraints, input};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "ebs-volume-spec")]
#[command(about = "Inspect EBS volume specifications for launch configurations", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG still applies).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rendering and hash code of each record.
    Render {
        #[arg(short, long)]
        input: String,
    },

    /// Report documented API limits the records do not meet.
    Check {
        #[arg(short, long)]
        input: String,

        /// Fail when any record misses a limit.
        #[arg(long)]
        strict: bool,
    },

    /// Compare two single-record files.
    Compare {
        #[arg(long)]
        left: String,

        #[arg(long)]
        right: String,
    },

    /// Build a record from flags and print it as JSON.
    New {
        #[arg(long)]
        snapshot_id: Option<String>,

        #[arg(long)]
        volume_size: Option<i32>,

        #[arg(long)]
        volume_type: Option<String>,

        #[arg(long)]
        delete_on_termination: Option<bool>,

        #[arg(long)]
        iops: Option<i32>,

        #[arg(long)]
        encrypted: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match cli.cmd {
        Commands::Render { input } => {
            let specs = input::load_specs(&input)?;
            debug!(path = %input, records = specs.len(), "loaded volume specs");
            for spec in &specs {
                println!("{}\t{}", spec, spec.hash_code());
            }
        }
        Commands::Check { input, strict } => {
            let specs = input::load_specs(&input)?;
            let report = constraints::check_all(&specs);
            for (idx, violations) in &report.failing {
                for v in violations {
                    warn!(record = *idx, spec = %specs[*idx], "{}", v);
                }
            }
            println!(
                "{} of {} records miss documented limits",
                report.failing.len(),
                report.total
            );
            if strict {
                report.ensure_clean(&input)?;
            }
        }
        Commands::Compare { left, right } => {
            let a = input::load_single(&left)?;
            let b = input::load_single(&right)?;
            println!("equal: {}", a == b);
            println!("{}\t{}", a.hash_code(), left);
            println!("{}\t{}", b.hash_code(), right);
        }
        Commands::New {
            snapshot_id,
            volume_size,
            volume_type,
            delete_on_termination,
            iops,
            encrypted,
        } => {
            let mut spec = VolumeSpec::new();
            spec.set_snapshot_id(snapshot_id)
                .set_volume_size(volume_size)
                .set_volume_type(volume_type)
                .set_delete_on_termination(delete_on_termination)
                .set_iops(iops)
                .set_encrypted(encrypted);
            for v in spec.violations() {
                info!("note: {}", v);
            }
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }
    }

    Ok(())
}
