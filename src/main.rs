use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use droidkit::adb::{Adb, locate_adb};
use droidkit::runtime::RealRuntime;

/// droidkit - Android device and asset utilities
///
/// Small workflows around a connected Android device and an app's launcher
/// icon assets.
///
/// The device bridge executable is resolved from --adb (or the ADB
/// environment variable), then $ANDROID_HOME / $ANDROID_SDK_ROOT, then the
/// default SDK location under the home directory, then PATH.
///
/// Examples:
///   droidkit scan 1.6.8                # find the installed app at that version
///   droidkit icons logo.png app/res    # regenerate launcher icons
#[derive(Parser, Debug)]
#[command(author, version = env!("DROIDKIT_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Scan user-installed packages for a versionName match
    Scan(ScanArgs),

    /// Render launcher icons into the density buckets of a res/ directory
    Icons(IconsArgs),
}

#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Version string to look for (matched as versionName=<VERSION>)
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Device bridge executable (overrides automatic resolution)
    #[arg(long = "adb", env = "ADB", value_name = "PATH")]
    pub adb: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct IconsArgs {
    /// Source image to resize
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Android res/ directory containing the mipmap-* buckets
    #[arg(value_name = "RES_DIR")]
    pub res_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    match cli.command {
        Commands::Scan(args) => {
            let adb = Adb::new(locate_adb(&runtime, args.adb));
            droidkit::commands::scan(&adb, &args.version)
        }
        Commands::Icons(args) => droidkit::commands::icons(&runtime, &args.source, &args.res_dir),
    }
}
