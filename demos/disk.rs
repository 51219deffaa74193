//! Digitize a disk into the set chosen for a workload, then walk it as a domain.
//!
//! Run with:
//! ```bash
//! cargo run --example disk -- --radius 450 --membership high
//! ```

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{ensure, Result};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use digiset::domain::{Domain, HyperRectDomain};
use digiset::selector::{Frequency, SetHints, SizeClass, Variability};
use digiset::set::DigitalSet;
use digiset::set_domain::DigitalSetDomain;
use digiset::shape::{digitize, Ball};
use digiset::space::Point;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Low,
    High,
}

impl From<Level> for Frequency {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => Frequency::Low,
            Level::High => Frequency::High,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Size {
    Small,
    Medium,
    Big,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Digitize a disk into a digital set")]
struct Cli {
    /// Disk radius; the domain is the smallest square holding the disk
    #[arg(long, default_value_t = 450)]
    radius: i32,

    /// Expected set size
    #[arg(long, value_enum, default_value = "big")]
    size: Size,

    /// Expected membership-test frequency
    #[arg(long, value_enum, default_value = "low")]
    membership: Level,

    /// Expected iteration frequency
    #[arg(long, value_enum, default_value = "high")]
    iteration: Level,

    /// Print every point of the set
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let cli = Cli::parse();
    ensure!(cli.radius > 0, "radius must be positive, got {}", cli.radius);

    let r = cli.radius - 1;
    let domain = HyperRectDomain::try_new(Point::new([-r, -r]), Point::new([r, r]))?;
    info!("{} ({} points)", domain, domain.size());

    let hints = SetHints::default()
        .with_size(match cli.size {
            Size::Small => SizeClass::Small,
            Size::Medium => SizeClass::Medium,
            Size::Big => SizeClass::Big,
        })
        .with_variability(Variability::Low)
        .with_iteration(cli.iteration.into())
        .with_membership(cli.membership.into());
    let mut disk = hints.build(&domain);
    info!("Selected {} for {:?}", disk.kind(), hints);

    let added = digitize(&mut disk, &Ball::new(Point::zero(), cli.radius as f64))?;
    disk.erase(&Point::zero());
    info!("Digitized {} points, {} after removing the center", added, disk.size());
    ensure!(disk.is_valid(), "inconsistent set: {}", disk);

    let disk_domain = DigitalSetDomain::new(&disk);
    info!("{}", disk_domain);
    if cli.dump {
        println!("{:#}", disk);
    }

    Ok(())
}
