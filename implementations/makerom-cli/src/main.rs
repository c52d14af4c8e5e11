use anyhow::Context;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use makerom::{RomImageBuilder, DEFAULT_OUTPUT, DEFAULT_ROM_SIZE};

/// Writes a 0x0e00 byte ROM image to `test.bin`: the payload `40 45` followed
/// by `ea` padding.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Increase logging verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}
impl Arguments {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let rom = RomImageBuilder::default()
        .build(DEFAULT_ROM_SIZE)
        .context("laying out ROM image")?;
    rom.write_to(DEFAULT_OUTPUT)?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let level = |args: &[&str]| Arguments::parse_from(args).log_level();
        assert_eq!(level(&["makerom"]), LevelFilter::Warn);
        assert_eq!(level(&["makerom", "-v"]), LevelFilter::Info);
        assert_eq!(level(&["makerom", "-vv"]), LevelFilter::Debug);
        assert_eq!(level(&["makerom", "--verbose", "-vvv"]), LevelFilter::Trace);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Arguments::try_parse_from(["makerom", "out.bin"]).is_err());
    }
}
