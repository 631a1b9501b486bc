// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Self-test for the MIPI D-PHY register interface.
//!
//! Maps the register interface of one D-PHY from the board's device table
//! into the process, checks it answers with the generated configuration and
//! reports the result:
//!
//! ```text
//! $ sudo xdphy-selftest --device-id 0
//! xdphy self-test: passed
//! ```
//!
//! `--emulate` runs against anonymous memory holding the core's reset values
//! instead, which is useful without the hardware at hand.

mod params;
mod window;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info, Level};
use xdphy::registers::VERSION_OFFSET;
use xdphy::selftest;
use xdphy::ErrorCode;

use crate::window::{MapError, RegisterWindow};

#[derive(Parser, Debug)]
#[command(version, about = "Run the MIPI D-PHY register interface self-test")]
struct Args {
    /// Device to test, as listed in the board's device table
    #[arg(short, long, default_value_t = params::DPHY_DEV_ID)]
    device_id: u32,

    /// Memory device the register interface is mapped from
    #[arg(long, default_value = "/dev/mem")]
    mem: PathBuf,

    /// Test against emulated registers instead of the hardware
    #[arg(long)]
    emulate: bool,

    /// More output, repeat for register level tracing
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("{0}")]
    Driver(ErrorCode),
}

impl From<ErrorCode> for Error {
    fn from(err: ErrorCode) -> Error {
        Error::Driver(err)
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let mut window = None;

    // Safety: the translation hands out the base of a mapping covering the
    // whole register interface, and `window` keeps it alive until after the
    // self-test has dropped its instance. Without a register interface the
    // address is never dereferenced.
    unsafe {
        selftest::run_self_test_with(
            &params::DPHY_CONFIG_TABLE,
            args.device_id,
            |cfg| -> Result<usize, Error> {
                if !cfg.is_register_present {
                    debug!("device {}: no register interface to map", cfg.device_id);
                    return Ok(cfg.base_addr);
                }
                let mapped = if args.emulate {
                    RegisterWindow::emulated(cfg)?
                } else {
                    RegisterWindow::open(&args.mem, cfg.base_addr)?
                };
                Ok(window.insert(mapped).base())
            },
        )?;
    }

    if let Some(mapped) = &window {
        debug!(
            "device {}: version register {:#010x}",
            args.device_id,
            mapped.read(VERSION_OFFSET)
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("testing D-PHY device {}", args.device_id);
    match run(&args) {
        Ok(()) => {
            println!("xdphy self-test: passed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("device {}: {}", args.device_id, err);
            println!("xdphy self-test: failed");
            ExitCode::FAILURE
        }
    }
}
