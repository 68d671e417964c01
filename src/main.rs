use std::io::{self, Write};

use anyhow::Context;
use log::info;

use classic_sorts::demo;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    demo::run(&mut out).context("failed to write to stdout")?;
    out.flush().context("failed to flush stdout")?;

    info!("all algorithms finished");
    Ok(())
}
