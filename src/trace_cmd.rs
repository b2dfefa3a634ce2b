use std::io::Write;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use hypnos_chain::simulate_session;

use crate::cli::TraceArgs;
use crate::config;
use crate::convert;

/// Simulate a session and print one stage per line, with its start minute.
pub fn run(args: TraceArgs) -> Result<()> {
    let cfg = config::load(&args.config)?;
    let matrix = convert::build_transition_matrix(&cfg.chain)?;
    let session = convert::build_session_config(&cfg.session)?;

    let seed = args.seed.or(cfg.seed);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let trace = simulate_session(
        &matrix,
        session.initial_stage(),
        session.epoch_count(),
        &mut rng,
    )
    .context("simulation failed")?;

    let mut stdout = std::io::stdout().lock();
    for (i, stage) in trace.stages().iter().enumerate() {
        let minute = i as u32 * session.epoch_minutes();
        writeln!(stdout, "{minute:5}  {stage}").context("failed to write trace")?;
    }
    Ok(())
}
