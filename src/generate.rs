use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use hypnos_chain::simulate_session;
use hypnos_render::{render_abstract_art, render_hypnogram};

use crate::cli::GenerateArgs;
use crate::config;
use crate::convert;

/// Run the full simulate-and-render pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    // Step 1: Load config and apply CLI overrides
    let cfg = config::load(&args.config)?;
    let seed = args.seed.or(cfg.seed);
    let hypnogram_path = args
        .hypnogram_output
        .unwrap_or_else(|| cfg.render.hypnogram.output.clone());
    let art_path = args
        .art_output
        .unwrap_or_else(|| cfg.render.art.output.clone());

    // Step 2: Build configs from TOML
    let matrix = convert::build_transition_matrix(&cfg.chain)?;
    let session = convert::build_session_config(&cfg.session)?;
    let hypnogram_cfg = convert::build_hypnogram_config(&cfg.render.hypnogram)?;
    let art_cfg = convert::build_art_config(&cfg.render.art)?;

    // Step 3: Create seeded RNG
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // Step 4: Simulate one night
    info!(
        epochs = session.epoch_count(),
        epoch_minutes = session.epoch_minutes(),
        initial = %session.initial_stage(),
        "simulating session"
    );
    let trace = simulate_session(
        &matrix,
        session.initial_stage(),
        session.epoch_count(),
        &mut rng,
    )
    .context("simulation failed")?;

    let counts = trace.stage_counts();
    info!(
        awake = counts[0],
        light = counts[1],
        deep = counts[2],
        rem = counts[3],
        "session simulated"
    );

    // Step 5: Render outputs
    render_hypnogram(
        trace.stages(),
        session.epoch_minutes(),
        &hypnogram_cfg,
        &hypnogram_path,
    )
    .with_context(|| format!("failed to render hypnogram: {}", hypnogram_path.display()))?;
    info!(path = %hypnogram_path.display(), "hypnogram written");

    render_abstract_art(trace.stages(), &art_cfg, &mut rng, &art_path)
        .with_context(|| format!("failed to render abstract art: {}", art_path.display()))?;
    info!(path = %art_path.display(), "abstract art written");

    Ok(())
}
