//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use hypnos_chain::{SessionConfig, SleepStage, TransitionMatrix};
use hypnos_render::{ArtConfig, HypnogramConfig};

use crate::config::{ArtToml, ChainToml, HypnogramToml, SessionToml};

/// Built-in illustrative transition matrix, rows in [`SleepStage::ALL`]
/// order. Wakefulness persists briefly before light sleep; deep sleep is
/// sticky; REM mostly returns to light sleep.
const DEFAULT_TRANSITIONS: [[f64; 4]; 4] = [
    [0.70, 0.25, 0.00, 0.05],
    [0.05, 0.70, 0.15, 0.10],
    [0.02, 0.20, 0.70, 0.08],
    [0.05, 0.60, 0.05, 0.30],
];

/// Builds a validated [`TransitionMatrix`] from the TOML chain configuration.
///
/// Row and target keys are stage names, resolved case-insensitively.
/// Omitted (from, to) pairs default to 0; a declared row that does not sum
/// to 1 is rejected by matrix construction.
pub fn build_transition_matrix(chain: &ChainToml) -> Result<TransitionMatrix> {
    let probs = match &chain.transitions {
        None => DEFAULT_TRANSITIONS,
        Some(rows) => {
            let mut probs = [[0.0_f64; 4]; 4];
            for (from_name, row) in rows {
                let from = SleepStage::from_name(from_name)
                    .with_context(|| format!("in [chain.transitions] row {from_name:?}"))?;
                for (to_name, &p) in row {
                    let to = SleepStage::from_name(to_name)
                        .with_context(|| format!("in [chain.transitions] row {from_name:?}"))?;
                    probs[from.as_index()][to.as_index()] = p;
                }
            }
            probs
        }
    };
    TransitionMatrix::new(probs).context("invalid [chain.transitions] matrix")
}

/// Builds a validated [`SessionConfig`] from the TOML session configuration.
pub fn build_session_config(session: &SessionToml) -> Result<SessionConfig> {
    let initial = SleepStage::from_name(&session.initial_stage)
        .context("in [session] initial_stage")?;
    let config = SessionConfig::new()
        .with_epoch_minutes(session.epoch_minutes)
        .with_duration_hours(session.duration_hours)
        .with_initial_stage(initial);
    config.validate().context("invalid [session] configuration")?;
    Ok(config)
}

/// Builds a validated [`ArtConfig`] from the TOML art configuration.
pub fn build_art_config(art: &ArtToml) -> Result<ArtConfig> {
    let config = ArtConfig::new()
        .with_cols(art.cols)
        .with_cell_px(art.cell_px)
        .with_pad(art.pad)
        .with_jitter(art.jitter)
        .with_background(art.background.clone());
    config
        .validate()
        .context("invalid [render.art] configuration")?;
    Ok(config)
}

/// Builds a validated [`HypnogramConfig`] from the TOML hypnogram configuration.
pub fn build_hypnogram_config(hypnogram: &HypnogramToml) -> Result<HypnogramConfig> {
    let config = HypnogramConfig::new()
        .with_width_px(hypnogram.width_px)
        .with_height_px(hypnogram.height_px)
        .with_caption(hypnogram.caption.clone());
    config
        .validate()
        .context("invalid [render.hypnogram] configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn default_matrix_is_valid() {
        let matrix = build_transition_matrix(&ChainToml::default()).unwrap();
        assert!((matrix.prob(SleepStage::Awake, SleepStage::Light) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn named_rows_build_matrix() {
        let mut rows = BTreeMap::new();
        rows.insert(
            "awake".to_string(),
            BTreeMap::from([("light".to_string(), 1.0)]),
        );
        rows.insert(
            "light".to_string(),
            BTreeMap::from([("awake".to_string(), 0.5), ("light".to_string(), 0.5)]),
        );
        rows.insert(
            "deep".to_string(),
            BTreeMap::from([("deep".to_string(), 1.0)]),
        );
        rows.insert(
            "rem".to_string(),
            BTreeMap::from([("rem".to_string(), 1.0)]),
        );
        let chain = ChainToml {
            transitions: Some(rows),
        };

        let matrix = build_transition_matrix(&chain).unwrap();
        // Omitted targets default to 0.
        assert_eq!(matrix.prob(SleepStage::Awake, SleepStage::Deep), 0.0);
        assert_eq!(matrix.prob(SleepStage::Awake, SleepStage::Light), 1.0);
    }

    #[test]
    fn unknown_stage_name_fails() {
        let chain = ChainToml {
            transitions: Some(BTreeMap::from([(
                "limbo".to_string(),
                BTreeMap::from([("awake".to_string(), 1.0)]),
            )])),
        };
        let err = build_transition_matrix(&chain).unwrap_err();
        assert!(err.to_string().contains("limbo"));
    }

    #[test]
    fn missing_row_fails_validation() {
        // Only Awake declared; the other rows sum to 0.
        let chain = ChainToml {
            transitions: Some(BTreeMap::from([(
                "awake".to_string(),
                BTreeMap::from([("awake".to_string(), 1.0)]),
            )])),
        };
        assert!(build_transition_matrix(&chain).is_err());
    }

    #[test]
    fn session_config_from_toml() {
        let toml = crate::config::SessionToml {
            epoch_minutes: 10,
            duration_hours: 4,
            initial_stage: "light".to_string(),
        };
        let config = build_session_config(&toml).unwrap();
        assert_eq!(config.epoch_count(), 24);
        assert_eq!(config.initial_stage(), SleepStage::Light);
    }

    #[test]
    fn session_config_bad_stage() {
        let toml = crate::config::SessionToml {
            epoch_minutes: 5,
            duration_hours: 8,
            initial_stage: "asleepish".to_string(),
        };
        assert!(build_session_config(&toml).is_err());
    }
}
