//! Visual renderers for hypnos session traces.
//!
//! Two consumers of the simulated stage sequence: a hypnogram step chart
//! and an abstract glyph-grid image. Both encode each epoch's stage into a
//! visual mark and write SVG files; neither feeds anything back into the
//! simulation.
//!
//! # Quick start
//!
//! ```no_run
//! use hypnos_chain::SleepStage;
//! use hypnos_render::{ArtConfig, render_abstract_art};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use std::path::Path;
//!
//! let stages = vec![SleepStage::Awake, SleepStage::Light, SleepStage::Deep];
//! let mut rng = StdRng::seed_from_u64(7);
//! render_abstract_art(&stages, &ArtConfig::new(), &mut rng, Path::new("sleep_art.svg"))?;
//! # Ok::<(), hypnos_render::RenderError>(())
//! ```

pub mod art;
pub mod config;
pub mod error;
pub mod hypnogram;
pub mod style;

pub use art::render_abstract_art;
pub use config::{ArtConfig, HypnogramConfig};
pub use error::RenderError;
pub use hypnogram::render_hypnogram;
pub use style::{Glyph, StageStyle, stage_style};
