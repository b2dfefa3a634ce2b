//! Sleep stages for the four-state Markov chain.

use crate::error::ChainError;

/// Four-state sleep stage classification.
///
/// One value per epoch. The discriminant fixes the indexing order used by
/// [`TransitionMatrix`](crate::TransitionMatrix) rows and by downstream
/// renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SleepStage {
    /// Not asleep.
    Awake = 0,
    /// Light (N1/N2) sleep.
    Light = 1,
    /// Deep slow-wave sleep.
    Deep = 2,
    /// Rapid eye movement sleep.
    Rem = 3,
}

impl SleepStage {
    /// All four stages in index order.
    pub const ALL: [SleepStage; 4] = [Self::Awake, Self::Light, Self::Deep, Self::Rem];

    /// Returns the zero-based index of this stage (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Human-readable stage name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Awake => "Awake",
            Self::Light => "Light",
            Self::Deep => "Deep",
            Self::Rem => "REM",
        }
    }

    /// Resolves a stage from its name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnknownStage`] if the name does not match any
    /// of the four stages.
    pub fn from_name(name: &str) -> Result<SleepStage, ChainError> {
        match name.to_ascii_lowercase().as_str() {
            "awake" => Ok(Self::Awake),
            "light" => Ok(Self::Light),
            "deep" => Ok(Self::Deep),
            "rem" => Ok(Self::Rem),
            _ => Err(ChainError::UnknownStage {
                name: name.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SleepStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_index_values() {
        assert_eq!(SleepStage::Awake.as_index(), 0);
        assert_eq!(SleepStage::Light.as_index(), 1);
        assert_eq!(SleepStage::Deep.as_index(), 2);
        assert_eq!(SleepStage::Rem.as_index(), 3);
    }

    #[test]
    fn all_ordering() {
        assert_eq!(
            SleepStage::ALL,
            [
                SleepStage::Awake,
                SleepStage::Light,
                SleepStage::Deep,
                SleepStage::Rem
            ]
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(SleepStage::Awake.to_string(), "Awake");
        assert_eq!(SleepStage::Light.to_string(), "Light");
        assert_eq!(SleepStage::Deep.to_string(), "Deep");
        assert_eq!(SleepStage::Rem.to_string(), "REM");
    }

    #[test]
    fn from_name_known() {
        assert_eq!(SleepStage::from_name("Awake").unwrap(), SleepStage::Awake);
        assert_eq!(SleepStage::from_name("light").unwrap(), SleepStage::Light);
        assert_eq!(SleepStage::from_name("DEEP").unwrap(), SleepStage::Deep);
        assert_eq!(SleepStage::from_name("rem").unwrap(), SleepStage::Rem);
        assert_eq!(SleepStage::from_name("REM").unwrap(), SleepStage::Rem);
    }

    #[test]
    fn from_name_unknown() {
        let err = SleepStage::from_name("Hibernating").unwrap_err();
        assert!(matches!(err, ChainError::UnknownStage { name } if name == "Hibernating"));
    }

    #[test]
    fn trait_assertions() {
        fn assert_copy<T: Copy>() {}
        fn assert_eq<T: Eq>() {}
        fn assert_hash<T: std::hash::Hash>() {}
        assert_copy::<SleepStage>();
        assert_eq::<SleepStage>();
        assert_hash::<SleepStage>();
    }
}
