// Standard Library Imports
use std::fmt::{self, Display, Formatter};

// External Crate Imports
use serde::{Deserialize, Serialize, Serializer};

// Local Crate Imports
use crate::AtomicWeight;

// Constants ===========================================================================================================

const UNKNOWN: &str = "Unknown";

// NOTE: In daltons. An isotope mass this close to the standard atomic weight can stand in for the element
const CLOSEST_MASS_TOLERANCE: f64 = 1.0;

// Public API ==========================================================================================================

impl Display for AtomicWeight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(weight) => write!(f, "{weight}"),
            Self::Unknown => write!(f, "{UNKNOWN}"),
        }
    }
}

impl Serialize for AtomicWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Value(weight) => serializer.serialize_f64(weight),
            Self::Unknown => serializer.serialize_str(UNKNOWN),
        }
    }
}

// Crate Internals =====================================================================================================

impl AtomicWeight {
    /// Σ(mass × abundance), without renormalizing the abundances
    pub(crate) fn weighted_sum(masses: &[f64], abundances: &[f64]) -> Self {
        Self::Value(masses.iter().zip(abundances).map(|(m, a)| m * a).sum())
    }

    /// Picks the isotope mass closest to the (bracket-stripped) standard atomic weight, as long as it's within
    /// [`CLOSEST_MASS_TOLERANCE`]. Ties go to the first mass encountered.
    ///
    /// Without a usable reference weight, each mass is compared against zero instead, which only ever succeeds for
    /// masses under the tolerance.
    pub(crate) fn closest_mass(
        standard_atomic_weight: &str,
        masses: impl IntoIterator<Item = f64>,
    ) -> Self {
        let reference = reference_weight(standard_atomic_weight);
        let difference = |mass: f64| reference.map_or(mass, |r| (mass - r).abs());

        masses
            .into_iter()
            .map(|mass| (mass, difference(mass)))
            // NOTE: `min_by` returns the first of several equal minimums, which gives the tie-break
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .filter(|&(_, difference)| difference < CLOSEST_MASS_TOLERANCE)
            .map_or(Self::Unknown, |(mass, _)| Self::Value(mass))
    }
}

// NOTE: Ranges like "[1.00784,1.00811]" don't survive this, and are treated the same as a missing weight
fn reference_weight(standard_atomic_weight: &str) -> Option<f64> {
    standard_atomic_weight
        .replace(['[', ']'], "")
        .trim()
        .parse()
        .ok()
        .filter(|r: &f64| r.is_finite())
}

// ---------------------------------------------------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum AtomicWeightRepr {
    Value(f64),
    Marker(String),
}

impl TryFrom<AtomicWeightRepr> for AtomicWeight {
    type Error = String;

    fn try_from(value: AtomicWeightRepr) -> Result<Self, Self::Error> {
        match value {
            AtomicWeightRepr::Value(weight) => Ok(Self::Value(weight)),
            AtomicWeightRepr::Marker(marker) if marker == UNKNOWN => Ok(Self::Unknown),
            AtomicWeightRepr::Marker(marker) => Err(format!(
                "expected a number or {UNKNOWN:?} for the atomic weight, found {marker:?}"
            )),
        }
    }
}

// Module Tests ========================================================================================================
