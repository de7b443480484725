//! Whether a proton is bonded into a conjugated pi system.
//!
//! The descriptor answers true when the atom at `atom_position` is a
//! hydrogen and at least one of its neighbours lies in a conjugated pi
//! fragment. Fragment detection is the expensive step, so the last result
//! is kept in a single-slot cache keyed by the [`MolId`] of the molecule
//! passed in.
//!
//! The cache key is instance identity. A structurally identical molecule
//! built separately (or a clone) is detected afresh, while a molecule
//! mutated in place keeps its id and is served the stale fragments. Call
//! [`ProtonInPiSystem::clear_cache`] after editing a molecule.

use log::debug;
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use super::{
    AtomicDescriptor, DescriptorError, DescriptorParam, DescriptorResult, DescriptorSpecification,
    DescriptorValue,
};
use crate::aromaticity::{AromaticityModel, AromaticityPerception};
use crate::atom::Atom;
use crate::bond::Bond;
use crate::element::Element;
use crate::mol::{Mol, MolId};
use crate::pi_system::{ConjugatedPiSystems, Fragment, PiSystemDetector};
use crate::traits::HasAtomicNum;

pub const REFERENCE: &str =
    "http://www.blueobelisk.org/ontologies/chemoinformatics-algorithms/#isProtonInConjugatedPiSystem";

const PARAMETER_NAMES: &[&str] = &["atomPosition", "checkAromaticity"];

/// Configuration of [`ProtonInPiSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProtonInPiSystemParams {
    /// Index of the atom to test.
    pub atom_position: usize,
    /// Run aromaticity perception on the working copy before detection.
    pub check_aromaticity: bool,
}

#[derive(Debug)]
struct CachedFragments {
    mol: MolId,
    fragments: Vec<Option<Fragment>>,
}

#[derive(Debug)]
pub struct ProtonInPiSystem<D = ConjugatedPiSystems, R = AromaticityModel> {
    params: ProtonInPiSystemParams,
    detector: D,
    aromaticity: R,
    cache: Option<CachedFragments>,
}

impl ProtonInPiSystem {
    pub fn new() -> Self {
        Self::with_detectors(ConjugatedPiSystems, AromaticityModel::default())
    }
}

impl Default for ProtonInPiSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, R> ProtonInPiSystem<D, R>
where
    D: PiSystemDetector,
    R: AromaticityPerception,
{
    pub fn with_detectors(detector: D, aromaticity: R) -> Self {
        Self {
            params: ProtonInPiSystemParams::default(),
            detector,
            aromaticity,
            cache: None,
        }
    }

    pub fn with_params(mut self, params: ProtonInPiSystemParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> ProtonInPiSystemParams {
        self.params
    }

    /// Replaces the configuration. The fragment cache is left as is.
    pub fn set_params(&mut self, params: ProtonInPiSystemParams) {
        self.params = params;
    }

    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    /// True if the next evaluation of `mol` will reuse cached fragments.
    pub fn is_cached_for<A, B>(&self, mol: &Mol<A, B>) -> bool {
        self.cache.as_ref().is_some_and(|c| c.mol == mol.id())
    }

    /// Tests the configured atom of `mol`.
    pub fn evaluate(&mut self, mol: &Mol<Atom, Bond>) -> Result<bool, DescriptorError> {
        let mut working = mol.clone();
        if self.params.check_aromaticity {
            self.aromaticity.perceive(&mut working);
        }

        let index = self.params.atom_position;
        if index >= mol.atom_count() {
            return Err(DescriptorError::AtomIndexOutOfRange {
                index,
                atom_count: mol.atom_count(),
            });
        }
        let target = NodeIndex::new(index);
        if mol.atom(target).symbol() != Some(Element::H.symbol()) {
            return Ok(false);
        }

        let fragments = self.fragments_for(mol, &working);
        let hit = mol
            .neighbors(target)
            .any(|nb| fragments.iter().flatten().any(|f| f.contains_atom(nb)));
        Ok(hit)
    }

    /// Cached fragments for `mol`, detecting them on `working` on a miss.
    fn fragments_for(&mut self, mol: &Mol<Atom, Bond>, working: &Mol<Atom, Bond>) -> &[Option<Fragment>] {
        let entry = match self.cache.take() {
            Some(cached) if cached.mol == mol.id() => {
                debug!("pi-system cache hit for {:?}", mol.id());
                cached
            }
            _ => {
                debug!("pi-system cache miss for {:?}, running detection", mol.id());
                CachedFragments {
                    mol: mol.id(),
                    fragments: self.detector.detect(working),
                }
            }
        };
        &self.cache.insert(entry).fragments
    }
}

impl<D, R> AtomicDescriptor for ProtonInPiSystem<D, R>
where
    D: PiSystemDetector,
    R: AromaticityPerception,
{
    fn specification(&self) -> DescriptorSpecification {
        DescriptorSpecification {
            reference: REFERENCE.to_string(),
            implementation_title: "ProtonInPiSystem".to_string(),
            implementation_identifier: env!("CARGO_PKG_VERSION").to_string(),
            implementation_vendor: env!("CARGO_PKG_NAME").to_string(),
        }
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        PARAMETER_NAMES
    }

    fn parameter_type(&self, name: &str) -> DescriptorParam {
        if name == PARAMETER_NAMES[0] {
            DescriptorParam::Int(0)
        } else {
            DescriptorParam::Bool(true)
        }
    }

    fn parameters(&self) -> Vec<DescriptorParam> {
        vec![
            DescriptorParam::Int(self.params.atom_position as i64),
            DescriptorParam::Bool(self.params.check_aromaticity),
        ]
    }

    fn set_parameters(&mut self, params: &[DescriptorParam]) -> Result<(), DescriptorError> {
        let [first, second] = params else {
            return Err(DescriptorError::InvalidParameter(format!(
                "expected 2 parameters, got {}",
                params.len()
            )));
        };
        let DescriptorParam::Int(position) = *first else {
            return Err(DescriptorError::InvalidParameter(format!(
                "atomPosition must be an Integer, got {}",
                first.type_name()
            )));
        };
        let DescriptorParam::Bool(check_aromaticity) = *second else {
            return Err(DescriptorError::InvalidParameter(format!(
                "checkAromaticity must be a Boolean, got {}",
                second.type_name()
            )));
        };
        let atom_position = usize::try_from(position).map_err(|_| {
            DescriptorError::InvalidParameter(format!("atomPosition must not be negative, got {position}"))
        })?;

        self.params = ProtonInPiSystemParams {
            atom_position,
            check_aromaticity,
        };
        Ok(())
    }

    fn calculate(&mut self, mol: &Mol<Atom, Bond>) -> Result<DescriptorValue, DescriptorError> {
        let hit = self.evaluate(mol)?;
        Ok(DescriptorValue {
            specification: self.specification(),
            parameter_names: PARAMETER_NAMES.iter().map(|s| s.to_string()).collect(),
            parameters: self.parameters(),
            result: DescriptorResult::Boolean(hit),
        })
    }
}
