//! Plugin-style molecular descriptors.
//!
//! A descriptor is configured with positional [`DescriptorParam`]s and
//! reports a [`DescriptorValue`] that bundles the result with the
//! specification and the parameters it was computed with.

mod error;
pub mod proton_pi;

pub use error::DescriptorError;
pub use proton_pi::{ProtonInPiSystem, ProtonInPiSystemParams};

use serde::{Deserialize, Serialize};

use crate::atom::Atom;
use crate::bond::Bond;
use crate::mol::Mol;

/// One positional descriptor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DescriptorParam {
    Int(i64),
    Bool(bool),
}

impl DescriptorParam {
    pub fn type_name(&self) -> &'static str {
        match self {
            DescriptorParam::Int(_) => "Integer",
            DescriptorParam::Bool(_) => "Boolean",
        }
    }
}

/// Identifies a descriptor algorithm and its implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorSpecification {
    /// Ontology reference for the algorithm.
    pub reference: String,
    pub implementation_title: String,
    pub implementation_identifier: String,
    pub implementation_vendor: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DescriptorResult {
    Boolean(bool),
}

impl DescriptorResult {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DescriptorResult::Boolean(b) => Some(*b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorValue {
    pub specification: DescriptorSpecification,
    pub parameter_names: Vec<String>,
    pub parameters: Vec<DescriptorParam>,
    pub result: DescriptorResult,
}

/// A descriptor evaluated for one atom of a molecule.
///
/// `calculate` takes `&mut self` because implementations may cache work
/// between calls; one instance serves one caller at a time.
pub trait AtomicDescriptor {
    fn specification(&self) -> DescriptorSpecification;

    /// Parameter names, in the order `set_parameters` expects them.
    fn parameter_names(&self) -> &'static [&'static str];

    /// A representative value of the type expected for `name`. Not the
    /// current value.
    fn parameter_type(&self, name: &str) -> DescriptorParam;

    fn parameters(&self) -> Vec<DescriptorParam>;

    fn set_parameters(&mut self, params: &[DescriptorParam]) -> Result<(), DescriptorError>;

    fn calculate(&mut self, mol: &Mol<Atom, Bond>) -> Result<DescriptorValue, DescriptorError>;
}
