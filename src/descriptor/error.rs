use thiserror::Error;

/// Errors produced while configuring or calculating a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Wrong parameter count, order or type passed to `set_parameters`.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The configured atom position does not exist in the molecule.
    #[error("atom index {index} out of range for a molecule with {atom_count} atoms")]
    AtomIndexOutOfRange { index: usize, atom_count: usize },
}
