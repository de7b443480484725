pub mod aromaticity;
pub mod atom;
pub mod bond;
pub mod conjugation;
pub mod descriptor;
pub mod element;
pub mod hydrogen;
pub mod mol;
pub mod pi_system;
pub mod ring;
pub mod traits;
pub mod valence;
pub mod wrappers;

pub use aromaticity::{set_aromaticity, AromaticityModel, AromaticityPerception};
pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use descriptor::{
    AtomicDescriptor, DescriptorError, DescriptorParam, DescriptorResult, DescriptorSpecification,
    DescriptorValue, ProtonInPiSystem, ProtonInPiSystemParams,
};
pub use element::Element;
pub use hydrogen::{add_hs, remove_hs};
pub use mol::{Mol, MolId};
pub use pi_system::{conjugated_pi_systems, ConjugatedPiSystems, Fragment, PiSystemDetector};
pub use ring::{Ring, RingBond, RingError, RingInfo};
pub use traits::{
    HasAromaticity, HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount, HasPosition2D,
};
pub use wrappers::WithPosition2D;
