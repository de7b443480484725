use crate::bond::BondOrder;
use crate::element::Element;

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;

    /// Element symbol, or `None` for an atomic number outside the table.
    fn symbol(&self) -> Option<&'static str> {
        Element::from_atomic_num(self.atomic_num()).map(Element::symbol)
    }
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i8;
}

pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> u8;
}

pub trait HasAromaticity {
    fn is_aromatic(&self) -> bool;
}

pub trait HasPosition2D {
    fn position_2d(&self) -> Option<[f64; 2]>;
    fn set_position_2d(&mut self, pos: Option<[f64; 2]>);
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}
