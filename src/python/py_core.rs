//! Card bindings for Python.

use pyo3::prelude::*;

use crate::cards::Card;

/// Python wrapper for Card. Read-only.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    /// Element key, e.g. "fire".
    #[getter]
    fn element(&self) -> &'static str {
        self.0.element.key()
    }

    #[getter]
    fn element_icon(&self) -> &'static str {
        self.0.element.icon()
    }

    /// Rarity tier, 1-4.
    #[getter]
    fn rarity(&self) -> u32 {
        self.0.rarity.tier()
    }

    #[getter]
    fn rarity_name(&self) -> &'static str {
        self.0.rarity.name()
    }

    #[getter]
    fn attack(&self) -> u32 {
        self.0.attack
    }

    #[getter]
    fn defense(&self) -> u32 {
        self.0.defense
    }

    #[getter]
    fn cost(&self) -> u32 {
        self.0.cost()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
