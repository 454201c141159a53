//! Problem-level solution representation.
//!
//! A [`Solution`] is the phenotype shared by every strategy in this crate: the
//! ordered list of selected decision-variable indices together with its
//! scalar cost. Construction procedures grow it incrementally, the local
//! search engine mutates it move by move, and the GA produces one by decoding
//! a chromosome.

use std::fmt;

/// A set of selected variable indices with an associated cost.
///
/// The element order carries no meaning for the objective value but does fix
/// the scan order of removal/exchange moves, so engines shuffle it when they
/// want randomized tie-breaking.
///
/// Cost follows whatever convention the evaluator that produced it uses
/// (minimization for the construction/local-search engines). The cost of a
/// fresh, never-evaluated solution is `f64::INFINITY`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Selected variable indices, in insertion order.
    pub elements: Vec<usize>,
    /// Cost under the last evaluation; consistent with `elements` as long as
    /// every membership change goes through an evaluating engine.
    pub cost: f64,
}

impl Solution {
    /// Creates an empty, unevaluated solution.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    /// Creates a solution from preselected variables, unevaluated.
    pub fn from_elements(elements: Vec<usize>) -> Self {
        Self {
            elements,
            cost: f64::INFINITY,
        }
    }

    /// Number of selected variables.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when no variable is selected.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True when `variable` is currently selected.
    pub fn contains(&self, variable: usize) -> bool {
        self.elements.contains(&variable)
    }

    /// Selects `variable`. The caller is responsible for re-evaluating cost.
    pub fn insert(&mut self, variable: usize) {
        self.elements.push(variable);
    }

    /// Deselects `variable`, preserving the order of the remaining elements.
    ///
    /// Returns `false` when the variable was not selected.
    pub fn remove(&mut self, variable: usize) -> bool {
        match self.elements.iter().position(|&v| v == variable) {
            Some(pos) => {
                self.elements.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cost={}, size={}, elements={:?}",
            self.cost,
            self.elements.len(),
            self.elements
        )
    }
}
