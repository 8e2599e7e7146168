//! Typed element list: the output of parsing and the input to stamping.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::node::{NodeId, NodeTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Resistor,
    Capacitor,
    Inductor,
    IndependentVoltage,
    IndependentCurrent,
    Vcvs,
    Vccs,
    Cccs,
    Ccvs,
    Diode,
    Bjt,
    Mosfet,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Resistor => "resistor",
            ElementKind::Capacitor => "capacitor",
            ElementKind::Inductor => "inductor",
            ElementKind::IndependentVoltage => "independent voltage source",
            ElementKind::IndependentCurrent => "independent current source",
            ElementKind::Vcvs => "VCVS",
            ElementKind::Vccs => "VCCS",
            ElementKind::Cccs => "CCCS",
            ElementKind::Ccvs => "CCVS",
            ElementKind::Diode => "diode",
            ElementKind::Bjt => "BJT",
            ElementKind::Mosfet => "MOSFET",
        }
    }

    /// Elements whose branch current is always an explicit MNA unknown,
    /// independent of how they're used elsewhere in the netlist.
    pub fn always_group_two(&self) -> bool {
        matches!(
            self,
            ElementKind::IndependentVoltage
                | ElementKind::Vcvs
                | ElementKind::Ccvs
                | ElementKind::Capacitor
                | ElementKind::Inductor
        )
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, ElementKind::Diode | ElementKind::Bjt | ElementKind::Mosfet)
    }
}

/// A single breakpoint of a piecewise-linear source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PwlPoint {
    pub t: f64,
    pub x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinParams {
    pub v0: f64,
    pub va: f64,
    pub freq: f64,
    pub td: f64,
}

/// Auxiliary per-kind payload. A tagged enum stands in for the source
/// material's dynamically-typed "extra" field.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementExtra {
    None,
    InitialCondition(f64),
    Constant,
    Sinusoidal(SinParams),
    Pwl(Vec<PwlPoint>),
    Controller(String),
    Model(String),
}

#[derive(Debug, Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub label: String,
    pub nodes: Vec<NodeId>,
    pub value: f64,
    pub extra: ElementExtra,
    pub line: usize,

    /// Set by `Netlist::finalize`.
    pub preserve_current: bool,
    /// Set by `Netlist::finalize`; `None` until then, `Some(index)` (0-based,
    /// already offset past the node unknowns) for Group 2 elements.
    pub current_index: Option<usize>,
}

impl Element {
    pub fn new(
        kind: ElementKind,
        label: String,
        nodes: Vec<NodeId>,
        value: f64,
        extra: ElementExtra,
        line: usize,
    ) -> Self {
        Self {
            kind,
            label,
            nodes,
            value,
            extra,
            line,
            preserve_current: false,
            current_index: None,
        }
    }

    pub fn controller_label(&self) -> Option<&str> {
        match &self.extra {
            ElementExtra::Controller(label) => Some(label.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Netlist {
    pub nodes: NodeTable,
    pub elements: Vec<Element>,
    /// Number of non-ground nodes plus Group 2 elements; valid after `finalize`.
    dimension: usize,
}

impl Netlist {
    pub fn new() -> Self {
        Self {
            nodes: NodeTable::new(),
            elements: Vec::new(),
            dimension: 0,
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.node_count()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Runs the grouping pass (4.1) and index assignment (4.2), mutating
    /// `preserve_current` and `current_index` on each element in place.
    /// Must be called exactly once, after all elements are known.
    pub fn finalize(&mut self) -> Result<()> {
        let labels: HashMap<String, usize> = self
            .elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.label.to_ascii_lowercase(), i))
            .collect();

        for i in 0..self.elements.len() {
            if self.elements[i].kind.always_group_two() {
                self.elements[i].preserve_current = true;
            }
        }

        // Controlled sources force their controller into Group 2.
        for i in 0..self.elements.len() {
            let kind = self.elements[i].kind;
            if !matches!(kind, ElementKind::Ccvs | ElementKind::Cccs) {
                continue;
            }
            let line = self.elements[i].line;
            let label = self.elements[i].label.clone();
            let controller = self.elements[i]
                .controller_label()
                .ok_or_else(|| Error::SemanticError {
                    line,
                    label: label.clone(),
                })?
                .to_ascii_lowercase();
            let idx = *labels.get(&controller).ok_or_else(|| Error::SemanticError {
                line,
                label: controller.clone(),
            })?;
            self.elements[idx].preserve_current = true;
        }

        let mut next = self.node_count();
        for element in &mut self.elements {
            if element.preserve_current {
                element.current_index = Some(next);
                next += 1;
            }
        }
        self.dimension = next;
        Ok(())
    }

    pub fn find_by_label(&self, label: &str) -> Option<&Element> {
        let key = label.to_ascii_lowercase();
        self.elements.iter().find(|e| e.label.to_ascii_lowercase() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divider() -> Netlist {
        let mut nl = Netlist::new();
        let a = nl.nodes.resolve("a");
        let gnd = nl.nodes.resolve("0");
        let b = nl.nodes.resolve("b");
        nl.push(Element::new(
            ElementKind::IndependentVoltage,
            "v1".into(),
            vec![a, gnd],
            10.0,
            ElementExtra::Constant,
            1,
        ));
        nl.push(Element::new(
            ElementKind::Resistor,
            "r1".into(),
            vec![a, b],
            1000.0,
            ElementExtra::None,
            2,
        ));
        nl.push(Element::new(
            ElementKind::Resistor,
            "r2".into(),
            vec![b, gnd],
            1000.0,
            ElementExtra::None,
            3,
        ));
        nl
    }

    #[test]
    fn dimension_counts_nodes_and_group_two() {
        let mut nl = divider();
        nl.finalize().unwrap();
        // 2 non-ground nodes + 1 Group 2 element (V1).
        assert_eq!(nl.dimension(), 3);
        assert_eq!(nl.elements[0].current_index, Some(2));
        assert!(nl.elements[0].preserve_current);
        assert!(!nl.elements[1].preserve_current);
    }

    #[test]
    fn unknown_controller_is_semantic_error() {
        let mut nl = Netlist::new();
        let a = nl.nodes.resolve("a");
        let gnd = nl.nodes.resolve("0");
        nl.push(Element::new(
            ElementKind::Cccs,
            "f1".into(),
            vec![a, gnd],
            2.0,
            ElementExtra::Controller("vx".into()),
            1,
        ));
        assert!(matches!(nl.finalize(), Err(Error::SemanticError { .. })));
    }
}
