//! Builds the list of `Stamp` objects for a finalized netlist (one per
//! element), resolving node references and, for controlled sources,
//! resolving the controller's assigned current index.

use spicier_core::{matrix_index, Element, ElementExtra, ElementKind, Error, Netlist, Result};

use crate::controlled::{Cccs, Ccvs, Vccs, Vcvs};
use crate::passive::{Capacitor, Inductor, Resistor};
use crate::sources::{IndependentCurrent, IndependentVoltage};
use crate::stamp::Stamp;

/// `netlist.finalize()` must already have been called.
pub fn build_stampers(netlist: &Netlist) -> Result<Vec<Box<dyn Stamp>>> {
    let mut stampers: Vec<Box<dyn Stamp>> = Vec::with_capacity(netlist.elements.len());
    for element in &netlist.elements {
        if element.kind.is_unsupported() {
            return Err(Error::UnsupportedElement {
                label: element.label.clone(),
                kind: element.kind.name().to_string(),
            });
        }
        stampers.push(build_one(netlist, element)?);
    }
    Ok(stampers)
}

fn controller_index(netlist: &Netlist, element: &Element) -> Result<usize> {
    let label = element.controller_label().ok_or_else(|| Error::SemanticError {
        line: element.line,
        label: element.label.clone(),
    })?;
    let controller = netlist.find_by_label(label).ok_or_else(|| Error::SemanticError {
        line: element.line,
        label: label.to_string(),
    })?;
    controller.current_index.ok_or_else(|| Error::SemanticError {
        line: element.line,
        label: label.to_string(),
    })
}

fn build_one(netlist: &Netlist, element: &Element) -> Result<Box<dyn Stamp>> {
    let n_pos = matrix_index(element.nodes[0]);
    let n_neg = matrix_index(element.nodes[1]);

    Ok(match element.kind {
        ElementKind::Resistor => Box::new(Resistor {
            n_pos,
            n_neg,
            current_index: element.current_index,
            value: element.value,
        }),
        ElementKind::Capacitor => {
            let ic = match &element.extra {
                ElementExtra::InitialCondition(v) => *v,
                _ => 0.0,
            };
            Box::new(Capacitor {
                n_pos,
                n_neg,
                current_index: element.current_index.expect("capacitor is always Group 2"),
                capacitance: element.value,
                initial_condition: ic,
            })
        }
        ElementKind::Inductor => {
            let ic = match &element.extra {
                ElementExtra::InitialCondition(v) => *v,
                _ => 0.0,
            };
            Box::new(Inductor {
                n_pos,
                n_neg,
                current_index: element.current_index.expect("inductor is always Group 2"),
                inductance: element.value,
                initial_condition: ic,
            })
        }
        ElementKind::IndependentVoltage => Box::new(IndependentVoltage {
            n_pos,
            n_neg,
            current_index: element
                .current_index
                .expect("independent voltage source is always Group 2"),
            value: element.value,
            extra: element.extra.clone(),
        }),
        ElementKind::IndependentCurrent => Box::new(IndependentCurrent {
            n_pos,
            n_neg,
            current_index: element.current_index,
            value: element.value,
            extra: element.extra.clone(),
        }),
        ElementKind::Vcvs => Box::new(Vcvs {
            n_pos,
            n_neg,
            c_pos: matrix_index(element.nodes[2]),
            c_neg: matrix_index(element.nodes[3]),
            current_index: element.current_index.expect("VCVS is always Group 2"),
            gain: element.value,
        }),
        ElementKind::Vccs => Box::new(Vccs {
            n_pos,
            n_neg,
            c_pos: matrix_index(element.nodes[2]),
            c_neg: matrix_index(element.nodes[3]),
            current_index: element.current_index,
            gain: element.value,
        }),
        ElementKind::Cccs => Box::new(Cccs {
            n_pos,
            n_neg,
            controller_index: controller_index(netlist, element)?,
            current_index: element.current_index,
            gain: element.value,
        }),
        ElementKind::Ccvs => Box::new(Ccvs {
            n_pos,
            n_neg,
            controller_index: controller_index(netlist, element)?,
            current_index: element.current_index.expect("CCVS is always Group 2"),
            gain: element.value,
        }),
        ElementKind::Diode | ElementKind::Bjt | ElementKind::Mosfet => unreachable!(
            "unsupported elements are rejected by build_stampers before reaching build_one"
        ),
    })
}
