//! Textual reporting (§6.4): a formatted dump of H, b, and X, followed by
//! labelled node voltages and Group 2 branch currents.

use nalgebra::{DMatrix, DVector};
use spicier_core::Netlist;
use spicier_solver::OpResult;

pub fn print_matrix(name: &str, m: &DMatrix<f64>) {
    println!("{name} ({}x{}):", m.nrows(), m.ncols());
    for row in m.row_iter() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>12.6}")).collect();
        println!("  [{}]", cells.join(" "));
    }
}

pub fn print_vector(name: &str, v: &DVector<f64>) {
    let cells: Vec<String> = v.iter().map(|x| format!("{x:>12.6}")).collect();
    println!("{name} = [{}]", cells.join(" "));
}

pub fn print_labelled_solution(netlist: &Netlist, solution: &DVector<f64>) {
    for (_, name) in netlist.nodes.ordered_names() {
        let idx = spicier_core::matrix_index(netlist.nodes.get(name).unwrap()).unwrap();
        println!("V({name}) = {:.6} V", solution[idx]);
    }
    for element in &netlist.elements {
        if let Some(k) = element.current_index {
            println!("I({}) = {:.6} A", element.label, solution[k]);
        }
    }
}

pub fn print_operating_point(netlist: &Netlist, result: &OpResult) {
    print_matrix("H", &result.matrix);
    print_vector("b", &result.rhs);
    print_vector("X", &result.solution);
    print_labelled_solution(netlist, &result.solution);
}
