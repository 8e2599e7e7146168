use std::path::Path;

use anyhow::Result;
use spicier_core::Netlist;
use spicier_solver::TransientParams;

use crate::{graphs, output};

pub fn run(netlist: &Netlist, params: TransientParams, write_graphs: bool) -> Result<()> {
    log::info!(
        "running transient analysis (tstep={}, tstop={}, {} unknowns)",
        params.tstep,
        params.tstop,
        netlist.dimension()
    );
    let result = spicier_solver::solve_transient(netlist, &params)?;

    for point in &result.points {
        output::print_vector(&format!("X(t={:.6})", point.time), &point.solution);
    }
    output::print_labelled_solution(netlist, &result.points.last().unwrap().solution);

    if write_graphs {
        graphs::write_graphs(netlist, &result, Path::new("res"))?;
    }
    Ok(())
}
