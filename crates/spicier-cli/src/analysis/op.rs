use anyhow::Result;
use spicier_core::Netlist;

use crate::output;

pub fn run(netlist: &Netlist) -> Result<()> {
    log::info!(
        "running operating-point analysis ({} nodes, {} unknowns)",
        netlist.node_count(),
        netlist.dimension()
    );
    let result = spicier_solver::solve_operating_point(netlist)?;
    output::print_operating_point(netlist, &result);
    Ok(())
}
