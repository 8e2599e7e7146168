//! Parse-result types: only the two analysis directives this grammar
//! supports (§6.1). DC sweep, AC analysis, `.subckt`, `.print`, and `.ic`
//! are not part of this grammar.

use spicier_core::Netlist;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisCommand {
    Op,
    Tran { tstep: f64, tstop: f64 },
}

pub struct ParseResult {
    pub netlist: Netlist,
    pub analysis: Option<AnalysisCommand>,
}
