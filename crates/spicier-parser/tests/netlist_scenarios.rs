//! End-to-end scenarios (§8): parse a literal netlist, solve it, and check
//! the result against a closed form or a known circuit law.

use spicier_core::matrix_index;
use spicier_devices::build_stampers;
use spicier_solver::{solve_operating_point, solve_transient, TransientParams};

const TOL: f64 = 1e-9;

fn parse(text: &str) -> spicier_core::Netlist {
    spicier_parser::parse(text).unwrap().netlist
}

#[test]
fn voltage_divider() {
    let netlist = parse(
        "divider\n\
         V1 a 0 10\n\
         R1 a b 1k\n\
         R2 b 0 1k\n\
         .op\n",
    );
    let result = solve_operating_point(&netlist).unwrap();
    let a = matrix_index(netlist.nodes.get("a").unwrap()).unwrap();
    let b = matrix_index(netlist.nodes.get("b").unwrap()).unwrap();
    assert!((result.solution[a] - 10.0).abs() < TOL);
    assert!((result.solution[b] - 5.0).abs() < TOL);

    let v1 = netlist.find_by_label("v1").unwrap();
    let k = v1.current_index.unwrap();
    assert!((result.solution[k] - (-0.005)).abs() < TOL);
}

#[test]
fn vcvs_gain() {
    let netlist = parse(
        "vcvs gain\n\
         V1 in 0 1\n\
         E1 out 0 in 0 5\n\
         R1 out 0 1k\n\
         .op\n",
    );
    let result = solve_operating_point(&netlist).unwrap();
    let out = matrix_index(netlist.nodes.get("out").unwrap()).unwrap();
    assert!((result.solution[out] - 5.0).abs() < TOL);
}

#[test]
fn current_controlled_current_source() {
    let netlist = parse(
        "cccs\n\
         V1 s 0 1\n\
         R1 s a 1\n\
         F1 a 0 V1 2\n\
         .op\n",
    );
    let result = solve_operating_point(&netlist).unwrap();
    let a = matrix_index(netlist.nodes.get("a").unwrap()).unwrap();
    assert!((result.solution[a] - 1.0).abs() < TOL);

    let v1 = netlist.find_by_label("v1").unwrap();
    let k = v1.current_index.unwrap();
    assert!((result.solution[k] - 0.0).abs() < TOL);
}

#[test]
fn rc_transient_starts_from_zero_and_settles_at_source_voltage() {
    let netlist = parse(
        "rc\n\
         V1 a 0 1\n\
         R1 a b 1k\n\
         C1 b 0 1u ic=0\n\
         .tran 1m 5m\n\
         ",
    );
    let params = TransientParams {
        tstep: 1.0e-3,
        tstop: 5.0e-3,
    };
    let res = solve_transient(&netlist, &params).unwrap();
    let b = matrix_index(netlist.nodes.get("b").unwrap()).unwrap();

    // R1*C1 == tstep here, so the backward-Euler recurrence
    // vC(t) = vC(t-h) + (h/C) * iC(t-h) reaches the source voltage in a
    // single step rather than approaching it asymptotically: the first
    // step sees iC(0) = 1e-3 A off the charged R1, giving
    // vC(h) = 0 + (1e-3/1e-6) * 1e-3 = 1.0, after which iC is 0 and vC
    // holds at 1.0 for every later step.
    assert_eq!(res.points[0].solution[b], 0.0);
    for point in &res.points[1..] {
        assert!((point.solution[b] - 1.0).abs() < TOL);
    }
}

#[test]
fn inductor_initial_condition_decays_through_resistor() {
    let netlist = parse(
        "inductor ic\n\
         L1 a 0 1 ic=0.1\n\
         R1 a 0 1\n\
         .tran 0.1 0.3\n\
         ",
    );
    let params = TransientParams {
        tstep: 0.1,
        tstop: 0.3,
    };
    let res = solve_transient(&netlist, &params).unwrap();
    let l1 = netlist.find_by_label("l1").unwrap();
    let k = l1.current_index.unwrap();

    assert!((res.points[0].solution[k] - 0.1).abs() < TOL);
    let mut prev = res.points[0].solution[k];
    for point in &res.points[1..] {
        let i = point.solution[k];
        assert!(i.abs() < prev.abs());
        prev = i;
    }
}

#[test]
fn pwl_source_samples_triangular_waveform() {
    let netlist = parse(
        "pwl\n\
         I1 0 a pwl(0 0 1 1 2 0)\n\
         R1 a 0 1\n\
         .tran 0.5 2\n\
         ",
    );
    let params = TransientParams {
        tstep: 0.5,
        tstop: 2.0,
    };
    let res = solve_transient(&netlist, &params).unwrap();
    let a = matrix_index(netlist.nodes.get("a").unwrap()).unwrap();

    let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
    for (point, exp) in res.points.iter().zip(expected.iter()) {
        assert!((point.solution[a] - exp).abs() < 1e-9);
    }
}

#[test]
fn unsupported_element_is_rejected_at_stamp_time() {
    let netlist = parse(
        "diode\n\
         V1 a 0 1\n\
         D1 a 0 Dmodel\n\
         .op\n",
    );
    let err = build_stampers(&netlist).unwrap_err();
    assert!(matches!(err, spicier_core::Error::UnsupportedElement { .. }));
}
