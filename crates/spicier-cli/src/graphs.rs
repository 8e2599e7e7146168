//! Optional PNG waveform output, enabled by `--graphs` (§6.3, §9). One PNG
//! per unknown (node voltage or Group 2 branch current) is written under
//! `res/`.

use std::fs;
use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use spicier_core::{matrix_index, Netlist};
use spicier_solver::TransientResult;

pub fn write_graphs(netlist: &Netlist, result: &TransientResult, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    for (_, name) in netlist.nodes.ordered_names() {
        let idx = matrix_index(netlist.nodes.get(name).unwrap()).unwrap();
        let series = result.waveform(idx);
        let path = out_dir.join(format!("{name}.png"));
        render_series(&path, &format!("V({name})"), &series)?;
    }

    for element in &netlist.elements {
        if let Some(k) = element.current_index {
            let series = result.waveform(k);
            let path = out_dir.join(format!("{}.png", element.label));
            render_series(&path, &format!("I({})", element.label), &series)?;
        }
    }

    Ok(())
}

fn render_series(path: &Path, title: &str, series: &[(f64, f64)]) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let (t_min, t_max) = bounds(series.iter().map(|(t, _)| *t));
    let (y_min, y_max) = bounds(series.iter().map(|(_, y)| *y));
    let y_pad = ((y_max - y_min).abs() * 0.1).max(1e-9);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(t_min..t_max.max(t_min + 1e-12), (y_min - y_pad)..(y_max + y_pad))?;

    chart.configure_mesh().draw()?;
    chart.draw_series(LineSeries::new(series.iter().copied(), &BLUE))?;
    root.present()?;
    Ok(())
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
