//! Bearing Solver Example - Friswell short journal bearing
//!
//! Runs the reference bearing from Friswell et al. (load 525 N, L/D = 0.3) or,
//! when a path is given, a bearing read from a JSON configuration file.

use anyhow::Context;
use log::info;

use bearing_solver::prelude::*;

fn friswell_bearing() -> BearingConfig {
    BearingConfig {
        nz: 8,
        ntheta: 64,
        nradius: 11,
        length: 0.03,
        omega: 157.1,
        p_in: 0.0,
        p_out: 0.0,
        radius_rotor: 0.0499,
        radius_stator: 0.05,
        viscosity: 0.1,
        density: 860.0,
        beta: None,
        eccentricity: None,
        load: Some(525.0),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => BearingConfig::from_json_file(&path)
            .with_context(|| format!("failed to load bearing configuration from {path}"))?,
        None => friswell_bearing(),
    };

    println!("=== Bearing Solver Example ===\n");

    let mut bearing = JournalBearing::new(config)?;
    info!("bearing built with {} x {} nodes", bearing.nz(), bearing.ntheta());

    println!("Operating point:");
    println!("  Radial clearance:   {:.4e} m", bearing.radial_clearance());
    println!("  Eccentricity ratio: {:.4}", bearing.eccentricity_ratio());
    println!("  Eccentricity:       {:.4e} m", bearing.eccentricity());
    println!("  Load:               {:.2} N", bearing.load());
    println!("  Attitude angle:     {:.2}°", bearing.attitude_angle().to_degrees());
    println!("  Bearing type:       {:?} (L/D = {:.3})", bearing.bearing_type(), bearing.geometry().slenderness());

    let method = bearing.solve_analytical(AnalyticalMethod::Auto);
    let report = bearing.solve_numerical()?;

    println!("\nPressure fields:");
    println!("  Analytical ({:?}) peak: {:.4e} Pa", method, bearing.p_mat_analytical().max());
    println!(
        "  Numerical ({:?}, {} unknowns) peak: {:.4e} Pa",
        report.method,
        report.unknowns,
        bearing.p_mat_numerical().max()
    );

    let analytical = bearing.oil_film_force(FieldSource::Analytical);
    let numerical = bearing.oil_film_force(FieldSource::Numerical);
    println!("\nOil film force (normal, tangential):");
    println!("  Analytical field: ({:.4e}, {:.4e}) N", analytical.normal, analytical.tangential);
    println!("  Numerical field:  ({:.4e}, {:.4e}) N", numerical.normal, numerical.tangential);
    if bearing.eccentricity_ratio() > 0.0 {
        let closed = bearing.closed_form_force(Approximation::Short)?;
        println!("  Short closed form: ({:.4e}, {:.4e}) N", closed.normal, closed.tangential);

        let k = bearing.stiffness_matrix()?;
        let c = bearing.damping_matrix()?;
        println!("\nStiffness (N/m):");
        println!("  Kxx = {:12.4e}  Kxy = {:12.4e}", k.xx, k.xy);
        println!("  Kyx = {:12.4e}  Kyy = {:12.4e}", k.yx, k.yy);
        println!("\nDamping (N s/m):");
        println!("  Cxx = {:12.4e}  Cxy = {:12.4e}", c.xx, c.xy);
        println!("  Cyx = {:12.4e}  Cyy = {:12.4e}", c.yx, c.yy);
    }

    println!("\n=== Summary ===");
    println!("{}", serde_json::to_string_pretty(&bearing.summary())?);

    Ok(())
}
