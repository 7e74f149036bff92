//! Journal bearing model - resolved state and pressure fields

use log::{debug, info};
use serde::Serialize;

use crate::analysis::{
    AnalyticalMethod, Approximation, FieldSource, NumericalOptions, Quadrature, RootFindingOptions,
};
use crate::capacity;
use crate::coefficients;
use crate::config::BearingConfig;
use crate::elements::{BearingGeometry, BearingType, Grid, Lubricant};
use crate::error::BearingResult;
use crate::math::Mat;
use crate::pressure::{analytical, numerical, FilmProblem};
use crate::results::{BearingSummary, DynamicCoefficients, NumericalReport, OilFilmForce};

/// A fluid-film journal bearing at one operating point
///
/// Construction resolves the eccentricity/load pair; the analytical and
/// numerical pressure fields start at zero and are filled independently by
/// [`solve_analytical`](Self::solve_analytical) and
/// [`solve_numerical`](Self::solve_numerical).
///
/// Serializes for reporting only. Rebuild from the stored `config` through
/// [`JournalBearing::new`] so the inputs are validated again.
#[derive(Debug, Clone, Serialize)]
pub struct JournalBearing {
    config: BearingConfig,
    geometry: BearingGeometry,
    lubricant: Lubricant,
    grid: Grid,
    radial_clearance: f64,
    eccentricity_ratio: f64,
    eccentricity: f64,
    load: f64,
    beta: f64,

    /// Analytical [z][θ] pressure field in Pa
    p_mat_analytical: Mat,
    /// Numerical [z][θ] pressure field in Pa
    p_mat_numerical: Mat,

    analytical_method: Option<AnalyticalMethod>,
    numerical_report: Option<NumericalReport>,
}

impl JournalBearing {
    /// Build a bearing with default root-finding options
    pub fn new(config: BearingConfig) -> BearingResult<Self> {
        Self::with_options(config, RootFindingOptions::default())
    }

    /// Build a bearing, resolving the missing eccentricity or load
    pub fn with_options(config: BearingConfig, options: RootFindingOptions) -> BearingResult<Self> {
        config.validate()?;

        let geometry = BearingGeometry::new(config.length, config.radius_rotor, config.radius_stator);
        let lubricant = Lubricant::new(config.viscosity, config.density);
        let grid = Grid::new(config.nz, config.ntheta, config.nradius, config.length);
        let radial_clearance = geometry.radial_clearance();
        let beta = config.beta.unwrap_or(0.0);

        let (eccentricity_ratio, eccentricity, load) = match (config.eccentricity, config.load) {
            (Some(e), _) => {
                let ratio = e / radial_clearance;
                let load = capacity::short_bearing_load(ratio, &geometry, &lubricant, config.omega);
                (ratio, e, load)
            }
            (None, Some(load)) => {
                let ratio = capacity::eccentricity_ratio_for_load(
                    load,
                    &geometry,
                    &lubricant,
                    config.omega,
                    &options,
                )?;
                (ratio, ratio * radial_clearance, load)
            }
            (None, None) => unreachable!("validated above"),
        };

        debug!(
            "bearing resolved: c = {:e} m, ε = {:.6}, e = {:e} m, W = {:.6e} N, β = {:.4} rad, L/D = {:.3} ({:?})",
            radial_clearance,
            eccentricity_ratio,
            eccentricity,
            load,
            beta,
            geometry.slenderness(),
            geometry.bearing_type()
        );

        Ok(Self {
            geometry,
            lubricant,
            grid,
            radial_clearance,
            eccentricity_ratio,
            eccentricity,
            load,
            beta,
            p_mat_analytical: Mat::zeros(config.nz, config.ntheta),
            p_mat_numerical: Mat::zeros(config.nz, config.ntheta),
            analytical_method: None,
            numerical_report: None,
            config,
        })
    }

    fn problem(&self) -> FilmProblem<'_> {
        FilmProblem {
            geometry: &self.geometry,
            lubricant: &self.lubricant,
            grid: &self.grid,
            omega: self.config.omega,
            eccentricity_ratio: self.eccentricity_ratio,
            beta: self.beta,
            p_in: self.config.p_in,
            p_out: self.config.p_out,
        }
    }

    // ========================
    // Pressure Solves
    // ========================

    /// Fill the analytical field with the given closed-form method
    ///
    /// Returns the concrete method used, which differs from `method` only for `Auto`.
    pub fn solve_analytical(&mut self, method: AnalyticalMethod) -> AnalyticalMethod {
        let resolved = analytical::resolve_method(method, self.geometry.bearing_type());
        self.p_mat_analytical = analytical::analytical_field(&self.problem(), resolved);
        self.analytical_method = Some(resolved);

        info!(
            "analytical field solved ({:?}), peak {:.6e} Pa",
            resolved,
            self.p_mat_analytical.max()
        );
        resolved
    }

    /// Solve the Reynolds equation with the default direct solver
    pub fn solve_numerical(&mut self) -> BearingResult<NumericalReport> {
        self.solve_numerical_with(NumericalOptions::default())
    }

    /// Solve the Reynolds equation with the given solver options
    ///
    /// The numerical field is only replaced when the solve succeeds.
    pub fn solve_numerical_with(&mut self, options: NumericalOptions) -> BearingResult<NumericalReport> {
        let (field, report) = numerical::numerical_field(&self.problem(), &options)?;
        self.p_mat_numerical = field;
        self.numerical_report = Some(report);

        info!(
            "numerical field solved ({:?}, {} unknowns, {} iterations), peak {:.6e} Pa",
            report.method,
            report.unknowns,
            report.iterations,
            self.p_mat_numerical.max()
        );
        Ok(report)
    }

    // ========================
    // Forces and Coefficients
    // ========================

    /// Integrate a stored field with Simpson's rule
    pub fn oil_film_force(&self, source: FieldSource) -> OilFilmForce {
        self.oil_film_force_with(source, Quadrature::default())
    }

    /// Integrate a stored field with the given rule
    pub fn oil_film_force_with(&self, source: FieldSource, rule: Quadrature) -> OilFilmForce {
        coefficients::integrate_oil_film_force(
            &self.grid,
            self.pressure_field(source),
            self.geometry.radius_rotor,
            self.beta,
            rule,
        )
    }

    /// Closed-form film force at the resolved eccentricity
    pub fn closed_form_force(&self, approximation: Approximation) -> BearingResult<OilFilmForce> {
        coefficients::closed_form_force(
            approximation,
            &self.geometry,
            &self.lubricant,
            self.config.omega,
            self.eccentricity_ratio,
        )
    }

    /// Short-bearing stiffness coefficients at the resolved operating point
    pub fn stiffness_matrix(&self) -> BearingResult<DynamicCoefficients> {
        coefficients::stiffness_matrix(self.load, self.eccentricity_ratio, self.radial_clearance)
    }

    /// Short-bearing damping coefficients at the resolved operating point
    pub fn damping_matrix(&self) -> BearingResult<DynamicCoefficients> {
        coefficients::damping_matrix(
            self.load,
            self.eccentricity_ratio,
            self.radial_clearance,
            self.config.omega,
        )
    }

    // ========================
    // Result Access
    // ========================

    /// Field selected by `source`
    pub fn pressure_field(&self, source: FieldSource) -> &Mat {
        match source {
            FieldSource::Analytical => &self.p_mat_analytical,
            FieldSource::Numerical => &self.p_mat_numerical,
        }
    }

    pub fn p_mat_analytical(&self) -> &Mat {
        &self.p_mat_analytical
    }

    pub fn p_mat_numerical(&self) -> &Mat {
        &self.p_mat_numerical
    }

    /// Method of the last analytical solve
    pub fn analytical_method(&self) -> Option<AnalyticalMethod> {
        self.analytical_method
    }

    /// Statistics of the last successful numerical solve
    pub fn numerical_report(&self) -> Option<NumericalReport> {
        self.numerical_report
    }

    pub fn config(&self) -> &BearingConfig {
        &self.config
    }

    pub fn geometry(&self) -> &BearingGeometry {
        &self.geometry
    }

    pub fn lubricant(&self) -> &Lubricant {
        &self.lubricant
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn eccentricity_ratio(&self) -> f64 {
        self.eccentricity_ratio
    }

    /// Eccentricity in m
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Static load in N
    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn radial_clearance(&self) -> f64 {
        self.radial_clearance
    }

    /// Angle of the widest film in rad
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Rotor speed in rad/s
    pub fn omega(&self) -> f64 {
        self.config.omega
    }

    pub fn nz(&self) -> usize {
        self.grid.nz
    }

    pub fn ntheta(&self) -> usize {
        self.grid.ntheta
    }

    pub fn nradius(&self) -> usize {
        self.grid.nradius
    }

    pub fn z_coords(&self) -> Vec<f64> {
        self.grid.z_coords()
    }

    pub fn theta_coords(&self) -> Vec<f64> {
        self.grid.theta_coords()
    }

    pub fn bearing_type(&self) -> BearingType {
        self.geometry.bearing_type()
    }

    /// Short-bearing attitude angle in rad
    pub fn attitude_angle(&self) -> f64 {
        capacity::attitude_angle(self.eccentricity_ratio)
    }

    /// Modified Sommerfeld number at the resolved load
    pub fn sommerfeld_number(&self) -> f64 {
        capacity::modified_sommerfeld_number(self.load, &self.geometry, &self.lubricant, self.config.omega)
    }

    /// Local film thickness at angle θ
    pub fn film_thickness(&self, theta: f64) -> f64 {
        self.geometry.film_thickness(self.eccentricity_ratio, self.beta, theta)
    }

    // ========================
    // Film Geometry
    // ========================

    /// Journal centre (xi, yi) relative to the bush centre
    pub fn rotor_centre(&self) -> [f64; 2] {
        self.geometry.rotor_centre(self.eccentricity, self.beta)
    }

    /// Bush surface point at every circumferential node
    pub fn stator_points(&self) -> Vec<[f64; 2]> {
        (0..self.grid.ntheta)
            .map(|j| self.geometry.stator_point(self.grid.theta(j)))
            .collect()
    }

    /// Journal surface point at every circumferential node
    pub fn rotor_points(&self) -> Vec<[f64; 2]> {
        let centre = self.rotor_centre();
        (0..self.grid.ntheta)
            .map(|j| self.geometry.rotor_point(centre, self.grid.theta(j)))
            .collect()
    }

    /// `nradius` points across the film along the ray through circumferential node `j`
    ///
    /// Runs from the journal surface to the bush surface. Returns an empty list
    /// when `j` is out of range.
    pub fn radial_nodes(&self, j: usize) -> Vec<[f64; 2]> {
        if j >= self.grid.ntheta {
            return Vec::new();
        }
        let theta = self.grid.theta(j);
        let inner = self.geometry.rotor_surface_radius(self.rotor_centre(), theta);
        self.grid
            .radial_positions(inner, self.geometry.radius_stator)
            .into_iter()
            .map(|r| [r * theta.cos(), r * theta.sin()])
            .collect()
    }

    /// Get bearing summary
    pub fn summary(&self) -> BearingSummary {
        BearingSummary {
            eccentricity_ratio: self.eccentricity_ratio,
            eccentricity: self.eccentricity,
            load: self.load,
            radial_clearance: self.radial_clearance,
            attitude_angle: self.attitude_angle(),
            sommerfeld_number: self.sommerfeld_number(),
            slenderness: self.geometry.slenderness(),
            bearing_type: self.bearing_type(),
            analytical_method: self.analytical_method,
            max_pressure_analytical: self.analytical_method.map(|_| self.p_mat_analytical.max()),
            max_pressure_numerical: self.numerical_report.map(|_| self.p_mat_numerical.max()),
            numerical_report: self.numerical_report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BearingError;

    fn config() -> BearingConfig {
        BearingConfig {
            nz: 8,
            ntheta: 33,
            nradius: 5,
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

    #[test]
    fn test_bearing_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JournalBearing>();
    }

    #[test]
    fn test_fields_start_empty() {
        let bearing = JournalBearing::new(config()).unwrap();
        assert_eq!(bearing.p_mat_analytical().shape(), (8, 33));
        assert_eq!(bearing.p_mat_numerical().max(), 0.0);
        assert!(bearing.summary().max_pressure_numerical.is_none());
    }

    #[test]
    fn test_solves_touch_only_their_field() {
        let mut bearing = JournalBearing::new(config()).unwrap();
        bearing.solve_analytical(AnalyticalMethod::ShortBearing);
        assert!(bearing.p_mat_analytical().max() > 0.0);
        assert_eq!(bearing.p_mat_numerical().max(), 0.0);

        let analytical = bearing.p_mat_analytical().clone();
        bearing.solve_numerical().unwrap();
        assert_eq!(bearing.p_mat_analytical(), &analytical);
    }

    #[test]
    fn test_failed_solve_keeps_field() {
        let mut bearing = JournalBearing::new(config()).unwrap();
        let err = bearing
            .solve_numerical_with(NumericalOptions::relaxation(1.2).with_max_iter(2))
            .unwrap_err();
        assert!(matches!(err, BearingError::SolverDivergence { iterations: 2, .. }));
        assert_eq!(bearing.p_mat_numerical().max(), 0.0);
        assert!(bearing.numerical_report().is_none());
    }

    #[test]
    fn test_auto_method_resolution() {
        let mut bearing = JournalBearing::new(config()).unwrap();
        assert_eq!(bearing.bearing_type(), BearingType::Short);
        assert_eq!(bearing.solve_analytical(AnalyticalMethod::Auto), AnalyticalMethod::ShortBearing);
    }

    #[test]
    fn test_radial_nodes_span_film() {
        let bearing = JournalBearing::new(config()).unwrap();
        let j = 5;
        let nodes = bearing.radial_nodes(j);
        assert_eq!(nodes.len(), 5);
        let r = |p: [f64; 2]| p[0].hypot(p[1]);
        let gap = r(nodes[4]) - r(nodes[0]);
        let h = bearing.film_thickness(bearing.grid().theta(j));
        assert!((gap - h).abs() < 1e-3 * h);
        assert!(bearing.radial_nodes(99).is_empty());
    }

    #[test]
    fn test_serialized_bearing_rebuilds_from_config() {
        let mut bearing = JournalBearing::new(config()).unwrap();
        bearing.solve_analytical(AnalyticalMethod::ShortBearing);
        let json = serde_json::to_value(&bearing).unwrap();

        let stored: BearingConfig = serde_json::from_value(json["config"].clone()).unwrap();
        let rebuilt = JournalBearing::new(stored).unwrap();
        assert_eq!(rebuilt.p_mat_analytical().shape(), (rebuilt.nz(), rebuilt.ntheta()));
        assert!((rebuilt.eccentricity_ratio() - bearing.eccentricity_ratio()).abs() < 1e-9);

        // A tampered blob goes through validation again
        let mut tampered = json["config"].clone();
        tampered["radius_rotor"] = serde_json::json!(0.06);
        let stored: BearingConfig = serde_json::from_value(tampered).unwrap();
        assert!(matches!(JournalBearing::new(stored), Err(BearingError::Configuration(_))));
    }
}
