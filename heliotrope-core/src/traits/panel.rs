//! Solar panel sensor trait

/// Trait for reading one panel's instantaneous output capability
///
/// The exploration algorithm only compares sums of these readings, so
/// the unit just has to be consistent across the array; megawatts match
/// the deployments this was written for.
pub trait SolarPanel {
    /// Current maximum producible output in megawatts
    fn max_output_mw(&self) -> f32;
}
