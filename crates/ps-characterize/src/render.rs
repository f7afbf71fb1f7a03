//! Diagnostic output boundary.
//!
//! Calculations run with `verbose` hand their intermediate data to a
//! [`DiagnosticRenderer`]. Rendering never feeds back into a result.

use crate::bet::BetResult;
use crate::psd::PsdResult;
use tracing::info;

/// Intermediate data of one calculation.
#[derive(Debug, Clone, Copy)]
pub enum Diagnostic<'a> {
    Bet {
        result: &'a BetResult,
        /// Relative pressures of every usable adsorption point.
        pressure: &'a [f64],
        /// BET coordinate `p / (n (1 - p))` for the same points.
        transformed: &'a [f64],
    },
    Psd {
        result: &'a PsdResult,
    },
}

/// Receives diagnostics from verbose calculations (plots, reports...).
pub trait DiagnosticRenderer: Send + Sync {
    fn render(&self, diagnostic: Diagnostic<'_>);
}

/// Renderer that writes a summary of each diagnostic to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRenderer;

impl DiagnosticRenderer for LogRenderer {
    fn render(&self, diagnostic: Diagnostic<'_>) {
        match diagnostic {
            Diagnostic::Bet { result, pressure, .. } => info!(
                area_m2_g = result.area,
                c = result.c_constant,
                n_m = result.monolayer_loading,
                r2 = result.correlation_r2,
                lo = result.selected_range.0,
                hi = result.selected_range.1,
                points = result.selected_points,
                available = pressure.len(),
                "BET"
            ),
            Diagnostic::Psd { result } => info!(
                method = %result.method,
                geometry = %result.geometry,
                points = result.pore_widths.len(),
                cumulative_volume = result.cumulative_volume,
                peak_nm = ?result.principal_peak(),
                "PSD"
            ),
        }
    }
}

/// Emit `diagnostic` to `renderer`, or to the log when none is attached.
pub(crate) fn emit(renderer: Option<&dyn DiagnosticRenderer>, diagnostic: Diagnostic<'_>) {
    match renderer {
        Some(r) => r.render(diagnostic),
        None => LogRenderer.render(diagnostic),
    }
}
