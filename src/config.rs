/// Flags gating which shape categories produce extra points during a
/// rebuild.
///
/// Passed by reference into the rebuild pass; the engine holds no global
/// configuration state.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Global kill switch. When off, a rebuild clears previously
    /// generated points and adds nothing.
    pub enabled: bool,
    pub line: bool,
    pub triangle: bool,
    pub rectangle: bool,
    pub wedge: bool,
    /// Number of evenly spaced points inserted between line endpoints.
    pub line_subdivisions: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            line: true,
            triangle: true,
            rectangle: true,
            wedge: true,
            line_subdivisions: 1,
        }
    }
}

/// Configuration for the manual snap cursor.
#[derive(Debug, Clone)]
pub struct CursorConfig {
    /// When set, switching to a different source or target piece resets
    /// the corresponding cursor index to the first point.
    pub reset_on_new_piece: bool,
    /// Grid step at [`GridPrecision::Low`](crate::placement::GridPrecision).
    pub grid_step_low: f64,
    /// Grid step at [`GridPrecision::High`](crate::placement::GridPrecision).
    pub grid_step_high: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            reset_on_new_piece: true,
            grid_step_low: 1.0,
            grid_step_high: 0.5,
        }
    }
}
