//! Indicator LED control consumed at shutdown

/// Indicator LEDs owned by the lighting engine
pub trait IndicatorLeds {
    /// Turn every indicator LED off
    fn blank_all(&mut self);
}
