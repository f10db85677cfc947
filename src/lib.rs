//! Banded color gradients.
//!
//! A [`Gradient`] is an ordered list of [`Stop`]s over \[0, 1\].  Given
//! tick positions partitioning that interval, [`remap_stops`] moves the
//! stops so that colors gather into flat bands around the ticks while
//! still blending smoothly in between.  A banding of `0.` leaves the
//! gradient untouched, a banding of `1.` gives the flattest bands.
//!
//! ```
//! use rgb::RGB8;
//! use color_banding::{remap_stops, Stop};
//! let stops = vec![Stop::new(0., RGB8::new(0, 0, 0)),
//!                  Stop::new(1., RGB8::new(255, 255, 255))];
//! let banded = remap_stops(&stops, &[0.25, 0.5, 0.75], 0.5)?;
//! assert_eq!(banded.first().map(|s| s.position), Some(0.));
//! assert_eq!(banded.last().map(|s| s.position), Some(1.));
//! # Ok::<(), color_banding::Error>(())
//! ```
//!
//! - [`BandingOptions`] and [`BandLayout`] configure the remapping.
//! - [`BandedGradient`] keeps banded stops in sync with changing ticks.
//! - [`simplify_stops`] drops stops that do not change the rendering.

use rgb::{RGB, RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod error;
mod stop;
mod gradient;
mod options;
mod simplify;
mod banded;
pub mod remap;

pub use error::{Error, Result};
pub use stop::Stop;
pub use gradient::{Gradient, DEFAULT_STOPS};
pub use options::{BandingOptions, BandLayout};
pub use simplify::simplify_stops;
pub use banded::BandedGradient;
pub use remap::{remap_stops, remap_ranges, BandRange};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return `n` uniformly spaced samples of \[0, 1\] (bounds
    /// included when `n ≥ 2`) together with their colors.
    fn samples(&self, n: usize) -> Vec<(f64, Color)> {
        match n {
            0 => vec![],
            1 => vec![(0., self.rgb(0.))],
            _ => {
                let last = (n - 1) as f64;
                (0 .. n).map(|i| { let t = i as f64 / last;
                                   (t, self.rgb(t)) })
                    .collect()
            }
        }
    }
}

/// Colors that can be linearly interpolated.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use color_banding::Tween;
/// let black = RGB8::new(0, 0, 0);
/// let white = RGB8::new(255, 255, 255);
/// assert_eq!(black.tween(&white, 0.5), RGB8::new(128, 128, 128));
/// ```
pub trait Tween: Clone {
    /// Return the color a fraction `t` of the way from `self` to
    /// `to`.  `t` is clamped to \[0, 1\]; a NaN `t` gives `self`.
    fn tween(&self, to: &Self, t: f64) -> Self;
}

#[inline]
fn unit(t: f64) -> f64 {
    if t.is_nan() { 0. } else { t.clamp(0., 1.) }
}

#[inline]
fn mix(a: f64, b: f64, t: f64) -> f64 { a + t * (b - a) }

impl Tween for f64 {
    #[inline]
    fn tween(&self, to: &f64, t: f64) -> f64 { mix(*self, *to, unit(t)) }
}

macro_rules! tween_float { ($($ty: ty { $($c: ident),* }),*) => { $(
    impl Tween for $ty {
        #[inline]
        fn tween(&self, to: &Self, t: f64) -> Self {
            let t = unit(t);
            Self { $($c: mix(self.$c, to.$c, t)),* }
        }
    } )*
}}

tween_float!(RGB<f64> { r, g, b }, RGBA<f64> { r, g, b, a });

// Integer channels are rounded to the nearest representable value.
macro_rules! tween_int { ($($ty: ty: $n: ty { $($c: ident),* }),*) => { $(
    impl Tween for $ty {
        #[inline]
        fn tween(&self, to: &Self, t: f64) -> Self {
            let t = unit(t);
            Self { $($c: mix(self.$c as f64, to.$c as f64, t).round() as $n),* }
        }
    } )*
}}

tween_int!(RGB8: u8 { r, g, b }, RGB16: u16 { r, g, b },
           RGBA8: u8 { r, g, b, a }, RGBA16: u16 { r, g, b, a });
