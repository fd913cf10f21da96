mod contrast;
mod conversion;
mod equality;
mod luminance;
mod math;
mod string;

// contrast
pub(crate) use contrast::{to_contrast_ratio, to_desired_luminance, to_max_contrast_ratio};

// conversion
pub(crate) use conversion::{clamp_channel, hsl_to_rgb, rgb_to_hsl};

// equality
pub use equality::to_eq_bits;

// luminance
pub use luminance::CHANNEL_WEIGHTS;
pub(crate) use luminance::{linearize, to_relative_luminance};

// string
pub(crate) use string::{format_hashed, parse_hashed};
