//! Geometry for reaction-coordinate free energy diagrams.
//!
//! A diagram is built as a pipeline of pure steps:
//!
//! - [`parse::parse_energy_text`] reads `label,energy` records into an [`EnergySeries`]
//! - [`normalize::normalize_series`] finds one zero reference shared by all series
//! - [`layout::compute_layout`] turns a zeroed series into plateaus, dashed
//!   connectors and label anchors
//! - [`axis::scale_axis`] widens the vertical range to leave room for labels
//!
//! [`profile::prepare_profiles`] chains these steps for one or many series.
//!
//! ```rust
//! use gibbs_core::{compute_layout, EnergyPoint, EnergySeries, LayoutConfig};
//!
//! let series = EnergySeries::load(vec![
//!     EnergyPoint::new("R", 0.0),
//!     EnergyPoint::new("I", -5.0),
//!     EnergyPoint::new("P", -2.0),
//! ])
//! .unwrap();
//!
//! let layout = compute_layout(&series, &LayoutConfig::default()).unwrap();
//! assert_eq!(layout.plateau_segments.len(), 3);
//! assert_eq!(layout.connector_segments.len(), 2);
//! assert_eq!(layout.connector_segments[0].y_end, -5.0);
//! ```

pub mod axis;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod parse;
pub mod profile;
pub mod series;

pub use axis::{scale_axis, AxisRange};
pub use error::GibbsError;
pub use layout::{compute_layout, LabelAnchor, LayoutConfig, LayoutResult, Segment};
pub use normalize::{normalize_series, NormalizationResult};
pub use parse::{parse_energy_text, ParseOptions};
pub use profile::{prepare_profiles, PreparedProfiles};
pub use series::{EnergyPoint, EnergySeries, ZeroReference};
