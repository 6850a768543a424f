//! # lupton-io
//!
//! File and resampling collaborators for lupton RGB composition, backed by
//! the [`image`] crate.
//!
//! - [`read_plane`] - Load one band from PNG, TIFF or JPEG
//! - [`write_rgb`] - Save an [`RgbImage8`](lupton_core::RgbImage8), format from the extension
//! - [`ImageResampler`] - [`Resampler`](lupton_core::Resampler) with bilinear filtering by default
//!
//! # Example
//!
//! ```rust,ignore
//! use lupton_io::{read_plane, write_rgb, ImageResampler};
//! use lupton_ops::{make_lupton_rgb, LuptonParams, ResizeOptions};
//!
//! let r = read_plane("i.tif")?;
//! let g = read_plane("r.tif")?;
//! let b = read_plane("g.tif")?;
//! let params = LuptonParams { size: ResizeOptions::width(800), ..Default::default() };
//! let rgb = make_lupton_rgb(&r, Some(&g), Some(&b), &params, Some(&ImageResampler::default()))?;
//! write_rgb("field.png", &rgb)?;
//! ```

#![warn(missing_docs)]

mod error;
mod read;
mod resample;
mod write;

pub use error::{IoError, IoResult};
pub use read::read_plane;
pub use resample::ImageResampler;
pub use write::write_rgb;

pub use image::imageops::FilterType;
