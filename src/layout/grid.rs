//! Aspect-preserving grid sizing.
//!
//! Given a container and a number of equally shaped items, find the widest
//! item width at which a uniform grid of them fits without vertical
//! scrolling. A closed-form estimate of the column count seeds a short
//! linear search; when nothing fits above the minimum width the packer
//! settles for the minimum and asks for scrolling.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Slack when comparing a grid height against its container.
const HEIGHT_TOLERANCE: f64 = 1e-6;

/// Geometry shared by every item in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Item width divided by item height.
    pub aspect_ratio: f64,

    /// Narrowest width an item may be given.
    pub min_width: f64,

    /// Border drawn around each item. An item takes up twice this in each
    /// direction on top of its own size.
    pub border_width: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            aspect_ratio: 2.0 / 3.0,
            min_width: 55.0,
            border_width: 3.0,
        }
    }
}

impl GridSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    #[must_use]
    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, border_width: f64) -> Self {
        self.border_width = border_width;
        self
    }

    /// Extra space each item needs per axis for its border.
    #[must_use]
    pub fn border_allowance(&self) -> f64 {
        2.0 * self.border_width
    }

    /// Check that the geometry is usable.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(EngineError::InvalidGridSpec(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        if !(self.min_width.is_finite() && self.min_width >= 0.0) {
            return Err(EngineError::InvalidGridSpec(format!(
                "minimum width must be non-negative, got {}",
                self.min_width
            )));
        }
        if !(self.border_width.is_finite() && self.border_width >= 0.0) {
            return Err(EngineError::InvalidGridSpec(format!(
                "border width must be non-negative, got {}",
                self.border_width
            )));
        }
        Ok(())
    }
}

/// Result of packing a grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Width to draw each item at, excluding its border.
    pub card_width: f64,

    /// Columns the items wrap into at `card_width`.
    pub columns: usize,

    pub rows: usize,

    /// Height of the whole grid, borders included.
    pub total_height: f64,

    /// The grid is taller than the container and must be scrollable.
    pub needs_scroll: bool,
}

impl GridLayout {
    /// Layout of an empty grid.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            card_width: 0.0,
            columns: 0,
            rows: 0,
            total_height: 0.0,
            needs_scroll: false,
        }
    }
}

/// A packer bound to one validated `GridSpec`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPacker {
    spec: GridSpec,
}

impl GridPacker {
    pub fn new(spec: GridSpec) -> Result<Self, EngineError> {
        spec.validate()?;
        Ok(Self { spec })
    }

    #[must_use]
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Lay out `item_count` items in a `width` by `height` container.
    #[must_use]
    pub fn layout(&self, width: f64, height: f64, item_count: usize) -> GridLayout {
        pack(&self.spec, width, height, item_count)
    }
}

impl Default for GridPacker {
    fn default() -> Self {
        Self {
            spec: GridSpec::default(),
        }
    }
}

/// Lay out `item_count` items of the given aspect ratio in a `width` by
/// `height` container.
///
/// The parameters are not validated; use `GridPacker` for that.
#[must_use]
pub fn compute_layout(
    width: f64,
    height: f64,
    item_count: usize,
    aspect_ratio: f64,
    min_width: f64,
    border_width: f64,
) -> GridLayout {
    let spec = GridSpec {
        aspect_ratio,
        min_width,
        border_width,
    };
    pack(&spec, width, height, item_count)
}

fn pack(spec: &GridSpec, width: f64, height: f64, item_count: usize) -> GridLayout {
    if item_count == 0 {
        return GridLayout::empty();
    }
    if width <= 0.0 || height <= 0.0 {
        return scrolling_at_min(spec, width, height, item_count);
    }

    let n = item_count as f64;
    let allowance = spec.border_allowance();

    // Seed: columns that would fill the container if borders took no room.
    let seed_columns = estimate_columns(width, height, n, spec.aspect_ratio);
    let seed_rows = (n / seed_columns as f64).ceil();

    // Refine once with the border space of the seed grid taken out.
    let bordered_width = width - seed_columns as f64 * allowance;
    let bordered_height = height - seed_rows * allowance;
    if bordered_width <= 0.0 || bordered_height <= 0.0 {
        return scrolling_at_min(spec, width, height, item_count);
    }
    let columns = estimate_columns(bordered_width, bordered_height, n, spec.aspect_ratio);

    if bordered_width / (columns as f64) < spec.min_width {
        return scrolling_at_min(spec, width, height, item_count);
    }

    for candidate in columns..=item_count {
        let c = candidate as f64;
        let column_width = (width - allowance * c) / c;
        let row_height = column_width / spec.aspect_ratio;
        let rows = (n / c).ceil();
        if (row_height + spec.border_width) * rows <= height {
            let card_width = column_width - spec.border_width;
            if card_width < spec.min_width {
                return scrolling_at_min(spec, width, height, item_count);
            }
            return finish(spec, card_width, width, height, item_count);
        }
    }

    // Nothing fits: use the available height for a single row.
    let fallback = spec.min_width.max(bordered_height * spec.aspect_ratio);
    finish(spec, fallback, width, height, item_count)
}

/// `ceil(sqrt(w * n / (a * h)))`, at least one.
fn estimate_columns(width: f64, height: f64, n: f64, aspect_ratio: f64) -> usize {
    let estimate = (width * n / (aspect_ratio * height)).sqrt().ceil();
    if estimate.is_finite() && estimate >= 1.0 {
        estimate as usize
    } else {
        1
    }
}

fn scrolling_at_min(spec: &GridSpec, width: f64, height: f64, item_count: usize) -> GridLayout {
    GridLayout {
        needs_scroll: true,
        ..finish(spec, spec.min_width, width, height, item_count)
    }
}

/// Wrap the items at `card_width` and measure the resulting grid.
fn finish(spec: &GridSpec, card_width: f64, width: f64, height: f64, item_count: usize) -> GridLayout {
    let allowance = spec.border_allowance();

    let fit = (width / (card_width + allowance)).floor();
    let columns = if fit.is_finite() && fit >= 1.0 {
        (fit as usize).min(item_count)
    } else {
        1
    };
    let rows = item_count.div_ceil(columns);
    let total_height = (card_width / spec.aspect_ratio + allowance) * rows as f64;

    GridLayout {
        card_width,
        columns,
        rows,
        total_height,
        needs_scroll: total_height > height + HEIGHT_TOLERANCE,
    }
}
