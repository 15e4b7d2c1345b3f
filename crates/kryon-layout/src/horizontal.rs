//! Single-row list layout.
//!
//! Items are placed left to right inside one horizontal band. The band is
//! as tall as the tallest item (or the viewport's inner height when that is
//! larger) and shorter items are aligned inside it. The viewport width can be
//! decoupled from the number of items by requesting a column count, which
//! lets a container show a fixed number of items and scroll the rest.

use std::cell::RefCell;

use glam::Vec2;
use kryon_core::{KryonError, LayoutDimension, LayoutItem, LayoutOverride, Result};
use tracing::{debug, trace};

use crate::{
    ChangeNotifier, HorizontalAlign, LayoutConfig, LayoutEngine, LayoutResult, ListenerId,
    MeasurementConstraints, VerticalAlign,
};

/// Horizontal list layout engine.
///
/// Owns only its [`LayoutConfig`]; every setter notifies subscribers
/// synchronously, even when the assigned value equals the current one.
/// Setters take `&self` and release the configuration before notifying, so
/// a listener may re-run [`LayoutEngine::layout`] or change the configuration
/// again on the same engine. Cycles between listeners are the caller's to break.
#[derive(Debug, Default)]
pub struct HorizontalListLayout {
    config: RefCell<LayoutConfig>,
    notifier: ChangeNotifier,
}

impl HorizontalListLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: RefCell::new(config),
            notifier: ChangeNotifier::new(),
        })
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LayoutConfig {
        self.config.borrow().clone()
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ListenerId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Replace the whole configuration with a single notification
    pub fn set_config(&self, config: LayoutConfig) -> Result<()> {
        config.validate()?;
        *self.config.borrow_mut() = config;
        self.changed("config");
        Ok(())
    }

    pub fn padding_top(&self) -> f32 {
        self.config.borrow().padding_top
    }

    pub fn set_padding_top(&self, value: f32) {
        self.config.borrow_mut().padding_top = value;
        self.changed("padding_top");
    }

    pub fn padding_right(&self) -> f32 {
        self.config.borrow().padding_right
    }

    pub fn set_padding_right(&self, value: f32) {
        self.config.borrow_mut().padding_right = value;
        self.changed("padding_right");
    }

    pub fn padding_bottom(&self) -> f32 {
        self.config.borrow().padding_bottom
    }

    pub fn set_padding_bottom(&self, value: f32) {
        self.config.borrow_mut().padding_bottom = value;
        self.changed("padding_bottom");
    }

    pub fn padding_left(&self) -> f32 {
        self.config.borrow().padding_left
    }

    pub fn set_padding_left(&self, value: f32) {
        self.config.borrow_mut().padding_left = value;
        self.changed("padding_left");
    }

    /// Set all four paddings at once
    pub fn set_padding(&self, value: f32) {
        {
            let mut config = self.config.borrow_mut();
            config.padding_top = value;
            config.padding_right = value;
            config.padding_bottom = value;
            config.padding_left = value;
        }
        self.changed("padding");
    }

    pub fn gap(&self) -> f32 {
        self.config.borrow().gap
    }

    pub fn set_gap(&self, value: f32) {
        self.config.borrow_mut().gap = value;
        self.changed("gap");
    }

    pub fn horizontal_align(&self) -> HorizontalAlign {
        self.config.borrow().horizontal_align
    }

    pub fn set_horizontal_align(&self, value: HorizontalAlign) {
        self.config.borrow_mut().horizontal_align = value;
        self.changed("horizontal_align");
    }

    pub fn vertical_align(&self) -> VerticalAlign {
        self.config.borrow().vertical_align
    }

    pub fn set_vertical_align(&self, value: VerticalAlign) {
        self.config.borrow_mut().vertical_align = value;
        self.changed("vertical_align");
    }

    pub fn requested_column_count(&self) -> Option<u32> {
        self.config.borrow().requested_column_count
    }

    /// Zero columns is rejected and leaves the configuration untouched.
    pub fn set_requested_column_count(&self, value: Option<u32>) -> Result<()> {
        if value == Some(0) {
            return Err(KryonError::InvalidColumnCount(0));
        }
        self.config.borrow_mut().requested_column_count = value;
        self.changed("requested_column_count");
        Ok(())
    }

    pub fn typical_item_width(&self) -> Option<f32> {
        self.config.borrow().typical_item_width
    }

    pub fn set_typical_item_width(&self, value: Option<f32>) {
        self.config.borrow_mut().typical_item_width = value;
        self.changed("typical_item_width");
    }

    fn changed(&self, property: &'static str) {
        debug!(property, "Layout configuration changed");
        self.notifier.notify();
    }

    /// Viewport width implied by the requested column count, if any.
    ///
    /// The representative width is the typical item width, else the first
    /// item's width, else zero when there are no items.
    fn column_viewport_width(config: &LayoutConfig, sizes: &[Vec2]) -> Option<f32> {
        let columns = config.requested_column_count? as f32;
        let unit_width = config
            .typical_item_width
            .or_else(|| sizes.first().map(|size| size.x))
            .unwrap_or(0.0);
        Some(config.horizontal_padding() + columns * unit_width + (columns - 1.0) * config.gap)
    }

    /// Share whatever width the fixed-size items leave among the
    /// percentage-width items. Totals above 100% are normalised.
    fn resolve_percent_widths(
        config: &LayoutConfig,
        sizes: &mut [Vec2],
        overrides: &[LayoutOverride],
        viewport_width: f32,
    ) {
        let mut fixed_width = 0.0;
        let mut total_fraction = 0.0;
        let mut has_percentages = false;
        for (size, layout) in sizes.iter().zip(overrides) {
            match layout.width {
                LayoutDimension::Percentage(fraction) => {
                    has_percentages = true;
                    total_fraction += fraction;
                }
                _ => fixed_width += size.x,
            }
        }
        if !has_percentages {
            return;
        }

        let available = (viewport_width
            - config.horizontal_padding()
            - config.total_gap(sizes.len())
            - fixed_width)
            .max(0.0);
        let available = if total_fraction > 1.0 {
            available / total_fraction
        } else {
            available
        };

        for (size, layout) in sizes.iter_mut().zip(overrides) {
            if layout.width.is_percentage() {
                size.x = layout.width.resolve(size.x, Some(available));
            }
        }
    }

    fn resolve_percent_heights(
        config: &LayoutConfig,
        sizes: &mut [Vec2],
        overrides: &[LayoutOverride],
        viewport_height: f32,
    ) {
        let available = (viewport_height - config.vertical_padding()).max(0.0);
        for (size, layout) in sizes.iter_mut().zip(overrides) {
            if layout.height.is_percentage() {
                size.y = layout.height.resolve(size.y, Some(available));
            }
        }
    }
}

fn is_valid_measurement(size: Vec2) -> bool {
    size.is_finite() && size.x >= 0.0 && size.y >= 0.0
}

impl LayoutEngine for HorizontalListLayout {
    fn layout<I: LayoutItem>(
        &self,
        items: &mut [I],
        constraints: &MeasurementConstraints,
    ) -> Result<LayoutResult> {
        let config = self.config();

        // Validate everything before touching any item.
        let mut measured_sizes = Vec::with_capacity(items.len());
        let mut overrides = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let measured = item.measured_size();
            if !is_valid_measurement(measured) {
                return Err(KryonError::InvalidMeasurement {
                    index,
                    width: measured.x,
                    height: measured.y,
                });
            }
            measured_sizes.push(measured);
            overrides.push(item.layout_override().unwrap_or_default());
        }

        let mut sizes: Vec<Vec2> = measured_sizes
            .iter()
            .zip(&overrides)
            .map(|(measured, layout)| layout.apply_explicit(*measured))
            .collect();

        let explicit_width = constraints.explicit_width();
        let explicit_height = constraints.explicit_height();
        if let Some(width) = explicit_width {
            Self::resolve_percent_widths(&config, &mut sizes, &overrides, width);
        }
        if let Some(height) = explicit_height {
            Self::resolve_percent_heights(&config, &mut sizes, &overrides, height);
        }

        let items_width: f32 = sizes.iter().map(|size| size.x).sum();
        let tallest = sizes.iter().map(|size| size.y).fold(0.0, f32::max);
        let content_width = config.horizontal_padding() + items_width + config.total_gap(sizes.len());
        let content_height = config.vertical_padding() + tallest;

        let viewport_width = match explicit_width {
            Some(width) => width,
            None => {
                let natural = Self::column_viewport_width(&config, &sizes).unwrap_or(content_width);
                constraints.constrain_width(natural)
            }
        };
        let viewport_height = explicit_height.unwrap_or_else(|| constraints.constrain_height(content_height));

        let extra_width = viewport_width - content_width;
        let (start_offset, extra_gap) = if extra_width > 0.0 {
            config.horizontal_align.distribute(extra_width, sizes.len())
        } else {
            (0.0, 0.0)
        };
        let band_height = tallest.max(viewport_height - config.vertical_padding());

        let count = items.len();
        let mut x = config.padding_left + start_offset;
        for (index, item) in items.iter_mut().enumerate() {
            let size = sizes[index];
            let (offset_y, height) = config.vertical_align.place(size.y, band_height);
            let position = Vec2::new(x, config.padding_top + offset_y);
            let final_size = Vec2::new(size.x, height);

            item.set_position(position);
            item.set_size(final_size);
            trace!("Placed item {}: pos={:?}, size={:?}", index, position, final_size);

            x += size.x;
            if index + 1 < count {
                x += config.gap + extra_gap;
            }
        }

        let result = LayoutResult {
            viewport_width,
            viewport_height,
            content_width,
            content_height,
            content_x: 0.0,
            content_y: 0.0,
        };
        debug!(
            "Horizontal layout of {} items: viewport={:?}, content={:?}",
            count,
            result.viewport_size(),
            result.content_size()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kryon_core::SizedItem;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(layout: &HorizontalListLayout) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        layout.subscribe(move || handle.set(handle.get() + 1));
        count
    }

    #[test]
    fn test_every_setter_notifies_once() {
        let layout = HorizontalListLayout::new();
        let count = counting(&layout);

        layout.set_padding_top(6.0);
        assert_eq!(count.get(), 1);
        layout.set_padding_right(8.0);
        assert_eq!(count.get(), 2);
        layout.set_padding_bottom(2.0);
        assert_eq!(count.get(), 3);
        layout.set_padding_left(10.0);
        assert_eq!(count.get(), 4);
        layout.set_gap(5.0);
        assert_eq!(count.get(), 5);
        layout.set_horizontal_align(HorizontalAlign::Right);
        assert_eq!(count.get(), 6);
        layout.set_vertical_align(VerticalAlign::Bottom);
        assert_eq!(count.get(), 7);
        layout.set_requested_column_count(Some(2)).unwrap();
        assert_eq!(count.get(), 8);
        layout.set_typical_item_width(Some(40.0));
        assert_eq!(count.get(), 9);
        layout.set_padding(1.0);
        assert_eq!(count.get(), 10);
        layout.set_config(LayoutConfig::default()).unwrap();
        assert_eq!(count.get(), 11);
    }

    #[test]
    fn test_same_value_still_notifies() {
        let layout = HorizontalListLayout::new();
        let count = counting(&layout);
        layout.set_gap(0.0);
        layout.set_gap(0.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_zero_columns_rejected_without_notification() {
        let layout = HorizontalListLayout::new();
        let count = counting(&layout);
        let err = layout.set_requested_column_count(Some(0)).unwrap_err();
        assert!(matches!(err, KryonError::InvalidColumnCount(0)));
        assert_eq!(layout.requested_column_count(), None);
        assert_eq!(count.get(), 0);

        let invalid = LayoutConfig {
            requested_column_count: Some(0),
            ..LayoutConfig::default()
        };
        assert!(HorizontalListLayout::with_config(invalid.clone()).is_err());
        assert!(layout.set_config(invalid).is_err());
    }

    #[test]
    fn test_invalid_measurement_leaves_items_untouched() {
        let layout = HorizontalListLayout::new();
        let mut items = vec![SizedItem::new(10.0, 10.0), SizedItem::new(f32::NAN, 5.0)];
        items[0].position = Vec2::new(-1.0, -1.0);

        let err = layout.layout(&mut items, &MeasurementConstraints::new()).unwrap_err();
        assert!(matches!(err, KryonError::InvalidMeasurement { index: 1, .. }));
        assert_eq!(items[0].position, Vec2::new(-1.0, -1.0));

        let mut negative = vec![SizedItem::new(-3.0, 5.0)];
        assert!(layout.layout(&mut negative, &MeasurementConstraints::new()).is_err());
    }

    #[test]
    fn test_column_width_representative_item() {
        let layout = HorizontalListLayout::new();
        layout.set_requested_column_count(Some(2)).unwrap();
        layout.set_gap(4.0);
        let sizes = [Vec2::new(30.0, 10.0), Vec2::new(90.0, 10.0)];
        let width = |layout: &HorizontalListLayout, sizes: &[Vec2]| {
            HorizontalListLayout::column_viewport_width(&layout.config(), sizes)
        };
        assert_eq!(width(&layout, &sizes), Some(64.0));
        assert_eq!(width(&layout, &[]), Some(4.0));

        layout.set_typical_item_width(Some(50.0));
        assert_eq!(width(&layout, &[]), Some(104.0));

        layout.set_requested_column_count(None).unwrap();
        assert_eq!(width(&layout, &sizes), None);
    }

    #[test]
    fn test_setter_releases_config_before_notifying() {
        let layout = Rc::new(HorizontalListLayout::new());
        let seen_gap = Rc::new(Cell::new(0.0));
        {
            let weak = Rc::downgrade(&layout);
            let seen_gap = Rc::clone(&seen_gap);
            layout.subscribe(move || {
                if let Some(layout) = weak.upgrade() {
                    seen_gap.set(layout.gap());
                }
            });
        }
        layout.set_gap(9.0);
        assert_eq!(seen_gap.get(), 9.0);
    }
}
