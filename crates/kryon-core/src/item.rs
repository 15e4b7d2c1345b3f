// crates/kryon-core/src/item.rs
use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::LayoutOverride;

/// Capability surface a container's element exposes to a layout.
///
/// Layouts only read measurements and write back geometry; they never own
/// the items they arrange.
pub trait LayoutItem {
    fn measured_width(&self) -> f32;
    fn measured_height(&self) -> f32;

    fn layout_override(&self) -> Option<LayoutOverride> {
        None
    }

    fn set_position(&mut self, position: Vec2);

    /// Called when the layout resolves a size different from the measured one
    fn set_size(&mut self, size: Vec2);

    fn measured_size(&self) -> Vec2 {
        Vec2::new(self.measured_width(), self.measured_height())
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for &mut T {
    fn measured_width(&self) -> f32 {
        (**self).measured_width()
    }

    fn measured_height(&self) -> f32 {
        (**self).measured_height()
    }

    fn layout_override(&self) -> Option<LayoutOverride> {
        (**self).layout_override()
    }

    fn set_position(&mut self, position: Vec2) {
        (**self).set_position(position)
    }

    fn set_size(&mut self, size: Vec2) {
        (**self).set_size(size)
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for Box<T> {
    fn measured_width(&self) -> f32 {
        (**self).measured_width()
    }

    fn measured_height(&self) -> f32 {
        (**self).measured_height()
    }

    fn layout_override(&self) -> Option<LayoutOverride> {
        (**self).layout_override()
    }

    fn set_position(&mut self, position: Vec2) {
        (**self).set_position(position)
    }

    fn set_size(&mut self, size: Vec2) {
        (**self).set_size(size)
    }
}

/// Shared items may appear more than once in the same sequence.
impl<T: LayoutItem + ?Sized> LayoutItem for Rc<RefCell<T>> {
    fn measured_width(&self) -> f32 {
        self.borrow().measured_width()
    }

    fn measured_height(&self) -> f32 {
        self.borrow().measured_height()
    }

    fn layout_override(&self) -> Option<LayoutOverride> {
        self.borrow().layout_override()
    }

    fn set_position(&mut self, position: Vec2) {
        self.borrow_mut().set_position(position)
    }

    fn set_size(&mut self, size: Vec2) {
        self.borrow_mut().set_size(size)
    }
}

/// Plain item with a fixed measured size, used by tools and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedItem {
    pub id: String,
    /// Intrinsic size, never modified by a layout
    pub measured: Vec2,
    pub position: Vec2,
    /// Size assigned by the last layout pass
    pub size: Vec2,
    pub layout: Option<LayoutOverride>,
}

impl SizedItem {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            id: String::new(),
            measured: Vec2::new(width, height),
            position: Vec2::ZERO,
            size: Vec2::new(width, height),
            layout: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_layout(mut self, layout: LayoutOverride) -> Self {
        self.layout = Some(layout);
        self
    }
}

impl Default for SizedItem {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl LayoutItem for SizedItem {
    fn measured_width(&self) -> f32 {
        self.measured.x
    }

    fn measured_height(&self) -> f32 {
        self.measured.y
    }

    fn layout_override(&self) -> Option<LayoutOverride> {
        self.layout
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_item_defaults() {
        let item = SizedItem::new(200.0, 100.0).with_id("first");
        assert_eq!(item.id, "first");
        assert_eq!(item.measured_size(), Vec2::new(200.0, 100.0));
        assert_eq!(item.size, item.measured);
        assert!(item.layout_override().is_none());
    }

    #[test]
    fn test_shared_item_writes_through() {
        let shared = Rc::new(RefCell::new(SizedItem::new(10.0, 10.0)));
        let mut handle = Rc::clone(&shared);
        handle.set_position(Vec2::new(4.0, 2.0));
        handle.set_size(Vec2::new(10.0, 30.0));

        let item = shared.borrow();
        assert_eq!(item.position, Vec2::new(4.0, 2.0));
        assert_eq!(item.size, Vec2::new(10.0, 30.0));
        assert_eq!(item.measured_height(), 10.0);
    }

    #[test]
    fn test_boxed_dyn_item() {
        let mut boxed: Box<dyn LayoutItem> = Box::new(SizedItem::new(5.0, 6.0));
        assert_eq!(boxed.measured_width(), 5.0);
        boxed.set_position(Vec2::ONE);
    }
}
