//! Panel layout engines.
//!
//! The engines are independent of any widget type: they work over
//! [`LayoutChild`], which [`Element`](crate::Element) implements and tests
//! implement with fixed-size boxes. Panels own an engine and feed it their
//! children during their own measure / arrange passes.

mod child;
mod spaced;
mod wrap;

pub use child::{LayoutChild, LayoutProps, Orientation, Stretch, Visibility};
pub use spaced::{SpacedLayout, SpacedParams};
pub use wrap::{HorizontalAlignment, WrapLayout, WrapParams, WrapRow};

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use meridian_engine::coords::{Rect, Vec2};
    use meridian_engine::shape::PathCache;

    use super::{LayoutChild, LayoutProps, Stretch, Visibility};
    use crate::constraints::LayoutCtx;
    use crate::theme::Theme;

    /// Fixed-size child that records how it was laid out.
    #[derive(Debug, Clone)]
    pub struct TestBox {
        pub size: Vec2,
        pub props: LayoutProps,
        pub desired: Vec2,
        pub measured_with: Option<Vec2>,
        pub arranged: Option<Rect>,
    }

    impl TestBox {
        pub fn new(w: f32, h: f32) -> Self {
            Self {
                size: Vec2::new(w, h),
                props: LayoutProps::default(),
                desired: Vec2::zero(),
                measured_with: None,
                arranged: None,
            }
        }

        pub fn stretch(mut self, stretch: Stretch) -> Self {
            self.props.stretch = stretch;
            self
        }

        pub fn collapsed(mut self) -> Self {
            self.props.visibility = Visibility::Collapsed;
            self
        }

        pub fn min_size(mut self, min: Vec2) -> Self {
            self.props.min_size = Some(min);
            self
        }

        pub fn rect(&self) -> Rect {
            self.arranged.expect("child was not arranged")
        }
    }

    impl LayoutChild for TestBox {
        fn props(&self) -> LayoutProps {
            self.props
        }

        fn measure(&mut self, available: Vec2, _ctx: &LayoutCtx) -> Vec2 {
            self.measured_with = Some(available);
            self.desired = match self.props.min_size {
                Some(min) => self.size.max(min),
                None => self.size,
            };
            self.desired
        }

        fn desired_size(&self) -> Vec2 {
            self.desired
        }

        fn arrange(&mut self, rect: Rect, _ctx: &LayoutCtx) {
            self.arranged = Some(rect);
        }
    }

    /// Runs `f` with a default-theme layout context.
    pub fn with_ctx<R>(f: impl FnOnce(&LayoutCtx) -> R) -> R {
        let theme = Theme::light();
        let paths = RefCell::new(PathCache::new());
        f(&LayoutCtx::new(&theme, &paths))
    }

    pub fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }
}
