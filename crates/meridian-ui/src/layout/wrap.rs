use std::str::FromStr;

use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::error::ConfigError;

use crate::constraints::LayoutCtx;

use super::LayoutChild;

/// Horizontal placement of each row inside a [`WrapLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    /// Start offset of a row `row_width` wide within `available`.
    #[inline]
    pub fn offset(self, available: f32, row_width: f32) -> f32 {
        match self {
            HorizontalAlignment::Left => 0.0,
            HorizontalAlignment::Center => (available - row_width) * 0.5,
            HorizontalAlignment::Right => available - row_width,
        }
    }
}

impl FromStr for HorizontalAlignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "start" => Ok(HorizontalAlignment::Left),
            "center" => Ok(HorizontalAlignment::Center),
            "right" | "end" => Ok(HorizontalAlignment::Right),
            _ => Err(ConfigError::new("horizontal alignment", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WrapParams {
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
    pub alignment: HorizontalAlignment,
}

/// One packed row: member child indices plus its extent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrapRow {
    pub members: Vec<usize>,
    /// Sum of member widths plus the gaps between them.
    pub width: f32,
    /// Tallest member.
    pub height: f32,
}

/// Greedy row packer shared by measure and arrange so both passes break
/// rows at exactly the same children.
struct RowBreaker {
    available: f32,
    spacing: f32,
    current: WrapRow,
}

impl RowBreaker {
    fn new(available: f32, spacing: f32) -> Self {
        Self { available, spacing, current: WrapRow::default() }
    }

    /// Adds child `index`; returns the row it closed, if any.
    fn push(&mut self, index: usize, size: Vec2) -> Option<WrapRow> {
        let closed = if !self.current.members.is_empty()
            && self.current.width + self.gap() + size.x > self.available
        {
            Some(std::mem::take(&mut self.current))
        } else {
            None
        };

        self.current.width += self.gap() + size.x;
        self.current.height = self.current.height.max(size.y);
        self.current.members.push(index);
        closed
    }

    /// Spacing is only charged once the row has some width.
    fn gap(&self) -> f32 {
        if self.current.width > 0.0 { self.spacing } else { 0.0 }
    }

    fn finish(self) -> Option<WrapRow> {
        (!self.current.members.is_empty()).then_some(self.current)
    }
}

/// Flow layout that fills rows left to right and wraps on overflow.
///
/// Children are measured unconstrained by the wrapping (against the full
/// available size). Within a row every child gets the row's height and its
/// own measured width. Collapsed children are skipped.
#[derive(Debug, Clone, Default)]
pub struct WrapLayout {
    params: WrapParams,
    measured_rows: Vec<WrapRow>,
    arranged_rows: Vec<WrapRow>,
}

impl WrapLayout {
    pub fn new(params: WrapParams) -> Self {
        let mut params = params;
        params.horizontal_spacing = params.horizontal_spacing.max(0.0);
        params.vertical_spacing = params.vertical_spacing.max(0.0);
        Self { params, measured_rows: Vec::new(), arranged_rows: Vec::new() }
    }

    #[inline]
    pub fn params(&self) -> WrapParams {
        self.params
    }

    /// Rows found by the most recent measure.
    #[inline]
    pub fn measured_rows(&self) -> &[WrapRow] {
        &self.measured_rows
    }

    /// Rows placed by the most recent arrange.
    #[inline]
    pub fn arranged_rows(&self) -> &[WrapRow] {
        &self.arranged_rows
    }

    fn stacked_height(&self, rows: &[WrapRow]) -> f32 {
        let heights: f32 = rows.iter().map(|r| r.height).sum();
        heights + self.params.vertical_spacing * rows.len().saturating_sub(1) as f32
    }

    pub fn measure<C: LayoutChild>(&mut self, children: &mut [C], available: Vec2, ctx: &LayoutCtx) -> Vec2 {
        let mut breaker = RowBreaker::new(available.x, self.params.horizontal_spacing);
        self.measured_rows.clear();

        for (i, child) in children.iter_mut().enumerate() {
            if child.props().is_collapsed() {
                continue;
            }
            let size = child.measure(available, ctx);
            if let Some(row) = breaker.push(i, size) {
                self.measured_rows.push(row);
            }
        }
        if let Some(row) = breaker.finish() {
            self.measured_rows.push(row);
        }

        let width = self.measured_rows.iter().map(|r| r.width).fold(0.0f32, f32::max);
        let height = self.stacked_height(&self.measured_rows);
        log::trace!("wrap measure: {} rows -> {width}x{height}", self.measured_rows.len());
        Vec2::new(width, height)
    }

    /// Re-packs rows against `bounds.size.x` from the children's desired
    /// sizes and places them. Returns `bounds.size`.
    pub fn arrange<C: LayoutChild>(&mut self, children: &mut [C], bounds: Rect, ctx: &LayoutCtx) -> Vec2 {
        let mut breaker = RowBreaker::new(bounds.size.x, self.params.horizontal_spacing);
        self.arranged_rows.clear();

        for (i, child) in children.iter_mut().enumerate() {
            if child.props().is_collapsed() {
                child.arrange(Rect::from_origin_size(bounds.origin, Vec2::zero()), ctx);
                continue;
            }
            if let Some(row) = breaker.push(i, child.desired_size()) {
                self.arranged_rows.push(row);
            }
        }
        if let Some(row) = breaker.finish() {
            self.arranged_rows.push(row);
        }

        let mut y = bounds.origin.y;
        for (r, row) in self.arranged_rows.iter().enumerate() {
            if r > 0 {
                y += self.params.vertical_spacing;
            }
            self.arrange_row(children, row, bounds.origin.x, bounds.size.x, y, ctx);
            y += row.height;
        }

        bounds.size
    }

    fn arrange_row<C: LayoutChild>(
        &self,
        children: &mut [C],
        row: &WrapRow,
        left: f32,
        available: f32,
        y: f32,
        ctx: &LayoutCtx,
    ) {
        let start = left + self.params.alignment.offset(available, row.width);
        let mut x = start;
        for &i in &row.members {
            if x > start {
                x += self.params.horizontal_spacing;
            }
            let w = children[i].desired_size().x;
            children[i].arrange(Rect::new(x, y, w, row.height), ctx);
            x += w;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::{TestBox, with_ctx};

    fn engine(h: f32, v: f32, alignment: HorizontalAlignment) -> WrapLayout {
        WrapLayout::new(WrapParams { horizontal_spacing: h, vertical_spacing: v, alignment })
    }

    fn members(rows: &[WrapRow]) -> Vec<Vec<usize>> {
        rows.iter().map(|r| r.members.clone()).collect()
    }

    #[test]
    fn third_child_overflows_into_second_row() {
        let mut wrap = engine(10.0, 5.0, HorizontalAlignment::Left);
        let mut kids = vec![TestBox::new(40.0, 20.0), TestBox::new(40.0, 30.0), TestBox::new(40.0, 10.0)];
        let desired = with_ctx(|ctx| wrap.measure(&mut kids, Vec2::new(100.0, 500.0), ctx));

        assert_eq!(members(wrap.measured_rows()), vec![vec![0, 1], vec![2]]);
        assert_eq!(desired, Vec2::new(90.0, 30.0 + 5.0 + 10.0));

        with_ctx(|ctx| wrap.arrange(&mut kids, Rect::new(0.0, 0.0, 100.0, 45.0), ctx));
        assert_eq!(kids[0].rect(), Rect::new(0.0, 0.0, 40.0, 30.0));
        assert_eq!(kids[1].rect(), Rect::new(50.0, 0.0, 40.0, 30.0));
        assert_eq!(kids[2].rect(), Rect::new(0.0, 35.0, 40.0, 10.0));
    }

    #[test]
    fn zero_width_members_charge_no_spacing() {
        let mut wrap = engine(10.0, 0.0, HorizontalAlignment::Left);
        let mut kids = vec![TestBox::new(0.0, 20.0), TestBox::new(95.0, 20.0)];
        let desired = with_ctx(|ctx| wrap.measure(&mut kids, Vec2::new(100.0, 100.0), ctx));

        assert_eq!(members(wrap.measured_rows()), vec![vec![0, 1]]);
        assert_eq!(desired, Vec2::new(95.0, 20.0));

        with_ctx(|ctx| wrap.arrange(&mut kids, Rect::new(0.0, 0.0, 100.0, 20.0), ctx));
        assert_eq!(members(wrap.arranged_rows()), vec![vec![0, 1]]);
        assert_eq!(kids[1].rect().origin.x, 0.0);
    }

    #[test]
    fn rows_match_between_measure_and_arrange() {
        let widths = [12.0, 55.0, 31.0, 8.0, 70.0, 70.0, 3.0, 44.0, 19.0, 90.0, 27.0, 61.0];
        for available in [60.0, 95.0, 100.0, 150.0, 333.0] {
            let mut wrap = engine(7.0, 3.0, HorizontalAlignment::Center);
            let mut kids: Vec<TestBox> =
                widths.iter().enumerate().map(|(i, &w)| TestBox::new(w, 10.0 + i as f32)).collect();

            with_ctx(|ctx| {
                let desired = wrap.measure(&mut kids, Vec2::new(available, f32::INFINITY), ctx);
                wrap.arrange(&mut kids, Rect::new(0.0, 0.0, available, desired.y), ctx);
            });

            assert_eq!(wrap.measured_rows(), wrap.arranged_rows(), "available {available}");

            // Every child's y matches the row it was packed into.
            for row in wrap.arranged_rows() {
                let y = kids[row.members[0]].rect().origin.y;
                for &i in &row.members {
                    assert_eq!(kids[i].rect().origin.y, y);
                    assert_eq!(kids[i].rect().size.y, row.height);
                }
            }
        }
    }

    #[test]
    fn oversized_child_gets_its_own_row() {
        let mut wrap = engine(4.0, 0.0, HorizontalAlignment::Left);
        let mut kids = vec![TestBox::new(150.0, 10.0), TestBox::new(20.0, 10.0), TestBox::new(20.0, 10.0)];
        let desired = with_ctx(|ctx| wrap.measure(&mut kids, Vec2::new(100.0, 100.0), ctx));
        assert_eq!(members(wrap.measured_rows()), vec![vec![0], vec![1, 2]]);
        assert_eq!(desired.x, 150.0);
    }

    #[test]
    fn alignment_offsets_use_row_width() {
        for (alignment, x) in [
            (HorizontalAlignment::Left, 0.0),
            (HorizontalAlignment::Center, 25.0),
            (HorizontalAlignment::Right, 50.0),
        ] {
            let mut wrap = engine(10.0, 0.0, alignment);
            let mut kids = vec![TestBox::new(20.0, 80.0), TestBox::new(20.0, 5.0)];
            with_ctx(|ctx| {
                wrap.measure(&mut kids, Vec2::new(100.0, 100.0), ctx);
                wrap.arrange(&mut kids, Rect::new(0.0, 0.0, 100.0, 100.0), ctx);
            });
            assert_eq!(kids[0].rect().origin.x, x, "{alignment:?}");
            assert_eq!(kids[1].rect().origin.x, x + 30.0, "{alignment:?}");
        }
    }

    #[test]
    fn collapsed_children_are_not_packed() {
        let mut wrap = engine(10.0, 0.0, HorizontalAlignment::Left);
        let mut kids = vec![TestBox::new(40.0, 10.0), TestBox::new(40.0, 10.0).collapsed(), TestBox::new(40.0, 10.0)];
        with_ctx(|ctx| wrap.measure(&mut kids, Vec2::new(100.0, 100.0), ctx));
        assert_eq!(members(wrap.measured_rows()), vec![vec![0, 2]]);
    }

    #[test]
    fn empty_wrap_is_zero() {
        let mut wrap = engine(10.0, 10.0, HorizontalAlignment::Left);
        let mut kids: Vec<TestBox> = Vec::new();
        let desired = with_ctx(|ctx| wrap.measure(&mut kids, Vec2::new(100.0, 100.0), ctx));
        assert_eq!(desired, Vec2::zero());
        assert!(wrap.measured_rows().is_empty());
    }

    #[test]
    fn parse_alignment() {
        assert_eq!("end".parse::<HorizontalAlignment>().unwrap(), HorizontalAlignment::Right);
        assert!("justify".parse::<HorizontalAlignment>().is_err());
    }
}
