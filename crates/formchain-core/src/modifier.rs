use taffy::{AlignSelf, FlexDirection, Style};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PaddingValues {
    pub fn all(v: f32) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }
}

/// Layout overrides for a form container or one of its rows.
///
/// Every field is optional; unset fields leave the underlying style alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub padding: Option<PaddingValues>,
    pub margin: Option<PaddingValues>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_dir: Option<FlexDirection>,
    pub align_self: Option<AlignSelf>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(PaddingValues::all(v));
        self
    }
    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding = Some(padding);
        self
    }
    pub fn margin(mut self, v: f32) -> Self {
        self.margin = Some(PaddingValues::all(v));
        self
    }
    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }
    pub fn flex_shrink(mut self, v: f32) -> Self {
        self.flex_shrink = Some(v);
        self
    }
    pub fn flex_dir(mut self, d: FlexDirection) -> Self {
        self.flex_dir = Some(d);
        self
    }
    pub fn align_self(mut self, a: AlignSelf) -> Self {
        self.align_self = Some(a);
        self
    }

    /// Merge `other` on top of `self`; fields set in `other` win.
    pub fn then(&self, other: &Modifier) -> Modifier {
        Modifier {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            padding: other.padding.or(self.padding),
            margin: other.margin.or(self.margin),
            flex_grow: other.flex_grow.or(self.flex_grow),
            flex_shrink: other.flex_shrink.or(self.flex_shrink),
            flex_dir: other.flex_dir.or(self.flex_dir),
            align_self: other.align_self.or(self.align_self),
        }
    }

    pub fn to_style(&self) -> Style {
        use taffy::prelude::*;
        let mut s = Style {
            flex_direction: FlexDirection::Column,
            ..Style::default()
        };

        if let Some(w) = self.width {
            s.size.width = length(w.max(0.0));
        }
        if let Some(h) = self.height {
            s.size.height = length(h.max(0.0));
        }
        if let Some(p) = self.padding {
            s.padding = taffy::geometry::Rect {
                left: length(p.left),
                right: length(p.right),
                top: length(p.top),
                bottom: length(p.bottom),
            };
        }
        if let Some(m) = self.margin {
            s.margin = taffy::geometry::Rect {
                left: length(m.left),
                right: length(m.right),
                top: length(m.top),
                bottom: length(m.bottom),
            };
        }
        if let Some(g) = self.flex_grow {
            s.flex_grow = g;
        }
        if let Some(sh) = self.flex_shrink {
            s.flex_shrink = sh;
        }
        if let Some(d) = self.flex_dir {
            s.flex_direction = d;
        }
        if let Some(a) = self.align_self {
            s.align_self = Some(a);
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn then_prefers_the_override() {
        let base = Modifier::new().flex_grow(1.0).align_self(AlignSelf::Stretch);
        let user = Modifier::new().padding(12.0).flex_grow(2.0);
        let merged = base.then(&user);

        assert_eq!(merged.flex_grow, Some(2.0));
        assert_eq!(merged.align_self, Some(AlignSelf::Stretch));
        assert_eq!(merged.padding, Some(PaddingValues::all(12.0)));
    }

    #[test]
    fn to_style_lowers_set_fields() {
        let s = Modifier::new()
            .flex_grow(1.0)
            .align_self(AlignSelf::Stretch)
            .height(500.0)
            .to_style();
        assert_eq!(s.flex_grow, 1.0);
        assert_eq!(s.align_self, Some(AlignSelf::Stretch));
        let tall: taffy::style::Dimension = taffy::prelude::length(500.0);
        assert_eq!(s.size.height, tall);
        assert_eq!(s.flex_direction, FlexDirection::Column);
    }
}
