use druid::{kurbo::BezPath, widget::prelude::*, Affine, Color, KeyOrValue, Size};

use crate::ui::theme;

pub static CAMERA: SvgIcon = SvgIcon {
    svg_path: "M3 7H7L9 4H15L17 7H21V19H3Z M12 16.5C13.93 16.5 15.5 14.93 15.5 13C15.5 11.07 13.93 9.5 12 9.5C10.07 9.5 8.5 11.07 8.5 13C8.5 14.93 10.07 16.5 12 16.5Z",
    svg_size: Size::new(24.0, 24.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static INFO: SvgIcon = SvgIcon {
    svg_path: "M12 2C17.52 2 22 6.48 22 12C22 17.52 17.52 22 12 22C6.48 22 2 17.52 2 12C2 6.48 6.48 2 12 2Z M12 16V11 M12 8H12.01",
    svg_size: Size::new(24.0, 24.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static MAP_PIN: SvgIcon = SvgIcon {
    svg_path: "M12 22C12 22 4 14.5 4 9.5C4 5.36 7.58 2 12 2C16.42 2 20 5.36 20 9.5C20 14.5 12 22 12 22Z M12 12.5C13.38 12.5 14.5 11.38 14.5 10C14.5 8.62 13.38 7.5 12 7.5C10.62 7.5 9.5 8.62 9.5 10C9.5 11.38 10.62 12.5 12 12.5Z",
    svg_size: Size::new(24.0, 24.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static CLOCK: SvgIcon = SvgIcon {
    svg_path: "M12 2C17.52 2 22 6.48 22 12C22 17.52 17.52 22 12 22C6.48 22 2 17.52 2 12C2 6.48 6.48 2 12 2Z M12 6V12L16 14",
    svg_size: Size::new(24.0, 24.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static USERS: SvgIcon = SvgIcon {
    svg_path: "M16 21V19C16 16.79 14.21 15 12 15H6C3.79 15 2 16.79 2 19V21 M9 11C11.21 11 13 9.21 13 7C13 4.79 11.21 3 9 3C6.79 3 5 4.79 5 7C5 9.21 6.79 11 9 11Z M22 21V19C22 17.14 20.73 15.58 19 15.13 M16 3.13C17.73 3.58 19 5.14 19 7C19 8.86 17.73 10.42 16 10.87",
    svg_size: Size::new(24.0, 24.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static UTENSILS: SvgIcon = SvgIcon {
    svg_path: "M3 2V9C3 10.1 3.9 11 5 11H7C8.1 11 9 10.1 9 9V2 M6 2V22 M21 15V2C18.24 2 16 4.24 16 7V13C16 14.1 16.9 15 18 15H21Z M21 15V22",
    svg_size: Size::new(24.0, 24.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static BUS: SvgIcon = SvgIcon {
    svg_path: "M4 6C4 4.9 4.9 4 6 4H18C19.1 4 20 4.9 20 6V17H4Z M4 11H20 M7 17V20 M17 17V20 M8 14H8.01 M16 14H16.01",
    svg_size: Size::new(24.0, 24.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static NAVIGATION: SvgIcon = SvgIcon {
    svg_path: "M3 11L22 2L13 21L11 13Z",
    svg_size: Size::new(24.0, 24.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static CLOSE: SvgIcon = SvgIcon {
    svg_path: "M6 6L18 18 M18 6L6 18",
    svg_size: Size::new(24.0, 24.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static PLAY: SvgIcon = SvgIcon {
    svg_path: "M4.92623 21.4262L19.9262 12.4262L4.92623 3.42623V21.4262Z",
    svg_size: Size::new(24.0, 24.0),
    op: PaintOp::Fill,
};
pub static PAUSE: SvgIcon = SvgIcon {
    svg_path: "M10.9262 20.6762H7.17623V4.17623H10.9262V20.6762ZM17.6762 20.6762H13.9262V4.17623H17.6762V20.6762Z",
    svg_size: Size::new(24.0, 24.0),
    op: PaintOp::Fill,
};

#[derive(Copy, Clone)]
pub enum PaintOp {
    Fill,
    Stroke { width: f64 },
}

pub struct SvgIcon {
    svg_path: &'static str,
    svg_size: Size,
    op: PaintOp,
}

impl SvgIcon {
    pub fn scale(&self, to_size: impl Into<Size>) -> Icon {
        let to_size = to_size.into();
        let bez_path = BezPath::from_svg(self.svg_path).expect("Failed to parse SVG");
        let scale = Affine::scale_non_uniform(
            to_size.width / self.svg_size.width,
            to_size.height / self.svg_size.height,
        );
        Icon::new(self.op, bez_path, to_size, scale)
    }
}

pub struct Icon {
    op: PaintOp,
    bez_path: BezPath,
    size: Size,
    scale: Affine,
    color: KeyOrValue<Color>,
}

impl Icon {
    pub fn new(op: PaintOp, bez_path: BezPath, size: Size, scale: Affine) -> Self {
        Icon {
            op,
            bez_path,
            size,
            scale,
            color: theme::ICON_COLOR.into(),
        }
    }

    pub fn with_color(mut self, color: impl Into<KeyOrValue<Color>>) -> Self {
        self.color = color.into();
        self
    }
}

impl<T> Widget<T> for Icon {
    fn event(&mut self, _ctx: &mut EventCtx, _ev: &Event, _data: &mut T, _env: &Env) {}

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, _ev: &LifeCycle, _data: &T, _env: &Env) {}

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, _env: &Env) -> Size {
        bc.constrain(self.size)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, env: &Env) {
        let color = self.color.resolve(env);
        ctx.with_save(|ctx| {
            ctx.transform(self.scale);
            match self.op {
                PaintOp::Fill => ctx.fill(&self.bez_path, &color),
                PaintOp::Stroke { width } => ctx.stroke(&self.bez_path, &color, width),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_parses() {
        for icon in [
            &CAMERA,
            &INFO,
            &MAP_PIN,
            &CLOCK,
            &USERS,
            &UTENSILS,
            &BUS,
            &NAVIGATION,
            &CLOSE,
            &PLAY,
            &PAUSE,
        ] {
            assert!(BezPath::from_svg(icon.svg_path).is_ok(), "{}", icon.svg_path);
        }
    }
}
