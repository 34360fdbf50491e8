use druid::{widget::prelude::*, Data, Point, WidgetPod};

#[derive(Copy, Clone)]
pub enum OverlayPosition {
    TopLeft,
    Bottom,
    BottomRight,
}

/// Lays `overlay` over a corner of `inner`. Pointer presses and wheel events
/// landing on the overlay don't reach `inner`.
pub struct Overlay<T, W, O> {
    inner: WidgetPod<T, W>,
    overlay: WidgetPod<T, O>,
    position: OverlayPosition,
    inset: f64,
}

impl<T, W, O> Overlay<T, W, O>
where
    W: Widget<T>,
    O: Widget<T>,
{
    fn new(inner: W, overlay: O, position: OverlayPosition) -> Self {
        Self {
            inner: WidgetPod::new(inner),
            overlay: WidgetPod::new(overlay),
            position,
            inset: 0.0,
        }
    }

    pub fn top_left(inner: W, overlay: O) -> Self {
        Self::new(inner, overlay, OverlayPosition::TopLeft)
    }

    pub fn bottom(inner: W, overlay: O) -> Self {
        Self::new(inner, overlay, OverlayPosition::Bottom)
    }

    pub fn bottom_right(inner: W, overlay: O) -> Self {
        Self::new(inner, overlay, OverlayPosition::BottomRight)
    }

    pub fn inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    fn covers(&self, event: &Event) -> bool {
        match event {
            Event::MouseDown(mouse) | Event::Wheel(mouse) => {
                self.overlay.layout_rect().contains(mouse.pos)
            }
            _ => false,
        }
    }
}

impl<T, W, O> Widget<T> for Overlay<T, W, O>
where
    T: Data,
    W: Widget<T>,
    O: Widget<T>,
{
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        let covered = self.covers(event);
        self.overlay.event(ctx, event, data, env);
        if !covered {
            self.inner.event(ctx, event, data, env);
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        self.inner.lifecycle(ctx, event, data, env);
        self.overlay.lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        self.inner.update(ctx, data, env);
        self.overlay.update(ctx, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let inner_size = self.inner.layout(ctx, bc, data, env);
        self.inner.set_origin(ctx, Point::ORIGIN);

        let max = Size::new(
            (inner_size.width - self.inset * 2.0).max(0.0),
            (inner_size.height - self.inset * 2.0).max(0.0),
        );
        let over_bc = match self.position {
            OverlayPosition::Bottom => BoxConstraints::new(Size::new(max.width, 0.0), max),
            _ => BoxConstraints::new(Size::ZERO, max),
        };
        let over_size = self.overlay.layout(ctx, &over_bc, data, env);
        let pos = match self.position {
            OverlayPosition::TopLeft => Point::new(self.inset, self.inset),
            OverlayPosition::Bottom => {
                Point::new(self.inset, inner_size.height - over_size.height - self.inset)
            }
            OverlayPosition::BottomRight => Point::new(
                inner_size.width - over_size.width - self.inset,
                inner_size.height - over_size.height - self.inset,
            ),
        };
        self.overlay.set_origin(ctx, pos);
        inner_size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        self.inner.paint(ctx, data, env);
        self.overlay.paint(ctx, data, env);
    }
}
