use std::{num::NonZeroUsize, sync::Arc};

use druid::{
    kurbo::{BezPath, Circle},
    piet::{
        FontFamily, FontWeight, InterpolationMode, PietImage, StrokeStyle, Text, TextLayout,
        TextLayoutBuilder,
    },
    widget::prelude::*,
    Color, ImageBuf, MouseButton, Point, Rect, Selector, Vec2,
};
use lru::LruCache;
use tour_core::{
    catalog,
    geo::{ScreenPoint, TileId, TILE_SIZE},
    map::{Layer, Marker, Polyline, Popup, Rgba, Scene, TileLayer, TourMap},
};

use crate::{data::MapDetail, ui::theme};

pub const REQUEST_TILE: Selector<TileRequest> = Selector::new("map-canvas.request-tile");
pub const PROVIDE_TILE: Selector<TilePayload> = Selector::new("map-canvas.provide-tile");

#[derive(Clone)]
pub struct TileRequest {
    pub tile: TileId,
    pub location: Arc<str>,
}

#[derive(Clone)]
pub struct TilePayload {
    pub tile: TileId,
    pub image_buf: ImageBuf,
}

// Pointer travel, in pixels, after which a press counts as a drag.
const DRAG_THRESHOLD: f64 = 3.0;
// Distance from a marker's center to the tip of its popup.
const POPUP_OFFSET: f64 = 20.0;
// Enough slots for every tile a large window shows at once.
const MIN_TILE_SLOTS: usize = 64;

enum TileSlot {
    Pending,
    Loaded {
        image_buf: ImageBuf,
        image: Option<PietImage>,
    },
}

struct Drag {
    last: Point,
    travelled: f64,
}

/// The interactive tour map. Owns the tour map and its scene for as long as
/// the widget lives, so dropping the widget tears the map down.
///
/// Tiles are kept in a bounded LRU; painting touches the visible ones, so
/// panning evicts the tiles that scrolled away first.
pub struct MapCanvas {
    map: TourMap<Scene>,
    tiles: LruCache<TileId, TileSlot>,
    drag: Option<Drag>,
}

impl MapCanvas {
    pub fn new(tiles: TileLayer, tile_cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(tile_cache_size.max(MIN_TILE_SLOTS))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            map: TourMap::new(catalog(), tiles, Scene::new()),
            tiles: LruCache::new(capacity),
            drag: None,
        }
    }

    fn scene(&self) -> &Scene {
        self.map.surface()
    }

    /// Tiles in view that were neither loaded nor requested yet. They are
    /// marked as pending.
    fn missing_tiles(&mut self) -> Vec<TileRequest> {
        let Some(source) = self.map.surface().tile_layers().next().cloned() else {
            return Vec::new();
        };
        let mut requests = Vec::new();
        for placement in self.map.surface().visible_tiles() {
            if self.tiles.get(&placement.tile).is_none() {
                self.tiles.put(placement.tile, TileSlot::Pending);
                requests.push(TileRequest {
                    tile: placement.tile,
                    location: source.url(placement.tile).into(),
                });
            }
        }
        requests
    }

    fn zoom_by(&mut self, delta: i32) -> bool {
        if !self.map.surface_mut().zoom_by(delta) {
            return false;
        }
        // Nothing cached belongs to the new zoom level.
        self.tiles.clear();
        true
    }

    /// Fills the slot a tile was requested for. Tiles whose slot got evicted
    /// in the meantime are dropped, and requested again once back in view.
    fn provide(&mut self, payload: &TilePayload) -> bool {
        match self.tiles.peek_mut(&payload.tile) {
            Some(slot) if matches!(slot, TileSlot::Pending) => {
                *slot = TileSlot::Loaded {
                    image_buf: payload.image_buf.clone(),
                    image: None,
                };
                true
            }
            _ => false,
        }
    }

    fn click(&mut self, pos: Point, data: &mut MapDetail) {
        if let Some(id) = self.map.click(ScreenPoint::new(pos.x, pos.y)) {
            if let Err(err) = data.panel.select_stop(id) {
                log::warn!("ignoring marker click: {}", err);
            }
        }
    }

    fn paint_tiles(&mut self, ctx: &mut PaintCtx, env: &Env) {
        let grid_color = env.get(theme::MAP_TILE_GRID_COLOR);
        for placement in self.map.surface().visible_tiles() {
            let rect = Rect::from_origin_size(
                (placement.origin.x, placement.origin.y),
                (TILE_SIZE, TILE_SIZE),
            );
            match self.tiles.get_mut(&placement.tile) {
                Some(TileSlot::Loaded { image_buf, image }) => {
                    let image = image.get_or_insert_with(|| image_buf.to_image(ctx.render_ctx));
                    ctx.draw_image(image, rect, InterpolationMode::Bilinear);
                }
                _ => {
                    ctx.stroke(rect, &grid_color, 1.0);
                }
            }
        }
    }

    fn paint_layers(&self, ctx: &mut PaintCtx) {
        for (_, layer) in self.scene().attached() {
            match layer {
                Layer::Tiles(_) => {}
                Layer::Polyline(line) => self.paint_polyline(ctx, line),
                Layer::Marker(marker) => self.paint_marker(ctx, marker),
            }
        }
    }

    fn paint_polyline(&self, ctx: &mut PaintCtx, line: &Polyline) {
        let mut path = BezPath::new();
        for (i, &pos) in line.path.iter().enumerate() {
            let Some(point) = self.scene().to_screen(pos) else {
                return;
            };
            if i == 0 {
                path.move_to((point.x, point.y));
            } else {
                path.line_to((point.x, point.y));
            }
        }
        let color = color(line.style.color.with_opacity(line.style.opacity));
        let style = StrokeStyle::new().dash_pattern(line.style.dash);
        ctx.stroke_styled(path, &color, line.style.weight, &style);
    }

    fn paint_marker(&self, ctx: &mut PaintCtx, marker: &Marker) {
        let Some(center) = self.scene().to_screen(marker.position) else {
            return;
        };
        let center = Point::new(center.x, center.y);
        let icon = marker.icon;
        let shadow = Circle::new(center + Vec2::new(0.0, 2.0), icon.radius() + icon.border);
        ctx.fill(shadow, &Color::rgba(0.0, 0.0, 0.0, 0.3));
        let dot = Circle::new(center, icon.radius());
        ctx.fill(dot, &color(icon.fill));
        ctx.stroke(dot, &color(icon.border_color), icon.border);
    }

    fn paint_popup(&self, ctx: &mut PaintCtx, env: &Env) {
        let Some((popup, anchor)) = self.scene().popup() else {
            return;
        };
        let Some(lines) = popup_layouts(ctx, popup, env) else {
            return;
        };
        const PADDING: f64 = 10.0;
        const TIP: f64 = 8.0;
        let text_width = lines
            .iter()
            .map(|layout| layout.size().width)
            .fold(0.0, f64::max);
        let text_height: f64 = lines.iter().map(|layout| layout.size().height).sum();
        let size = Size::new(text_width + PADDING * 2.0, text_height + PADDING * 2.0);
        let tip = Point::new(anchor.x, anchor.y - POPUP_OFFSET);
        let origin = Point::new(tip.x - size.width / 2.0, tip.y - TIP - size.height);
        let bubble = Rect::from_origin_size(origin, size).to_rounded_rect(8.0);

        let mut pointer = BezPath::new();
        pointer.move_to((tip.x - TIP, tip.y - TIP));
        pointer.line_to(tip);
        pointer.line_to((tip.x + TIP, tip.y - TIP));
        pointer.close_path();

        let background = env.get(theme::POPUP_BACKGROUND);
        ctx.fill(bubble, &Color::rgba(0.0, 0.0, 0.0, 0.15));
        ctx.fill(bubble, &background);
        ctx.fill(pointer, &background);

        let mut y = origin.y + PADDING;
        for layout in &lines {
            ctx.draw_text(layout, (origin.x + PADDING, y));
            y += layout.size().height;
        }
    }

    fn paint_attribution(&self, ctx: &mut PaintCtx) {
        let Some(source) = self.scene().tile_layers().next() else {
            return;
        };
        let Ok(layout) = ctx
            .text()
            .new_text_layout(source.attribution.clone())
            .font(FontFamily::SYSTEM_UI, 11.0)
            .text_color(theme::GREY_700)
            .build()
        else {
            return;
        };
        let size = ctx.size();
        let text = layout.size();
        let rect = Rect::new(
            size.width - text.width - 8.0,
            size.height - text.height - 4.0,
            size.width,
            size.height,
        );
        ctx.fill(rect, &Color::rgba(1.0, 1.0, 1.0, 0.7));
        ctx.draw_text(&layout, (rect.x0 + 4.0, rect.y0 + 2.0));
    }
}

fn color(rgba: Rgba) -> Color {
    Color::from_rgba32_u32(rgba.0)
}

fn popup_layouts(
    ctx: &mut PaintCtx,
    popup: &Popup,
    env: &Env,
) -> Option<Vec<druid::piet::PietTextLayout>> {
    let text_color = env.get(theme::POPUP_TEXT_COLOR);
    let mut layouts = Vec::with_capacity(popup.lines.len() + 1);
    let title = ctx
        .text()
        .new_text_layout(popup.title.clone())
        .font(FontFamily::SYSTEM_UI, 14.0)
        .default_attribute(FontWeight::BOLD)
        .text_color(text_color)
        .build()
        .ok()?;
    layouts.push(title);
    for line in &popup.lines {
        let layout = ctx
            .text()
            .new_text_layout(line.clone())
            .font(FontFamily::SYSTEM_UI, 12.0)
            .text_color(env.get(theme::PLACEHOLDER_COLOR))
            .build()
            .ok()?;
        layouts.push(layout);
    }
    Some(layouts)
}

impl Widget<MapDetail> for MapCanvas {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut MapDetail, _env: &Env) {
        match event {
            Event::MouseDown(mouse) if mouse.button == MouseButton::Left => {
                ctx.set_active(true);
                self.drag = Some(Drag {
                    last: mouse.pos,
                    travelled: 0.0,
                });
            }
            Event::MouseMove(mouse) if ctx.is_active() => {
                if let Some(drag) = self.drag.as_mut() {
                    let delta = mouse.pos - drag.last;
                    drag.last = mouse.pos;
                    drag.travelled += delta.hypot();
                    if drag.travelled > DRAG_THRESHOLD {
                        self.map.surface_mut().pan_by(-delta.x, -delta.y);
                        for request in self.missing_tiles() {
                            ctx.submit_command(REQUEST_TILE.with(request).to(ctx.widget_id()));
                        }
                        ctx.request_paint();
                    }
                }
            }
            Event::MouseUp(mouse) if ctx.is_active() && mouse.button == MouseButton::Left => {
                ctx.set_active(false);
                let is_click = self
                    .drag
                    .take()
                    .map_or(true, |drag| drag.travelled <= DRAG_THRESHOLD);
                if is_click {
                    self.click(mouse.pos, data);
                    ctx.request_paint();
                }
            }
            Event::Wheel(mouse) => {
                let delta = if mouse.wheel_delta.y < 0.0 { 1 } else { -1 };
                if mouse.wheel_delta.y != 0.0 && self.zoom_by(delta) {
                    for request in self.missing_tiles() {
                        ctx.submit_command(REQUEST_TILE.with(request).to(ctx.widget_id()));
                    }
                    ctx.request_paint();
                }
                ctx.set_handled();
            }
            Event::Command(cmd) => {
                if let Some(payload) = cmd.get(PROVIDE_TILE) {
                    if self.provide(payload) {
                        ctx.request_paint();
                    }
                    ctx.set_handled();
                }
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &MapDetail,
        _env: &Env,
    ) {
        if let LifeCycle::Size(size) = event {
            self.map.surface_mut().set_size(size.width, size.height);
            self.map.render(&data.panel);
            for request in self.missing_tiles() {
                ctx.submit_command(REQUEST_TILE.with(request).to(ctx.widget_id()));
            }
            ctx.request_paint();
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &MapDetail, data: &MapDetail, _env: &Env) {
        if !old_data.same(data) {
            self.map.render(&data.panel);
            ctx.request_paint();
        }
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &MapDetail,
        _env: &Env,
    ) -> Size {
        let max = bc.max();
        if max.width.is_finite() && max.height.is_finite() {
            max
        } else {
            bc.constrain(Size::new(640.0, 480.0))
        }
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &MapDetail, env: &Env) {
        let rect = ctx.size().to_rect();
        ctx.fill(rect, &env.get(theme::MAP_BACKGROUND));
        if !self.map.is_initialized() {
            return;
        }
        ctx.with_save(|ctx| {
            ctx.clip(rect);
            self.paint_tiles(ctx, env);
            self.paint_layers(ctx);
            self.paint_popup(ctx, env);
            self.paint_attribution(ctx);
        });
    }
}

#[cfg(test)]
mod tests {
    use tour_core::map::MapPanel;

    use super::*;

    fn osm() -> TileLayer {
        TileLayer {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            subdomains: vec!["a".into(), "b".into(), "c".into()],
            attribution: "© OpenStreetMap contributors".into(),
        }
    }

    fn sized_canvas() -> MapCanvas {
        let mut canvas = MapCanvas::new(osm(), 0);
        canvas.map.surface_mut().set_size(800.0, 600.0);
        assert!(canvas.map.render(&MapPanel::default()));
        canvas
    }

    #[test]
    fn visible_tiles_are_requested_once() {
        let mut canvas = sized_canvas();
        let requests = canvas.missing_tiles();
        assert_eq!(requests.len(), canvas.scene().visible_tiles().len());
        assert!(requests[0].location.starts_with("https://"));
        assert!(canvas.missing_tiles().is_empty());
    }

    #[test]
    fn panning_keeps_tile_slots_bounded() {
        let mut canvas = sized_canvas();
        canvas.missing_tiles();
        for _ in 0..100 {
            canvas.map.surface_mut().pan_by(-TILE_SIZE, 0.0);
            canvas.missing_tiles();
        }
        assert!(canvas.tiles.len() <= MIN_TILE_SLOTS);
        for placement in canvas.scene().visible_tiles() {
            assert!(canvas.tiles.contains(&placement.tile));
        }
    }

    #[test]
    fn tiles_are_accepted_only_for_pending_slots() {
        let mut canvas = sized_canvas();
        let request = canvas.missing_tiles().remove(0);
        let payload = TilePayload {
            tile: request.tile,
            image_buf: ImageBuf::empty(),
        };
        assert!(canvas.provide(&payload));
        assert!(!canvas.provide(&payload));

        let stray = TilePayload {
            tile: TileId { zoom: 0, x: 0, y: 0 },
            image_buf: ImageBuf::empty(),
        };
        assert!(!canvas.provide(&stray));
    }

    #[test]
    fn zooming_drops_tiles_of_the_old_level() {
        let mut canvas = sized_canvas();
        canvas.missing_tiles();
        assert!(canvas.zoom_by(1));
        assert_eq!(canvas.tiles.len(), 0);
        let requests = canvas.missing_tiles();
        assert!(requests.iter().all(|request| request.tile.zoom == 15));
    }
}
