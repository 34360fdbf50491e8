use std::sync::Arc;

use druid::{
    widget::{prelude::*, FillStrat, Image},
    Data, ImageBuf, Point, Selector, WidgetPod,
};

pub const REQUEST_DATA: Selector<Arc<str>> = Selector::new("remote-image.request-data");
pub const PROVIDE_DATA: Selector<ImagePayload> = Selector::new("remote-image.provide-data");

#[derive(Clone)]
pub struct ImagePayload {
    pub location: Arc<str>,
    pub image_buf: ImageBuf,
}

type Child<T> = WidgetPod<T, Box<dyn Widget<T>>>;

/// Shows `placeholder` until the image at the located URL arrives. A
/// location that never loads leaves the placeholder in place.
pub struct RemoteImage<T> {
    placeholder: Child<T>,
    loaded: Option<Child<T>>,
    locator: Box<dyn Fn(&T, &Env) -> Option<Arc<str>>>,
    location: Option<Arc<str>>,
    fill: FillStrat,
}

impl<T: Data> RemoteImage<T> {
    pub fn new(
        placeholder: impl Widget<T> + 'static,
        locator: impl Fn(&T, &Env) -> Option<Arc<str>> + 'static,
    ) -> Self {
        Self {
            placeholder: WidgetPod::new(placeholder).boxed(),
            loaded: None,
            locator: Box::new(locator),
            location: None,
            fill: FillStrat::Cover,
        }
    }

    pub fn fill_mode(mut self, fill: FillStrat) -> Self {
        self.fill = fill;
        self
    }

    /// Points the widget at `location`, falling back to the placeholder.
    /// Returns the location to fetch, if it changed.
    fn relocate(&mut self, location: Option<Arc<str>>) -> Option<Arc<str>> {
        if location == self.location {
            return None;
        }
        self.loaded = None;
        self.location = location.clone();
        location
    }

    /// Takes the image if it is for the current location. Late answers for a
    /// previous location are ignored.
    fn accept(&mut self, payload: &ImagePayload) -> bool {
        if self.location.as_ref() != Some(&payload.location) {
            return false;
        }
        let image = Image::new(payload.image_buf.clone()).fill_mode(self.fill);
        self.loaded = Some(WidgetPod::new(image).boxed());
        true
    }

    fn shown(&mut self) -> &mut Child<T> {
        match &mut self.loaded {
            Some(image) => image,
            None => &mut self.placeholder,
        }
    }
}

impl<T: Data> Widget<T> for RemoteImage<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        if let Event::Command(cmd) = event {
            if let Some(payload) = cmd.get(PROVIDE_DATA) {
                if self.accept(payload) {
                    ctx.children_changed();
                }
                return;
            }
        }
        self.shown().event(ctx, event, data, env);
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            let location = (self.locator)(data, env);
            if let Some(location) = self.relocate(location) {
                ctx.submit_command(REQUEST_DATA.with(location).to(ctx.widget_id()));
            }
        }
        self.shown().lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        let location = (self.locator)(data, env);
        if location != self.location {
            if let Some(location) = self.relocate(location) {
                ctx.submit_command(REQUEST_DATA.with(location).to(ctx.widget_id()));
            }
            ctx.children_changed();
        }
        self.shown().update(ctx, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let child = self.shown();
        let size = child.layout(ctx, bc, data, env);
        child.set_origin(ctx, Point::ORIGIN);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        self.shown().paint(ctx, data, env);
    }
}

#[cfg(test)]
mod tests {
    use druid::widget::SizedBox;

    use super::*;

    fn remote_image() -> RemoteImage<()> {
        RemoteImage::new(SizedBox::empty(), |_: &(), _| None)
    }

    fn payload(location: &Arc<str>) -> ImagePayload {
        ImagePayload {
            location: location.clone(),
            image_buf: ImageBuf::empty(),
        }
    }

    #[test]
    fn requests_each_new_location_once() {
        let mut image = remote_image();
        let gate: Arc<str> = "https://images.example.org/gate.jpg".into();
        assert_eq!(image.relocate(Some(gate.clone())), Some(gate.clone()));
        assert_eq!(image.relocate(Some(gate)), None);
        assert_eq!(image.relocate(None), None);
        assert!(image.location.is_none());
    }

    #[test]
    fn late_image_for_previous_location_is_ignored() {
        let mut image = remote_image();
        let gate: Arc<str> = "https://images.example.org/gate.jpg".into();
        let tower: Arc<str> = "https://images.example.org/tower.jpg".into();
        image.relocate(Some(gate.clone()));
        image.relocate(Some(tower.clone()));

        assert!(!image.accept(&payload(&gate)));
        assert!(image.loaded.is_none());
        assert!(image.accept(&payload(&tower)));
        assert!(image.loaded.is_some());
    }

    #[test]
    fn relocating_falls_back_to_placeholder() {
        let mut image = remote_image();
        let gate: Arc<str> = "https://images.example.org/gate.jpg".into();
        image.relocate(Some(gate.clone()));
        image.accept(&payload(&gate));
        image.relocate(Some("https://images.example.org/wall.jpg".into()));
        assert!(image.loaded.is_none());
    }
}
