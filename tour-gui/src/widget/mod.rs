pub mod icons;
mod link;
pub mod map_canvas;
mod overlay;
pub mod remote_image;

use druid::{Data, Widget};

pub use link::Link;
pub use map_canvas::MapCanvas;
pub use overlay::Overlay;
pub use remote_image::RemoteImage;

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn link(self) -> Link<T> {
        Link::new(self)
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
