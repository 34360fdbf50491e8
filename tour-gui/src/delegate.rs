use std::sync::Arc;

use druid::{AppDelegate, Command, DelegateCtx, Env, Handled, ImageBuf, Selector, Target};
use threadpool::ThreadPool;

use crate::{
    data::AppState,
    error::Error,
    webapi::WebApi,
    widget::{map_canvas, remote_image},
};

pub struct Delegate {
    image_pool: ThreadPool,
}

impl Delegate {
    pub fn new() -> Self {
        const MAX_IMAGE_THREADS: usize = 8;

        Self {
            image_pool: ThreadPool::with_name("image_loading".into(), MAX_IMAGE_THREADS),
        }
    }
}

impl AppDelegate<AppState> for Delegate {
    fn command(
        &mut self,
        ctx: &mut DelegateCtx,
        target: Target,
        cmd: &Command,
        _data: &mut AppState,
        _env: &Env,
    ) -> Handled {
        if let Some(location) = cmd.get(remote_image::REQUEST_DATA).cloned() {
            self.load_image(
                ctx,
                target,
                location.clone(),
                remote_image::PROVIDE_DATA,
                move |image_buf| remote_image::ImagePayload {
                    location,
                    image_buf,
                },
            );
            Handled::Yes
        } else if let Some(request) = cmd.get(map_canvas::REQUEST_TILE).cloned() {
            let tile = request.tile;
            self.load_image(
                ctx,
                target,
                request.location,
                map_canvas::PROVIDE_TILE,
                move |image_buf| map_canvas::TilePayload { tile, image_buf },
            );
            Handled::Yes
        } else {
            Handled::No
        }
    }
}

impl Delegate {
    /// Resolves `location` to an image, from the cache right away or on the
    /// pool, and answers the requesting widget with `provide`. Failures are
    /// only logged, the widget keeps its placeholder.
    fn load_image<P: Send + 'static>(
        &self,
        ctx: &mut DelegateCtx,
        target: Target,
        location: Arc<str>,
        provide: Selector<P>,
        payload: impl FnOnce(ImageBuf) -> P + Send + 'static,
    ) {
        let Some(webapi) = WebApi::global() else {
            log::warn!("web API is not installed, cannot load {}", location);
            return;
        };
        if let Some(image_buf) = webapi.get_cached_image(&location) {
            ctx.submit_command(provide.with(payload(image_buf)).to(target));
            return;
        }
        if webapi.is_offline() {
            return;
        }
        let sink = ctx.get_external_handle();
        self.image_pool.execute(move || match webapi.get_image(location.clone()) {
            Ok(image_buf) => {
                if let Err(err) = sink.submit_command(provide, payload(image_buf), target) {
                    log::error!("failed to deliver image {}: {}", location, err);
                }
            }
            Err(Error::Offline) => {}
            Err(err) => {
                log::warn!("failed to load image {}: {}", location, err);
            }
        });
    }
}
