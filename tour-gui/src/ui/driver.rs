use druid::{
    widget::{CrossAxisAlignment, Flex, Label, LineBreaking, Scroll, ViewSwitcher},
    Color, LinearGradient, UnitPoint, Widget, WidgetExt,
};
use tour_core::catalog::DriverFeed;

use super::{theme, utils};
use crate::{
    data::DriverDetail,
    widget::{icons, MyWidgetExt, Overlay, RemoteImage},
};

pub fn detail_widget() -> impl Widget<DriverDetail> {
    let feed = tour_core::catalog().driver_feed();
    let content = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(utils::view_header(
            "Driver's View",
            "Live view from the front of the bus",
        ))
        .with_spacer(theme::grid(3.0))
        .with_child(camera_widget(feed))
        .with_spacer(theme::grid(3.0))
        .with_child(stats_widget(feed))
        .with_spacer(theme::grid(3.0))
        .with_child(about_widget(feed))
        .padding(theme::grid(4.0));
    Scroll::new(content).vertical()
}

fn camera_widget(feed: &'static DriverFeed) -> impl Widget<DriverDetail> {
    let image = RemoteImage::new(utils::placeholder_widget(), move |_: &DriverDetail, _| {
        Some(feed.image.into())
    })
    .fix_height(theme::grid(60.0))
    .expand_width();

    let live_badge = Flex::row()
        .with_child(
            Label::new("●")
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::WHITE),
        )
        .with_spacer(theme::grid(0.5))
        .with_child(
            Label::new("LIVE")
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_color(theme::WHITE),
        )
        .padding((theme::grid(1.5), theme::grid(0.5)))
        .background(theme::RED_600)
        .rounded(theme::grid(2.0));

    let caption_bar = Flex::row()
        .with_child(icons::CAMERA.scale((20.0, 20.0)).with_color(theme::WHITE))
        .with_spacer(theme::grid(1.0))
        .with_child(Label::new(feed.caption).with_text_color(theme::WHITE))
        .with_flex_spacer(1.0)
        .with_child(playback_button())
        .padding(theme::grid(2.0))
        .background(LinearGradient::new(
            UnitPoint::TOP,
            UnitPoint::BOTTOM,
            (Color::rgba(0.0, 0.0, 0.0, 0.0), Color::rgba(0.0, 0.0, 0.0, 0.7)),
        ));

    let with_caption = Overlay::bottom(image, caption_bar);
    Overlay::top_left(with_caption, live_badge)
        .inset(theme::grid(2.0))
        .rounded(12.0)
}

// Only swaps the icon, the feed is a still image.
fn playback_button() -> impl Widget<DriverDetail> {
    ViewSwitcher::new(
        |detail: &DriverDetail, _| detail.panel.is_playing(),
        |&is_playing, _, _| {
            let icon = if is_playing {
                &icons::PAUSE
            } else {
                &icons::PLAY
            };
            icon.scale((24.0, 24.0)).with_color(theme::WHITE).boxed()
        },
    )
    .padding(theme::grid(1.5))
    .link()
    .circle()
    .env_scope(|env, _| {
        env.set(theme::LINK_COLD_COLOR, Color::rgba(1.0, 1.0, 1.0, 0.2));
        env.set(theme::LINK_HOT_COLOR, Color::rgba(1.0, 1.0, 1.0, 0.3));
    })
    .on_click(|_, detail: &mut DriverDetail, _| detail.panel.toggle_playback())
}

fn stats_widget(feed: &'static DriverFeed) -> impl Widget<DriverDetail> {
    let [speed, next_stop, progress] = &feed.stats;
    Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_flex_child(utils::stat_card(speed, theme::BLUE_600), 1.0)
        .with_spacer(theme::grid(3.0))
        .with_flex_child(utils::stat_card(next_stop, theme::GREY_900), 1.0)
        .with_spacer(theme::grid(3.0))
        .with_flex_child(utils::stat_card(progress, theme::GREEN_600), 1.0)
}

fn about_widget(feed: &'static DriverFeed) -> impl Widget<DriverDetail> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::new("About Driver View")
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_color(theme::BLUE_800),
        )
        .with_spacer(theme::grid(1.0))
        .with_child(
            Label::new(feed.about)
                .with_line_break_mode(LineBreaking::WordWrap)
                .with_text_color(theme::BLUE_800),
        )
        .padding(theme::grid(3.0))
        .expand_width()
        .background(theme::BLUE_50)
        .border(theme::GREY_200, 1.0)
        .rounded(12.0)
}
