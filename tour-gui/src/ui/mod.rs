use druid::{
    widget::{CrossAxisAlignment, Flex, Label, ViewSwitcher},
    Color, Widget, WidgetExt, WindowDesc,
};
use tour_core::{map::TileLayer, shell::View};

use crate::{
    cmd,
    controller::NavController,
    data::{AppState, Config, Route},
    widget::{icons, icons::SvgIcon, MyWidgetExt},
};

pub mod driver;
pub mod map;
pub mod sights;
pub mod theme;
pub mod utils;

pub fn main_window(config: &Config) -> WindowDesc<AppState> {
    WindowDesc::new(root_widget(
        config.tile_layer(),
        config.tile_cache_size,
    ))
        .title("Berlin Bus Tour")
        .with_min_size((theme::grid(100.0), theme::grid(70.0)))
        .window_size((theme::grid(160.0), theme::grid(100.0)))
}

fn root_widget(tiles: TileLayer, tile_cache_size: usize) -> impl Widget<AppState> {
    Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .with_child(sidebar_widget().fix_width(theme::grid(32.0)))
        .with_flex_child(route_widget(tiles, tile_cache_size), 1.0)
        .controller(NavController)
}

fn sidebar_widget() -> impl Widget<AppState> {
    let title = Flex::row()
        .with_child(
            icons::BUS
                .scale((32.0, 32.0))
                .with_color(theme::BLUE_500),
        )
        .with_spacer(theme::grid(1.5))
        .with_child(
            Flex::column()
                .cross_axis_alignment(CrossAxisAlignment::Start)
                .with_child(
                    Label::new("Berlin Bus Tour")
                        .with_font(theme::UI_FONT_TITLE)
                        .with_text_color(theme::SIDEBAR_FOREGROUND),
                )
                .with_spacer(theme::grid(0.5))
                .with_child(
                    Label::new("Interactive Display")
                        .with_text_size(theme::TEXT_SIZE_SMALL)
                        .with_text_color(theme::SIDEBAR_MUTED),
                ),
        )
        .padding(theme::grid(3.0));

    let footer = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::new("Welcome to Berlin")
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_color(theme::SIDEBAR_FOREGROUND),
        )
        .with_spacer(theme::grid(0.5))
        .with_child(
            Label::new("Explore the city's history")
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::SIDEBAR_MUTED),
        )
        .padding(theme::grid(2.0))
        .expand_width()
        .background(theme::GREY_800)
        .rounded(8.0)
        .padding(theme::grid(2.0));

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(title)
        .with_child(nav_button(View::Driver, &icons::CAMERA))
        .with_child(nav_button(View::Sights, &icons::INFO))
        .with_child(nav_button(View::Map, &icons::MAP_PIN))
        .with_flex_spacer(1.0)
        .with_child(footer)
        .background(theme::SIDEBAR_BACKGROUND)
}

fn nav_button(view: View, icon: &SvgIcon) -> impl Widget<AppState> {
    Flex::row()
        .with_child(icon.scale((20.0, 20.0)))
        .with_spacer(theme::grid(1.5))
        .with_child(Label::new(view.title()).with_font(theme::UI_FONT_MEDIUM))
        .padding((theme::grid(2.0), theme::grid(1.5)))
        .expand_width()
        .link()
        .rounded(8.0)
        .active(move |state: &AppState, _| state.shell.is_mounted(view))
        .env_scope(move |env, state: &AppState| {
            if state.shell.is_mounted(view) {
                env.set(theme::LABEL_COLOR, theme::WHITE);
                env.set(theme::ICON_COLOR, theme::WHITE);
            } else {
                env.set(theme::LABEL_COLOR, theme::GREY_300);
                env.set(theme::ICON_COLOR, theme::GREY_300);
            }
            env.set(theme::LINK_HOT_COLOR, theme::GREY_800);
            env.set(theme::LINK_ACTIVE_COLOR, theme::BLUE_600);
            env.set(theme::LINK_ACTIVE_BORDER_COLOR, Color::TRANSPARENT);
        })
        .on_click(move |ctx, _, _| ctx.submit_command(cmd::NAVIGATE.with(view)))
        .padding((theme::grid(2.0), theme::grid(0.5)))
}

fn route_widget(tiles: TileLayer, tile_cache_size: usize) -> impl Widget<AppState> {
    ViewSwitcher::new(
        |state: &AppState, _| state.route(),
        move |route: &Route, _, _| match route.0 {
            View::Driver => driver::detail_widget().lens(AppState::driver).boxed(),
            View::Sights => sights::detail_widget().lens(AppState::sights).boxed(),
            View::Map => map::detail_widget(tiles.clone(), tile_cache_size)
                .lens(AppState::map)
                .boxed(),
        },
    )
}
