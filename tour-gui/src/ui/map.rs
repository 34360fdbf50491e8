use druid::{
    kurbo::{Circle, Line},
    widget::{
        prelude::*, Checkbox, CrossAxisAlignment, Either, Flex, Label, LineBreaking, Painter,
        Scroll, SizedBox,
    },
    Color, Widget, WidgetExt,
};
use tour_core::{
    catalog::{BusStop, Restaurant},
    map::{MarkerIcon, PolylineStyle, TileLayer},
};

use super::{theme, utils};
use crate::{
    data::MapDetail,
    widget::{icons, MapCanvas, MyWidgetExt, Overlay},
};

pub fn detail_widget(tiles: TileLayer, tile_cache_size: usize) -> impl Widget<MapDetail> {
    let body = Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .with_child(
            Scroll::new(sidebar_widget())
                .vertical()
                .fix_width(theme::grid(40.0)),
        )
        .with_spacer(theme::grid(3.0))
        .with_flex_child(map_widget(tiles, tile_cache_size), 1.0);

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(utils::view_header(
            "Interactive Map",
            "Explore stops, restaurants, and navigation routes",
        ))
        .with_spacer(theme::grid(3.0))
        .with_flex_child(body, 1.0)
        .padding(theme::grid(4.0))
}

fn map_widget(tiles: TileLayer, tile_cache_size: usize) -> impl Widget<MapDetail> {
    let stop_overlay = Either::new(
        |detail: &MapDetail, _| detail.panel.selected_stop().is_some(),
        stop_detail_widget(),
        SizedBox::empty(),
    );
    let canvas = MapCanvas::new(tiles, tile_cache_size);
    let with_legend = Overlay::bottom_right(canvas, legend_widget()).inset(theme::grid(2.0));
    Overlay::top_left(with_legend, stop_overlay)
        .inset(theme::grid(2.0))
        .border(theme::GREY_200, 1.0)
}

fn sidebar_widget() -> impl Widget<MapDetail> {
    let controls = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::new("Map Controls")
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_color(theme::GREY_900),
        )
        .with_spacer(theme::grid(1.5))
        .with_child(Checkbox::new("Show Restaurants").lens(MapDetail::show_restaurants()))
        .with_spacer(theme::grid(1.0))
        .with_child(Checkbox::new("Show Bus Route").lens(MapDetail::show_route()));

    let mut stops = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(utils::section_title(
            &icons::MAP_PIN,
            theme::BLUE_600,
            "Bus Stops",
        ))
        .with_spacer(theme::grid(1.5));
    for stop in tour_core::catalog().stops() {
        stops.add_child(stop_widget(stop));
        stops.add_spacer(theme::grid(1.0));
    }

    let mut restaurants = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(utils::section_title(
            &icons::UTENSILS,
            theme::RED_600,
            "Nearby Restaurants",
        ))
        .with_spacer(theme::grid(1.5));
    for restaurant in tour_core::catalog().restaurants() {
        restaurants.add_child(restaurant_widget(restaurant));
        restaurants.add_spacer(theme::grid(1.0));
    }

    Flex::column()
        .with_child(utils::card(controls.expand_width()))
        .with_spacer(theme::grid(2.0))
        .with_child(utils::card(stops.expand_width()))
        .with_spacer(theme::grid(2.0))
        .with_child(utils::card(restaurants.expand_width()))
}

fn stop_widget(stop: &'static BusStop) -> impl Widget<MapDetail> {
    let info = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::new(stop.name)
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_color(theme::GREY_900),
        )
        .with_spacer(theme::grid(0.5))
        .with_child(
            Label::new(stop.stop_label())
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::GREY_500),
        );
    let arrival = Label::new(stop.arrival_time)
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::BLUE_800)
        .padding((theme::grid(1.0), theme::grid(0.5)))
        .background(theme::BLUE_50)
        .rounded(4.0);

    Flex::row()
        .with_flex_child(info, 1.0)
        .with_child(arrival)
        .padding(theme::grid(1.5))
        .link()
        .border(theme::GREY_200, 2.0)
        .rounded(8.0)
        .active(move |detail: &MapDetail, _| detail.panel.is_selected(stop.id))
        .on_click(move |_, detail: &mut MapDetail, _| {
            if let Err(err) = detail.panel.select_stop(stop.id) {
                log::warn!("ignoring stop selection: {}", err);
            }
        })
}

fn restaurant_widget(restaurant: &'static Restaurant) -> impl Widget<MapDetail> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::new(restaurant.name)
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_color(theme::GREY_900),
        )
        .with_spacer(theme::grid(0.5))
        .with_child(
            Label::new(restaurant.cuisine)
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::GREY_500),
        )
        .with_spacer(theme::grid(1.0))
        .with_child(
            Flex::row()
                .with_child(
                    Label::new(restaurant.rating_label())
                        .with_text_size(theme::TEXT_SIZE_SMALL)
                        .with_text_color(theme::YELLOW_500),
                )
                .with_flex_spacer(1.0)
                .with_child(
                    Label::new(restaurant.distance)
                        .with_text_size(theme::TEXT_SIZE_SMALL)
                        .with_text_color(theme::GREY_500),
                ),
        )
        .padding(theme::grid(1.5))
        .expand_width()
        .border(theme::GREY_200, 1.0)
        .rounded(8.0)
}

fn stop_detail_widget() -> impl Widget<MapDetail> {
    let name = Label::dynamic(|detail: &MapDetail, _| {
        detail
            .panel
            .selected_stop()
            .map(|stop| stop.name.to_string())
            .unwrap_or_default()
    })
    .with_font(theme::UI_FONT_TITLE)
    .with_text_size(20.0)
    .with_text_color(theme::GREY_900);

    let dismiss = icons::CLOSE
        .scale((16.0, 16.0))
        .with_color(theme::GREY_400)
        .padding(theme::grid(0.5))
        .link()
        .circle()
        .on_click(|_, detail: &mut MapDetail, _| detail.panel.dismiss_stop());

    let info = Label::dynamic(|detail: &MapDetail, _| {
        detail
            .panel
            .selected_stop()
            .map(|stop| format!("{} on the tour route", stop.stop_label()))
            .unwrap_or_default()
    })
    .with_text_size(theme::TEXT_SIZE_SMALL)
    .with_text_color(theme::GREY_600)
    .with_line_break_mode(LineBreaking::WordWrap);

    let arrival = Flex::row()
        .with_child(
            icons::NAVIGATION
                .scale((16.0, 16.0))
                .with_color(theme::BLUE_600),
        )
        .with_spacer(theme::grid(1.0))
        .with_child(
            Label::dynamic(|detail: &MapDetail, _| {
                detail
                    .panel
                    .selected_stop()
                    .map(|stop| format!("Arrival: {}", stop.arrival_time))
                    .unwrap_or_default()
            })
            .with_font(theme::UI_FONT_MEDIUM)
            .with_text_color(theme::BLUE_600),
        );

    // Routing is out of scope, the button only looks the part.
    let directions = Flex::row()
        .with_child(icons::NAVIGATION.scale((16.0, 16.0)).with_color(theme::WHITE))
        .with_spacer(theme::grid(1.0))
        .with_child(
            Label::new("Get Directions Back")
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_color(theme::WHITE),
        )
        .center()
        .fix_height(theme::grid(5.0))
        .background(theme::BLUE_600)
        .rounded(8.0);

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Flex::row()
                .with_flex_child(name, 1.0)
                .with_child(dismiss),
        )
        .with_spacer(theme::grid(1.0))
        .with_child(info)
        .with_spacer(theme::grid(1.5))
        .with_child(arrival)
        .with_spacer(theme::grid(2.0))
        .with_child(directions)
        .padding(theme::grid(2.5))
        .fix_width(theme::grid(40.0))
        .background(theme::WHITE)
        .border(theme::GREY_200, 1.0)
        .rounded(12.0)
}

fn legend_widget() -> impl Widget<MapDetail> {
    let stop_icon = MarkerIcon::STOP;
    let restaurant_icon = MarkerIcon::RESTAURANT;
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(utils::section_title(&icons::INFO, theme::GREY_900, "Legend"))
        .with_spacer(theme::grid(1.0))
        .with_child(legend_entry(
            dot_swatch(Color::from_rgba32_u32(stop_icon.fill.0)),
            "Bus Stops",
        ))
        .with_spacer(theme::grid(0.5))
        .with_child(legend_entry(
            dot_swatch(Color::from_rgba32_u32(restaurant_icon.fill.0)),
            "Restaurants",
        ))
        .with_spacer(theme::grid(0.5))
        .with_child(legend_entry(route_swatch(), "Bus Route"))
        .padding(theme::grid(2.0))
        .background(theme::WHITE)
        .border(theme::GREY_200, 1.0)
        .rounded(8.0)
}

fn legend_entry(
    swatch: impl Widget<MapDetail> + 'static,
    label: &'static str,
) -> impl Widget<MapDetail> {
    Flex::row()
        .with_child(swatch.fix_size(theme::grid(3.0), theme::grid(2.0)))
        .with_spacer(theme::grid(1.0))
        .with_child(
            Label::new(label)
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::GREY_700),
        )
}

fn dot_swatch(fill: Color) -> impl Widget<MapDetail> {
    Painter::new(move |ctx: &mut PaintCtx, _: &MapDetail, _| {
        let rect = ctx.size().to_rect();
        let dot = Circle::new(rect.center(), rect.height() / 2.0 - 1.0);
        ctx.fill(dot, &fill);
        ctx.stroke(dot, &theme::WHITE, 2.0);
    })
}

// The swatch shows the route's dash pattern shrunk to legend size.
const SWATCH_DASH_SCALE: f64 = 0.4;

fn route_swatch() -> impl Widget<MapDetail> {
    let style = PolylineStyle::tour_route();
    Painter::new(move |ctx: &mut PaintCtx, _: &MapDetail, _| {
        let rect = ctx.size().to_rect();
        let y = rect.center().y;
        let color = Color::from_rgba32_u32(style.color.with_opacity(style.opacity).0);
        for (start, end) in dash_segments(style.dash, SWATCH_DASH_SCALE, rect.width()) {
            let line = Line::new((rect.x0 + start, y), (rect.x0 + end, y));
            ctx.stroke(line, &color, style.weight);
        }
    })
}

/// Splits `[0, length]` into the drawn spans of a dash pattern scaled by
/// `scale`. An empty pattern draws one solid span.
fn dash_segments(dash: &[f64], scale: f64, length: f64) -> Vec<(f64, f64)> {
    let period: f64 = dash.iter().sum::<f64>() * scale;
    if period <= 0.0 {
        return vec![(0.0, length)];
    }
    let mut segments = Vec::new();
    let mut offset = 0.0;
    let mut pattern = dash.iter().map(|len| len * scale).enumerate().cycle();
    while offset < length {
        let Some((i, len)) = pattern.next() else {
            break;
        };
        let end = (offset + len).min(length);
        if i % 2 == 0 && end > offset {
            segments.push((offset, end));
        }
        offset += len;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_follows_route_dash() {
        let style = PolylineStyle::tour_route();
        assert_eq!(
            dash_segments(style.dash, SWATCH_DASH_SCALE, 24.0),
            vec![(0.0, 4.0), (8.0, 12.0), (16.0, 20.0)]
        );
    }

    #[test]
    fn last_dash_is_clipped() {
        assert_eq!(
            dash_segments(&[10.0, 5.0], 1.0, 22.0),
            vec![(0.0, 10.0), (15.0, 22.0)]
        );
    }

    #[test]
    fn solid_line_without_pattern() {
        assert_eq!(dash_segments(&[], 0.4, 24.0), vec![(0.0, 24.0)]);
    }
}
