use druid::{
    widget::{CrossAxisAlignment, Flex, Label, LineBreaking, Scroll},
    Color, LinearGradient, UnitPoint, Widget, WidgetExt,
};
use tour_core::catalog::Sight;

use super::{theme, utils};
use crate::{
    data::SightsDetail,
    widget::{icons, icons::SvgIcon, MyWidgetExt, Overlay, RemoteImage},
};

pub fn detail_widget() -> impl Widget<SightsDetail> {
    Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .with_child(sidebar_widget().fix_width(theme::grid(48.0)))
        .with_flex_child(
            Scroll::new(sight_widget().padding(theme::grid(4.0))).vertical(),
            1.0,
        )
}

fn sidebar_widget() -> impl Widget<SightsDetail> {
    let header = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::new("Historical Sights")
                .with_font(theme::UI_FONT_TITLE)
                .with_text_color(theme::WHITE),
        )
        .with_spacer(theme::grid(0.5))
        .with_child(
            Label::new("Explore Berlin's landmarks")
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::BLUE_50),
        )
        .padding(theme::grid(3.0))
        .expand_width()
        .background(LinearGradient::new(
            UnitPoint::LEFT,
            UnitPoint::RIGHT,
            (theme::BLUE_600, theme::BLUE_700),
        ));

    let mut list = Flex::column();
    for sight in tour_core::catalog().sights() {
        list.add_child(thumbnail_widget(sight));
        list.add_spacer(theme::grid(1.5));
    }

    Flex::column()
        .with_child(header)
        .with_flex_child(Scroll::new(list.padding(theme::grid(2.0))).vertical(), 1.0)
        .background(theme::WHITE)
        .border(theme::GREY_200, 1.0)
}

fn thumbnail_widget(sight: &'static Sight) -> impl Widget<SightsDetail> {
    let image = RemoteImage::new(utils::placeholder_widget(), move |_: &SightsDetail, _| {
        Some(sight.image.into())
    })
    .fix_height(theme::grid(20.0))
    .expand_width();

    let info = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::new(sight.name)
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_color(theme::GREY_900),
        )
        .with_spacer(theme::grid(0.5))
        .with_child(
            Flex::row()
                .with_child(icons::MAP_PIN.scale((12.0, 12.0)))
                .with_spacer(theme::grid(0.5))
                .with_child(
                    Label::new("Berlin Landmark")
                        .with_text_size(theme::TEXT_SIZE_SMALL)
                        .with_text_color(theme::GREY_500),
                ),
        )
        .padding(theme::grid(2.0))
        .expand_width();

    Flex::column()
        .with_child(image)
        .with_child(info)
        .link()
        .border(theme::GREY_200, 2.0)
        .rounded(12.0)
        .active(move |detail: &SightsDetail, _| detail.browser.is_selected(sight.id))
        .on_click(move |_, detail: &mut SightsDetail, _| {
            if let Err(err) = detail.browser.select(sight.id) {
                log::warn!("ignoring sight selection: {}", err);
            }
        })
}

fn sight_widget() -> impl Widget<SightsDetail> {
    let hero_text = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::dynamic(|detail: &SightsDetail, _| detail.browser.selected().name.to_string())
                .with_font(theme::UI_FONT_TITLE)
                .with_text_size(36.0)
                .with_text_color(theme::WHITE),
        )
        .with_spacer(theme::grid(1.0))
        .with_child(
            Flex::row()
                .with_child(icons::MAP_PIN.scale((16.0, 16.0)).with_color(theme::WHITE))
                .with_spacer(theme::grid(1.0))
                .with_child(
                    Label::dynamic(|detail: &SightsDetail, _| {
                        detail.browser.selected().location.to_string()
                    })
                    .with_text_color(Color::rgba(1.0, 1.0, 1.0, 0.9)),
                ),
        )
        .padding(theme::grid(4.0))
        .background(LinearGradient::new(
            UnitPoint::TOP,
            UnitPoint::BOTTOM,
            (Color::rgba(0.0, 0.0, 0.0, 0.0), Color::rgba(0.0, 0.0, 0.0, 0.6)),
        ));

    let hero_image = RemoteImage::new(utils::placeholder_widget(), |detail: &SightsDetail, _| {
        Some(detail.browser.selected().image.into())
    })
    .fix_height(theme::grid(56.0))
    .expand_width();

    let stats = Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_flex_child(
            sight_stat(
                &icons::CLOCK,
                theme::BLUE_600,
                theme::BLUE_50,
                |_| "Year Built".to_string(),
                |sight| sight.year_built.to_string(),
            ),
            1.0,
        )
        .with_spacer(theme::grid(3.0))
        .with_flex_child(
            sight_stat(
                &icons::USERS,
                theme::GREEN_600,
                theme::GREEN_50,
                |_| "Annual Visitors".to_string(),
                |sight| sight.visitors_per_year.to_string(),
            ),
            1.0,
        )
        .with_spacer(theme::grid(3.0))
        .with_flex_child(
            sight_stat(
                &icons::MAP_PIN,
                theme::PURPLE_600,
                theme::PURPLE_50,
                Sight::stop_label,
                |_| "Tour Route".to_string(),
            ),
            1.0,
        );

    let fun_fact = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::new("💡 Fun Fact")
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_color(theme::GREY_900),
        )
        .with_spacer(theme::grid(1.0))
        .with_child(
            Label::dynamic(|detail: &SightsDetail, _| {
                detail.browser.selected().fun_fact.to_string()
            })
            .with_line_break_mode(LineBreaking::WordWrap)
            .with_text_color(theme::GREY_700),
        )
        .padding(theme::grid(3.0))
        .expand_width()
        .background(theme::YELLOW_50)
        .border(theme::YELLOW_500, 2.0)
        .rounded(12.0);

    let info = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::dynamic(|detail: &SightsDetail, _| {
                detail.browser.selected().description.to_string()
            })
            .with_line_break_mode(LineBreaking::WordWrap)
            .with_text_size(theme::TEXT_SIZE_LARGE)
            .with_text_color(theme::GREY_700),
        )
        .with_spacer(theme::grid(4.0))
        .with_child(stats)
        .with_spacer(theme::grid(4.0))
        .with_child(fun_fact)
        .padding(theme::grid(4.0));

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(Overlay::bottom(hero_image, hero_text))
        .with_child(info)
        .background(theme::WHITE)
        .border(theme::GREY_200, 1.0)
        .rounded(16.0)
}

fn sight_stat(
    icon: &SvgIcon,
    color: Color,
    background: Color,
    label: impl Fn(&Sight) -> String + 'static,
    value: impl Fn(&Sight) -> String + 'static,
) -> impl Widget<SightsDetail> {
    Flex::column()
        .with_child(icon.scale((32.0, 32.0)).with_color(color))
        .with_spacer(theme::grid(1.5))
        .with_child(
            Label::dynamic(move |detail: &SightsDetail, _| label(detail.browser.selected()))
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::GREY_600),
        )
        .with_spacer(theme::grid(0.5))
        .with_child(
            Label::dynamic(move |detail: &SightsDetail, _| value(detail.browser.selected()))
                .with_text_size(theme::TEXT_SIZE_LARGE)
                .with_text_color(theme::GREY_900),
        )
        .padding(theme::grid(3.0))
        .expand_width()
        .background(background)
        .rounded(12.0)
}
