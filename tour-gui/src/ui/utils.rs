use druid::{
    widget::{CrossAxisAlignment, Flex, Label, LineBreaking, SizedBox},
    Color, Data, Widget, WidgetExt,
};
use tour_core::catalog::StatCard;

use super::theme;
use crate::widget::icons::SvgIcon;

pub fn placeholder_widget<T: Data>() -> impl Widget<T> {
    SizedBox::empty().expand().background(theme::BACKGROUND_DARK)
}

/// Title and subtitle on top of each view.
pub fn view_header<T: Data>(title: &'static str, subtitle: &'static str) -> impl Widget<T> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::new(title)
                .with_font(theme::UI_FONT_TITLE)
                .with_text_color(theme::GREY_900),
        )
        .with_spacer(theme::grid(1.0))
        .with_child(Label::new(subtitle).with_text_color(theme::GREY_600))
}

pub fn card<T: Data>(inner: impl Widget<T> + 'static) -> impl Widget<T> {
    inner
        .padding(theme::grid(3.0))
        .background(theme::WHITE)
        .border(theme::GREY_200, 1.0)
        .rounded(12.0)
}

pub fn section_title<T: Data>(icon: &SvgIcon, color: Color, title: &'static str) -> impl Widget<T> {
    Flex::row()
        .with_child(icon.scale((18.0, 18.0)).with_color(color))
        .with_spacer(theme::grid(1.0))
        .with_child(
            Label::new(title)
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_color(theme::GREY_900),
        )
}

pub fn stat_card<T: Data>(stat: &'static StatCard, value_color: Color) -> impl Widget<T> {
    let mut column = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Label::new(stat.title)
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::GREY_600),
        )
        .with_spacer(theme::grid(1.0))
        .with_child(
            Label::new(stat.value)
                .with_font(theme::UI_FONT_TITLE)
                .with_text_color(value_color)
                .with_line_break_mode(LineBreaking::WordWrap),
        );
    if let Some(detail) = stat.detail {
        column.add_spacer(theme::grid(0.5));
        column.add_child(
            Label::new(detail)
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::GREY_500),
        );
    }
    card(column.expand_width())
}
