pub use druid::theme::*;
use druid::{Color, Env, FontDescriptor, FontFamily, FontWeight, Insets, Key};

use crate::data::AppState;

pub fn grid(m: f64) -> f64 {
    GRID * m
}

pub const GRID: f64 = 8.0;

pub const WHITE: Color = Color::WHITE;
pub const BLACK: Color = Color::BLACK;
pub const GREY_50: Color = Color::rgb8(0xf9, 0xfa, 0xfb);
pub const GREY_100: Color = Color::rgb8(0xf3, 0xf4, 0xf6);
pub const GREY_200: Color = Color::rgb8(0xe5, 0xe7, 0xeb);
pub const GREY_300: Color = Color::rgb8(0xd1, 0xd5, 0xdb);
pub const GREY_400: Color = Color::rgb8(0x9c, 0xa3, 0xaf);
pub const GREY_500: Color = Color::rgb8(0x6b, 0x72, 0x80);
pub const GREY_600: Color = Color::rgb8(0x4b, 0x55, 0x63);
pub const GREY_700: Color = Color::rgb8(0x37, 0x41, 0x51);
pub const GREY_800: Color = Color::rgb8(0x1f, 0x29, 0x37);
pub const GREY_900: Color = Color::rgb8(0x11, 0x18, 0x27);
pub const BLUE_50: Color = Color::rgb8(0xef, 0xf6, 0xff);
pub const BLUE_500: Color = Color::rgb8(0x3b, 0x82, 0xf6);
pub const BLUE_600: Color = Color::rgb8(0x25, 0x63, 0xeb);
pub const BLUE_700: Color = Color::rgb8(0x1d, 0x4e, 0xd8);
pub const BLUE_800: Color = Color::rgb8(0x1e, 0x40, 0xaf);
pub const GREEN_50: Color = Color::rgb8(0xf0, 0xfd, 0xf4);
pub const GREEN_600: Color = Color::rgb8(0x16, 0xa3, 0x4a);
pub const PURPLE_50: Color = Color::rgb8(0xfa, 0xf5, 0xff);
pub const PURPLE_600: Color = Color::rgb8(0x93, 0x33, 0xea);
pub const RED_600: Color = Color::rgb8(0xdc, 0x26, 0x26);
pub const YELLOW_50: Color = Color::rgb8(0xfe, 0xfc, 0xe8);
pub const YELLOW_500: Color = Color::rgb8(0xea, 0xb3, 0x08);

pub const SIDEBAR_BACKGROUND: Color = GREY_900;
pub const SIDEBAR_FOREGROUND: Color = WHITE;
pub const SIDEBAR_MUTED: Color = GREY_400;

pub const ICON_COLOR: Key<Color> = Key::new("app.icon-color");
pub const LINK_HOT_COLOR: Key<Color> = Key::new("app.link-hot-color");
pub const LINK_ACTIVE_COLOR: Key<Color> = Key::new("app.link-active-color");
pub const LINK_COLD_COLOR: Key<Color> = Key::new("app.link-cold-color");
pub const LINK_ACTIVE_BORDER_COLOR: Key<Color> = Key::new("app.link-active-border-color");

pub const MAP_BACKGROUND: Key<Color> = Key::new("app.map-background");
pub const MAP_TILE_GRID_COLOR: Key<Color> = Key::new("app.map-tile-grid-color");
pub const POPUP_BACKGROUND: Key<Color> = Key::new("app.popup-background");
pub const POPUP_TEXT_COLOR: Key<Color> = Key::new("app.popup-text-color");

pub const UI_FONT_MEDIUM: Key<FontDescriptor> = Key::new("app.ui-font-medium");
pub const UI_FONT_TITLE: Key<FontDescriptor> = Key::new("app.ui-font-title");
pub const TEXT_SIZE_SMALL: Key<f64> = Key::new("app.text-size-small");

pub fn setup(env: &mut Env, _state: &AppState) {
    env.set(WINDOW_BACKGROUND_COLOR, GREY_50);
    env.set(LABEL_COLOR, GREY_800);
    env.set(ICON_COLOR, GREY_600);
    env.set(PLACEHOLDER_COLOR, GREY_500);
    env.set(PRIMARY_LIGHT, BLUE_500);
    env.set(PRIMARY_DARK, BLUE_700);

    env.set(BACKGROUND_LIGHT, WHITE);
    env.set(BACKGROUND_DARK, GREY_100);
    env.set(FOREGROUND_LIGHT, GREY_700);
    env.set(FOREGROUND_DARK, BLACK);

    env.set(BUTTON_DARK, BLUE_600);
    env.set(BUTTON_LIGHT, BLUE_500);
    env.set(BUTTON_BORDER_RADIUS, 8.0);
    env.set(BUTTON_BORDER_WIDTH, 0.0);

    env.set(BORDER_DARK, GREY_200);
    env.set(BORDER_LIGHT, GREY_100);

    env.set(SELECTION_COLOR, BLUE_500);
    env.set(SELECTION_TEXT_COLOR, WHITE);
    env.set(CURSOR_COLOR, BLACK);

    env.set(
        UI_FONT,
        FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(14.0),
    );
    env.set(
        UI_FONT_MEDIUM,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_size(14.0)
            .with_weight(FontWeight::MEDIUM),
    );
    env.set(
        UI_FONT_TITLE,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_size(24.0)
            .with_weight(FontWeight::BOLD),
    );
    env.set(TEXT_SIZE_SMALL, 12.0);
    env.set(TEXT_SIZE_NORMAL, 14.0);
    env.set(TEXT_SIZE_LARGE, 18.0);

    env.set(BASIC_WIDGET_HEIGHT, grid(2.0));
    env.set(WIDE_WIDGET_WIDTH, grid(12.0));
    env.set(BORDERED_WIDGET_HEIGHT, grid(3.0));

    env.set(TEXTBOX_BORDER_RADIUS, 4.0);
    env.set(TEXTBOX_BORDER_WIDTH, 1.0);
    env.set(
        TEXTBOX_INSETS,
        Insets::new(grid(1.0), grid(0.5), grid(1.0), grid(0.5)),
    );

    env.set(SCROLLBAR_COLOR, GREY_400);
    env.set(SCROLLBAR_BORDER_COLOR, GREY_300);
    env.set(SCROLLBAR_MAX_OPACITY, 0.7);
    env.set(SCROLLBAR_FADE_DELAY, 1500u64);
    env.set(SCROLLBAR_WIDTH, 6.0);
    env.set(SCROLLBAR_PAD, 2.0);
    env.set(SCROLLBAR_RADIUS, 5.0);
    env.set(SCROLLBAR_EDGE_WIDTH, 0.0);

    env.set(WIDGET_PADDING_VERTICAL, grid(1.0));
    env.set(WIDGET_PADDING_HORIZONTAL, grid(1.0));
    env.set(WIDGET_CONTROL_COMPONENT_PADDING, grid(1.0));

    env.set(LINK_HOT_COLOR, GREY_100);
    env.set(LINK_ACTIVE_COLOR, BLUE_50);
    env.set(LINK_COLD_COLOR, Color::rgba(0.0, 0.0, 0.0, 0.0));
    env.set(LINK_ACTIVE_BORDER_COLOR, BLUE_500);

    env.set(MAP_BACKGROUND, GREY_200);
    env.set(MAP_TILE_GRID_COLOR, GREY_300);
    env.set(POPUP_BACKGROUND, WHITE);
    env.set(POPUP_TEXT_COLOR, GREY_900);
}
