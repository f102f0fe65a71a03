use druid::widget::{Button, CrossAxisAlignment, Flex, Label, MainAxisAlignment};
use druid::{
    theme, AppLauncher, Color, Command, LocalizedString, Target, Widget, WidgetExt, WidgetId,
    WindowDesc,
};

use druid_color_thesaurus::*;

use druid_flip_tiles_widget::{FlipTiles, FlipTilesConfig, FLIP_TILES};

//////////////////////////////////////////////////////////////////////////////////////
// Constants
//////////////////////////////////////////////////////////////////////////////////////
pub const ITEMS: [&str; 5] = ["A", "N", "V", "I", "L"];
pub const BACKGROUND: Color = black::ONYX;
pub const TILES_ID: WidgetId = WidgetId::reserved(1);

//////////////////////////////////////////////////////////////////////////////////////
//
// Main
//
//////////////////////////////////////////////////////////////////////////////////////

fn main() {
    let main_window = WindowDesc::new(make_ui())
        .window_size((600.0, 300.0))
        .title(LocalizedString::new("Flip Tiles"));

    AppLauncher::with_window(main_window)
        .configure_env(|env, _| {
            env.set(theme::WINDOW_BACKGROUND_COLOR, gray::DAVYS_GRAY);
            env.set(theme::TEXT_COLOR, white::ALABASTER)
        })
        .log_to_console()
        .launch(())
        .expect("launch failed");
}

fn make_ui() -> impl Widget<()> {
    let config = FlipTilesConfig::default().with_colors(blue::ARGENTINIAN_BLUE, green::ASH_GRAY);
    let tiles = FlipTiles::with_config(ITEMS, config).with_id(TILES_ID);

    Flex::column()
        .with_child(tiles)
        .with_spacer(20.0)
        .with_child(make_control_bar())
        .main_axis_alignment(MainAxisAlignment::Center)
        .cross_axis_alignment(CrossAxisAlignment::Center)
}

fn make_control_bar() -> impl Widget<()> {
    Flex::row()
        .with_child(Label::new("Click the tiles or "))
        .with_child(Button::new("Flip").on_click(|ctx, _data, _env| {
            ctx.submit_command(Command::new(FLIP_TILES, (), Target::Widget(TILES_ID)));
        }))
        .padding(5.0)
        .background(BACKGROUND)
}
