///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::time::Duration;

use druid::{
    ArcStr, BoxConstraints, Data, Env, Event, EventCtx, Insets, LayoutCtx, LifeCycle, LifeCycleCtx,
    PaintCtx, Point, Rect, Selector, Size, UpdateCtx, Widget,
};

use crate::animation::Trail;
use crate::config::FlipTilesConfig;
use crate::flip::{FlipState, FlipToggle, UNFLIPPED_ANGLE};
use crate::tile::FlipTile;
use crate::transform::{Face, TileTransforms};

//////////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Command Selectors
///
/////////////////////////////////////////////////////////////////////////////////////////////////////
/// Flips the tiles as if they had been clicked.
pub const FLIP_TILES: Selector = Selector::new("flip-tiles-trigger");

//////////////////////////////////////////////////////////////////////////////////////////////////////
///
/// FlipTiles Widget
///
/////////////////////////////////////////////////////////////////////////////////////////////////////
/// A row of letter tiles that flip over together, one after the other, when clicked.
pub struct FlipTiles<T> {
    tiles: Vec<FlipTile<T>>,
    toggle: FlipToggle,
    trail: Trail,
    config: FlipTilesConfig,
}

impl<T: Data> FlipTiles<T> {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ArcStr>,
    {
        Self::with_config(items, FlipTilesConfig::default())
    }

    pub fn with_config<I, S>(items: I, config: FlipTilesConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ArcStr>,
    {
        let tiles: Vec<FlipTile<T>> = items
            .into_iter()
            .map(|item| FlipTile::new(item.into(), config.text_color.clone(), config.text_size))
            .collect();
        let trail = Trail::new(tiles.len(), UNFLIPPED_ANGLE, config.spring, config.stagger);

        FlipTiles {
            tiles,
            toggle: FlipToggle::new(),
            trail,
            config,
        }
    }

    /// One tile per character of `word`.
    pub fn from_letters(word: &str) -> Self {
        Self::new(word.chars().map(|letter| letter.to_string()))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &ArcStr> + '_ {
        self.tiles.iter().map(|tile| tile.text())
    }

    pub fn config(&self) -> &FlipTilesConfig {
        &self.config
    }

    pub fn state(&self) -> FlipState {
        self.toggle.state()
    }

    /// Current rotation of tile `index` in degrees.
    pub fn rotation(&self, index: usize) -> Option<f64> {
        self.trail.value(index)
    }

    pub fn requested_target(&self, index: usize) -> Option<f64> {
        self.trail.requested_target(index)
    }

    pub fn is_animating(&self) -> bool {
        self.trail.is_animating()
    }

    /// Flips every tile over. Tiles still turning are sent back the other way.
    pub fn trigger(&mut self) -> FlipState {
        self.toggle.trigger(&mut self.trail)
    }

    /// Moves the animation forward by `interval`. Returns whether another frame is needed.
    pub fn advance(&mut self, interval: Duration) -> bool {
        self.trail.advance(interval.as_secs_f64());
        self.trail.is_animating()
    }

    /// Front and back transforms of every tile at the current rotations.
    pub fn tile_transforms(&self) -> Vec<TileTransforms> {
        self.trail
            .values()
            .map(|value| TileTransforms::new(value, self.config.perspective))
            .collect()
    }
}

fn tile_rect(config: &FlipTilesConfig, index: usize) -> Rect {
    let x = index as f64 * (config.tile_size.width + config.spacing);
    Rect::from_origin_size(Point::new(x, 0.0), config.tile_size)
}

fn row_size(config: &FlipTilesConfig, count: usize) -> Size {
    if count == 0 {
        return Size::ZERO;
    }
    let width = count as f64 * config.tile_size.width + (count - 1) as f64 * config.spacing;
    Size::new(width, config.tile_size.height)
}

// The row keeps its natural size under unbounded constraints and is clamped otherwise.
fn fit_row(bc: &BoxConstraints, desired: Size) -> Size {
    let max = bc.max();
    if max.width.is_infinite() {
        log::warn!("Infinite width passed to FlipTiles");
    }
    if max.height.is_infinite() {
        log::warn!("Infinite height passed to FlipTiles");
    }
    if desired.width > max.width || desired.height > max.height {
        log::warn!("Flip tiles need {:?} but only {:?} is available", desired, max);
    }
    bc.constrain(desired)
}

// How far a turning face can reach past its tile once perspective enlarges the near edge.
fn paint_overhang(config: &FlipTilesConfig) -> f64 {
    let half_height = config.tile_size.height / 2.0;
    let half_extent = config.tile_size.width.max(config.tile_size.height) / 2.0;
    let distance = config.perspective - half_height;
    if !config.perspective.is_finite() || config.perspective <= 0.0 || distance <= 0.0 {
        return half_extent;
    }
    half_extent * (config.perspective / distance - 1.0) + 1.0
}

impl<T: Data> Widget<T> for FlipTiles<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut T, _env: &Env) {
        match event {
            Event::MouseDown(mouse_event) if mouse_event.button.is_left() => {
                ctx.set_active(true);
                ctx.set_handled();
            }
            Event::MouseUp(mouse_event) if mouse_event.button.is_left() => {
                if ctx.is_active() {
                    ctx.set_active(false);
                    if ctx.is_hot() {
                        self.trigger();
                        ctx.request_anim_frame();
                    }
                    ctx.set_handled();
                }
            }
            Event::Command(cmd) if cmd.is(FLIP_TILES) => {
                self.trigger();
                ctx.request_anim_frame();
                ctx.set_handled();
            }
            Event::AnimFrame(interval) => {
                if self.advance(Duration::from_nanos(*interval)) {
                    ctx.request_anim_frame();
                }
                ctx.request_paint();
            }
            _ => {}
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        for tile in self.tiles.iter_mut() {
            tile.lifecycle(ctx, event, data, env);
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &T, data: &T, env: &Env) {
        for tile in self.tiles.iter_mut() {
            tile.update(ctx, old_data, data, env);
        }
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        for tile in self.tiles.iter_mut() {
            tile.layout(ctx, self.config.tile_size, data, env);
        }

        let desired = row_size(&self.config, self.tiles.len());
        ctx.set_paint_insets(Insets::uniform(paint_overhang(&self.config)));
        fit_row(bc, desired)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        let config = &self.config;
        for (index, (tile, value)) in self.tiles.iter_mut().zip(self.trail.values()).enumerate() {
            let transforms = TileTransforms::new(value, config.perspective);
            if let Some(face) = transforms.visible_face() {
                let fill = match face {
                    Face::Front => &config.front_color,
                    Face::Back => &config.back_color,
                };
                let rect = tile_rect(config, index);
                tile.paint_face(ctx, rect, transforms.get(face), fill, &config.border_color, data, env);
            }
        }
    }
}
