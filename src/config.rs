///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::{Color, Size};
use druid_color_thesaurus::{black, blue, purple, white};

use crate::animation::{SpringConfig, StaggerConfig};
use crate::transform::DEFAULT_PERSPECTIVE;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// FlipTilesConfig
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Debug)]
pub struct FlipTilesConfig {
    pub tile_size: Size,
    pub spacing: f64,
    pub perspective: f64,
    pub spring: SpringConfig,
    pub stagger: StaggerConfig,
    pub front_color: Color,
    pub back_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub text_size: f64,
}

impl FlipTilesConfig {
    pub fn new(tile_size: Size, spacing: f64) -> Self {
        Self {
            tile_size,
            spacing,
            ..Default::default()
        }
    }

    pub fn with_perspective(mut self, perspective: f64) -> Self {
        self.perspective = perspective;
        self
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    pub fn with_stagger(mut self, stagger: StaggerConfig) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_colors(mut self, front: Color, back: Color) -> Self {
        self.front_color = front;
        self.back_color = back;
        self
    }

    pub fn with_text(mut self, color: Color, size: f64) -> Self {
        self.text_color = color;
        self.text_size = size;
        self
    }
}

impl Default for FlipTilesConfig {
    fn default() -> Self {
        Self {
            tile_size: Size::new(80.0, 80.0),
            spacing: 8.0,
            perspective: DEFAULT_PERSPECTIVE,
            spring: SpringConfig::default(),
            stagger: StaggerConfig::default(),
            front_color: blue::ARGENTINIAN_BLUE,
            back_color: purple::PURPUREUS,
            border_color: black::LICORICE,
            text_color: white::ALABASTER,
            text_size: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use druid::Size;

    use super::FlipTilesConfig;
    use crate::animation::{SpringConfig, StaggerConfig};

    #[test]
    fn defaults_follow_the_animation_defaults() {
        let config = FlipTilesConfig::default();
        assert_eq!(config.stagger, StaggerConfig::default());
        assert_eq!(config.spring, SpringConfig::default());
        assert_eq!(config.perspective, 600.0);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = FlipTilesConfig::new(Size::new(50.0, 70.0), 4.0)
            .with_perspective(900.0)
            .with_spring(SpringConfig::wobbly())
            .with_stagger(StaggerConfig::none().reverse());
        assert_eq!(config.tile_size, Size::new(50.0, 70.0));
        assert_eq!(config.spacing, 4.0);
        assert_eq!(config.perspective, 900.0);
        assert_eq!(config.spring, SpringConfig::wobbly());
        assert_eq!(config.stagger, StaggerConfig::none().reverse());
    }
}
