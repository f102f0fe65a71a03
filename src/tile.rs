///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::kurbo::BezPath;
use druid::widget::Label;
use druid::{
    Affine, ArcStr, BoxConstraints, Color, Data, Env, LayoutCtx, LifeCycle, LifeCycleCtx, PaintCtx,
    Rect, RenderContext, Size, TextAlignment, UpdateCtx, Widget,
};

use crate::transform::FaceTransform;

const BORDER_WIDTH: f64 = 1.0;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// FlipTile
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// One letter tile. Both faces show the same label; the owner decides which
/// face is drawn and how it is turned.
pub struct FlipTile<T> {
    text: ArcStr,
    label: Label<T>,
    label_size: Size, // Needed to centre the label inside the face
}

impl<T: Data> FlipTile<T> {
    pub fn new(text: ArcStr, text_color: Color, text_size: f64) -> Self {
        let mut label = Label::new(text.to_string());
        label.set_text_color(text_color);
        label.set_text_size(text_size);
        label.set_text_alignment(TextAlignment::Center);

        FlipTile {
            text,
            label,
            label_size: Size::ZERO,
        }
    }

    pub fn text(&self) -> &ArcStr {
        &self.text
    }

    pub fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        self.label.lifecycle(ctx, event, data, env);
    }

    pub fn update(&mut self, ctx: &mut UpdateCtx, old_data: &T, data: &T, env: &Env) {
        self.label.update(ctx, old_data, data, env);
    }

    pub fn layout(&mut self, ctx: &mut LayoutCtx, tile_size: Size, data: &T, env: &Env) -> Size {
        let label_bc = BoxConstraints::new(Size::ZERO, tile_size);
        self.label_size = self.label.layout(ctx, &label_bc, data, env);
        tile_size
    }

    /// Paints one face into `rect` turned by `transform`.
    #[allow(clippy::too_many_arguments)]
    pub fn paint_face(
        &mut self,
        ctx: &mut PaintCtx,
        rect: Rect,
        transform: &FaceTransform,
        fill: &Color,
        border: &Color,
        data: &T,
        env: &Env,
    ) {
        let quad = transform.quad(rect);
        let mut path = BezPath::new();
        path.move_to(quad[0]);
        for corner in &quad[1..] {
            path.line_to(*corner);
        }
        path.close_path();

        ctx.fill(&path, fill);
        ctx.stroke(&path, border, BORDER_WIDTH);

        let label_offset = (rect.size().to_vec2() - self.label_size.to_vec2()) / 2.0;
        let affine = transform.to_affine(rect);
        ctx.with_save(|ctx| {
            ctx.transform(affine);
            ctx.transform(Affine::translate(rect.origin().to_vec2() + label_offset));
            self.label.paint(ctx, data, env);
        });
    }
}
