use crate::{
    renderer::{Color, Renderer},
    vec2::Vec2,
};
use sdl2::{
    gfx::primitives::DrawRenderer,
    pixels::Color as Sdl2Color,
    render::{Canvas, RenderTarget},
};

pub struct SDL2CanvasWrapper<T: RenderTarget>(Canvas<T>, Sdl2Color);

impl<T: RenderTarget> From<sdl2::render::Canvas<T>> for SDL2CanvasWrapper<T> {
    fn from(canvas: sdl2::render::Canvas<T>) -> Self {
        Self(canvas, Sdl2Color::RGBA(0, 0, 0, 0))
    }
}

impl From<Color> for Sdl2Color {
    fn from(Color { r, g, b, a }: Color) -> Self {
        Self { r, g, b, a }
    }
}

impl<T: RenderTarget> Renderer for SDL2CanvasWrapper<T> {
    fn filled_rectangle(&mut self, a: Vec2, b: Vec2) -> &mut Self {
        self.0
            .box_(a.x as i16, a.y as i16, b.x as i16, b.y as i16, self.1)
            .expect("could not draw filled rectangle");

        self
    }

    fn filled_rounded_rectangle(&mut self, a: Vec2, b: Vec2, radius: f64) -> &mut Self {
        self.0
            .rounded_box(
                a.x as i16,
                a.y as i16,
                b.x as i16,
                b.y as i16,
                radius as i16,
                self.1,
            )
            .expect("could not draw rounded rectangle");

        self
    }

    fn text(&mut self, pos: Vec2, text: &str) -> &mut Self {
        self.0
            .string(pos.x as i16, pos.y as i16, text, self.1)
            .expect("could not draw text");

        self
    }

    fn set_color(&mut self, color: Color) -> &mut Self {
        self.0.set_draw_color(Sdl2Color::from(color));
        self.1 = color.into();

        self
    }

    fn clear(&mut self) -> &mut Self {
        self.0.clear();
        self
    }

    fn finish(&mut self) {
        self.0.present();
    }
}
