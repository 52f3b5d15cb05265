use crate::vec2::Vec2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const ORANGE: Color = Color::rgb(255, 161, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

pub trait Renderer {
    fn filled_rectangle(&mut self, a: Vec2, b: Vec2) -> &mut Self;
    fn filled_rounded_rectangle(&mut self, a: Vec2, b: Vec2, radius: f64) -> &mut Self;
    fn text(&mut self, pos: Vec2, text: &str) -> &mut Self;

    fn set_color(&mut self, color: Color) -> &mut Self;
    fn clear(&mut self) -> &mut Self;

    fn finish(&mut self);
}
