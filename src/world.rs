use crate::{
    consts::TOP_OF_FLOOR,
    input::{FrameInput, Key},
    renderer::{Color, Renderer},
    vec2::Vec2,
};

/// Axis-aligned rectangle in screen-space units.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        self.min() + Vec2::new(self.width, self.height)
    }

    /// Strict overlap: rectangles that merely share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

pub struct Player {
    pub rect: Rect,
    pub delta_x: i32,
    pub delta_y: i32,
}

impl Player {
    pub const SIZE: f64 = 20.0;
    pub const MOVE_SPEED: i32 = 5;
    pub const DASH_SPEED: i32 = 50;
    pub const JUMP_DELTA: i32 = -20;
    pub const MAX_FALL_SPEED: i32 = 10;

    pub fn new(x: f64, y: f64) -> Self {
        Self {
            rect: Rect::new(x, y, Self::SIZE, Self::SIZE),
            delta_x: 0,
            delta_y: 0,
        }
    }

    /// No grounded check: jumping mid-air is allowed.
    pub fn jump(&mut self) {
        self.delta_y = Self::JUMP_DELTA;
    }

    /// Horizontal impulse on top of whatever movement this frame added.
    pub fn dash(&mut self, key: Key) {
        match key {
            Key::Left => self.delta_x -= Self::DASH_SPEED,
            Key::Right => self.delta_x += Self::DASH_SPEED,
            Key::Up | Key::Down | Key::Jump => {}
        }
    }
}

pub struct World {
    pub player: Player,
    pub floor: Rect,
    pub walls: Vec<Rect>,
}

impl World {
    const GRAVITY: i32 = 1;

    pub fn new() -> Self {
        Self {
            player: Player::new(100.0, 100.0),
            floor: Rect::new(-100.0, TOP_OF_FLOOR, 1000.0, 20.0),
            walls: vec![
                Rect::new(100.0, TOP_OF_FLOOR - 100.0, 20.0, 100.0),
                Rect::new(600.0, 200.0, 100.0, 20.0),
            ],
        }
    }

    pub fn update(&mut self, input: &FrameInput, dash: Option<Key>) {
        if let Some(key) = dash {
            self.player.dash(key);
        }
        if input.held(Key::Left) {
            self.player.delta_x -= Player::MOVE_SPEED;
        }
        if input.held(Key::Right) {
            self.player.delta_x += Player::MOVE_SPEED;
        }
        if input.pressed(Key::Jump) {
            self.player.jump();
        }

        Self::step(&mut self.player, &self.floor, &self.walls);
    }

    /// One physics frame: gravity, floor snap, swept wall resolution.
    fn step(player: &mut Player, floor: &Rect, walls: &[Rect]) {
        player.delta_y += Self::GRAVITY;
        if player.delta_y >= Player::MAX_FALL_SPEED {
            player.delta_y = Player::MAX_FALL_SPEED;
        }

        let mut next_x = player.rect.x + f64::from(player.delta_x);
        let mut next_y = player.rect.y + f64::from(player.delta_y);

        // Bounding box over the current and tentative positions. Walls test
        // against this; the floor tests against a thin probe below the feet.
        let swept = Rect::new(
            next_x.min(player.rect.x),
            next_y.min(player.rect.y),
            (player.rect.x - next_x).abs() + player.rect.width,
            (player.rect.y - next_y).abs() + player.rect.height,
        );

        let probe = Rect::new(
            next_x,
            next_y + player.rect.height - 1.0,
            player.rect.width,
            2.0,
        );
        if probe.overlaps(floor) {
            next_y = floor.y - player.rect.height;
            // One-sided: a rising player is snapped but keeps its velocity.
            if player.delta_y > 0 {
                player.delta_y = 0;
            }
        }

        // Each wall resolves against the same swept rect; a later wall may
        // overwrite an earlier wall's snap on the same axis.
        for wall in walls {
            if !swept.overlaps(wall) {
                continue;
            }

            let started_above = player.rect.y + player.rect.height <= wall.y;
            let started_below = wall.y + wall.height <= player.rect.y;
            let ended_above = swept.y + swept.height <= wall.y;
            let ended_below = wall.y + wall.height <= swept.y;

            if started_above && !ended_above {
                next_y = wall.y - player.rect.height;
            }
            if started_below && !ended_below {
                next_y = wall.y + wall.height;
            }

            let started_left = player.rect.x + player.rect.width <= wall.x;
            let started_right = wall.x + wall.width <= player.rect.x;
            let ended_left = swept.x + swept.width <= wall.x;
            let ended_right = wall.x + wall.width <= swept.x;

            if started_left && !ended_left {
                next_x = wall.x - player.rect.width;
            }
            if started_right && !ended_right {
                next_x = wall.x + wall.width;
            }
        }

        player.rect.x = next_x;
        player.rect.y = next_y;
        // Horizontal motion is a per-frame impulse; vertical velocity persists.
        player.delta_x = 0;
    }

    pub fn draw(&self, canvas: &mut impl Renderer) {
        canvas
            .set_color(Color::BLUE)
            .filled_rectangle(self.floor.min(), self.floor.max());

        canvas.set_color(Color::ORANGE);
        for wall in &self.walls {
            canvas.filled_rectangle(wall.min(), wall.max());
        }

        canvas
            .set_color(Color::GREEN)
            .filled_rectangle(self.player.rect.min(), self.player.rect.max());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // A floor far below everything so it never interferes.
    const FAR_FLOOR: Rect = Rect::new(-100.0, 10_000.0, 1_000.0, 20.0);

    fn open_world(player: Player) -> World {
        World {
            player,
            floor: FAR_FLOOR,
            walls: vec![],
        }
    }

    #[test]
    fn gravity_accelerates_falling() {
        let mut player = Player::new(100.0, 100.0);
        World::step(&mut player, &FAR_FLOOR, &[]);
        assert_eq!(player.delta_y, 1);
        assert_eq!(player.rect.y, 101.0);
    }

    #[test]
    fn fall_speed_clamps() {
        let mut player = Player::new(100.0, 100.0);
        player.delta_y = 9;
        World::step(&mut player, &FAR_FLOOR, &[]);
        assert_eq!(player.delta_y, 10);
        World::step(&mut player, &FAR_FLOOR, &[]);
        assert_eq!(player.delta_y, 10);
    }

    #[test]
    fn falling_player_comes_to_rest_on_the_floor() {
        let floor = Rect::new(0.0, 100.0, 200.0, 20.0);
        let mut player = Player::new(50.0, 79.0);
        World::step(&mut player, &floor, &[]);
        assert_eq!(player.rect.y, 80.0);
        assert_eq!(player.delta_y, 0);
    }

    #[test]
    fn rising_through_the_probe_keeps_upward_velocity() {
        let floor = Rect::new(0.0, 100.0, 200.0, 20.0);
        let mut player = Player::new(50.0, 95.0);
        player.delta_y = -3;
        World::step(&mut player, &floor, &[]);
        // Snapped onto the floor, but the upward velocity survives.
        assert_eq!(player.rect.y, 80.0);
        assert_eq!(player.delta_y, -2);
    }

    #[test]
    fn landing_on_a_wall_top_stops_at_its_edge() {
        let wall = Rect::new(0.0, 100.0, 100.0, 20.0);
        let mut player = Player::new(40.0, 75.0);
        player.delta_y = 9;
        World::step(&mut player, &FAR_FLOOR, &[wall]);
        assert_eq!(player.rect.y, 80.0);
        // Walls never touch vertical velocity; the next frame re-snaps.
        assert_eq!(player.delta_y, 10);
    }

    #[test]
    fn hitting_a_wall_underside_stops_below_it() {
        let wall = Rect::new(0.0, 100.0, 100.0, 20.0);
        let mut player = Player::new(40.0, 130.0);
        player.delta_y = -15;
        World::step(&mut player, &FAR_FLOOR, &[wall]);
        assert_eq!(player.rect.y, 120.0);
        assert_eq!(player.delta_y, -14);
    }

    #[test]
    fn dashing_into_a_wall_stops_at_its_side() {
        let wall = Rect::new(100.0, 0.0, 20.0, 200.0);
        let mut player = Player::new(60.0, 50.0);
        player.dash(Key::Right);
        World::step(&mut player, &FAR_FLOOR, &[wall]);
        assert_eq!(player.rect.x, 80.0);
        assert_eq!(player.delta_x, 0);
    }

    #[test]
    fn two_walls_resolve_on_independent_axes() {
        // Wall A catches the player from above while wall B blocks from the
        // left, in the same frame.
        let wall_a = Rect::new(0.0, 100.0, 200.0, 20.0);
        let wall_b = Rect::new(100.0, 0.0, 20.0, 300.0);
        let mut player = Player::new(60.0, 75.0);
        player.delta_x = 30;
        player.delta_y = 9;
        World::step(&mut player, &FAR_FLOOR, &[wall_a, wall_b]);
        assert_eq!(player.rect.y, 80.0);
        assert_eq!(player.rect.x, 80.0);
    }

    #[test]
    fn later_wall_overwrites_an_earlier_snap() {
        // Both walls fire the same vertical check; the second one wins
        // because each wall recomputes from the same swept rect.
        let wall_a = Rect::new(0.0, 100.0, 200.0, 20.0);
        let wall_b = Rect::new(0.0, 104.0, 200.0, 20.0);
        let mut player = Player::new(60.0, 75.0);
        player.delta_y = 9;
        World::step(&mut player, &FAR_FLOOR, &[wall_a, wall_b]);
        assert_eq!(player.rect.y, 84.0);
    }

    #[test]
    fn jump_is_allowed_mid_air() {
        let mut player = Player::new(100.0, 100.0);
        player.delta_y = 10;
        player.jump();
        assert_eq!(player.delta_y, Player::JUMP_DELTA);
    }

    #[test]
    fn dash_only_moves_horizontally() {
        let mut player = Player::new(0.0, 0.0);
        player.dash(Key::Up);
        player.dash(Key::Down);
        player.dash(Key::Jump);
        assert_eq!(player.delta_x, 0);
        player.dash(Key::Left);
        assert_eq!(player.delta_x, -Player::DASH_SPEED);
    }

    #[test]
    fn dash_adds_to_held_movement() {
        let mut world = open_world(Player::new(0.0, 0.0));
        let mut input = FrameInput::new(0);
        input.set_held(Key::Right);
        world.update(&input, Some(Key::Right));
        assert_eq!(
            world.player.rect.x,
            f64::from(Player::DASH_SPEED + Player::MOVE_SPEED)
        );
    }

    #[test]
    fn movement_must_be_resupplied_every_frame() {
        let mut world = open_world(Player::new(0.0, 0.0));
        let mut input = FrameInput::new(0);
        input.set_held(Key::Right);
        world.update(&input, None);
        assert_eq!(world.player.rect.x, 5.0);

        // No held key this frame, so no horizontal motion.
        world.update(&FrameInput::new(16), None);
        assert_eq!(world.player.rect.x, 5.0);
    }

    #[test]
    fn fresh_jump_press_goes_up() {
        let mut world = open_world(Player::new(0.0, 0.0));
        let mut input = FrameInput::new(0);
        input.set_pressed(Key::Jump);
        world.update(&input, None);
        // Jump, then one frame of gravity.
        assert_eq!(world.player.delta_y, Player::JUMP_DELTA + World::GRAVITY);
        assert_eq!(
            world.player.rect.y,
            f64::from(Player::JUMP_DELTA + World::GRAVITY)
        );
    }

    proptest! {
        #[test]
        fn gravity_clamp_never_exceeds_max_fall(delta_y in -100i32..=100) {
            let mut player = Player::new(100.0, 100.0);
            player.delta_y = delta_y;
            World::step(&mut player, &FAR_FLOOR, &[]);
            if delta_y <= 9 {
                prop_assert_eq!(player.delta_y, delta_y + 1);
            } else {
                prop_assert_eq!(player.delta_y, Player::MAX_FALL_SPEED);
            }
        }

        #[test]
        fn horizontal_velocity_is_always_consumed(delta_x in -500i32..=500) {
            let mut player = Player::new(100.0, 100.0);
            player.delta_x = delta_x;
            World::step(&mut player, &FAR_FLOOR, &[]);
            prop_assert_eq!(player.delta_x, 0);
            prop_assert_eq!(player.rect.x, 100.0 + f64::from(delta_x));
        }
    }
}
