use crate::{
    consts::{HEIGHT, WIDTH},
    input::{DoublePress, FrameInput, Key},
    renderer::{Color, Renderer},
    sdl2_renderer::SDL2CanvasWrapper,
    vec2::Vec2,
    world::World,
};
use sdl2::{
    event::Event,
    gfx::framerate::FPSManager,
    keyboard::{Keycode, Scancode},
    video::{Window, WindowBuildError},
    EventPump, IntegerOrSdlError, TimerSubsystem,
};

const KEYMAP: [(Scancode, Key); 5] = [
    (Scancode::W, Key::Up),
    (Scancode::A, Key::Left),
    (Scancode::S, Key::Down),
    (Scancode::D, Key::Right),
    (Scancode::Space, Key::Jump),
];

fn logical_key(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::W => Some(Key::Up),
        Keycode::A => Some(Key::Left),
        Keycode::S => Some(Key::Down),
        Keycode::D => Some(Key::Right),
        Keycode::Space => Some(Key::Jump),
        _ => None,
    }
}

pub struct App {
    world: World,
    double_press: DoublePress,
    timer: TimerSubsystem,
    fps_manager: FPSManager,
    canvas: SDL2CanvasWrapper<Window>,
    events: EventPump,
    fps: u8,
}

#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum AppConstructorError {
    CouldNotGetContext(String),
    CouldNotGetVideoSubsystem(String),
    CouldNotGetTimerSubsystem(String),
    CouldNotCreateWindow(WindowBuildError),
    CouldNotGetCanvas(IntegerOrSdlError),
    CouldNotGetEventPump(String),
    CouldNotSetFPS(String),
}

impl std::fmt::Display for AppConstructorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppConstructorError::CouldNotGetContext(msg) => {
                f.write_fmt(format_args!("could not get SDL context: {msg}"))
            }
            AppConstructorError::CouldNotGetVideoSubsystem(msg) => {
                f.write_fmt(format_args!("could not get video subsystem: {msg}"))
            }
            AppConstructorError::CouldNotGetTimerSubsystem(msg) => {
                f.write_fmt(format_args!("could not get timer subsystem: {msg}"))
            }
            AppConstructorError::CouldNotCreateWindow(msg) => {
                f.write_fmt(format_args!("could not construct window: {msg}"))
            }
            AppConstructorError::CouldNotGetCanvas(msg) => {
                f.write_fmt(format_args!("could not get canvas from window: {msg}"))
            }
            AppConstructorError::CouldNotGetEventPump(msg) => {
                f.write_fmt(format_args!("could not get event pump {msg}"))
            }
            AppConstructorError::CouldNotSetFPS(msg) => {
                f.write_fmt(format_args!("could not set fps: {msg}"))
            }
        }
    }
}

impl std::error::Error for AppConstructorError {}

impl App {
    pub fn new() -> Result<Self, AppConstructorError> {
        let ctx = sdl2::init().map_err(AppConstructorError::CouldNotGetContext)?;
        let video = ctx
            .video()
            .map_err(AppConstructorError::CouldNotGetVideoSubsystem)?;
        let window = video
            .window("dasher", WIDTH as u32, HEIGHT as u32)
            .position_centered()
            .build()
            .map_err(AppConstructorError::CouldNotCreateWindow)?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(AppConstructorError::CouldNotGetCanvas)?
            .into();
        let timer = ctx
            .timer()
            .map_err(AppConstructorError::CouldNotGetTimerSubsystem)?;
        let events = ctx
            .event_pump()
            .map_err(AppConstructorError::CouldNotGetEventPump)?;

        let mut app = App {
            world: World::new(),
            double_press: DoublePress::new(),
            timer,
            fps_manager: FPSManager::new(),
            canvas,
            events,
            fps: 0,
        };

        app.fps_manager
            .set_framerate(60)
            .map_err(AppConstructorError::CouldNotSetFPS)?;

        Ok(app)
    }

    pub fn run(mut self) {
        'running: loop {
            let begin = self.begin_frame();

            let Some(input) = self.sample_input() else {
                break 'running;
            };

            let dash = self.double_press.detect(&input);
            self.world.update(&input, dash);

            self.draw_world();
            self.draw_ui();

            self.end_frame(begin);
        }
    }

    /// Drains the event queue and snapshots the keyboard. Returns `None`
    /// when the window was asked to close.
    fn sample_input(&mut self) -> Option<FrameInput> {
        let mut input = FrameInput::new(self.timer.ticks());

        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    return None;
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = logical_key(keycode) {
                        input.set_pressed(key);
                    }
                }
                _ => {}
            }
        }

        let keyboard = self.events.keyboard_state();
        for (scancode, key) in KEYMAP {
            if keyboard.is_scancode_pressed(scancode) {
                input.set_held(key);
            }
        }

        Some(input)
    }

    fn begin_frame(&mut self) -> u32 {
        self.canvas.set_color(Color::BLACK);
        self.canvas.clear();

        self.timer.ticks()
    }

    fn draw_world(&mut self) {
        self.world.draw(&mut self.canvas);
    }

    fn draw_ui(&mut self) {
        self.canvas
            .set_color(Color::rgba(88, 112, 160, 120))
            .filled_rounded_rectangle(Vec2::new(15.0, 15.0), Vec2::new(95.0, 40.0), 5.0)
            .set_color(Color::CYAN)
            .text(Vec2::new(20.0, 25.0), format!("{} FPS", self.fps).as_str());
    }

    fn end_frame(&mut self, begin: u32) {
        self.canvas.finish();
        self.fps_manager.delay();

        let frame_time = f64::from(self.timer.ticks() - begin);
        self.fps = (1000.0 / frame_time) as u8;
    }
}
