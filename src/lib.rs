pub mod controller;
pub mod life;
pub mod render;

use std::time::{Duration, Instant};

use error_iter::ErrorIter as _;
use log::{error, info};
use pixels::{Error, Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use crate::controller::Controller;
use crate::life::Grid;

pub const WINDOW_WIDTH: u32 = 1400;
pub const WINDOW_HEIGHT: u32 = 700;
pub const CELL_SIZE: u32 = 10;
pub const DENSITY: f32 = 0.25;
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

const COMMAND_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::KeyC, KeyCode::KeyR];

pub fn run() -> Result<(), Error> {
    env_logger::init();
    let event_loop = EventLoop::new().map_err(|e| Error::UserDefined(Box::new(e)))?;
    let mut input = WinitInputHelper::new();

    let window = {
        let size = LogicalSize::new(WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64);
        WindowBuilder::new()
            .with_title("Conway's Game of Life")
            .with_inner_size(size)
            .with_resizable(false)
            .build(&event_loop)
            .map_err(|e| Error::UserDefined(Box::new(e)))?
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(WINDOW_WIDTH, WINDOW_HEIGHT, surface_texture)?
    };

    let (rows, cols) = ((WINDOW_HEIGHT / CELL_SIZE) as usize, (WINDOW_WIDTH / CELL_SIZE) as usize);
    let mut rng: randomize::PCG32 = life::generate_seed().into();
    let grid = Grid::new_random(rows, cols, DENSITY, &mut rng);
    info!("Starting with {} of {} cells alive", grid.live_count(), rows * cols);

    let mut controller = Controller::new(grid, DENSITY, CELL_SIZE as usize, rng);
    let mut next_frame = Instant::now();

    let res = event_loop.run(|event, elwt| {
        // The one event winit_input_helper doesn't track for us
        if let Event::WindowEvent { event: WindowEvent::RedrawRequested, .. } = event {
            controller.draw(pixels.frame_mut());
            if let Err(err) = pixels.render() {
                log_error("pixels.render", err);
                elwt.exit();
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(KeyCode::Escape) || input.close_requested() || input.destroyed() {
                info!("Window closed; stopping");
                elwt.exit();
                return;
            }

            let now = Instant::now();
            let mut redraw = false;

            for key in COMMAND_KEYS {
                if input.key_pressed(key) {
                    redraw |= controller.process_keyboard(key, now);
                }
            }

            // Positions outside the pixel buffer are dropped rather than clamped
            let pointer = input
                .cursor()
                .and_then(|pos| pixels.window_pos_to_pixel(pos).ok());
            redraw |= controller.process_pointer(pointer, input.mouse_held(0));

            if let Some(size) = input.window_resized() {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    log_error("pixels.resize_surface", err);
                    elwt.exit();
                    return;
                }
                redraw = true;
            }

            if now >= next_frame {
                controller.update();
                window.set_title(&controller.title(now));
                next_frame = now + FRAME_INTERVAL;
                redraw = true;
            }

            if redraw {
                window.request_redraw();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
        }
    });
    res.map_err(|e| Error::UserDefined(Box::new(e)))
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
