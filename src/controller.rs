use std::time::{Duration, Instant};

use log::{debug, info};
use winit::keyboard::KeyCode;

use crate::life::Grid;
use crate::render::{self, Shade};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RunState {
	Paused,
	Running,
}

/// Elapsed run time. Accumulates only between `resume` and `pause`.
#[derive(Debug, Default)]
pub struct Stopwatch {
	accumulated: Duration,
	resumed_at: Option<Instant>,
}

impl Stopwatch {
	pub fn resume(&mut self, now: Instant) {
		if self.resumed_at.is_none() {
			self.resumed_at = Some(now);
		}
	}

	pub fn pause(&mut self, now: Instant) {
		self.accumulated = self.elapsed(now);
		self.resumed_at = None;
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}

	pub fn elapsed(&self, now: Instant) -> Duration {
		self.accumulated + self.resumed_at.map_or(Duration::ZERO, |t| now.saturating_duration_since(t))
	}
}

pub struct Controller {
	grid: Grid,
	// previous generation right after a step, reused as the step target
	scratch: Grid,
	show_transition: bool,
	run_state: RunState,
	stopwatch: Stopwatch,
	generation: u64,
	density: f32,
	cell_size: usize,
	rng: randomize::PCG32,
	last_edit: Option<(usize, usize)>,
}

impl Controller {
	pub fn new(grid: Grid, density: f32, cell_size: usize, rng: randomize::PCG32) -> Self {
		let scratch = Grid::new_empty(grid.rows(), grid.cols());
		Self {
			grid,
			scratch,
			show_transition: false,
			run_state: RunState::Paused,
			stopwatch: Stopwatch::default(),
			generation: 0,
			density,
			cell_size,
			rng,
			last_edit: None,
		}
	}

	pub fn grid(&self) -> &Grid {
		&self.grid
	}

	pub fn run_state(&self) -> RunState {
		self.run_state
	}

	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn elapsed(&self, now: Instant) -> Duration {
		self.stopwatch.elapsed(now)
	}

	/// Returns `true` when the key was handled and the grid needs a redraw.
	pub fn process_keyboard(&mut self, key: KeyCode, now: Instant) -> bool {
		match key {
			KeyCode::Space => {
				self.toggle_run(now);
				true
			}
			KeyCode::KeyC => {
				self.reset();
				self.grid.clear();
				info!("Grid cleared");
				true
			}
			KeyCode::KeyR => {
				self.reset();
				self.grid.randomize(self.density, &mut self.rng);
				info!("Grid randomized, {} cells alive", self.grid.live_count());
				true
			}
			_ => false,
		}
	}

	fn toggle_run(&mut self, now: Instant) {
		self.run_state = match self.run_state {
			RunState::Paused => {
				self.stopwatch.resume(now);
				RunState::Running
			}
			RunState::Running => {
				self.stopwatch.pause(now);
				RunState::Paused
			}
		};
		self.show_transition = false;
		info!("Simulation {:?} at {}s", self.run_state, self.elapsed(now).as_secs());
	}

	fn reset(&mut self) {
		self.stopwatch.reset();
		self.run_state = RunState::Paused;
		self.generation = 0;
		self.show_transition = false;
	}

	/// Apply the pointer to the grid. `pixel` is the position in frame pixels, or
	/// `None` when the pointer is outside the frame. A held pointer toggles each
	/// cell it enters once.
	pub fn process_pointer(&mut self, pixel: Option<(usize, usize)>, held: bool) -> bool {
		if !held {
			self.last_edit = None;
			return false;
		}

		let Some((x, y)) = pixel else { return false };
		let cell = (y / self.cell_size, x / self.cell_size);
		if self.last_edit == Some(cell) {
			return false;
		}

		if !self.grid.toggle(cell.0, cell.1) {
			return false;
		}
		debug!("Toggled cell {:?}", cell);
		self.last_edit = Some(cell);
		self.show_transition = false;
		true
	}

	/// Advance one generation if running. Returns whether the grid changed.
	pub fn update(&mut self) -> bool {
		if self.run_state != RunState::Running {
			return false;
		}

		// Write into scratch, since we're still reading from `self.grid`
		self.grid.step_into(&mut self.scratch);
		std::mem::swap(&mut self.grid, &mut self.scratch);
		self.show_transition = true;
		self.generation += 1;
		debug!("Generation {}: {} cells alive", self.generation, self.grid.live_count());
		true
	}

	pub fn title(&self, now: Instant) -> String {
		format!(
			"Conway's Game of Life - Alive Cells: {} - Time: {} s",
			self.grid.live_count(),
			self.elapsed(now).as_secs(),
		)
	}

	pub fn shades(&self) -> impl Iterator<Item = Shade> + '_ {
		let show_transition = self.show_transition;
		self.grid.cells().iter().zip(self.scratch.cells()).map(move |(&next, &previous)| {
			if show_transition { Shade::transition(previous, next) } else { Shade::plain(next) }
		})
	}

	pub fn draw(&self, frame: &mut [u8]) {
		let frame_width = self.grid.cols() * self.cell_size;
		render::draw_grid(frame, frame_width, self.shades(), self.grid.cols(), self.cell_size);
	}
}
