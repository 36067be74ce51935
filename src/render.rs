use crate::life::Cell;

pub const COLOR_BG: [u8; 4] = [10, 10, 10, 0xff];
pub const COLOR_GRID: [u8; 4] = [40, 40, 40, 0xff];
pub const COLOR_DIE_NEXT: [u8; 4] = [170, 170, 170, 0xff];
pub const COLOR_ALIVE_NEXT: [u8; 4] = [255, 255, 255, 0xff];

/// What a cell looks like on the current frame.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Shade {
	Background,
	Dying,
	Alive,
}

impl Shade {
	pub fn plain(cell: Cell) -> Self {
		if cell.is_alive() { Shade::Alive } else { Shade::Background }
	}

	/// Shade for a cell that went from `previous` to `next` in the last step.
	pub fn transition(previous: Cell, next: Cell) -> Self {
		match (previous, next) {
			(_, Cell::Alive) => Shade::Alive,
			(Cell::Alive, Cell::Dead) => Shade::Dying,
			(Cell::Dead, Cell::Dead) => Shade::Background,
		}
	}

	pub fn color(self) -> [u8; 4] {
		match self {
			Shade::Background => COLOR_BG,
			Shade::Dying => COLOR_DIE_NEXT,
			Shade::Alive => COLOR_ALIVE_NEXT,
		}
	}
}

/// Fill a rectangle in an RGBA8 frame, clipped to the frame.
pub fn fill_rect(frame: &mut [u8], frame_width: usize, x: usize, y: usize, w: usize, h: usize, rgba: [u8; 4]) {
	if frame_width == 0 {
		return;
	}
	let frame_height = frame.len() / 4 / frame_width;
	let x_end = (x + w).min(frame_width);
	let y_end = (y + h).min(frame_height);

	for py in y.min(y_end)..y_end {
		let row = &mut frame[py * frame_width * 4..(py + 1) * frame_width * 4];
		for pixel in row[x.min(x_end) * 4..x_end * 4].chunks_exact_mut(4) {
			pixel.copy_from_slice(&rgba);
		}
	}
}

/// Paint the grid lines, then every cell as a square one pixel smaller than `cell_size`.
pub fn draw_grid<I>(frame: &mut [u8], frame_width: usize, shades: I, cols: usize, cell_size: usize)
where
	I: IntoIterator<Item = Shade>,
{
	for pixel in frame.chunks_exact_mut(4) {
		pixel.copy_from_slice(&COLOR_GRID);
	}

	let inner = cell_size.saturating_sub(1);
	for (i, shade) in shades.into_iter().enumerate() {
		let (row, col) = (i / cols, i % cols);
		fill_rect(frame, frame_width, col * cell_size, row * cell_size, inner, inner, shade.color());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pixel(frame: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
		let i = (y * width + x) * 4;
		[frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]
	}

	#[test]
	fn transition_shades() {
		assert_eq!(Shade::transition(Cell::Alive, Cell::Alive), Shade::Alive);
		assert_eq!(Shade::transition(Cell::Dead, Cell::Alive), Shade::Alive);
		assert_eq!(Shade::transition(Cell::Alive, Cell::Dead), Shade::Dying);
		assert_eq!(Shade::transition(Cell::Dead, Cell::Dead), Shade::Background);
	}

	#[test]
	fn plain_shades_never_dying() {
		assert_eq!(Shade::plain(Cell::Alive), Shade::Alive);
		assert_eq!(Shade::plain(Cell::Dead), Shade::Background);
	}

	#[test]
	fn fill_rect_clips_to_frame() {
		let (w, h) = (4, 3);
		let mut frame = vec![0_u8; w * h * 4];
		fill_rect(&mut frame, w, 2, 1, 10, 10, COLOR_ALIVE_NEXT);

		assert_eq!(pixel(&frame, w, 1, 1), [0; 4]);
		assert_eq!(pixel(&frame, w, 2, 1), COLOR_ALIVE_NEXT);
		assert_eq!(pixel(&frame, w, 3, 2), COLOR_ALIVE_NEXT);
		assert_eq!(pixel(&frame, w, 3, 0), [0; 4]);

		// entirely outside
		fill_rect(&mut frame, w, 9, 9, 2, 2, COLOR_BG);
		assert!(frame.chunks_exact(4).all(|p| p == [0; 4] || p == COLOR_ALIVE_NEXT));
	}

	#[test]
	fn draw_grid_leaves_grid_lines() {
		let (cols, size) = (2, 3);
		let width = cols * size;
		let mut frame = vec![0_u8; width * size * 4];
		draw_grid(&mut frame, width, [Shade::Alive, Shade::Dying], cols, size);

		assert_eq!(pixel(&frame, width, 0, 0), COLOR_ALIVE_NEXT);
		assert_eq!(pixel(&frame, width, 1, 1), COLOR_ALIVE_NEXT);
		assert_eq!(pixel(&frame, width, 2, 0), COLOR_GRID);
		assert_eq!(pixel(&frame, width, 3, 1), COLOR_DIE_NEXT);
		assert_eq!(pixel(&frame, width, 3, 2), COLOR_GRID);
	}
}
