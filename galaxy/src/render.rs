//! Framing images for presentation.

use {crate::term::Point, serde::Serialize, std::fmt, thiserror::Error};

/// Smallest width of a canvas, including its frame.
pub const MIN_WIDTH: i64 = 17;

/// Smallest height of a canvas, including its frame.
pub const MIN_HEIGHT: i64 = 13;

/// Largest width or height of a canvas, including its frame.
pub const MAX_SIZE: i64 = 4096;

/// Result of rendering.
pub type Result<T> =
    std::result::Result<T, Error>;

/// Returned when images cannot be laid out on a canvas.
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error
{
    #[error("Image too large: coordinate {0} does not fit on a canvas of {} cells", MAX_SIZE)]
    TooLarge(i64),
}

/// Images framed and laid out on a common canvas.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Canvas
{
    /// Width in cells, including the frame.
    pub width: i64,

    /// Height in cells, including the frame.
    pub height: i64,

    /// One list of points per image.
    ///
    /// Every layer contains the frame,
    /// followed by the points of the image shifted by one cell.
    pub layers: Vec<Vec<Point>>,
}

/// Lay out images on a canvas large enough for all of them.
///
/// Fails if a coordinate would make the canvas larger than [`MAX_SIZE`].
pub fn render(images: &[Vec<Point>]) -> Result<Canvas>
{
    let points = || images.iter().flatten();
    let width  = size(MIN_WIDTH,  points().map(|p| p.x).max())?;
    let height = size(MIN_HEIGHT, points().map(|p| p.y).max())?;

    let layers = images.iter()
        .map(|image| {
            let mut layer = frame(width, height);
            // Coordinates are at most MAX_SIZE here, so this does not overflow.
            layer.extend(image.iter().map(|p| Point{x: p.x + 1, y: p.y + 1}));
            layer
        })
        .collect();

    Ok(Canvas{width, height, layers})
}

/// Width or height of a canvas whose largest content coordinate is given.
fn size(min: i64, largest: Option<i64>) -> Result<i64>
{
    let Some(largest) = largest.filter(|&c| c > 0) else { return Ok(min) };
    // One cell for the coordinate itself and one on each side for the frame.
    match largest.checked_add(3) {
        Some(size) if size <= MAX_SIZE => Ok(min.max(size)),
        _ => Err(Error::TooLarge(largest)),
    }
}

/// The border of a canvas, without its corners.
fn frame(width: i64, height: i64) -> Vec<Point>
{
    let mut points = Vec::new();
    for x in 1 .. width - 1 {
        points.push(Point{x, y: 0});
        points.push(Point{x, y: height - 1});
    }
    for y in 1 .. height - 1 {
        points.push(Point{x: 0, y});
        points.push(Point{x: width - 1, y});
    }
    points
}

impl fmt::Display for Canvas
{
    /// One line per layer, listing its points.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        for (i, layer) in self.layers.iter().enumerate() {
            if i != 0 { writeln!(f)?; }
            write!(f, "[ ")?;
            for (j, point) in layer.iter().enumerate() {
                if j != 0 { write!(f, ",")?; }
                write!(f, "{point}")?;
            }
            write!(f, " ]")?;
        }
        Ok(())
    }
}
