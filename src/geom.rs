/// Pixel dimensions of a drawing surface, as read from its layout box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Layout boxes report signed offsets; anything negative is treated as empty.
    pub fn from_offsets(width: i32, height: i32) -> Self {
        Self::new(width.max(0) as u32, height.max(0) as u32)
    }

    pub fn w(&self) -> f64 {
        self.width as f64
    }

    pub fn h(&self) -> f64 {
        self.height as f64
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn center(&self) -> Point {
        Point::new(self.w() / 2.0, self.h() / 2.0)
    }

    pub fn min_side(&self) -> f64 {
        self.w().min(self.h())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at `angle` radians on a circle of `radius` around `self`.
    pub fn polar(&self, angle: f64, radius: f64) -> Point {
        Point::new(self.x + angle.cos() * radius, self.y + angle.sin() * radius)
    }
}
