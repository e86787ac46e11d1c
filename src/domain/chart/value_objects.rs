/// Value Object - Viewport
///
/// Owns the invertible price<->pixel and time<->pixel mappings. Every other
/// component converts pointer coordinates through this mapper exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub start_time: f64,
    pub end_time: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            end_time: 0.0,
            min_price: 0.0,
            max_price: 100.0,
            width: 800,
            height: 600,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn time_range(&self) -> f64 {
        self.end_time - self.start_time
    }

    pub fn price_range(&self) -> f64 {
        self.max_price - self.min_price
    }

    /// Rendering is suspended while the container has no usable area.
    pub fn is_renderable(&self) -> bool {
        self.width > 0 && self.height > 0 && self.time_range() > 0.0 && self.price_range() > 0.0
    }

    /// Recompute the pixel mappings for a new container size. Non-positive
    /// dimensions are kept as-is so `is_renderable` reports the collapse.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Shift the visible window without touching the data underneath.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        let time_delta = self.time_range() * delta_x;
        self.start_time += time_delta;
        self.end_time += time_delta;

        let price_delta = self.price_range() * delta_y;
        self.min_price += price_delta;
        self.max_price += price_delta;
    }

    /// True when the domain point lies inside the plotted data area.
    pub fn contains(&self, time: f64, price: f64) -> bool {
        self.is_renderable()
            && time >= self.start_time
            && time <= self.end_time
            && price >= self.min_price
            && price <= self.max_price
    }

    /// Convert a timestamp to a screen X coordinate
    pub fn time_to_x(&self, timestamp: f64) -> f32 {
        if self.time_range() == 0.0 {
            return 0.0;
        }
        let normalized = (timestamp - self.start_time) / self.time_range();
        (normalized * self.width as f64) as f32
    }

    /// Convert a price to a screen Y coordinate
    pub fn price_to_y(&self, price: f64) -> f32 {
        if self.price_range() == 0.0 {
            return self.height as f32 / 2.0;
        }
        let normalized = (price - self.min_price) / self.price_range();
        (self.height as f64 * (1.0 - normalized)) as f32 // Invert Y
    }

    /// Convert a screen X coordinate back to time
    pub fn x_to_time(&self, x: f32) -> f64 {
        if self.width == 0 {
            return self.start_time;
        }
        let normalized = x as f64 / self.width as f64;
        self.start_time + self.time_range() * normalized
    }

    /// Convert a screen Y coordinate back to price
    pub fn y_to_price(&self, y: f32) -> f64 {
        if self.height == 0 {
            return self.min_price;
        }
        let normalized = 1.0 - (y as f64 / self.height as f64); // invert Y
        self.min_price + self.price_range() * normalized
    }
}
