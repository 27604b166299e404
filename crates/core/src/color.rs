/// Linear RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const GRAY: Rgba = Rgba::new(0.5, 0.5, 0.5, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Interpret a stored feature vector as a color.
    ///
    /// | channels | color                      |
    /// |----------|----------------------------|
    /// | 0        | opaque mid-gray            |
    /// | 1        | gray level                 |
    /// | 2        | gray level + alpha         |
    /// | 3        | RGB, opaque                |
    /// | 4+       | first four channels as RGBA |
    ///
    /// Every channel is clamped to `[0, 1]`; NaN maps to 0.
    pub fn from_feature(feature: &[f32]) -> Self {
        let c = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        match *feature {
            [] => Self::GRAY,
            [v] => Self::rgb(c(v), c(v), c(v)),
            [v, a] => Self::new(c(v), c(v), c(v), c(a)),
            [r, g, b] => Self::rgb(c(r), c(g), c(b)),
            [r, g, b, a, ..] => Self::new(c(r), c(g), c(b), c(a)),
        }
    }

    /// An RGB or RGBA literal; opaque when alpha is missing.
    pub fn from_components(components: &[f32]) -> Option<Self> {
        match *components {
            [r, g, b] => Some(Self::rgb(r, g, b)),
            [r, g, b, a] => Some(Self::new(r, g, b, a)),
            _ => None,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// 8-bit quantisation, rounding to nearest.
    pub fn to_u8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::GRAY
    }
}

impl From<[f32; 3]> for Rgba {
    fn from(c: [f32; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}
