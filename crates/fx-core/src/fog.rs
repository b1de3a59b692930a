use crate::color::Rgb;

/// Depth fog blended toward a flat color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fog {
    /// `1 - exp(-(density * depth)^2)`
    Exp2 { color: Rgb, density: f32 },
    /// Smoothstep between `near` and `far`.
    Linear { color: Rgb, near: f32, far: f32 },
}

impl Fog {
    pub fn exp2(hex: u32, density: f32) -> Self {
        Fog::Exp2 {
            color: Rgb::from_hex(hex),
            density,
        }
    }

    pub fn linear(hex: u32, near: f32, far: f32) -> Self {
        Fog::Linear {
            color: Rgb::from_hex(hex),
            near,
            far,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Fog::Exp2 { color, .. } | Fog::Linear { color, .. } => *color,
        }
    }

    /// Blend weight toward the fog color at a view-space depth.
    pub fn factor(&self, depth: f32) -> f32 {
        match *self {
            Fog::Exp2 { density, .. } => {
                let d = density * depth;
                (1.0 - (-d * d).exp()).clamp(0.0, 1.0)
            }
            Fog::Linear { near, far, .. } => smoothstep(near, far, depth),
        }
    }

    /// Packed as `[mode, a, b, 0]` for the shader: mode 1 = exp2 (a = density),
    /// mode 2 = linear (a = near, b = far).
    pub fn shader_params(fog: Option<&Fog>) -> [f32; 4] {
        match fog {
            None => [0.0; 4],
            Some(Fog::Exp2 { density, .. }) => [1.0, *density, 0.0, 0.0],
            Some(Fog::Linear { near, far, .. }) => [2.0, *near, *far, 0.0],
        }
    }
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
