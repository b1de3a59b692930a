use rand::Rng;
use smallvec::SmallVec;

/// Linear-ish RGB triple in `[0, 1]` per channel.
///
/// Channels are taken straight from the authored hex value divided by 255,
/// which is what the page's previous renderer did with its color attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { r, g, b }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Small set of colors a generator picks from uniformly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    colors: SmallVec<[Rgb; 4]>,
}

impl Palette {
    pub fn new(colors: &[Rgb]) -> Self {
        Self {
            colors: colors.iter().copied().collect(),
        }
    }

    pub fn from_hex(hexes: &[u32]) -> Self {
        Self {
            colors: hexes.iter().map(|h| Rgb::from_hex(*h)).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Uniform pick; `None` for an empty palette.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Rgb> {
        match self.colors.len() {
            0 => None,
            1 => Some(self.colors[0]),
            n => Some(self.colors[rng.gen_range(0..n)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hex_channels() {
        let c = Rgb::from_hex(0x06b6d4);
        assert!((c.r - 6.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 182.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 212.0 / 255.0).abs() < 1e-6);
        assert_eq!(Rgb::from_hex(0xffffff), Rgb::WHITE);
    }

    #[test]
    fn pick_stays_in_palette() {
        let p = Palette::from_hex(&[0x06b6d4, 0xec4899]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let c = p.pick(&mut rng).unwrap();
            assert!(p.colors().contains(&c));
        }
        assert!(Palette::empty().pick(&mut rng).is_none());
    }
}
