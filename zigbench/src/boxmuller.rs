//! Polar Box-Muller over SHR3, the baseline the Ziggurat is measured against

use zigmt_rs::Shr3;

pub struct BoxMuller {
    rng: Shr3,
    spare: Option<f64>,
}

impl BoxMuller {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: Shr3::new(seed),
            spare: None,
        }
    }

    pub fn gaussian(&mut self, sd: f64) -> f64 {
        if let Some(y2) = self.spare.take() {
            return y2 * sd;
        }
        let mut x1;
        let mut x2;
        let mut w;
        loop {
            x1 = 2.0 * self.rng.uniform() - 1.0;
            x2 = 2.0 * self.rng.uniform() - 1.0;
            w = x1 * x1 + x2 * x2;
            if w < 1.0 && w > 0.0 {
                break;
            }
        }
        w = ((-2.0 * w.ln()) / w).sqrt();
        self.spare = Some(x2 * w);
        x1 * w * sd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_not_nan() {
        let mut bm = BoxMuller::new(42);
        for _ in 0..100 {
            let val = bm.gaussian(1.0);
            assert!(!val.is_nan(), "Gaussian returned NaN!");
            assert!(val.is_finite(), "Gaussian returned Inf!");
        }
    }

    #[test]
    fn test_spare_used() {
        let mut bm = BoxMuller::new(1);
        bm.gaussian(1.0);
        assert!(bm.spare.is_some());
        bm.gaussian(1.0);
        assert!(bm.spare.is_none());
    }
}
