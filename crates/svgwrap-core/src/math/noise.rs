//! Seedable simplex and Perlin noise.
//!
//! Based on Stefan Gustavson's reference implementation, using Ken Perlin's
//! permutation table and the twelve edge gradients of a cube.

/// Ken Perlin's reference permutation of 0..=255.
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Gradients pointing to the midpoints of the edges of a cube.
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Skewing and unskewing factors for two and three dimensions.
const F2: f64 = 0.366_025_403_784_438_6; // 0.5 * (sqrt(3) - 1)
const G2: f64 = 0.211_324_865_405_187_1; // (3 - sqrt(3)) / 6
const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Seeded noise generator. All outputs lie in `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct Noise {
    seed: f64,
    perm: [usize; 512],
    grad: [[f64; 3]; 512],
}

impl Default for Noise {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Noise {
    pub fn new(seed: f64) -> Self {
        let mut noise = Self {
            seed,
            perm: [0; 512],
            grad: [[0.0; 3]; 512],
        };
        noise.seed(seed);
        noise
    }

    /// Reseed the generator. Seeds in `(0, 1)` are scaled by 65536; the rest is floored.
    pub fn seed(&mut self, seed: f64) {
        self.seed = seed;
        let scaled = if seed > 0.0 && seed < 1.0 {
            seed * 65536.0
        } else {
            seed
        };
        let mut bits = scaled.floor() as i64 as i32;
        if bits < 256 {
            bits |= bits << 8;
        }
        let bits = bits as u32;

        for i in 0..256 {
            let mask = if (i & 1) == 1 { bits & 255 } else { (bits >> 8) & 255 };
            let value = (PERMUTATION[i] as u32 ^ mask) as usize;
            self.perm[i] = value;
            self.perm[i + 256] = value;
            self.grad[i] = GRAD3[value % 12];
            self.grad[i + 256] = GRAD3[value % 12];
        }
        log::debug!("Seeded noise with {seed}");
    }

    /// The seed last passed to [`Noise::new`] or [`Noise::seed`].
    pub fn current_seed(&self) -> f64 {
        self.seed
    }

    fn dot2(&self, index: usize, x: f64, y: f64) -> f64 {
        let g = self.grad[index];
        g[0] * x + g[1] * y
    }

    fn dot3(&self, index: usize, x: f64, y: f64, z: f64) -> f64 {
        let g = self.grad[index];
        g[0] * x + g[1] * y + g[2] * z
    }

    /// 2D simplex noise.
    pub fn simplex2(&self, xin: f64, yin: f64) -> f64 {
        // Skew the input space to find the simplex cell.
        let s = (xin + yin) * F2;
        let i = (xin + s).floor();
        let j = (yin + s).floor();
        let t = (i + j) * G2;
        let x0 = xin - i + t;
        let y0 = yin - j + t;

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let i = (i as i64 & 255) as usize;
        let j = (j as i64 & 255) as usize;
        let perm = &self.perm;
        let gi0 = i + perm[j];
        let gi1 = i + i1 + perm[j + j1];
        let gi2 = i + 1 + perm[j + 1];

        let corner = |gi: usize, x: f64, y: f64| {
            let t = 0.5 - x * x - y * y;
            if t < 0.0 {
                0.0
            } else {
                let t = t * t;
                t * t * self.dot2(gi, x, y)
            }
        };

        70.0 * (corner(gi0, x0, y0) + corner(gi1, x1, y1) + corner(gi2, x2, y2))
    }

    /// 3D simplex noise.
    pub fn simplex3(&self, xin: f64, yin: f64, zin: f64) -> f64 {
        let s = (xin + yin + zin) * F3;
        let i = (xin + s).floor();
        let j = (yin + s).floor();
        let k = (zin + s).floor();
        let t = (i + j + k) * G3;
        let x0 = xin - i + t;
        let y0 = yin - j + t;
        let z0 = zin - k + t;

        // Offsets of the second and third corners of the simplex.
        let ((i1, j1, k1), (i2, j2, k2)) = if x0 >= y0 {
            if y0 >= z0 {
                ((1, 0, 0), (1, 1, 0))
            } else if x0 >= z0 {
                ((1, 0, 0), (1, 0, 1))
            } else {
                ((0, 0, 1), (1, 0, 1))
            }
        } else if y0 < z0 {
            ((0, 0, 1), (0, 1, 1))
        } else if x0 < z0 {
            ((0, 1, 0), (0, 1, 1))
        } else {
            ((0, 1, 0), (1, 1, 0))
        };

        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let i = (i as i64 & 255) as usize;
        let j = (j as i64 & 255) as usize;
        let k = (k as i64 & 255) as usize;
        let perm = &self.perm;
        let gi0 = i + perm[j + perm[k]];
        let gi1 = i + i1 + perm[j + j1 + perm[k + k1]];
        let gi2 = i + i2 + perm[j + j2 + perm[k + k2]];
        let gi3 = i + 1 + perm[j + 1 + perm[k + 1]];

        let corner = |gi: usize, x: f64, y: f64, z: f64| {
            let t = 0.6 - x * x - y * y - z * z;
            if t < 0.0 {
                0.0
            } else {
                let t = t * t;
                t * t * self.dot3(gi, x, y, z)
            }
        };

        32.0 * (corner(gi0, x0, y0, z0)
            + corner(gi1, x1, y1, z1)
            + corner(gi2, x2, y2, z2)
            + corner(gi3, x3, y3, z3))
    }

    /// 2D Perlin noise. Zero on integer lattice points.
    pub fn perlin2(&self, x: f64, y: f64) -> f64 {
        let cell_x = x.floor();
        let cell_y = y.floor();
        let x = x - cell_x;
        let y = y - cell_y;
        let cx = (cell_x as i64 & 255) as usize;
        let cy = (cell_y as i64 & 255) as usize;
        let perm = &self.perm;

        let n00 = self.dot2(cx + perm[cy], x, y);
        let n01 = self.dot2(cx + perm[cy + 1], x, y - 1.0);
        let n10 = self.dot2(cx + 1 + perm[cy], x - 1.0, y);
        let n11 = self.dot2(cx + 1 + perm[cy + 1], x - 1.0, y - 1.0);

        let u = fade(x);
        lerp(lerp(n00, n10, u), lerp(n01, n11, u), fade(y))
    }

    /// 3D Perlin noise. Zero on integer lattice points.
    pub fn perlin3(&self, x: f64, y: f64, z: f64) -> f64 {
        let cell_x = x.floor();
        let cell_y = y.floor();
        let cell_z = z.floor();
        let x = x - cell_x;
        let y = y - cell_y;
        let z = z - cell_z;
        let cx = (cell_x as i64 & 255) as usize;
        let cy = (cell_y as i64 & 255) as usize;
        let cz = (cell_z as i64 & 255) as usize;
        let perm = &self.perm;

        let n000 = self.dot3(cx + perm[cy + perm[cz]], x, y, z);
        let n001 = self.dot3(cx + perm[cy + perm[cz + 1]], x, y, z - 1.0);
        let n010 = self.dot3(cx + perm[cy + 1 + perm[cz]], x, y - 1.0, z);
        let n011 = self.dot3(cx + perm[cy + 1 + perm[cz + 1]], x, y - 1.0, z - 1.0);
        let n100 = self.dot3(cx + 1 + perm[cy + perm[cz]], x - 1.0, y, z);
        let n101 = self.dot3(cx + 1 + perm[cy + perm[cz + 1]], x - 1.0, y, z - 1.0);
        let n110 = self.dot3(cx + 1 + perm[cy + 1 + perm[cz]], x - 1.0, y - 1.0, z);
        let n111 = self.dot3(cx + 1 + perm[cy + 1 + perm[cz + 1]], x - 1.0, y - 1.0, z - 1.0);

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);
        lerp(
            lerp(lerp(n000, n100, u), lerp(n001, n101, u), w),
            lerp(lerp(n010, n110, u), lerp(n011, n111, u), w),
            v,
        )
    }
}
