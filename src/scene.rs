//! Pose arithmetic for the decorative background. Angles are radians,
//! time is seconds since mount.

use std::f64::consts::FRAC_PI_2;

pub const AUTO_ROTATE_SPEED: f64 = 0.2;
/// The orbit is pinned to the horizon.
pub const ORBIT_POLAR_ANGLE: f64 = FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeshPose {
    pub rot_x: f64,
    pub rot_y: f64,
    pub offset_y: f64,
}

impl MeshPose {
    /// CSS transform for a mesh drawn at `scale` pixels per scene unit.
    pub fn css_transform(&self, scale: f64) -> String {
        format!(
            "translateY({:.2}px) rotateX({:.4}rad) rotateY({:.4}rad)",
            self.offset_y * scale,
            self.rot_x,
            self.rot_y
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScenePose {
    pub cube: MeshPose,
    pub sphere: MeshPose,
    pub orbit_azimuth: f64,
}

impl ScenePose {
    pub fn at(elapsed: f64) -> Self {
        Self {
            cube: MeshPose {
                rot_x: elapsed * 0.2,
                rot_y: elapsed * 0.3,
                offset_y: (elapsed * 0.5).sin() * 0.2,
            },
            sphere: MeshPose {
                rot_x: elapsed * 0.1,
                rot_y: elapsed * 0.2,
                offset_y: 0.0,
            },
            orbit_azimuth: elapsed * AUTO_ROTATE_SPEED,
        }
    }

    pub fn orbit_css(&self) -> String {
        format!(
            "rotateX({:.4}rad) rotateY({:.4}rad)",
            ORBIT_POLAR_ANGLE - FRAC_PI_2,
            self.orbit_azimuth
        )
    }
}

/// Ones and zeros for the hero's binary strip. Deterministic so the server
/// render and the hydrated page agree.
pub fn binary_line(len: usize, seed: u32) -> Vec<bool> {
    let mut x = seed.max(1);
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x & 1 == 1
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_at_zero() {
        assert_eq!(ScenePose::at(0.0), ScenePose::default());
    }

    #[test]
    fn test_pose_rates() {
        let pose = ScenePose::at(10.0);
        assert!((pose.cube.rot_x - 2.0).abs() < 1e-9);
        assert!((pose.cube.rot_y - 3.0).abs() < 1e-9);
        assert!((pose.sphere.rot_x - 1.0).abs() < 1e-9);
        assert!((pose.sphere.rot_y - 2.0).abs() < 1e-9);
        assert!((pose.orbit_azimuth - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_cube_bob_is_bounded() {
        for step in 0..1000 {
            let pose = ScenePose::at(step as f64 * 0.37);
            assert!(pose.cube.offset_y.abs() <= 0.2 + 1e-12);
            assert_eq!(pose.sphere.offset_y, 0.0);
        }
    }

    #[test]
    fn test_binary_line() {
        let line = binary_line(40, 7);
        assert_eq!(line.len(), 40);
        assert_eq!(line, binary_line(40, 7));
        assert!(line.iter().any(|b| *b));
        assert!(line.iter().any(|b| !*b));
        assert_eq!(binary_line(8, 0), binary_line(8, 1));
    }

    #[test]
    fn test_css_transform() {
        let pose = MeshPose {
            rot_x: 1.0,
            rot_y: 0.5,
            offset_y: 0.1,
        };
        assert_eq!(
            pose.css_transform(100.0),
            "translateY(10.00px) rotateX(1.0000rad) rotateY(0.5000rad)"
        );
        assert_eq!(
            ScenePose::at(5.0).orbit_css(),
            "rotateX(0.0000rad) rotateY(1.0000rad)"
        );
    }
}
