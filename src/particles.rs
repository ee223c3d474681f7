use crate::config::PARTICLE_COUNT;

pub const PARTICLE_SPREAD: f64 = 12.0;
pub const PARTICLE_COLOR: &str = "#60a5fa";
pub const PARTICLE_SIZE: f64 = 0.06;
pub const PARTICLE_OPACITY: f64 = 0.85;
const ROTATION_STEP_X: f64 = 0.0004;
const ROTATION_STEP_Y: f64 = 0.0008;
const MAX_PIXEL_RATIO: f64 = 2.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Where a point lands on screen, plus its on-screen size in pixels.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Camera {
    pub fov_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub distance: f64,
}

impl Camera {
    pub fn for_viewport(width: f64, height: f64) -> Self {
        Self {
            fov_degrees: 75.0,
            aspect: aspect_ratio(width, height),
            near: 0.1,
            far: 1_000.0,
            distance: 8.0,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.aspect = aspect_ratio(width, height);
    }

    /// Perspective projection for a camera on the +Z axis looking at the origin.
    pub fn project(&self, point: Point3, width: f64, height: f64) -> Option<Projected> {
        let depth = self.distance - point.z;
        if depth <= self.near || depth >= self.far {
            return None;
        }

        let focal = 1.0 / (self.fov_degrees.to_radians() / 2.0).tan();
        let ndc_x = point.x * focal / self.aspect / depth;
        let ndc_y = point.y * focal / depth;
        if !(-1.0..=1.0).contains(&ndc_x) || !(-1.0..=1.0).contains(&ndc_y) {
            return None;
        }

        Some(Projected {
            x: (ndc_x + 1.0) / 2.0 * width,
            y: (1.0 - ndc_y) / 2.0 * height,
            size: (PARTICLE_SIZE * focal / depth * height / 2.0).max(1.0),
        })
    }
}

fn aspect_ratio(width: f64, height: f64) -> f64 {
    if width > 0.0 && height > 0.0 {
        width / height
    } else {
        1.0
    }
}

pub fn capped_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct PointCloud {
    points: Vec<Point3>,
    rotation_x: f64,
    rotation_y: f64,
}

impl PointCloud {
    /// `random` must yield values in `[0, 1)`.
    pub fn random(mut random: impl FnMut() -> f64) -> Self {
        let mut coordinate = move || (random() - 0.5) * PARTICLE_SPREAD;
        let points = (0..PARTICLE_COUNT)
            .map(|_| Point3 {
                x: coordinate(),
                y: coordinate(),
                z: coordinate(),
            })
            .collect();

        Self {
            points,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn rotation(&self) -> (f64, f64) {
        (self.rotation_x, self.rotation_y)
    }

    pub fn advance(&mut self) {
        self.rotation_y += ROTATION_STEP_Y;
        self.rotation_x += ROTATION_STEP_X;
    }

    /// Points after applying the current rotation (Y first, then X).
    pub fn rotated(&self) -> impl Iterator<Item = Point3> + '_ {
        let (sin_x, cos_x) = self.rotation_x.sin_cos();
        let (sin_y, cos_y) = self.rotation_y.sin_cos();

        self.points.iter().map(move |point| {
            let x = point.x * cos_y + point.z * sin_y;
            let z = -point.x * sin_y + point.z * cos_y;
            let y = point.y * cos_x - z * sin_x;
            let z = point.y * sin_x + z * cos_x;
            Point3 { x, y, z }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut index = 0;
        move || {
            let value = values[index % values.len()];
            index += 1;
            value
        }
    }

    #[test]
    fn cloud_has_fixed_size_within_cube() {
        let cloud = PointCloud::random(sequence(&[0.0, 0.25, 0.5, 0.999]));
        let half = PARTICLE_SPREAD / 2.0;

        assert_eq!(cloud.len(), 400);
        assert!(cloud
            .rotated()
            .all(|p| [p.x, p.y, p.z].iter().all(|c| (-half..half).contains(c))));
    }

    #[test]
    fn advance_applies_constant_increments() {
        let mut cloud = PointCloud::random(sequence(&[0.5]));
        cloud.advance();
        cloud.advance();

        let (x, y) = cloud.rotation();
        assert!((x - 0.0008).abs() < 1e-12);
        assert!((y - 0.0016).abs() < 1e-12);
    }

    #[test]
    fn rotation_preserves_distance_from_origin() {
        let mut cloud = PointCloud::random(sequence(&[0.1, 0.7, 0.9, 0.3]));
        let before: Vec<f64> = cloud
            .rotated()
            .map(|p| (p.x * p.x + p.y * p.y + p.z * p.z).sqrt())
            .collect();
        for _ in 0..500 {
            cloud.advance();
        }
        let after: Vec<f64> = cloud
            .rotated()
            .map(|p| (p.x * p.x + p.y * p.y + p.z * p.z).sqrt())
            .collect();

        assert!(before
            .iter()
            .zip(&after)
            .all(|(a, b)| (a - b).abs() < 1e-9));
    }

    #[test]
    fn origin_projects_to_viewport_center() {
        let camera = Camera::for_viewport(800.0, 600.0);
        let projected = camera
            .project(Point3 { x: 0.0, y: 0.0, z: 0.0 }, 800.0, 600.0)
            .expect("origin is in front of the camera");

        assert!((projected.x - 400.0).abs() < 1e-9);
        assert!((projected.y - 300.0).abs() < 1e-9);
        assert!(projected.size >= 1.0);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let camera = Camera::for_viewport(800.0, 600.0);

        assert!(camera
            .project(Point3 { x: 0.0, y: 0.0, z: 9.0 }, 800.0, 600.0)
            .is_none());
    }

    #[test]
    fn resize_updates_aspect_and_tolerates_zero_height() {
        let mut camera = Camera::for_viewport(800.0, 400.0);
        assert_eq!(camera.aspect, 2.0);

        camera.resize(500.0, 0.0);
        assert_eq!(camera.aspect, 1.0);
    }

    #[test]
    fn pixel_ratio_is_capped() {
        assert_eq!(capped_pixel_ratio(3.0), 2.0);
        assert_eq!(capped_pixel_ratio(1.5), 1.5);
        assert_eq!(capped_pixel_ratio(f64::NAN), 1.0);
    }
}
