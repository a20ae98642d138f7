use glam::{Mat4, Vec3};

use crate::core::{Button, Controller};

pub const MIN_DISTANCE: f32 = 0.5;
pub const MAX_DISTANCE: f32 = 20.0;
/// Elevation limit (89°) that keeps the look-at basis away from the poles
pub const MAX_ELEVATION: f32 = 89.0 * std::f32::consts::PI / 180.0;

pub const DEFAULT_ROTATION_SPEED: f32 = 2.0;
pub const DEFAULT_ZOOM_SPEED: f32 = 5.0;

/// Held-key state for one frame of orbit control
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrbitInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub tilt_up: bool,
    pub tilt_down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
}

impl OrbitInput {
    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    pub const fn azimuth_axis(&self) -> f32 {
        Self::to_direction(self.rotate_right, self.rotate_left)
    }

    pub const fn elevation_axis(&self) -> f32 {
        Self::to_direction(self.tilt_up, self.tilt_down)
    }

    /// +1 moves the eye towards the target
    pub const fn zoom_axis(&self) -> f32 {
        Self::to_direction(self.zoom_in, self.zoom_out)
    }

    /// Read the orbit keys: A/D and Left/Right rotate, Q/E and Up/Down tilt,
    /// W/S zoom
    pub fn from_controller(controller: &dyn Controller) -> Self {
        Self {
            rotate_left: controller.any_down(&[Button::KeyA, Button::ArrowLeft]),
            rotate_right: controller.any_down(&[Button::KeyD, Button::ArrowRight]),
            tilt_up: controller.any_down(&[Button::KeyQ, Button::ArrowUp]),
            tilt_down: controller.any_down(&[Button::KeyE, Button::ArrowDown]),
            zoom_in: controller.is_down(Button::KeyW),
            zoom_out: controller.is_down(Button::KeyS),
        }
    }
}

/// Angular and radial rates applied while a key is held
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSpeeds {
    /// Radians per second
    pub rotation: f32,
    /// World units per second
    pub zoom: f32,
}

impl Default for OrbitSpeeds {
    fn default() -> Self {
        Self {
            rotation: DEFAULT_ROTATION_SPEED,
            zoom: DEFAULT_ZOOM_SPEED,
        }
    }
}

/// Camera placement on a sphere around a fixed look-at target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub distance: f32,
    pub azimuth: f32,
    pub elevation: f32,
    pub target: Vec3,
}

impl OrbitState {
    /// Build a state with distance and elevation brought inside their limits
    pub fn new(distance: f32, azimuth: f32, elevation: f32, target: Vec3) -> Self {
        Self {
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            azimuth,
            elevation: elevation.clamp(-MAX_ELEVATION, MAX_ELEVATION),
            target,
        }
    }

    /// Apply one frame of input. Azimuth wraps through sin/cos and is left
    /// unbounded.
    pub fn advance(self, input: &OrbitInput, dt: f32, speeds: &OrbitSpeeds) -> Self {
        let rotation_step = speeds.rotation * dt;
        let zoom_step = speeds.zoom * dt;

        Self {
            distance: (self.distance - input.zoom_axis() * zoom_step)
                .clamp(MIN_DISTANCE, MAX_DISTANCE),
            azimuth: self.azimuth + input.azimuth_axis() * rotation_step,
            elevation: (self.elevation + input.elevation_axis() * rotation_step)
                .clamp(-MAX_ELEVATION, MAX_ELEVATION),
            target: self.target,
        }
    }

    pub fn eye(&self) -> Vec3 {
        position(self.distance, self.azimuth, self.elevation, self.target)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }
}

/// Spherical to Cartesian (Y up), offset from `target`
pub fn position(distance: f32, azimuth: f32, elevation: f32, target: Vec3) -> Vec3 {
    let x = distance * elevation.cos() * azimuth.sin();
    let y = distance * elevation.sin();
    let z = distance * elevation.cos() * azimuth.cos();

    target + Vec3::new(x, y, z)
}

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(fov_y: f32, width: u32, height: u32, near: f32, far: f32) -> Self {
        let mut projection = Self {
            fov_y,
            aspect: 1.0,
            near,
            far,
        };
        projection.set_viewport(width, height);
        projection
    }

    /// Track the drawable size. Minimised windows report 0x0 and keep the
    /// previous aspect.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(45f32.to_radians(), 800, 600, 0.1, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn held(f: impl FnOnce(&mut OrbitInput)) -> OrbitInput {
        let mut input = OrbitInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn test_position_on_positive_z_axis() {
        let eye = position(5.0, 0.0, 0.0, Vec3::ZERO);
        assert!((eye - Vec3::new(0.0, 0.0, 5.0)).length() < EPS);
    }

    #[test]
    fn test_position_quarter_turn() {
        let eye = position(2.0, std::f32::consts::FRAC_PI_2, 0.0, Vec3::ZERO);
        assert!((eye - Vec3::new(2.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_position_offsets_by_target() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        let eye = position(5.0, 0.0, 0.0, target);
        assert!((eye - Vec3::new(1.0, 2.0, 8.0)).length() < EPS);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let input = held(|i| {
            i.rotate_left = true;
            i.rotate_right = true;
        });
        assert_eq!(input.azimuth_axis(), 0.0);
    }

    #[test]
    fn test_advance_rotates_azimuth() {
        let state = OrbitState::new(5.0, 0.0, 0.0, Vec3::ZERO);
        let speeds = OrbitSpeeds::default();

        let right = state.advance(&held(|i| i.rotate_right = true), 0.5, &speeds);
        assert!((right.azimuth - 1.0).abs() < EPS);

        let left = state.advance(&held(|i| i.rotate_left = true), 0.5, &speeds);
        assert!((left.azimuth + 1.0).abs() < EPS);
    }

    #[test]
    fn test_zoom_in_moves_closer() {
        let state = OrbitState::new(5.0, 0.0, 0.0, Vec3::ZERO);
        let next = state.advance(&held(|i| i.zoom_in = true), 0.1, &OrbitSpeeds::default());
        assert!((next.distance - 4.5).abs() < EPS);
    }

    #[test]
    fn test_no_input_is_identity() {
        let state = OrbitState::new(3.0, 0.4, -0.2, Vec3::X);
        let next = state.advance(&OrbitInput::default(), 1.0, &OrbitSpeeds::default());
        assert_eq!(state, next);
    }

    #[test]
    fn test_new_clamps_out_of_range_values() {
        let state = OrbitState::new(100.0, 0.0, 3.0, Vec3::ZERO);
        assert_eq!(state.distance, MAX_DISTANCE);
        assert_eq!(state.elevation, MAX_ELEVATION);
    }

    #[test]
    fn test_view_matrix_maps_target_in_front() {
        let state = OrbitState::new(5.0, 0.7, 0.3, Vec3::new(1.0, 0.0, -1.0));
        let in_view = state.view_matrix().transform_point3(state.target);
        assert!(in_view.x.abs() < 1e-4);
        assert!(in_view.y.abs() < 1e-4);
        assert!((in_view.z + 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_projection_tracks_viewport() {
        let mut projection = Projection::default();
        assert!((projection.aspect - 800.0 / 600.0).abs() < EPS);

        projection.set_viewport(1920, 1080);
        assert!((projection.aspect - 1920.0 / 1080.0).abs() < EPS);

        projection.set_viewport(0, 0);
        assert!((projection.aspect - 1920.0 / 1080.0).abs() < EPS);
    }
}
