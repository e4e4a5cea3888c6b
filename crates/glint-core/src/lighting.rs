// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The scene's lighting model: one directional light, one point light and a
//! flashlight-style spotlight that mirrors the camera.
//!
//! Each light carries Phong-style ambient/diffuse/specular color triples.
//! Toggling a light off does not skip its uniform upload; instead the color
//! triples are zeroed and the full block is still pushed every frame, so the
//! shader never sees stale data.

use crate::camera::FlyCamera;
use crate::math::{degrees_to_radians, Vec3};

/// Specular exponent shared by all lit surfaces.
pub const MATERIAL_SHININESS: f32 = 32.0;

/// A sun-like light with a uniform direction and no falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// The direction the light travels, pointing into the scene.
    pub direction: Vec3,
    /// Ambient contribution when the ambient flag is set.
    pub ambient: Vec3,
    /// Diffuse contribution.
    pub diffuse: Vec3,
    /// Specular contribution.
    pub specular: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(-0.2, -1.0, -0.3),
            ambient: Vec3::splat(0.5),
            diffuse: Vec3::splat(0.05),
            specular: Vec3::splat(0.2),
        }
    }
}

/// An omnidirectional light with inverse-distance attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position.
    pub position: Vec3,
    /// Ambient contribution.
    pub ambient: Vec3,
    /// Diffuse contribution.
    pub diffuse: Vec3,
    /// Specular contribution.
    pub specular: Vec3,
    /// Constant attenuation coefficient.
    pub constant: f32,
    /// Linear attenuation coefficient.
    pub linear: f32,
    /// Quadratic attenuation coefficient.
    pub quadratic: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(-5.0, 4.0, -5.0),
            ambient: Vec3::ONE,
            diffuse: Vec3::splat(0.1),
            specular: Vec3::splat(0.5),
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

/// A cone-shaped light. Position and direction are taken from the camera at
/// resolve time, which makes it behave like a hand-held flashlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    /// Ambient contribution (zero in this scene, on or off).
    pub ambient: Vec3,
    /// Diffuse contribution.
    pub diffuse: Vec3,
    /// Specular contribution.
    pub specular: Vec3,
    /// Constant attenuation coefficient.
    pub constant: f32,
    /// Linear attenuation coefficient.
    pub linear: f32,
    /// Quadratic attenuation coefficient.
    pub quadratic: f32,
    /// Inner cone half-angle in degrees; full intensity inside it.
    pub cut_off_degrees: f32,
    /// Outer cone half-angle in degrees; no light beyond it.
    pub outer_cut_off_degrees: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            ambient: Vec3::ZERO,
            diffuse: Vec3::ONE,
            specular: Vec3::splat(0.5),
            constant: 0.6,
            linear: 0.9,
            quadratic: 0.032,
            cut_off_degrees: 15.0,
            outer_cut_off_degrees: 30.0,
        }
    }
}

/// The three lights of the scene with their fixed tuning.
///
/// Constructed once at startup; only the on/off toggles (held in
/// [`ProgramState`](crate::state::ProgramState)) change at runtime, never the
/// color or attenuation constants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightRig {
    /// The directional light.
    pub directional: DirectionalLight,
    /// The point light.
    pub point: PointLight,
    /// The camera-mounted spotlight.
    pub spot: SpotLight,
}

/// Runtime on/off state for the rig, read from the program state each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightToggles {
    /// Ambient strength; any non-zero value enables the directional light's
    /// ambient term.
    pub ambient_strength: f32,
    /// Whether the spotlight contributes.
    pub spotlight_on: bool,
    /// Whether the point light contributes.
    pub point_light_on: bool,
}

/// Data for the directional light, formatted for GPU consumption.
///
/// All fields are padded to 16 bytes to satisfy WGSL uniform layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLightUniform {
    /// Direction (xyz), padding (w).
    pub direction: [f32; 4],
    /// Ambient color (rgb), padding (a).
    pub ambient: [f32; 4],
    /// Diffuse color (rgb), padding (a).
    pub diffuse: [f32; 4],
    /// Specular color (rgb), padding (a).
    pub specular: [f32; 4],
}

/// Data for the point light, formatted for GPU consumption.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    /// Position (xyz), padding (w).
    pub position: [f32; 4],
    /// Ambient color (rgb), padding (a).
    pub ambient: [f32; 4],
    /// Diffuse color (rgb), padding (a).
    pub diffuse: [f32; 4],
    /// Specular color (rgb), padding (a).
    pub specular: [f32; 4],
    /// Attenuation: constant (x), linear (y), quadratic (z), padding (w).
    pub attenuation: [f32; 4],
}

/// Data for the spotlight, formatted for GPU consumption.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightUniform {
    /// Position (xyz), padding (w).
    pub position: [f32; 4],
    /// Direction (xyz), padding (w).
    pub direction: [f32; 4],
    /// Ambient color (rgb), padding (a).
    pub ambient: [f32; 4],
    /// Diffuse color (rgb), padding (a).
    pub diffuse: [f32; 4],
    /// Specular color (rgb), padding (a).
    pub specular: [f32; 4],
    /// Attenuation: constant (x), linear (y), quadratic (z), padding (w).
    pub attenuation: [f32; 4],
    /// Cone cosines: inner cutoff (x), outer cutoff (y), padding (zw).
    pub cone: [f32; 4],
}

/// The three resolved light blocks uploaded each frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightBlocks {
    /// The directional light block.
    pub directional: DirectionalLightUniform,
    /// The point light block.
    pub point: PointLightUniform,
    /// The spotlight block.
    pub spot: SpotLightUniform,
}

#[inline]
fn pad(v: Vec3) -> [f32; 4] {
    [v.x, v.y, v.z, 0.0]
}

impl LightRig {
    /// Resolves the rig into GPU-ready blocks for the current frame.
    ///
    /// Disabled lights keep their position/attenuation constants but have
    /// their color triples zeroed; every block is produced unconditionally so
    /// the renderer uploads all three regardless of toggle state.
    pub fn resolve(&self, toggles: LightToggles, camera: &FlyCamera) -> LightBlocks {
        let ambient_on = toggles.ambient_strength != 0.0;
        let directional = DirectionalLightUniform {
            direction: pad(self.directional.direction),
            ambient: pad(if ambient_on {
                self.directional.ambient
            } else {
                Vec3::ZERO
            }),
            diffuse: pad(self.directional.diffuse),
            specular: pad(self.directional.specular),
        };

        let (p_ambient, p_diffuse, p_specular) = if toggles.point_light_on {
            (self.point.ambient, self.point.diffuse, self.point.specular)
        } else {
            (Vec3::ZERO, Vec3::ZERO, Vec3::ZERO)
        };
        let point = PointLightUniform {
            position: pad(self.point.position),
            ambient: pad(p_ambient),
            diffuse: pad(p_diffuse),
            specular: pad(p_specular),
            attenuation: [self.point.constant, self.point.linear, self.point.quadratic, 0.0],
        };

        let (s_diffuse, s_specular) = if toggles.spotlight_on {
            (self.spot.diffuse, self.spot.specular)
        } else {
            (Vec3::ZERO, Vec3::ZERO)
        };
        let spot = SpotLightUniform {
            position: pad(camera.position),
            direction: pad(camera.front),
            ambient: pad(self.spot.ambient),
            diffuse: pad(s_diffuse),
            specular: pad(s_specular),
            attenuation: [self.spot.constant, self.spot.linear, self.spot.quadratic, 0.0],
            cone: [
                degrees_to_radians(self.spot.cut_off_degrees).cos(),
                degrees_to_radians(self.spot.outer_cut_off_degrees).cos(),
                0.0,
                0.0,
            ],
        };

        LightBlocks {
            directional,
            point,
            spot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn all_on() -> LightToggles {
        LightToggles {
            ambient_strength: 1.0,
            spotlight_on: true,
            point_light_on: true,
        }
    }

    #[test]
    fn spotlight_mirrors_camera_pose() {
        let rig = LightRig::default();
        let mut camera = FlyCamera::default();
        camera.process_mouse_move(40.0, -25.0);
        let blocks = rig.resolve(all_on(), &camera);
        assert_eq!(blocks.spot.position, pad(camera.position));
        assert_eq!(blocks.spot.direction, pad(camera.front));
    }

    #[test]
    fn disabled_point_light_zeroes_colors_but_keeps_attenuation() {
        let rig = LightRig::default();
        let camera = FlyCamera::default();
        let toggles = LightToggles {
            point_light_on: false,
            ..all_on()
        };
        let blocks = rig.resolve(toggles, &camera);
        assert_eq!(blocks.point.ambient, [0.0; 4]);
        assert_eq!(blocks.point.diffuse, [0.0; 4]);
        assert_eq!(blocks.point.specular, [0.0; 4]);
        assert_eq!(blocks.point.attenuation, [1.0, 0.09, 0.032, 0.0]);
        // Position survives so re-enabling needs no re-upload of constants.
        assert_eq!(blocks.point.position, [-5.0, 4.0, -5.0, 0.0]);
    }

    #[test]
    fn disabled_spotlight_keeps_cone_and_pose() {
        let rig = LightRig::default();
        let camera = FlyCamera::default();
        let toggles = LightToggles {
            spotlight_on: false,
            ..all_on()
        };
        let blocks = rig.resolve(toggles, &camera);
        assert_eq!(blocks.spot.diffuse, [0.0; 4]);
        assert_eq!(blocks.spot.specular, [0.0; 4]);
        assert_relative_eq!(blocks.spot.cone[0], 15.0_f32.to_radians().cos());
        assert_relative_eq!(blocks.spot.cone[1], 30.0_f32.to_radians().cos());
        assert_eq!(blocks.spot.position, pad(camera.position));
    }

    #[test]
    fn ambient_flag_gates_only_the_directional_ambient_term() {
        let rig = LightRig::default();
        let camera = FlyCamera::default();
        let off = rig.resolve(
            LightToggles {
                ambient_strength: 0.0,
                ..all_on()
            },
            &camera,
        );
        assert_eq!(off.directional.ambient, [0.0; 4]);
        assert_eq!(off.directional.diffuse, pad(Vec3::splat(0.05)));

        let on = rig.resolve(all_on(), &camera);
        assert_eq!(on.directional.ambient, pad(Vec3::splat(0.5)));
    }

    #[test]
    fn spot_cone_is_narrower_than_outer_cone() {
        let spot = SpotLight::default();
        assert!(spot.cut_off_degrees < spot.outer_cut_off_degrees);
    }
}
