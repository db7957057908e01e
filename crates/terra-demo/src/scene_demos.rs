//! Scene demonstration functions: build, validate, edit and animate.

use glam::Vec3;
use terra_config::Config;
use terra_cubesphere::{CubeSphereMesh, validate_topology};
use terra_planet::{Light, Planet};
use tracing::{info, warn};

/// Fixed simulation step for the light orbit.
const FRAME_SECONDS: f32 = 1.0 / 60.0;

/// Camera used for uniform reporting.
const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);

/// Logs mesh statistics and, if enabled, checks the topology of `sphere`.
pub(crate) fn demonstrate_mesh(name: &str, sphere: &CubeSphereMesh, validate: bool) {
    let mesh = sphere.mesh();
    info!(
        "{name}: {} squares per row, {} vertices, {} triangles, {} index bytes",
        mesh.squares_per_row(),
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.index_bytes().len()
    );

    if validate {
        match validate_topology(mesh) {
            Ok(()) => info!("{name}: topology is a closed, outward-wound manifold"),
            Err(e) => warn!("{name}: topology check failed: {e}"),
        }
    }
}

/// Reports how far the unprojected cube strays from the sphere it is
/// projected onto.
pub(crate) fn demonstrate_projection(planet: &Planet) {
    let sphere = planet.sphere();
    let centre = sphere.position();
    let radius = sphere.radius();

    let (nearest, farthest) = sphere
        .world_positions()
        .iter()
        .map(|p| (*p - centre).length())
        .fold((f32::MAX, 0.0_f32), |(lo, hi), d| (lo.min(d), hi.max(d)));

    info!(
        "Projection (enabled={}): cube spans {:.4}..{:.4} from centre, sphere radius {}",
        sphere.is_projected(),
        nearest,
        farthest,
        radius
    );
}

/// Rebuilds the planet at a new resolution and rejects an invalid one.
pub(crate) fn demonstrate_resolution_change(planet: &mut Planet, config: &Config) {
    let before = planet.sphere().generation();
    let target = config.cubesphere.segments.saturating_add(1);

    let mut edited = config.clone();
    edited.cubesphere.segments = target;
    match planet.apply_config(&edited) {
        Ok(change) => info!(
            "Resolution {} -> {}: rebuilt={}, generation {} -> {}",
            config.cubesphere.segments,
            target,
            change.rebuilt,
            before,
            planet.sphere().generation()
        ),
        Err(e) => warn!("Resolution change to {target} rejected: {e}"),
    }

    if let Err(e) = planet.sphere_mut().set_squares(0) {
        info!(
            "Zero resolution rejected ({e}); still {} squares per row",
            planet.sphere().squares_per_row()
        );
    }

    if let Err(e) = planet.apply_config(config) {
        warn!("Restoring configured resolution failed: {e}");
    }
}

/// Changes the radius and confirms the geometry was not rebuilt.
pub(crate) fn demonstrate_radius_change(planet: &mut Planet) {
    let generation = planet.sphere().generation();
    let original = planet.sphere().radius();

    if let Err(e) = planet.sphere_mut().set_radius(original * 2.0) {
        warn!("Radius change rejected: {e}");
        return;
    }
    info!(
        "Radius {} -> {}: generation unchanged = {}, model scale {:.3}",
        original,
        planet.sphere().radius(),
        planet.sphere().generation() == generation,
        planet.sphere().model().x_axis.x
    );

    if let Err(e) = planet.sphere_mut().set_radius(original) {
        warn!("Restoring radius failed: {e}");
    }
}

/// Steps the light for `frames` frames and reports the final uniforms.
pub(crate) fn demonstrate_light_orbit(planet: &Planet, light: &mut Light, frames: u32) {
    let start = light.position();
    let mut elapsed = 0.0_f32;
    for _ in 0..frames {
        elapsed += FRAME_SECONDS;
        light.update(elapsed);
    }
    info!(
        "Light after {frames} frames ({elapsed:.2}s, orbiting={}): {:?} -> {:?}",
        light.orbit.enabled,
        start,
        light.position()
    );

    let surface = planet.surface_uniform(CAMERA_POSITION, light);
    let screen = planet.screen_uniform(CAMERA_POSITION, light, elapsed);
    info!(
        "Uniforms: sphere {} bytes, surface {} bytes, screen {} bytes, scatter {:?}",
        bytemuck::bytes_of(&planet.sphere().uniform()).len(),
        bytemuck::bytes_of(&surface).len(),
        bytemuck::bytes_of(&screen).len(),
        screen.scatter_coefficients
    );
}
