//! CLI command implementations.

use glam::{Mat4, Vec3};
use tracing::info;

use drape_debug::StateSnapshot;
use drape_mesh::GridMesh;
use drape_render::{JsonFrameExporter, RenderFrame, RenderableMesh, Renderer};
use drape_solver::ConstraintGraph;
use drape_surface::SimulatedSurface;

use crate::params::SimulationParams;

/// Sideways speed of the `--wave` anchor-row oscillation.
const WAVE_AMPLITUDE: f32 = 0.5;
/// Angular frequency of the `--wave` oscillation (rad per time unit).
const WAVE_FREQUENCY: f32 = 2.0;

/// Run a headless simulation.
pub fn simulate(
    config_path: Option<&str>,
    frames_out: Option<&str>,
    snapshot_out: Option<&str>,
    wave: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = match config_path {
        Some(path) => SimulationParams::from_toml_file(path)?,
        None => SimulationParams::default(),
    };

    let mut surface = SimulatedSurface::with_config(
        params.width,
        params.length,
        params.resolution,
        params.particle_mass,
        params.solver.clone(),
    )?;
    info!(
        particles = surface.vertex_count(),
        triangles = surface.triangle_count(),
        constraints = surface.solver().graph().len(),
        steps = params.steps,
        "simulation start"
    );

    let mut exporter = frames_out.map(JsonFrameExporter::new);
    if let Some(ref mut exp) = exporter {
        exp.init(&surface)?;
    }

    let gravity = Vec3::from_array(params.gravity);
    let anchor_row = surface.width();
    let mut sim_time = 0.0f64;

    for step in 0..params.steps {
        if wave {
            // Rigid sideways drift of the anchored row; the transform
            // applicator keeps it from reading as velocity.
            let t = step as f32 * params.dt;
            let dx = WAVE_AMPLITUDE * (WAVE_FREQUENCY * t).cos() * params.dt;
            let shift = Mat4::from_translation(Vec3::new(dx, 0.0, 0.0));
            surface.apply_transform_range(0, anchor_row, &shift)?;
        }

        let stats = surface.step(params.dt, gravity)?;
        sim_time += params.dt as f64;

        if let Some(ref mut exp) = exporter {
            exp.submit_frame(&RenderFrame::capture(step, &surface))?;
        }

        if step % 60 == 0 {
            let anchor = surface.reference_position();
            info!(
                step,
                kinetic_energy = surface.state().kinetic_energy(),
                max_correction = stats.max_correction,
                anchor_x = anchor.x,
                anchor_y = anchor.y,
                "progress"
            );
        }
    }

    info!(
        kinetic_energy = surface.state().kinetic_energy(),
        sim_time, "simulation complete"
    );

    if let Some(ref mut exp) = exporter {
        exp.finalize()?;
        info!(frames = exp.frame_count(), "frames written");
    }

    if let Some(path) = snapshot_out {
        let snapshot = StateSnapshot::from_state(params.steps, sim_time, surface.state());
        std::fs::write(path, snapshot.to_bytes()?)?;
        info!(path, "snapshot written");
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(path)?;
    let snapshot = StateSnapshot::from_bytes(&data)?;

    println!("drape snapshot");
    println!("──────────────");
    println!("Timestep:   {}", snapshot.timestep);
    println!("Sim time:   {:.4}", snapshot.sim_time);
    println!("Particles:  {}", snapshot.particle_count);

    if let Some((min_y, max_y)) = snapshot.y_range() {
        println!("Y range:    [{:.4}, {:.4}]", min_y, max_y);
    }
    if let Some([x, y, z]) = snapshot.position_of(0) {
        println!("Reference:  ({:.4}, {:.4}, {:.4})", x, y, z);
    }

    Ok(())
}

/// Validate a scenario parameter file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let params = SimulationParams::from_toml_file(path)?;

    let mesh = GridMesh::grid(params.width, params.length, params.resolution)?;
    mesh.validate()?;
    let graph = ConstraintGraph::from_mesh(&mesh)?;

    println!("OK: {path}");
    println!("  particles:   {}", mesh.vertex_count());
    println!("  triangles:   {}", mesh.triangle_count());
    println!("  constraints: {}", graph.len());
    Ok(())
}
