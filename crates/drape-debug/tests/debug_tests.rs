//! Integration tests for drape-debug.

use drape_debug::StateSnapshot;
use drape_mesh::GridMesh;
use drape_solver::SurfaceState;

fn test_state() -> SurfaceState {
    let mesh = GridMesh::grid(2, 2, 1).unwrap();
    let mut state = SurfaceState::from_mesh(&mesh, 1.0, vec![false; 4]).unwrap();
    state.vel_y[2] = -3.0;
    state
}

#[test]
fn snapshot_captures_state() {
    let state = test_state();
    let snapshot = StateSnapshot::from_state(42, 0.7, &state);

    assert_eq!(snapshot.timestep, 42);
    assert_eq!(snapshot.particle_count, 4);
    assert_eq!(snapshot.positions.len(), 12);
    assert_eq!(snapshot.velocities.len(), 12);
    assert_eq!(snapshot.position_of(0), Some([1.0, 1.0, 0.0]));
    assert_eq!(snapshot.velocity_of(2), Some([0.0, -3.0, 0.0]));
}

#[test]
fn point_queries_check_bounds() {
    let snapshot = StateSnapshot::from_state(0, 0.0, &test_state());
    assert!(snapshot.position_of(3).is_some());
    assert!(snapshot.position_of(4).is_none());
    assert!(snapshot.velocity_of(4).is_none());
}

#[test]
fn y_range_spans_the_grid() {
    let snapshot = StateSnapshot::from_state(0, 0.0, &test_state());
    let (min_y, max_y) = snapshot.y_range().unwrap();
    assert_eq!(min_y, 0.0);
    assert_eq!(max_y, 1.0);
}

#[test]
fn binary_round_trip() {
    let snapshot = StateSnapshot::from_state(9, 1.25, &test_state());
    let bytes = snapshot.to_bytes().unwrap();
    let restored = StateSnapshot::from_bytes(&bytes).unwrap();

    assert_eq!(restored.timestep, 9);
    assert_eq!(restored.sim_time, 1.25);
    assert_eq!(restored.positions, snapshot.positions);
    assert_eq!(restored.velocities, snapshot.velocities);
}

#[test]
fn from_bytes_rejects_garbage() {
    assert!(StateSnapshot::from_bytes(&[1, 2, 3]).is_err());
}
