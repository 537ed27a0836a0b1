//! Integration tests for drape-mesh.

use drape_mesh::normals::compute_vertex_normals;
use drape_mesh::topology::{grid_indices, structural_edges};
use drape_mesh::GridMesh;

// ─── Grid Construction Tests ──────────────────────────────────

#[test]
fn grid_2x2_counts() {
    let mesh = GridMesh::grid(2, 2, 1).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.edges.len(), 4);
}

#[test]
fn grid_3x3_counts() {
    let mesh = GridMesh::grid(3, 3, 1).unwrap();
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 8);
    // 2*W*L - W - L interior edges
    assert_eq!(mesh.edges.len(), 2 * 9 - 3 - 3);
}

#[test]
fn grid_resolution_scales_both_dimensions() {
    let mesh = GridMesh::grid(2, 2, 2).unwrap();
    assert_eq!(mesh.width, 4);
    assert_eq!(mesh.length, 4);
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.edges.len(), 2 * 16 - 4 - 4);
}

#[test]
fn grid_rejects_zero_resolution() {
    assert!(GridMesh::grid(2, 2, 0).is_err());
}

#[test]
fn grid_rejects_degenerate_dimensions() {
    assert!(GridMesh::grid(1, 5, 1).is_err());
    assert!(GridMesh::grid(5, 0, 1).is_err());
}

#[test]
fn grid_has_unit_spacing() {
    let mesh = GridMesh::grid(4, 3, 1).unwrap();
    for &[a, b] in &mesh.edges {
        let (a, b) = (a as usize, b as usize);
        let dx = mesh.pos_x[b] - mesh.pos_x[a];
        let dy = mesh.pos_y[b] - mesh.pos_y[a];
        let dz = mesh.pos_z[b] - mesh.pos_z[a];
        let dist = (dx * dx + dy * dy + dz * dz).sqrt();
        assert!((dist - 1.0).abs() < 1e-6, "edge ({a}, {b}) length {dist}");
    }
}

#[test]
fn index_at_is_row_major() {
    let mesh = GridMesh::grid(4, 3, 1).unwrap();
    assert_eq!(mesh.index_at(0, 0), 0);
    assert_eq!(mesh.index_at(3, 0), 3);
    assert_eq!(mesh.index_at(0, 1), 4);
    assert_eq!(mesh.index_at(2, 2), 10);
}

#[test]
fn validate_ok() {
    let mesh = GridMesh::grid(5, 4, 1).unwrap();
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = GridMesh::grid(2, 2, 1).unwrap();
    mesh.indices[0] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_degenerate_triangle() {
    let mut mesh = GridMesh::grid(2, 2, 1).unwrap();
    mesh.indices[1] = mesh.indices[0];
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_duplicate_edge() {
    let mut mesh = GridMesh::grid(2, 2, 1).unwrap();
    let first = mesh.edges[0];
    mesh.edges.push([first[1], first[0]]);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_self_edge() {
    let mut mesh = GridMesh::grid(2, 2, 1).unwrap();
    mesh.edges[0] = [1, 1];
    assert!(mesh.validate().is_err());
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn edges_emitted_in_relaxation_order() {
    // Horizontal before vertical per cell, row-major
    let edges = structural_edges(2, 2);
    assert_eq!(edges, vec![[0, 1], [0, 2], [1, 3], [2, 3]]);
}

#[test]
fn edges_skip_right_and_bottom_boundaries() {
    let edges = structural_edges(3, 2);
    // Row 0: (0,1) (0,3) (1,2) (1,4) (2,5); row 1: (3,4) (4,5)
    assert_eq!(
        edges,
        vec![[0, 1], [0, 3], [1, 2], [1, 4], [2, 5], [3, 4], [4, 5]]
    );
}

#[test]
fn grid_indices_two_triangles_per_cell() {
    let indices = grid_indices(2, 2);
    assert_eq!(indices, vec![0, 1, 2, 2, 1, 3]);
}

#[test]
fn grid_indices_skip_first_row_and_column() {
    let indices = grid_indices(3, 3);
    assert_eq!(indices.len() / 3, 8);
    // First cell references the top-left quad only
    assert_eq!(&indices[0..6], &[0, 1, 3, 3, 1, 4]);
}

// ─── Normal Tests ─────────────────────────────────────────────

fn normals_of(mesh: &GridMesh) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
    let n = mesh.vertex_count();
    let mut nx = vec![0.0; n];
    let mut ny = vec![0.0; n];
    let mut nz = vec![0.0; n];
    compute_vertex_normals(
        &mesh.indices,
        &mesh.pos_x,
        &mesh.pos_y,
        &mesh.pos_z,
        &mut nx,
        &mut ny,
        &mut nz,
    );
    (nx, ny, nz)
}

#[test]
fn flat_grid_normals_point_along_negative_z() {
    let mesh = GridMesh::grid(3, 3, 1).unwrap();
    let (nx, ny, nz) = normals_of(&mesh);
    for i in 0..mesh.vertex_count() {
        assert!(nx[i].abs() < 1e-6);
        assert!(ny[i].abs() < 1e-6);
        assert!((nz[i] - (-1.0)).abs() < 1e-6, "vertex {i}: nz = {}", nz[i]);
    }
}

#[test]
fn normals_are_unit_length_on_bent_surface() {
    let mut mesh = GridMesh::grid(4, 4, 1).unwrap();
    // Lift one interior vertex out of the plane
    let i = mesh.index_at(1, 2);
    mesh.pos_z[i] = 0.7;

    let (nx, ny, nz) = normals_of(&mesh);
    for i in 0..mesh.vertex_count() {
        let len = (nx[i] * nx[i] + ny[i] * ny[i] + nz[i] * nz[i]).sqrt();
        assert!((len - 1.0).abs() < 1e-5, "vertex {i}: |n| = {len}");
    }
}

#[test]
fn normal_recomputation_is_idempotent() {
    let mut mesh = GridMesh::grid(3, 4, 1).unwrap();
    mesh.pos_z[4] = 0.3;

    let (nx1, ny1, nz1) = normals_of(&mesh);
    let (nx2, ny2, nz2) = normals_of(&mesh);
    assert_eq!(nx1, nx2);
    assert_eq!(ny1, ny2);
    assert_eq!(nz1, nz2);
}

#[test]
fn isolated_vertex_keeps_zero_normal() {
    // A single triangle plus a vertex no face touches
    let indices = vec![0, 1, 2];
    let pos_x = vec![0.0, 1.0, 0.0, 5.0];
    let pos_y = vec![0.0, 0.0, 1.0, 5.0];
    let pos_z = vec![0.0, 0.0, 0.0, 5.0];
    let mut nx = vec![9.0; 4];
    let mut ny = vec![9.0; 4];
    let mut nz = vec![9.0; 4];
    compute_vertex_normals(&indices, &pos_x, &pos_y, &pos_z, &mut nx, &mut ny, &mut nz);

    assert_eq!((nx[3], ny[3], nz[3]), (0.0, 0.0, 0.0));
    let len = (nx[0] * nx[0] + ny[0] * ny[0] + nz[0] * nz[0]).sqrt();
    assert!((len - 1.0).abs() < 1e-6);
}
