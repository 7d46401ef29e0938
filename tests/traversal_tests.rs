//! Neighborhood traversal, grid distance and line drawing.

use heptile::{
  are_neighbors, cell_from_string, cell_to_children, cell_to_parent, degs_to_rads, geo_to_cell, grid_distance,
  grid_line, grid_line_size, hex_range, hex_ring, k_ring, k_ring_distances, max_k_ring_size, GeoCoord,
};

fn sf_cell(res: i32) -> heptile::CellIndex {
  let p = GeoCoord {
    lat: degs_to_rads(37.779),
    lon: degs_to_rads(-122.419),
  };
  geo_to_cell(&p, res).unwrap()
}

#[test]
fn known_ring_one_has_seven_cells() {
  let cell = cell_from_string("8928308280fffff").unwrap();
  let ring = k_ring(cell, 1).unwrap();
  assert_eq!(ring.len(), 7);
  assert!(ring.contains(&cell));
}

#[test]
fn ring_zero_is_identity() {
  let cell = sf_cell(8);
  assert_eq!(k_ring(cell, 0).unwrap(), vec![cell]);
}

#[test]
fn ring_sizes_within_bound() {
  let cell = sf_cell(6);
  for k in 0..=4 {
    let ring = k_ring(cell, k).unwrap();
    assert!(ring.len() as i64 <= max_k_ring_size(k).unwrap());
  }
}

#[test]
fn pentagon_ring_one_has_six_cells() {
  for pent in heptile::pentagons(4).unwrap() {
    let ring = k_ring(pent, 1).unwrap();
    assert_eq!(ring.len(), 6, "pentagon {pent}");
  }
}

#[test]
fn neighbor_symmetry_across_a_disk() {
  let origin = sf_cell(9);
  for cell in k_ring(origin, 2).unwrap() {
    assert_eq!(are_neighbors(origin, cell), are_neighbors(cell, origin), "cell {cell}");
  }
}

#[test]
fn distances_match_ring_membership() {
  let origin = sf_cell(8);
  for (cell, dist) in k_ring_distances(origin, 3).unwrap() {
    assert_eq!(grid_distance(origin, cell).unwrap(), dist, "cell {cell}");
  }
}

#[test]
fn distance_to_a_cousin_cell() {
  let fine = cell_from_string("8928308280fffff").unwrap();
  let cell = cell_to_parent(fine, 8).unwrap();
  let grandparent = cell_to_parent(fine, 7).unwrap();
  let children = cell_to_children(grandparent, 8).unwrap();

  // a resolution 8 cousin of the origin; close but maybe not adjacent
  let target = children[0];
  let d = grid_distance(cell, target).unwrap();
  assert!((0..=3).contains(&d), "unexpected distance {d}");
  if d == 1 {
    assert!(are_neighbors(cell, target));
  }

  let line = grid_line(cell, target).unwrap();
  assert_eq!(line.len() as i64, grid_line_size(cell, target).unwrap());
  assert_eq!(line.len(), d as usize + 1);
  for w in line.windows(2) {
    assert!(are_neighbors(w[0], w[1]));
  }
}

#[test]
fn line_endpoints_and_steps() {
  let origin = sf_cell(9);
  for target in hex_ring(origin, 3).unwrap() {
    let line = grid_line(origin, target).unwrap();
    assert_eq!(line[0], origin);
    assert_eq!(*line.last().unwrap(), target);
    assert_eq!(line.len(), grid_distance(origin, target).unwrap() as usize + 1);
    for w in line.windows(2) {
      assert!(are_neighbors(w[0], w[1]));
    }
  }
}

#[test]
fn distance_is_symmetric_and_zero_on_self() {
  let origin = sf_cell(7);
  assert_eq!(grid_distance(origin, origin).unwrap(), 0);

  for cell in k_ring(origin, 2).unwrap() {
    let forward = grid_distance(origin, cell);
    let backward = grid_distance(cell, origin);
    if let (Ok(f), Ok(b)) = (forward, backward) {
      assert_eq!(f, b, "cell {cell}");
    }
  }
}

#[test]
fn spiral_and_bfs_agree_far_from_pentagons() {
  let origin = sf_cell(7);
  let mut spiral = hex_range(origin, 3).unwrap();
  let mut bfs = k_ring(origin, 3).unwrap();
  spiral.sort_unstable();
  bfs.sort_unstable();
  assert_eq!(spiral, bfs);
}

#[test]
fn hollow_rings_partition_the_disk() {
  let origin = sf_cell(8);
  let disk = k_ring(origin, 2).unwrap();
  let mut reassembled = vec![origin];
  reassembled.extend(hex_ring(origin, 1).unwrap());
  reassembled.extend(hex_ring(origin, 2).unwrap());

  let mut disk = disk;
  disk.sort_unstable();
  reassembled.sort_unstable();
  assert_eq!(disk, reassembled);
}
